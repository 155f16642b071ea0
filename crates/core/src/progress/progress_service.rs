use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::errors::Result;
use crate::progress::progress_model::Progress;
use crate::progress::progress_traits::ProgressServiceTrait;
use crate::storage::StorageRepositoryTrait;

pub struct ProgressService {
    storage: Arc<dyn StorageRepositoryTrait>,
}

impl ProgressService {
    pub fn new(storage: Arc<dyn StorageRepositoryTrait>) -> Self {
        ProgressService { storage }
    }
}

#[async_trait]
impl ProgressServiceTrait for ProgressService {
    fn get_progress(&self) -> Result<Option<Progress>> {
        self.storage.load_progress()
    }

    async fn update_progress(&self, progress: Progress) -> Result<()> {
        self.storage.save_progress(&progress).await
    }

    async fn refresh_progress(&self) -> Result<Progress> {
        let goals = self.storage.load_goals()?;
        let mut progress = self.storage.load_progress()?.unwrap_or_default();
        progress.recalculate_from(&goals);
        self.storage.save_progress(&progress).await?;

        debug!(
            "Refreshed progress snapshot: {}/{} goals completed",
            progress.completed_goals, progress.total_goals
        );
        Ok(progress)
    }
}
