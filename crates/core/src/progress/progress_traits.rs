use crate::errors::Result;
use crate::progress::progress_model::Progress;
use async_trait::async_trait;

/// Trait for progress snapshot operations
#[async_trait]
pub trait ProgressServiceTrait: Send + Sync {
    /// Load the stored snapshot, `None` when nothing was ever saved.
    fn get_progress(&self) -> Result<Option<Progress>>;

    /// Replace the stored snapshot.
    async fn update_progress(&self, progress: Progress) -> Result<()>;

    /// Recompute the goal counters from the goal collection and persist the
    /// refreshed snapshot.
    async fn refresh_progress(&self) -> Result<Progress>;
}
