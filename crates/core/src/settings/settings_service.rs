use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::Result;
use crate::settings::settings_model::UserPreferences;
use crate::storage::StorageRepositoryTrait;

/// Trait for preference operations
#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    /// Stored preferences, or the defaults when nothing was ever saved.
    fn get_preferences(&self) -> Result<UserPreferences>;

    async fn update_preferences(&self, preferences: &UserPreferences) -> Result<()>;
}

pub struct SettingsService {
    storage: Arc<dyn StorageRepositoryTrait>,
}

impl SettingsService {
    pub fn new(storage: Arc<dyn StorageRepositoryTrait>) -> Self {
        SettingsService { storage }
    }
}

#[async_trait]
impl SettingsServiceTrait for SettingsService {
    fn get_preferences(&self) -> Result<UserPreferences> {
        Ok(self.storage.load_preferences()?.unwrap_or_default())
    }

    async fn update_preferences(&self, preferences: &UserPreferences) -> Result<()> {
        preferences.validate()?;
        self.storage.save_preferences(preferences).await
    }
}
