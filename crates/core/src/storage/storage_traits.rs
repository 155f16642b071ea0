use async_trait::async_trait;

use crate::errors::Result;
use crate::goals::Goal;
use crate::progress::Progress;
use crate::settings::UserPreferences;
use crate::users::User;

/// Storage usage report
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StorageInfo {
    /// Bytes of encoded text currently stored across all buckets
    pub used: u64,
    /// Nominal capacity of the backing store, in bytes
    pub total: u64,
}

/// The persistence gateway: five named buckets of JSON-encoded records.
///
/// Each save fully replaces the bucket's prior value. Loads of absent buckets
/// return the bucket's default (`None`, an empty collection, or `false`)
/// rather than failing. There is no transactional guarantee spanning
/// buckets; saves to different buckets are independent operations.
#[async_trait]
pub trait StorageRepositoryTrait: Send + Sync {
    fn load_user(&self) -> Result<Option<User>>;
    async fn save_user(&self, user: &User) -> Result<()>;

    fn load_goals(&self) -> Result<Vec<Goal>>;
    async fn save_goals(&self, goals: &[Goal]) -> Result<()>;

    fn load_progress(&self) -> Result<Option<Progress>>;
    async fn save_progress(&self, progress: &Progress) -> Result<()>;

    fn load_preferences(&self) -> Result<Option<UserPreferences>>;
    async fn save_preferences(&self, preferences: &UserPreferences) -> Result<()>;

    fn is_onboarding_completed(&self) -> Result<bool>;
    async fn set_onboarding_completed(&self) -> Result<()>;

    /// Remove every bucket in one logical operation. On failure no caller
    /// may be left believing a partial clear succeeded.
    async fn clear_all(&self) -> Result<()>;

    /// Current storage usage across all buckets.
    fn storage_info(&self) -> Result<StorageInfo>;
}
