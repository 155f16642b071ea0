use crate::errors::Result;
use crate::users::users_model::{NewUser, User};
use async_trait::async_trait;

/// Trait for user account operations
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    /// The local user record, `None` before onboarding completes.
    fn get_user(&self) -> Result<Option<User>>;

    /// Persist profile changes, bumping the update timestamp.
    async fn update_user(&self, user: User) -> Result<User>;

    /// Assemble and persist the first-time user record, then mark
    /// onboarding as completed.
    async fn complete_onboarding(&self, profile: NewUser) -> Result<User>;
}
