use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use std::sync::Arc;

use crate::errors::{Result, ValidationError};
use crate::storage::StorageRepositoryTrait;
use crate::users::users_model::{NewUser, User};
use crate::users::users_traits::UserServiceTrait;
use crate::utils::is_valid_email;

pub struct UserService {
    storage: Arc<dyn StorageRepositoryTrait>,
}

impl UserService {
    pub fn new(storage: Arc<dyn StorageRepositoryTrait>) -> Self {
        UserService { storage }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    fn get_user(&self) -> Result<Option<User>> {
        self.storage.load_user()
    }

    async fn update_user(&self, user: User) -> Result<User> {
        if let Some(email) = user.email.as_deref() {
            if !email.is_empty() && !is_valid_email(email) {
                return Err(ValidationError::InvalidEmail(email.to_string()).into());
            }
        }

        let mut user = user;
        user.updated_at = Utc::now();
        self.storage.save_user(&user).await?;
        Ok(user)
    }

    async fn complete_onboarding(&self, profile: NewUser) -> Result<User> {
        let user = User::from_onboarding(profile);

        // Two independent best-effort writes; there is no atomicity between
        // buckets. A failure after the first leaves the flag unset, and the
        // next startup treats the account as not yet onboarded.
        self.storage.save_user(&user).await?;
        self.storage.set_onboarding_completed().await?;

        debug!("Onboarding completed for user {}", user.id);
        Ok(user)
    }
}
