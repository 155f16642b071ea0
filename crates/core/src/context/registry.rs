use std::sync::{Arc, RwLock};

use crate::errors::Result;
use crate::goals::{GoalService, GoalServiceTrait};
use crate::progress::{ProgressService, ProgressServiceTrait};
use crate::settings::{SettingsService, SettingsServiceTrait};
use crate::storage::StorageRepositoryTrait;
use crate::users::{NewUser, User, UserService, UserServiceTrait};

/// Mutable per-session application state.
///
/// Persistence failures surface here as the single optional error message;
/// the UI layer displays and clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub is_onboarding_completed: bool,
    pub error: Option<String>,
}

/// Explicit application-state container.
///
/// Owns the domain services over an injected storage gateway plus the
/// session state. Constructed once at startup and passed by reference to
/// whatever needs it; `logout` is the teardown path.
pub struct ServiceContext {
    storage: Arc<dyn StorageRepositoryTrait>,

    // Services
    pub user_service: Arc<dyn UserServiceTrait>,
    pub goal_service: Arc<dyn GoalServiceTrait>,
    pub progress_service: Arc<dyn ProgressServiceTrait>,
    pub settings_service: Arc<dyn SettingsServiceTrait>,

    state: RwLock<SessionState>,
}

impl ServiceContext {
    pub fn new(storage: Arc<dyn StorageRepositoryTrait>) -> Self {
        ServiceContext {
            user_service: Arc::new(UserService::new(storage.clone())),
            goal_service: Arc::new(GoalService::new(storage.clone())),
            progress_service: Arc::new(ProgressService::new(storage.clone())),
            settings_service: Arc::new(SettingsService::new(storage.clone())),
            storage,
            state: RwLock::new(SessionState::default()),
        }
    }

    pub fn user_service(&self) -> Arc<dyn UserServiceTrait> {
        Arc::clone(&self.user_service)
    }

    pub fn goal_service(&self) -> Arc<dyn GoalServiceTrait> {
        Arc::clone(&self.goal_service)
    }

    pub fn progress_service(&self) -> Arc<dyn ProgressServiceTrait> {
        Arc::clone(&self.progress_service)
    }

    pub fn settings_service(&self) -> Arc<dyn SettingsServiceTrait> {
        Arc::clone(&self.settings_service)
    }

    /// Snapshot of the current session state.
    pub fn state(&self) -> SessionState {
        self.state.read().unwrap().clone()
    }

    /// Read the onboarding flag and, when completed, the stored user.
    ///
    /// Replaces the whole session state; a storage failure lands in the
    /// error field and leaves the session logged out.
    pub fn load_initial_state(&self) {
        let loaded = (|| -> Result<SessionState> {
            let is_onboarding_completed = self.storage.is_onboarding_completed()?;
            let user = if is_onboarding_completed {
                self.storage.load_user()?
            } else {
                None
            };
            Ok(SessionState {
                user,
                is_onboarding_completed,
                error: None,
            })
        })();

        let mut state = self.state.write().unwrap();
        *state = loaded.unwrap_or_else(|e| SessionState {
            user: None,
            is_onboarding_completed: false,
            error: Some(e.to_string()),
        });
    }

    /// Assemble and persist the first-time user, then mark the session as
    /// onboarded.
    pub async fn complete_onboarding(&self, profile: NewUser) {
        match self.user_service.complete_onboarding(profile).await {
            Ok(user) => {
                let mut state = self.state.write().unwrap();
                state.user = Some(user);
                state.is_onboarding_completed = true;
            }
            Err(e) => self.record_error(e.to_string()),
        }
    }

    /// Persist profile changes and refresh the in-memory user.
    pub async fn update_user(&self, user: User) {
        match self.user_service.update_user(user).await {
            Ok(user) => {
                let mut state = self.state.write().unwrap();
                state.user = Some(user);
            }
            Err(e) => self.record_error(e.to_string()),
        }
    }

    /// Clear every storage bucket and tear the session state down.
    pub async fn logout(&self) {
        match self.storage.clear_all().await {
            Ok(()) => {
                let mut state = self.state.write().unwrap();
                *state = SessionState::default();
            }
            Err(e) => self.record_error(e.to_string()),
        }
    }

    pub fn clear_error(&self) {
        self.state.write().unwrap().error = None;
    }

    fn record_error(&self, message: String) {
        self.state.write().unwrap().error = Some(message);
    }
}
