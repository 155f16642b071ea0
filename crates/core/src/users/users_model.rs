//! User domain models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::DEFAULT_USER_NAME;
use crate::goals::Goal;
use crate::progress::Progress;
use crate::settings::UserPreferences;

/// The single local account.
///
/// Exactly one user record exists at a time. The embedded goal lists are a
/// denormalized view; the goals bucket is the canonical home of every goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub interests: Vec<String>,
    pub current_goals: Vec<Goal>,
    pub completed_goals: Vec<Goal>,
    pub progress: Progress,
    pub preferences: UserPreferences,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input collected by the onboarding flow
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub interests: Vec<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl User {
    /// Synthesize a first-time user record at the end of onboarding.
    ///
    /// This is the only path that creates a user from scratch: fresh id,
    /// empty goal lists, zeroed progress snapshot, default preferences. A
    /// blank name falls back to a placeholder.
    pub fn from_onboarding(profile: NewUser) -> Self {
        let now = Utc::now();
        let name = if profile.name.trim().is_empty() {
            DEFAULT_USER_NAME.to_string()
        } else {
            profile.name
        };

        User {
            id: Uuid::new_v4().to_string(),
            name,
            email: profile.email,
            avatar: profile.avatar,
            date_of_birth: profile.date_of_birth,
            interests: profile.interests,
            current_goals: Vec::new(),
            completed_goals: Vec::new(),
            progress: Progress::default(),
            preferences: UserPreferences::default(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Theme;

    #[test]
    fn onboarding_assembles_a_fresh_record() {
        let user = User::from_onboarding(NewUser {
            name: "Ada".to_string(),
            interests: vec!["Technology".to_string(), "Science".to_string()],
            ..NewUser::default()
        });

        assert!(!user.id.is_empty());
        assert_eq!(user.name, "Ada");
        assert_eq!(user.interests, vec!["Technology", "Science"]);
        assert!(user.current_goals.is_empty());
        assert!(user.completed_goals.is_empty());
        assert_eq!(user.progress.total_goals, 0);
        assert_eq!(user.preferences.theme, Theme::Light);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn blank_name_falls_back_to_placeholder() {
        let user = User::from_onboarding(NewUser {
            name: "   ".to_string(),
            ..NewUser::default()
        });
        assert_eq!(user.name, "User");
    }

    #[test]
    fn onboarded_users_get_distinct_ids() {
        let a = User::from_onboarding(NewUser::default());
        let b = User::from_onboarding(NewUser::default());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_string(&User::from_onboarding(NewUser::default())).unwrap();
        assert!(json.contains("\"dateOfBirth\""));
        assert!(json.contains("\"currentGoals\""));
        assert!(json.contains("\"completedGoals\""));
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"updatedAt\""));
    }
}
