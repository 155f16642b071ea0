use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LANGUAGE, DEFAULT_REMINDER_TIME};
use crate::errors::{Result, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrivacyLevel {
    Public,
    Private,
    Friends,
}

/// Pure configuration record for the local account.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub theme: Theme,
    pub notifications: bool,
    /// Daily reminder time as an HH:MM string
    pub reminder_time: String,
    pub language: String,
    pub privacy_level: PrivacyLevel,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            notifications: true,
            reminder_time: DEFAULT_REMINDER_TIME.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            privacy_level: PrivacyLevel::Private,
        }
    }
}

impl UserPreferences {
    /// Check the record's field-level invariants.
    pub fn validate(&self) -> Result<()> {
        if NaiveTime::parse_from_str(&self.reminder_time, "%H:%M").is_err() {
            return Err(ValidationError::InvalidReminderTime(self.reminder_time.clone()).into());
        }
        if self.language.trim().is_empty() {
            return Err(ValidationError::MissingField("language".to_string()).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_onboarding_setup() {
        let preferences = UserPreferences::default();
        assert_eq!(preferences.theme, Theme::Light);
        assert!(preferences.notifications);
        assert_eq!(preferences.reminder_time, "09:00");
        assert_eq!(preferences.language, "en");
        assert_eq!(preferences.privacy_level, PrivacyLevel::Private);
    }

    #[test]
    fn validate_accepts_wall_clock_reminder_times() {
        let mut preferences = UserPreferences::default();
        preferences.reminder_time = "18:30".to_string();
        assert!(preferences.validate().is_ok());
    }

    #[test]
    fn validate_rejects_malformed_reminder_times() {
        let mut preferences = UserPreferences::default();
        preferences.reminder_time = "9am".to_string();
        assert!(preferences.validate().is_err());
    }

    #[test]
    fn serializes_enums_lowercase() {
        let json = serde_json::to_string(&UserPreferences::default()).unwrap();
        assert!(json.contains("\"theme\":\"light\""));
        assert!(json.contains("\"privacyLevel\":\"private\""));
        assert!(json.contains("\"reminderTime\":\"09:00\""));
    }
}
