pub mod settings_model;
pub mod settings_service;

pub use settings_model::{PrivacyLevel, Theme, UserPreferences};
pub use settings_service::{SettingsService, SettingsServiceTrait};
