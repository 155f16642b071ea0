/// Storage key for the user record bucket
pub const USER_DATA_KEY: &str = "user_data";

/// Storage key for the goal collection bucket
pub const GOALS_DATA_KEY: &str = "goals_data";

/// Storage key for the progress snapshot bucket
pub const PROGRESS_DATA_KEY: &str = "progress_data";

/// Storage key for the preferences bucket
pub const APP_PREFERENCES_KEY: &str = "app_preferences";

/// Storage key for the onboarding-completed flag
pub const ONBOARDING_COMPLETED_KEY: &str = "onboarding_completed";

/// Sentinel value stored under the onboarding flag key
pub const ONBOARDING_COMPLETED_SENTINEL: &str = "true";

/// All bucket keys, in the order they are cleared
pub const ALL_STORAGE_KEYS: [&str; 5] = [
    USER_DATA_KEY,
    GOALS_DATA_KEY,
    PROGRESS_DATA_KEY,
    APP_PREFERENCES_KEY,
    ONBOARDING_COMPLETED_KEY,
];

/// Default daily reminder time
pub const DEFAULT_REMINDER_TIME: &str = "09:00";

/// Default language tag
pub const DEFAULT_LANGUAGE: &str = "en";

/// Display name used when onboarding finishes without a name
pub const DEFAULT_USER_NAME: &str = "User";

pub const MOTIVATIONAL_QUOTES: [&str; 8] = [
    "The only way to do great work is to love what you do. - Steve Jobs",
    "Success is not final, failure is not fatal: it is the courage to continue that counts. - Winston Churchill",
    "The future belongs to those who believe in the beauty of their dreams. - Eleanor Roosevelt",
    "Don't watch the clock; do what it does. Keep going. - Sam Levenson",
    "The only limit to our realization of tomorrow is our doubts of today. - Franklin D. Roosevelt",
    "It always seems impossible until it's done. - Nelson Mandela",
    "The way to get started is to quit talking and begin doing. - Walt Disney",
    "Your time is limited, don't waste it living someone else's life. - Steve Jobs",
];
