use async_trait::async_trait;
use diesel::prelude::*;
use log::{debug, error};
use std::sync::Arc;

use super::model::StorageEntryDB;
use crate::db::{get_connection, DbPool};
use crate::errors::IntoCore;
use crate::schema::app_storage::dsl::*;

use lifepath_core::constants::{
    ALL_STORAGE_KEYS, APP_PREFERENCES_KEY, GOALS_DATA_KEY, ONBOARDING_COMPLETED_KEY,
    ONBOARDING_COMPLETED_SENTINEL, PROGRESS_DATA_KEY, USER_DATA_KEY,
};
use lifepath_core::errors::{Result, StorageError};
use lifepath_core::goals::Goal;
use lifepath_core::progress::Progress;
use lifepath_core::settings::UserPreferences;
use lifepath_core::storage::{StorageInfo, StorageRepositoryTrait};
use lifepath_core::users::User;

/// Nominal capacity reported by `storage_info`
const STORAGE_CAPACITY_BYTES: u64 = 50 * 1024 * 1024;

/// Persistence gateway over the `app_storage` key-value table.
///
/// Every bucket is one row holding JSON text; saves replace the whole row.
/// Writes to different buckets are independent operations with no shared
/// transaction, so concurrent saves are last-write-wins per key.
pub struct SqliteStorageRepository {
    pool: Arc<DbPool>,
}

impl SqliteStorageRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        SqliteStorageRepository { pool }
    }

    fn get_text(&self, key: &str) -> Result<Option<String>> {
        let mut conn = get_connection(&self.pool)?;
        let result = app_storage
            .filter(storage_key.eq(key))
            .select(storage_value)
            .first::<String>(&mut conn);

        match result {
            Ok(text) => Ok(Some(text)),
            Err(diesel::result::Error::NotFound) => Ok(None),
            Err(e) => Err(StorageError::ReadFailed(e.to_string()).into()),
        }
    }

    fn set_text(&self, key: &str, value: String) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        diesel::replace_into(app_storage)
            .values(&StorageEntryDB {
                storage_key: key.to_string(),
                storage_value: value,
            })
            .execute(&mut conn)
            .into_write_error()?;
        Ok(())
    }

    /// Decode a bucket's JSON text. Corrupted text is treated as "no data":
    /// the condition is logged and the caller gets the bucket default.
    fn load_json<T: serde::de::DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get_text(key)? {
            Some(text) => match serde_json::from_str(&text) {
                Ok(value) => Ok(Some(value)),
                Err(e) => {
                    error!("Stored data under '{}' is corrupted, resetting to default: {}", key, e);
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    fn save_json<T: serde::Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let text = serde_json::to_string(value)
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        self.set_text(key, text)
    }
}

#[async_trait]
impl StorageRepositoryTrait for SqliteStorageRepository {
    fn load_user(&self) -> Result<Option<User>> {
        self.load_json(USER_DATA_KEY)
    }

    async fn save_user(&self, user: &User) -> Result<()> {
        self.save_json(USER_DATA_KEY, user)
    }

    fn load_goals(&self) -> Result<Vec<Goal>> {
        Ok(self.load_json(GOALS_DATA_KEY)?.unwrap_or_default())
    }

    async fn save_goals(&self, goals: &[Goal]) -> Result<()> {
        self.save_json(GOALS_DATA_KEY, &goals)
    }

    fn load_progress(&self) -> Result<Option<Progress>> {
        self.load_json(PROGRESS_DATA_KEY)
    }

    async fn save_progress(&self, progress: &Progress) -> Result<()> {
        self.save_json(PROGRESS_DATA_KEY, progress)
    }

    fn load_preferences(&self) -> Result<Option<UserPreferences>> {
        self.load_json(APP_PREFERENCES_KEY)
    }

    async fn save_preferences(&self, preferences: &UserPreferences) -> Result<()> {
        self.save_json(APP_PREFERENCES_KEY, preferences)
    }

    fn is_onboarding_completed(&self) -> Result<bool> {
        Ok(self
            .get_text(ONBOARDING_COMPLETED_KEY)?
            .map(|v| v == ONBOARDING_COMPLETED_SENTINEL)
            .unwrap_or(false))
    }

    async fn set_onboarding_completed(&self) -> Result<()> {
        self.set_text(
            ONBOARDING_COMPLETED_KEY,
            ONBOARDING_COMPLETED_SENTINEL.to_string(),
        )
    }

    async fn clear_all(&self) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::delete(app_storage.filter(storage_key.eq_any(ALL_STORAGE_KEYS)))
                .execute(conn)?;
            Ok(())
        })
        .into_write_error()?;

        debug!("Cleared all storage buckets");
        Ok(())
    }

    fn storage_info(&self) -> Result<StorageInfo> {
        let mut conn = get_connection(&self.pool)?;
        let values = app_storage
            .select(storage_value)
            .load::<String>(&mut conn)
            .into_read_error()?;

        Ok(StorageInfo {
            used: values.iter().map(|v| v.len() as u64).sum(),
            total: STORAGE_CAPACITY_BYTES,
        })
    }
}
