//! Storage-specific error types for SQLite operations.
//!
//! This module provides error types that wrap Diesel-specific errors and
//! convert them to the database-agnostic error types defined in
//! `lifepath_core`.

use diesel::result::Error as DieselError;
use lifepath_core::errors::{Error, StorageError};
use thiserror::Error;

/// Storage-specific errors that wrap Diesel and r2d2 types.
///
/// These errors are internal to the storage layer and are converted to
/// `lifepath_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum SqliteStorageError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(#[from] diesel::ConnectionError),

    #[error("Connection pool error: {0}")]
    PoolError(#[from] r2d2::Error),

    #[error("Query execution failed: {0}")]
    QueryFailed(#[from] DieselError),
}

impl From<SqliteStorageError> for Error {
    fn from(err: SqliteStorageError) -> Self {
        match err {
            SqliteStorageError::ConnectionFailed(e) => {
                Error::Storage(StorageError::ConnectionFailed(e.to_string()))
            }
            SqliteStorageError::PoolError(e) => {
                Error::Storage(StorageError::ConnectionFailed(e.to_string()))
            }
            SqliteStorageError::QueryFailed(e) => {
                Error::Storage(StorageError::WriteFailed(e.to_string()))
            }
        }
    }
}

/// Extension trait for converting Diesel results to core results.
///
/// Orphan rules prevent `From<DieselError> for Error`, so reads and writes
/// pick the matching storage variant explicitly.
pub trait IntoCore<T> {
    /// Treat a failure as a failed storage read.
    fn into_read_error(self) -> lifepath_core::Result<T>;

    /// Treat a failure as a failed storage write.
    fn into_write_error(self) -> lifepath_core::Result<T>;
}

impl<T> IntoCore<T> for std::result::Result<T, DieselError> {
    fn into_read_error(self) -> lifepath_core::Result<T> {
        self.map_err(|e| StorageError::ReadFailed(e.to_string()).into())
    }

    fn into_write_error(self) -> lifepath_core::Result<T> {
        self.map_err(|e| StorageError::WriteFailed(e.to_string()).into())
    }
}
