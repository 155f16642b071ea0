//! Core error types for the LifePath application.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application.
///
/// Storage-specific errors are wrapped in string form to keep this type
/// database-agnostic.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage operation failed: {0}")]
    Storage(#[from] StorageError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Record not found: {0}")]
    NotFound(String),
}

/// Database-agnostic error type for storage operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert storage-specific errors (Diesel, SQLite, etc.) into this format.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to storage: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create storage pool: {0}")]
    PoolCreationFailed(String),

    /// A write to device storage failed. Surfaced to the caller, not retried.
    #[error("Failed to write to storage: {0}")]
    WriteFailed(String),

    /// A read from device storage failed.
    #[error("Failed to read from storage: {0}")]
    ReadFailed(String),

    /// Stored text under a key failed to parse as valid JSON.
    #[error("Stored data under '{key}' is corrupted: {detail}")]
    Corrupted { key: String, detail: String },

    /// Storage migration failed.
    #[error("Storage migration failed: {0}")]
    MigrationFailed(String),
}

/// Errors raised when a form or domain invariant is violated.
///
/// Handled locally at the point of entry, never persisted.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Invalid reminder time '{0}', expected HH:MM")]
    InvalidReminderTime(String),
}
