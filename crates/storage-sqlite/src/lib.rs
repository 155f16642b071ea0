//! SQLite storage implementation for LifePath.
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. It implements the storage gateway trait defined in `lifepath-core`
//! over a single key-value table (`app_storage`), with each bucket stored as
//! JSON text under a stable string key, and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The gateway repository implementation
//! - The composition root that wires the service context

pub mod context;
pub mod db;
pub mod errors;
pub mod schema;
pub mod storage;

// Re-export database utilities
pub use db::{create_pool, get_connection, get_db_path, init, run_migrations, DbConnection, DbPool};

// Re-export the composition root and gateway
pub use context::initialize_context;
pub use storage::SqliteStorageRepository;

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, SqliteStorageError};

// Re-export from lifepath-core for convenience
pub use lifepath_core::errors::{Error, Result, StorageError};
