use std::sync::Arc;

use lifepath_core::context::ServiceContext;
use lifepath_core::errors::Result;

use crate::db;
use crate::storage::SqliteStorageRepository;

/// Composition root: open (or create) the database under `app_data_dir`,
/// run pending migrations, and wire the service context over the SQLite
/// gateway.
pub fn initialize_context(app_data_dir: &str) -> Result<ServiceContext> {
    let db_path = db::init(app_data_dir)?;
    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;

    let storage = Arc::new(SqliteStorageRepository::new(pool));
    Ok(ServiceContext::new(storage))
}
