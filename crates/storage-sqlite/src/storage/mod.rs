mod model;
mod repository;

pub use model::StorageEntryDB;
pub use repository::SqliteStorageRepository;
