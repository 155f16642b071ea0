//! Storage module - the persistence gateway trait.
//!
//! The concrete implementation lives in the `storage-sqlite` crate; this
//! crate only programs against the trait.

mod storage_traits;

pub use storage_traits::{StorageInfo, StorageRepositoryTrait};
