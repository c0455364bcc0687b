//! Persistence layer - keeps a snapshot of the store in a key-value blob store.
//!
//! The [`BlobStore`] contract is deliberately tiny: get a string by key, set a string
//! by key. [`PersistenceBridge`] owns one blob store and one key, loads the store
//! from it at startup and writes the full sequence back after every mutation.

/// Load/save coordination between the store and a blob store
pub mod bridge;
/// Directory-of-files blob store
pub mod file;
/// In-process blob store
pub mod memory;
/// JSON snapshot encoding of the transaction sequence
pub mod snapshot;
/// `SQLite` blob store backed by `SeaORM`
pub mod sqlite;

pub use bridge::{DEFAULT_BLOB_KEY, LoadOutcome, PersistenceBridge};
pub use file::FileBlobStore;
pub use memory::MemoryBlobStore;
pub use sqlite::SqliteBlobStore;

use crate::{
    config::{
        app::{StorageBackend, StorageConfig},
        database::get_database_url,
    },
    errors::Result,
};
use tracing::info;

/// A string-valued key-value medium that survives process restarts.
pub trait BlobStore {
    /// Reads the value stored under `key`, or `None` if nothing is stored.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>>> + Send;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> impl Future<Output = Result<()>> + Send;
}

/// The blob store selected by configuration.
#[derive(Debug)]
pub enum ConfiguredBlobStore {
    /// Nothing survives the process
    Memory(MemoryBlobStore),
    /// One JSON file per key
    File(FileBlobStore),
    /// A `blobs` table in `SQLite`
    Sqlite(SqliteBlobStore),
}

impl BlobStore for ConfiguredBlobStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        match self {
            Self::Memory(store) => store.get(key).await,
            Self::File(store) => store.get(key).await,
            Self::Sqlite(store) => store.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        match self {
            Self::Memory(store) => store.set(key, value).await,
            Self::File(store) => store.set(key, value).await,
            Self::Sqlite(store) => store.set(key, value).await,
        }
    }
}

/// Opens the blob store described by the storage configuration.
pub async fn open_blob_store(config: &StorageConfig) -> Result<ConfiguredBlobStore> {
    match config.backend {
        StorageBackend::Memory => {
            info!("Using in-memory blob store; nothing will be kept after exit");
            Ok(ConfiguredBlobStore::Memory(MemoryBlobStore::new()))
        }
        StorageBackend::File => {
            info!("Using file blob store in {:?}", config.directory);
            Ok(ConfiguredBlobStore::File(FileBlobStore::new(
                &config.directory,
            )))
        }
        StorageBackend::Sqlite => {
            let database_url = get_database_url(config);
            info!("Using SQLite blob store at {}", database_url);
            SqliteBlobStore::connect(&database_url)
                .await
                .map(ConfiguredBlobStore::Sqlite)
        }
    }
}
