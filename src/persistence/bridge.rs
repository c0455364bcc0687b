//! Persistence bridge - loads the store from a blob store and writes it back.
//!
//! Loading never fails: a missing snapshot leaves the store as it is, and an
//! unreadable one is reported through [`LoadOutcome::Recovered`] while the store
//! keeps its current (at startup, empty) contents. A successful load replaces the
//! store wholesale. Saving writes the entire sequence every time; there is no
//! diffing, batching or retry, and a failed write never rolls the store back.

use crate::{
    core::{Transaction, TransactionStore},
    errors::{Error, Result},
    persistence::{BlobStore, snapshot},
};
use tracing::{error, info, instrument, warn};

/// Blob key used when none is configured.
pub const DEFAULT_BLOB_KEY: &str = "transactions";

/// What happened during [`PersistenceBridge::load`].
#[derive(Debug)]
pub enum LoadOutcome {
    /// No snapshot was stored; the store was left untouched.
    Missing,
    /// The snapshot replaced the store contents.
    Restored {
        /// Transactions now in the store
        count: usize,
        /// Records discarded because a later record had the same id
        duplicates_dropped: usize,
        /// Records discarded for a non-positive amount or blank description
        invalid_dropped: usize,
    },
    /// The snapshot could not be read or decoded; the store was left untouched.
    Recovered {
        /// Why the snapshot was unusable
        error: Error,
    },
}

impl LoadOutcome {
    /// Whether the load had to fall back because of a failure.
    #[must_use]
    pub const fn is_recovered(&self) -> bool {
        matches!(self, Self::Recovered { .. })
    }
}

/// Couples a [`BlobStore`] and a key to the transaction store.
#[derive(Debug)]
pub struct PersistenceBridge<B> {
    blob_store: B,
    key: String,
}

impl<B: BlobStore> PersistenceBridge<B> {
    /// Persists under `key` in `blob_store`.
    pub fn new(blob_store: B, key: impl Into<String>) -> Self {
        Self {
            blob_store,
            key: key.into(),
        }
    }

    /// Persists under [`DEFAULT_BLOB_KEY`].
    pub fn with_default_key(blob_store: B) -> Self {
        Self::new(blob_store, DEFAULT_BLOB_KEY)
    }

    /// The blob key snapshots are stored under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying blob store.
    #[must_use]
    pub const fn blob_store(&self) -> &B {
        &self.blob_store
    }

    /// Reads the snapshot and, if it decodes, replaces the store contents with it.
    #[instrument(skip_all, fields(key = %self.key))]
    pub async fn load(&self, store: &mut TransactionStore) -> LoadOutcome {
        let text = match self.blob_store.get(&self.key).await {
            Ok(Some(text)) if !text.trim().is_empty() => text,
            Ok(_) => {
                info!("No saved transactions found");
                return LoadOutcome::Missing;
            }
            Err(e) => {
                let error = Error::DecodeFailure {
                    message: format!("Failed to read snapshot: {e}"),
                };
                error!("{}; starting with current state", error);
                return LoadOutcome::Recovered { error };
            }
        };

        match snapshot::decode(&text) {
            Ok(records) => {
                let report = store.replace_all(records);
                let count = store.len();
                info!("Loaded {} transaction(s) from blob store", count);
                LoadOutcome::Restored {
                    count,
                    duplicates_dropped: report.duplicates_dropped,
                    invalid_dropped: report.invalid_dropped,
                }
            }
            Err(error) => {
                warn!("Error loading transactions: {}", error);
                LoadOutcome::Recovered { error }
            }
        }
    }

    /// Writes the full transaction sequence, replacing the previous snapshot.
    ///
    /// Any failure comes back as [`Error::PersistFailure`].
    #[instrument(skip_all, fields(key = %self.key, count = transactions.len()))]
    pub async fn save(&self, transactions: &[Transaction]) -> Result<()> {
        let text = snapshot::encode(transactions)?;
        self.blob_store
            .set(&self.key, &text)
            .await
            .map_err(|e| match e {
                Error::PersistFailure { .. } => e,
                other => Error::PersistFailure {
                    message: other.to_string(),
                },
            })
            .inspect_err(|e| error!("{}", e))
    }
}
