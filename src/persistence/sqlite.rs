//! `SQLite` blob store - values live in the `blobs` table via `SeaORM`.

use crate::{
    config::database::{create_connection, create_tables},
    entities::{Blob, blob},
    errors::Result,
    persistence::BlobStore,
};
use chrono::Utc;
use sea_orm::{Set, TransactionTrait, prelude::*};
use tracing::{debug, instrument};

/// Blob store backed by a `SQLite` database.
#[derive(Clone, Debug)]
pub struct SqliteBlobStore {
    db: DatabaseConnection,
}

impl SqliteBlobStore {
    /// Connects to `database_url` and creates the `blobs` table if it is missing.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let db = create_connection(database_url).await?;
        create_tables(&db).await?;
        Ok(Self { db })
    }

    /// Wraps an existing connection whose tables are already created.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// The underlying database connection.
    #[must_use]
    pub const fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl BlobStore for SqliteBlobStore {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let row = Blob::find_by_id(key.to_string()).one(&self.db).await?;
        debug!("Blob '{}' present: {}", key, row.is_some());
        Ok(row.map(|b| b.value))
    }

    #[instrument(skip(self, value), fields(bytes = value.len()))]
    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let now = Utc::now().naive_utc();
        let txn = self.db.begin().await?;

        let existing = Blob::find_by_id(key.to_string()).one(&txn).await?;
        if let Some(row) = existing {
            let mut active_model: blob::ActiveModel = row.into();
            active_model.value = Set(value.to_string());
            active_model.updated_at = Set(now);
            active_model.update(&txn).await?;
        } else {
            let new_row = blob::ActiveModel {
                key: Set(key.to_string()),
                value: Set(value.to_string()),
                updated_at: Set(now),
            };
            new_row.insert(&txn).await?;
        }

        txn.commit().await?;
        Ok(())
    }
}
