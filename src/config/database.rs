//! Database configuration module.
//!
//! This module handles the `SQLite` connection used by the `SQLite` blob store and
//! creates its table from the entity definition with `SeaORM`'s
//! `Schema::create_table_from_entity`, so the schema always matches the Rust struct.

use crate::config::app::StorageConfig;
use crate::entities::Blob;
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use std::path::Path;
use tracing::debug;

/// Used when neither `DATABASE_URL` nor `storage.database_url` is set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/pocket_ledger.sqlite?mode=rwc";

/// Resolves the database URL: `DATABASE_URL` first, then the config file, then the
/// default local `SQLite` file.
#[must_use]
pub fn get_database_url(config: &StorageConfig) -> String {
    std::env::var("DATABASE_URL")
        .ok()
        .or_else(|| config.database_url.clone())
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
}

/// Establishes a connection to the `SQLite` database at `database_url`.
///
/// For file databases the parent directory is created first, since `SQLite` will
/// create the file but not the directories leading to it.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    if let Some(parent) = database_file_parent(database_url) {
        debug!("Ensuring database directory {:?} exists", parent);
        tokio::fs::create_dir_all(parent).await?;
    }

    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates all necessary database tables if they do not exist yet.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut blob_table = schema.create_table_from_entity(Blob);
    blob_table.if_not_exists();

    db.execute(builder.build(&blob_table)).await?;

    Ok(())
}

/// Directory containing the database file, for file-backed `SQLite` URLs.
fn database_file_parent(database_url: &str) -> Option<&Path> {
    let path = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = path.split('?').next()?;
    if path.is_empty() || path.contains(":memory:") {
        return None;
    }
    Path::new(path)
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
}
