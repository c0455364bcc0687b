//! Application configuration loading from config.toml
//!
//! Every setting has a default, so a missing config file is not an error. The file
//! location can be overridden with `LEDGER_CONFIG`.

use crate::{
    errors::{Error, Result},
    persistence::DEFAULT_BLOB_KEY,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Where transaction snapshots are kept
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Which blob store keeps the snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process memory only
    Memory,
    /// One JSON file per key in `directory`
    File,
    /// A `SQLite` database at `database_url`
    #[default]
    Sqlite,
}

/// Configuration for the persistence medium
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Backend to use
    pub backend: StorageBackend,
    /// Blob key the snapshot is stored under
    pub key: String,
    /// Directory for the file backend
    pub directory: PathBuf,
    /// Database URL for the `SQLite` backend (`DATABASE_URL` takes precedence)
    pub database_url: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            key: DEFAULT_BLOB_KEY.to_string(),
            directory: PathBuf::from("data"),
            database_url: None,
        }
    }
}

/// Loads configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - A field has the wrong type or an unknown backend name
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path_ref:?}: {e}"),
    })?;

    parse_config(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse TOML from config file {path_ref:?}: {e}"),
    })
}

fn parse_config(contents: &str) -> std::result::Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Loads the application configuration from `LEDGER_CONFIG` or `./config.toml`.
///
/// Falls back to defaults when the file does not exist.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path = std::env::var("LEDGER_CONFIG")
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);

    if !path.exists() {
        info!("No config file at {:?}; using defaults", path);
        return Ok(AppConfig::default());
    }

    let config = load_config(&path)?;
    info!(
        "Loaded configuration from {:?} (backend: {:?})",
        path, config.storage.backend
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::unique_temp_dir;

    #[test]
    fn test_parse_storage_config() {
        let toml_str = r#"
            [storage]
            backend = "file"
            key = "my_ledger"
            directory = "/tmp/ledger"
        "#;

        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.storage.key, "my_ledger");
        assert_eq!(config.storage.directory, PathBuf::from("/tmp/ledger"));
        assert!(config.storage.database_url.is_none());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Sqlite);
        assert_eq!(config.storage.key, DEFAULT_BLOB_KEY);
        assert_eq!(config.storage.directory, PathBuf::from("data"));
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        let toml_str = r#"
            [storage]
            backend = "postgres"
        "#;
        assert!(parse_config(toml_str).is_err());
    }

    #[test]
    fn test_load_config_missing_file_is_config_error() {
        let path = unique_temp_dir("config-missing").join("config.toml");
        assert!(matches!(load_config(path), Err(Error::Config { .. })));
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = unique_temp_dir("config-file");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "[storage]\nbackend = \"memory\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Memory);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
