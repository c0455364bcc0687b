/// Application settings loaded from config.toml
pub mod app;

/// Database configuration and connection management
pub mod database;

pub use app::{AppConfig, StorageBackend, StorageConfig, load_app_configuration, load_config};
