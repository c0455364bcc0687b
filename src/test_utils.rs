//! Shared test utilities.
//!
//! Helpers for setting up test databases and building sample transactions with
//! sensible defaults.
#![allow(clippy::unwrap_used)]

use crate::{
    core::{NewTransaction, Transaction, TransactionType},
    errors::{Error, Result},
    persistence::BlobStore,
};
use chrono::{DateTime, TimeZone, Utc};
use sea_orm::DatabaseConnection;
use std::{
    path::PathBuf,
    sync::atomic::{AtomicUsize, Ordering},
};
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber once; later calls are no-ops.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with all tables initialized.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// A fresh path under the system temp directory. Nothing is created.
pub fn unique_temp_dir(label: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    std::env::temp_dir().join(format!(
        "pocket-ledger-{label}-{}-{nanos}-{n}",
        std::process::id()
    ))
}

/// 2024-03-05 14:30:00 UTC
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap()
}

/// `Coffee`, 4.50, food, expense
pub fn coffee_candidate() -> NewTransaction {
    NewTransaction::new("Coffee", 4.50, "food", TransactionType::Expense)
}

/// `Paycheck`, 1000, salary, income
pub fn paycheck_candidate() -> NewTransaction {
    NewTransaction::new("Paycheck", 1000.0, "salary", TransactionType::Income)
}

/// A stored transaction with an explicit id, as if restored from a snapshot.
pub fn sample_transaction(
    id: i64,
    description: &str,
    amount: f64,
    kind: TransactionType,
) -> Transaction {
    Transaction {
        id,
        description: description.to_string(),
        amount,
        category: "misc".to_string(),
        kind,
        date: "3/5/2024".to_string(),
    }
}

/// A blob store whose every read and write fails.
pub struct FailingBlobStore;

impl BlobStore for FailingBlobStore {
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(Error::Storage {
            message: "blob store unavailable".to_string(),
        })
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(Error::Storage {
            message: "blob store is read-only".to_string(),
        })
    }
}
