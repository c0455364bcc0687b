//! Unified error types and result handling.

use thiserror::Error;

/// Every failure the ledger can report.
#[derive(Debug, Error)]
pub enum Error {
    /// Amount was non-numeric, non-finite, or not strictly positive.
    #[error("Invalid amount: {input} (must be a number greater than zero)")]
    InvalidAmount {
        /// The rejected input, as text
        input: String,
    },

    /// Description was empty after trimming surrounding whitespace.
    #[error("Invalid description: must not be empty")]
    InvalidDescription,

    /// Description violated the length limits of the input rules.
    #[error("Description must be between {min} and {max} characters, got {length}")]
    DescriptionLength {
        /// Trimmed length in characters
        length: usize,
        /// Minimum accepted length
        min: usize,
        /// Maximum accepted length
        max: usize,
    },

    /// No transaction id above the last issued one is left.
    #[error("No transaction id is available above the last issued id")]
    IdExhausted,

    /// Unknown filter selector.
    #[error("Invalid filter: {value} (expected all, income or expense)")]
    InvalidFilter {
        /// The rejected selector
        value: String,
    },

    /// Unknown transaction type.
    #[error("Invalid transaction type: {value} (expected income or expense)")]
    InvalidTransactionType {
        /// The rejected type name
        value: String,
    },

    /// A persisted snapshot could not be read or decoded.
    #[error("Failed to decode snapshot: {message}")]
    DecodeFailure {
        /// What went wrong
        message: String,
    },

    /// Writing the snapshot to the blob store failed.
    #[error("Failed to persist snapshot: {message}")]
    PersistFailure {
        /// What went wrong
        message: String,
    },

    /// Backend-level blob store failure.
    #[error("Storage error: {message}")]
    Storage {
        /// What went wrong
        message: String,
    },

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Database error from `SeaORM`.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
