//! `PocketLedger` - an income/expense ledger core
//!
//! This crate keeps an ordered, in-memory store of income and expense entries,
//! derives filtered lists and running totals from it, and keeps a persisted snapshot
//! in a key-value blob store synchronized after every change.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,
    clippy::nursery,

    // Correctness
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Style consistency
    clippy::enum_glob_use,
    clippy::redundant_closure_for_method_calls,
    clippy::semicolon_if_nothing_returned,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
)]

/// Configuration management for storage and database settings
pub mod config;
/// Core business logic - transactions, filter, store and totals
pub mod core;
/// `SeaORM` entity definitions for database tables
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// Store, filter and persistence composed into one ledger
pub mod ledger;
/// Blob store contract, snapshot codec and backends
pub mod persistence;

pub use crate::core::{
    Filter, NewTransaction, ReplaceReport, Summary, Transaction, TransactionStore,
    TransactionType,
};
pub use errors::{Error, Result};
pub use ledger::{Committed, Ledger};
pub use persistence::{BlobStore, LoadOutcome, PersistenceBridge};

#[cfg(test)]
pub mod test_utils;
