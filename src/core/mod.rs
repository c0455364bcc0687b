//! Core business logic - framework-agnostic transaction model, store and derived views.

/// Filter selector for the visible transaction list
pub mod filter;
/// Strictly increasing transaction id generation
pub mod ids;
/// Stricter input rules a form layer may apply before calling the store
pub mod rules;
/// The in-memory transaction store
pub mod store;
/// Aggregated totals and two-decimal display helpers
pub mod summary;
/// Transaction records and candidates
pub mod transaction;

pub use filter::Filter;
pub use store::{ReplaceReport, TransactionStore};
pub use summary::{BalanceTone, Summary, format_currency};
pub use transaction::{NewTransaction, Transaction, TransactionType};
