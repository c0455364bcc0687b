//! Transaction store - the single owner of the ordered transaction sequence.
//!
//! Insertion order is chronological order. Every id in the store is unique at all
//! times: new ids come from [`IdGenerator`], and bulk loads drop duplicate ids
//! (the later occurrence wins). The store emits no events; callers re-derive their
//! views through [`TransactionStore::list`] and [`TransactionStore::aggregate`]
//! after each mutation.

use crate::{
    core::{
        filter::Filter,
        ids::IdGenerator,
        rules::ensure_positive_amount,
        summary::Summary,
        transaction::{NewTransaction, Transaction},
    },
    errors::{Error, Result},
};
use chrono::{DateTime, Local, TimeZone};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Display format of the creation date stamped on each transaction.
const DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Records discarded by [`TransactionStore::replace_all`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplaceReport {
    /// Earlier records whose id reappeared later in the input
    pub duplicates_dropped: usize,
    /// Records with a non-positive amount or blank description
    pub invalid_dropped: usize,
}

/// Whether a stored record satisfies the same rules [`TransactionStore::add`] enforces.
fn is_restorable(transaction: &Transaction) -> bool {
    ensure_positive_amount(transaction.amount).is_ok()
        && !transaction.description.trim().is_empty()
}

/// In-memory, ordered collection of transactions.
#[derive(Clone, Debug, Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    ids: IdGenerator,
}

impl TransactionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a candidate and appends it, stamped with the current local time.
    pub fn add(&mut self, candidate: NewTransaction) -> Result<Transaction> {
        self.add_at(candidate, &Local::now())
    }

    /// Validates a candidate and appends it, stamped with `now`.
    ///
    /// Rejects non-finite or non-positive amounts with [`Error::InvalidAmount`],
    /// blank descriptions with [`Error::InvalidDescription`], and returns
    /// [`Error::IdExhausted`] when no id above the last issued one exists; the
    /// store is left unchanged on error. The description is stored trimmed.
    pub fn add_at<Tz: TimeZone>(
        &mut self,
        candidate: NewTransaction,
        now: &DateTime<Tz>,
    ) -> Result<Transaction> {
        let amount = ensure_positive_amount(candidate.amount)?;
        let description = candidate.description.trim();
        if description.is_empty() {
            return Err(Error::InvalidDescription);
        }

        let id = self
            .ids
            .next_id(now.timestamp_millis())
            .ok_or(Error::IdExhausted)?;
        let transaction = Transaction {
            id,
            description: description.to_string(),
            amount,
            category: candidate.category,
            kind: candidate.kind,
            date: now.date_naive().format(DATE_FORMAT).to_string(),
        };
        debug!(
            "Added {} transaction {} ({})",
            transaction.kind, transaction.id, transaction.amount
        );
        self.transactions.push(transaction.clone());
        Ok(transaction)
    }

    /// Removes the transaction with `id`, returning it if it was present.
    ///
    /// Removing an absent id is a no-op, so repeated removal is harmless.
    pub fn remove(&mut self, id: i64) -> Option<Transaction> {
        let position = self.transactions.iter().position(|t| t.id == id)?;
        let removed = self.transactions.remove(position);
        debug!("Removed transaction {}", removed.id);
        Some(removed)
    }

    /// Lazily yields the transactions passing `filter`, in insertion order.
    ///
    /// The iterator is `Clone`, so a caller can walk the same view more than once.
    pub fn list(&self, filter: Filter) -> impl Iterator<Item = &Transaction> + Clone + '_ {
        self.transactions
            .iter()
            .filter(move |t| filter.matches(t.kind))
    }

    /// Totals over the whole store, computed fresh on every call.
    #[must_use]
    pub fn aggregate(&self) -> Summary {
        Summary::from_transactions(&self.transactions)
    }

    /// Replaces the entire sequence with `records`.
    ///
    /// Records that could never have been added (non-positive or non-finite amount,
    /// blank description) are dropped first. When an id then appears more than once
    /// the later record wins and the earlier ones are dropped; the survivors keep
    /// their relative order. Future ids are issued above every loaded id.
    pub fn replace_all(&mut self, records: Vec<Transaction>) -> ReplaceReport {
        let incoming = records.len();
        let valid: Vec<Transaction> = records.into_iter().filter(is_restorable).collect();
        let invalid_dropped = incoming - valid.len();

        let mut seen = HashSet::with_capacity(valid.len());
        let after_validation = valid.len();
        let mut kept: Vec<Transaction> = valid
            .into_iter()
            .rev()
            .filter(|t| seen.insert(t.id))
            .collect();
        kept.reverse();
        let duplicates_dropped = after_validation - kept.len();

        if invalid_dropped > 0 {
            warn!("Dropped {invalid_dropped} invalid transaction(s) during bulk load");
        }
        if duplicates_dropped > 0 {
            warn!("Dropped {duplicates_dropped} transaction(s) with duplicate ids during bulk load");
        }

        self.ids.reset();
        for t in &kept {
            self.ids.observe(t.id);
        }
        self.transactions = kept;
        ReplaceReport {
            duplicates_dropped,
            invalid_dropped,
        }
    }

    /// Looks up a transaction by id.
    #[must_use]
    pub fn get(&self, id: i64) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// All transactions in insertion order.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Number of transactions held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the store holds no transactions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
