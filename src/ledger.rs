//! Ledger - composes the transaction store, the current filter and persistence.
//!
//! This is what a display layer drives: it calls [`Ledger::add`], [`Ledger::delete`]
//! or [`Ledger::set_filter`] in response to user actions, then re-renders from
//! [`Ledger::visible`] and [`Ledger::summary`]. Every successful mutation is
//! written through to the blob store immediately.

use crate::{
    core::{Filter, NewTransaction, Summary, Transaction, TransactionStore},
    errors::{Error, Result},
    persistence::{BlobStore, LoadOutcome, PersistenceBridge},
};
use tracing::{info, warn};

/// The result of a mutation that was applied to the store.
///
/// The store stays authoritative: if the snapshot write failed, the mutation is
/// still in effect and `persist_error` says why the blob store is behind.
#[derive(Debug)]
pub struct Committed<T> {
    /// What the mutation produced
    pub value: T,
    /// Set when writing the snapshot failed
    pub persist_error: Option<Error>,
}

impl<T> Committed<T> {
    /// Whether the blob store reflects this mutation.
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.persist_error.is_none()
    }
}

/// A transaction store kept in sync with a blob store.
#[derive(Debug)]
pub struct Ledger<B> {
    store: TransactionStore,
    filter: Filter,
    bridge: PersistenceBridge<B>,
}

impl<B: BlobStore> Ledger<B> {
    /// Creates an empty ledger with the `all` filter. Nothing is read yet.
    pub fn new(bridge: PersistenceBridge<B>) -> Self {
        Self {
            store: TransactionStore::new(),
            filter: Filter::default(),
            bridge,
        }
    }

    /// Creates a ledger and loads the saved snapshot into it.
    pub async fn open(bridge: PersistenceBridge<B>) -> (Self, LoadOutcome) {
        let mut ledger = Self::new(bridge);
        let outcome = ledger.load().await;
        (ledger, outcome)
    }

    /// Replaces the current contents with the saved snapshot, if one is readable.
    pub async fn load(&mut self) -> LoadOutcome {
        self.bridge.load(&mut self.store).await
    }

    /// Records a new transaction and writes the ledger through.
    ///
    /// Invalid input is rejected before anything changes or is written.
    pub async fn add(&mut self, candidate: NewTransaction) -> Result<Committed<Transaction>> {
        let transaction = self.store.add(candidate)?;
        info!(
            "Recorded {} '{}' {}",
            transaction.kind,
            transaction.description,
            transaction.signed_amount()
        );
        let persist_error = self.persist().await;
        Ok(Committed {
            value: transaction,
            persist_error,
        })
    }

    /// Deletes the transaction with `id`.
    ///
    /// Deleting an unknown id changes nothing and writes nothing.
    pub async fn delete(&mut self, id: i64) -> Committed<Option<Transaction>> {
        let removed = self.store.remove(id);
        let persist_error = if removed.is_some() {
            info!("Deleted transaction {}", id);
            self.persist().await
        } else {
            None
        };
        Committed {
            value: removed,
            persist_error,
        }
    }

    /// Changes which transactions [`Ledger::visible`] yields.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// The current filter.
    #[must_use]
    pub const fn filter(&self) -> Filter {
        self.filter
    }

    /// Transactions passing the current filter, in insertion order.
    pub fn visible(&self) -> impl Iterator<Item = &Transaction> + Clone + '_ {
        self.store.list(self.filter)
    }

    /// Totals over every transaction, regardless of the filter.
    #[must_use]
    pub fn summary(&self) -> Summary {
        self.store.aggregate()
    }

    /// Read access to the underlying store.
    #[must_use]
    pub const fn store(&self) -> &TransactionStore {
        &self.store
    }

    /// The persistence bridge in use.
    #[must_use]
    pub const fn bridge(&self) -> &PersistenceBridge<B> {
        &self.bridge
    }

    async fn persist(&self) -> Option<Error> {
        match self.bridge.save(self.store.transactions()).await {
            Ok(()) => None,
            Err(e) => {
                warn!("Ledger changed but was not saved: {}", e);
                Some(e)
            }
        }
    }
}
