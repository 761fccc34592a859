//! Implements a transaction store that keeps the list in memory.

use std::sync::{Arc, Mutex};

use crate::{Error, stores::TransactionStore, transaction::Transaction};

/// Stores transactions in a vector shared between clones of the store.
///
/// Nothing is persisted across restarts. The mutex only makes the store
/// shareable between handlers: load-modify-save cycles are not isolated,
/// exactly like [JsonTransactionStore](crate::stores::JsonTransactionStore).
#[derive(Debug, Clone, Default)]
pub struct InMemoryTransactionStore {
    transactions: Arc<Mutex<Vec<Transaction>>>,
}

impl InMemoryTransactionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `transactions`, most recent first.
    pub fn with_transactions(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions: Arc::new(Mutex::new(transactions)),
        }
    }
}

impl TransactionStore for InMemoryTransactionStore {
    fn initialize(&self) -> Result<(), Error> {
        Ok(())
    }

    fn load(&self) -> Result<Vec<Transaction>, Error> {
        let transactions = self.transactions.lock().map_err(|error| {
            tracing::error!("could not acquire the transaction store lock: {error}");
            Error::StoreLockError
        })?;

        Ok(transactions.clone())
    }

    fn save(&self, transactions: &[Transaction]) -> Result<(), Error> {
        let mut stored = self.transactions.lock().map_err(|error| {
            tracing::error!("could not acquire the transaction store lock: {error}");
            Error::StoreLockError
        })?;
        *stored = transactions.to_vec();

        Ok(())
    }
}
