//! The operations for listing, creating and deleting transactions.

use std::sync::Arc;

use time::OffsetDateTime;

use crate::{
    Error,
    stores::TransactionStore,
    transaction::{Transaction, TransactionId, TransactionInput, validate_transaction},
};

/// Controls what happens when the store cannot be read or written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PersistenceMode {
    /// Log store errors and carry on.
    ///
    /// A failed read is treated as an empty list and a failed write is
    /// ignored, so what is returned to the client may not match what is on
    /// disk.
    #[default]
    FailSoft,
    /// Return store errors to the caller.
    Strict,
}

/// Validates, orders and persists transactions through a [TransactionStore].
///
/// Every operation reads the whole list, changes it in memory and writes the
/// whole list back.
#[derive(Clone)]
pub struct TransactionService {
    store: Arc<dyn TransactionStore>,
    mode: PersistenceMode,
}

impl std::fmt::Debug for TransactionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransactionService")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl TransactionService {
    /// Create a service that reads and writes transactions with `store`.
    pub fn new(store: Arc<dyn TransactionStore>, mode: PersistenceMode) -> Self {
        Self { store, mode }
    }

    /// How store errors are handled.
    pub fn mode(&self) -> PersistenceMode {
        self.mode
    }

    /// Get every transaction in stored order, most recent first.
    ///
    /// # Errors
    /// In [PersistenceMode::Strict], returns the store's read error. In
    /// [PersistenceMode::FailSoft] this never fails: a read error is logged and
    /// an empty list is returned.
    pub fn list(&self) -> Result<Vec<Transaction>, Error> {
        match self.store.load() {
            Ok(transactions) => Ok(transactions),
            Err(error) if self.mode == PersistenceMode::FailSoft => {
                tracing::error!("Error reading transactions, continuing with none: {error}");
                Ok(Vec::new())
            }
            Err(error) => {
                tracing::error!("Error reading transactions: {error}");
                Err(error)
            }
        }
    }

    /// Create a transaction recorded at `now` and put it at the front of the list.
    ///
    /// The ID is `now` in milliseconds since the Unix epoch. When that ID is
    /// already taken (two creations in the same millisecond or the clock going
    /// backwards), the ID is one more than the largest stored ID instead.
    ///
    /// # Errors
    /// Returns an [Error::InvalidTransaction] if `input` is missing a field,
    /// in which case nothing is written. In [PersistenceMode::Strict], also
    /// returns the store's read or write error. In [PersistenceMode::FailSoft]
    /// the new transaction is returned even if it could not be saved.
    pub fn create(
        &self,
        input: TransactionInput,
        now: OffsetDateTime,
    ) -> Result<Transaction, Error> {
        let valid = validate_transaction(input)?;

        let mut transactions = self.list()?;
        let id = next_id(&transactions, now);
        let transaction = valid.finalize(id, now);

        transactions.insert(0, transaction.clone());
        self.persist(&transactions)?;
        tracing::debug!("Created transaction {id}");

        Ok(transaction)
    }

    /// Delete the transaction with `id`.
    ///
    /// # Errors
    /// Returns an [Error::DeleteMissingTransaction] if no stored transaction
    /// has `id`, in which case nothing is written. In
    /// [PersistenceMode::Strict], also returns the store's read or write error.
    pub fn remove(&self, id: TransactionId) -> Result<(), Error> {
        let transactions = self.list()?;
        let count_before = transactions.len();

        let remaining: Vec<Transaction> = transactions
            .into_iter()
            .filter(|transaction| transaction.id != id)
            .collect();

        if remaining.len() == count_before {
            return Err(Error::DeleteMissingTransaction(id));
        }

        self.persist(&remaining)?;
        tracing::debug!("Deleted transaction {id}");

        Ok(())
    }

    fn persist(&self, transactions: &[Transaction]) -> Result<(), Error> {
        match self.store.save(transactions) {
            Ok(()) => Ok(()),
            Err(error) if self.mode == PersistenceMode::FailSoft => {
                tracing::error!("Error writing transactions, changes were not saved: {error}");
                Ok(())
            }
            Err(error) => {
                tracing::error!("Error writing transactions: {error}");
                Err(error)
            }
        }
    }
}

/// Pick the ID for a transaction created at `now`.
///
/// Wall-clock milliseconds are not unique on their own, so a colliding ID is
/// replaced with one past the largest stored ID.
fn next_id(transactions: &[Transaction], now: OffsetDateTime) -> TransactionId {
    let millis = now.unix_timestamp_nanos() / 1_000_000;
    let candidate = TransactionId::try_from(millis).unwrap_or(if millis < 0 {
        TransactionId::MIN
    } else {
        TransactionId::MAX
    });

    if transactions
        .iter()
        .any(|transaction| transaction.id == candidate)
    {
        let largest = transactions
            .iter()
            .map(|transaction| transaction.id)
            .max()
            .unwrap_or(candidate);

        largest.saturating_add(1)
    } else {
        candidate
    }
}
