//! Defines the transaction store trait.

use crate::{Error, transaction::Transaction};

/// Holds the ordered list of transactions as a single unit.
///
/// Stores always read and write the whole list: there is no indexing, no
/// append log and no partial update. The order of the list is the order it
/// was saved in, most recent first.
pub trait TransactionStore: Send + Sync {
    /// Prepare the store for use, e.g. create an empty backing document.
    ///
    /// Safe to call on every start up: existing data is left untouched.
    fn initialize(&self) -> Result<(), Error>;

    /// Read the full list of transactions.
    ///
    /// # Errors
    /// Returns an [Error::StoreReadError] if the list cannot be read or parsed.
    fn load(&self) -> Result<Vec<Transaction>, Error>;

    /// Replace the stored list with `transactions`.
    ///
    /// # Errors
    /// Returns an [Error::StoreWriteError] if the list cannot be written. The
    /// previously stored list is left intact in that case.
    fn save(&self, transactions: &[Transaction]) -> Result<(), Error>;
}
