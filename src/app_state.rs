//! Implements a struct that holds the state of the REST server.

use crate::{Error, timezone::get_local_offset, transaction::TransactionService};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The service that lists, creates and deletes transactions.
    pub transaction_service: TransactionService,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// New transactions are dated with the current date in this timezone.
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState].
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    /// Returns an [Error::InvalidTimezoneError] if `local_timezone` is not a
    /// known timezone.
    pub fn new(transaction_service: TransactionService, local_timezone: &str) -> Result<Self, Error> {
        if get_local_offset(local_timezone).is_none() {
            return Err(Error::InvalidTimezoneError(local_timezone.to_owned()));
        }

        Ok(Self {
            transaction_service,
            local_timezone: local_timezone.to_owned(),
        })
    }
}
