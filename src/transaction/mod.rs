//! Transaction management for the finance tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the validation of new transactions
//! - The `TransactionService` that orders and persists transactions through a store
//! - Route handlers for the transaction API

mod core;
mod create_endpoint;
mod delete_endpoint;
mod list_endpoint;
mod service;

pub use core::{
    Transaction, TransactionId, TransactionInput, ValidTransaction, ValidationError,
    format_display_date, validate_transaction,
};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use list_endpoint::list_transactions_endpoint;
pub use service::{PersistenceMode, TransactionService};
