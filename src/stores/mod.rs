//! Contains the trait and implementations for objects that store [transactions](crate::transaction::Transaction).

mod json;
mod memory;
mod transaction;

pub use json::JsonTransactionStore;
pub use memory::InMemoryTransactionStore;
pub use transaction::TransactionStore;
