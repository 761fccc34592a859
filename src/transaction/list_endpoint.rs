//! Defines the endpoint for listing every transaction.

use axum::{
    Json,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};

use crate::{AppState, transaction::TransactionService};

/// The state needed to list transactions.
#[derive(Debug, Clone)]
pub struct ListTransactionsState {
    /// The service for managing transactions.
    pub transaction_service: TransactionService,
}

impl FromRef<AppState> for ListTransactionsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_service: state.transaction_service.clone(),
        }
    }
}

/// A route handler that responds with every transaction as a JSON array,
/// most recent first.
pub async fn list_transactions_endpoint(State(state): State<ListTransactionsState>) -> Response {
    match state.transaction_service.list() {
        Ok(transactions) => Json(transactions).into_response(),
        Err(error) => error.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use serde_json::json;

    use crate::{
        endpoints,
        test_utils::{FailingTransactionStore, assert_json_error, get_test_server, get_test_server_with_store},
        transaction::{PersistenceMode, Transaction},
    };

    #[tokio::test]
    async fn empty_store_lists_no_transactions() {
        let (server, _) = get_test_server();

        let response = server.get(endpoints::TRANSACTIONS_API).await;

        response.assert_status_ok();
        response.assert_json(&json!([]));
    }

    #[tokio::test]
    async fn lists_newest_transaction_first() {
        let (server, _) = get_test_server();
        let salary = server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({"description": "Salary", "amount": 1000, "type": "income"}))
            .await
            .json::<Transaction>();
        let coffee = server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({"description": "Coffee", "amount": 4.5, "type": "expense"}))
            .await
            .json::<Transaction>();

        let response = server.get(endpoints::TRANSACTIONS_API).await;

        response.assert_status_ok();
        assert_eq!(response.json::<Vec<Transaction>>(), vec![coffee, salary]);
    }

    #[tokio::test]
    async fn fail_soft_lists_nothing_when_store_is_unreadable() {
        let server = get_test_server_with_store(
            Arc::new(FailingTransactionStore::default()),
            PersistenceMode::FailSoft,
        );

        let response = server.get(endpoints::TRANSACTIONS_API).await;

        response.assert_status_ok();
        response.assert_json(&json!([]));
    }

    #[tokio::test]
    async fn strict_reports_read_failure() {
        let server = get_test_server_with_store(
            Arc::new(FailingTransactionStore::default()),
            PersistenceMode::Strict,
        );

        let response = server.get(endpoints::TRANSACTIONS_API).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_json_error(&response, "Internal server error");
    }
}
