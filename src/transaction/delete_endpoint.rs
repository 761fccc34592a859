//! Defines the endpoint for deleting a transaction.

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    json_response::render_message,
    transaction::{TransactionId, TransactionService},
};

/// The state needed to delete a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState {
    /// The service for managing transactions.
    pub transaction_service: TransactionService,
}

impl FromRef<AppState> for DeleteTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_service: state.transaction_service.clone(),
        }
    }
}

/// A route handler for deleting a transaction, responds with a confirmation message.
///
/// An ID that is not an integer cannot match a transaction, so it gets the
/// same 404 response as an ID that is not stored.
pub async fn delete_transaction_endpoint(
    State(state): State<DeleteTransactionState>,
    Path(transaction_id): Path<String>,
) -> Response {
    let Ok(transaction_id) = transaction_id.parse::<TransactionId>() else {
        return Error::InvalidTransactionId(transaction_id).into_response();
    };

    match state.transaction_service.remove(transaction_id) {
        Ok(()) => render_message(StatusCode::OK, "Transaction deleted"),
        Err(error) => error.into_response(),
    }
}
