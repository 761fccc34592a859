//! Defines the endpoint for creating a new transaction.

use axum::{
    Json,
    extract::{FromRef, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    AppState,
    timezone::now_in_timezone,
    transaction::{TransactionInput, TransactionService},
};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The service for managing transactions.
    pub transaction_service: TransactionService,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_service: state.transaction_service.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// A route handler for creating a new transaction, responds with the created
/// transaction and 201 Created.
///
/// A request without a JSON content type is treated as an empty body, so it
/// gets the same 400 response as a body with every field missing.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    input: Result<Json<TransactionInput>, JsonRejection>,
) -> Response {
    let input = match input {
        Ok(Json(input)) => input,
        Err(JsonRejection::MissingJsonContentType(_)) => TransactionInput::default(),
        Err(rejection) => return rejection.into_response(),
    };

    let now = match now_in_timezone(&state.local_timezone) {
        Ok(now) => now,
        Err(error) => return error.into_response(),
    };

    match state.transaction_service.create(input, now) {
        Ok(transaction) => (StatusCode::CREATED, Json(transaction)).into_response(),
        Err(error) => {
            tracing::debug!("could not create transaction: {error}");
            error.into_response()
        }
    }
}
