//! Tally is a personal finance tracker.
//!
//! This library provides a small JSON REST API for recording income and
//! expenses. Transactions are kept, most recent first, in a single JSON
//! document on disk. Working out the balance is left to the client.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod app_state;
mod endpoints;
mod json_response;
mod logging;
mod not_found;
mod routing;
pub mod stores;
mod timezone;
pub mod transaction;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use endpoints::{DELETE_TRANSACTION, TRANSACTIONS_API, format_endpoint};
pub use json_response::{ErrorBody, MessageBody};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;

use crate::{
    json_response::render_error,
    transaction::{TransactionId, ValidationError},
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The client tried to create a transaction without a required field.
    #[error("invalid transaction: {0}")]
    InvalidTransaction(#[from] ValidationError),

    /// Tried to delete a transaction that is not in the store.
    #[error("tried to delete the transaction {0}, which is not in the store")]
    DeleteMissingTransaction(TransactionId),

    /// The transaction ID in the request path is not an integer, so it cannot
    /// refer to a stored transaction.
    #[error("\"{0}\" is not a valid transaction ID")]
    InvalidTransactionId(String),

    /// The transaction store could not be read or parsed.
    ///
    /// The string describes the underlying I/O or JSON error and should only
    /// be logged on the server.
    #[error("could not read the transaction store: {0}")]
    StoreReadError(String),

    /// The transaction store could not be written.
    ///
    /// The string describes the underlying I/O or JSON error and should only
    /// be logged on the server.
    #[error("could not write the transaction store: {0}")]
    StoreWriteError(String),

    /// Could not acquire the lock on an in-memory store.
    #[error("could not acquire the transaction store lock")]
    StoreLockError,

    /// The configured timezone is not a canonical timezone name.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::InvalidTransaction(reason) => render_error(
                StatusCode::BAD_REQUEST,
                "Missing required fields",
                Some(reason.to_string()),
            ),
            Error::DeleteMissingTransaction(_) | Error::InvalidTransactionId(_) => {
                render_error(StatusCode::NOT_FOUND, "Transaction not found", None)
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                render_error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    Some("Check the server logs for more details.".to_owned()),
                )
            }
        }
    }
}

#[cfg(test)]
mod error_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{Error, transaction::ValidationError};

    #[test]
    fn validation_errors_are_bad_requests() {
        for reason in [
            ValidationError::MissingDescription,
            ValidationError::MissingAmount,
            ValidationError::MissingType,
        ] {
            let response = Error::InvalidTransaction(reason).into_response();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn missing_transaction_is_not_found() {
        let response = Error::DeleteMissingTransaction(1).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_errors_are_internal_server_errors() {
        for error in [
            Error::StoreReadError("boom".to_owned()),
            Error::StoreWriteError("boom".to_owned()),
            Error::StoreLockError,
            Error::InvalidTimezoneError("Not/AZone".to_owned()),
        ] {
            let response = error.into_response();

            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
