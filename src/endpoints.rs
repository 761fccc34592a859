//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/transactions/{transaction_id}', use [format_endpoint].

/// The route for listing and creating transactions.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route for deleting a single transaction.
pub const DELETE_TRANSACTION: &str = "/api/transactions/{transaction_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// Assumes `endpoint_path` has exactly one parameter wrapped in braces, e.g.
/// "/api/transactions/{transaction_id}".
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    match (endpoint_path.find('{'), endpoint_path.find('}')) {
        (Some(start), Some(end)) if start < end => {
            format!("{}{id}{}", &endpoint_path[..start], &endpoint_path[end + 1..])
        }
        _ => endpoint_path.to_owned(),
    }
}

#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints::{DELETE_TRANSACTION, TRANSACTIONS_API, format_endpoint};

    #[test]
    fn endpoints_are_valid_uris() {
        assert!(TRANSACTIONS_API.parse::<Uri>().is_ok());
        assert!(format_endpoint(DELETE_TRANSACTION, 1).parse::<Uri>().is_ok());
    }

    #[test]
    fn formats_parameter() {
        assert_eq!(
            format_endpoint(DELETE_TRANSACTION, 1_760_000_000_000),
            "/api/transactions/1760000000000"
        );
    }

    #[test]
    fn leaves_endpoint_without_parameter_unchanged() {
        assert_eq!(format_endpoint(TRANSACTIONS_API, 1), TRANSACTIONS_API);
    }
}
