//! Application router configuration.

use axum::{
    Router, middleware,
    routing::{delete, get},
};

use crate::{
    AppState, endpoints,
    logging::logging_middleware,
    not_found::get_404_not_found,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, list_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::TRANSACTIONS_API,
            get(list_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::DELETE_TRANSACTION,
            delete(delete_transaction_endpoint),
        )
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

#[cfg(test)]
mod routing_tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::{
        endpoints::{self, format_endpoint},
        test_utils::{assert_json_error, get_test_server},
        transaction::Transaction,
    };

    #[tokio::test]
    async fn unknown_route_responds_with_json_not_found() {
        let (server, _) = get_test_server();

        let response = server.get("/api/balance").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_json_error(&response, "Not found");
    }

    #[tokio::test]
    async fn unsupported_method_is_rejected() {
        let (server, _) = get_test_server();

        let response = server.put(endpoints::TRANSACTIONS_API).await;

        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn salary_and_coffee_scenario() {
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
        assert_ne!(salary.id, coffee.id);

        let listed = server
            .get(endpoints::TRANSACTIONS_API)
            .await
            .json::<Vec<Transaction>>();
        assert_eq!(listed, vec![coffee.clone(), salary.clone()]);

        server
            .delete(&format_endpoint(endpoints::DELETE_TRANSACTION, salary.id))
            .await
            .assert_status_ok();

        let listed = server
            .get(endpoints::TRANSACTIONS_API)
            .await
            .json::<Vec<Transaction>>();
        assert_eq!(listed, vec![coffee]);
    }
}
