use std::sync::Arc;

use axum_test::{TestResponse, TestServer};
use serde_json::Value;

use crate::{
    AppState, build_router,
    stores::{InMemoryTransactionStore, TransactionStore},
    transaction::{PersistenceMode, TransactionService},
};

pub(crate) fn get_test_server() -> (TestServer, InMemoryTransactionStore) {
    let store = InMemoryTransactionStore::new();
    let server = get_test_server_with_store(Arc::new(store.clone()), PersistenceMode::FailSoft);

    (server, store)
}

pub(crate) fn get_test_server_with_store(
    store: Arc<dyn TransactionStore>,
    mode: PersistenceMode,
) -> TestServer {
    let state = AppState::new(TransactionService::new(store, mode), "Etc/UTC")
        .expect("Could not create app state");

    TestServer::try_new(build_router(state)).expect("Could not create test server.")
}

#[track_caller]
pub(crate) fn assert_json_error(response: &TestResponse, want_error: &str) {
    let body = response.json::<Value>();
    assert_eq!(
        body["error"], want_error,
        "want error {want_error:?}, got body {body}"
    );
}
