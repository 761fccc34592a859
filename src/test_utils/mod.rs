#![allow(missing_docs)]

pub(crate) mod http;
pub(crate) mod store;

pub(crate) use http::{assert_json_error, get_test_server, get_test_server_with_store};
pub(crate) use store::FailingTransactionStore;
