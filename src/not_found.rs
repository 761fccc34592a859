use axum::{http::StatusCode, response::Response};

use crate::json_response::render_error;

pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

pub fn get_404_not_found_response() -> Response {
    render_error(StatusCode::NOT_FOUND, "Not found", None)
}
