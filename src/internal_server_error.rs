//! The 500 internal server error page.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::html::error_view;

/// Get a response containing the rendered 500 page.
pub fn get_internal_server_error_response() -> Response {
    let page = error_view(
        "Error",
        "500",
        "Sorry, something went wrong.",
        "Try again later or check the server logs.",
    );

    (StatusCode::INTERNAL_SERVER_ERROR, page).into_response()
}
