//! Application router configuration with protected and unprotected route definitions.

use axum::{
    Router, middleware,
    response::Redirect,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    auth::{auth_guard, get_log_in_page, get_log_out, post_log_in},
    endpoints,
    not_found::get_404_not_found,
    transaction::{
        create_transaction_endpoint, get_edit_transaction_page, get_summary_page,
        get_transactions_page, remove_transaction_endpoint, update_transaction_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let unprotected_routes = Router::new()
        .route(endpoints::LOG_IN_VIEW, get(get_log_in_page))
        .route(endpoints::LOG_IN_VIEW, post(post_log_in))
        .route(endpoints::LOG_OUT, get(get_log_out))
        .route(
            endpoints::TRANSACTIONS_VIEW_SLASH,
            get(get_transactions_page_trailing_slash),
        );

    let protected_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::TRANSACTIONS_VIEW, get(get_transactions_page))
        .route(
            endpoints::CREATE_TRANSACTION,
            post(create_transaction_endpoint),
        )
        .route(endpoints::SUMMARY_VIEW, get(get_summary_page))
        .route(
            endpoints::REMOVE_TRANSACTION,
            get(remove_transaction_endpoint),
        )
        .route(
            endpoints::EDIT_TRANSACTION_VIEW,
            get(get_edit_transaction_page),
        )
        .route(
            endpoints::UPDATE_TRANSACTION,
            post(update_transaction_endpoint),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth_guard));

    protected_routes
        .merge(unprotected_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the transactions page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::TRANSACTIONS_VIEW)
}

/// '/transaction/' redirects to the canonical path without the trailing slash.
async fn get_transactions_page_trailing_slash() -> Redirect {
    Redirect::permanent(endpoints::TRANSACTIONS_VIEW)
}
