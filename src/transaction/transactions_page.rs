//! Defines the route handler for the page that displays transactions as a table.

use std::sync::{Arc, Mutex};

use axum::{
    Extension,
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;
use serde::Deserialize;

use crate::{AppState, Error, auth::UserID};

use super::{
    query::{SortKey, get_transactions_for_user},
    view::transactions_view,
};

/// The query parameters accepted by the transactions page.
#[derive(Debug, Default, Deserialize)]
pub struct TransactionsQuery {
    /// The field to sort the table by. Unrecognized values fall back to the
    /// default date ordering.
    #[serde(rename = "sortBy")]
    sort_by: Option<String>,
}

/// The state needed for the transactions page.
#[derive(Debug, Clone)]
pub struct TransactionsViewState {
    /// The database connection for managing transactions.
    db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for TransactionsViewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Render an overview of the user's transactions, sorted by the selected key.
pub async fn get_transactions_page(
    State(state): State<TransactionsViewState>,
    Extension(user_id): Extension<UserID>,
    Query(query): Query<TransactionsQuery>,
) -> Result<Response, Error> {
    let sort_key = query
        .sort_by
        .as_deref()
        .map(SortKey::from_query_value)
        .unwrap_or_default();

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let transactions = get_transactions_for_user(user_id, sort_key, &connection)
        .inspect_err(|error| tracing::error!("could not get transactions: {error}"))?;

    Ok(transactions_view(&transactions, sort_key).into_response())
}

#[cfg(test)]
mod transactions_page_tests {
    use std::sync::{Arc, Mutex};

    use axum::{Extension, extract::Query, extract::State};
    use time::macros::date;

    use crate::transaction::core::{
        NewTransaction, create_transaction, test_utils::get_test_connection,
    };

    use super::{TransactionsQuery, TransactionsViewState, get_transactions_page};

    #[tokio::test]
    async fn renders_transactions_with_default_sort() {
        let (conn, user_id) = get_test_connection();
        create_transaction(
            NewTransaction {
                amount: 50.5,
                category: "Food".to_owned(),
                date: date!(2024 - 01 - 15),
                description: "lunch".to_owned(),
                user_id,
            },
            &conn,
        )
        .unwrap();
        let state = TransactionsViewState {
            db_connection: Arc::new(Mutex::new(conn)),
        };

        let response = get_transactions_page(
            State(state),
            Extension(user_id),
            Query(TransactionsQuery::default()),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), axum::http::StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8_lossy(&body);
        assert!(text.contains("lunch"));
        assert!(text.contains("Food"));
        assert!(text.contains("$50.50"));
    }

    #[tokio::test]
    async fn unrecognized_sort_key_renders_page() {
        let (conn, user_id) = get_test_connection();
        let state = TransactionsViewState {
            db_connection: Arc::new(Mutex::new(conn)),
        };

        let response = get_transactions_page(
            State(state),
            Extension(user_id),
            Query(TransactionsQuery {
                sort_by: Some("banana".to_owned()),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), axum::http::StatusCode::OK);
    }
}
