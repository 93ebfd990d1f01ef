//! The route handler for removing a transaction.

use std::sync::{Arc, Mutex};

use axum::{
    Extension,
    extract::{FromRef, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use rusqlite::Connection;

use crate::{AppState, Error, auth::UserID, endpoints};

use super::core::TransactionId;

/// The state needed to remove a transaction.
#[derive(Debug, Clone)]
pub struct RemoveTransactionState {
    /// The database connection for managing transactions.
    db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for RemoveTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for deleting a transaction owned by the current user.
///
/// The client is redirected to the transactions page whether or not a record
/// was deleted, so removing an id that no longer exists (e.g. after pressing
/// a stale link) is not an error.
pub async fn remove_transaction_endpoint(
    State(state): State<RemoveTransactionState>,
    Extension(user_id): Extension<UserID>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let rows_affected = delete_transaction(transaction_id, user_id, &connection)
        .inspect_err(|error| {
            tracing::error!("could not delete transaction {transaction_id}: {error}")
        })?;

    if rows_affected == 0 {
        tracing::debug!(
            "no transaction {transaction_id} owned by user {user_id} to delete"
        );
    }

    Ok(Redirect::to(endpoints::TRANSACTIONS_VIEW).into_response())
}

type RowsAffected = usize;

fn delete_transaction(
    id: TransactionId,
    user_id: UserID,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute(
            "DELETE FROM \"transaction\" WHERE id = :id AND user_id = :user_id",
            &[(":id", &id), (":user_id", &user_id.as_i64())],
        )
        .map_err(|err| err.into())
}

#[cfg(test)]
mod remove_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{Extension, extract::Path, extract::State, http::StatusCode};
    use time::macros::date;

    use crate::{
        Error,
        auth::UserID,
        endpoints,
        transaction::core::{
            NewTransaction, create_transaction, get_transaction, test_utils::get_test_connection,
        },
        transaction::query::{SortKey, get_transactions_for_user},
    };

    use super::{RemoveTransactionState, remove_transaction_endpoint};

    fn seed_transaction(conn: &rusqlite::Connection, user_id: UserID) -> i64 {
        create_transaction(
            NewTransaction {
                amount: 1.23,
                category: "Misc".to_owned(),
                date: date!(2024 - 05 - 01),
                description: "test".to_owned(),
                user_id,
            },
            conn,
        )
        .unwrap()
        .id
    }

    #[tokio::test]
    async fn removes_transaction_and_redirects() {
        let (conn, user_id) = get_test_connection();
        let transaction_id = seed_transaction(&conn, user_id);
        let state = RemoveTransactionState {
            db_connection: Arc::new(Mutex::new(conn)),
        };

        let response = remove_transaction_endpoint(
            State(state.clone()),
            Extension(user_id),
            Path(transaction_id),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get("location").unwrap(),
            endpoints::TRANSACTIONS_VIEW
        );
        let connection = state.db_connection.lock().unwrap();
        assert_eq!(
            get_transaction(transaction_id, user_id, &connection),
            Err(Error::NotFound)
        );
    }

    #[tokio::test]
    async fn removing_missing_transaction_still_redirects() {
        let (conn, user_id) = get_test_connection();
        let state = RemoveTransactionState {
            db_connection: Arc::new(Mutex::new(conn)),
        };

        let response =
            remove_transaction_endpoint(State(state), Extension(user_id), Path(42))
                .await
                .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn cannot_remove_another_users_transaction() {
        let (conn, user_id) = get_test_connection();
        let transaction_id = seed_transaction(&conn, user_id);
        let other_user = UserID::new(user_id.as_i64() + 1);
        let state = RemoveTransactionState {
            db_connection: Arc::new(Mutex::new(conn)),
        };

        let response = remove_transaction_endpoint(
            State(state.clone()),
            Extension(other_user),
            Path(transaction_id),
        )
        .await
        .unwrap();

        // Still redirects, but the record must be untouched.
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let connection = state.db_connection.lock().unwrap();
        let remaining = get_transactions_for_user(user_id, SortKey::Date, &connection).unwrap();
        assert_eq!(remaining.len(), 1);
    }
}
