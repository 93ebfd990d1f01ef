//! The route handler for saving edits to an existing transaction.

use std::sync::{Arc, Mutex};

use axum::{
    Extension, Form,
    extract::{FromRef, State},
    response::{IntoResponse, Redirect, Response},
};
use rusqlite::Connection;
use serde::Deserialize;
use time::Date;

use crate::{AppState, Error, auth::UserID, endpoints};

use super::core::TransactionId;

/// The state needed to update a transaction.
#[derive(Debug, Clone)]
pub struct UpdateTransactionState {
    /// The database connection for managing transactions.
    db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for UpdateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The form data submitted from the edit-transaction form.
#[derive(Debug, Deserialize)]
pub struct UpdateTransactionForm {
    /// The id of the transaction being edited.
    #[serde(rename = "itemId")]
    pub item_id: TransactionId,
    /// The amount of money spent or earned.
    pub amount: f64,
    /// The category the transaction is filed under.
    pub category: String,
    /// When the transaction happened.
    pub date: Date,
    /// A text description of what the transaction was for.
    #[serde(default)]
    pub description: String,
}

/// A route handler for saving edits to a transaction owned by the current user.
///
/// The client is redirected to the transactions page whether or not a record
/// was updated. An id belonging to another user matches no rows, so the
/// update is a no-op.
pub async fn update_transaction_endpoint(
    State(state): State<UpdateTransactionState>,
    Extension(user_id): Extension<UserID>,
    Form(form): Form<UpdateTransactionForm>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let rows_affected = update_transaction(&form, user_id, &connection).inspect_err(
        |error| tracing::error!("could not update transaction {}: {error}", form.item_id),
    )?;

    if rows_affected == 0 {
        tracing::debug!(
            "no transaction {} owned by user {user_id} to update",
            form.item_id
        );
    }

    Ok(Redirect::to(endpoints::TRANSACTIONS_VIEW).into_response())
}

type RowsAffected = usize;

fn update_transaction(
    form: &UpdateTransactionForm,
    user_id: UserID,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute(
            "UPDATE \"transaction\"
            SET amount = :amount, category = :category, date = :date, description = :description
            WHERE id = :id AND user_id = :user_id",
            rusqlite::named_params! {
                ":amount": form.amount,
                ":category": form.category,
                ":date": form.date,
                ":description": form.description,
                ":id": form.item_id,
                ":user_id": user_id.as_i64(),
            },
        )
        .map_err(|err| err.into())
}

#[cfg(test)]
mod update_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{Extension, Form, extract::State, http::StatusCode};
    use time::macros::date;

    use crate::{
        auth::UserID,
        endpoints,
        transaction::core::{
            NewTransaction, create_transaction, get_transaction, test_utils::get_test_connection,
        },
    };

    use super::{UpdateTransactionForm, UpdateTransactionState, update_transaction_endpoint};

    fn seed_transaction(conn: &rusqlite::Connection, user_id: UserID) -> i64 {
        create_transaction(
            NewTransaction {
                amount: 50.5,
                category: "Food".to_owned(),
                date: date!(2024 - 01 - 15),
                description: "lunch".to_owned(),
                user_id,
            },
            conn,
        )
        .unwrap()
        .id
    }

    #[tokio::test]
    async fn updates_transaction_and_redirects() {
        let (conn, user_id) = get_test_connection();
        let transaction_id = seed_transaction(&conn, user_id);
        let state = UpdateTransactionState {
            db_connection: Arc::new(Mutex::new(conn)),
        };
        let form = UpdateTransactionForm {
            item_id: transaction_id,
            amount: 12.0,
            category: "Groceries".to_owned(),
            date: date!(2024 - 02 - 01),
            description: "weekly shop".to_owned(),
        };

        let response =
            update_transaction_endpoint(State(state.clone()), Extension(user_id), Form(form))
                .await
                .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get("location").unwrap(),
            endpoints::TRANSACTIONS_VIEW
        );

        let connection = state.db_connection.lock().unwrap();
        let transaction = get_transaction(transaction_id, user_id, &connection).unwrap();
        assert_eq!(transaction.amount, 12.0);
        assert_eq!(transaction.category, "Groceries");
        assert_eq!(transaction.date, date!(2024 - 02 - 01));
        assert_eq!(transaction.description, "weekly shop");
        assert_eq!(transaction.user_id, user_id);
    }

    #[tokio::test]
    async fn updating_missing_transaction_still_redirects() {
        let (conn, user_id) = get_test_connection();
        let state = UpdateTransactionState {
            db_connection: Arc::new(Mutex::new(conn)),
        };
        let form = UpdateTransactionForm {
            item_id: 42,
            amount: 1.0,
            category: "Misc".to_owned(),
            date: date!(2024 - 02 - 01),
            description: String::new(),
        };

        let response = update_transaction_endpoint(State(state), Extension(user_id), Form(form))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn cannot_update_another_users_transaction() {
        let (conn, user_id) = get_test_connection();
        let transaction_id = seed_transaction(&conn, user_id);
        let other_user = UserID::new(user_id.as_i64() + 1);
        let state = UpdateTransactionState {
            db_connection: Arc::new(Mutex::new(conn)),
        };
        let form = UpdateTransactionForm {
            item_id: transaction_id,
            amount: 999.0,
            category: "Hijacked".to_owned(),
            date: date!(2024 - 02 - 01),
            description: String::new(),
        };

        let response =
            update_transaction_endpoint(State(state.clone()), Extension(other_user), Form(form))
                .await
                .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let connection = state.db_connection.lock().unwrap();
        let transaction = get_transaction(transaction_id, user_id, &connection).unwrap();
        assert_eq!(transaction.amount, 50.5);
        assert_eq!(transaction.category, "Food");
    }
}
