//! The route handler for creating a transaction from the add-transaction form.

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

use super::core::{NewTransaction, create_transaction};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The database connection for managing transactions.
    db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The form data submitted from the add-transaction form.
///
/// A non-numeric amount or a date that is not `YYYY-MM-DD` is rejected by the
/// form extractor before this handler runs.
#[derive(Debug, Deserialize)]
pub struct CreateTransactionForm {
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

/// A route handler for creating a new transaction owned by the current user.
///
/// Redirects to the transactions page on success.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Extension(user_id): Extension<UserID>,
    Form(form): Form<CreateTransactionForm>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    create_transaction(
        NewTransaction {
            amount: form.amount,
            category: form.category,
            date: form.date,
            description: form.description,
            user_id,
        },
        &connection,
    )
    .inspect_err(|error| tracing::error!("could not create transaction: {error}"))?;

    Ok(Redirect::to(endpoints::TRANSACTIONS_VIEW).into_response())
}

#[cfg(test)]
mod create_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{Extension, Form, extract::State, http::StatusCode};
    use time::macros::date;

    use crate::{
        endpoints,
        transaction::{
            core::test_utils::get_test_connection,
            query::{SortKey, get_transactions_for_user},
        },
    };

    use super::{CreateTransactionForm, CreateTransactionState, create_transaction_endpoint};

    #[tokio::test]
    async fn creates_transaction_and_redirects() {
        let (conn, user_id) = get_test_connection();
        let state = CreateTransactionState {
            db_connection: Arc::new(Mutex::new(conn)),
        };
        let form = CreateTransactionForm {
            amount: 50.5,
            category: "Food".to_owned(),
            date: date!(2024 - 01 - 15),
            description: "lunch".to_owned(),
        };

        let response = create_transaction_endpoint(
            State(state.clone()),
            Extension(user_id),
            Form(form),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get("location").unwrap(),
            endpoints::TRANSACTIONS_VIEW
        );

        let connection = state.db_connection.lock().unwrap();
        let transactions =
            get_transactions_for_user(user_id, SortKey::Date, &connection).unwrap();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].amount, 50.5);
        assert_eq!(transactions[0].category, "Food");
        assert_eq!(transactions[0].date, date!(2024 - 01 - 15));
        assert_eq!(transactions[0].description, "lunch");
        assert_eq!(transactions[0].user_id, user_id);
    }
}
