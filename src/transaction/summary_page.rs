//! The route handler for the page that shows per-category spending totals.

use std::sync::{Arc, Mutex};

use axum::{
    Extension,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{AppState, Error, auth::UserID};

use super::view::summary_view;

/// The total amount recorded against one category.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct CategoryTotal {
    /// The category name.
    pub category: String,
    /// The sum of all transaction amounts in the category.
    pub total: f64,
}

/// The state needed for the summary page.
#[derive(Debug, Clone)]
pub struct SummaryViewState {
    /// The database connection for managing transactions.
    db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for SummaryViewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Render the summary page: one row per category with the summed amount,
/// ordered by category name.
pub async fn get_summary_page(
    State(state): State<SummaryViewState>,
    Extension(user_id): Extension<UserID>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let totals = get_category_totals(user_id, &connection)
        .inspect_err(|error| tracing::error!("could not get category totals: {error}"))?;

    Ok(summary_view(&totals).into_response())
}

fn get_category_totals(
    user_id: UserID,
    connection: &Connection,
) -> Result<Vec<CategoryTotal>, Error> {
    connection
        .prepare(
            "SELECT category, SUM(amount) FROM \"transaction\"
            WHERE user_id = :user_id
            GROUP BY category
            ORDER BY category ASC",
        )?
        .query_map(&[(":user_id", &user_id.as_i64())], |row| {
            Ok(CategoryTotal {
                category: row.get(0)?,
                total: row.get(1)?,
            })
        })?
        .map(|total| total.map_err(|err| err.into()))
        .collect()
}
