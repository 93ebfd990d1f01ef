//! The typed sort key for the transactions list and the query that applies it.

use rusqlite::Connection;

use crate::{Error, auth::UserID};

use super::core::{Transaction, map_transaction_row};

/// The field used to order the transactions list.
///
/// The default ordering shows the most recent transactions first. All other
/// keys sort ascending: text fields lexicographically and the amount
/// numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Order by transaction date, most recent first.
    #[default]
    Date,
    /// Order by category name, A to Z.
    Category,
    /// Order by amount, smallest first.
    Amount,
    /// Order by description, A to Z.
    Description,
}

impl SortKey {
    /// Parse the `sortBy` query parameter value.
    ///
    /// Unrecognized values fall back to the default date ordering.
    pub fn from_query_value(value: &str) -> Self {
        match value {
            "category" => Self::Category,
            "amount" => Self::Amount,
            "description" => Self::Description,
            _ => Self::Date,
        }
    }

    /// The value to put in the `sortBy` query parameter for this key.
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Category => "category",
            Self::Amount => "amount",
            Self::Description => "description",
        }
    }

    fn order_by_clause(self) -> &'static str {
        match self {
            Self::Date => "date DESC",
            Self::Category => "category ASC",
            Self::Amount => "amount ASC",
            Self::Description => "description ASC",
        }
    }
}

/// Retrieve all transactions owned by `user_id`, ordered by `sort_key`.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn get_transactions_for_user(
    user_id: UserID,
    sort_key: SortKey,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    // The ORDER BY clause comes from a fixed table, never from user input.
    let query = format!(
        "SELECT id, amount, category, date, description, user_id
         FROM \"transaction\" WHERE user_id = :user_id
         ORDER BY {}",
        sort_key.order_by_clause()
    );

    let transactions = connection
        .prepare(&query)?
        .query_map(&[(":user_id", &user_id.as_i64())], map_transaction_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(transactions)
}


#[cfg(test)]
mod query_tests {
    use time::macros::date;

    use crate::transaction::core::{
        NewTransaction, create_transaction, test_utils::get_test_connection,
    };

    use super::{SortKey, get_transactions_for_user};

    fn seed_transactions(
        conn: &rusqlite::Connection,
        user_id: crate::auth::UserID,
    ) -> Vec<crate::transaction::Transaction> {
        [
            (20.0, "Groceries", date!(2024 - 01 - 10), "weekly shop"),
            (5.0, "Transport", date!(2024 - 03 - 02), "bus fare"),
            (12.5, "Entertainment", date!(2024 - 02 - 14), "cinema"),
        ]
        .into_iter()
        .map(|(amount, category, date, description)| {
            create_transaction(
                NewTransaction {
                    amount,
                    category: category.to_owned(),
                    date,
                    description: description.to_owned(),
                    user_id,
                },
                conn,
            )
            .unwrap()
        })
        .collect()
    }

    #[test]
    fn date_sort_is_descending() {
        let (conn, user_id) = get_test_connection();
        seed_transactions(&conn, user_id);

        let transactions = get_transactions_for_user(user_id, SortKey::Date, &conn).unwrap();

        let dates: Vec<_> = transactions.iter().map(|t| t.date).collect();
        assert_eq!(
            dates,
            vec![
                date!(2024 - 03 - 02),
                date!(2024 - 02 - 14),
                date!(2024 - 01 - 10)
            ]
        );
    }

    #[test]
    fn category_sort_is_ascending() {
        let (conn, user_id) = get_test_connection();
        seed_transactions(&conn, user_id);

        let transactions = get_transactions_for_user(user_id, SortKey::Category, &conn).unwrap();

        let categories: Vec<_> = transactions.iter().map(|t| t.category.as_str()).collect();
        assert_eq!(categories, vec!["Entertainment", "Groceries", "Transport"]);
    }

    #[test]
    fn amount_sort_is_ascending_and_numeric() {
        let (conn, user_id) = get_test_connection();
        seed_transactions(&conn, user_id);

        let transactions = get_transactions_for_user(user_id, SortKey::Amount, &conn).unwrap();

        let amounts: Vec<_> = transactions.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![5.0, 12.5, 20.0]);
    }

    #[test]
    fn description_sort_is_ascending() {
        let (conn, user_id) = get_test_connection();
        seed_transactions(&conn, user_id);

        let transactions =
            get_transactions_for_user(user_id, SortKey::Description, &conn).unwrap();

        let descriptions: Vec<_> = transactions
            .iter()
            .map(|t| t.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["bus fare", "cinema", "weekly shop"]);
    }

    #[test]
    fn only_returns_own_transactions() {
        let (conn, user_id) = get_test_connection();
        seed_transactions(&conn, user_id);
        let other_user = crate::auth::create_user(
            "other@example.com",
            crate::auth::PasswordHash::new_unchecked("hunter2"),
            &conn,
        )
        .unwrap();

        let transactions =
            get_transactions_for_user(other_user.id, SortKey::Date, &conn).unwrap();

        assert!(transactions.is_empty());
    }
}
