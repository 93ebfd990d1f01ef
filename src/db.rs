//! Database initialization for the application.

use rusqlite::Connection;

use crate::{auth::create_user_table, transaction::create_transaction_table};

/// Create the tables for the application's domain models.
///
/// This function is idempotent, tables that already exist are left untouched.
///
/// # Errors
/// Returns an error if a table cannot be created or if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute("PRAGMA foreign_keys = ON", ())?;

    create_user_table(connection)?;
    create_transaction_table(connection)?;

    Ok(())
}

#[cfg(test)]
mod db_tests {
    use rusqlite::Connection;

    use super::initialize;

    #[test]
    fn initialize_creates_tables() {
        let conn = Connection::open_in_memory().unwrap();

        initialize(&conn).expect("could not initialize the database");

        let table_count: i64 = conn
            .query_row(
                "SELECT COUNT(name) FROM sqlite_master
                 WHERE type = 'table' AND name IN ('user', 'transaction')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(table_count, 2);
    }

    #[test]
    fn initialize_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        initialize(&conn).expect("could not initialize the database");
        initialize(&conn).expect("second initialization should not fail");
    }
}
