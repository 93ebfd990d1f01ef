//! Transaction management for the application.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and database functions for storing and querying transactions
//! - The typed sort key for the transactions list
//! - View handlers for the transaction-related web pages

mod core;
mod create_endpoint;
mod edit_page;
mod query;
mod remove_endpoint;
mod summary_page;
mod transactions_page;
mod update_endpoint;
mod view;

pub use self::core::{Transaction, TransactionId, create_transaction_table};
pub use create_endpoint::create_transaction_endpoint;
pub use edit_page::get_edit_transaction_page;
pub use remove_endpoint::remove_transaction_endpoint;
pub use summary_page::get_summary_page;
pub use transactions_page::get_transactions_page;
pub use update_endpoint::update_transaction_endpoint;
