//! Transaction management for the ledger.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `TransactionBuilder` for creating transactions
//! - The `TransactionStore` for storing, querying, and aggregating transactions
//! - Normalization of amounts and dates submitted by the browser
//! - Route handlers for the transactions page and its HTMX fragments

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod form;
mod get_endpoint;
mod normalize;
mod store;
mod table_endpoint;
mod transactions_page;
mod view;

#[cfg(test)]
pub(crate) mod test_utils;

pub use core::{Transaction, TransactionBuilder};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::update_transaction_endpoint;
pub use get_endpoint::{get_transaction_edit_row, get_transaction_row};
pub use normalize::{DEFAULT_RANGE_DAYS, DateRangeQuery, parse_amount, parse_date};
pub use store::{SQLiteTransactionStore, TransactionStore, create_transaction_table};
pub use table_endpoint::get_transaction_table;
pub use transactions_page::get_transactions_page;
