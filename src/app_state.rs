//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use rusqlite::Connection;

use crate::{
    Error,
    transaction::{DEFAULT_RANGE_DAYS, SQLiteTransactionStore, TransactionStore},
};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The store for reading and writing transactions.
    pub transaction_store: SQLiteTransactionStore,

    /// How many days back the transactions table reaches when no start date is given.
    pub default_range_days: u32,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the tables for the domain models.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(db_connection: Connection, default_range_days: u32) -> Result<Self, Error> {
        let transaction_store = SQLiteTransactionStore::new(Arc::new(Mutex::new(db_connection)));
        transaction_store.initialize()?;

        Ok(Self {
            transaction_store,
            default_range_days,
        })
    }

    /// Create an [AppState] backed by an in-memory database with the default date range.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or initialized.
    pub fn in_memory() -> Result<Self, Error> {
        let connection = Connection::open_in_memory()?;

        Self::new(connection, DEFAULT_RANGE_DAYS)
    }
}

impl FromRef<AppState> for SQLiteTransactionStore {
    fn from_ref(state: &AppState) -> Self {
        state.transaction_store.clone()
    }
}
