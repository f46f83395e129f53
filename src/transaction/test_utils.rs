use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use super::{SQLiteTransactionStore, TransactionBuilder, TransactionStore};

/// An initialized store backed by an in-memory database.
pub(crate) fn get_test_store() -> SQLiteTransactionStore {
    let connection = Connection::open_in_memory().unwrap();
    let store = SQLiteTransactionStore::new(Arc::new(Mutex::new(connection)));
    store.initialize().unwrap();
    store
}

/// An in-memory store holding `transactions`, which get IDs 1, 2, 3... in order.
pub(crate) fn get_test_store_with(transactions: Vec<TransactionBuilder>) -> SQLiteTransactionStore {
    let store = get_test_store();
    store.add_batch(transactions).unwrap();
    store
}
