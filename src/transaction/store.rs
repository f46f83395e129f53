//! The transaction store: the only code that reads or writes the transaction table.

use std::{
    ops::RangeInclusive,
    sync::{Arc, Mutex, MutexGuard},
};

use rusqlite::{Connection, params};
use time::Date;

use crate::{Error, database_id::TransactionId, db::initialize_db};

use super::core::{Transaction, TransactionBuilder, map_transaction_row};

/// Handles the creation, retrieval and aggregation of transactions.
///
/// Every date range is inclusive at both ends and every list of transactions
/// is ordered by date, newest first.
pub trait TransactionStore {
    /// Create the backing table if it does not already exist.
    fn initialize(&self) -> Result<(), Error>;

    /// Insert a new transaction and return its ID.
    fn add(&self, transaction: TransactionBuilder) -> Result<TransactionId, Error>;

    /// Insert many transactions at once.
    ///
    /// Either all transactions are inserted or, if any insert fails, none are.
    fn add_batch(&self, transactions: Vec<TransactionBuilder>) -> Result<usize, Error>;

    /// Retrieve the transactions dated within `date_range`.
    fn get(&self, date_range: RangeInclusive<Date>) -> Result<Vec<Transaction>, Error>;

    /// Retrieve a transaction by its ID.
    fn get_by_id(&self, id: TransactionId) -> Result<Transaction, Error>;

    /// Replace the date, description and amount of the transaction with the same ID.
    fn update(&self, transaction: &Transaction) -> Result<(), Error>;

    /// Remove a transaction. Removing a transaction that does not exist is not an error.
    fn delete(&self, id: TransactionId) -> Result<(), Error>;

    /// The sum of the amounts of the transactions dated within `date_range`.
    fn get_total(&self, date_range: RangeInclusive<Date>) -> Result<i64, Error>;

    /// The number of transactions dated within `date_range`.
    fn get_count(&self, date_range: RangeInclusive<Date>) -> Result<u64, Error>;

    /// The number of transactions in the store.
    fn get_count_all(&self) -> Result<u64, Error>;
}

/// Stores transactions in a SQLite database.
///
/// Transactions with the same date are ordered by descending ID, i.e. the
/// most recently added transaction comes first.
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    ///
    /// Call [TransactionStore::initialize] before using the store on a new database.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)
    }
}

type RowsAffected = usize;

impl TransactionStore for SQLiteTransactionStore {
    fn initialize(&self) -> Result<(), Error> {
        initialize_db(&*self.lock()?)
    }

    /// Insert a new transaction and return its ID.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] if there is a SQL error.
    fn add(&self, transaction: TransactionBuilder) -> Result<TransactionId, Error> {
        let connection = self.lock()?;

        let id = connection
            .prepare(
                "INSERT INTO \"transaction\" (date, description, amount)
                 VALUES (?1, ?2, ?3)
                 RETURNING id",
            )?
            .query_row(
                params![transaction.date, transaction.description, transaction.amount],
                |row| row.get(0),
            )?;

        Ok(id)
    }

    /// Insert many transactions inside a single SQL transaction.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] if any insert fails, in
    /// which case no transactions are inserted.
    fn add_batch(&self, transactions: Vec<TransactionBuilder>) -> Result<usize, Error> {
        let connection = self.lock()?;

        // Dropping `tx` without committing rolls back every insert made so far.
        let tx = connection.unchecked_transaction()?;

        let mut insert_count = 0;

        {
            let mut stmt = tx.prepare(
                "INSERT INTO \"transaction\" (date, description, amount) VALUES (?1, ?2, ?3)",
            )?;

            for transaction in transactions {
                insert_count += stmt.execute(params![
                    transaction.date,
                    transaction.description,
                    transaction.amount
                ])?;
            }
        }

        tx.commit()?;

        Ok(insert_count)
    }

    /// Retrieve the transactions dated within `date_range`, newest first.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] if there is a SQL error.
    fn get(&self, date_range: RangeInclusive<Date>) -> Result<Vec<Transaction>, Error> {
        let connection = self.lock()?;

        let mut stmt = connection.prepare(
            "SELECT id, amount, description, date FROM \"transaction\"
             WHERE date BETWEEN ?1 AND ?2
             ORDER BY date DESC, id DESC",
        )?;

        let transactions = stmt
            .query_map(
                params![date_range.start(), date_range.end()],
                map_transaction_row,
            )?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(transactions)
    }

    /// Retrieve a transaction by its `id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a valid transaction,
    /// - or [Error::SqlError] there is some other SQL error.
    fn get_by_id(&self, id: TransactionId) -> Result<Transaction, Error> {
        let transaction = self
            .lock()?
            .prepare("SELECT id, amount, description, date FROM \"transaction\" WHERE id = :id")?
            .query_row(&[(":id", &id)], map_transaction_row)?;

        Ok(transaction)
    }

    /// Replace the fields of the transaction with the ID `transaction.id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::UpdateMissingTransaction] if no transaction has the ID `transaction.id`,
    /// - or [Error::SqlError] there is some other SQL error.
    fn update(&self, transaction: &Transaction) -> Result<(), Error> {
        let rows_affected: RowsAffected = self.lock()?.execute(
            "UPDATE \"transaction\"
             SET date = ?1, description = ?2, amount = ?3
             WHERE id = ?4",
            params![
                transaction.date,
                transaction.description,
                transaction.amount,
                transaction.id
            ],
        )?;

        if rows_affected == 0 {
            return Err(Error::UpdateMissingTransaction);
        }

        Ok(())
    }

    fn delete(&self, id: TransactionId) -> Result<(), Error> {
        let rows_affected: RowsAffected = self
            .lock()?
            .execute("DELETE FROM \"transaction\" WHERE id = :id", &[(":id", &id)])?;

        if rows_affected == 0 {
            tracing::debug!("tried to delete transaction {id} which does not exist");
        }

        Ok(())
    }

    fn get_total(&self, date_range: RangeInclusive<Date>) -> Result<i64, Error> {
        self.lock()?
            .query_row(
                "SELECT COALESCE(SUM(amount), 0) FROM \"transaction\" WHERE date BETWEEN ?1 AND ?2",
                params![date_range.start(), date_range.end()],
                |row| row.get(0),
            )
            .map_err(Error::from)
    }

    fn get_count(&self, date_range: RangeInclusive<Date>) -> Result<u64, Error> {
        self.lock()?
            .query_row(
                "SELECT COUNT(id) FROM \"transaction\" WHERE date BETWEEN ?1 AND ?2",
                params![date_range.start(), date_range.end()],
                |row| row.get::<_, i64>(0),
            )
            .map(i64::unsigned_abs)
            .map_err(Error::from)
    }

    fn get_count_all(&self) -> Result<u64, Error> {
        self.lock()?
            .query_row("SELECT COUNT(id) FROM \"transaction\"", [], |row| {
                row.get::<_, i64>(0)
            })
            .map(i64::unsigned_abs)
            .map_err(Error::from)
    }
}

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                description TEXT NOT NULL,
                amount INTEGER NOT NULL
                )",
        (),
    )?;

    // Ensure the sequence starts at 1
    connection.execute(
        "INSERT INTO sqlite_sequence (name, seq)
         SELECT 'transaction', 0
         WHERE NOT EXISTS (SELECT 1 FROM sqlite_sequence WHERE name = 'transaction')",
        (),
    )?;

    // Every range query filters and sorts on the date.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transaction_date ON \"transaction\"(date);",
        (),
    )?;

    Ok(())
}
