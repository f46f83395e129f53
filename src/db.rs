//! Database setup shared by the server and the command line tools.

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};

use crate::{Error, transaction::create_transaction_table};

/// Create the application's tables if they do not exist yet.
///
/// All tables are created inside one exclusive SQL transaction, so a
/// database is either fully initialized or left untouched.
///
/// # Errors
/// Returns an [Error::SqlError] if a table could not be created.
pub fn initialize_db(connection: &Connection) -> Result<(), Error> {
    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_transaction_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use super::initialize_db;

    #[test]
    fn creates_transaction_table() {
        let connection = Connection::open_in_memory().unwrap();

        initialize_db(&connection).unwrap();

        let count: i64 = connection
            .query_row("SELECT COUNT(*) FROM \"transaction\"", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn can_initialize_twice() {
        let connection = Connection::open_in_memory().unwrap();

        initialize_db(&connection).unwrap();

        assert_eq!(initialize_db(&connection), Ok(()));
    }
}
