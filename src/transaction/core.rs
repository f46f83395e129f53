//! Defines the core data model for transactions.

use rusqlite::Row;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::database_id::TransactionId;

// ============================================================================
// MODELS
// ============================================================================

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// A `Transaction` always refers to a row in the database. To create a new
/// transaction, use [Transaction::build] and pass the builder to
/// [TransactionStore::add](super::TransactionStore::add).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, assigned by the store.
    pub id: TransactionId,
    /// The amount of money spent or earned in minor units (cents).
    pub amount: i64,
    /// A text description of what the transaction was for.
    pub description: String,
    /// When the transaction happened.
    pub date: Date,
}

impl Transaction {
    /// Create a new, unsaved transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(amount: i64, date: Date, description: &str) -> TransactionBuilder {
        TransactionBuilder {
            amount,
            date,
            description: description.to_owned(),
        }
    }
}

/// A transaction that has not been saved to the database yet and therefore
/// has no ID.
///
/// # Examples
///
/// ```ignore
/// use time::macros::date;
///
/// use crate::transaction::Transaction;
///
/// let builder = Transaction::build(-4599, date!(2025 - 01 - 15), "Coffee shop purchase");
/// let id = store.add(builder)?;
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct TransactionBuilder {
    /// The monetary amount of the transaction in minor units (cents).
    ///
    /// Positive values represent income/credits, negative values represent
    /// expenses/debits.
    ///
    /// # Examples
    /// - `15000` - $150.00 salary deposit
    /// - `-4599` - $45.99 coffee shop purchase
    pub amount: i64,

    /// The date when the transaction occurred.
    pub date: Date,

    /// A human-readable description of the transaction.
    pub description: String,
}

impl From<Transaction> for TransactionBuilder {
    /// Discards the ID so the transaction can be inserted as a new row.
    fn from(transaction: Transaction) -> Self {
        Self {
            amount: transaction.amount,
            date: transaction.date,
            description: transaction.description,
        }
    }
}

/// Map a database row with the columns `id, amount, description, date` to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let amount = row.get(1)?;
    let description = row.get(2)?;
    let date = row.get(3)?;

    Ok(Transaction {
        id,
        amount,
        description,
        date,
    })
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::{Transaction, TransactionBuilder};

    #[test]
    fn builder_from_transaction_drops_id() {
        let transaction = Transaction {
            id: 42,
            amount: -1234,
            description: "Groceries".to_owned(),
            date: date!(2023 - 10 - 01),
        };

        let builder = TransactionBuilder::from(transaction);

        assert_eq!(
            builder,
            Transaction::build(-1234, date!(2023 - 10 - 01), "Groceries")
        );
    }
}
