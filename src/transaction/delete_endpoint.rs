//! Defines the endpoint for deleting a transaction.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, database_id::TransactionId};

use super::store::{SQLiteTransactionStore, TransactionStore};

/// A route handler for deleting a transaction.
///
/// The status code has to be 200 OK or HTMX will not remove the table row, so
/// the body only carries an out-of-band alert. Deleting a transaction that
/// does not exist succeeds.
pub async fn delete_transaction_endpoint(
    State(store): State<SQLiteTransactionStore>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    match store.delete(transaction_id) {
        Ok(()) => Alert::SuccessSimple {
            message: "Transaction deleted".to_owned(),
        }
        .into_response(),
        Err(error) => {
            tracing::error!("Could not delete transaction {transaction_id}: {error}");
            error.into_alert_response()
        }
    }
}
