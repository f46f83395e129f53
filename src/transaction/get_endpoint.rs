//! Endpoints for rendering a single transaction row, read-only or editable.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::database_id::TransactionId;

use super::{
    store::{SQLiteTransactionStore, TransactionStore},
    view::{transaction_row_edit_view, transaction_row_view},
};

/// Render the table row for a transaction.
///
/// Used to restore a row after cancelling an edit.
pub async fn get_transaction_row(
    State(store): State<SQLiteTransactionStore>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    match store.get_by_id(transaction_id) {
        Ok(transaction) => transaction_row_view(&transaction).into_response(),
        Err(error) => error.into_alert_response(),
    }
}

/// Render the table row for a transaction with inputs for editing it.
pub async fn get_transaction_edit_row(
    State(store): State<SQLiteTransactionStore>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    match store.get_by_id(transaction_id) {
        Ok(transaction) => transaction_row_edit_view(&transaction).into_response(),
        Err(error) => error.into_alert_response(),
    }
}
