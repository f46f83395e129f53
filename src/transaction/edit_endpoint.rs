//! Defines the endpoint for updating an existing transaction.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use time::OffsetDateTime;

use crate::database_id::TransactionId;

use super::{
    core::Transaction,
    form::TransactionForm,
    store::{SQLiteTransactionStore, TransactionStore},
    view::transaction_row_view,
};

/// A route handler for replacing the date, description and amount of a transaction.
///
/// An empty or malformed date is replaced with today's date (UTC). Responds
/// with the updated read-only row, or a 404 alert if the transaction does not
/// exist.
pub async fn update_transaction_endpoint(
    State(store): State<SQLiteTransactionStore>,
    Path(transaction_id): Path<TransactionId>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let today = OffsetDateTime::now_utc().date();
    let builder = form.into_builder(today);

    let transaction = Transaction {
        id: transaction_id,
        amount: builder.amount,
        description: builder.description,
        date: builder.date,
    };

    match store.update(&transaction) {
        Ok(()) => transaction_row_view(&transaction).into_response(),
        Err(error) => {
            tracing::warn!("could not update transaction {transaction_id}: {error}");
            error.into_alert_response()
        }
    }
}
