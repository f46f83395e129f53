//! Defines the endpoint for creating a new transaction.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use time::OffsetDateTime;

use super::{
    form::TransactionForm,
    store::{SQLiteTransactionStore, TransactionStore},
    view::transaction_row_view,
};

/// A route handler for creating a new transaction.
///
/// Responds with the new table row so HTMX can insert it at the top of the table.
pub async fn create_transaction_endpoint(
    State(store): State<SQLiteTransactionStore>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let today = OffsetDateTime::now_utc().date();
    let builder = form.into_builder(today);

    let transaction = store
        .add(builder)
        .and_then(|transaction_id| store.get_by_id(transaction_id));

    match transaction {
        Ok(transaction) => {
            tracing::info!("created transaction {}", transaction.id);
            transaction_row_view(&transaction).into_response()
        }
        Err(error) => error.into_alert_response(),
    }
}
