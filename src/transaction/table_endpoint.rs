//! The fragment listing the transactions in a date range with their count and total.

use std::ops::RangeInclusive;

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::Query;
use axum_htmx::HxRequest;
use maud::Markup;
use time::{Date, OffsetDateTime};

use crate::{AppState, Error, endpoints};

use super::{
    normalize::{DateRangeQuery, format_date},
    store::{SQLiteTransactionStore, TransactionStore},
    view::transaction_table_view,
};

/// The state needed to render the transaction table.
#[derive(Debug, Clone)]
pub struct TransactionTableState {
    /// The store to read transactions from.
    pub transaction_store: SQLiteTransactionStore,
    /// How many days back the table reaches when no start date is given.
    pub default_range_days: u32,
}

impl FromRef<AppState> for TransactionTableState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
            default_range_days: state.default_range_days,
        }
    }
}

/// Render the table of transactions selected by the query's date range.
///
/// Missing or malformed dates fall back to the last `default_range_days`
/// days up to and including today (UTC). Requests that do not come from HTMX
/// are redirected to the transactions page with the same date range.
pub async fn get_transaction_table(
    State(state): State<TransactionTableState>,
    HxRequest(is_htmx_request): HxRequest,
    Query(query): Query<DateRangeQuery>,
) -> Response {
    let today = OffsetDateTime::now_utc().date();
    let range = query.resolve(state.default_range_days, today);

    if !is_htmx_request {
        return Redirect::to(&page_url(&range)).into_response();
    }

    match render_table(&state.transaction_store, range) {
        Ok(markup) => markup.into_response(),
        Err(error) => error.into_alert_response(),
    }
}

fn page_url(range: &RangeInclusive<Date>) -> String {
    format!(
        "{}?date_since={}&date_until={}",
        endpoints::TRANSACTIONS_VIEW,
        format_date(*range.start()),
        format_date(*range.end())
    )
}

fn render_table(
    store: &impl TransactionStore,
    range: RangeInclusive<Date>,
) -> Result<Markup, Error> {
    let transactions = store.get(range.clone())?;
    let count = store.get_count(range.clone())?;
    let total = store.get_total(range.clone())?;

    tracing::debug!(
        "rendering {count} transactions from {} to {}",
        range.start(),
        range.end()
    );

    Ok(transaction_table_view(&transactions, &range, count, total))
}
