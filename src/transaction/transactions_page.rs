//! The transactions page: date filter, new transaction form and the table container.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::Query;
use time::OffsetDateTime;

use crate::AppState;

use super::{normalize::DateRangeQuery, view::transactions_page_view};

/// The state needed to render the transactions page.
#[derive(Debug, Clone)]
pub struct TransactionsPageState {
    /// How many days back the date filter starts by default.
    pub default_range_days: u32,
}

impl FromRef<AppState> for TransactionsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            default_range_days: state.default_range_days,
        }
    }
}

/// Render the transactions page.
///
/// The date filter is prefilled from the query string so that filtered
/// views can be bookmarked.
pub async fn get_transactions_page(
    State(state): State<TransactionsPageState>,
    Query(query): Query<DateRangeQuery>,
) -> Response {
    let today = OffsetDateTime::now_utc().date();
    let range = query.resolve(state.default_range_days, today);

    transactions_page_view(&range, today).into_response()
}
