//! Converts user input from forms and query strings into the canonical forms
//! used by the transaction store.
//!
//! Malformed input never produces an error here. Amounts fall back to zero
//! and dates fall back to their documented defaults.

use std::ops::RangeInclusive;

use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::Deserialize;
use time::{Date, Duration, format_description::BorrowedFormatItem, macros::format_description};

use crate::Error;

/// The number of days before today that a range starts when no start date is given.
pub const DEFAULT_RANGE_DAYS: u32 = 90;

const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// The number of minor units (cents) in one major unit (dollar).
const MINOR_UNITS_PER_MAJOR: i64 = 100;

/// Parse a decimal string such as `"12.34"` or `"1.5e2"` into minor units.
///
/// Digits beyond the second decimal place are truncated toward zero.
/// Malformed input (including the empty string) and values too large to fit
/// in an `i64` are logged and parsed as zero.
pub fn parse_amount(input: &str) -> i64 {
    try_parse_amount(input)
        .inspect_err(|error| tracing::warn!("defaulting amount to zero: {error}"))
        .unwrap_or(0)
}

fn try_parse_amount(input: &str) -> Result<i64, Error> {
    let invalid = || Error::InvalidFormat(input.to_owned());
    let trimmed = input.trim();

    let major_units = Decimal::from_str_exact(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| invalid())?;

    major_units
        .checked_mul(Decimal::from(MINOR_UNITS_PER_MAJOR))
        .map(|minor_units| minor_units.trunc())
        .and_then(|minor_units| minor_units.to_i64())
        .ok_or_else(invalid)
}

/// Parse a `YYYY-MM-DD` date, returning `None` for empty or malformed input.
pub fn parse_date(input: &str) -> Option<Date> {
    let input = input.trim();

    if input.is_empty() {
        return None;
    }

    Date::parse(input, DATE_FORMAT)
        .inspect_err(|error| tracing::warn!("ignoring malformed date {input:?}: {error}"))
        .ok()
}

/// Format a date as `YYYY-MM-DD` for form inputs and query strings.
pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

/// The query parameters for selecting a range of transactions.
///
/// Dates are kept as raw strings so that malformed values can fall back to
/// their defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct DateRangeQuery {
    /// The first date to include, defaults to `default_range` days before today.
    pub date_since: Option<String>,
    /// The last date to include, defaults to today.
    pub date_until: Option<String>,
    /// Overrides the configured number of days used for the default start date.
    pub default_range: Option<u32>,
}

impl DateRangeQuery {
    /// Resolve the query into an inclusive date range relative to `today`.
    ///
    /// `default_range_days` is used when the query does not specify `default_range`.
    pub fn resolve(&self, default_range_days: u32, today: Date) -> RangeInclusive<Date> {
        let default_range_days = self.default_range.unwrap_or(default_range_days);

        let date_since = self
            .date_since
            .as_deref()
            .and_then(parse_date)
            .unwrap_or_else(|| days_before(today, default_range_days));
        let date_until = self
            .date_until
            .as_deref()
            .and_then(parse_date)
            .unwrap_or(today);

        date_since..=date_until
    }
}

fn days_before(date: Date, days: u32) -> Date {
    date.checked_sub(Duration::days(days.into()))
        .unwrap_or(Date::MIN)
}


#[cfg(test)]
mod date_range_tests {
    use time::macros::date;

    use super::{DateRangeQuery, format_date, parse_date};

    #[test]
    fn parses_iso_date() {
        assert_eq!(parse_date("2023-10-01"), Some(date!(2023 - 10 - 01)));
    }

    #[test]
    fn rejects_malformed_dates() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("2023-13-01"), None);
        assert_eq!(parse_date("01/10/2023"), None);
        assert_eq!(parse_date("yesterday"), None);
    }

    #[test]
    fn formats_date_with_zero_padding() {
        assert_eq!(format_date(date!(2023 - 01 - 05)), "2023-01-05");
    }

    #[test]
    fn uses_given_dates() {
        let query = DateRangeQuery {
            date_since: Some("2023-10-01".to_owned()),
            date_until: Some("2023-10-03".to_owned()),
            default_range: None,
        };

        let range = query.resolve(90, date!(2025 - 01 - 01));

        assert_eq!(range, date!(2023 - 10 - 01)..=date!(2023 - 10 - 03));
    }

    #[test]
    fn defaults_to_configured_days_before_today() {
        let today = date!(2024 - 03 - 31);

        let range = DateRangeQuery::default().resolve(90, today);

        assert_eq!(range, date!(2024 - 01 - 01)..=today);
    }

    #[test]
    fn query_default_range_overrides_configured_days() {
        let today = date!(2024 - 03 - 31);
        let query = DateRangeQuery {
            default_range: Some(30),
            ..Default::default()
        };

        let range = query.resolve(90, today);

        assert_eq!(range, date!(2024 - 03 - 01)..=today);
    }

    #[test]
    fn malformed_and_empty_dates_use_defaults() {
        let today = date!(2024 - 03 - 31);
        let query = DateRangeQuery {
            date_since: Some("".to_owned()),
            date_until: Some("not-a-date".to_owned()),
            default_range: Some(0),
        };

        let range = query.resolve(90, today);

        assert_eq!(range, today..=today);
    }
}
