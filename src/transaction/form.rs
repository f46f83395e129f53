//! The form submitted when creating or editing a transaction.

use serde::Deserialize;
use time::Date;

use super::{
    core::TransactionBuilder,
    normalize::{parse_amount, parse_date},
};

/// The raw form fields for a transaction.
///
/// Every field is kept as a string so that empty or malformed values fall
/// back to defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct TransactionForm {
    /// The date in `YYYY-MM-DD` format, defaults to today.
    #[serde(default)]
    pub date: String,
    /// Text detailing the transaction.
    #[serde(default)]
    pub description: String,
    /// The amount in dollars, e.g. `"-12.34"`, defaults to zero.
    #[serde(default)]
    pub amount: String,
}

impl TransactionForm {
    /// Normalize the form into a transaction, using `today` for a missing date.
    pub fn into_builder(self, today: Date) -> TransactionBuilder {
        TransactionBuilder {
            amount: parse_amount(&self.amount),
            date: parse_date(&self.date).unwrap_or(today),
            description: self.description,
        }
    }
}
