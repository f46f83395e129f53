//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/transaction/{transaction_id}', use [format_endpoint].

/// The root route which redirects to the transactions page.
pub const ROOT: &str = "/";
/// The page for displaying transactions.
pub const TRANSACTIONS_VIEW: &str = "/transactions";
/// The HTML fragment for the table of transactions in a date range.
pub const TRANSACTION_TABLE: &str = "/transaction/table";
/// The route to create a transaction.
pub const TRANSACTIONS_API: &str = "/transaction";
/// The route to get, update or delete a single transaction.
pub const TRANSACTION: &str = "/transaction/{transaction_id}";
/// The HTML fragment for editing a single transaction.
pub const EDIT_TRANSACTION: &str = "/transaction/{transaction_id}/edit";
/// The route for static files.
pub const STATIC: &str = "/static";
/// The site icon.
pub const FAVICON: &str = "/favicon.ico";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/transaction/{transaction_id}', '{transaction_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
