//! HTML rendering for the transactions page and its HTMX fragments.

use std::ops::RangeInclusive;

use maud::{Markup, html};
use time::Date;
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        base, format_currency, loading_spinner,
    },
};

use super::{core::Transaction, normalize::format_date};

/// The max number of graphemes to display in the transaction table rows before
/// truncating and displaying ellipses.
const MAX_DESCRIPTION_GRAPHEMES: usize = 48;

/// The ID of the element the transaction table fragment is swapped into.
pub(crate) const TABLE_CONTAINER_ID: &str = "transaction-table";

/// The ID of the table body that holds one row per transaction.
pub(crate) const TABLE_BODY_ID: &str = "transaction-rows";

fn amount_class(amount: i64) -> &'static str {
    if amount < 0 {
        "text-red-700 dark:text-red-300"
    } else {
        "text-green-700 dark:text-green-300"
    }
}

fn row_id(transaction: &Transaction) -> String {
    format!("transaction-{}", transaction.id)
}

fn truncate_description(description: &str) -> String {
    let graphemes: Vec<&str> = description.graphemes(true).collect();

    if graphemes.len() > MAX_DESCRIPTION_GRAPHEMES {
        format!("{}…", graphemes[..MAX_DESCRIPTION_GRAPHEMES].concat())
    } else {
        description.to_owned()
    }
}

/// The full transactions page.
///
/// The table itself is loaded by HTMX from [endpoints::TRANSACTION_TABLE]
/// once the page has loaded and whenever the filter form changes.
pub(crate) fn transactions_page_view(range: &RangeInclusive<Date>, today: Date) -> Markup {
    let table_target = format!("#{TABLE_CONTAINER_ID}");
    let rows_target = format!("#{TABLE_BODY_ID}");

    let content = html! {
        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="w-full max-w-5xl space-y-4"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { "Transactions" }
                }

                form
                    id="date-filter"
                    class="flex flex-wrap gap-4 items-end"
                    hx-get=(endpoints::TRANSACTION_TABLE)
                    hx-target=(table_target)
                    hx-trigger="load, change"
                    hx-indicator="#table-indicator"
                {
                    div
                    {
                        label for="date_since" class=(FORM_LABEL_STYLE) { "From" }
                        input
                            type="date"
                            name="date_since"
                            id="date_since"
                            class=(FORM_TEXT_INPUT_STYLE)
                            value=(format_date(*range.start()));
                    }

                    div
                    {
                        label for="date_until" class=(FORM_LABEL_STYLE) { "To" }
                        input
                            type="date"
                            name="date_until"
                            id="date_until"
                            class=(FORM_TEXT_INPUT_STYLE)
                            value=(format_date(*range.end()));
                    }

                    span id="table-indicator" { (loading_spinner()) }
                }

                form
                    id="create-transaction"
                    class="flex flex-wrap gap-4 items-end"
                    hx-post=(endpoints::TRANSACTIONS_API)
                    hx-target=(rows_target)
                    hx-swap="afterbegin"
                    hx-target-error="#alert-container"
                {
                    div
                    {
                        label for="new-date" class=(FORM_LABEL_STYLE) { "Date" }
                        input
                            type="date"
                            name="date"
                            id="new-date"
                            class=(FORM_TEXT_INPUT_STYLE)
                            value=(format_date(today))
                            required;
                    }

                    div class="grow"
                    {
                        label for="new-description" class=(FORM_LABEL_STYLE) { "Description" }
                        input
                            type="text"
                            name="description"
                            id="new-description"
                            class=(FORM_TEXT_INPUT_STYLE);
                    }

                    div
                    {
                        label for="new-amount" class=(FORM_LABEL_STYLE) { "Amount" }
                        input
                            type="number"
                            name="amount"
                            id="new-amount"
                            step="0.01"
                            placeholder="0.00"
                            class=(FORM_TEXT_INPUT_STYLE)
                            required;
                    }

                    button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add" }
                }

                div id=(TABLE_CONTAINER_ID) {}
            }
        }
    };

    base("Transactions", &content)
}

/// The table of transactions in `range` along with their count and total.
pub(crate) fn transaction_table_view(
    transactions: &[Transaction],
    range: &RangeInclusive<Date>,
    count: u64,
    total: i64,
) -> Markup {
    html! {
        p class="text-sm text-gray-700 dark:text-gray-300" data-summary="true"
        {
            span data-count=(count) { (count) " transactions" }
            " from " (format_date(*range.start())) " to " (format_date(*range.end())) ", totalling "
            span data-total=(total) class=(amount_class(total)) { (format_currency(total)) }
        }

        table class="w-full my-2 text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
        {
            thead class=(TABLE_HEADER_STYLE)
            {
                tr
                {
                    th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                    th scope="col" class="px-6 py-3 text-right" { "Amount" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                }
            }

            tbody id=(TABLE_BODY_ID)
            {
                @for transaction in transactions {
                    (transaction_row_view(transaction))
                }
            }
        }

        @if transactions.is_empty() {
            p data-empty-state="true" class="px-6 py-4 text-center" { "No transactions in this range." }
        }
    }
}

/// A single read-only table row.
pub(crate) fn transaction_row_view(transaction: &Transaction) -> Markup {
    let transaction_url = format_endpoint(endpoints::TRANSACTION, transaction.id);
    let edit_url = format_endpoint(endpoints::EDIT_TRANSACTION, transaction.id);

    html! {
        tr id=(row_id(transaction)) class=(TABLE_ROW_STYLE)
        {
            td class=(TABLE_CELL_STYLE) { (format_date(transaction.date)) }
            td class=(TABLE_CELL_STYLE) title=(transaction.description)
            {
                (truncate_description(&transaction.description))
            }
            td class={ (TABLE_CELL_STYLE) " text-right " (amount_class(transaction.amount)) }
            {
                (format_currency(transaction.amount))
            }
            td class=(TABLE_CELL_STYLE)
            {
                div class="flex gap-4"
                {
                    button
                        type="button"
                        class=(LINK_STYLE)
                        hx-get=(edit_url)
                        hx-target="closest tr"
                        hx-swap="outerHTML"
                    {
                        "Edit"
                    }

                    button
                        type="button"
                        class=(BUTTON_DELETE_STYLE)
                        hx-delete=(transaction_url)
                        hx-confirm="Are you sure you want to delete this transaction?"
                        hx-target="closest tr"
                        hx-target-error="#alert-container"
                        hx-swap="outerHTML"
                    {
                        "Delete"
                    }
                }
            }
        }
    }
}

/// A table row with inputs for editing a transaction.
pub(crate) fn transaction_row_edit_view(transaction: &Transaction) -> Markup {
    let transaction_url = format_endpoint(endpoints::TRANSACTION, transaction.id);
    let amount = format!(
        "{}{}.{:02}",
        if transaction.amount < 0 { "-" } else { "" },
        transaction.amount.unsigned_abs() / 100,
        transaction.amount.unsigned_abs() % 100
    );

    html! {
        tr id=(row_id(transaction)) class=(TABLE_ROW_STYLE) hx-target="this" hx-swap="outerHTML"
        {
            td class=(TABLE_CELL_STYLE)
            {
                input
                    type="date"
                    name="date"
                    aria-label="Date"
                    class=(FORM_TEXT_INPUT_STYLE)
                    value=(format_date(transaction.date));
            }
            td class=(TABLE_CELL_STYLE)
            {
                input
                    type="text"
                    name="description"
                    aria-label="Description"
                    class=(FORM_TEXT_INPUT_STYLE)
                    value=(transaction.description);
            }
            td class=(TABLE_CELL_STYLE)
            {
                input
                    type="number"
                    name="amount"
                    aria-label="Amount"
                    step="0.01"
                    class=(FORM_TEXT_INPUT_STYLE)
                    value=(amount);
            }
            td class=(TABLE_CELL_STYLE)
            {
                div class="flex gap-4"
                {
                    button
                        type="button"
                        class=(LINK_STYLE)
                        hx-put=(transaction_url)
                        hx-include="closest tr"
                        hx-target-error="#alert-container"
                    {
                        "Save"
                    }

                    button
                        type="button"
                        class=(LINK_STYLE)
                        hx-get=(transaction_url)
                    {
                        "Cancel"
                    }
                }
            }
        }
    }
}
