//! Shared maud templates, style constants and formatting helpers.

use std::sync::OnceLock;

use maud::{DOCTYPE, Markup, html};
use numfmt::{Formatter, Precision, Scales};

use crate::endpoints;

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "px-4 py-2 bg-blue-500 \
    dark:bg-blue-600 disabled:bg-blue-700 hover:enabled:bg-blue-600 \
    hover:enabled:dark:bg-blue-700 text-white rounded";

pub const BUTTON_DELETE_STYLE: &str = "text-red-600 hover:text-red-500 \
    dark:text-red-500 dark:hover:text-red-400 underline bg-transparent \
    border-none cursor-pointer";

pub const LINK_STYLE: &str = "text-blue-600 hover:text-blue-500 \
    dark:text-blue-500 dark:hover:text-blue-400 underline";

// Form styles
pub const FORM_LABEL_STYLE: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full p-2.5 rounded text-sm \
    text-gray-900 dark:text-white disabled:text-gray-500 bg-gray-50 \
    dark:bg-gray-700 border border-gray-300 dark:border-gray-600 \
    dark:placeholder-gray-400 focus:ring-blue-600 focus:border-blue-600 \
    focus:dark:border-blue-500 focus:dark:ring-blue-500";

// Table styles
pub const TABLE_HEADER_STYLE: &str = "text-xs text-gray-700 uppercase \
    bg-gray-50 dark:bg-gray-700 dark:text-gray-400";

pub const TABLE_ROW_STYLE: &str = "bg-white border-b dark:bg-gray-800 dark:border-gray-700";

pub const TABLE_CELL_STYLE: &str = "px-6 py-4";

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "flex flex-col items-center px-6 py-8 mx-auto lg:py-5 text-gray-900 dark:text-white";

// Scripts
const HTMX_SRC: &str = "https://unpkg.com/htmx.org@2.0.8/dist/htmx.min.js";
const HTMX_INTEGRITY: &str =
    "sha384-/TgkGk7p307TH7EXJDuUlgG3Ce1UVolAOFopFekQkkXihi5u/6OCvVKyz1W+idaz";
const HTMX_RESPONSE_TARGETS_SRC: &str = "https://unpkg.com/htmx-ext-response-targets@2.0.4";

pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Ledger" }
                link rel="icon" href=(endpoints::FAVICON);
                link href="/static/main.css" rel="stylesheet";

                script src=(HTMX_SRC) integrity=(HTMX_INTEGRITY) crossorigin="anonymous" {}
                script src=(HTMX_RESPONSE_TARGETS_SRC) crossorigin="anonymous" {}

                style
                {
                    r#"
                    .htmx-indicator {
                        display: none;
                    }

                    .htmx-request .htmx-indicator, .htmx-request.htmx-indicator {
                        display: inline;
                    }
                    "#
                }
            }

            body
                hx-ext="response-targets"
                class="container max-w-full min-h-screen bg-gray-50 dark:bg-gray-900"
            {
                (content)

                // Alert container for out-of-band swaps
                div
                    id="alert-container"
                    class="hidden w-full max-w-md px-4"
                    style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
                {}
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    // Template adapted from https://flowbite.com/blocks/marketing/404/
    let content = html!(
        section class="bg-white dark:bg-gray-900"
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-blue-600 dark:text-blue-500"
                    {
                        (header)
                    }

                    p
                        class="mb-4 text-3xl md:text-4xl tracking-tight
                            font-bold text-gray-900 dark:text-white"
                    {
                        (description)
                    }

                    p
                        class="mb-4 text-1xl md:text-2xl tracking-tight
                            text-gray-900 dark:text-white"
                    {
                        (fix)
                    }

                    a
                        href=(endpoints::ROOT)
                        class="inline-flex text-white bg-blue-600
                            hover:bg-blue-800 focus:ring-4 focus:outline-hidden
                            focus:ring-blue-300 font-medium rounded text-sm px-5
                            py-2.5 text-center dark:focus:ring-blue-900 my-4"
                    {
                        "Back to Homepage"
                    }
                }
            }
        }
    );

    base(title, &content)
}

pub fn loading_spinner() -> Markup {
    // Spinner SVG adapted from https://flowbite.com/docs/components/spinner/
    html! {
        svg
            aria-hidden="true"
            role="status"
            class="htmx-indicator inline w-4 h-4 me-2 mb-1 animate-spin"
            viewBox="0 0 100 101"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
        {
            path
                d="M100 50.5908C100 78.2051 77.6142 100.591 50 100.591C22.3858 100.591 0 78.2051 0 50.5908C0 22.9766 22.3858 0.59082 50 0.59082C77.6142 0.59082 100 22.9766 100 50.5908ZM9.08144 50.5908C9.08144 73.1895 27.4013 91.5094 50 91.5094C72.5987 91.5094 90.9186 73.1895 90.9186 50.5908C90.9186 27.9921 72.5987 9.67226 50 9.67226C27.4013 9.67226 9.08144 27.9921 9.08144 50.5908Z"
                fill="#E5E7EB" {}
            path
                d="M93.9676 39.0409C96.393 38.4038 97.8624 35.9116 97.0079 33.5539C95.2932 28.8227 92.871 24.3692 89.8167 20.348C85.8452 15.1192 80.8826 10.7238 75.2124 7.41289C69.5422 4.10194 63.2754 1.94025 56.7698 1.05124C51.7666 0.367541 46.6976 0.446843 41.7345 1.27873C39.2613 1.69328 37.813 4.19778 38.4501 6.62326C39.0873 9.04874 41.5694 10.4717 44.0505 10.1071C47.8511 9.54855 51.7191 9.52689 55.5402 10.0491C60.8642 10.7766 65.9928 12.5457 70.6331 15.2552C75.2735 17.9648 79.3347 21.5619 82.5849 25.841C84.9175 28.9121 86.7997 32.2913 88.1811 35.8758C89.083 38.2158 91.5421 39.6781 93.9676 39.0409Z"
                fill="currentColor" {}
        }
    }
}

/// Format an amount in minor units (cents) as dollars, e.g. `-123456` as `-$1,234.56`.
///
/// Dollars and cents are split with integer arithmetic so that every `i64`
/// renders exactly.
pub fn format_currency(cents: i64) -> String {
    let sign = if cents < 0 { "-$" } else { "$" };
    let cents = cents.unsigned_abs();

    format!("{sign}{}.{:02}", group_thousands(cents / 100), cents % 100)
}

/// Write `number` with a comma between each group of three digits.
fn group_thousands(number: u64) -> String {
    const BILLION: u64 = 1_000_000_000;

    static GROUPING_FMT: OnceLock<Formatter> = OnceLock::new();

    let grouping_fmt = GROUPING_FMT.get_or_init(|| {
        Formatter::default()
            .scales(Scales::none())
            .precision(Precision::Decimals(0))
    });

    // numfmt switches to scientific notation past 12 integer digits, so only
    // the digits above the last nine go through it.
    if number < BILLION {
        return grouping_fmt.fmt_string(number as f64);
    }

    let low = number % BILLION;

    format!(
        "{},{:03},{:03},{:03}",
        grouping_fmt.fmt_string((number / BILLION) as f64),
        low / 1_000_000,
        low / 1_000 % 1_000,
        low % 1_000
    )
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use maud::html;

    use super::{HTMX_RESPONSE_TARGETS_SRC, HTMX_SRC, base, format_currency, loading_spinner};

    #[test]
    fn formats_zero() {
        assert_eq!(format_currency(0), "$0.00");
    }

    #[test]
    fn formats_thousands_with_separator() {
        assert_eq!(format_currency(123456), "$1,234.56");
    }

    #[test]
    fn formats_negative_with_trailing_zero() {
        assert_eq!(format_currency(-1230), "-$12.30");
    }

    #[test]
    fn formats_whole_dollars() {
        assert_eq!(format_currency(100), "$1.00");
    }

    #[test]
    fn formats_single_cent() {
        assert_eq!(format_currency(1), "$0.01");
    }

    #[test]
    fn formats_large_amounts_without_exponent() {
        assert_eq!(format_currency(1_000_000_000_000_000), "$10,000,000,000,000.00");
        assert_eq!(format_currency(123_456_789_012), "$1,234,567,890.12");
    }

    #[test]
    fn formats_extreme_values_exactly() {
        assert_eq!(format_currency(i64::MAX), "$92,233,720,368,547,758.07");
        assert_eq!(format_currency(i64::MIN), "-$92,233,720,368,547,758.08");
    }

    #[test]
    fn loading_spinner_is_valid_html() {
        let html = Html::parse_fragment(&loading_spinner().into_string());

        assert!(html.errors.is_empty(), "got {:?}", html.errors);
        assert_eq!(html.select(&Selector::parse("path").unwrap()).count(), 2);
    }

    #[test]
    fn base_loads_pinned_htmx_scripts() {
        let page = Html::parse_document(&base("Test", &html! { p { "content" } }).into_string());

        let sources: Vec<&str> = page
            .select(&Selector::parse("head script[src]").unwrap())
            .filter_map(|script| script.value().attr("src"))
            .collect();
        assert_eq!(sources, [HTMX_SRC, HTMX_RESPONSE_TARGETS_SRC]);
    }
}
