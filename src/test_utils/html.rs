use axum::{body::Body, response::Response};
use scraper::Html;

/// Read the whole response body as text.
pub(crate) async fn response_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Could not read response body");

    String::from_utf8(bytes.to_vec()).expect("Response body was not valid UTF-8")
}

/// Parse a response that renders a full page.
pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    Html::parse_document(&response_text(response).await)
}

/// Parse a response that renders a partial page, e.g. a form or an alert.
pub(crate) async fn parse_html_fragment(response: Response<Body>) -> Html {
    Html::parse_fragment(&response_text(response).await)
}

/// Parse a response made of `<tr>` elements.
///
/// The HTML parser discards table rows found outside a table, so the body is
/// placed inside a `<tbody>` before parsing.
pub(crate) async fn parse_html_table_rows(response: Response<Body>) -> Html {
    let rows = response_text(response).await;

    Html::parse_fragment(&format!("<table><tbody>{rows}</tbody></table>"))
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Invalid HTML, parser reported: {:?}",
        html.errors
    );
}
