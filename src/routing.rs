//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};
use tower_http::services::{ServeDir, ServeFile};

use crate::{
    AppState, endpoints,
    not_found::get_404_not_found,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, get_transaction_edit_row,
        get_transaction_row, get_transaction_table, get_transactions_page,
        update_transaction_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::TRANSACTIONS_VIEW, get(get_transactions_page))
        .route(endpoints::TRANSACTION_TABLE, get(get_transaction_table))
        .route(
            endpoints::TRANSACTIONS_API,
            post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION,
            get(get_transaction_row)
                .put(update_transaction_endpoint)
                .delete(delete_transaction_endpoint),
        )
        .route(endpoints::EDIT_TRANSACTION, get(get_transaction_edit_row))
        .route_service(endpoints::FAVICON, ServeFile::new("static/favicon.ico"))
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the transactions page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::TRANSACTIONS_VIEW)
}


#[cfg(test)]
mod router_tests {
    use axum::http::{HeaderName, HeaderValue, StatusCode};
    use axum_test::TestServer;
    use scraper::{Html, Selector};
    use serde::Serialize;

    use crate::{AppState, build_router, endpoints, endpoints::format_endpoint};

    #[derive(Serialize)]
    struct TransactionForm<'a> {
        date: &'a str,
        description: &'a str,
        amount: &'a str,
    }

    fn get_test_server() -> TestServer {
        let state = AppState::in_memory().expect("Could not create app state.");
        let app = build_router(state);

        TestServer::new(app)
    }

    fn hx_request_header() -> HeaderName {
        HeaderName::from_static("hx-request")
    }

    fn row_ids(html: &str) -> Vec<String> {
        Html::parse_fragment(html)
            .select(&Selector::parse("tbody tr").unwrap())
            .filter_map(|row| row.value().attr("id").map(str::to_owned))
            .collect()
    }

    #[tokio::test]
    async fn root_redirects() {
        let server = get_test_server();

        server
            .get(endpoints::ROOT)
            .await
            .assert_status(StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn unknown_route_returns_not_found() {
        let server = get_test_server();

        server
            .get("/does-not-exist")
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn transactions_page_renders() {
        let server = get_test_server();

        let response = server.get(endpoints::TRANSACTIONS_VIEW).await;

        response.assert_status_ok();
        assert!(response.text().contains("Transactions"));
    }

    #[tokio::test]
    async fn create_edit_and_delete_transaction() {
        let server = get_test_server();
        let transaction_url = format_endpoint(endpoints::TRANSACTION, 1);

        server
            .post(endpoints::TRANSACTIONS_API)
            .form(&TransactionForm {
                date: "2023-10-02",
                description: "Lunch",
                amount: "-12.30",
            })
            .await
            .assert_status_ok();

        server
            .get(&format_endpoint(endpoints::EDIT_TRANSACTION, 1))
            .await
            .assert_status_ok();

        server
            .put(&transaction_url)
            .form(&TransactionForm {
                date: "2023-10-03",
                description: "Dinner",
                amount: "-20",
            })
            .await
            .assert_status_ok();

        let table = server
            .get(endpoints::TRANSACTION_TABLE)
            .add_header(hx_request_header(), HeaderValue::from_static("true"))
            .add_query_param("date_since", "2023-10-01")
            .add_query_param("date_until", "2023-10-03")
            .await
            .text();
        assert_eq!(row_ids(&table), ["transaction-1"]);
        assert!(table.contains("Dinner"), "got {table}");
        assert!(table.contains("-$20.00"), "got {table}");

        server.delete(&transaction_url).await.assert_status_ok();

        server
            .get(&transaction_url)
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn table_accepts_empty_query_parameters() {
        let server = get_test_server();

        server
            .get(&format!(
                "{}?date_since=&date_until=&default_range=",
                endpoints::TRANSACTION_TABLE
            ))
            .add_header(hx_request_header(), HeaderValue::from_static("true"))
            .await
            .assert_status_ok();
    }

    #[tokio::test]
    async fn update_missing_transaction_returns_not_found() {
        let server = get_test_server();

        server
            .put(&format_endpoint(endpoints::TRANSACTION, 5))
            .form(&TransactionForm {
                date: "2023-10-03",
                description: "Ghost",
                amount: "1",
            })
            .await
            .assert_status_not_found();
    }
}
