#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! `HttpTickerApi` 集成测试（本地桩服务器）

mod common;

use std::time::Duration;

use common::{Route, StubServer};
use ticker_selector_provider::{ApiConfig, ApiError, HttpTickerApi, Industry, TickerApi};

fn client(server: &StubServer) -> HttpTickerApi {
    HttpTickerApi::new(&ApiConfig::new(&server.base_url)).expect("build client")
}

// ============ 搜索 ============

#[tokio::test]
async fn search_returns_candidates_in_server_order() {
    let server = StubServer::start(vec![Route::json(
        "/api/tickers/search/?q=705",
        r#"[{"code":"7203","name":"Toyota"},{"code":"7050","name":"Alpha"}]"#,
    )])
    .await;

    let tickers = client(&server).search_tickers("705").await.unwrap();

    let codes: Vec<_> = tickers.iter().map(|t| t.code.as_str()).collect();
    assert_eq!(codes, ["7203", "7050"]);
    assert_eq!(tickers[0].label(), "7203 Toyota");
    assert_eq!(server.requests(), ["/api/tickers/search/?q=705"]);
}

#[tokio::test]
async fn search_percent_encodes_query() {
    let server = StubServer::start(vec![Route::json("/api/tickers/search/", "[]")]).await;

    let tickers = client(&server).search_tickers("a&b").await.unwrap();

    assert!(tickers.is_empty());
    assert_eq!(server.requests(), ["/api/tickers/search/?q=a%26b"]);
}

// ============ 行业 ============

#[tokio::test]
async fn industries_and_children() {
    let server = StubServer::start(vec![
        Route::json(
            "/api/industries/",
            r#"[{"id":5,"name":"Transportation Equipment"},{"id":6,"name":"Banks"}]"#,
        ),
        Route::json(
            "/api/industries/5/tickers/",
            r#"[{"code":"7203","name":"Toyota"},{"code":"7267","name":"Honda"}]"#,
        ),
    ])
    .await;
    let api = client(&server);

    let industries = api.list_industries().await.unwrap();
    assert_eq!(industries[0], Industry::new(5, "Transportation Equipment"));

    let tickers = api.list_industry_tickers(5).await.unwrap();
    assert_eq!(tickers.len(), 2);
    assert_eq!(tickers[1].code, "7267");
}

// ============ 错误映射 ============

#[tokio::test]
async fn unknown_industry_maps_to_http_status() {
    let server = StubServer::start(Vec::new()).await;

    let err = client(&server).list_industry_tickers(99).await.unwrap_err();

    assert!(
        matches!(err, ApiError::HttpStatus { status: 404, .. }),
        "unexpected error: {err:?}"
    );
    assert!(err.is_expected());
}

#[tokio::test]
async fn html_body_maps_to_parse_error() {
    let server = StubServer::start(vec![Route::json(
        "/api/industries/",
        "<html>debug page</html>",
    )])
    .await;

    let err = client(&server).list_industries().await.unwrap_err();

    assert!(matches!(err, ApiError::ParseError { .. }), "unexpected error: {err:?}");
}

#[tokio::test]
async fn slow_server_maps_to_timeout() {
    let server = StubServer::start(vec![
        Route::json("/api/industries/", "[]").delayed(Duration::from_secs(3)),
    ])
    .await;
    let api = HttpTickerApi::new(
        &ApiConfig::new(&server.base_url).with_timeout(Duration::from_millis(200)),
    )
    .unwrap();

    let err = api.list_industries().await.unwrap_err();

    assert!(matches!(err, ApiError::Timeout { .. }), "unexpected error: {err:?}");
}

#[tokio::test]
async fn server_error_is_retried_when_enabled() {
    let server = StubServer::start(vec![Route::status("/api/industries/", 503, "busy")]).await;
    let api =
        HttpTickerApi::new(&ApiConfig::new(&server.base_url).with_max_retries(2)).unwrap();

    let err = api.list_industries().await.unwrap_err();

    assert!(matches!(err, ApiError::HttpStatus { status: 503, .. }));
    assert_eq!(server.requests().len(), 3);
}

#[tokio::test]
async fn no_retry_by_default() {
    let server = StubServer::start(vec![Route::status("/api/industries/", 503, "busy")]).await;

    let _ = client(&server).list_industries().await;

    assert_eq!(server.requests().len(), 1);
}

// ============ 健康检查 ============

#[tokio::test]
async fn health_check_reads_ok_body() {
    let server = StubServer::start(vec![Route::json("/health/", "OK")]).await;

    assert!(client(&server).health_check().await.unwrap());
}

#[tokio::test]
async fn health_check_false_on_error_status() {
    let server = StubServer::start(vec![Route::status("/health/", 500, "")]).await;

    assert!(!client(&server).health_check().await.unwrap());
}

#[tokio::test]
async fn connection_refused_maps_to_network_error() {
    let api = HttpTickerApi::new(
        &ApiConfig::new("http://127.0.0.1:9/").with_timeout(Duration::from_secs(2)),
    )
    .unwrap();

    let err = api.list_industries().await.unwrap_err();

    assert!(
        matches!(err, ApiError::NetworkError { .. } | ApiError::Timeout { .. }),
        "unexpected error: {err:?}"
    );
}
