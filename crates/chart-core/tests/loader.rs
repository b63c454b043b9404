// File: crates/chart-core/tests/loader.rs
// Purpose: HTTP loader behaviour against a local mock server.

use gdp_chart_core::{fetch_dataset, ChartError, DataLoader, DATA_URL};

const FIXTURE: &str = include_str!("fixtures/gdp-sample.json");

#[tokio::test]
async fn fetches_and_parses_dataset() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/GDP-data.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(FIXTURE)
        .expect(1)
        .create_async()
        .await;

    let ds = fetch_dataset(&format!("{}/GDP-data.json", server.url())).await.expect("fetch ok");
    mock.assert_async().await;
    assert_eq!(ds.len(), 20);
    assert_eq!(ds.points()[0].raw_date(), "1947-01-01");
    assert_eq!(ds.points()[0].value(), 243.1);
}

#[tokio::test]
async fn non_success_status_is_reported_once() {
    let mut server = mockito::Server::new_async().await;
    let mock = server.mock("GET", "/GDP-data.json").with_status(503).expect(1).create_async().await;

    let err = DataLoader::with_url(format!("{}/GDP-data.json", server.url())).fetch().await.unwrap_err();
    mock.assert_async().await; // no retry
    assert!(matches!(err, ChartError::Status { status: 503, .. }), "got {err:?}");
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server.mock("GET", "/GDP-data.json").with_status(200).with_body("<html>").create_async().await;

    let err = fetch_dataset(&format!("{}/GDP-data.json", server.url())).await.unwrap_err();
    assert!(matches!(err, ChartError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_host_is_an_http_error() {
    let err = fetch_dataset("http://127.0.0.1:9/GDP-data.json").await.unwrap_err();
    assert!(matches!(err, ChartError::Http { .. }), "got {err:?}");
}

#[test]
fn default_loader_targets_fixed_url() {
    assert_eq!(DataLoader::new().url(), DATA_URL);
}
