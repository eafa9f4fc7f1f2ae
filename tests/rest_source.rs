mod common;

use std::sync::Arc;
use std::time::Duration;

use common::mock_upstream::{MockResponse, MockUpstream};
use common::upstream_record;
use countrylens::explorer::{Explorer, ExplorerSettings, LoadState};
use countrylens::source::{
    CountrySource, DataOrigin, RestCountriesClient, RestSettings, SourceError, WithFallback,
};

fn client_for(mock: &MockUpstream) -> RestCountriesClient {
    RestCountriesClient::new(RestSettings {
        base_url: mock.base_url(),
        timeout: Duration::from_secs(2),
        connect_timeout: Duration::from_secs(1),
    })
    .unwrap()
}

#[tokio::test]
async fn fetch_all_requests_fields_and_maps_records() {
    let mock = MockUpstream::start().await;
    mock.enqueue_response(MockResponse::json(&serde_json::json!([
        upstream_record("NO", "Norway", "Europe"),
        upstream_record("PE", "Peru", "Americas"),
    ])))
    .await;

    let fetched = client_for(&mock).fetch_all().await.unwrap();
    assert_eq!(fetched.origin, DataOrigin::Live);
    assert_eq!(fetched.countries.len(), 2);

    let norway = &fetched.countries[0];
    assert_eq!(norway.code, "NO");
    assert_eq!(norway.name, "Norway");
    assert_eq!(norway.official_name.as_deref(), Some("Official Norway"));
    assert_eq!(norway.calling_code.as_deref(), Some("+99"));
    assert_eq!(norway.region.as_deref(), Some("Europe"));

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/v3.1/all");
    assert_eq!(
        requests[0].query.as_deref(),
        Some("fields=name,cca2,flags,idd,region,population")
    );
}

#[tokio::test]
async fn search_hits_name_endpoint_with_encoded_term() {
    let mock = MockUpstream::start().await;
    mock.enqueue_response(MockResponse::json(&serde_json::json!([upstream_record(
        "CI",
        "Ivory Coast",
        "Africa"
    )])))
    .await;

    let fetched = client_for(&mock).search("côte d").await.unwrap();
    assert_eq!(fetched.countries[0].name, "Ivory Coast");

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].path, "/v3.1/name/c%C3%B4te%20d");
}

#[tokio::test]
async fn empty_search_term_fetches_everything() {
    let mock = MockUpstream::start().await;
    client_for(&mock).search("").await.unwrap();
    assert_eq!(mock.captured_requests().await[0].path, "/v3.1/all");
}

#[tokio::test]
async fn search_not_found_means_no_matches() {
    let mock = MockUpstream::start().await;
    mock.enqueue_response(MockResponse::raw(404, r#"{"status":404,"message":"Not Found"}"#))
        .await;

    let fetched = client_for(&mock).search("zzz").await.unwrap();
    assert!(fetched.countries.is_empty());
}

#[tokio::test]
async fn fetch_all_not_found_is_an_error() {
    let mock = MockUpstream::start().await;
    mock.enqueue_response(MockResponse::raw(404, "{}")).await;

    let err = client_for(&mock).fetch_all().await.unwrap_err();
    assert!(matches!(err, SourceError::Status { status: 404, .. }));
}

#[tokio::test]
async fn server_error_maps_to_status() {
    let mock = MockUpstream::start().await;
    mock.enqueue_response(MockResponse::raw(503, "{}")).await;

    let err = client_for(&mock).fetch_all().await.unwrap_err();
    assert!(matches!(err, SourceError::Status { status: 503, .. }));
    assert_eq!(err.kind(), "status");
}

#[tokio::test]
async fn malformed_body_maps_to_decode() {
    let mock = MockUpstream::start().await;
    mock.enqueue_response(MockResponse::raw(200, r#"{"not":"a list"}"#)).await;

    let err = client_for(&mock).fetch_all().await.unwrap_err();
    assert!(matches!(err, SourceError::Decode { .. }));
}

#[tokio::test]
async fn slow_upstream_times_out() {
    let mock = MockUpstream::start().await;
    mock.enqueue_response(MockResponse::default().with_delay(1_000)).await;

    let client = RestCountriesClient::new(RestSettings {
        base_url: mock.base_url(),
        timeout: Duration::from_millis(100),
        connect_timeout: Duration::from_secs(1),
    })
    .unwrap();

    let err = client.fetch_all().await.unwrap_err();
    assert!(matches!(err, SourceError::Request { .. }));
}

#[tokio::test]
async fn fallback_wrapper_substitutes_sample_on_failure() {
    let mock = MockUpstream::start().await;
    mock.enqueue_response(MockResponse::raw(500, "{}")).await;

    let source = WithFallback::new(client_for(&mock));
    let fetched = source.fetch_all().await.unwrap();
    assert_eq!(fetched.origin, DataOrigin::Fallback);
    assert_eq!(fetched.countries.len(), 12);
}

#[tokio::test]
async fn explorer_over_http_shows_latest_search() {
    let mock = MockUpstream::start().await;
    // First search answers slowly with a dataset that must never be shown
    mock.enqueue_response(
        MockResponse::json(&serde_json::json!([upstream_record("XX", "Stale", "Nowhere")]))
            .with_delay(300),
    )
    .await;
    mock.enqueue_response(MockResponse::json(&serde_json::json!([upstream_record(
        "PE", "Peru", "Americas"
    )])))
    .await;

    let settings = ExplorerSettings {
        remote_search: true,
        ..ExplorerSettings::default()
    };
    let explorer = Explorer::new(Arc::new(client_for(&mock)), settings).unwrap();

    explorer.set_filter("s");
    let older = explorer.refresh();
    // Let the first request reach the server before issuing the second
    tokio::time::sleep(Duration::from_millis(50)).await;
    explorer.set_filter("pe");
    let newer = explorer.refresh();

    newer.await.unwrap();
    older.await.unwrap();

    let state = explorer.state();
    assert_eq!(state.load, LoadState::Ready { origin: DataOrigin::Live });
    let names: Vec<_> = state.items.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Peru"]);
    assert_eq!(mock.captured_requests().await.len(), 2);
}
