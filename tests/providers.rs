use searchhits_rs::config::OutgoingSettings;
use searchhits_rs::network::HttpClient;
use searchhits_rs::providers::bing::{Bing, API_KEY_HEADER};
use searchhits_rs::providers::google::Google;
use searchhits_rs::providers::HttpProvider;
use searchhits_rs::{ProviderErrorKind, SearchProvider};
use serde_json::json;
use std::time::Duration;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn google(server: &MockServer) -> HttpProvider<Google> {
    let endpoint = Google::new("dummy-api-key", "dummy-cx-id")
        .with_base_url(format!("{}/customsearch/v1", server.uri()));
    HttpProvider::new(endpoint, HttpClient::new().unwrap())
}

fn bing(server: &MockServer) -> HttpProvider<Bing> {
    let endpoint = Bing::new("bing-key").with_base_url(server.uri());
    HttpProvider::new(endpoint, HttpClient::new().unwrap())
}

#[tokio::test]
async fn google_returns_total_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/customsearch/v1"))
        .and(query_param("key", "dummy-api-key"))
        .and(query_param("cx", "dummy-cx-id"))
        .and(query_param("q", "test"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"searchInformation": {"totalResults": "1000"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(google(&server).query("test").await.unwrap(), 1000);
}

#[tokio::test]
async fn google_invalid_json_is_payload_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{ invalid json }"))
        .mount(&server)
        .await;

    let err = google(&server).query("test").await.unwrap_err();
    assert_eq!(err.provider, "google");
    assert!(matches!(err.kind, ProviderErrorKind::Payload(_)));
}

#[tokio::test]
async fn google_api_error_is_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Invalid API request"))
        .mount(&server)
        .await;

    let err = google(&server).query("test").await.unwrap_err();
    assert_eq!(err.kind, ProviderErrorKind::Status(400));
    assert_eq!(err.term, "test");
}

#[tokio::test]
async fn bing_sends_subscription_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v7.0/search"))
        .and(header(API_KEY_HEADER, "bing-key"))
        .and(query_param("q", "rust"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"webPages": {"totalEstimatedMatches": 2500}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let hits = assert_ok!(bing(&server).query("rust").await);
    assert_eq!(hits, 2500);
}

#[tokio::test]
async fn bing_unauthorized_is_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = assert_err!(bing(&server).query("rust").await);
    assert_eq!(err.kind, ProviderErrorKind::Status(401));
    assert!(err.to_string().contains("HTTP error: 401"));
}

#[tokio::test]
async fn slow_provider_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"webPages": {"totalEstimatedMatches": 1}}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let settings = OutgoingSettings {
        request_timeout: 0.2,
        ..Default::default()
    };
    let client = HttpClient::with_settings(&settings).unwrap();
    let provider = HttpProvider::new(Bing::new("k").with_base_url(server.uri()), client);

    let err = provider.query("rust").await.unwrap_err();
    assert_eq!(err.kind, ProviderErrorKind::Timeout);
}

#[tokio::test]
async fn unreachable_provider_is_network_error() {
    let endpoint = Bing::new("k").with_base_url("http://127.0.0.1:1");
    let provider = HttpProvider::new(endpoint, HttpClient::new().unwrap());

    let err = provider.query("rust").await.unwrap_err();
    assert!(matches!(err.kind, ProviderErrorKind::Network(_)));
}

#[tokio::test]
async fn network_error_does_not_expose_api_key() {
    let endpoint = Google::new("SUPERSECRETKEY", "cx")
        .with_base_url("http://127.0.0.1:1/customsearch/v1");
    let provider = HttpProvider::new(endpoint, HttpClient::new().unwrap());

    let err = provider.query("rust").await.unwrap_err();
    assert!(matches!(err.kind, ProviderErrorKind::Network(_)));
    assert!(!err.to_string().contains("SUPERSECRETKEY"));
    assert!(!err.to_string().contains("127.0.0.1:1"));
}
