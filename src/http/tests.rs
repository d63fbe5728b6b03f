//! Tests for the HTTP client module

use super::*;
use crate::auth::AuthConfig;
use crate::config::HttpSettings;
use crate::error::Error;
use crate::types::BackoffType;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn with_backoff(backoff_type: BackoffType, initial: Duration, max: Duration) -> HttpClientConfig {
    HttpClientConfig {
        backoff_type,
        initial_backoff: initial,
        max_backoff: max,
        rate_limit: None,
        ..HttpClientConfig::default()
    }
}

fn fast_client(server: &MockServer, retries: u32) -> HttpClient {
    let config = HttpClientConfig {
        base_url: Some(server.uri()),
        max_retries: retries,
        ..with_backoff(BackoffType::Constant, Duration::from_millis(10), Duration::from_secs(1))
    };
    HttpClient::with_config(config).unwrap()
}

async fn get(client: &HttpClient, url: &str) -> crate::error::Result<reqwest::Response> {
    client.get_with_config(url, RequestConfig::default()).await
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.max_retries, 3);
    assert!(config.base_url.is_none());
    assert!(config.rate_limit.is_some());
    assert!(config.user_agent.starts_with("freshservice-connector/"));
}

#[test]
fn test_http_client_config_from_settings() {
    let settings = HttpSettings {
        timeout_secs: 5,
        max_retries: 1,
        requests_per_second: 2,
    };
    let config = HttpClientConfig::from_settings("https://acme.freshservice.com/api/v2", &settings);

    assert_eq!(
        config.base_url.as_deref(),
        Some("https://acme.freshservice.com/api/v2")
    );
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(config.max_retries, 1);
    assert_eq!(config.rate_limit.map(|r| r.requests_per_second), Some(2));
}

#[tokio::test]
async fn test_get_joins_base_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/tickets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "tickets": []
        })))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(format!("{}/api/v2/", mock_server.uri()))
        .no_rate_limit()
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let response = get(&client, "/tickets").await.unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_query_params_are_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/agents"))
        .and(query_param("email", "a@example.com"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = fast_client(&mock_server, 0);
    let response = client
        .get_with_config(
            "/agents",
            RequestConfig::with_query(vec![
                ("email".to_string(), "a@example.com".to_string()),
                ("page".to_string(), "2".to_string()),
            ]),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_default_headers_are_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .no_rate_limit()
        .build();
    config
        .default_headers
        .insert("Accept".to_string(), "application/json".to_string());
    let client = HttpClient::with_config(config).unwrap();

    let response = get(&client, "/data").await.unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_api_key_sent_as_basic_auth() {
    let mock_server = MockServer::start().await;

    // "secret:X"
    Mock::given(method("GET"))
        .and(path("/tickets"))
        .and(header("Authorization", "Basic c2VjcmV0Olg="))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .no_rate_limit()
        .build();
    let client = HttpClient::with_auth(config, AuthConfig::api_key("secret")).unwrap();

    let response = get(&client, "/tickets").await.unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_404_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tickets/9"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = fast_client(&mock_server, 3);
    let err = get(&client, "/tickets/9").await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 404, ref body } if body == "Not found"));
}

#[tokio::test]
async fn test_retry_on_500() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let client = fast_client(&mock_server, 3);
    let response = get(&client, "/flaky").await.unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_rate_limited_then_ok() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/limited"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("retry-after", "1")
                .set_body_string("Rate limited"),
        )
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/limited"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = fast_client(&mock_server, 2);
    let response = get(&client, "/limited").await.unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_rate_limited_without_retries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/limited"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "7"))
        .mount(&mock_server)
        .await;

    let client = fast_client(&mock_server, 0);
    let err = get(&client, "/limited").await.unwrap_err();

    assert!(matches!(
        err,
        Error::RateLimited {
            retry_after_seconds: 7
        }
    ));
}

#[tokio::test]
async fn test_max_retries_exhausted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/always-fail"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Server error"))
        .expect(3)
        .mount(&mock_server)
        .await;

    let client = fast_client(&mock_server, 2);
    let err = get(&client, "/always-fail").await.unwrap_err();

    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_full_url_bypasses_base() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/tickets"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url("https://unused.invalid")
        .no_rate_limit()
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let response = get(&client, &format!("{}/api/v2/tickets", mock_server.uri()))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[test]
fn test_calculate_backoff_constant() {
    let config = with_backoff(
        BackoffType::Constant,
        Duration::from_millis(100),
        Duration::from_secs(10),
    );
    let client = HttpClient::with_config(config).unwrap();

    assert_eq!(client.calculate_backoff(0), Duration::from_millis(100));
    assert_eq!(client.calculate_backoff(5), Duration::from_millis(100));
}

#[test]
fn test_calculate_backoff_linear() {
    let config = with_backoff(
        BackoffType::Linear,
        Duration::from_millis(100),
        Duration::from_secs(10),
    );
    let client = HttpClient::with_config(config).unwrap();

    assert_eq!(client.calculate_backoff(0), Duration::from_millis(100));
    assert_eq!(client.calculate_backoff(2), Duration::from_millis(300));
}

#[test]
fn test_calculate_backoff_exponential_is_capped() {
    let config = with_backoff(
        BackoffType::Exponential,
        Duration::from_millis(100),
        Duration::from_millis(500),
    );
    let client = HttpClient::with_config(config).unwrap();

    assert_eq!(client.calculate_backoff(1), Duration::from_millis(200));
    assert_eq!(client.calculate_backoff(2), Duration::from_millis(400));
    assert_eq!(client.calculate_backoff(10), Duration::from_millis(500));
    assert_eq!(client.calculate_backoff(40), Duration::from_millis(500));
}

#[test]
fn test_http_client_debug_hides_credentials() {
    let client =
        HttpClient::with_auth(HttpClientConfig::default(), AuthConfig::api_key("hunter2")).unwrap();
    let debug_str = format!("{client:?}");
    assert!(debug_str.contains("HttpClient"));
    assert!(debug_str.contains("has_auth: true"));
    assert!(!debug_str.contains("hunter2"));
    assert!(debug_str.contains("has_rate_limiter: true"));
}

#[tokio::test]
async fn test_requests_pass_through_rate_limiter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data"))
        .respond_with(ResponseTemplate::new(200))
        .expect(3)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .rate_limit(RateLimiterConfig::new(100, 10))
        .build();
    let client = HttpClient::with_config(config).unwrap();

    for _ in 0..3 {
        let response = get(&client, "/data").await.unwrap();
        assert_eq!(response.status(), 200);
    }
}
