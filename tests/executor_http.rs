//! Executor integration tests against a real local HTTP server.
//!
//! These exercise the full path from structured request through the builder
//! and the reqwest transport: query serialization, header injection, body
//! policy, non-2xx handling, and transport-failure normalization.

use api_workbench::executor::{send_request, ReqwestTransport};
use api_workbench::formatter::{classify_status, StatusCategory};
use api_workbench::models::{ApiRequest, HttpMethod, KeyValuePair};
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn disabled(key: &str, value: &str) -> KeyValuePair {
    let mut pair = KeyValuePair::with(key, value);
    pair.enabled = false;
    pair
}

#[tokio::test]
async fn get_with_params_reaches_the_right_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(r#"{"users":[]}"#, "application/json"))
        .mount(&server)
        .await;

    let mut request = ApiRequest::new(HttpMethod::GET, format!("{}/users", server.uri()));
    request.params.push(KeyValuePair::with("page", "2"));
    request.params.push(KeyValuePair::with("limit", "10"));
    request.params.push(disabled("debug", "1"));

    let transport = ReqwestTransport::new();
    let response = send_request(&transport, &request).await;

    assert_eq!(response.status, 200);
    assert_eq!(response.status_text, "OK");
    assert_eq!(response.body, r#"{"users":[]}"#);
    assert_eq!(response.size_bytes, response.body.len() as u64);
    assert_eq!(response.content_type(), Some("application/json"));
}

#[tokio::test]
async fn post_sends_body_verbatim_with_injected_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/items"))
        .and(header("content-type", "application/json"))
        .and(body_string(r#"{"name":"widget"}"#))
        .respond_with(ResponseTemplate::new(201).set_body_string(r#"{"id":1}"#))
        .mount(&server)
        .await;

    let mut request = ApiRequest::new(HttpMethod::POST, format!("{}/items", server.uri()));
    request.body = r#"{"name":"widget"}"#.to_string();

    let response = send_request(&ReqwestTransport::new(), &request).await;
    assert_eq!(response.status, 201);
    assert_eq!(response.body, r#"{"id":1}"#);
}

#[tokio::test]
async fn explicit_content_type_is_not_overridden() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/raw"))
        .and(header("content-type", "text/plain"))
        .and(body_string("just text"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let mut request = ApiRequest::new(HttpMethod::PUT, format!("{}/raw", server.uri()));
    request
        .headers
        .push(KeyValuePair::with("content-type", "text/plain"));
    request.body = "just text".to_string();

    let response = send_request(&ReqwestTransport::new(), &request).await;
    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn get_body_is_dropped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/plain"))
        .and(body_string(""))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let mut request = ApiRequest::new(HttpMethod::GET, format!("{}/plain", server.uri()));
    request.body = r#"{"should":"not be sent"}"#.to_string();

    let response = send_request(&ReqwestTransport::new(), &request).await;
    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn non_2xx_is_a_normal_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
        .mount(&server)
        .await;

    let request = ApiRequest::new(HttpMethod::GET, format!("{}/missing", server.uri()));
    let response = send_request(&ReqwestTransport::new(), &request).await;

    assert_eq!(response.status, 404);
    assert_eq!(response.body, "not here");
    assert!(!response.is_transport_failure());
    assert_eq!(classify_status(response.status), StatusCategory::ClientError);
}

#[tokio::test]
async fn connection_refused_normalizes_to_zero_status() {
    // Bind-then-drop a listener so the port is known to be closed. A dropped
    // wiremock MockServer returns to a pool and keeps its listener alive, so
    // a plain TcpListener is used instead.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let dead_uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let request = ApiRequest::new(HttpMethod::GET, format!("{}/unreachable", dead_uri));
    let response = send_request(&ReqwestTransport::new(), &request).await;

    assert_eq!(response.status, 0);
    assert!(!response.status_text.is_empty());
    assert_eq!(response.body, response.status_text);
    assert!(response.headers.is_empty());
    assert_eq!(response.size_bytes, 0);
    assert_eq!(
        classify_status(response.status),
        StatusCategory::TransportFailure
    );
}

#[tokio::test]
async fn multibyte_body_size_counts_bytes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/utf8"))
        .respond_with(ResponseTemplate::new(200).set_body_string("日本語"))
        .mount(&server)
        .await;

    let request = ApiRequest::new(HttpMethod::GET, format!("{}/utf8", server.uri()));
    let response = send_request(&ReqwestTransport::new(), &request).await;

    assert_eq!(response.body.chars().count(), 3);
    assert_eq!(response.size_bytes, 9);
}
