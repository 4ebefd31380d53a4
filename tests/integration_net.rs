// ub-rs: Container Utility Belt
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the HTTP readiness checks using wiremock.
//!
//! Covers:
//! - Service endpoints and body markers
//! - Basic authentication
//! - Non-2xx responses
//! - Unreachable servers and bad URLs

use std::time::Duration;

use ub_rs::check::{HttpCheck, Service, wait_for_http};
use ub_rs::error::{CheckError, UbError};
use wiremock::matchers::{basic_auth, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TIMEOUT: Duration = Duration::from_secs(5);
const POLL: Duration = Duration::from_millis(20);

fn check_for(server: &MockServer) -> HttpCheck {
    let address = server.address();
    HttpCheck::builder()
        .host(address.ip().to_string())
        .port(address.port())
        .timeout(TIMEOUT)
        .poll_interval(POLL)
        .build()
}

// =============================================================================
// Service checks
// =============================================================================

#[tokio::test]
async fn test_schema_registry_ready() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/config"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"compatibilityLevel":"BACKWARD"}"#))
        .mount(&server)
        .await;

    let ready = check_for(&server)
        .check_service(Service::SchemaRegistry)
        .await
        .unwrap();

    assert!(ready);
}

#[tokio::test]
async fn test_body_marker_missing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/info"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"starting"}"#))
        .mount(&server)
        .await;

    let ready = check_for(&server)
        .check_service(Service::KsqlServer)
        .await
        .unwrap();

    assert!(!ready);
}

#[tokio::test]
async fn test_kafka_rest_needs_no_marker() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/topics"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;

    assert!(
        check_for(&server)
            .check_service(Service::KafkaRest)
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn test_connect_root_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"version":"7.6.0"}"#))
        .mount(&server)
        .await;

    assert!(
        check_for(&server)
            .check_service(Service::Connect)
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn test_service_error_status() {
    for status in [404, 503] {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/config"))
            .respond_with(ResponseTemplate::new(status).set_body_string("compatibilityLevel"))
            .mount(&server)
            .await;

        let ready = check_for(&server)
            .check_service(Service::SchemaRegistry)
            .await
            .unwrap();

        assert!(!ready, "status {status} must not count as ready");
    }
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn test_basic_auth_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/topics"))
        .and(basic_auth("admin", "secret"))
        .respond_with(ResponseTemplate::new(200))
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let address = server.address();
    let authenticated = HttpCheck::builder()
        .host(address.ip().to_string())
        .port(address.port())
        .timeout(TIMEOUT)
        .poll_interval(POLL)
        .username("admin")
        .password("secret")
        .build();

    assert!(authenticated.check_service(Service::KafkaRest).await.unwrap());
    assert!(
        !check_for(&server)
            .check_service(Service::KafkaRest)
            .await
            .unwrap()
    );
}

// =============================================================================
// wait_for_http
// =============================================================================

#[tokio::test]
async fn test_wait_for_http_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let url = format!("{}/health", server.uri());
    assert!(wait_for_http(&url, TIMEOUT, POLL).await.unwrap());
}

#[tokio::test]
async fn test_wait_for_http_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    assert!(!wait_for_http(&server.uri(), TIMEOUT, POLL).await.unwrap());
}

#[tokio::test]
async fn test_wait_for_http_unreachable() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/", listener.local_addr().unwrap());
    drop(listener);

    let ready = wait_for_http(&url, Duration::from_millis(200), POLL)
        .await
        .unwrap();
    assert!(!ready);
}

#[tokio::test]
async fn test_wait_for_http_rejects_unknown_scheme() {
    let err = wait_for_http("ftp://files.example.com/", TIMEOUT, POLL)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        UbError::Check(ref check) if matches!(**check, CheckError::UnknownPort { .. })
    ));
}

#[tokio::test]
async fn test_wait_for_http_rejects_invalid_url() {
    let err = wait_for_http("not a url", TIMEOUT, POLL).await.unwrap_err();

    assert!(matches!(
        err,
        UbError::Check(ref check) if matches!(**check, CheckError::InvalidUrl { .. })
    ));
}
