//! Common test utilities and helpers
//!
//! A wiremock server stands in for the controller.

#![allow(dead_code)]

use unifi_guest::{GuestDescriptor, UnifiClient};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Session cookie issued by the stub controller
pub const SESSION_COOKIE: &str = "unifises=4c7b2e0d9f; Path=/";

/// Cookie header the client should replay
pub const SESSION_COOKIE_HEADER: &str = "unifises=4c7b2e0d9f";

pub const USERNAME: &str = "alice";
pub const PASSWORD: &str = "pw";
pub const SITE: &str = "default";

/// Test data factory
pub struct MockData;

impl MockData {
    /// Guest used across the end-to-end scenarios
    pub fn guest() -> GuestDescriptor {
        GuestDescriptor::new("aa:bb:cc:dd:ee:ff", 60)
            .with_up(1024)
            .with_down(2048)
            .with_data(10240)
    }

    /// Exact `authorize-guest` body expected for [`MockData::guest`]
    pub fn guest_envelope() -> serde_json::Value {
        serde_json::json!({
            "cmd": "authorize-guest",
            "mac": "aa:bb:cc:dd:ee:ff",
            "minutes": 60,
            "up": 1024,
            "down": 2048,
            "data": 10240
        })
    }

    pub fn login_body() -> serde_json::Value {
        serde_json::json!({"username": USERNAME, "password": PASSWORD})
    }
}

/// Stub controller factory
pub struct MockController;

impl MockController {
    pub async fn start() -> MockServer {
        MockServer::start().await
    }

    /// Login succeeds with a session cookie; expected exactly `times` times
    pub async fn login_ok(server: &MockServer, times: u64) {
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .and(header("content-type", "application/json; charset=utf-8"))
            .and(body_json(MockData::login_body()))
            .respond_with(ResponseTemplate::new(200).insert_header("set-cookie", SESSION_COOKIE))
            .expect(times)
            .mount(server)
            .await;
    }

    /// Login answers with `status` and a diagnostic body
    pub async fn login_status(server: &MockServer, status: u16) {
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(
                ResponseTemplate::new(status)
                    .set_body_json(serde_json::json!({"meta": {"rc": "error"}, "data": []})),
            )
            .expect(1)
            .mount(server)
            .await;
    }

    /// Guest authorization succeeds only for the exact envelope and cookie
    pub async fn authorize_ok(server: &MockServer, times: u64) {
        Mock::given(method("POST"))
            .and(path(format!("/api/s/{}/cmd/stamgr", SITE)))
            .and(header("content-type", "application/json; charset=utf-8"))
            .and(header("cookie", SESSION_COOKIE_HEADER))
            .and(body_json(MockData::guest_envelope()))
            .respond_with(ResponseTemplate::new(200))
            .expect(times)
            .mount(server)
            .await;
    }

    /// Guest authorization answers with `status`
    pub async fn authorize_status(server: &MockServer, status: u16) {
        Mock::given(method("POST"))
            .and(path(format!("/api/s/{}/cmd/stamgr", SITE)))
            .respond_with(ResponseTemplate::new(status).set_body_string("api.err.LoginRequired"))
            .expect(1)
            .mount(server)
            .await;
    }
}

/// Client pointed at the stub controller
pub fn client_for(server: &MockServer) -> UnifiClient {
    UnifiClient::new(USERNAME, PASSWORD, server.uri(), SITE, "5.12", true)
}

/// Test utilities
pub struct TestUtils;

impl TestUtils {
    /// Initialize test logging
    pub fn init_logger() {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("debug")
            .try_init();
    }
}
