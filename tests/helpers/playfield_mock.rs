//! Mock Playfield server for testing
//!
//! This module provides a mock HTTP server that simulates the Playfield
//! endpoints the client calls. It uses wiremock to create configurable mock
//! responses. Mutating endpoints only match when the CSRF and AJAX headers
//! are present, so a request missing them gets a 404.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockBuilder, MockServer, ResponseTemplate,
};

use playfield_client::{config::Settings, EventInteractionClient};

use super::feedback::RecordingFeedback;
use super::test_data::{TEST_CSRF_TOKEN, TEST_SESSION_ID};

/// Mock Playfield server for testing
pub struct PlayfieldMockServer {
    pub server: MockServer,
    pub base_url: String,
    /// Path the application is mounted under, empty at the root
    prefix: String,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub status: u16,
    pub delay_ms: Option<u64>,
}

impl Default for MockResponseConfig {
    fn default() -> Self {
        Self {
            status: 200,
            delay_ms: None,
        }
    }
}

impl MockResponseConfig {
    pub fn status(status: u16) -> Self {
        Self {
            status,
            ..Default::default()
        }
    }

    pub fn delayed(delay_ms: u64) -> Self {
        Self {
            delay_ms: Some(delay_ms),
            ..Default::default()
        }
    }

    fn template(&self) -> ResponseTemplate {
        let mut response = ResponseTemplate::new(self.status);
        if let Some(delay) = self.delay_ms {
            response = response.set_delay(Duration::from_millis(delay));
        }
        response
    }
}

impl PlayfieldMockServer {
    /// Create a new mock Playfield server
    pub async fn new() -> Self {
        Self::mounted_at("").await
    }

    /// Create a mock server serving Playfield under `/{prefix}/`
    pub async fn with_prefix(prefix: &str) -> Self {
        Self::mounted_at(&format!("/{}", prefix.trim_matches('/'))).await
    }

    async fn mounted_at(prefix: &str) -> Self {
        let server = MockServer::start().await;
        let base_url = format!("{}{}/", server.uri(), prefix);

        Self {
            server,
            base_url,
            prefix: prefix.to_string(),
        }
    }

    /// Request path of `route` on this server
    pub fn route(&self, route: &str) -> String {
        format!("{}/{}", self.prefix, route.trim_start_matches('/'))
    }

    /// Settings pointing at this server with a seeded session
    pub fn settings(&self, username: Option<&str>) -> Settings {
        let mut settings = Settings::default();
        settings.server.base_url = self.base_url.clone();
        settings.server.timeout_seconds = 5;
        settings.session.username = username.map(str::to_string);
        settings.session.session_id = Some(TEST_SESSION_ID.to_string());
        settings.session.csrf_token = Some(TEST_CSRF_TOKEN.to_string());
        settings
    }

    /// Interaction client for `username` reporting into `feedback`
    pub fn client(
        &self,
        username: Option<&str>,
        feedback: Arc<RecordingFeedback>,
    ) -> EventInteractionClient {
        EventInteractionClient::new(&self.settings(username), feedback)
            .expect("Failed to create client")
    }

    fn mutating(&self, method_name: &str, route: String) -> MockBuilder {
        Mock::given(method(method_name))
            .and(path(self.route(&route)))
            .and(header("X-CSRFToken", TEST_CSRF_TOKEN))
            .and(header("X-Requested-With", "XMLHttpRequest"))
    }

    /// Setup mock for `GET event/{id}`
    pub async fn mock_event(&self, event: Value) {
        let id = event["id"].as_i64().expect("event fixture without id");
        Mock::given(method("GET"))
            .and(path(self.route(&format!("event/{}", id))))
            .respond_with(ResponseTemplate::new(200).set_body_json(event))
            .mount(&self.server)
            .await;
    }

    /// Setup mock for `GET events`
    pub async fn mock_events(&self, events: Value, config: MockResponseConfig) {
        Mock::given(method("GET"))
            .and(path(self.route("events")))
            .respond_with(config.template().set_body_json(events))
            .mount(&self.server)
            .await;
    }

    /// Setup mock for `GET past_events`
    pub async fn mock_past_events(&self, events: Value, config: MockResponseConfig) {
        Mock::given(method("GET"))
            .and(path(self.route("past_events")))
            .respond_with(config.template().set_body_json(events))
            .mount(&self.server)
            .await;
    }

    /// Setup mock for the attendance toggle endpoint
    pub async fn mock_toggle(&self, event_id: i64, body: Value, config: MockResponseConfig) {
        self.mutating("POST", format!("/events/{}/toggle-attendance/", event_id))
            .respond_with(config.template().set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Setup mock for the attendance toggle endpoint returning a raw body
    pub async fn mock_toggle_raw(&self, event_id: i64, body: &str, config: MockResponseConfig) {
        self.mutating("POST", format!("/events/{}/toggle-attendance/", event_id))
            .respond_with(config.template().set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Setup mock for the cancel endpoint
    pub async fn mock_cancel(&self, event_id: i64, body: Value, config: MockResponseConfig) {
        self.mutating("POST", format!("/events/{}/cancel/", event_id))
            .respond_with(config.template().set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Setup mock for the comment endpoint
    pub async fn mock_comment(&self, event_id: i64, body: Value, config: MockResponseConfig) {
        self.mutating("POST", format!("/events/{}/comment/", event_id))
            .respond_with(config.template().set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Setup mock for the legacy `DELETE delete/{id}` endpoint
    pub async fn mock_delete(&self, event_id: i64, config: MockResponseConfig) {
        self.mutating("DELETE", format!("/delete/{}", event_id))
            .respond_with(config.template())
            .mount(&self.server)
            .await;
    }

    /// Number of requests received for `method_name` on `route`
    pub async fn request_count(&self, method_name: &str, route: &str) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|request| {
                request.method.to_string() == method_name && request.url.path() == route
            })
            .count()
    }

    /// Body of the last request received on `route`
    pub async fn last_body(&self, route: &str) -> Option<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .rev()
            .find(|request| request.url.path() == route)
            .map(|request| String::from_utf8_lossy(&request.body).into_owned())
    }

    /// Reset all mocks
    pub async fn reset(&self) {
        self.server.reset().await;
    }
}
