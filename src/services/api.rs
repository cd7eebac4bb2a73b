//! Playfield HTTP API client
//!
//! This service issues every request the client makes against the Playfield
//! server: CSRF and AJAX headers, cookie session, URL resolution and decoding
//! of the `{success, message, ...}` response envelope.

use std::sync::Arc;
use std::time::Duration;

use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use super::routes;
use crate::config::Settings;
use crate::models::{
    CancelEventResponse, CommentForm, CommentResponse, Event, EventFilter,
    ToggleAttendanceResponse,
};
use crate::utils::errors::{PlayfieldError, Result};
use crate::utils::helpers::find_cookie;

/// Header the server uses to tell script-driven calls from navigations
pub const AJAX_HEADER: &str = "X-Requested-With";
pub const AJAX_HEADER_VALUE: &str = "XMLHttpRequest";
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// HTTP client for the Playfield server
#[derive(Clone, Debug)]
pub struct PlayfieldApi {
    client: Client,
    jar: Arc<Jar>,
    base_url: Url,
    csrf_cookie_name: String,
}

impl PlayfieldApi {
    /// Create a new PlayfieldApi instance
    pub fn new(settings: &Settings) -> Result<Self> {
        let mut base = settings.server.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(AJAX_HEADER, HeaderValue::from_static(AJAX_HEADER_VALUE));

        let jar = Arc::new(Jar::default());
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.server.timeout_seconds))
            .user_agent(settings.server.user_agent.as_str())
            .default_headers(default_headers)
            .cookie_provider(Arc::clone(&jar))
            .build()
            .map_err(PlayfieldError::Http)?;

        let api = Self {
            client,
            jar,
            base_url,
            csrf_cookie_name: settings.session.csrf_cookie_name.clone(),
        };

        if let Some(session_id) = &settings.session.session_id {
            api.set_cookie(&settings.session.session_cookie_name, session_id);
        }
        if let Some(csrf_token) = &settings.session.csrf_token {
            api.set_cookie(&settings.session.csrf_cookie_name, csrf_token);
        }

        Ok(api)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a relative or absolute action URL against the server base
    pub fn resolve(&self, url: &str) -> Result<Url> {
        Ok(self.base_url.join(url)?)
    }

    /// Store a cookie for the server origin
    pub fn set_cookie(&self, name: &str, value: &str) {
        let cookie = format!("{}={}; Path=/", name, urlencoding::encode(value));
        self.jar.add_cookie_str(&cookie, &self.base_url);
    }

    /// CSRF token currently held in the cookie jar
    pub fn csrf_token(&self) -> Option<String> {
        let header = self.jar.cookies(&self.base_url)?;
        let header = header.to_str().ok()?;
        find_cookie(header, &self.csrf_cookie_name)
    }

    /// Join or leave an event via its data-carried toggle URL
    pub async fn toggle_attendance(&self, url: &str) -> Result<ToggleAttendanceResponse> {
        let request = self.mutating(Method::POST, url)?;
        let response = self.send(request).await?;
        decode(response, Envelope::Required).await
    }

    /// Cancel an upcoming event via its data-carried cancel URL
    pub async fn cancel_event(&self, url: &str) -> Result<CancelEventResponse> {
        let request = self.mutating(Method::POST, url)?;
        let response = self.send(request).await?;
        decode(response, Envelope::Required).await
    }

    /// Post a comment as a multipart form to the form's action URL
    pub async fn submit_comment(&self, url: &str, form: &CommentForm) -> Result<CommentResponse> {
        let multipart = form
            .fields()
            .into_iter()
            .fold(reqwest::multipart::Form::new(), |multipart, (name, value)| {
                multipart.text(name, value)
            });

        let request = self.mutating(Method::POST, url)?.multipart(multipart);
        let response = self.send(request).await?;
        decode(response, Envelope::Required).await
    }

    /// List upcoming events
    pub async fn list_events(&self, filter: &EventFilter) -> Result<Vec<Event>> {
        let url = self.resolve(routes::UPCOMING_EVENTS)?;
        let mut request = self.client.get(url);
        if !filter.is_empty() {
            request = request.query(filter);
        }
        let response = self.send(request).await?;
        decode(response, Envelope::Optional).await
    }

    /// List past events
    pub async fn list_past_events(&self) -> Result<Vec<Event>> {
        let url = self.resolve(routes::PAST_EVENTS)?;
        let response = self.send(self.client.get(url)).await?;
        decode(response, Envelope::Optional).await
    }

    /// Fetch a single event
    pub async fn get_event(&self, event_id: i64) -> Result<Event> {
        let url = self.resolve(&routes::event(event_id))?;
        let response = self.send(self.client.get(url)).await?;
        decode(response, Envelope::Optional).await
    }

    /// Legacy delete (`DELETE delete/{id}`); the response carries no payload
    pub async fn delete_event(&self, event_id: i64) -> Result<()> {
        let request = self.mutating(Method::DELETE, &routes::legacy_delete(event_id))?;
        let response = self.send(request).await?;
        expect_success(response).await
    }

    /// Build a state-changing request carrying the CSRF token
    fn mutating(&self, method: Method, url: &str) -> Result<RequestBuilder> {
        let url = self.resolve(url)?;
        let mut request = self.client.request(method, url);
        match self.csrf_token() {
            Some(token) => request = request.header(CSRF_HEADER, token),
            None => warn!("No CSRF cookie available for state-changing request"),
        }
        Ok(request)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let request = request.build().map_err(PlayfieldError::Http)?;
        debug!(method = %request.method(), url = %request.url(), "Sending request");

        let response = self.client.execute(request).await.map_err(|e| {
            if e.is_timeout() {
                warn!(error = %e, "Request timed out");
            }
            PlayfieldError::Http(e)
        })?;

        debug!(status = response.status().as_u16(), url = %response.url(), "Response received");
        Ok(response)
    }
}

/// Whether a response body must carry `success: true`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Envelope {
    Required,
    Optional,
}

/// Decode a JSON response, turning error statuses and `success: false` into errors
async fn decode<T: DeserializeOwned>(response: Response, envelope: Envelope) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;

    let value: Value = match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(e) if status.is_success() => {
            return Err(PlayfieldError::MalformedResponse(e.to_string()));
        }
        Err(_) => {
            return Err(PlayfieldError::RequestFailed {
                status: status.as_u16(),
            });
        }
    };

    let success = value.get("success").and_then(Value::as_bool);
    if !status.is_success() || success == Some(false) {
        return Err(rejection(status.as_u16(), &value));
    }
    if envelope == Envelope::Required && success.is_none() {
        return Err(PlayfieldError::MalformedResponse(
            "missing success flag".to_string(),
        ));
    }

    serde_json::from_value(value).map_err(|e| PlayfieldError::MalformedResponse(e.to_string()))
}

/// Accept any 2xx; surface a server message on failure when one is present
async fn expect_success(response: Response) -> Result<()> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    let body = response.text().await.unwrap_or_default();
    match serde_json::from_str::<Value>(&body) {
        Ok(value) => Err(rejection(status.as_u16(), &value)),
        Err(_) => Err(PlayfieldError::RequestFailed {
            status: status.as_u16(),
        }),
    }
}

fn rejection(status: u16, value: &Value) -> PlayfieldError {
    match value.get("message").and_then(Value::as_str) {
        Some(message) => PlayfieldError::Rejected {
            status,
            message: message.to_string(),
        },
        None => PlayfieldError::RequestFailed { status },
    }
}
