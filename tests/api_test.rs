//! Playfield API client integration tests
//!
//! Wire-level checks of the request headers, bodies and response decoding.

mod helpers;

use assert_matches::assert_matches;
use helpers::*;
use serde_json::json;
use wiremock::{
    matchers::{header, header_exists, method, path},
    Mock, ResponseTemplate,
};

use playfield_client::{
    models::EventFilter,
    services::PlayfieldApi,
    utils::errors::PlayfieldError,
};

fn api(mock_server: &PlayfieldMockServer) -> PlayfieldApi {
    PlayfieldApi::new(&mock_server.settings(Some(TEST_USERNAME))).unwrap()
}

#[tokio::test]
async fn test_every_request_is_marked_as_ajax() {
    let mock_server = PlayfieldMockServer::new().await;
    Mock::given(method("GET"))
        .and(path("/past_events"))
        .and(header("X-Requested-With", "XMLHttpRequest"))
        .and(header_exists("cookie"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([past_event_json(3, &[TEST_HOST], 5)])))
        .expect(1)
        .mount(&mock_server.server)
        .await;

    let events = api(&mock_server).list_past_events().await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].is_past, Some(true));
}

#[tokio::test]
async fn test_session_cookie_is_sent() {
    let mock_server = PlayfieldMockServer::new().await;
    mock_server.mock_events(json!([]), MockResponseConfig::default()).await;

    api(&mock_server).list_events(&EventFilter::default()).await.unwrap();

    let requests = mock_server.server.received_requests().await.unwrap();
    let cookie = requests[0]
        .headers
        .get("cookie")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(cookie.contains(&format!("sessionid={}", TEST_SESSION_ID)));
    assert!(cookie.contains(&format!("csrftoken={}", TEST_CSRF_TOKEN)));
}

#[tokio::test]
async fn test_get_event_decodes_detail() {
    let mock_server = PlayfieldMockServer::new().await;
    let mut event = event_json(4, &[TEST_HOST, "bob"], 10);
    event["comments"] = json!([existing_comment_json("bob", "hi")]);
    mock_server.mock_event(event).await;

    let event = api(&mock_server).get_event(4).await.unwrap();
    assert_eq!(event.id, 4);
    assert_eq!(event.number_attending(), 2);
    assert_eq!(event.comments.len(), 1);
    assert_eq!(event.location.as_deref(), Some("Riverside Park"));
}

#[tokio::test]
async fn test_delete_failure_surfaces_message() {
    let mock_server = PlayfieldMockServer::new().await;
    Mock::given(method("DELETE"))
        .and(path("/delete/8"))
        .and(header("X-CSRFToken", TEST_CSRF_TOKEN))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(rejection_json("Only the host can delete this event.")),
        )
        .expect(1)
        .mount(&mock_server.server)
        .await;

    let result = api(&mock_server).delete_event(8).await;
    assert_matches!(
        result,
        Err(PlayfieldError::Rejected { status: 403, ref message }) if message == "Only the host can delete this event."
    );
}

#[tokio::test]
async fn test_delete_accepts_empty_success() {
    let mock_server = PlayfieldMockServer::new().await;
    mock_server.mock_delete(8, MockResponseConfig::status(204)).await;

    api(&mock_server).delete_event(8).await.unwrap();
    assert_eq!(mock_server.request_count("DELETE", "/delete/8").await, 1);
}

#[tokio::test]
async fn test_toggle_requires_success_flag() {
    let mock_server = PlayfieldMockServer::new().await;
    let mut body = toggle_response_json(true, 2, 10);
    body.as_object_mut().unwrap().remove("success");
    mock_server.mock_toggle(4, body, MockResponseConfig::default()).await;

    let result = api(&mock_server)
        .toggle_attendance("/events/4/toggle-attendance/")
        .await;
    assert_matches!(result, Err(PlayfieldError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_toggle_decodes_attendee_list() {
    let mock_server = PlayfieldMockServer::new().await;
    mock_server
        .mock_toggle(4, toggle_response_json(true, 3, 10), MockResponseConfig::default())
        .await;

    let response = api(&mock_server)
        .toggle_attendance("/events/4/toggle-attendance/")
        .await
        .unwrap();
    assert!(response.attending);
    assert_eq!(response.spots_available, Some(7));
    assert_eq!(response.attendees_list.len(), 3);
    assert!(response.attendees_list[0].is_host);
    assert_eq!(response.capacity().percentage(), 30);
}
