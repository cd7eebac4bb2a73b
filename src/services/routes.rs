//! Server URL scheme
//!
//! Relative paths understood by the Playfield server. They are resolved
//! against the configured base URL by [`super::PlayfieldApi`].

pub const UPCOMING_EVENTS: &str = "events";
pub const PAST_EVENTS: &str = "past_events";

pub fn event(event_id: i64) -> String {
    format!("event/{}", event_id)
}

pub fn toggle_attendance(event_id: i64) -> String {
    format!("events/{}/toggle-attendance/", event_id)
}

pub fn cancel_event(event_id: i64) -> String {
    format!("events/{}/cancel/", event_id)
}

pub fn add_comment(event_id: i64) -> String {
    format!("events/{}/comment/", event_id)
}

pub fn user_profile(username: &str) -> String {
    format!("profile/{}/", urlencoding::encode(username))
}

/// Legacy delete (`DELETE`), used for removing past events
pub fn legacy_delete(event_id: i64) -> String {
    format!("delete/{}", event_id)
}
