//! Test data fixtures
//!
//! JSON bodies shaped like the Playfield server's responses.

use serde_json::{json, Value};

pub const TEST_USERNAME: &str = "alice";
pub const TEST_HOST: &str = "hosty";
pub const TEST_CSRF_TOKEN: &str = "test-csrf-token";
pub const TEST_SESSION_ID: &str = "test-session-id";

/// Upcoming event hosted by [`TEST_HOST`]
pub fn event_json(id: i64, attendees: &[&str], max_attendees: u32) -> Value {
    json!({
        "id": id,
        "title": format!("Pickup Game {}", id),
        "description": "Bring water and a light and a dark shirt.",
        "host": TEST_HOST,
        "attendees": attendees,
        "date": "June 01, 2030",
        "date_raw": "2030-06-01",
        "start": "10:00 AM",
        "end": "12:00 PM",
        "category": "soccer",
        "category_display": "Soccer",
        "skill_level": "beginner",
        "skill_level_display": "Beginner",
        "location": "Riverside Park",
        "max_attendees": max_attendees,
        "is_past": false,
        "comments": []
    })
}

/// Past event hosted by [`TEST_HOST`]
pub fn past_event_json(id: i64, attendees: &[&str], max_attendees: u32) -> Value {
    let mut event = event_json(id, attendees, max_attendees);
    event["is_past"] = json!(true);
    event["date"] = json!("January 10, 2020");
    event["date_raw"] = json!("2020-01-10");
    event
}

pub fn attendee_json(username: &str, is_host: bool) -> Value {
    json!({
        "username": username,
        "profile_url": format!("/profile/{}/", username),
        "profile_picture_url": null,
        "is_host": is_host
    })
}

/// Successful toggle response listing `count` attendees
pub fn toggle_response_json(attending: bool, count: u32, max_attendees: u32) -> Value {
    let attendees: Vec<Value> = (0..count)
        .map(|i| {
            if i == 0 {
                attendee_json(TEST_HOST, true)
            } else {
                attendee_json(&format!("player{}", i), false)
            }
        })
        .collect();

    json!({
        "success": true,
        "attending": attending,
        "button_text": if attending { "Leave Event" } else { "Join Event" },
        "attendees_count": count,
        "max_attendees": max_attendees,
        "spots_available": i64::from(max_attendees) - i64::from(count),
        "attendees_list": attendees,
        "message": if attending { "You have joined the event." } else { "You have left the event." }
    })
}

pub fn rejection_json(message: &str) -> Value {
    json!({"success": false, "message": message})
}

pub fn comment_response_json(author: &str, content: &str) -> Value {
    json!({
        "success": true,
        "comment": {
            "author": author,
            "author_pic_url": "/static/sports/images/default_avatar.png",
            "author_profile_url": format!("/profile/{}/", author),
            "content": content,
            "created_at": "Jun. 01, 2030, 9:15 a.m.",
            "naturaltime": "now"
        }
    })
}

pub fn existing_comment_json(author: &str, content: &str) -> Value {
    json!({
        "author": author,
        "author_pic_url": "/static/sports/images/default_avatar.png",
        "author_profile_url": format!("/profile/{}/", author),
        "content": content,
        "naturaltime": "2 days ago"
    })
}
