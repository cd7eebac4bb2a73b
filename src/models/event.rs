//! Event model

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::comment::Comment;
use crate::utils::helpers::pluralize;

/// Event as served by the listing and detail endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Username of the host
    pub host: String,
    #[serde(default)]
    pub host_id: Option<i64>,
    /// Usernames of attending users
    #[serde(default)]
    pub attendees: BTreeSet<String>,
    /// Display date ("June 01, 2030")
    pub date: String,
    #[serde(default)]
    pub date_raw: Option<NaiveDate>,
    pub start: String,
    pub end: String,
    pub category: String,
    #[serde(default)]
    pub category_display: Option<String>,
    #[serde(default)]
    pub skill_level: Option<String>,
    #[serde(default)]
    pub skill_level_display: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    pub max_attendees: u32,
    #[serde(default)]
    pub is_past: Option<bool>,
    #[serde(default)]
    pub is_cancelled: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    /// Newest first; only the detail endpoint includes them
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Event {
    /// Number of attending users, derived from the attendee set
    pub fn number_attending(&self) -> u32 {
        u32::try_from(self.attendees.len()).unwrap_or(u32::MAX)
    }

    pub fn capacity(&self) -> Capacity {
        Capacity::new(self.number_attending(), self.max_attendees)
    }

    pub fn is_full(&self) -> bool {
        self.capacity().is_full()
    }

    pub fn is_host(&self, username: &str) -> bool {
        self.host == username
    }

    pub fn is_attendee(&self, username: &str) -> bool {
        self.attendees.contains(username)
    }

    /// Human readable category, falling back to the raw key
    pub fn category_label(&self) -> &str {
        self.category_display.as_deref().unwrap_or(&self.category)
    }
}

/// Attendance against a capacity limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity {
    pub attending: u32,
    pub max: u32,
}

impl Capacity {
    pub fn new(attending: u32, max: u32) -> Self {
        Self { attending, max }
    }

    /// max − attending, floored at 0
    pub fn spots_available(&self) -> u32 {
        self.max.saturating_sub(self.attending)
    }

    pub fn is_full(&self) -> bool {
        self.attending >= self.max
    }

    /// Filled percentage in 0..=100; 0 when the event has no capacity
    pub fn percentage(&self) -> u32 {
        if self.max == 0 {
            return 0;
        }
        let percentage = u64::from(self.attending) * 100 / u64::from(self.max);
        percentage.min(100) as u32
    }

    /// "Full" or "N spots available"
    pub fn label(&self) -> String {
        if self.is_full() {
            "Full".to_string()
        } else {
            format!(
                "{} available",
                pluralize(u64::from(self.spots_available()), "spot", "spots")
            )
        }
    }
}

/// Query filters for the upcoming events listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl EventFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
