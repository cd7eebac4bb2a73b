//! Attendance and cancellation payloads

use serde::{Deserialize, Serialize};

use super::event::Capacity;

/// Successful response of the attendance toggle endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleAttendanceResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub attending: bool,
    pub button_text: String,
    pub attendees_count: u32,
    pub max_attendees: u32,
    /// Server-computed remaining spots; may go negative if capacity was lowered
    #[serde(default)]
    pub spots_available: Option<i64>,
    #[serde(default)]
    pub attendees_list: Vec<AttendeeEntry>,
}

impl ToggleAttendanceResponse {
    pub fn capacity(&self) -> Capacity {
        Capacity::new(self.attendees_count, self.max_attendees)
    }
}

/// One row of the rendered attendee list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendeeEntry {
    pub username: String,
    pub profile_url: String,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
    #[serde(default)]
    pub is_host: bool,
}

/// Successful response of the cancel endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelEventResponse {
    #[serde(default)]
    pub message: Option<String>,
}
