//! Data models module
//!
//! This module contains the request and response payloads exchanged with the
//! Playfield server

pub mod event;
pub mod attendance;
pub mod comment;

// Re-export commonly used models
pub use event::{Event, Capacity, EventFilter};
pub use attendance::{ToggleAttendanceResponse, AttendeeEntry, CancelEventResponse};
pub use comment::{Comment, CommentResponse, CommentForm};
