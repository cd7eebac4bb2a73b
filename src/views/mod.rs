//! Views module
//!
//! This module builds everything the client displays as safe node trees:
//! listings, the event detail view with its attendance panel and comment
//! section, and the browser that switches between them.

pub mod dom;
pub mod attendance;
pub mod comments;
pub mod events;
pub mod browser;

// Re-export commonly used views
pub use dom::{Element, Node, ViewContainer};
pub use attendance::AttendancePanel;
pub use comments::CommentSection;
pub use events::{EventDetailView, Placeholder, render_event_card, render_event_list};
pub use browser::EventBrowser;
