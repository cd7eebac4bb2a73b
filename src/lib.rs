//! Playfield event client
//!
//! Client-side interaction layer for the Playfield event attendance
//! application: joining and leaving events, cancelling and deleting them,
//! posting comments and browsing upcoming and past events. All state is
//! owned by the Playfield server; this library calls it over HTTP and keeps
//! its rendered views consistent with the responses.

pub mod config;
pub mod handlers;
pub mod services;
pub mod models;
pub mod state;
pub mod utils;
pub mod views;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{PlayfieldError, Result};

// Re-export main components for easy access
pub use handlers::{ActionOutcome, EventInteractionClient, FetchOutcome, UserFeedback};
pub use services::PlayfieldApi;
pub use state::{ActionState, Control, ViewKind};
pub use views::EventBrowser;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
