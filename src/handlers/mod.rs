//! Interaction handlers
//!
//! [`EventInteractionClient`] runs every user action: it locks the
//! triggering control, calls the server, and reconciles the views from the
//! response. Failures are caught here, logged and surfaced through
//! [`UserFeedback`]; they never propagate to the caller as errors.

pub mod feedback;
pub mod attendance;
pub mod cancel;
pub mod comments;
pub mod events;

pub use feedback::{TerminalFeedback, UserFeedback};

use std::sync::Arc;

use crate::config::{DisplayConfig, Settings};
use crate::services::PlayfieldApi;
use crate::utils::errors::{FailureKind, PlayfieldError, Result};
use crate::utils::logging::log_api_error;

/// Result of a user-triggered action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Server accepted the action and the views were reconciled
    Completed,
    /// Control was disabled by an in-flight request; nothing was sent
    Ignored,
    /// User declined the confirmation; nothing was sent
    Declined,
    /// Request failed; the message was shown to the user
    Failed { kind: FailureKind, message: String },
}

/// Result of fetching a view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Rendered with this many items
    Rendered(usize),
    /// A newer fetch for the same view superseded this one
    Discarded,
    /// The error placeholder was rendered with this message
    Failed(String),
}

/// Client for the event attendance workflow
#[derive(Clone)]
pub struct EventInteractionClient {
    api: PlayfieldApi,
    feedback: Arc<dyn UserFeedback>,
    username: Option<String>,
    display: DisplayConfig,
}

impl EventInteractionClient {
    /// Create a client from settings
    pub fn new(settings: &Settings, feedback: Arc<dyn UserFeedback>) -> Result<Self> {
        let api = PlayfieldApi::new(settings)?;
        Ok(Self::with_api(
            api,
            settings.session.username.clone(),
            settings.display.clone(),
            feedback,
        ))
    }

    pub fn with_api(
        api: PlayfieldApi,
        username: Option<String>,
        display: DisplayConfig,
        feedback: Arc<dyn UserFeedback>,
    ) -> Self {
        Self {
            api,
            feedback,
            username,
            display,
        }
    }

    pub fn api(&self) -> &PlayfieldApi {
        &self.api
    }

    /// Logged-in username, if any
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Log a failed request and surface it to the user
    fn report_failure(&self, api: &str, error: PlayfieldError) -> ActionOutcome {
        log_api_error(api, &error, self.username.as_deref());
        let message = error.user_message();
        self.feedback.alert(&message);
        ActionOutcome::Failed {
            kind: error.kind(),
            message,
        }
    }
}
