//! Error handling for the Playfield client
//!
//! This module defines the main error type used throughout the client and
//! maps every failure into the three user-facing categories: transport
//! failures, application rejections and malformed responses.

use thiserror::Error;

/// Message shown to the user when the server gave no usable explanation
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// Main error type for the Playfield client
#[derive(Error, Debug)]
pub enum PlayfieldError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request failed with HTTP {status}")]
    RequestFailed { status: u16 },

    #[error("Rejected by server (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not logged in")]
    NotAuthenticated,
}

/// Result type alias for Playfield operations
pub type Result<T> = std::result::Result<T, PlayfieldError>;

/// User-facing failure categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Network unreachable, non-2xx without a usable body
    Transport,
    /// `success: false` (or an error status) carrying a server message
    Rejected,
    /// Body could not be parsed; surfaced like a transport failure
    Malformed,
}

impl PlayfieldError {
    /// Classify the error for user feedback
    pub fn kind(&self) -> FailureKind {
        match self {
            PlayfieldError::Rejected { .. } => FailureKind::Rejected,
            PlayfieldError::MalformedResponse(_) | PlayfieldError::Serialization(_) => {
                FailureKind::Malformed
            }
            _ => FailureKind::Transport,
        }
    }

    /// Text to surface to the user
    pub fn user_message(&self) -> String {
        match self {
            PlayfieldError::Rejected { message, .. } => message.clone(),
            PlayfieldError::NotAuthenticated => "You need to log in first.".to_string(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }

    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            PlayfieldError::Http(_) => true,
            PlayfieldError::RequestFailed { status } => *status >= 500,
            PlayfieldError::Rejected { .. } => true,
            PlayfieldError::MalformedResponse(_) => true,
            PlayfieldError::Config(_) => false,
            PlayfieldError::ConfigLoad(_) => false,
            PlayfieldError::Serialization(_) => false,
            PlayfieldError::Io(_) => true,
            PlayfieldError::UrlParse(_) => false,
            PlayfieldError::InvalidInput(_) => false,
            PlayfieldError::NotAuthenticated => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PlayfieldError::Config(_) | PlayfieldError::ConfigLoad(_) => ErrorSeverity::Critical,
            PlayfieldError::Rejected { .. } => ErrorSeverity::Info,
            PlayfieldError::NotAuthenticated => ErrorSeverity::Warning,
            PlayfieldError::InvalidInput(_) => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
