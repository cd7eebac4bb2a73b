//! Configuration validation module
//!
//! This module provides validation functions for client configuration
//! to ensure the server address and display limits are usable.

use url::Url;

use super::Settings;
use crate::utils::errors::{PlayfieldError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    validate_session_config(&settings.session)?;
    validate_display_config(&settings.display)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate server configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(PlayfieldError::Config("Server base URL is required".to_string()));
    }

    let url = Url::parse(&config.base_url)
        .map_err(|e| PlayfieldError::Config(format!("Invalid server base URL: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(PlayfieldError::Config(format!(
            "Unsupported URL scheme: {}",
            url.scheme()
        )));
    }

    if config.timeout_seconds == 0 {
        return Err(PlayfieldError::Config(
            "Server timeout must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate session configuration
fn validate_session_config(config: &super::SessionConfig) -> Result<()> {
    if config.csrf_cookie_name.is_empty() {
        return Err(PlayfieldError::Config("CSRF cookie name is required".to_string()));
    }

    if matches!(config.username.as_deref(), Some("")) {
        return Err(PlayfieldError::Config(
            "Username must not be empty when set".to_string(),
        ));
    }

    Ok(())
}

/// Validate display configuration
fn validate_display_config(config: &super::DisplayConfig) -> Result<()> {
    if config.attendee_preview_limit == 0 {
        return Err(PlayfieldError::Config(
            "Attendee preview limit must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(PlayfieldError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    let valid_formats = ["pretty", "json"];
    if !valid_formats.contains(&config.format.as_str()) {
        return Err(PlayfieldError::Config(format!(
            "Invalid log format: {}. Valid formats: {:?}",
            config.format, valid_formats
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_rejects_bad_base_url() {
        let mut settings = Settings::default();
        settings.server.base_url = "ftp://playfield.example/".to_string();
        assert_matches!(validate_settings(&settings), Err(PlayfieldError::Config(_)));

        settings.server.base_url = "not a url".to_string();
        assert_matches!(validate_settings(&settings), Err(PlayfieldError::Config(_)));
    }

    #[test]
    fn test_rejects_zero_limits() {
        let mut settings = Settings::default();
        settings.display.attendee_preview_limit = 0;
        assert!(validate_settings(&settings).is_err());

        let mut settings = Settings::default();
        settings.server.timeout_seconds = 0;
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let mut settings = Settings::default();
        settings.logging.level = "verbose".to_string();
        assert!(validate_settings(&settings).is_err());
    }
}
