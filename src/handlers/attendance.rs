//! Attendance toggle handler

use tracing::{debug, info};

use super::{ActionOutcome, EventInteractionClient};
use crate::state::Control;
use crate::utils::errors::PlayfieldError;
use crate::utils::logging::log_event_action;
use crate::views::EventBrowser;

impl EventInteractionClient {
    /// Join or leave the event behind `toggle_url`
    ///
    /// The control stays disabled until the request settles, so a second
    /// activation in the meantime is ignored. On success the attendance
    /// panel and button are reconciled from the response, provided the
    /// detail view still shows the event the request was sent for; on
    /// failure the view is left untouched.
    pub async fn toggle_attendance(
        &self,
        browser: &EventBrowser,
        control: &Control,
        toggle_url: &str,
    ) -> ActionOutcome {
        let Some(_lock) = control.try_lock() else {
            debug!(control = control.id(), "Toggle ignored, request in flight");
            return ActionOutcome::Ignored;
        };

        if self.username.is_none() {
            return self.report_failure("toggle_attendance", PlayfieldError::NotAuthenticated);
        }

        let event_id = browser.detail_event_id().await;
        debug!(url = toggle_url, event_id = ?event_id, "Toggling attendance");

        match self.api.toggle_attendance(toggle_url).await {
            Ok(response) => {
                if let Some(event_id) = event_id {
                    browser
                        .update_event(event_id, |detail| detail.apply_toggle(&response))
                        .await;
                }

                if let Some(message) = &response.message {
                    self.feedback.notify(message);
                }

                let action = if response.attending { "joined" } else { "left" };
                log_event_action(event_id, action, response.message.as_deref());
                info!(
                    attending = response.attending,
                    attendees = response.attendees_count,
                    max = response.max_attendees,
                    "Attendance toggled"
                );
                ActionOutcome::Completed
            }
            Err(e) => self.report_failure("toggle_attendance", e),
        }
    }
}
