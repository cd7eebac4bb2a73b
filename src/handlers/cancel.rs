//! Cancel and delete handlers for hosts

use tracing::{debug, info};

use super::{ActionOutcome, EventInteractionClient};
use crate::state::Control;
use crate::utils::errors::PlayfieldError;
use crate::utils::logging::log_event_action;
use crate::views::EventBrowser;

pub const CANCEL_CONFIRMATION: &str =
    "Are you sure you want to cancel this event? This action cannot be undone.";
pub const DELETE_CONFIRMATION: &str =
    "Are you sure you want to delete this event? This action cannot be undone.";

impl EventInteractionClient {
    /// Cancel the upcoming event behind `cancel_url`
    ///
    /// Nothing is sent unless the user confirms. On success the server
    /// message is shown and, if the event is still on screen, the detail
    /// view is reloaded from the server.
    pub async fn cancel_event(
        &self,
        browser: &EventBrowser,
        control: &Control,
        cancel_url: &str,
    ) -> ActionOutcome {
        let Some(_lock) = control.try_lock() else {
            debug!(control = control.id(), "Cancel ignored, request in flight");
            return ActionOutcome::Ignored;
        };

        if !self.feedback.confirm(CANCEL_CONFIRMATION) {
            debug!(url = cancel_url, "Cancel declined");
            return ActionOutcome::Declined;
        }

        if self.username.is_none() {
            return self.report_failure("cancel_event", PlayfieldError::NotAuthenticated);
        }

        let event_id = browser.detail_event_id().await;

        match self.api.cancel_event(cancel_url).await {
            Ok(response) => {
                if let Some(message) = &response.message {
                    self.feedback.notify(message);
                }
                log_event_action(event_id, "cancelled", response.message.as_deref());

                // Reload only if the user has not moved on to another event
                let shown = browser.detail_event_id().await;
                match event_id {
                    Some(id) if shown == Some(id) => {
                        self.show_event(browser, id).await;
                    }
                    _ => debug!(event_id = ?event_id, shown = ?shown, "Cancelled event no longer shown"),
                }
                ActionOutcome::Completed
            }
            Err(e) => self.report_failure("cancel_event", e),
        }
    }

    /// Delete a past event the user hosted, then return to the past listing
    pub async fn delete_past_event(
        &self,
        browser: &EventBrowser,
        control: &Control,
        event_id: i64,
    ) -> ActionOutcome {
        let Some(_lock) = control.try_lock() else {
            debug!(control = control.id(), "Delete ignored, request in flight");
            return ActionOutcome::Ignored;
        };

        if !self.feedback.confirm(DELETE_CONFIRMATION) {
            debug!(event_id = event_id, "Delete declined");
            return ActionOutcome::Declined;
        }

        if self.username.is_none() {
            return self.report_failure("delete_event", PlayfieldError::NotAuthenticated);
        }

        match self.api.delete_event(event_id).await {
            Ok(()) => {
                self.feedback.notify("Event deleted.");
                log_event_action(Some(event_id), "deleted", None);
                info!(event_id = event_id, "Past event deleted");

                browser.clear_detail().await;
                self.show_past(browser).await;
                ActionOutcome::Completed
            }
            Err(e) => self.report_failure("delete_event", e),
        }
    }
}
