//! Comment submission handler

use tracing::{debug, info};

use super::{ActionOutcome, EventInteractionClient};
use crate::models::CommentForm;
use crate::state::Control;
use crate::utils::errors::PlayfieldError;
use crate::utils::logging::log_event_action;
use crate::views::EventBrowser;

impl EventInteractionClient {
    /// Post `form` to `action_url`
    ///
    /// Content is validated by the server. On success the new comment is
    /// put at the head of the list, the counter goes up by one and the form
    /// is cleared. A response for an event that is no longer shown only
    /// produces the notice.
    pub async fn submit_comment(
        &self,
        browser: &EventBrowser,
        control: &Control,
        action_url: &str,
        form: &CommentForm,
    ) -> ActionOutcome {
        let Some(_lock) = control.try_lock() else {
            debug!(control = control.id(), "Comment ignored, request in flight");
            return ActionOutcome::Ignored;
        };

        if self.username.is_none() {
            return self.report_failure("submit_comment", PlayfieldError::NotAuthenticated);
        }

        let event_id = browser.detail_event_id().await;

        match self.api.submit_comment(action_url, form).await {
            Ok(response) => {
                let author = response.comment.author.clone();
                if let Some(event_id) = event_id {
                    browser
                        .update_event(event_id, |detail| {
                            detail.comments.add_comment(response.comment)
                        })
                        .await;
                }

                if let Some(message) = &response.message {
                    self.feedback.notify(message);
                }

                log_event_action(event_id, "commented", None);
                info!(author = %author, "Comment posted");
                ActionOutcome::Completed
            }
            Err(e) => self.report_failure("submit_comment", e),
        }
    }
}
