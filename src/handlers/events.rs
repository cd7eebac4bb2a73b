//! View switching and fetch handlers

use tracing::debug;

use super::{EventInteractionClient, FetchOutcome};
use crate::models::{Event, EventFilter};
use crate::state::{Ticket, ViewKind};
use crate::utils::errors::{PlayfieldError, Result};
use crate::utils::logging::log_api_error;
use crate::views::{render_event_list, EventBrowser, EventDetailView, Placeholder};

impl EventInteractionClient {
    /// Switch to the upcoming listing and load it
    pub async fn show_upcoming(&self, browser: &EventBrowser, filter: &EventFilter) -> FetchOutcome {
        browser.show(ViewKind::Upcoming).await;
        let ticket = browser.begin_fetch(ViewKind::Upcoming).await;
        let result = self.api.list_events(filter).await;
        self.complete_listing(browser, ViewKind::Upcoming, ticket, result).await
    }

    /// Switch to the past listing and load it
    pub async fn show_past(&self, browser: &EventBrowser) -> FetchOutcome {
        browser.show(ViewKind::Past).await;
        let ticket = browser.begin_fetch(ViewKind::Past).await;
        let result = self.api.list_past_events().await;
        self.complete_listing(browser, ViewKind::Past, ticket, result).await
    }

    /// Switch to the detail view of one event and load it
    ///
    /// When the server does not say whether the event is past, it is taken
    /// as past if it was opened from the past listing.
    pub async fn show_event(&self, browser: &EventBrowser, event_id: i64) -> FetchOutcome {
        let origin = browser.active().await;
        browser.show(ViewKind::Detail).await;
        let ticket = browser.begin_fetch(ViewKind::Detail).await;

        match self.api.get_event(event_id).await {
            Ok(event) => {
                let is_past = event.is_past.unwrap_or(origin == Some(ViewKind::Past));
                let detail = EventDetailView::new(
                    event,
                    self.username.as_deref(),
                    is_past,
                    &self.display,
                );
                if browser.complete_detail(ticket, detail).await {
                    FetchOutcome::Rendered(1)
                } else {
                    FetchOutcome::Discarded
                }
            }
            Err(e) => self.fail_fetch(browser, ViewKind::Detail, ticket, e).await,
        }
    }

    async fn complete_listing(
        &self,
        browser: &EventBrowser,
        view: ViewKind,
        ticket: Ticket,
        result: Result<Vec<Event>>,
    ) -> FetchOutcome {
        match result {
            Ok(events) => {
                let count = events.len();
                if browser.complete(view, ticket, render_event_list(&events, view)).await {
                    FetchOutcome::Rendered(count)
                } else {
                    FetchOutcome::Discarded
                }
            }
            Err(e) => self.fail_fetch(browser, view, ticket, e).await,
        }
    }

    /// Replace the loading placeholder with the error placeholder
    async fn fail_fetch(
        &self,
        browser: &EventBrowser,
        view: ViewKind,
        ticket: Ticket,
        error: PlayfieldError,
    ) -> FetchOutcome {
        log_api_error(&format!("load_{}", view), &error, self.username.as_deref());
        let message = error.user_message();
        let placeholder = Placeholder::Error(message.clone()).render();
        if browser.complete(view, ticket, vec![placeholder.into()]).await {
            FetchOutcome::Failed(message)
        } else {
            debug!(view = %view, "Stale fetch failed");
            FetchOutcome::Discarded
        }
    }
}
