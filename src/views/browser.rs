//! Event browser
//!
//! Owns the three view containers (upcoming, past, detail), keeps exactly
//! one of them visible, and applies fetch results only when they belong to
//! the newest fetch issued for that view.

use tokio::sync::Mutex;
use tracing::debug;

use crate::state::{RequestSequence, Ticket, ViewKind};
use crate::utils::logging::log_view_render;
use super::dom::{Node, ViewContainer};
use super::events::{EventDetailView, Placeholder};

#[derive(Debug)]
struct BrowserState {
    containers: [ViewContainer; 3],
    active: Option<ViewKind>,
    detail: Option<EventDetailView>,
}

impl BrowserState {
    fn container_mut(&mut self, view: ViewKind) -> &mut ViewContainer {
        &mut self.containers[view.index()]
    }

    fn render_detail(&mut self) {
        let nodes: Vec<Node> = self
            .detail
            .as_ref()
            .map(|detail| vec![detail.render().into()])
            .unwrap_or_default();
        self.container_mut(ViewKind::Detail).replace(nodes);
    }
}

/// The three switchable event views
#[derive(Debug)]
pub struct EventBrowser {
    state: Mutex<BrowserState>,
    sequences: [RequestSequence; 3],
}

impl EventBrowser {
    pub fn new(upcoming: ViewContainer, past: ViewContainer, detail: ViewContainer) -> Self {
        Self {
            state: Mutex::new(BrowserState {
                containers: [upcoming, past, detail],
                active: None,
                detail: None,
            }),
            sequences: [RequestSequence::new(), RequestSequence::new(), RequestSequence::new()],
        }
    }

    /// Browser with containers using the default element ids
    pub fn with_default_containers() -> Self {
        Self::new(
            ViewContainer::new(ViewKind::Upcoming.container_id()),
            ViewContainer::new(ViewKind::Past.container_id()),
            ViewContainer::new(ViewKind::Detail.container_id()),
        )
    }

    /// Make `view` the only visible view
    pub async fn show(&self, view: ViewKind) {
        let mut state = self.state.lock().await;
        for kind in ViewKind::ALL {
            state.container_mut(kind).set_visible(kind == view);
        }
        state.active = Some(view);
        debug!(view = %view, "View switched");
    }

    pub async fn active(&self) -> Option<ViewKind> {
        self.state.lock().await.active
    }

    /// Issue a fetch for `view`: supersede older fetches and show the loading placeholder
    pub async fn begin_fetch(&self, view: ViewKind) -> Ticket {
        let ticket = self.sequences[view.index()].begin();
        let mut state = self.state.lock().await;
        state
            .container_mut(view)
            .replace(vec![Placeholder::Loading.render()]);
        ticket
    }

    pub fn is_current(&self, view: ViewKind, ticket: Ticket) -> bool {
        self.sequences[view.index()].is_current(ticket)
    }

    /// Replace the contents of a view; stale results are dropped
    ///
    /// Completing the detail view this way (with an error placeholder)
    /// also drops the previously loaded event.
    pub async fn complete(&self, view: ViewKind, ticket: Ticket, nodes: Vec<Node>) -> bool {
        let mut state = self.state.lock().await;
        if !self.is_current(view, ticket) {
            debug!(view = %view, "Discarding stale response");
            return false;
        }
        if view == ViewKind::Detail {
            state.detail = None;
        }
        log_view_render(&view.to_string(), nodes.len());
        state.container_mut(view).replace(nodes);
        true
    }

    /// Install a freshly fetched detail view; stale results are dropped
    pub async fn complete_detail(&self, ticket: Ticket, detail: EventDetailView) -> bool {
        let mut state = self.state.lock().await;
        if !self.is_current(ViewKind::Detail, ticket) {
            debug!(event_id = detail.event.id, "Discarding stale detail response");
            return false;
        }
        state.detail = Some(detail);
        state.render_detail();
        log_view_render(&ViewKind::Detail.to_string(), 1);
        true
    }

    /// Mutate the current detail view and re-render it
    pub async fn update_detail<R>(&self, f: impl FnOnce(&mut EventDetailView) -> R) -> Option<R> {
        let mut state = self.state.lock().await;
        let result = state.detail.as_mut().map(f);
        if result.is_some() {
            state.render_detail();
        }
        result
    }

    /// Mutate the detail view only while it still shows `event_id`
    pub async fn update_event<R>(
        &self,
        event_id: i64,
        f: impl FnOnce(&mut EventDetailView) -> R,
    ) -> Option<R> {
        let mut state = self.state.lock().await;
        match state.detail.as_mut() {
            Some(detail) if detail.event.id == event_id => {
                let result = f(detail);
                state.render_detail();
                Some(result)
            }
            Some(detail) => {
                debug!(
                    event_id = event_id,
                    shown = detail.event.id,
                    "Dropping response for event no longer shown"
                );
                None
            }
            None => None,
        }
    }

    pub async fn detail_event_id(&self) -> Option<i64> {
        self.state.lock().await.detail.as_ref().map(|detail| detail.event.id)
    }

    /// Forget the loaded event and empty the detail view
    pub async fn clear_detail(&self) {
        let mut state = self.state.lock().await;
        state.detail = None;
        state.render_detail();
    }

    pub async fn detail(&self) -> Option<EventDetailView> {
        self.state.lock().await.detail.clone()
    }

    pub async fn container(&self, view: ViewKind) -> ViewContainer {
        self.state.lock().await.containers[view.index()].clone()
    }

    /// Markup of the visible view
    pub async fn render_active(&self) -> Option<String> {
        let state = self.state.lock().await;
        state
            .active
            .map(|view| state.containers[view.index()].to_html())
    }
}

impl Default for EventBrowser {
    fn default() -> Self {
        Self::with_default_containers()
    }
}
