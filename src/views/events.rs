//! Event listing cards, placeholders and the event detail view

use crate::config::DisplayConfig;
use crate::models::{Event, ToggleAttendanceResponse};
use crate::services::routes;
use crate::state::{ActionState, ViewKind};
use crate::utils::helpers::truncate_text;
use super::attendance::{AttendancePanel, TOGGLE_BUTTON_ID};
use super::comments::CommentSection;
use super::dom::{Element, Node};

pub const CANCEL_BUTTON_ID: &str = "cancel-event-btn";
pub const DELETE_BUTTON_ID: &str = "delete-event-btn";
pub const LOGIN_PROMPT_ID: &str = "login-prompt";

const DESCRIPTION_PREVIEW_CHARS: usize = 120;

/// Content shown in a view instead of results
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    Loading,
    Empty(ViewKind),
    Error(String),
}

impl Placeholder {
    pub fn render(&self) -> Element {
        match self {
            Placeholder::Loading => Element::new("p")
                .class("placeholder")
                .class("loading")
                .text("Loading..."),
            Placeholder::Empty(view) => {
                let text = match view {
                    ViewKind::Past => "No past events.",
                    _ => "No upcoming events.",
                };
                Element::new("p").class("placeholder").class("no-events").text(text)
            }
            Placeholder::Error(message) => Element::new("p")
                .class("placeholder")
                .class("load-error")
                .class("text-danger")
                .text(message.clone()),
        }
    }
}

fn cancelled_badge() -> Element {
    Element::new("span")
        .class("badge")
        .class("bg-warning")
        .class("event-cancelled")
        .text("Cancelled")
}

/// Summary card for a listing
pub fn render_event_card(event: &Event) -> Element {
    let capacity = event.capacity();

    let mut meta = Element::new("p")
        .class("event-meta")
        .child(Element::new("span").class("event-category").text(event.category_label().to_string()));
    if let Some(skill) = event.skill_level_display.as_ref().or(event.skill_level.as_ref()) {
        meta = meta.text(" · ").child(Element::new("span").class("event-skill").text(skill.clone()));
    }

    let mut card = Element::new("div")
        .class("card")
        .class("event-card")
        .attr("data-event-id", event.id.to_string());

    if let Some(image) = &event.image {
        card = card.child(
            Element::new("img")
                .class("card-img-top")
                .attr("src", image.clone())
                .attr("alt", event.title.clone()),
        );
    }

    let mut title = Element::new("h5").class("card-title").text(event.title.clone());
    if event.is_cancelled {
        title = title.text(" ").child(cancelled_badge());
    }

    let mut body = Element::new("div")
        .class("card-body")
        .child(title)
        .child(meta)
        .child(
            Element::new("p")
                .class("event-when")
                .text(format!("{}, {} - {}", event.date, event.start, event.end)),
        );

    if let Some(location) = &event.location {
        body = body.child(Element::new("p").class("event-location").text(location.clone()));
    }

    body = body
        .child(
            Element::new("p")
                .class("card-text")
                .text(truncate_text(&event.description, DESCRIPTION_PREVIEW_CHARS)),
        )
        .child(
            Element::new("p")
                .class("event-host")
                .text("Hosted by ")
                .child(
                    Element::new("a")
                        .attr("href", routes::user_profile(&event.host))
                        .text(event.host.clone()),
                ),
        );

    let mut status = Element::new("span")
        .class("event-capacity")
        .text(format!("{}/{} · {}", capacity.attending, capacity.max, capacity.label()));
    if capacity.is_full() {
        status = status.class("badge").class("bg-danger");
    }

    card.child(body.child(status))
}

/// Listing contents: one card per event, or the empty placeholder
pub fn render_event_list(events: &[Event], view: ViewKind) -> Vec<Node> {
    if events.is_empty() {
        return vec![Placeholder::Empty(view).render().into()];
    }
    events.iter().map(|event| render_event_card(event).into()).collect()
}

/// Full view of one event
#[derive(Debug, Clone, PartialEq)]
pub struct EventDetailView {
    pub event: Event,
    pub is_past: bool,
    /// `None` when nobody is logged in
    pub action: Option<ActionState>,
    pub attendance: AttendancePanel,
    pub comments: CommentSection,
}

impl EventDetailView {
    pub fn new(
        event: Event,
        username: Option<&str>,
        is_past: bool,
        display: &DisplayConfig,
    ) -> Self {
        let action = ActionState::for_user(&event, username, is_past);
        let attendance = AttendancePanel::from_event(&event, username, display);
        let comments = CommentSection::new(event.comments.clone());
        Self {
            event,
            is_past,
            action,
            attendance,
            comments,
        }
    }

    pub fn toggle_url(&self) -> String {
        routes::toggle_attendance(self.event.id)
    }

    pub fn cancel_url(&self) -> String {
        routes::cancel_event(self.event.id)
    }

    pub fn comment_url(&self) -> String {
        routes::add_comment(self.event.id)
    }

    /// Reconcile after a successful toggle
    pub fn apply_toggle(&mut self, response: &ToggleAttendanceResponse) {
        self.attendance.apply(response);
        if self.event.is_cancelled {
            return;
        }
        if matches!(self.action, Some(ActionState::Attend | ActionState::Unattend | ActionState::NoAction)) {
            self.action = Some(if response.attending {
                ActionState::Unattend
            } else if response.capacity().is_full() {
                ActionState::NoAction
            } else {
                ActionState::Attend
            });
        }
    }

    pub fn render_action(&self) -> Option<Element> {
        match self.action {
            None => Some(
                Element::new("div")
                    .id(LOGIN_PROMPT_ID)
                    .class("alert")
                    .class("alert-info")
                    .child(Element::new("a").attr("href", "login/").text("Log in"))
                    .text(" to join this event."),
            ),
            Some(ActionState::NoAction) => None,
            Some(ActionState::Attend | ActionState::Unattend) => {
                Some(self.attendance.render_button(&self.toggle_url()))
            }
            Some(state @ ActionState::CancelEvent) => {
                Some(action_button(CANCEL_BUTTON_ID, state, self.cancel_url()))
            }
            Some(state @ ActionState::DeletePastEvent) => Some(action_button(
                DELETE_BUTTON_ID,
                state,
                routes::legacy_delete(self.event.id),
            )),
        }
    }

    pub fn render(&self) -> Element {
        let event = &self.event;

        let mut title = Element::new("h2").id("event-title").text(event.title.clone());
        if event.is_cancelled {
            title = title.text(" ").child(cancelled_badge());
        }

        let mut header = Element::new("header")
            .class("event-header")
            .child(title)
            .child(
                Element::new("p")
                    .class("event-meta")
                    .child(Element::new("span").class("badge").class("bg-secondary").text(event.category_label().to_string()))
                    .text(" ")
                    .text(event.skill_level_display.clone().unwrap_or_default()),
            )
            .child(
                Element::new("p")
                    .class("event-when")
                    .text(format!("{}, {} - {}", event.date, event.start, event.end)),
            );

        if let Some(location) = &event.location {
            header = header.child(Element::new("p").class("event-location").text(location.clone()));
        }

        header = header.child(
            Element::new("p")
                .class("event-host")
                .text("Hosted by ")
                .child(
                    Element::new("a")
                        .attr("href", routes::user_profile(&event.host))
                        .text(event.host.clone()),
                ),
        );

        let mut detail = Element::new("article")
            .class("event-detail")
            .attr("data-event-id", event.id.to_string())
            .child(header);

        if let Some(image) = &event.image {
            detail = detail.child(
                Element::new("img")
                    .class("event-image")
                    .attr("src", image.clone())
                    .attr("alt", event.title.clone()),
            );
        }

        detail = detail.child(
            Element::new("div")
                .class("event-description")
                .text(event.description.clone()),
        );

        if let Some(action) = self.render_action() {
            detail = detail.child(Element::new("div").id("event-actions").child(action));
        }

        detail
            .child(self.attendance.render())
            .child(self.comments.render(&self.comment_url()))
    }
}

fn action_button(id: &'static str, state: ActionState, url: String) -> Element {
    let button = Element::new("button")
        .id(id)
        .class("btn")
        .class(state.css_class().unwrap_or_default())
        .attr("data-url", url);
    let button = if state.requires_confirmation() {
        button.attr("data-confirm", "true")
    } else {
        button
    };
    button.text(state.label().unwrap_or_default())
}

/// Id of the control rendered for an action
pub fn control_id(state: ActionState) -> Option<&'static str> {
    match state {
        ActionState::Attend | ActionState::Unattend => Some(TOGGLE_BUTTON_ID),
        ActionState::CancelEvent => Some(CANCEL_BUTTON_ID),
        ActionState::DeletePastEvent => Some(DELETE_BUTTON_ID),
        ActionState::NoAction => None,
    }
}
