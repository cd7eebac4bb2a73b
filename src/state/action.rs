//! Action availability
//!
//! Which single action control an event detail view offers, derived purely
//! from fresh server data and the current user. Nothing here is cached: the
//! state is recomputed after every fetch.

use serde::{Deserialize, Serialize};

use crate::models::Event;

/// The one action control shown on an event detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionState {
    NoAction,
    Attend,
    Unattend,
    CancelEvent,
    DeletePastEvent,
}

/// Facts about an event relative to the viewing user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionInputs {
    pub is_past: bool,
    pub is_cancelled: bool,
    pub is_host: bool,
    pub is_attendee: bool,
    pub is_full: bool,
}

impl ActionInputs {
    pub fn for_event(event: &Event, username: &str, is_past: bool) -> Self {
        Self {
            is_past,
            is_cancelled: event.is_cancelled,
            is_host: event.is_host(username),
            is_attendee: event.is_attendee(username),
            is_full: event.is_full(),
        }
    }
}

impl ActionState {
    /// Derive the available action
    ///
    /// A cancelled event offers nothing until it is past, when its host may
    /// still delete it.
    pub fn derive(inputs: ActionInputs) -> Self {
        match inputs {
            ActionInputs { is_past: true, is_host: true, .. } => ActionState::DeletePastEvent,
            ActionInputs { is_past: true, is_host: false, .. } => ActionState::NoAction,
            ActionInputs { is_cancelled: true, .. } => ActionState::NoAction,
            ActionInputs { is_host: true, .. } => ActionState::CancelEvent,
            ActionInputs { is_attendee: true, .. } => ActionState::Unattend,
            ActionInputs { is_full: false, .. } => ActionState::Attend,
            ActionInputs { is_full: true, .. } => ActionState::NoAction,
        }
    }

    /// Derive the action for a user, or `None` when nobody is logged in
    pub fn for_user(event: &Event, username: Option<&str>, is_past: bool) -> Option<Self> {
        username.map(|name| Self::derive(ActionInputs::for_event(event, name, is_past)))
    }

    pub fn label(&self) -> Option<&'static str> {
        match self {
            ActionState::NoAction => None,
            ActionState::Attend => Some("Join Event"),
            ActionState::Unattend => Some("Leave Event"),
            ActionState::CancelEvent => Some("Cancel Event"),
            ActionState::DeletePastEvent => Some("Delete Event"),
        }
    }

    /// Style class of the control
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            ActionState::NoAction => None,
            ActionState::Attend => Some("btn-success"),
            ActionState::Unattend | ActionState::CancelEvent | ActionState::DeletePastEvent => {
                Some("btn-danger")
            }
        }
    }

    /// Irreversible actions ask the user before dispatch
    pub fn requires_confirmation(&self) -> bool {
        matches!(self, ActionState::CancelEvent | ActionState::DeletePastEvent)
    }
}
