//! Attendance panel
//!
//! Join/leave button, attendee count, remaining capacity, progress bar and
//! attendee list of an event detail view, reconciled from toggle responses.

use crate::config::DisplayConfig;
use crate::models::{AttendeeEntry, Capacity, Event, ToggleAttendanceResponse};
use crate::services::routes;
use crate::state::ActionState;
use super::dom::Element;

pub const TOGGLE_BUTTON_ID: &str = "toggle-attendance-btn";

/// Client-side state of the attendance panel
#[derive(Debug, Clone, PartialEq)]
pub struct AttendancePanel {
    pub attending: bool,
    pub button_label: String,
    pub capacity: Capacity,
    pub attendees: Vec<AttendeeEntry>,
    preview_limit: usize,
    default_avatar_url: String,
}

impl AttendancePanel {
    /// Initial panel for an event as seen by `username`
    pub fn from_event(event: &Event, username: Option<&str>, display: &DisplayConfig) -> Self {
        let attending = username.map(|name| event.is_attendee(name)).unwrap_or(false);
        let label = if attending {
            ActionState::Unattend.label()
        } else {
            ActionState::Attend.label()
        };

        // BTreeSet iteration matches the server's username ordering
        let attendees = event
            .attendees
            .iter()
            .map(|name| AttendeeEntry {
                username: name.clone(),
                profile_url: routes::user_profile(name),
                profile_picture_url: None,
                is_host: event.is_host(name),
            })
            .collect();

        Self {
            attending,
            button_label: label.unwrap_or_default().to_string(),
            capacity: event.capacity(),
            attendees,
            preview_limit: display.attendee_preview_limit,
            default_avatar_url: display.default_avatar_url.clone(),
        }
    }

    /// Reconcile the panel from a successful toggle response
    pub fn apply(&mut self, response: &ToggleAttendanceResponse) {
        self.attending = response.attending;
        self.button_label = response.button_text.clone();
        self.capacity = response.capacity();
        self.attendees = response.attendees_list.clone();
    }

    pub fn button_class(&self) -> &'static str {
        if self.attending {
            "btn-danger"
        } else {
            "btn-success"
        }
    }

    /// Number of attendees beyond the preview limit
    pub fn hidden_attendees(&self) -> usize {
        let total = self.attendees.len().max(self.capacity.attending as usize);
        total.saturating_sub(self.shown_attendees().len())
    }

    fn shown_attendees(&self) -> &[AttendeeEntry] {
        let shown = self.attendees.len().min(self.preview_limit);
        &self.attendees[..shown]
    }

    pub fn render_button(&self, toggle_url: &str) -> Element {
        Element::new("button")
            .id(TOGGLE_BUTTON_ID)
            .class("btn")
            .class(self.button_class())
            .attr("data-url", toggle_url)
            .text(self.button_label.clone())
    }

    pub fn render_capacity(&self) -> Element {
        let capacity = self.capacity;
        let state_class = if capacity.is_full() { "text-danger" } else { "text-success" };
        let bar_class = if capacity.is_full() { "bg-danger" } else { "bg-success" };
        let percentage = capacity.percentage();

        Element::new("div")
            .class("attendance-capacity")
            .child(
                Element::new("p")
                    .child(Element::new("span").id("attendees-count").text(capacity.attending.to_string()))
                    .text(format!(" / {} attending", capacity.max)),
            )
            .child(
                Element::new("span")
                    .id("spots-available")
                    .class(state_class)
                    .text(capacity.label()),
            )
            .child(
                Element::new("div").class("progress").child(
                    Element::new("div")
                        .id("attendance-progress")
                        .class("progress-bar")
                        .class(bar_class)
                        .attr("role", "progressbar")
                        .attr("style", format!("width: {}%", percentage))
                        .attr("aria-valuenow", percentage.to_string())
                        .attr("aria-valuemin", "0")
                        .attr("aria-valuemax", "100"),
                ),
            )
    }

    pub fn render_attendee_list(&self) -> Element {
        let mut list = Element::new("ul").id("attendees-list").class("list-unstyled");

        for attendee in self.shown_attendees() {
            let avatar = attendee
                .profile_picture_url
                .clone()
                .unwrap_or_else(|| self.default_avatar_url.clone());

            let mut link = Element::new("a")
                .attr("href", attendee.profile_url.clone())
                .child(
                    Element::new("img")
                        .class("avatar")
                        .attr("src", avatar)
                        .attr("alt", attendee.username.clone()),
                )
                .child(Element::new("span").class("attendee-name").text(attendee.username.clone()));

            if attendee.is_host {
                link = link.child(Element::new("span").class("badge").class("bg-primary").text("Host"));
            }

            list = list.child(Element::new("li").class("attendee").child(link));
        }

        let hidden = self.hidden_attendees();
        if hidden > 0 {
            list = list.child(
                Element::new("li")
                    .class("attendees-more")
                    .class("text-muted")
                    .text(format!("And {} more...", hidden)),
            );
        }

        list
    }

    /// Capacity and attendee list, without the action control
    pub fn render(&self) -> Element {
        Element::new("section")
            .id("attendance-panel")
            .child(self.render_capacity())
            .child(self.render_attendee_list())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, is_host: bool) -> AttendeeEntry {
        AttendeeEntry {
            username: name.to_string(),
            profile_url: format!("/profile/{}/", name),
            profile_picture_url: None,
            is_host,
        }
    }

    fn response(count: u32, max: u32, names: &[&str]) -> ToggleAttendanceResponse {
        ToggleAttendanceResponse {
            message: Some("You've joined the event".to_string()),
            attending: true,
            button_text: "Leave Event".to_string(),
            attendees_count: count,
            max_attendees: max,
            spots_available: Some(i64::from(max) - i64::from(count)),
            attendees_list: names.iter().map(|n| entry(n, *n == "host")).collect(),
        }
    }

    fn empty_panel() -> AttendancePanel {
        let event: Event = serde_json::from_value(serde_json::json!({
            "id": 1, "title": "Pickup", "host": "host", "attendees": ["host"],
            "date": "June 01, 2030", "start": "10:00 AM", "end": "11:00 AM",
            "category": "basketball", "max_attendees": 10
        }))
        .unwrap();
        AttendancePanel::from_event(&event, Some("alice"), &DisplayConfig::default())
    }

    #[test]
    fn test_initial_panel_from_event() {
        let panel = empty_panel();
        assert!(!panel.attending);
        assert_eq!(panel.button_label, "Join Event");
        assert_eq!(panel.button_class(), "btn-success");
        assert_eq!(panel.attendees.len(), 1);
        assert!(panel.attendees[0].is_host);
        assert_eq!(panel.attendees[0].profile_url, "profile/host/");
    }

    #[test]
    fn test_apply_updates_every_display() {
        let mut panel = empty_panel();
        panel.apply(&response(7, 10, &["host", "alice"]));

        assert!(panel.attending);
        assert_eq!(panel.button_class(), "btn-danger");

        let button = panel.render_button("events/1/toggle-attendance/");
        assert_eq!(button.text_content(), "Leave Event");
        assert!(button.has_class("btn-danger"));

        let capacity = panel.render_capacity();
        let count = capacity.find_by_id("attendees-count").unwrap();
        assert_eq!(count.text_content(), "7");
        let spots = capacity.find_by_id("spots-available").unwrap();
        assert_eq!(spots.text_content(), "3 spots available");
        assert!(spots.has_class("text-success"));
        let bar = capacity.find_by_id("attendance-progress").unwrap();
        assert_eq!(bar.attribute("style"), Some("width: 70%"));
    }

    #[test]
    fn test_full_event_display() {
        let mut panel = empty_panel();
        panel.apply(&response(10, 10, &["host"]));
        let capacity = panel.render_capacity();
        let spots = capacity.find_by_id("spots-available").unwrap();
        assert_eq!(spots.text_content(), "Full");
        assert!(spots.has_class("text-danger"));
    }

    #[test]
    fn test_zero_capacity_progress() {
        let mut panel = empty_panel();
        panel.apply(&response(0, 0, &[]));
        let capacity = panel.render_capacity();
        let bar = capacity.find_by_id("attendance-progress").unwrap();
        assert_eq!(bar.attribute("style"), Some("width: 0%"));
    }

    #[test]
    fn test_attendee_list_truncates_after_ten() {
        let names: Vec<String> = (1..=12).map(|i| format!("player{:02}", i)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut panel = empty_panel();
        panel.apply(&response(12, 20, &refs));

        let list = panel.render_attendee_list();
        assert_eq!(list.find_by_class("attendee").len(), 10);
        let more = list.find_by_class("attendees-more");
        assert_eq!(more.len(), 1);
        assert_eq!(more[0].text_content(), "And 2 more...");
    }

    #[test]
    fn test_summary_counts_attendees_the_server_left_out() {
        let names: Vec<String> = (1..=10).map(|i| format!("player{:02}", i)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut panel = empty_panel();
        panel.apply(&response(14, 20, &refs));

        let list = panel.render_attendee_list();
        assert_eq!(list.find_by_class("attendees-more")[0].text_content(), "And 4 more...");
    }

    #[test]
    fn test_host_badge_and_default_avatar() {
        let mut panel = empty_panel();
        panel.apply(&response(2, 10, &["host", "alice"]));
        let list = panel.render_attendee_list();

        assert_eq!(list.find_by_class("badge").len(), 1);
        let avatars = list.find_by_tag("img");
        assert_eq!(
            avatars[1].attribute("src"),
            Some("/static/sports/images/default_avatar.png")
        );
    }
}
