//! View switching

use std::fmt;

use serde::{Deserialize, Serialize};

/// The three mutually exclusive views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    Upcoming,
    Past,
    Detail,
}

impl ViewKind {
    pub const ALL: [ViewKind; 3] = [ViewKind::Upcoming, ViewKind::Past, ViewKind::Detail];

    /// Default container element id
    pub fn container_id(&self) -> &'static str {
        match self {
            ViewKind::Upcoming => "events-view",
            ViewKind::Past => "past-events-view",
            ViewKind::Detail => "event-detail-view",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            ViewKind::Upcoming => 0,
            ViewKind::Past => 1,
            ViewKind::Detail => 2,
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewKind::Upcoming => write!(f, "upcoming"),
            ViewKind::Past => write!(f, "past"),
            ViewKind::Detail => write!(f, "detail"),
        }
    }
}
