//! Request sequencing for view fetches
//!
//! Every fetch into a view takes a ticket. When the response arrives it is
//! applied only if no newer fetch for the same view has started since.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic counter of fetches issued for one view
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: AtomicU64,
}

/// Identifies one issued fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch, superseding all earlier ones
    pub fn begin(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Whether the ticket still belongs to the most recent fetch
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }
}
