//! Stale-response discarding for superseded fetches.
//!
//! A view (page, panel) that refetches on navigation tags each request
//! with the generation current at issue time. When a newer request
//! starts, earlier tickets stop being current and their results are
//! dropped on arrival instead of clobbering fresher data.

use std::sync::atomic::{AtomicU64, Ordering};

/// Ticket identifying one fetch issued by a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

/// Monotonic generation counter for a single view.
#[derive(Debug, Default)]
pub struct ViewGeneration {
    current: AtomicU64,
}

impl ViewGeneration {
    /// Create a fresh counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch, superseding all earlier tickets.
    pub fn begin(&self) -> FetchTicket {
        let generation = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        FetchTicket { generation }
    }

    /// Whether a ticket still represents the latest fetch.
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        self.current.load(Ordering::SeqCst) == ticket.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_fetch_supersedes_older() {
        let view = ViewGeneration::new();

        let first = view.begin();
        assert!(view.is_current(first));

        let second = view.begin();
        assert!(!view.is_current(first));
        assert!(view.is_current(second));
    }
}
