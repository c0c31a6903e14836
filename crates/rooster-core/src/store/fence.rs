// ── Request fencing ──
//
// Fetches take a ticket before awaiting the facade; only the holder of
// the latest ticket may commit its result.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic request counter for one kind of fetch.
#[derive(Debug, Default)]
pub(crate) struct RequestFence {
    latest: AtomicU64,
}

/// Proof of having issued a particular request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Ticket(u64);

impl RequestFence {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Issue a new ticket, superseding every earlier one.
    pub(crate) fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub(crate) fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

impl Ticket {
    pub(crate) fn id(self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_is_current() {
        let fence = RequestFence::new();
        let first = fence.issue();
        assert!(fence.is_current(first));

        let second = fence.issue();
        assert!(!fence.is_current(first));
        assert!(fence.is_current(second));
        assert!(second.id() > first.id());
    }
}
