//! Latest-request-wins guard for overlapping async loads.
//!
//! Every load takes a ticket before it starts; when the response arrives it
//! may only be applied if no newer ticket has been issued in the meantime.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct RequestGeneration {
    current: Arc<AtomicU64>,
}

#[derive(Debug, Clone)]
pub struct RequestTicket {
    id: u64,
    current: Arc<AtomicU64>,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new ticket, invalidating all earlier ones
    pub fn begin(&self) -> RequestTicket {
        let id = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        RequestTicket {
            id,
            current: Arc::clone(&self.current),
        }
    }
}

impl RequestTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let generation = RequestGeneration::new();
        let first = generation.begin();
        assert!(first.is_current());

        let second = generation.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
        assert!(second.id() > first.id());
    }

    #[test]
    fn test_clones_share_the_counter() {
        let generation = RequestGeneration::new();
        let other = generation.clone();
        let ticket = generation.begin();
        let _newer = other.begin();
        assert!(!ticket.is_current());
    }
}
