//! Stale-response protection for overlapping fetches.
//!
//! The debounced search can have several list requests in flight at
//! once, and responses may land out of order. Each fetch takes a
//! ticket; only the holder of the newest ticket may apply its result.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Clone, Debug, Default)]
pub struct RequestSequence {
    current: Arc<AtomicU64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a new ticket, making every earlier ticket stale.
    pub fn next(&self) -> u64 {
        self.current.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Whether this ticket is still the newest one issued.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.current.load(Ordering::Relaxed) == ticket
    }

    /// Stales every outstanding ticket without issuing a new one.
    /// Called on unmount so late responses land nowhere.
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_ticket_wins() {
        let sequence = RequestSequence::new();
        let first = sequence.next();
        let second = sequence.next();
        assert!(!sequence.is_current(first));
        assert!(sequence.is_current(second));
    }

    #[test]
    fn clones_share_the_counter() {
        let sequence = RequestSequence::new();
        let clone = sequence.clone();
        let ticket = sequence.next();
        assert!(clone.is_current(ticket));
        let newer = clone.next();
        assert!(!sequence.is_current(ticket));
        assert!(sequence.is_current(newer));
    }

    #[test]
    fn invalidate_stales_everything() {
        let sequence = RequestSequence::new();
        let ticket = sequence.next();
        sequence.invalidate();
        assert!(!sequence.is_current(ticket));
    }
}
