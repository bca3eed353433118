//! Refresh sequencing shared by the fetching stores.

use std::sync::atomic::{AtomicU64, Ordering};

/// Ticket dispenser implementing last-write-wins refreshes.
///
/// Every refresh claims a ticket before awaiting its fetch and checks it
/// is still the newest one before applying the outcome. A completed newer
/// refresh therefore can never be overwritten by an older in-flight one;
/// the older outcome, success or failure, is discarded whole.
#[derive(Debug, Default)]
pub struct RefreshSeq {
    issued: AtomicU64,
}

impl RefreshSeq {
    pub fn new() -> Self {
        Self {
            issued: AtomicU64::new(0),
        }
    }

    /// Claim the next ticket.
    pub fn claim(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `ticket` is still the newest one claimed.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.issued.load(Ordering::SeqCst) == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::RefreshSeq;

    #[test]
    fn newest_ticket_wins() {
        let seq = RefreshSeq::new();
        let first = seq.claim();
        let second = seq.claim();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
        assert_eq!(seq.claim(), 3);
    }
}
