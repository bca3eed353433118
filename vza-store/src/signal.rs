//! Change notification for store subscribers.

use tokio::sync::watch;

/// Monotonic revision counter observers can await.
///
/// Stores call [`mark`](Self::mark) after every applied mutation. The
/// presentation loop holds a [`watch::Receiver`] and re-reads the store
/// whenever the value moves; fetches may complete on any task, delivery
/// happens on the subscriber's own loop. Marking never blocks, with or
/// without live receivers.
#[derive(Debug)]
pub struct ChangeSignal {
    sender: watch::Sender<u64>,
}

impl ChangeSignal {
    pub fn new() -> Self {
        let (sender, _receiver) = watch::channel(0);
        Self { sender }
    }

    /// Record one applied mutation.
    pub fn mark(&self) {
        self.sender.send_modify(|revision| *revision += 1);
    }

    /// Current revision, starting at zero.
    pub fn revision(&self) -> u64 {
        *self.sender.borrow()
    }

    /// New receiver positioned at the current revision.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.sender.subscribe()
    }
}

impl Default for ChangeSignal {
    fn default() -> Self {
        Self::new()
    }
}
