// --- File: crates/bookable_common/src/notify.rs ---
//! Store change notification channel.
//!
//! The managed store pushes row-change notifications; this module represents
//! that signal as an explicit broadcast channel of invalidation events.
//! Consumers never patch a previously computed result: on receipt they re-run
//! the whole availability pipeline from fresh data. Events therefore carry no
//! payload beyond the table that changed.

use tokio::sync::broadcast;
use tracing::trace;

/// Default number of buffered events per subscriber before the feed lags.
const DEFAULT_CAPACITY: usize = 16;

/// The store table a change event originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreTable {
    BusinessConfig,
    Bookings,
    Blocks,
    Services,
}

/// An invalidation event: rows in `table` may have changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeEvent {
    pub table: StoreTable,
}

/// A handle to the change feed. Cloning shares the underlying channel.
#[derive(Debug, Clone)]
pub struct ChangeFeed {
    sender: broadcast::Sender<ChangeEvent>,
}

impl ChangeFeed {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to change events published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.sender.subscribe()
    }

    /// Publish an invalidation event. Publishing without subscribers is a no-op.
    pub fn publish(&self, event: ChangeEvent) {
        trace!(table = ?event.table, "publishing store change event");
        let _ = self.sender.send(event);
    }
}

impl Default for ChangeFeed {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
