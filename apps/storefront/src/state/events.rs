//! Change notifications for the presentation layer.
//!
//! Every mutation publishes which slice changed. Subscribers re-read the
//! slice they care about; events carry no state of their own beyond the
//! key that changed.

use serde::Serialize;
use tokio::sync::broadcast;
use tracing::trace;

/// Buffered events per subscriber before it starts lagging.
pub const EVENT_CAPACITY: usize = 256;

/// Which part of the store changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "slice", rename_all = "camelCase")]
pub enum StoreEvent {
    Auth,
    Cart,
    Validation { name: String },
    Language { code: String },
}

/// Broadcast channel fan-out to any number of observers.
///
/// Publishing never blocks and never fails: with no subscribers the event is
/// dropped, and a slow subscriber sees `RecvError::Lagged` instead of holding
/// up the store.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<StoreEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(EVENT_CAPACITY);
        EventBus { tx }
    }

    pub fn publish(&self, event: StoreEvent) {
        trace!(?event, subscribers = self.tx.receiver_count(), "store event");
        let _ = self.tx.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
