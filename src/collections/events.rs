//! Store change notifications
//!
//! Every mutation of the record store is published on a broadcast channel so
//! that any number of listeners (UI sessions, sync tasks) can re-evaluate.

use serde::Serialize;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::models::measurement::MeasurementRecord;
use crate::models::subject::Subjects;

/// Change to the stored data
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum StoreEvent {
    /// A record was added
    RecordAdded(MeasurementRecord),
    /// A record's values or note changed
    RecordUpdated(MeasurementRecord),
    /// A record was deleted
    RecordRemoved(Uuid),
    /// A subject profile changed; carries both profiles
    SubjectsUpdated(Subjects),
    /// Bulk change; listeners should reload everything
    Refreshed,
}

/// Fan-out of store events to subscribers
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<StoreEvent>,
}

impl EventBus {
    /// Create a bus buffering up to `capacity` events per subscriber
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Publish an event to all subscribers
    pub fn publish(&self, event: StoreEvent) {
        // No subscribers is fine
        let _ = self.tx.send(event);
    }

    /// Create a new subscriber
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
