//! Explicit dispatcher registration. The host builds its dispatchers at
//! startup and registers them here; nothing registers itself.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::types::{EventPayload, EventType};

/// Receives every lifecycle event the host SDK emits.
pub trait EventDispatcher: Send + Sync {
    /// Short name used in logs (e.g. "google_analytics").
    fn name(&self) -> &str;

    fn dispatch_event(&self, event_type: EventType, payload: &dyn EventPayload);
}

/// Registered dispatchers, invoked in registration order.
#[derive(Default)]
pub struct DispatcherRegistry {
    dispatchers: RwLock<Vec<Arc<dyn EventDispatcher>>>,
}

impl DispatcherRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, dispatcher: Arc<dyn EventDispatcher>) {
        debug!(dispatcher = dispatcher.name(), "Registering event dispatcher");
        self.dispatchers.write().push(dispatcher);
    }

    pub fn len(&self) -> usize {
        self.dispatchers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.dispatchers.read().is_empty()
    }

    /// Fan an event out to every registered dispatcher.
    pub fn dispatch(&self, event_type: EventType, payload: &dyn EventPayload) {
        let dispatchers = self.dispatchers.read().clone();
        for dispatcher in dispatchers {
            dispatcher.dispatch_event(event_type, payload);
        }
    }
}
