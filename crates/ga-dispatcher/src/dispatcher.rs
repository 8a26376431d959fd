//! Google Analytics event dispatcher — turns host SDK lifecycle events into
//! campaign-attributed event hits and hands them to a tracker.

use std::sync::{Arc, OnceLock};

use batch_dispatch_core::{
    EventDispatcher, EventKind, EventPayload, EventType, HitParameters, HitTransport,
    TrackerFactory,
};
use tracing::{debug, info, warn};

use crate::attribution;
use crate::classifier::classify;
use crate::deeplink::ParsedDeeplink;
use crate::hit::{self, TRACKING_ID};

/// Dispatcher owned by the host's composition root. Unconfigured until
/// [`GaDispatcher::set_tracking_id`] binds a tracker; events received before
/// that are dropped.
pub struct GaDispatcher {
    factory: Arc<dyn TrackerFactory>,
    tracker: OnceLock<Arc<dyn HitTransport>>,
}

impl GaDispatcher {
    pub fn new(factory: Arc<dyn TrackerFactory>) -> Self {
        Self {
            factory,
            tracker: OnceLock::new(),
        }
    }

    /// Bind the destination property. The first call wins; later calls are
    /// no-ops.
    pub fn set_tracking_id(&self, tracking_id: &str) {
        let mut bound = false;
        self.tracker.get_or_init(|| {
            bound = true;
            self.factory.new_tracker(tracking_id)
        });

        if bound {
            info!(tracking_id, "Google Analytics tracker configured");
        } else {
            debug!(tracking_id, "Tracker already configured, ignoring tracking id");
        }
    }

    pub fn is_configured(&self) -> bool {
        self.tracker.get().is_some()
    }

    /// Build the hit for one event. Does not require a configured tracker.
    pub fn build_hit(event_type: EventType, payload: &dyn EventPayload) -> HitParameters {
        let classification = classify(event_type);

        let Some(kind) = classification.kind else {
            metrics::counter!("dispatcher.unknown_event").increment(1);
            warn!(?event_type, "Unknown event type, sending without attribution");
            return hit::assemble(
                classification.action,
                None,
                &attribution::AttributionFields::default(),
                &[],
            );
        };

        let deeplink = match ParsedDeeplink::parse_optional(payload.deeplink()) {
            Ok(deeplink) => deeplink,
            Err(e) => {
                metrics::counter!("dispatcher.malformed_deeplink").increment(1);
                warn!(error = %e, "Ignoring deeplink attribution");
                None
            }
        };

        let fields = attribution::resolve(kind, deeplink.as_ref(), payload);

        match kind {
            EventKind::Notification => {
                hit::assemble(classification.action, classification.category, &fields, &[])
            }
            EventKind::InApp => hit::assemble(
                classification.action,
                classification.category,
                &fields,
                &[(TRACKING_ID, payload.tracking_id())],
            ),
        }
    }
}

impl EventDispatcher for GaDispatcher {
    fn name(&self) -> &str {
        "google_analytics"
    }

    fn dispatch_event(&self, event_type: EventType, payload: &dyn EventPayload) {
        let Some(tracker) = self.tracker.get() else {
            metrics::counter!("dispatcher.dropped_unconfigured").increment(1);
            return;
        };

        let hit = Self::build_hit(event_type, payload);
        debug!(
            action = hit.get(hit::ACTION).unwrap_or_default(),
            params = hit.len(),
            "Sending Google Analytics hit"
        );
        tracker.send(hit);
        metrics::counter!("dispatcher.hits_sent").increment(1);
    }
}
