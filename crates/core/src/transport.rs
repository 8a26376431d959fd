//! Transport seam — the single "send" capability hits are handed to.
//!
//! Dispatchers hold an `Arc<dyn HitTransport>` obtained from a
//! [`TrackerFactory`] once a destination is configured. Delivery, retries and
//! batching are the transport's business.

use std::sync::{Arc, Mutex};

use crate::types::HitParameters;

/// Destination for assembled hits. Fire-and-forget: nothing is returned.
pub trait HitTransport: Send + Sync {
    fn send(&self, hit: HitParameters);
}

/// Creates a transport bound to one analytics property.
pub trait TrackerFactory: Send + Sync {
    fn new_tracker(&self, tracking_id: &str) -> Arc<dyn HitTransport>;
}

/// Discards every hit.
pub struct NoOpTransport;

impl HitTransport for NoOpTransport {
    fn send(&self, _hit: HitParameters) {}
}

impl TrackerFactory for NoOpTransport {
    fn new_tracker(&self, _tracking_id: &str) -> Arc<dyn HitTransport> {
        Arc::new(NoOpTransport)
    }
}

/// In-memory transport that captures hits for testing. As a factory it hands
/// out itself and records every tracking id it was asked for.
#[derive(Default)]
pub struct CaptureTransport {
    hits: Mutex<Vec<HitParameters>>,
    tracking_ids: Mutex<Vec<String>>,
}

impl CaptureTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hits(&self) -> Vec<HitParameters> {
        self.hits.lock().expect("capture transport mutex poisoned").clone()
    }

    pub fn last(&self) -> Option<HitParameters> {
        self.hits
            .lock()
            .expect("capture transport mutex poisoned")
            .last()
            .cloned()
    }

    pub fn count(&self) -> usize {
        self.hits.lock().expect("capture transport mutex poisoned").len()
    }

    pub fn tracking_ids(&self) -> Vec<String> {
        self.tracking_ids
            .lock()
            .expect("capture transport mutex poisoned")
            .clone()
    }

    pub fn clear(&self) {
        self.hits.lock().expect("capture transport mutex poisoned").clear();
    }
}

impl HitTransport for CaptureTransport {
    fn send(&self, hit: HitParameters) {
        self.hits
            .lock()
            .expect("capture transport mutex poisoned")
            .push(hit);
    }
}

impl TrackerFactory for Arc<CaptureTransport> {
    fn new_tracker(&self, tracking_id: &str) -> Arc<dyn HitTransport> {
        self.tracking_ids
            .lock()
            .expect("capture transport mutex poisoned")
            .push(tracking_id.to_string());
        self.clone()
    }
}

/// Convenience: create a capture transport for tests.
pub fn capture_transport() -> Arc<CaptureTransport> {
    Arc::new(CaptureTransport::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(action: &str) -> HitParameters {
        [("&ea", Some(action))].into_iter().collect()
    }

    #[test]
    fn test_capture_transport() {
        let transport = capture_transport();
        assert_eq!(transport.count(), 0);

        transport.send(hit("batch_notification_open"));
        transport.send(hit("batch_in_app_click"));

        assert_eq!(transport.count(), 2);
        assert_eq!(
            transport.hits()[0].get("&ea"),
            Some("batch_notification_open")
        );
        assert_eq!(
            transport.last().unwrap().get("&ea"),
            Some("batch_in_app_click")
        );

        transport.clear();
        assert_eq!(transport.count(), 0);
    }

    #[test]
    fn test_capture_factory_records_tracking_ids() {
        let transport = capture_transport();
        let tracker = transport.new_tracker("UA-1234-1");
        tracker.send(hit("batch_in_app_show"));

        assert_eq!(transport.tracking_ids(), vec!["UA-1234-1".to_string()]);
        assert_eq!(transport.count(), 1);
    }

    #[test]
    fn test_noop_transport() {
        let tracker = NoOpTransport.new_tracker("UA-1234-1");
        // Should not panic
        tracker.send(hit("batch_unknown"));
    }
}
