//! Tracker that writes each hit to stdout as one JSON line.

use std::io::Write;
use std::sync::Arc;

use batch_dispatch_core::{HitParameters, HitTransport, TrackerFactory};
use serde::Serialize;
use tracing::error;

#[derive(Serialize)]
struct HitLine<'a> {
    tracking_id: &'a str,
    params: &'a HitParameters,
}

pub struct StdoutTracker {
    tracking_id: String,
}

impl HitTransport for StdoutTracker {
    fn send(&self, hit: HitParameters) {
        let line = HitLine {
            tracking_id: &self.tracking_id,
            params: &hit,
        };
        let mut out = std::io::stdout().lock();
        let written = serde_json::to_writer(&mut out, &line)
            .map_err(std::io::Error::from)
            .and_then(|_| out.write_all(b"\n"));
        if let Err(e) = written {
            error!(error = %e, "Failed to write hit");
        }
    }
}

pub struct StdoutTrackerFactory;

impl TrackerFactory for StdoutTrackerFactory {
    fn new_tracker(&self, tracking_id: &str) -> Arc<dyn HitTransport> {
        Arc::new(StdoutTracker {
            tracking_id: tracking_id.to_string(),
        })
    }
}
