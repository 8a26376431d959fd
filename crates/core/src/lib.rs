//! Shared vocabulary between a host engagement SDK and its analytics event
//! dispatchers: event types, payloads, hit parameters, the transport seam,
//! explicit dispatcher registration, configuration and errors.

pub mod config;
pub mod error;
pub mod registry;
pub mod transport;
pub mod types;

pub use config::DispatchConfig;
pub use error::{DispatchError, DispatchResult};
pub use registry::{DispatcherRegistry, EventDispatcher};
pub use transport::{CaptureTransport, HitTransport, NoOpTransport, TrackerFactory};
pub use types::{EventKind, EventPayload, EventType, HitParameters, SdkPayload};
