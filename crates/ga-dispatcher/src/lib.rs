//! Google Analytics event dispatcher for engagement SDK lifecycle events.
//!
//! Translates notification and in-app message events into campaign-attributed
//! event hits (source, medium, name, content) and forwards them to a tracker.
//!
//! # Modules
//!
//! - [`deeplink`] — Query and fragment extraction from deep links
//! - [`attribution`] — Source precedence and per-kind defaults
//! - [`classifier`] — Action name and category per event type
//! - [`hit`] — Hit parameter assembly and key vocabulary
//! - [`dispatcher`] — Orchestration and tracker binding

pub mod attribution;
pub mod classifier;
pub mod deeplink;
pub mod dispatcher;
pub mod hit;

pub use attribution::AttributionFields;
pub use classifier::{classify, Category, Classification};
pub use deeplink::ParsedDeeplink;
pub use dispatcher::GaDispatcher;
