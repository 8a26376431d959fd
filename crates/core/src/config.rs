use std::path::Path;

use serde::Deserialize;

use crate::error::DispatchResult;

/// Dispatcher configuration. Loaded from an optional TOML file, then from
/// environment variables with the prefix `BATCH_DISPATCH__`.
#[derive(Debug, Clone, Deserialize)]
pub struct DispatchConfig {
    /// Analytics property the hits are sent to. Unset means unconfigured:
    /// every event is dropped until a tracking id is bound.
    #[serde(default)]
    pub tracking_id: Option<String>,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "batch_ga_dispatcher=info,batch_dispatch_replay=info".to_string()
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            tracking_id: None,
            log_filter: default_log_filter(),
        }
    }
}

impl DispatchConfig {
    /// Load configuration, layering environment variables over `file` when given.
    pub fn load(file: Option<&Path>) -> DispatchResult<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(false));
        }
        let builder = builder.add_source(
            config::Environment::with_prefix("BATCH_DISPATCH")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Tracking id with surrounding whitespace removed; blank counts as unset.
    pub fn tracking_id(&self) -> Option<&str> {
        self.tracking_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}
