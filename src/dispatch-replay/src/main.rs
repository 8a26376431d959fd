//! Batch dispatch replay — feeds recorded SDK lifecycle events through the
//! Google Analytics dispatcher and prints the resulting hits.
//!
//! Input is newline-delimited JSON, one event per line:
//! `{"type": "notification_open", "payload": {"deeplink": "https://..."}}`.

mod stdout;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use batch_dispatch_core::{DispatchConfig, DispatcherRegistry, EventType, SdkPayload};
use batch_ga_dispatcher::GaDispatcher;
use clap::Parser;
use serde::Deserialize;
use tracing::{info, warn};

use crate::stdout::StdoutTrackerFactory;

#[derive(Parser, Debug)]
#[command(name = "batch-dispatch-replay")]
#[command(about = "Replay SDK lifecycle events through the Google Analytics dispatcher")]
#[command(version)]
struct Cli {
    /// Events file (newline-delimited JSON). Reads stdin when omitted or "-".
    input: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Analytics tracking id (overrides config)
    #[arg(long, env = "BATCH_DISPATCH__TRACKING_ID")]
    tracking_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReplayEvent {
    #[serde(rename = "type")]
    event_type: EventType,
    #[serde(default)]
    payload: SdkPayload,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loaded = DispatchConfig::load(cli.config.as_deref());
    let mut config = loaded.as_ref().cloned().unwrap_or_default();

    // Hits go to stdout, logs to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    if let Err(e) = loaded {
        warn!(error = %e, "Failed to load config, using defaults");
    }
    if let Some(tracking_id) = cli.tracking_id {
        config.tracking_id = Some(tracking_id);
    }

    let dispatcher = GaDispatcher::new(Arc::new(StdoutTrackerFactory));
    match config.tracking_id() {
        Some(tracking_id) => dispatcher.set_tracking_id(tracking_id),
        None => warn!("No tracking id configured, events will be dropped"),
    }

    let registry = DispatcherRegistry::new();
    registry.register(Arc::new(dispatcher));

    let reader: Box<dyn BufRead> = match cli.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        )),
        _ => Box::new(BufReader::new(std::io::stdin())),
    };

    let mut dispatched = 0usize;
    let mut skipped = 0usize;
    for (index, line) in reader.lines().enumerate() {
        let line = line.context("reading events")?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<ReplayEvent>(&line) {
            Ok(event) => {
                registry.dispatch(event.event_type, &event.payload);
                dispatched += 1;
            }
            Err(e) => {
                warn!(line = index + 1, error = %e, "Skipping unparsable event");
                skipped += 1;
            }
        }
    }

    info!(dispatched, skipped, "Replay finished");
    Ok(())
}
