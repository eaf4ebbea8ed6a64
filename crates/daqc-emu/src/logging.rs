//! Subscriber setup for `tracing` output.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use crate::config::LoggingConfig;
use crate::error::{EmuError, EmuResult};

/// Install a global subscriber for `config`.
///
/// An unparsable level falls back to `RUST_LOG`, then to `info`. Fails if a
/// global subscriber is already installed.
pub fn init(config: &LoggingConfig) -> EmuResult<()> {
    let filter = EnvFilter::try_new(&config.level)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let layer = if config.json {
        fmt::layer().with_target(true).json().boxed()
    } else {
        fmt::layer().with_target(true).compact().boxed()
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| EmuError::Config(format!("tracing subscriber: {e}")))
}
