//! Diagnostic logging.
//!
//! Library code logs through the `tracing` macros. This module installs the
//! process-wide subscriber that filters those events by a [`Verbosity`]
//! threshold and writes them to the diagnostic sink.

use reclaim_core::RECLAIM_LOG_VAR;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod config;
pub mod formatter;
pub mod verbosity;


// Re-export tracing macros for convenience
pub use tracing::{debug, error, info, trace, warn, Level};

pub use config::DiagnosticsConfig;
pub use formatter::{severity_label, DiagnosticsFormat};
pub use verbosity::Verbosity;

/// Initialize the diagnostic subscriber
///
/// `RECLAIM_LOG`, when set, is parsed as an `EnvFilter` and takes precedence
/// over the configured verbosity. Fails if a global subscriber is already set.
pub fn init(
    config: &DiagnosticsConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = EnvFilter::try_from_env(RECLAIM_LOG_VAR)
        .or_else(|_| EnvFilter::try_new(config.verbosity.directive()))?;

    let fmt_layer = fmt::layer()
        .event_format(DiagnosticsFormat::new())
        .with_writer(std::io::stderr)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Build a subscriber writing to `writer` without installing it
///
/// Only the configured verbosity applies; the environment is not consulted.
pub fn subscriber<W>(config: &DiagnosticsConfig, writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let fmt_layer = fmt::layer()
        .event_format(DiagnosticsFormat::new())
        .with_writer(writer)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(config.verbosity.level_filter())
        .with(fmt_layer)
}
