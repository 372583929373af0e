//! Tracing subscriber setup for leadflow binaries.
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to binaries and happens here.

use std::io;
use thiserror::Error;
use tracing_subscriber::{
    EnvFilter, filter::ParseError, layer::SubscriberExt, util::SubscriberInitExt,
    util::TryInitError,
};

/// Filter used when neither `RUST_LOG` nor settings provide one.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Errors returned while installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured filter directive is malformed.
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),
    /// A global subscriber is already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Builds the filter: `RUST_LOG` when set, else `configured`, else
/// [`DEFAULT_LOG_FILTER`].
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] when the fallback directive is invalid.
pub fn env_filter(configured: Option<&str>) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    Ok(EnvFilter::try_new(configured.unwrap_or(DEFAULT_LOG_FILTER))?)
}

/// Installs a human-readable subscriber writing to stderr.
///
/// # Errors
///
/// Returns [`TelemetryError`] when the filter is invalid or a subscriber is
/// already installed.
pub fn init_tracing(configured: Option<&str>) -> Result<(), TelemetryError> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(env_filter(configured)?)
        .try_init()?;
    tracing::debug!("tracing initialised");
    Ok(())
}
