//! Logging setup.
//!
//! The Reborn crates log through the `log` facade. [`init`] installs a
//! `tracing` fmt subscriber and forwards `log` records into it.

use std::sync::OnceLock;

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, filter::ParseError};

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Errors raised while installing the logger.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),
    /// Another `log` logger is already installed.
    #[error("failed to install log bridge: {0}")]
    LogBridge(#[from] log::SetLoggerError),
    /// Another global `tracing` subscriber is already installed.
    #[error("failed to install subscriber: {0}")]
    Subscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Builds the filter used by [`init`]. `RUST_LOG` wins over `default_filter`.
pub fn build_filter(default_filter: &str) -> Result<EnvFilter, ParseError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_filter),
    }
}

/// Installs the global logger. Calling it again after a successful install is a no-op.
pub fn init(default_filter: &str) -> Result<(), LoggerError> {
    if INITIALIZED.get().is_some() {
        return Ok(());
    }

    let filter = build_filter(default_filter)?;
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .finish();

    LogTracer::init()?;
    tracing::subscriber::set_global_default(subscriber)?;
    let _ = INITIALIZED.set(());

    log::debug!("Logger initialized");
    Ok(())
}
