//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the process-wide tracing subscriber
//! - Pick the filter from `RUST_LOG`, falling back to config
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Installation errors are returned, never panicked on

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::SubscriberConfig;

/// Failure to install the tracing subscriber.
#[derive(Debug, Error)]
pub enum SubscriberError {
    #[error("invalid filter directive: {0}")]
    Filter(#[from] ParseError),

    #[error("subscriber already installed: {0}")]
    Init(#[from] TryInitError),
}

/// Build the filter: `RUST_LOG` if set and valid, else `config.filter`.
pub fn build_filter(config: &SubscriberConfig) -> Result<EnvFilter, SubscriberError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(&config.filter)?),
    }
}

/// Install the global tracing subscriber.
pub fn init_subscriber(config: &SubscriberConfig) -> Result<(), SubscriberError> {
    let filter = build_filter(config)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(config.ansi))
        .try_init()?;

    tracing::debug!(filter = %config.filter, "Tracing subscriber installed");
    Ok(())
}
