//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! modlog's own diagnostics (registry events, config reloads)
//!     → tracing macros with structured fields
//!
//! TracingSink output (forwarded logger calls)
//!     → tracing events at ERROR / WARN / INFO
//!
//! Both
//!     → logging.rs subscriber (EnvFilter + fmt layer) → stdout
//! ```

pub mod logging;

pub use logging::{init_subscriber, SubscriberError};
