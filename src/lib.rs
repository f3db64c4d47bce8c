//! Per-module logging facade.
//!
//! Subsystems obtain a named [`Logger`] from a [`Registry`]. Each name has
//! its own prefix and verbosity threshold; calls that pass the threshold are
//! forwarded, prefixed, to a [`LogSink`] backend.
//!
//! ```
//! use std::sync::Arc;
//! use modlog::{CaptureSink, Level, LoggerConfig, Registry};
//!
//! let sink = Arc::new(CaptureSink::new());
//! let registry = Registry::new(sink.clone());
//! registry.configure("my-module", LoggerConfig::new("[my-module]", Level::Info));
//!
//! let logger = registry.get_or_create("my-module");
//! logger.infof("Hello: %s", &[&"world"]);
//! logger.debug(&[&"not forwarded"]);
//!
//! assert_eq!(sink.len(), 1);
//! ```

pub mod config;
pub mod level;
pub mod logger;
pub mod observability;
pub mod registry;
pub mod sink;

pub use config::ModlogConfig;
pub use level::{Level, UnknownLevel};
pub use logger::{Logger, LoggerConfig};
pub use registry::Registry;
pub use sink::{CaptureSink, LogSink, TracingSink};
