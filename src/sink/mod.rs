//! Log sinks.
//!
//! # Data Flow
//! ```text
//! Logger (gate passed, prefix applied)
//!     → LogSink::{fatal, error, warn, info}     (values as separate tokens)
//!     → LogSink::{fatalf, errorf, warnf, infof} (prefixed template + values)
//!
//! Implementations:
//!     → tracing.rs (production backend, emits tracing events)
//!     → capture.rs (in-memory recorder)
//! ```
//!
//! # Design Decisions
//! - Sinks decide nothing about verbosity; filtering happens in the logger
//! - Verbose and Debug have no dedicated backend call and go through `info`
//! - Write failures stay inside the sink and never reach the caller
//! - `fatal`/`fatalf` are expected to terminate the process after logging

use std::fmt::Display;

pub mod capture;
pub mod template;
pub mod tracing;

pub use capture::{Call, CaptureSink, Record};
pub use self::tracing::TracingSink;

/// Backend capabilities a logger forwards to.
pub trait LogSink: Send + Sync {
    fn fatal(&self, values: &[&dyn Display]);
    fn fatalf(&self, template: &str, values: &[&dyn Display]);

    fn error(&self, values: &[&dyn Display]);
    fn errorf(&self, template: &str, values: &[&dyn Display]);

    fn warn(&self, values: &[&dyn Display]);
    fn warnf(&self, template: &str, values: &[&dyn Display]);

    fn info(&self, values: &[&dyn Display]);
    fn infof(&self, template: &str, values: &[&dyn Display]);
}
