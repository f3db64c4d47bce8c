//! Production sink backed by `tracing`.
//!
//! Every event is emitted from this module, so its target is always
//! `modlog::sink::tracing` and an `EnvFilter` directive cannot select one
//! logger over another. Per-logger verbosity belongs to the logger threshold;
//! the subscriber filter only decides whether modlog output is shown at all.
//! Loggers sharing this sink are told apart by their prefix, which is the
//! first value (or the start of the template) of every forwarded call.
//!
//! Values in non-template calls are concatenated with no separator, see
//! [`concat`].

use std::fmt::Display;

use crate::sink::template::{concat, render};
use crate::sink::LogSink;

/// Exit status used after a fatal message, matching glog.
pub const DEFAULT_FATAL_EXIT_CODE: i32 = 255;

/// Emits every forwarded call as a `tracing` event.
///
/// Fatal calls are logged at ERROR level with `fatal = true` and then
/// terminate the process.
#[derive(Debug, Clone)]
pub struct TracingSink {
    exit_code: i32,
}

impl TracingSink {
    pub fn new() -> Self {
        Self {
            exit_code: DEFAULT_FATAL_EXIT_CODE,
        }
    }

    /// Override the exit status used by `fatal`/`fatalf`.
    pub fn with_exit_code(mut self, exit_code: i32) -> Self {
        self.exit_code = exit_code;
        self
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    fn terminate(&self) -> ! {
        std::process::exit(self.exit_code)
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for TracingSink {
    fn fatal(&self, values: &[&dyn Display]) {
        tracing::error!(fatal = true, "{}", concat(values));
        self.terminate()
    }

    fn fatalf(&self, template: &str, values: &[&dyn Display]) {
        tracing::error!(fatal = true, "{}", render(template, values));
        self.terminate()
    }

    fn error(&self, values: &[&dyn Display]) {
        tracing::error!("{}", concat(values));
    }

    fn errorf(&self, template: &str, values: &[&dyn Display]) {
        tracing::error!("{}", render(template, values));
    }

    fn warn(&self, values: &[&dyn Display]) {
        tracing::warn!("{}", concat(values));
    }

    fn warnf(&self, template: &str, values: &[&dyn Display]) {
        tracing::warn!("{}", render(template, values));
    }

    fn info(&self, values: &[&dyn Display]) {
        tracing::info!("{}", concat(values));
    }

    fn infof(&self, template: &str, values: &[&dyn Display]) {
        tracing::info!("{}", render(template, values));
    }
}
