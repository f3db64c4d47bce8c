//! Filtering logger.
//!
//! # Responsibilities
//! - Hold one name's prefix and threshold
//! - Gate each leveled call against the threshold
//! - Apply the prefix and forward to the sink
//!
//! # Gate
//! ```text
//! forward if threshold >= call level
//! fatal is never gated
//! ```
//!
//! # Prefix application
//! - Value calls: prefix becomes the first value, `(prefix, v1, v2, ..)`
//! - Template calls: prefix is concatenated onto the template, `(prefix + template, v1, ..)`

use std::fmt::{self, Display};
use std::sync::Arc;

use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};

use crate::level::Level;
use crate::sink::LogSink;

/// Prefix and threshold for one logger. Replaced wholesale, never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    pub prefix: String,
    pub threshold: Level,
}

impl LoggerConfig {
    pub fn new(prefix: impl Into<String>, threshold: Level) -> Self {
        Self {
            prefix: prefix.into(),
            threshold,
        }
    }

    /// Default configuration for a logger created on first lookup:
    /// prefix `"[name] "`, most verbose threshold.
    pub fn for_name(name: &str) -> Self {
        Self::new(default_prefix(name), Level::Debug)
    }
}

/// The prefix a logger gets when none is configured.
pub fn default_prefix(name: &str) -> String {
    format!("[{}] ", name)
}

/// A named logger with a swappable configuration.
///
/// Handles are shared via `Arc`, so a reconfiguration through the registry is
/// seen by every holder immediately.
pub struct Logger {
    name: String,
    config: ArcSwap<LoggerConfig>,
    sink: Arc<dyn LogSink>,
}

impl Logger {
    pub fn new(name: impl Into<String>, config: LoggerConfig, sink: Arc<dyn LogSink>) -> Self {
        Self {
            name: name.into(),
            config: ArcSwap::from_pointee(config),
            sink,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Snapshot of the current configuration.
    pub fn config(&self) -> Arc<LoggerConfig> {
        self.config.load_full()
    }

    /// Replace the configuration in one step.
    pub(crate) fn replace_config(&self, config: LoggerConfig) {
        self.config.store(Arc::new(config));
    }

    /// Whether a call at `level` would be forwarded.
    pub fn enabled(&self, level: Level) -> bool {
        passes(self.config.load().threshold, level)
    }

    pub fn fatal(&self, values: &[&dyn Display]) {
        let config = self.config.load_full();
        let prefixed = with_prefix(&config, values);
        self.sink.fatal(&prefixed);
    }

    pub fn fatalf(&self, template: &str, values: &[&dyn Display]) {
        let config = self.config.load_full();
        let template = format!("{}{}", config.prefix, template);
        self.sink.fatalf(&template, values);
    }

    pub fn error(&self, values: &[&dyn Display]) {
        self.log(Level::Error, values);
    }

    pub fn errorf(&self, template: &str, values: &[&dyn Display]) {
        self.logf(Level::Error, template, values);
    }

    pub fn warn(&self, values: &[&dyn Display]) {
        self.log(Level::Warn, values);
    }

    pub fn warnf(&self, template: &str, values: &[&dyn Display]) {
        self.logf(Level::Warn, template, values);
    }

    pub fn verbose(&self, values: &[&dyn Display]) {
        self.log(Level::Verbose, values);
    }

    pub fn verbosef(&self, template: &str, values: &[&dyn Display]) {
        self.logf(Level::Verbose, template, values);
    }

    pub fn info(&self, values: &[&dyn Display]) {
        self.log(Level::Info, values);
    }

    pub fn infof(&self, template: &str, values: &[&dyn Display]) {
        self.logf(Level::Info, template, values);
    }

    pub fn debug(&self, values: &[&dyn Display]) {
        self.log(Level::Debug, values);
    }

    pub fn debugf(&self, template: &str, values: &[&dyn Display]) {
        self.logf(Level::Debug, template, values);
    }

    fn log(&self, level: Level, values: &[&dyn Display]) {
        // One owned snapshot per call: prefix and threshold always match, and
        // no arc-swap guard is held while the sink runs.
        let config = self.config.load_full();
        if !passes(config.threshold, level) {
            return;
        }

        let prefixed = with_prefix(&config, values);
        match level {
            Level::Error => self.sink.error(&prefixed),
            Level::Warn => self.sink.warn(&prefixed),
            _ => self.sink.info(&prefixed),
        }
    }

    fn logf(&self, level: Level, template: &str, values: &[&dyn Display]) {
        let config = self.config.load_full();
        if !passes(config.threshold, level) {
            return;
        }

        let template = format!("{}{}", config.prefix, template);
        match level {
            Level::Error => self.sink.errorf(&template, values),
            Level::Warn => self.sink.warnf(&template, values),
            _ => self.sink.infof(&template, values),
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("config", &*self.config.load())
            .finish_non_exhaustive()
    }
}

fn passes(threshold: Level, level: Level) -> bool {
    threshold >= level
}

fn with_prefix<'a>(config: &'a LoggerConfig, values: &[&'a dyn Display]) -> Vec<&'a dyn Display> {
    let mut prefixed: Vec<&dyn Display> = Vec::with_capacity(values.len() + 1);
    prefixed.push(&config.prefix);
    prefixed.extend_from_slice(values);
    prefixed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{Call, CaptureSink};

    const GATED: [Level; 5] = [Level::Error, Level::Warn, Level::Verbose, Level::Info, Level::Debug];

    fn logger_with_capture(config: LoggerConfig) -> (Logger, Arc<CaptureSink>) {
        let sink = Arc::new(CaptureSink::new());
        let logger = Logger::new("test", config, sink.clone());
        (logger, sink)
    }

    fn call(logger: &Logger, level: Level) {
        match level {
            Level::Error => logger.error(&[&"m"]),
            Level::Warn => logger.warn(&[&"m"]),
            Level::Verbose => logger.verbose(&[&"m"]),
            Level::Info => logger.info(&[&"m"]),
            Level::Debug => logger.debug(&[&"m"]),
            Level::Disabled => unreachable!(),
        }
    }

    fn callf(logger: &Logger, level: Level) {
        match level {
            Level::Error => logger.errorf("%s", &[&"m"]),
            Level::Warn => logger.warnf("%s", &[&"m"]),
            Level::Verbose => logger.verbosef("%s", &[&"m"]),
            Level::Info => logger.infof("%s", &[&"m"]),
            Level::Debug => logger.debugf("%s", &[&"m"]),
            Level::Disabled => unreachable!(),
        }
    }

    #[test]
    fn test_gate_boundaries() {
        for threshold in Level::ALL {
            for level in GATED {
                let (logger, sink) = logger_with_capture(LoggerConfig::new("[T]", threshold));
                call(&logger, level);
                callf(&logger, level);

                let expected = if level <= threshold { 2 } else { 0 };
                assert_eq!(
                    sink.len(),
                    expected,
                    "threshold {} call {}",
                    threshold,
                    level
                );
                assert_eq!(logger.enabled(level), level <= threshold);
            }
        }
    }

    #[test]
    fn test_fatal_is_never_gated() {
        for threshold in Level::ALL {
            let (logger, sink) = logger_with_capture(LoggerConfig::new("[T]", threshold));
            logger.fatal(&[&"bye"]);
            logger.fatalf("bye %s", &[&"now"]);

            let records = sink.records();
            assert_eq!(records.len(), 2);
            assert_eq!(records[0].call, Call::Fatal);
            assert_eq!(records[0].values, vec!["[T]", "bye"]);
            assert_eq!(records[1].call, Call::Fatalf);
            assert_eq!(records[1].template.as_deref(), Some("[T]bye %s"));
            assert_eq!(records[1].values, vec!["now"]);
        }
    }

    #[test]
    fn test_disabled_suppresses_everything_but_fatal() {
        let (logger, sink) = logger_with_capture(LoggerConfig::new("[T]", Level::Disabled));
        for level in GATED {
            call(&logger, level);
            callf(&logger, level);
        }
        assert!(sink.is_empty());

        logger.fatal(&[&"x"]);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_prefix_is_first_value() {
        let (logger, sink) = logger_with_capture(LoggerConfig::new("[P]", Level::Debug));
        logger.error(&[&"a", &1]);

        let record = sink.last().unwrap();
        assert_eq!(record.call, Call::Error);
        assert_eq!(record.template, None);
        assert_eq!(record.values, vec!["[P]", "a", "1"]);
    }

    #[test]
    fn test_prefix_joins_template() {
        let (logger, sink) = logger_with_capture(LoggerConfig::new("[P]", Level::Debug));
        logger.errorf("%s", &[&"a"]);

        let record = sink.last().unwrap();
        assert_eq!(record.call, Call::Errorf);
        assert_eq!(record.template.as_deref(), Some("[P]%s"));
        assert_eq!(record.values, vec!["a"]);
    }

    #[test]
    fn test_backend_routing() {
        let (logger, sink) = logger_with_capture(LoggerConfig::new("", Level::Debug));
        for level in GATED {
            call(&logger, level);
            callf(&logger, level);
        }

        let calls: Vec<Call> = sink.records().iter().map(|r| r.call).collect();
        assert_eq!(
            calls,
            vec![
                Call::Error,
                Call::Errorf,
                Call::Warn,
                Call::Warnf,
                Call::Info,
                Call::Infof,
                Call::Info,
                Call::Infof,
                Call::Info,
                Call::Infof,
            ]
        );
    }

    #[test]
    fn test_no_values_still_forwards_prefix() {
        let (logger, sink) = logger_with_capture(LoggerConfig::new("[P]", Level::Info));
        logger.info(&[]);
        assert_eq!(sink.last().unwrap().values, vec!["[P]"]);
    }

    #[test]
    fn test_default_config_for_name() {
        let config = LoggerConfig::for_name("svc");
        assert_eq!(config.prefix, "[svc] ");
        assert_eq!(config.threshold, Level::Debug);
    }

    #[test]
    fn test_replace_config_is_wholesale() {
        let (logger, sink) = logger_with_capture(LoggerConfig::for_name("svc"));
        logger.replace_config(LoggerConfig::new("[X]", Level::Error));

        assert_eq!(*logger.config(), LoggerConfig::new("[X]", Level::Error));
        logger.warn(&[&"dropped"]);
        logger.error(&[&"kept"]);
        assert_eq!(sink.records().len(), 1);
        assert_eq!(sink.last().unwrap().values, vec!["[X]", "kept"]);
    }
}
