//! Logger registry.
//!
//! # Responsibilities
//! - Map logger names to shared `Logger` handles
//! - Create loggers lazily with the default configuration
//! - Replace a logger's configuration on explicit setup
//!
//! # Design Decisions
//! - Owned value, passed to subsystems by reference or `Arc`; no global
//! - One mutex around the map: lookup, create and configure are serialized,
//!   so concurrent first access to a name yields exactly one logger
//! - Handles are shared, so reconfiguration reaches loggers already handed out
//! - Configuration swaps are atomic per logger; readers never see a mix of
//!   old prefix and new threshold

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::logger::{Logger, LoggerConfig};
use crate::sink::LogSink;

/// Process-wide mapping from logger name to logger.
pub struct Registry {
    sink: Arc<dyn LogSink>,
    loggers: Mutex<HashMap<String, Arc<Logger>>>,
}

impl Registry {
    /// Create an empty registry whose loggers all forward to `sink`.
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self {
            sink,
            loggers: Mutex::new(HashMap::new()),
        }
    }

    /// Return the logger for `name`, creating it with
    /// [`LoggerConfig::for_name`] if it does not exist yet.
    pub fn get_or_create(&self, name: &str) -> Arc<Logger> {
        let mut loggers = self.lock();
        if let Some(logger) = loggers.get(name) {
            return logger.clone();
        }

        let config = LoggerConfig::for_name(name);
        tracing::debug!(
            logger = name,
            prefix = %config.prefix,
            threshold = %config.threshold,
            "Logger created with defaults"
        );
        let logger = Arc::new(Logger::new(name, config, self.sink.clone()));
        loggers.insert(name.to_string(), logger.clone());
        logger
    }

    /// Install `config` for `name`, discarding whatever was there.
    pub fn configure(&self, name: &str, config: LoggerConfig) {
        let mut loggers = self.lock();
        tracing::debug!(
            logger = name,
            prefix = %config.prefix,
            threshold = %config.threshold,
            "Logger configured"
        );

        match loggers.get(name) {
            Some(logger) => logger.replace_config(config),
            None => {
                let logger = Arc::new(Logger::new(name, config, self.sink.clone()));
                loggers.insert(name.to_string(), logger);
            }
        }
    }

    /// Configure several loggers, e.g. from a loaded config file.
    pub fn apply<I, S>(&self, configs: I)
    where
        I: IntoIterator<Item = (S, LoggerConfig)>,
        S: AsRef<str>,
    {
        for (name, config) in configs {
            self.configure(name.as_ref(), config);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lock().contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.lock().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Current configuration of every registered logger.
    pub fn snapshot(&self) -> BTreeMap<String, LoggerConfig> {
        self.lock()
            .iter()
            .map(|(name, logger)| (name.clone(), (*logger.config()).clone()))
            .collect()
    }

    // The map is never left half-updated, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Arc<Logger>>> {
        self.loggers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("loggers", &self.names())
            .finish_non_exhaustive()
    }
}
