//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files.
//! Level names are kept as strings here and checked by validation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Root configuration file.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ModlogConfig {
    /// Settings for the process-wide tracing subscriber.
    pub subscriber: SubscriberConfig,

    /// Per-logger settings keyed by logger name.
    pub loggers: BTreeMap<String, LoggerEntry>,
}

/// Tracing subscriber settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SubscriberConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,

    /// Emit ANSI colors.
    pub ansi: bool,
}

impl Default for SubscriberConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            ansi: true,
        }
    }
}

/// One `[loggers.<name>]` table.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LoggerEntry {
    /// Threshold name, e.g. "info" or "nolog".
    #[serde(default = "default_level")]
    pub level: String,

    /// Message prefix. Defaults to `"[<name>] "`.
    #[serde(default)]
    pub prefix: Option<String>,
}

fn default_level() -> String {
    "debug".to_string()
}
