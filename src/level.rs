//! Verbosity levels.
//!
//! # Ordering
//! ```text
//! Disabled(-1) < Error(1) < Warn(2) < Verbose(3) < Info(4) < Debug(5)
//! ```
//!
//! # Design Decisions
//! - Numeric values are stable; new levels slot in without renumbering
//! - Name lookup is case-insensitive and never guesses on unknown input
//! - `Disabled` is a threshold value only, no call is ever made at it

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Verbosity level of a logger threshold or a log call.
#[repr(i8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Threshold that suppresses every gated call.
    Disabled = -1,
    Error = 1,
    Warn = 2,
    Verbose = 3,
    Info = 4,
    Debug = 5,
}

/// Returned when a name or numeric value does not map to a level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level: {0}")]
pub struct UnknownLevel(pub String);

impl Level {
    /// All levels, least to most verbose.
    pub const ALL: [Level; 6] = [
        Level::Disabled,
        Level::Error,
        Level::Warn,
        Level::Verbose,
        Level::Info,
        Level::Debug,
    ];

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Level> {
        let level = match name.to_ascii_uppercase().as_str() {
            "NOLOG" | "DISABLED" => Level::Disabled,
            "ERROR" => Level::Error,
            "WARN" => Level::Warn,
            "VERBOSE" => Level::Verbose,
            "INFO" => Level::Info,
            "DEBUG" => Level::Debug,
            _ => return None,
        };
        Some(level)
    }

    /// Lookup returning `(level, found)`.
    ///
    /// An unrecognized name yields `(Level::Disabled, false)`. The returned
    /// level is a valid value either way, so callers must check `found`.
    pub fn lookup(name: &str) -> (Level, bool) {
        match Self::from_name(name) {
            Some(level) => (level, true),
            None => (Level::Disabled, false),
        }
    }

    /// Canonical upper-case name.
    pub fn name(self) -> &'static str {
        match self {
            Level::Disabled => "NOLOG",
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Verbose => "VERBOSE",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
        }
    }

    /// Stable numeric value.
    pub fn as_i8(self) -> i8 {
        self as i8
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownLevel(s.to_string()))
    }
}

impl TryFrom<i8> for Level {
    type Error = UnknownLevel;

    fn try_from(value: i8) -> Result<Self, UnknownLevel> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_i8() == value)
            .ok_or_else(|| UnknownLevel(value.to_string()))
    }
}

impl From<Level> for i8 {
    fn from(level: Level) -> Self {
        level.as_i8()
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
