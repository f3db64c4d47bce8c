//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject unknown level names instead of silently disabling a logger
//! - Check the subscriber filter is present
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ModlogConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is applied to a registry

use thiserror::Error;

use crate::config::schema::ModlogConfig;
use crate::level::Level;

/// A single semantic problem in a config file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("logger name must not be empty")]
    EmptyLoggerName,

    #[error("logger '{logger}' has unknown level '{level}'")]
    UnknownLevel { logger: String, level: String },

    #[error("subscriber filter must not be empty")]
    EmptyFilter,
}

/// Validate a parsed configuration.
pub fn validate_config(config: &ModlogConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.subscriber.filter.trim().is_empty() {
        errors.push(ValidationError::EmptyFilter);
    }

    for (name, entry) in &config.loggers {
        if name.is_empty() {
            errors.push(ValidationError::EmptyLoggerName);
        }
        if Level::from_name(&entry.level).is_none() {
            errors.push(ValidationError::UnknownLevel {
                logger: name.clone(),
                level: entry.level.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
