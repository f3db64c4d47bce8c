//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ModlogConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::level::Level;
use crate::logger::{default_prefix, LoggerConfig};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ModlogConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<ModlogConfig, ConfigError> {
    let config: ModlogConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

impl ModlogConfig {
    /// Resolve `[loggers.*]` tables into logger configurations.
    ///
    /// Entries with an unknown level are skipped; a validated config has none.
    pub fn logger_configs(&self) -> Vec<(String, LoggerConfig)> {
        self.loggers
            .iter()
            .filter_map(|(name, entry)| {
                let threshold = Level::from_name(&entry.level)?;
                let prefix = entry.prefix.clone().unwrap_or_else(|| default_prefix(name));
                Some((name.clone(), LoggerConfig::new(prefix, threshold)))
            })
            .collect()
    }
}
