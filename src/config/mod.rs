//! Configuration management subsystem.
//!
//! Loading configuration is a collaborator of the registry, not part of it:
//! it turns a file into `LoggerConfig` values and hands them to
//! `Registry::configure`.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ModlogConfig::logger_configs() → (name, LoggerConfig) pairs
//!     → Registry::apply
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → new config sent over channel
//!     → Registry::apply (each listed logger replaced wholesale)
//! ```
//!
//! # Design Decisions
//! - Unknown level names reject the whole file
//! - Loggers absent from a reloaded file keep their current configuration
//! - All fields have defaults to allow minimal configs

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{LoggerEntry, ModlogConfig, SubscriberConfig};
pub use validation::ValidationError;
pub use watcher::ConfigWatcher;
