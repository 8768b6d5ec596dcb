// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # NEUROWORM Configuration System
//!
//! Type-safe configuration loader with support for:
//! - TOML file parsing (`neuroworm_configuration.toml`)
//! - Environment variable overrides (`NEUROWORM_*`)
//!
//! Defaults reproduce the engine's built-in constants, so a missing config
//! file is never an error for callers that use [`load_or_default`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use neuroworm_config::load_or_default;
//!
//! let config = load_or_default();
//! println!("propagation steps: {}", config.engine.propagation_steps);
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod loader;
pub mod types;
pub mod validation;

pub use loader::{apply_environment_overrides, find_config_file, load_config, load_or_default};
pub use types::*;
pub use validation::validate_config;

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found. Searched: {0}")]
    FileNotFound(String),

    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax: {0}")]
    ParseError(String),

    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
