// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! Two-tier loading:
//! 1. TOML file (base values; every field optional)
//! 2. Environment variables (runtime overrides)

use crate::{ConfigError, ConfigResult, NeurowormConfig};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "neuroworm_configuration.toml";

/// Find the NEUROWORM configuration file
///
/// Search order:
/// 1. `NEUROWORM_CONFIG_PATH` environment variable
/// 2. Current working directory
/// 3. Ancestor directories (up to 5 levels, for workspace roots)
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if no config file exists in any
/// searched location.
pub fn find_config_file() -> ConfigResult<PathBuf> {
    if let Ok(env_path) = env::var("NEUROWORM_CONFIG_PATH") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        }
        return Err(ConfigError::FileNotFound(format!(
            "Config file specified by NEUROWORM_CONFIG_PATH not found: {}",
            path.display()
        )));
    }

    let mut search_paths = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));
        let mut current = cwd;
        for _ in 0..5 {
            match current.parent() {
                Some(parent) => {
                    search_paths.push(parent.join(CONFIG_FILE_NAME));
                    current = parent.to_path_buf();
                }
                None => break,
            }
        }
    }

    for path in &search_paths {
        if path.exists() {
            return Ok(path.clone());
        }
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");
    Err(ConfigError::FileNotFound(format!(
        "'{}' not found in any of these locations:\n{}\n\nSet NEUROWORM_CONFIG_PATH to specify a custom location.",
        CONFIG_FILE_NAME, search_list
    )))
}

/// Load configuration from a TOML file, then apply environment overrides
/// and validate.
///
/// # Arguments
///
/// * `config_path` - Optional explicit path. If `None`, the file is searched
///   for as documented on [`find_config_file`].
///
/// # Errors
///
/// Returns an error if the file is missing, contains invalid TOML, or fails
/// validation.
pub fn load_config(config_path: Option<&Path>) -> ConfigResult<NeurowormConfig> {
    let config_file = match config_path {
        Some(path) => path.to_path_buf(),
        None => find_config_file()?,
    };

    let content = fs::read_to_string(&config_file)?;
    let mut config: NeurowormConfig = toml::from_str(&content)?;

    apply_environment_overrides(&mut config);
    crate::validate_config(&config)?;

    Ok(config)
}

/// Like [`load_config`] with no explicit path, but any failure (missing
/// file, bad TOML, failed validation) falls back to defaults, with
/// environment overrides still applied. Callers that want failures surfaced
/// use [`load_config`] directly.
pub fn load_or_default() -> NeurowormConfig {
    match load_config(None) {
        Ok(config) => config,
        Err(_) => {
            let mut config = NeurowormConfig::default();
            apply_environment_overrides(&mut config);
            config
        }
    }
}

/// Apply environment variable overrides to configuration
///
/// Supported environment variables:
/// - `NEUROWORM_DEBUG` -> `system.debug`
/// - `NEUROWORM_LOG_LEVEL` -> `system.log_level`
/// - `NEUROWORM_PROPAGATION_STEPS` -> `engine.propagation_steps`
/// - `NEUROWORM_ACTIVATION_THRESHOLD` -> `engine.activation_threshold`
/// - `NEUROWORM_SYMMETRIC_GAP_JUNCTIONS` -> `engine.symmetric_gap_junctions`
///
/// Unparseable values are ignored rather than fatal.
pub fn apply_environment_overrides(config: &mut NeurowormConfig) {
    if let Some(debug) = env_bool("NEUROWORM_DEBUG") {
        config.system.debug = debug;
    }
    if let Ok(level) = env::var("NEUROWORM_LOG_LEVEL") {
        config.system.log_level = level;
    }
    if let Ok(steps) = env::var("NEUROWORM_PROPAGATION_STEPS") {
        if let Ok(steps) = steps.parse() {
            config.engine.propagation_steps = steps;
        }
    }
    if let Ok(threshold) = env::var("NEUROWORM_ACTIVATION_THRESHOLD") {
        if let Ok(threshold) = threshold.parse() {
            config.engine.activation_threshold = threshold;
        }
    }
    if let Some(symmetric) = env_bool("NEUROWORM_SYMMETRIC_GAP_JUNCTIONS") {
        config.engine.symmetric_gap_junctions = symmetric;
    }
}

fn env_bool(name: &str) -> Option<bool> {
    let value = env::var(name).ok()?;
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_sections_are_all_optional() {
        let config: NeurowormConfig = toml::from_str("[engine]\npropagation_steps = 5\n").unwrap();
        assert_eq!(config.engine.propagation_steps, 5);
        assert_eq!(config.engine.activation_threshold, 5.0);
        assert_eq!(config.layout.canvas_width, 960.0);
    }

    #[test]
    fn test_empty_toml_is_defaults() {
        let config: NeurowormConfig = toml::from_str("").unwrap();
        assert_eq!(config.engine.propagation_steps, 3);
        assert_eq!(config.system.log_level, "info");
    }
}
