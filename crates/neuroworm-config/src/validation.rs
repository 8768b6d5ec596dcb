// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation

use crate::{ConfigError, ConfigResult, NeurowormConfig};

const KNOWN_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a loaded configuration.
///
/// Checks ranges rather than semantics: a threshold of 0 is legal (every
/// connection becomes live), zero propagation steps is not (the simulation
/// would never leave its seeds and every lesson would break).
pub fn validate_config(config: &NeurowormConfig) -> ConfigResult<()> {
    if config.engine.propagation_steps == 0 {
        return Err(ConfigError::ValidationError(
            "engine.propagation_steps must be at least 1".to_string(),
        ));
    }
    if !config.engine.activation_threshold.is_finite() || config.engine.activation_threshold < 0.0 {
        return Err(ConfigError::InvalidValue(format!(
            "engine.activation_threshold must be a non-negative number, got {}",
            config.engine.activation_threshold
        )));
    }
    if config.layout.canvas_width <= 0.0 || config.layout.canvas_height <= 0.0 {
        return Err(ConfigError::InvalidValue(format!(
            "layout canvas must be positive, got {}x{}",
            config.layout.canvas_width, config.layout.canvas_height
        )));
    }
    if config.layout.merge_offset < 0.0 || config.layout.move_threshold < 0.0 {
        return Err(ConfigError::InvalidValue(
            "layout.merge_offset and layout.move_threshold must be non-negative".to_string(),
        ));
    }
    if !KNOWN_LOG_LEVELS.contains(&config.system.log_level.to_ascii_lowercase().as_str()) {
        return Err(ConfigError::InvalidValue(format!(
            "system.log_level must be one of {:?}, got {:?}",
            KNOWN_LOG_LEVELS, config.system.log_level
        )));
    }
    Ok(())
}
