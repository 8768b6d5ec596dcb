// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! This module defines the configuration structs that map to sections in
//! `neuroworm_configuration.toml`. Every default equals the engine's
//! built-in constant, so an empty file and no file behave identically.

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct NeurowormConfig {
    pub system: SystemConfig,
    pub engine: EngineConfig,
    pub layout: LayoutConfig,
}

/// System-level configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SystemConfig {
    pub debug: bool,
    pub log_level: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            debug: false,
            log_level: "info".to_string(),
        }
    }
}

/// Activation engine tunables
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Discrete propagation steps after seeding.
    pub propagation_steps: u32,
    /// Minimum weight magnitude for a connection to carry a signal.
    pub activation_threshold: f32,
    /// Treat electrical (gap-junction) records as propagating both ways.
    pub symmetric_gap_junctions: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            propagation_steps: 3,
            activation_threshold: 5.0,
            symmetric_gap_junctions: false,
        }
    }
}

/// Layout constants used by merge offsetting and moved-neuron detection
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub merge_offset: f32,
    pub move_threshold: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_width: 960.0,
            canvas_height: 600.0,
            merge_offset: 5.0,
            move_threshold: 5.0,
        }
    }
}
