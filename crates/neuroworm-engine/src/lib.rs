// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # NEUROWORM Circuit Engine
//!
//! ALL circuit computation in one place:
//! - **Activation**: stimulus seeding + discrete signal propagation
//! - **Classification**: motor-neuron readout into a worm behavior
//! - **Missions**: pass/fail validation of built circuits
//! - **Diff/Merge**: structural comparison and union of two circuits
//! - **Race**: the complexity-to-speed heuristic for race animations
//!
//! Everything here is synchronous pure computation with no error path.
//! Malformed input (empty circuits, dangling connection endpoints, missing
//! stimulus) degrades to the neutral outcome instead of failing, because a
//! student-built circuit must never crash the app.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod activation;
pub mod classify;
pub mod diff;
pub mod merge;
pub mod missions;
pub mod race;

pub use activation::{
    stimulus_triggers, ActivationEngine, EngineSettings, SimulationOutcome,
    DEFAULT_ACTIVATION_THRESHOLD, DEFAULT_PROPAGATION_STEPS,
};
pub use classify::classify_behavior;
pub use diff::{
    diff_circuits, diff_circuits_with_layout, CircuitDiff, ConnectionChange, MovedNeuron,
    MOVE_THRESHOLD,
};
pub use merge::{
    merge_circuits, MergeConflict, MergeOutcome, MergedConnection, MergedNeuron, Origin,
    MERGE_OFFSET,
};
pub use missions::is_mission_complete;
pub use race::race_speed;
