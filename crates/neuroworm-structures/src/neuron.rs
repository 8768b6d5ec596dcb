//! Neuron records and layout positions

use crate::ids::NeuronId;
use serde::{Deserialize, Serialize};

/// Default layout canvas bounds, in layout units.
///
/// Positions have no simulation semantics; these bounds only constrain where
/// merge places offset neurons.
pub const CANVAS_WIDTH: f32 = 960.0;
pub const CANVAS_HEIGHT: f32 = 600.0;

/// Behavioral class of a neuron.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeuronClass {
    Sensory,
    Motor,
    Interneuron,
    /// Decision nodes (AVA, AVB, PVC); a specialization of interneuron.
    Command,
}

/// 2D layout position. Layout only - propagation never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Position { x, y }
    }

    /// Translate by `(dx, dy)` and clamp into `[0, max_x] x [0, max_y]`.
    pub fn offset_clamped(&self, dx: f32, dy: f32, max_x: f32, max_y: f32) -> Position {
        Position {
            x: (self.x + dx).clamp(0.0, max_x),
            y: (self.y + dy).clamp(0.0, max_y),
        }
    }
}

/// A single neuron record.
///
/// Catalog neurons are immutable reference data; placed (user) copies carry a
/// position and are moved/removed by the editing surface, never by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neuron {
    pub id: NeuronId,
    /// Display name; defaults to the id when a record omits it.
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub class: NeuronClass,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Neuron {
    pub fn new(id: NeuronId, name: &str, class: NeuronClass) -> Self {
        Neuron {
            id,
            name: name.to_string(),
            class,
            position: None,
        }
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.position = Some(Position::new(x, y));
        self
    }
}
