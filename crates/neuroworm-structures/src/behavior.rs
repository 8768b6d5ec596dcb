//! Behavior classification labels

use crate::CircuitDataError;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Discrete classification of a simulation outcome.
///
/// `TurnLeft`/`TurnRight` exist as authored labels on circuits and missions;
/// the activation classifier itself only ever emits the other five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Behavior {
    MoveForward,
    MoveBackward,
    TurnLeft,
    TurnRight,
    Curl,
    NoMovement,
    HeadWiggle,
}

impl Behavior {
    pub fn label(&self) -> &'static str {
        match self {
            Behavior::MoveForward => "move_forward",
            Behavior::MoveBackward => "move_backward",
            Behavior::TurnLeft => "turn_left",
            Behavior::TurnRight => "turn_right",
            Behavior::Curl => "curl",
            Behavior::NoMovement => "no_movement",
            Behavior::HeadWiggle => "head_wiggle",
        }
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Behavior {
    type Err = CircuitDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "move_forward" => Ok(Behavior::MoveForward),
            "move_backward" => Ok(Behavior::MoveBackward),
            "turn_left" => Ok(Behavior::TurnLeft),
            "turn_right" => Ok(Behavior::TurnRight),
            "curl" => Ok(Behavior::Curl),
            "no_movement" => Ok(Behavior::NoMovement),
            "head_wiggle" => Ok(Behavior::HeadWiggle),
            other => Err(CircuitDataError::UnknownLabel {
                kind: "behavior",
                value: other.to_string(),
            }),
        }
    }
}
