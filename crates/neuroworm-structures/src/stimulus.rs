//! External stimulus kinds

use crate::CircuitDataError;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// External trigger condition seeding the initial activation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stimulus {
    TouchHead,
    TouchTail,
    SmellFood,
    /// No external input; simulation degrades to the neutral outcome.
    #[default]
    None,
}

impl Stimulus {
    pub fn label(&self) -> &'static str {
        match self {
            Stimulus::TouchHead => "touch_head",
            Stimulus::TouchTail => "touch_tail",
            Stimulus::SmellFood => "smell_food",
            Stimulus::None => "none",
        }
    }
}

impl fmt::Display for Stimulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Stimulus {
    type Err = CircuitDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "touch_head" => Ok(Stimulus::TouchHead),
            "touch_tail" => Ok(Stimulus::TouchTail),
            "smell_food" => Ok(Stimulus::SmellFood),
            "none" => Ok(Stimulus::None),
            other => Err(CircuitDataError::UnknownLabel {
                kind: "stimulus",
                value: other.to_string(),
            }),
        }
    }
}
