//! Mission scenarios

use crate::{Behavior, NeuronId, Stimulus};
use serde::{Deserialize, Serialize};

/// A fixed teaching scenario.
///
/// Missions form a linear unlock chain: `unlock_requirement` names the
/// previous mission id, or 0 for the first mission in the chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub id: u32,
    pub title: String,
    pub stimulus: Stimulus,
    pub correct_behavior: Behavior,
    /// Neurons that must be present AND connected in the built circuit.
    pub required_neurons: Vec<NeuronId>,
    /// Superset of `required_neurons` used only for hinting.
    pub recommended_neurons: Vec<NeuronId>,
    pub unlock_requirement: u32,
}

impl Mission {
    /// Whether this mission is reachable given the set of completed ids.
    pub fn is_unlocked(&self, completed: &[u32]) -> bool {
        self.unlock_requirement == 0 || completed.contains(&self.unlock_requirement)
    }
}
