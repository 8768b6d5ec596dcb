//! Static reference catalogs
//!
//! The simplified ground-truth connectome (neuron identities, weighted
//! reference connections) and the mission chain. Built once at first use and
//! never mutated; these double as the simulator's default dataset and as the
//! answer keys for mission validation.

mod connectome;
mod missions;
mod neurons;

use crate::{Connection, Mission, Neuron, NeuronId};
use std::sync::OnceLock;

/// All catalog neurons with classes and default layout positions.
pub fn neuron_catalog() -> &'static [Neuron] {
    static NEURONS: OnceLock<Vec<Neuron>> = OnceLock::new();
    NEURONS.get_or_init(neurons::build)
}

/// Ground-truth weighted connections between catalog neurons.
pub fn reference_connectome() -> &'static [Connection] {
    static CONNECTOME: OnceLock<Vec<Connection>> = OnceLock::new();
    CONNECTOME.get_or_init(connectome::build)
}

/// The linear mission chain.
pub fn mission_catalog() -> &'static [Mission] {
    static MISSIONS: OnceLock<Vec<Mission>> = OnceLock::new();
    MISSIONS.get_or_init(missions::build)
}

/// Look up a catalog neuron by id.
pub fn catalog_neuron(id: NeuronId) -> Option<&'static Neuron> {
    neuron_catalog().iter().find(|n| n.id == id)
}

/// Id constructor for catalog tables. Catalog names are static and known
/// valid, so failure here is a catalog bug.
pub(crate) fn nid(name: &str) -> NeuronId {
    NeuronId::try_from_name(name).expect("catalog neuron name must be a valid id")
}
