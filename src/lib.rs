//! # NEUROWORM - Interactive Connectome Circuit Engine
//!
//! NEUROWORM teaches nervous-system concepts with a simplified model of the
//! *C. elegans* connectome. This umbrella crate re-exports the computational
//! core the classroom application is built on: deterministic signal
//! propagation with behavior classification, mission validation, and circuit
//! diff/merge. Rendering, persistence, and realtime collaboration live in
//! the application layers; everything here is pure in-memory computation.
//!
//! ## Quick Start
//!
//! ```
//! use neuroworm::prelude::*;
//! use neuroworm::structures::catalog;
//!
//! // Place the minimal touch-reflex circuit and poke the worm on the head.
//! let placed: ahash::AHashSet<NeuronId> = ["ALML", "AVAL", "DA1"]
//!     .iter()
//!     .map(|n| NeuronId::try_from_name(n).unwrap())
//!     .collect();
//!
//! let outcome = ActivationEngine::default().simulate(
//!     catalog::reference_connectome(),
//!     Stimulus::TouchHead,
//!     &placed,
//! );
//!
//! assert_eq!(outcome.behavior, Behavior::MoveBackward);
//! assert_eq!(outcome.signal_path.len(), 3); // ALML -> AVAL -> DA1
//! ```
//!
//! ## Components
//!
//! - [`structures`]: data types, reference catalogs, record boundary
//! - [`engine`]: activation, classification, missions, diff/merge, race
//! - [`config`]: `neuroworm_configuration.toml` loader

pub use neuroworm_config as config;
pub use neuroworm_engine as engine;
pub use neuroworm_structures as structures;

use neuroworm_config::NeurowormConfig;
use neuroworm_engine::EngineSettings;

/// Engine settings from a loaded configuration.
pub fn engine_settings(config: &NeurowormConfig) -> EngineSettings {
    EngineSettings {
        propagation_steps: config.engine.propagation_steps,
        activation_threshold: config.engine.activation_threshold,
        symmetric_gap_junctions: config.engine.symmetric_gap_junctions,
    }
}

/// Prelude module for convenient imports.
///
/// ```
/// use neuroworm::prelude::*;
/// ```
pub mod prelude {
    pub use neuroworm_engine::{
        classify_behavior, diff_circuits, diff_circuits_with_layout, is_mission_complete,
        merge_circuits, race_speed, ActivationEngine, CircuitDiff, EngineSettings, MergeConflict,
        MergeOutcome, Origin, SimulationOutcome,
    };
    pub use neuroworm_structures::{
        Behavior, Circuit, Connection, ConnectionKey, Mission, Neuron, NeuronClass, NeuronId,
        Position, Stimulus, SynapseKind,
    };
}
