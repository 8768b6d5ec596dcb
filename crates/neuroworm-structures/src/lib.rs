//! The core crate for NEUROWORM. Defines the data types shared by the
//! activation engine, the diff/merge tools, and the surrounding application,
//! plus the static reference catalogs and the validated boundary for
//! persisted circuit records.

mod behavior;
pub mod catalog;
mod circuit;
mod connection;
mod error;
mod ids;
mod mission;
mod neuron;
mod stimulus;

pub use behavior::Behavior;
pub use circuit::Circuit;
pub use connection::{Connection, SynapseKind};
pub use error::{CircuitDataError, Result};
pub use ids::{ConnectionKey, NeuronId};
pub use mission::Mission;
pub use neuron::{Neuron, NeuronClass, Position, CANVAS_HEIGHT, CANVAS_WIDTH};
pub use stimulus::Stimulus;
