use crate::ids::NeuronId;

/// Common error type for NEUROWORM data operations.
///
/// Raised only at the system boundary (parsing loosely-typed `circuit_data`
/// records into strongly-typed structures). The simulation and diff engines
/// themselves are total and never construct these.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CircuitDataError {
    /// A neuron id that cannot be represented (empty, too long, non-ASCII).
    #[error("invalid neuron id {0:?}: {1}")]
    InvalidNeuronId(String, &'static str),

    /// The persisted record does not match the circuit shape.
    #[error("malformed circuit record: {0}")]
    MalformedRecord(String),

    /// A label (behavior, stimulus, neuron class, synapse kind) outside the
    /// known enumerations.
    #[error("unknown {kind} label {value:?}")]
    UnknownLabel { kind: &'static str, value: String },

    /// A neuron id appears more than once in one circuit.
    #[error("duplicate neuron id {0} in circuit")]
    DuplicateNeuron(NeuronId),
}

pub type Result<T> = core::result::Result<T, CircuitDataError>;
