//! Synaptic connection records

use crate::ids::{ConnectionKey, NeuronId};
use serde::{Deserialize, Serialize};

/// Synapse kind.
///
/// Electrical (gap-junction) synapses are biologically symmetric but are
/// stored as single directed records; whether they propagate both ways is an
/// engine setting, not a property of the record itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SynapseKind {
    Chemical,
    Electrical,
}

/// A directed, weighted synaptic connection.
///
/// Weight magnitude decides whether the connection is live for propagation;
/// the sign is reserved for the excitatory/inhibitory distinction and only
/// decorates the rendering layer today.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub from: NeuronId,
    pub to: NeuronId,
    #[serde(rename = "type")]
    pub kind: SynapseKind,
    pub weight: f32,
}

impl Connection {
    pub fn new(from: NeuronId, to: NeuronId, kind: SynapseKind, weight: f32) -> Self {
        Connection {
            from,
            to,
            kind,
            weight,
        }
    }

    /// Set-membership identity: the ordered endpoint pair.
    pub fn key(&self) -> ConnectionKey {
        ConnectionKey::new(self.from, self.to)
    }

    /// Whether this connection touches the given neuron on either end.
    pub fn involves(&self, id: NeuronId) -> bool {
        self.from == id || self.to == id
    }
}
