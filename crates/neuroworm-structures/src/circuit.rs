//! Circuits and the persisted-record boundary

use crate::{Behavior, CircuitDataError, Connection, Neuron, NeuronId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named collection of placed neurons and their connections.
///
/// Connections whose endpoints are missing from `neurons` are tolerated:
/// every consumer (simulation, diff, merge) skips them rather than failing.
/// The default value is the empty circuit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Circuit {
    pub title: String,
    pub tags: Vec<String>,
    /// Authored behavior label, if the author tagged one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub behavior: Option<Behavior>,
    pub neurons: Vec<Neuron>,
    pub connections: Vec<Connection>,
}

impl Circuit {
    pub fn new(title: &str) -> Self {
        Circuit {
            title: title.to_string(),
            ..Circuit::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty() && self.connections.is_empty()
    }

    pub fn neuron(&self, id: NeuronId) -> Option<&Neuron> {
        self.neurons.iter().find(|n| n.id == id)
    }

    pub fn contains_neuron(&self, id: NeuronId) -> bool {
        self.neuron(id).is_some()
    }

    /// Parse a persisted `circuit_data` record into a validated circuit.
    ///
    /// This is the single boundary where loosely-typed JSON blobs become
    /// well-formed structures; past it, consumers assume the invariants
    /// hold. A `null` or absent record yields the empty circuit so that
    /// history comparisons over missing snapshots never fail.
    ///
    /// Normalization applied on the way in:
    /// - missing display names default to the neuron id
    /// - duplicate neuron ids are rejected
    /// - unknown fields are ignored
    pub fn from_record(record: Option<&Value>) -> Result<Circuit, CircuitDataError> {
        let value = match record {
            None | Some(Value::Null) => return Ok(Circuit::default()),
            Some(value) => value,
        };

        let mut circuit: Circuit = serde_json::from_value(value.clone())
            .map_err(|e| CircuitDataError::MalformedRecord(e.to_string()))?;

        for i in 0..circuit.neurons.len() {
            if circuit.neurons[i].name.is_empty() {
                circuit.neurons[i].name = circuit.neurons[i].id.to_string();
            }
            for earlier in &circuit.neurons[..i] {
                if earlier.id == circuit.neurons[i].id {
                    return Err(CircuitDataError::DuplicateNeuron(circuit.neurons[i].id));
                }
            }
        }

        Ok(circuit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_record_is_empty_circuit() {
        let circuit = Circuit::from_record(None).unwrap();
        assert!(circuit.is_empty());
        let circuit = Circuit::from_record(Some(&Value::Null)).unwrap();
        assert!(circuit.is_empty());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let record = serde_json::json!({
            "neurons": [
                {"id": "AVAL", "type": "command"},
                {"id": "AVAL", "type": "command"},
            ],
        });
        assert!(matches!(
            Circuit::from_record(Some(&record)),
            Err(CircuitDataError::DuplicateNeuron(_))
        ));
    }
}
