// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Circuit diffing
//!
//! Structural comparison of two circuits, used for the share/compare view
//! and for history snapshots. Identity rules:
//! - neurons compare by id
//! - connections compare by the ordered `(from, to)` key; kind and weight
//!   are attributes, not identity
//!
//! A connection whose kind or weight changed between A and B is therefore
//! *common* - and additionally reported in `changed_connections`, so the UI
//! can badge it without breaking the set semantics.
//!
//! Result lists carry the insertion order of the iteration that built them;
//! callers may rely on that for stable rendering only, never correctness.

use ahash::AHashMap;
use neuroworm_structures::{Circuit, Connection, ConnectionKey, NeuronId, Position, SynapseKind};
use serde::Serialize;

/// Layout-units threshold past which a common neuron counts as moved.
pub const MOVE_THRESHOLD: f32 = 5.0;

/// A common connection whose attributes differ between the two circuits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConnectionChange {
    pub key: ConnectionKey,
    pub kind_a: SynapseKind,
    pub kind_b: SynapseKind,
    pub weight_a: f32,
    pub weight_b: f32,
}

/// A common neuron whose position shifted past [`MOVE_THRESHOLD`] on either
/// axis. Presentational only - connectivity comparisons ignore layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MovedNeuron {
    pub id: NeuronId,
    pub from: Position,
    pub to: Position,
}

/// Structured difference between two circuits.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CircuitDiff {
    /// Present in B, absent in A.
    pub added_neurons: Vec<NeuronId>,
    /// Present in A, absent in B.
    pub removed_neurons: Vec<NeuronId>,
    pub common_neurons: Vec<NeuronId>,
    pub added_connections: Vec<ConnectionKey>,
    pub removed_connections: Vec<ConnectionKey>,
    pub common_connections: Vec<ConnectionKey>,
    /// Common connections with differing kind or weight (see module docs).
    pub changed_connections: Vec<ConnectionChange>,
    /// Filled by [`diff_circuits_with_layout`] only.
    pub moved_neurons: Vec<MovedNeuron>,
}

impl CircuitDiff {
    /// True when the two circuits hold identical neuron and connection sets
    /// (attribute changes and moves included).
    pub fn is_unchanged(&self) -> bool {
        self.added_neurons.is_empty()
            && self.removed_neurons.is_empty()
            && self.added_connections.is_empty()
            && self.removed_connections.is_empty()
            && self.changed_connections.is_empty()
            && self.moved_neurons.is_empty()
    }
}

/// First-occurrence connection index by identity key.
fn connection_index(circuit: &Circuit) -> (Vec<ConnectionKey>, AHashMap<ConnectionKey, &Connection>) {
    let mut order = Vec::with_capacity(circuit.connections.len());
    let mut index = AHashMap::with_capacity(circuit.connections.len());
    for c in &circuit.connections {
        let key = c.key();
        if !index.contains_key(&key) {
            order.push(key);
            index.insert(key, c);
        }
    }
    (order, index)
}

/// Compare two circuits structurally. Layout (moved-neuron) detection is
/// skipped; see [`diff_circuits_with_layout`] for the history-compare
/// variant.
pub fn diff_circuits(a: &Circuit, b: &Circuit) -> CircuitDiff {
    let mut diff = CircuitDiff::default();

    for n in &a.neurons {
        if b.contains_neuron(n.id) {
            diff.common_neurons.push(n.id);
        } else {
            diff.removed_neurons.push(n.id);
        }
    }
    for n in &b.neurons {
        if !a.contains_neuron(n.id) {
            diff.added_neurons.push(n.id);
        }
    }

    let (order_a, index_a) = connection_index(a);
    let (order_b, index_b) = connection_index(b);

    for key in &order_a {
        match index_b.get(key) {
            Some(conn_b) => {
                diff.common_connections.push(*key);
                let conn_a = index_a[key];
                if conn_a.kind != conn_b.kind || conn_a.weight != conn_b.weight {
                    diff.changed_connections.push(ConnectionChange {
                        key: *key,
                        kind_a: conn_a.kind,
                        kind_b: conn_b.kind,
                        weight_a: conn_a.weight,
                        weight_b: conn_b.weight,
                    });
                }
            }
            None => diff.removed_connections.push(*key),
        }
    }
    for key in &order_b {
        if !index_a.contains_key(key) {
            diff.added_connections.push(*key);
        }
    }

    diff
}

/// History-compare variant: [`diff_circuits`] plus moved-neuron detection.
pub fn diff_circuits_with_layout(a: &Circuit, b: &Circuit) -> CircuitDiff {
    let mut diff = diff_circuits(a, b);

    for &id in &diff.common_neurons {
        let (Some(na), Some(nb)) = (a.neuron(id), b.neuron(id)) else {
            continue;
        };
        let (Some(pa), Some(pb)) = (na.position, nb.position) else {
            continue;
        };
        if (pa.x - pb.x).abs() > MOVE_THRESHOLD || (pa.y - pb.y).abs() > MOVE_THRESHOLD {
            diff.moved_neurons.push(MovedNeuron {
                id,
                from: pa,
                to: pb,
            });
        }
    }

    diff
}

#[cfg(test)]
mod tests {
    use super::*;
    use neuroworm_structures::{Neuron, NeuronClass};

    fn nid(name: &str) -> NeuronId {
        NeuronId::try_from_name(name).unwrap()
    }

    fn neuron(name: &str) -> Neuron {
        Neuron::new(nid(name), name, NeuronClass::Interneuron)
    }

    fn chem(from: &str, to: &str, weight: f32) -> Connection {
        Connection::new(nid(from), nid(to), SynapseKind::Chemical, weight)
    }

    fn circuit(neurons: &[&str], connections: Vec<Connection>) -> Circuit {
        Circuit {
            neurons: neurons.iter().map(|n| neuron(n)).collect(),
            connections,
            ..Circuit::default()
        }
    }

    #[test]
    fn partitions_neurons_and_connections() {
        let a = circuit(&["ALML", "AVAL", "DA1"], vec![chem("ALML", "AVAL", 8.0)]);
        let b = circuit(
            &["ALML", "AVAL", "DB1"],
            vec![chem("ALML", "AVAL", 8.0), chem("AVAL", "DB1", 9.0)],
        );

        let diff = diff_circuits(&a, &b);
        assert_eq!(diff.common_neurons, vec![nid("ALML"), nid("AVAL")]);
        assert_eq!(diff.removed_neurons, vec![nid("DA1")]);
        assert_eq!(diff.added_neurons, vec![nid("DB1")]);
        assert_eq!(
            diff.common_connections,
            vec![ConnectionKey::new(nid("ALML"), nid("AVAL"))]
        );
        assert_eq!(
            diff.added_connections,
            vec![ConnectionKey::new(nid("AVAL"), nid("DB1"))]
        );
        assert!(diff.removed_connections.is_empty());
        assert!(diff.changed_connections.is_empty());
    }

    #[test]
    fn attribute_change_is_common_plus_changed() {
        let a = circuit(&["ALML", "AVAL"], vec![chem("ALML", "AVAL", 8.0)]);
        let mut b = a.clone();
        b.connections[0].weight = 3.0;

        let diff = diff_circuits(&a, &b);
        assert_eq!(diff.common_connections.len(), 1);
        assert!(diff.added_connections.is_empty());
        assert!(diff.removed_connections.is_empty());
        assert_eq!(diff.changed_connections.len(), 1);
        assert_eq!(diff.changed_connections[0].weight_a, 8.0);
        assert_eq!(diff.changed_connections[0].weight_b, 3.0);
        assert!(!diff.is_unchanged());
    }

    #[test]
    fn direction_is_identity() {
        let a = circuit(&["ALML", "AVAL"], vec![chem("ALML", "AVAL", 8.0)]);
        let b = circuit(&["ALML", "AVAL"], vec![chem("AVAL", "ALML", 8.0)]);

        let diff = diff_circuits(&a, &b);
        assert_eq!(diff.removed_connections.len(), 1);
        assert_eq!(diff.added_connections.len(), 1);
        assert!(diff.common_connections.is_empty());
    }

    #[test]
    fn empty_circuits_diff_cleanly() {
        let empty = Circuit::default();
        let a = circuit(&["ALML"], vec![]);
        let diff = diff_circuits(&empty, &a);
        assert_eq!(diff.added_neurons, vec![nid("ALML")]);
        assert!(diff.removed_neurons.is_empty());
        assert!(diff_circuits(&empty, &empty).is_unchanged());
    }

    #[test]
    fn small_nudges_are_not_moves() {
        let mut a = circuit(&["ALML"], vec![]);
        a.neurons[0].position = Some(Position::new(100.0, 100.0));
        let mut b = a.clone();
        b.neurons[0].position = Some(Position::new(104.0, 103.0));

        assert!(diff_circuits_with_layout(&a, &b).moved_neurons.is_empty());

        b.neurons[0].position = Some(Position::new(100.0, 106.0));
        let diff = diff_circuits_with_layout(&a, &b);
        assert_eq!(diff.moved_neurons.len(), 1);
        assert_eq!(diff.moved_neurons[0].id, nid("ALML"));
    }
}
