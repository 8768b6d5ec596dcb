// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Circuit merging
//!
//! Union of two circuits with provenance tags and conflict notes, used when
//! collaborators combine shared circuits. A is the local circuit and wins
//! every disagreement; conflicts are reported, never resolved silently.

use ahash::AHashSet;
use neuroworm_structures::{
    Circuit, Connection, ConnectionKey, Neuron, NeuronId, Position, SynapseKind, CANVAS_HEIGHT,
    CANVAS_WIDTH,
};
use serde::Serialize;

/// Offset applied to B-only neuron positions to reduce visual overlap.
pub const MERGE_OFFSET: f32 = 5.0;

/// Which input circuit(s) an element came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    A,
    B,
    Both,
}

#[derive(Debug, Clone, Serialize)]
pub struct MergedNeuron {
    pub neuron: Neuron,
    pub origin: Origin,
}

#[derive(Debug, Clone, Serialize)]
pub struct MergedConnection {
    pub connection: Connection,
    pub origin: Origin,
}

/// A disagreement between the two circuits. The kept value is always A's.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "conflict", rename_all = "snake_case")]
pub enum MergeConflict {
    NeuronPosition {
        id: NeuronId,
        kept: Position,
        discarded: Position,
    },
    ConnectionKind {
        key: ConnectionKey,
        kept: SynapseKind,
        discarded: SynapseKind,
    },
    ConnectionWeight {
        key: ConnectionKey,
        kept: f32,
        discarded: f32,
    },
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MergeOutcome {
    pub neurons: Vec<MergedNeuron>,
    pub connections: Vec<MergedConnection>,
    pub conflicts: Vec<MergeConflict>,
}

/// Merge two circuits into a union. Pure - neither input is mutated.
///
/// - neurons union by id; an in-both neuron keeps A's declared position
///   (conflict note when the positions differ), a B-only neuron is nudged
///   by [`MERGE_OFFSET`] on each axis (clamped to the canvas) so it does
///   not land exactly on top of its A neighbors
/// - connections union by `(from, to)`; kind and weight disagreements on a
///   shared key become conflict notes, with A's attributes kept
pub fn merge_circuits(a: &Circuit, b: &Circuit) -> MergeOutcome {
    let mut outcome = MergeOutcome::default();

    for n in &a.neurons {
        let origin = match b.neuron(n.id) {
            Some(other) => {
                if let (Some(kept), Some(discarded)) = (n.position, other.position) {
                    if kept != discarded {
                        outcome.conflicts.push(MergeConflict::NeuronPosition {
                            id: n.id,
                            kept,
                            discarded,
                        });
                    }
                }
                Origin::Both
            }
            None => Origin::A,
        };
        outcome.neurons.push(MergedNeuron {
            neuron: n.clone(),
            origin,
        });
    }
    for n in &b.neurons {
        if a.contains_neuron(n.id) {
            continue;
        }
        let mut neuron = n.clone();
        neuron.position = neuron
            .position
            .map(|p| p.offset_clamped(MERGE_OFFSET, MERGE_OFFSET, CANVAS_WIDTH, CANVAS_HEIGHT));
        outcome.neurons.push(MergedNeuron {
            neuron,
            origin: Origin::B,
        });
    }

    let mut seen: AHashSet<ConnectionKey> = AHashSet::new();
    for c in &a.connections {
        if !seen.insert(c.key()) {
            continue;
        }
        let origin = match b.connections.iter().find(|other| other.key() == c.key()) {
            Some(other) => {
                if other.kind != c.kind {
                    outcome.conflicts.push(MergeConflict::ConnectionKind {
                        key: c.key(),
                        kept: c.kind,
                        discarded: other.kind,
                    });
                }
                if other.weight != c.weight {
                    outcome.conflicts.push(MergeConflict::ConnectionWeight {
                        key: c.key(),
                        kept: c.weight,
                        discarded: other.weight,
                    });
                }
                Origin::Both
            }
            None => Origin::A,
        };
        outcome.connections.push(MergedConnection {
            connection: *c,
            origin,
        });
    }
    for c in &b.connections {
        if !seen.insert(c.key()) {
            continue;
        }
        outcome.connections.push(MergedConnection {
            connection: *c,
            origin: Origin::B,
        });
    }

    outcome
}
