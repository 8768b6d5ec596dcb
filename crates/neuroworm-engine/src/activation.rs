// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Signal Propagation Engine
//!
//! Deterministic discrete-step activation over a placed circuit:
//!
//! 1. **Seed**: the stimulus maps to a fixed trigger-neuron list; triggers
//!    that are actually placed become active at step 0.
//! 2. **Propagate**: for a fixed number of steps, every active neuron pushes
//!    activation along its live outgoing connections. Activation is
//!    monotonic - neurons never deactivate during a run.
//! 3. **Classify**: the final active set is read out against the motor-class
//!    tables (see [`crate::classify`]).
//!
//! The ordered `signal_path` records each neuron once, at first activation,
//! so the rendering layer can replay the cascade.

use ahash::{AHashMap, AHashSet};
use neuroworm_structures::{Behavior, Circuit, Connection, NeuronId, Stimulus, SynapseKind};
use serde::Serialize;
use tracing::{debug, trace};

use crate::classify::classify_behavior;

/// Number of discrete propagation steps after seeding.
pub const DEFAULT_PROPAGATION_STEPS: u32 = 3;

/// Minimum weight magnitude for a connection to carry a signal.
pub const DEFAULT_ACTIVATION_THRESHOLD: f32 = 5.0;

/// Tunable engine parameters.
///
/// Defaults reproduce the classroom behavior; the config file can override
/// them for experiments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineSettings {
    pub propagation_steps: u32,
    pub activation_threshold: f32,
    /// When set, electrical (gap-junction) records also propagate
    /// `to -> from`. Off by default: the stored record direction is the
    /// behavior the reference data and lessons were authored against.
    pub symmetric_gap_junctions: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            propagation_steps: DEFAULT_PROPAGATION_STEPS,
            activation_threshold: DEFAULT_ACTIVATION_THRESHOLD,
            symmetric_gap_junctions: false,
        }
    }
}

/// Result of one simulation run.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationOutcome {
    pub behavior: Behavior,
    /// Final active set; unordered.
    pub active_neurons: AHashSet<NeuronId>,
    /// First-activation order, deduplicated; drives animation replay.
    pub signal_path: Vec<NeuronId>,
}

impl SimulationOutcome {
    /// The neutral outcome every malformed input degrades to.
    fn neutral() -> Self {
        SimulationOutcome {
            behavior: Behavior::NoMovement,
            active_neurons: AHashSet::new(),
            signal_path: Vec::new(),
        }
    }
}

/// Trigger-neuron ids seeded by each stimulus, in seeding order.
pub fn stimulus_triggers(stimulus: Stimulus) -> &'static [&'static str] {
    match stimulus {
        Stimulus::TouchHead => &["ALML", "ALMR", "AVM"],
        Stimulus::TouchTail => &["PLML", "PLMR"],
        Stimulus::SmellFood => &["AWAL", "AWAR", "AWCL", "AWCR"],
        Stimulus::None => &[],
    }
}

/// The activation engine. Holds immutable settings only - all circuit state
/// is passed per call, so a single engine is safe to share between call
/// sites without locking.
#[derive(Debug, Clone, Default)]
pub struct ActivationEngine {
    settings: EngineSettings,
}

impl ActivationEngine {
    pub fn new(settings: EngineSettings) -> Self {
        ActivationEngine { settings }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Run one simulation.
    ///
    /// `connections` may reference neurons outside `placed`; such
    /// connections are skipped. The function is deterministic and never
    /// fails: empty inputs or an absent stimulus yield the neutral
    /// `NoMovement` outcome.
    pub fn simulate(
        &self,
        connections: &[Connection],
        stimulus: Stimulus,
        placed: &AHashSet<NeuronId>,
    ) -> SimulationOutcome {
        if placed.is_empty() {
            return SimulationOutcome::neutral();
        }

        let mut active: AHashSet<NeuronId> = AHashSet::with_capacity(placed.len());
        let mut signal_path: Vec<NeuronId> = Vec::with_capacity(placed.len());

        for name in stimulus_triggers(stimulus) {
            // Trigger tables hold catalog names, which are always valid ids.
            let Ok(id) = NeuronId::try_from_name(name) else {
                continue;
            };
            if placed.contains(&id) && active.insert(id) {
                signal_path.push(id);
            }
        }
        debug!(
            stimulus = %stimulus,
            seeds = signal_path.len(),
            placed = placed.len(),
            "simulation seeded"
        );

        let index = self.build_index(connections, placed);

        for step in 0..self.settings.propagation_steps {
            let frontier = signal_path.len();
            for i in 0..frontier {
                let source = signal_path[i];
                let Some(targets) = index.get(&source) else {
                    continue;
                };
                for &target in targets {
                    if active.insert(target) {
                        signal_path.push(target);
                    }
                }
            }
            trace!(step, active = signal_path.len(), "propagation step");
            if signal_path.len() == frontier {
                // Fixed point; remaining steps cannot change anything.
                break;
            }
        }

        let behavior = classify_behavior(&active);
        debug!(%behavior, active = active.len(), "simulation classified");

        SimulationOutcome {
            behavior,
            active_neurons: active,
            signal_path,
        }
    }

    /// Convenience wrapper deriving the placed set from a circuit.
    pub fn simulate_circuit(&self, circuit: &Circuit, stimulus: Stimulus) -> SimulationOutcome {
        let placed: AHashSet<NeuronId> = circuit.neurons.iter().map(|n| n.id).collect();
        self.simulate(&circuit.connections, stimulus, &placed)
    }

    /// Pre-filtered adjacency index: source -> live targets.
    ///
    /// Liveness gates on weight magnitude (the sign is the
    /// excitatory/inhibitory decoration and does not invert propagation) and
    /// on both endpoints being placed, so dangling references simply never
    /// enter the index.
    fn build_index(
        &self,
        connections: &[Connection],
        placed: &AHashSet<NeuronId>,
    ) -> AHashMap<NeuronId, Vec<NeuronId>> {
        let mut index: AHashMap<NeuronId, Vec<NeuronId>> = AHashMap::new();
        for c in connections {
            if c.weight.abs() < self.settings.activation_threshold {
                continue;
            }
            if !placed.contains(&c.from) || !placed.contains(&c.to) {
                continue;
            }
            index.entry(c.from).or_default().push(c.to);
            if self.settings.symmetric_gap_junctions && c.kind == SynapseKind::Electrical {
                index.entry(c.to).or_default().push(c.from);
            }
        }
        index
    }
}
