//! Neuron identity catalog
//!
//! A simplified subset of the hermaphrodite connectome: the anterior and
//! posterior touch circuits, the AWA/AWC chemosensory pathway, the locomotion
//! command interneurons, and the motor neurons the classifier reads.

use super::nid;
use crate::{Neuron, NeuronClass};

use crate::NeuronClass::{Command, Interneuron, Motor, Sensory};

pub(super) fn build() -> Vec<Neuron> {
    let table: &[(&str, &str, NeuronClass, f32, f32)] = &[
        // Anterior touch receptors
        ("ALML", "Anterior lateral microtubule cell, left", Sensory, 80.0, 120.0),
        ("ALMR", "Anterior lateral microtubule cell, right", Sensory, 80.0, 200.0),
        ("AVM", "Anterior ventral microtubule cell", Sensory, 140.0, 160.0),
        // Posterior touch receptors
        ("PLML", "Posterior lateral microtubule cell, left", Sensory, 860.0, 120.0),
        ("PLMR", "Posterior lateral microtubule cell, right", Sensory, 860.0, 200.0),
        // Chemosensory
        ("AWAL", "Amphid wing A, left", Sensory, 60.0, 320.0),
        ("AWAR", "Amphid wing A, right", Sensory, 60.0, 400.0),
        ("AWCL", "Amphid wing C, left", Sensory, 120.0, 360.0),
        ("AWCR", "Amphid wing C, right", Sensory, 120.0, 440.0),
        // Locomotion command interneurons
        ("AVAL", "Backward command interneuron, left", Command, 440.0, 160.0),
        ("AVAR", "Backward command interneuron, right", Command, 440.0, 240.0),
        ("AVBL", "Forward command interneuron, left", Command, 520.0, 320.0),
        ("AVBR", "Forward command interneuron, right", Command, 520.0, 400.0),
        // Interneurons
        ("AVDL", "Anterior touch relay, left", Interneuron, 280.0, 140.0),
        ("AVDR", "Anterior touch relay, right", Interneuron, 280.0, 220.0),
        ("PVCL", "Posterior touch relay, left", Interneuron, 700.0, 140.0),
        ("PVCR", "Posterior touch relay, right", Interneuron, 700.0, 220.0),
        ("AIYL", "Chemosensory relay, left", Interneuron, 220.0, 360.0),
        ("AIYR", "Chemosensory relay, right", Interneuron, 220.0, 440.0),
        ("AIZL", "Chemosensory integrator, left", Interneuron, 320.0, 380.0),
        ("AIZR", "Chemosensory integrator, right", Interneuron, 320.0, 460.0),
        ("RIML", "Motor integrator, left", Interneuron, 380.0, 300.0),
        ("RIMR", "Motor integrator, right", Interneuron, 380.0, 360.0),
        // A-class motor neurons (backward locomotion)
        ("DA1", "Dorsal A-type motor 1", Motor, 560.0, 520.0),
        ("DA2", "Dorsal A-type motor 2", Motor, 620.0, 520.0),
        ("VA1", "Ventral A-type motor 1", Motor, 680.0, 520.0),
        ("VA2", "Ventral A-type motor 2", Motor, 740.0, 520.0),
        // B-class motor neurons (forward locomotion)
        ("DB1", "Dorsal B-type motor 1", Motor, 560.0, 560.0),
        ("DB2", "Dorsal B-type motor 2", Motor, 620.0, 560.0),
        ("VB1", "Ventral B-type motor 1", Motor, 680.0, 560.0),
        ("VB2", "Ventral B-type motor 2", Motor, 740.0, 560.0),
        // Head motor neurons
        ("RMDL", "Ring motor, left", Motor, 180.0, 40.0),
        ("RMDR", "Ring motor, right", Motor, 240.0, 40.0),
        ("SMDDL", "Sublateral motor, dorsal left", Motor, 300.0, 40.0),
        ("SMDDR", "Sublateral motor, dorsal right", Motor, 360.0, 40.0),
        ("SMDVL", "Sublateral motor, ventral left", Motor, 420.0, 40.0),
        ("SMDVR", "Sublateral motor, ventral right", Motor, 480.0, 40.0),
    ];

    table
        .iter()
        .map(|&(id, name, class, x, y)| Neuron::new(nid(id), name, class).at(x, y))
        .collect()
}
