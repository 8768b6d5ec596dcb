//! Ground-truth reference connections
//!
//! Weights are pedagogical strengths, not biological synapse counts. Entries
//! below the engine's activation threshold (5) exist in the wiring diagram
//! but never carry a signal; the builder UI renders them as faint edges.
//!
//! Gap junctions are stored as directed records like every other connection.
//! The source data is inconsistent about symmetry: the AVAL/AVAR pair is
//! recorded in both directions, the AVBL/AVBR and AVM/AVBL junctions are
//! single records.

use super::nid;
use crate::{Connection, SynapseKind};

use crate::SynapseKind::{Chemical, Electrical};

pub(super) fn build() -> Vec<Connection> {
    let table: &[(&str, &str, SynapseKind, f32)] = &[
        // Anterior touch -> backward command
        ("ALML", "AVDL", Chemical, 8.0),
        ("ALMR", "AVDR", Chemical, 8.0),
        ("ALML", "AVAL", Chemical, 6.0),
        ("ALMR", "AVAR", Chemical, 6.0),
        ("AVM", "AVAL", Chemical, 7.0),
        ("AVDL", "AVAL", Chemical, 10.0),
        ("AVDR", "AVAR", Chemical, 10.0),
        // Backward command -> A-class motors
        ("AVAL", "DA1", Chemical, 12.0),
        ("AVAL", "VA1", Chemical, 9.0),
        ("AVAR", "DA2", Chemical, 11.0),
        ("AVAR", "VA2", Chemical, 9.0),
        // Posterior touch -> forward command
        ("PLML", "PVCL", Chemical, 9.0),
        ("PLMR", "PVCR", Chemical, 9.0),
        ("PVCL", "AVBL", Chemical, 10.0),
        ("PVCR", "AVBR", Chemical, 10.0),
        // Forward command -> B-class motors
        ("AVBL", "DB1", Chemical, 12.0),
        ("AVBL", "VB1", Chemical, 9.0),
        ("AVBR", "DB2", Chemical, 11.0),
        ("AVBR", "VB2", Chemical, 9.0),
        // Chemosensation -> forward command
        ("AWAL", "AIYL", Chemical, 7.0),
        ("AWAR", "AIYR", Chemical, 7.0),
        ("AWCL", "AIYL", Chemical, 8.0),
        ("AWCR", "AIYR", Chemical, 8.0),
        ("AIYL", "AVBL", Chemical, 7.0),
        ("AIYR", "AVBR", Chemical, 7.0),
        ("AIYL", "AIZL", Chemical, 6.0),
        ("AIYR", "AIZR", Chemical, 6.0),
        ("AIZL", "SMDVL", Chemical, 6.0),
        ("AIZR", "SMDVR", Chemical, 6.0),
        // Head motor wiring
        ("AVDL", "RMDL", Chemical, 6.0),
        ("AVDR", "RMDR", Chemical, 6.0),
        ("AVAL", "RIML", Chemical, 6.0),
        ("AVAR", "RIMR", Chemical, 6.0),
        ("RIML", "RMDL", Chemical, 7.0),
        ("RIMR", "RMDR", Chemical, 7.0),
        // Gap junctions
        ("AVAL", "AVAR", Electrical, 6.0),
        ("AVAR", "AVAL", Electrical, 6.0),
        ("AVBL", "AVBR", Electrical, 6.0),
        ("AVM", "AVBL", Electrical, 6.0),
        // Sub-threshold wiring (present in the diagram, silent in simulation)
        ("ALML", "ALMR", Electrical, 4.0),
        ("RIML", "RIMR", Electrical, 4.0),
        ("AVBL", "SMDVL", Chemical, 4.0),
    ];

    table
        .iter()
        .map(|&(from, to, kind, weight)| Connection::new(nid(from), nid(to), kind, weight))
        .collect()
}
