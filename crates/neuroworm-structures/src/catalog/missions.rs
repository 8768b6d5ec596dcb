//! The mission chain
//!
//! Each mission is satisfiable against the reference connectome within the
//! engine's propagation window (the root test suite asserts this).

use super::nid;
use crate::{Behavior, Mission, NeuronId, Stimulus};

fn ids(names: &[&str]) -> Vec<NeuronId> {
    names.iter().map(|n| nid(n)).collect()
}

pub(super) fn build() -> Vec<Mission> {
    vec![
        Mission {
            id: 1,
            title: "Reflex: back away".to_string(),
            stimulus: Stimulus::TouchHead,
            correct_behavior: Behavior::MoveBackward,
            required_neurons: ids(&["ALML", "AVAL", "DA1"]),
            recommended_neurons: ids(&[
                "ALML", "ALMR", "AVM", "AVDL", "AVAL", "AVAR", "DA1", "DA2", "VA1",
            ]),
            unlock_requirement: 0,
        },
        Mission {
            id: 2,
            title: "Tail tap: full speed ahead".to_string(),
            stimulus: Stimulus::TouchTail,
            correct_behavior: Behavior::MoveForward,
            required_neurons: ids(&["PLML", "PVCL", "AVBL", "DB1"]),
            recommended_neurons: ids(&[
                "PLML", "PLMR", "PVCL", "PVCR", "AVBL", "AVBR", "DB1", "DB2", "VB1",
            ]),
            unlock_requirement: 1,
        },
        Mission {
            id: 3,
            title: "Follow the scent".to_string(),
            stimulus: Stimulus::SmellFood,
            correct_behavior: Behavior::MoveForward,
            required_neurons: ids(&["AWCL", "AIYL", "AVBL", "DB1"]),
            recommended_neurons: ids(&[
                "AWCL", "AWCR", "AWAL", "AIYL", "AIYR", "AVBL", "AVBR", "DB1", "VB1",
            ]),
            unlock_requirement: 2,
        },
        Mission {
            id: 4,
            title: "Head check".to_string(),
            stimulus: Stimulus::TouchHead,
            correct_behavior: Behavior::HeadWiggle,
            required_neurons: ids(&["ALML", "AVDL", "RMDL"]),
            recommended_neurons: ids(&["ALML", "ALMR", "AVDL", "AVDR", "RMDL", "RMDR"]),
            unlock_requirement: 3,
        },
        Mission {
            id: 5,
            title: "Tie yourself in knots".to_string(),
            stimulus: Stimulus::TouchHead,
            correct_behavior: Behavior::Curl,
            required_neurons: ids(&["ALML", "AVM", "AVAL", "AVBL", "DA1", "DB1"]),
            recommended_neurons: ids(&[
                "ALML", "AVM", "AVAL", "AVBL", "DA1", "DB1", "VA1", "VB1",
            ]),
            unlock_requirement: 4,
        },
    ]
}
