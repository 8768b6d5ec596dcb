// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Mission validation

use neuroworm_structures::{Behavior, Connection, Mission};

/// Whether a built circuit completes a mission.
///
/// Two conditions, both required:
/// - the classified behavior equals the mission's correct behavior
/// - every required neuron is *connected*: it appears as an endpoint of at
///   least one user connection. A required neuron that is merely placed on
///   the canvas does not count.
///
/// The behavior check short-circuits: required-neuron connectivity is
/// meaningless when the circuit does the wrong thing.
pub fn is_mission_complete(
    user_connections: &[Connection],
    mission: &Mission,
    behavior: Behavior,
) -> bool {
    if behavior != mission.correct_behavior {
        return false;
    }
    mission
        .required_neurons
        .iter()
        .all(|&id| user_connections.iter().any(|c| c.involves(id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use neuroworm_structures::{NeuronId, Stimulus, SynapseKind};

    fn nid(name: &str) -> NeuronId {
        NeuronId::try_from_name(name).unwrap()
    }

    fn mission() -> Mission {
        Mission {
            id: 1,
            title: "Reflex: back away".to_string(),
            stimulus: Stimulus::TouchHead,
            correct_behavior: Behavior::MoveBackward,
            required_neurons: vec![nid("ALML"), nid("AVAL"), nid("DA1")],
            recommended_neurons: vec![nid("ALML"), nid("AVAL"), nid("DA1"), nid("VA1")],
            unlock_requirement: 0,
        }
    }

    fn reflex_connections() -> Vec<Connection> {
        vec![
            Connection::new(nid("ALML"), nid("AVAL"), SynapseKind::Chemical, 8.0),
            Connection::new(nid("AVAL"), nid("DA1"), SynapseKind::Chemical, 12.0),
        ]
    }

    #[test]
    fn passes_when_behavior_matches_and_required_are_connected() {
        assert!(is_mission_complete(
            &reflex_connections(),
            &mission(),
            Behavior::MoveBackward
        ));
    }

    #[test]
    fn fails_on_behavior_mismatch_even_with_full_wiring() {
        assert!(!is_mission_complete(
            &reflex_connections(),
            &mission(),
            Behavior::MoveForward
        ));
    }

    #[test]
    fn fails_when_a_required_neuron_is_unconnected() {
        // DA1 placed but wired to nothing.
        let connections = vec![Connection::new(
            nid("ALML"),
            nid("AVAL"),
            SynapseKind::Chemical,
            8.0,
        )];
        assert!(!is_mission_complete(
            &connections,
            &mission(),
            Behavior::MoveBackward
        ));
    }

    #[test]
    fn either_endpoint_counts_as_connected() {
        // ALML only ever appears as a target; that still counts.
        let connections = vec![
            Connection::new(nid("AVM"), nid("ALML"), SynapseKind::Electrical, 6.0),
            Connection::new(nid("AVAL"), nid("DA1"), SynapseKind::Chemical, 12.0),
        ];
        assert!(is_mission_complete(
            &connections,
            &mission(),
            Behavior::MoveBackward
        ));
    }
}
