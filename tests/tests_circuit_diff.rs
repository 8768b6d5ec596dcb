//! Diff/merge laws over the umbrella crate.

use ahash::AHashSet;
use neuroworm::prelude::*;
use serde_json::json;

fn nid(name: &str) -> NeuronId {
    NeuronId::try_from_name(name).unwrap()
}

fn record(neurons: &[(&str, f32, f32)], connections: &[(&str, &str, &str, f32)]) -> Circuit {
    let value = json!({
        "neurons": neurons
            .iter()
            .map(|(id, x, y)| json!({
                "id": id,
                "type": "interneuron",
                "position": {"x": x, "y": y},
            }))
            .collect::<Vec<_>>(),
        "connections": connections
            .iter()
            .map(|(from, to, kind, weight)| json!({
                "from": from,
                "to": to,
                "type": kind,
                "weight": weight,
            }))
            .collect::<Vec<_>>(),
    });
    Circuit::from_record(Some(&value)).unwrap()
}

fn id_set(ids: &[NeuronId]) -> AHashSet<NeuronId> {
    ids.iter().copied().collect()
}

#[test]
fn diff_is_symmetric() {
    let a = record(
        &[("ALML", 80.0, 120.0), ("AVAL", 440.0, 160.0), ("DA1", 560.0, 520.0)],
        &[("ALML", "AVAL", "chemical", 8.0), ("AVAL", "DA1", "chemical", 12.0)],
    );
    let b = record(
        &[("ALML", 80.0, 120.0), ("AVBL", 520.0, 320.0), ("DB1", 560.0, 560.0)],
        &[("ALML", "AVBL", "chemical", 8.0)],
    );

    let ab = diff_circuits(&a, &b);
    let ba = diff_circuits(&b, &a);

    assert_eq!(id_set(&ab.added_neurons), id_set(&ba.removed_neurons));
    assert_eq!(id_set(&ab.removed_neurons), id_set(&ba.added_neurons));
    assert_eq!(id_set(&ab.common_neurons), id_set(&ba.common_neurons));
    assert_eq!(
        ab.added_connections.iter().collect::<AHashSet<_>>(),
        ba.removed_connections.iter().collect::<AHashSet<_>>(),
    );
    assert_eq!(
        ab.removed_connections.iter().collect::<AHashSet<_>>(),
        ba.added_connections.iter().collect::<AHashSet<_>>(),
    );
}

#[test]
fn self_diff_is_all_common() {
    let a = record(
        &[("ALML", 80.0, 120.0), ("AVAL", 440.0, 160.0)],
        &[("ALML", "AVAL", "chemical", 8.0)],
    );
    let diff = diff_circuits(&a, &a);

    assert!(diff.added_neurons.is_empty());
    assert!(diff.removed_neurons.is_empty());
    assert!(diff.added_connections.is_empty());
    assert!(diff.removed_connections.is_empty());
    assert_eq!(diff.common_neurons, vec![nid("ALML"), nid("AVAL")]);
    assert_eq!(
        diff.common_connections,
        vec![ConnectionKey::new(nid("ALML"), nid("AVAL"))]
    );
    assert!(diff.is_unchanged());
}

#[test]
fn absent_snapshots_are_empty_circuits() {
    // History compare against a snapshot that never got written.
    let absent = Circuit::from_record(None).unwrap();
    let current = record(&[("ALML", 80.0, 120.0)], &[]);

    let diff = diff_circuits_with_layout(&absent, &current);
    assert_eq!(diff.added_neurons, vec![nid("ALML")]);
    assert!(diff.removed_neurons.is_empty());
    assert!(diff.moved_neurons.is_empty());
}

#[test]
fn weight_change_is_surfaced_without_breaking_identity() {
    let a = record(
        &[("ALML", 80.0, 120.0), ("AVAL", 440.0, 160.0)],
        &[("ALML", "AVAL", "chemical", 8.0)],
    );
    let b = record(
        &[("ALML", 80.0, 120.0), ("AVAL", 440.0, 160.0)],
        &[("ALML", "AVAL", "chemical", 2.0)],
    );

    let diff = diff_circuits(&a, &b);
    assert_eq!(diff.common_connections.len(), 1);
    assert!(diff.added_connections.is_empty() && diff.removed_connections.is_empty());
    assert_eq!(diff.changed_connections.len(), 1);
    assert_eq!(diff.changed_connections[0].weight_b, 2.0);
}

#[test]
fn history_compare_detects_moves() {
    let a = record(&[("ALML", 80.0, 120.0), ("AVAL", 440.0, 160.0)], &[]);
    let b = record(&[("ALML", 83.0, 117.0), ("AVAL", 200.0, 160.0)], &[]);

    let diff = diff_circuits_with_layout(&a, &b);
    // ALML only nudged; AVAL genuinely moved.
    assert_eq!(diff.moved_neurons.len(), 1);
    assert_eq!(diff.moved_neurons[0].id, nid("AVAL"));

    // The plain variant never reports moves.
    assert!(diff_circuits(&a, &b).moved_neurons.is_empty());
}

#[test]
fn self_merge_is_idempotent() {
    let a = record(
        &[("ALML", 80.0, 120.0), ("AVAL", 440.0, 160.0)],
        &[("ALML", "AVAL", "chemical", 8.0)],
    );
    let merged = merge_circuits(&a, &a);

    assert_eq!(merged.neurons.len(), a.neurons.len());
    assert_eq!(merged.connections.len(), a.connections.len());
    assert!(merged.conflicts.is_empty());
    assert!(merged.neurons.iter().all(|n| n.origin == Origin::Both));
    assert!(merged.connections.iter().all(|c| c.origin == Origin::Both));
    for (merged_neuron, original) in merged.neurons.iter().zip(&a.neurons) {
        assert_eq!(merged_neuron.neuron, *original);
    }
}

#[test]
fn merge_reports_disagreements_and_keeps_a() {
    let a = record(
        &[("ALML", 80.0, 120.0), ("AVAL", 440.0, 160.0)],
        &[("ALML", "AVAL", "chemical", 8.0)],
    );
    let b = record(
        &[("ALML", 300.0, 300.0), ("DA1", 560.0, 520.0)],
        &[("ALML", "AVAL", "electrical", 8.0)],
    );
    let merged = merge_circuits(&a, &b);

    // Union of ids, provenance-tagged.
    let origins: Vec<(NeuronId, Origin)> = merged
        .neurons
        .iter()
        .map(|n| (n.neuron.id, n.origin))
        .collect();
    assert!(origins.contains(&(nid("ALML"), Origin::Both)));
    assert!(origins.contains(&(nid("AVAL"), Origin::A)));
    assert!(origins.contains(&(nid("DA1"), Origin::B)));

    // A's position and kind win; both disagreements are reported.
    let alml = merged
        .neurons
        .iter()
        .find(|n| n.neuron.id == nid("ALML"))
        .unwrap();
    assert_eq!(alml.neuron.position, Some(Position::new(80.0, 120.0)));
    assert_eq!(merged.connections[0].connection.kind, SynapseKind::Chemical);
    assert_eq!(merged.conflicts.len(), 2);
}
