// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Behavior readout
//!
//! After propagation, the final active set is inspected against fixed
//! motor-neuron class tables. The priority order is part of the contract:
//! simultaneous forward+backward drive is `Curl`, not an ambiguity - but a
//! co-active head motor claims the tie first.

use ahash::AHashSet;
use neuroworm_structures::{Behavior, NeuronId};

/// A-class motor neurons: backward locomotion.
const BACKWARD_CLASS: &[&str] = &["DA1", "DA2", "VA1", "VA2"];

/// B-class motor neurons: forward locomotion.
const FORWARD_CLASS: &[&str] = &["DB1", "DB2", "VB1", "VB2"];

/// Head/neck motor neurons.
const HEAD_CLASS: &[&str] = &["RMDL", "RMDR", "SMDDL", "SMDDR", "SMDVL", "SMDVR"];

fn any_active(active: &AHashSet<NeuronId>, class: &[&str]) -> bool {
    active.iter().any(|id| class.contains(&id.as_str()))
}

/// Classify the final active set into a behavior.
///
/// Priority order:
/// 1. backward motors only -> `MoveBackward`
/// 2. forward motors only -> `MoveForward`
/// 3. any head motor -> `HeadWiggle`
/// 4. forward AND backward motors -> `Curl`
/// 5. otherwise -> `NoMovement`
pub fn classify_behavior(active: &AHashSet<NeuronId>) -> Behavior {
    let backward = any_active(active, BACKWARD_CLASS);
    let forward = any_active(active, FORWARD_CLASS);
    let head = any_active(active, HEAD_CLASS);

    if backward && !forward {
        Behavior::MoveBackward
    } else if forward && !backward {
        Behavior::MoveForward
    } else if head {
        Behavior::HeadWiggle
    } else if forward && backward {
        Behavior::Curl
    } else {
        Behavior::NoMovement
    }
}
