// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Race speed heuristic
//!
//! Maps circuit complexity to the scalar speed used by the race animation.
//! Shares the circuit data shapes but is independent of the activation
//! engine - a racing worm is scored on wiring effort, not on whether the
//! wiring does anything sensible.

const BASE_SPEED: f32 = 1.0;
const PER_NEURON: f32 = 0.05;
const PER_CONNECTION: f32 = 0.15;
const MIN_SPEED: f32 = 0.5;
const MAX_SPEED: f32 = 5.0;

/// Animation speed for a circuit with the given element counts.
pub fn race_speed(neuron_count: usize, connection_count: usize) -> f32 {
    let speed =
        BASE_SPEED + neuron_count as f32 * PER_NEURON + connection_count as f32 * PER_CONNECTION;
    speed.clamp(MIN_SPEED, MAX_SPEED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_circuit_crawls_at_base_speed() {
        assert_eq!(race_speed(0, 0), BASE_SPEED);
    }

    #[test]
    fn more_wiring_is_faster() {
        assert!(race_speed(5, 4) > race_speed(3, 2));
    }

    #[test]
    fn speed_is_capped() {
        assert_eq!(race_speed(500, 500), MAX_SPEED);
    }
}
