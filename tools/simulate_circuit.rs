// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Circuit Simulation Tool

Runs one stimulus through a saved circuit record and prints the outcome.

Usage:
  cargo run --bin simulate_circuit -- <circuit.json> <stimulus>

Where <stimulus> is one of: touch_head, touch_tail, smell_food, none

Example:
  cargo run --bin simulate_circuit -- reflex_circuit.json touch_head
*/

use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use neuroworm::engine::ActivationEngine;
use neuroworm::structures::{Circuit, Stimulus};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 3 {
        eprintln!("Usage: {} <circuit.json> <stimulus>", args[0]);
        eprintln!("\nStimulus is one of: touch_head, touch_tail, smell_food, none");
        eprintln!("\nExample:");
        eprintln!("  {} reflex_circuit.json touch_head", args[0]);
        std::process::exit(1);
    }

    let circuit_path = &args[1];
    let stimulus_label = &args[2];

    let config = neuroworm::config::load_or_default();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.system.log_level.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if !Path::new(circuit_path).exists() {
        eprintln!("Error: circuit file '{}' not found", circuit_path);
        std::process::exit(1);
    }

    let stimulus = match Stimulus::from_str(stimulus_label) {
        Ok(stimulus) => stimulus,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let record_str = fs::read_to_string(circuit_path)?;
    let record: serde_json::Value = serde_json::from_str(&record_str)?;
    let circuit = Circuit::from_record(Some(&record))?;

    tracing::info!(
        neurons = circuit.neurons.len(),
        connections = circuit.connections.len(),
        %stimulus,
        "simulating circuit"
    );

    let engine = ActivationEngine::new(neuroworm::engine_settings(&config));
    let outcome = engine.simulate_circuit(&circuit, stimulus);

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
