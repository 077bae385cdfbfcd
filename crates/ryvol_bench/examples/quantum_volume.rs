//! RYVOL Quantum Volume Demo
//!
//! Translates one model circuit into Rydberg drive pulses, then runs the
//! heavy-output test on an ideal neutral-atom simulator and on a noisy one.

use anyhow::Result;
use ryvol_backend::{transpile, Backend, SimulatorBackend};
use ryvol_bench::prelude::*;
use ryvol_pulse::{PulseConfig, PulseTranslator, RydbergSystem};

fn main() -> Result<()> {
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║                RYVOL Quantum Volume Demo                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let width = 3;
    let seed = 42u64;

    // =========================================================================
    // Part 1: Pulse translation
    // =========================================================================
    println!("═══════════════════════════════════════════════════════════════");
    println!("  PART 1: Model circuit → Rydberg pulses");
    println!("═══════════════════════════════════════════════════════════════\n");

    let device = SimulatorBackend::rydberg(width).with_seed(seed);
    let model = QvCircuitGenerator::with_seed(seed).generate(width)?;
    let native = transpile(&model, &device, true)?;

    println!(
        "  Model: {} gates ({} two-qubit) → native: {} gates ({} cz)",
        model.gate_count(),
        model.count_2q(),
        native.gate_count(),
        native.count_named("cz")
    );

    let translator = PulseTranslator::new(PulseConfig::default())?;
    let mut system = RydbergSystem::new(width);
    let instructions = translator.translate(&mut system, &native)?;

    println!("  Instructions: {}", instructions.len());
    for inst in instructions.iter().take(6) {
        println!("    {}", inst);
    }
    if instructions.len() > 6 {
        println!("    ... {} more", instructions.len() - 6);
    }
    println!(
        "  Sequential duration: {:.3} µs\n",
        system.total_duration() * 1e6
    );

    // =========================================================================
    // Part 2: Heavy-output test
    // =========================================================================
    println!("═══════════════════════════════════════════════════════════════");
    println!("  PART 2: Heavy-output test (width {})", width);
    println!("═══════════════════════════════════════════════════════════════\n");

    let config = QvConfig::new(width).with_shots(512).with_seed(seed);
    println!("{}", config);

    let noisy = SimulatorBackend::from_depol(width, 0.05)?
        .with_seed(seed)
        .with_name("noisy_simulator");

    let backends: [&dyn Backend; 2] = [&device, &noisy];
    let mut results = Vec::with_capacity(backends.len());
    for backend in backends {
        println!("▶ {}", backend.name());
        let result = QuantumVolume::new(config.clone())?.run(backend)?;
        println!("{}\n", result.summary());
        results.push(result);
    }

    println!("{}", QvReporter::report(&results, ReportFormat::Markdown));
    Ok(())
}
