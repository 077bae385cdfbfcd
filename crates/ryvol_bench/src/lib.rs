//! # RYVOL Bench
//!
//! Quantum volume heavy-output test against any [`ryvol_backend::Backend`].
//!
//! ## Gantree Architecture
//!
//! ```text
//! ryvol_bench // L4: Benchmark
//!     QvConfig // 실행 설정
//!     Generators // 모델 회로
//!     QuantumVolume // 무거운 출력 검정
//!     Reporter // 리포트
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use ryvol_backend::SimulatorBackend;
//! use ryvol_bench::prelude::*;
//!
//! let backend = SimulatorBackend::rydberg(2).with_seed(1);
//! let config = QvConfig::new(2).with_circuits(5).with_shots(64).with_seed(3);
//!
//! let result = QuantumVolume::new(config).unwrap().run(&backend).unwrap();
//! println!("{}", result.summary());
//! ```
//!
//! ## Threshold Test
//!
//! ```rust
//! use ryvol_bench::{check_threshold, heavy_outputs};
//! use std::collections::HashMap;
//!
//! let mut counts = HashMap::new();
//! counts.insert("0".to_string(), 10u64);
//! counts.insert("1".to_string(), 90u64);
//! assert_eq!(heavy_outputs(&counts), vec!["1".to_string()]);
//!
//! assert!(check_threshold(100 * 1024, 100, 1024));
//! assert!(!check_threshold(0, 100, 1024));
//! ```

#![warn(missing_docs)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Run configuration (Gantree: L4_Benchmark → QvConfig)
pub mod config;

/// Model circuit generation (Gantree: L4_Benchmark → Generators)
pub mod generators;

/// Heavy-output test (Gantree: L4_Benchmark → QuantumVolume)
pub mod qv;

/// Result reporting (Gantree: L4_Benchmark → Reporter)
pub mod reporter;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::QvConfig;
pub use generators::QvCircuitGenerator;
pub use qv::{
    achieved_volume, check_threshold, heavy_output_percentage, heavy_outputs,
    ideal_probabilities, quantum_volume, run_sweep, QuantumVolume, QvCircuitResult, QvResult,
};
pub use reporter::{QvReporter, ReportFormat};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Prelude module for convenient imports

    pub use crate::config::QvConfig;
    pub use crate::generators::QvCircuitGenerator;
    pub use crate::qv::{check_threshold, heavy_outputs, quantum_volume, QuantumVolume, QvResult};
    pub use crate::reporter::{QvReporter, ReportFormat};
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use ryvol_backend::{transpile, SimulatorBackend};
    use ryvol_pulse::{create_instructions, RydbergSystem};

    #[test]
    fn test_free_function_passes_on_ideal_device() {
        let backend = SimulatorBackend::rydberg(3).with_seed(17);
        let passed = quantum_volume(&backend, 3, 150, 100, true).unwrap();
        assert!(passed);
    }

    #[test]
    fn test_free_function_rejects_bad_arguments() {
        let backend = SimulatorBackend::ideal(3);
        assert!(quantum_volume(&backend, 3, 0, 100, true).is_err());
        assert!(quantum_volume(&backend, 3, 10, 0, true).is_err());
    }

    #[test]
    fn test_model_circuit_translates_to_pulses() {
        let backend = SimulatorBackend::rydberg(3);
        let model = QvCircuitGenerator::with_seed(8).generate(3).unwrap();
        let native = transpile(&model, &backend, true).unwrap();

        let mut system = RydbergSystem::new(3);
        let instructions = create_instructions(&mut system, &native, 2e6).unwrap();

        // every native gate becomes at least one pulse, cz becomes three
        let expected = native.count_named("rx") + native.count_named("ry") + 3 * native.count_named("cz");
        assert_eq!(instructions.len(), expected);
        assert_eq!(system.len(), expected);
        assert!(system.total_duration() > 0.0);
    }

    #[test]
    fn test_report_after_run() {
        let backend = SimulatorBackend::ideal(2).with_seed(4);
        let config = QvConfig::new(2).with_circuits(4).with_shots(32).with_seed(9);
        let result = QuantumVolume::new(config).unwrap().run(&backend).unwrap();

        let report = QvReporter::report(&[result], ReportFormat::Markdown);
        assert!(report.contains("| 2 | 4 | 4 | 32 |"));
    }
}
