//! # RYVOL Backend
//!
//! Backend abstraction, exact state-vector simulation, and basis
//! translation.
//!
//! ## Gantree Architecture
//!
//! ```text
//! ryvol_backend // L3: Backend
//!     NoiseModel // 노이즈 모델
//!     Statevector // 상태 벡터
//!     BackendTrait // 백엔드 인터페이스
//!     SimulatorBackend // 시뮬레이터
//!     Transpiler // 기저 변환
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use ryvol_backend::prelude::*;
//! use ryvol_core::CircuitBuilder;
//!
//! // Neutral-atom device: only rx, ry, cz run natively
//! let backend = SimulatorBackend::rydberg(2).with_seed(42);
//!
//! let mut circuit = CircuitBuilder::new(2).h(0).cnot(0, 1).build();
//! circuit.measure_all();
//!
//! let native = transpile(&circuit, &backend, true).unwrap();
//! let result = backend.execute(&native, 1000).unwrap();
//! assert_eq!(result.total_counts(), 1000);
//! ```
//!
//! ## Ideal Probabilities
//!
//! ```rust
//! use ryvol_backend::Statevector;
//! use ryvol_core::CircuitBuilder;
//!
//! let circuit = CircuitBuilder::new(2).h(0).cnot(0, 1).build();
//! let probs = Statevector::from_circuit(&circuit).unwrap().probabilities_dict();
//! assert_eq!(probs.len(), 2);
//! ```

#![warn(missing_docs)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Noise model (Gantree: L3_Backend → NoiseModel)
pub mod noise;

/// State-vector simulation (Gantree: L3_Backend → Statevector)
pub mod statevector;

/// Execution types and backend trait (Gantree: L3_Backend → BackendTrait)
pub mod execution;

/// Simulator backend (Gantree: L3_Backend → SimulatorBackend)
pub mod simulator;

/// Basis translation (Gantree: L3_Backend → Transpiler)
pub mod transpiler;

// ============================================================================
// Re-exports
// ============================================================================

pub use execution::{Backend, BackendConfiguration, ExecutionMetadata, ExecutionResult};
pub use noise::NoiseModel;
pub use simulator::SimulatorBackend;
pub use statevector::{Statevector, MAX_STATEVECTOR_QUBITS};
pub use transpiler::{transpile, Transpiler, TranspilerConfig};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! ```rust
    //! use ryvol_backend::prelude::*;
    //! ```

    pub use crate::execution::{Backend, BackendConfiguration, ExecutionResult};
    pub use crate::noise::NoiseModel;
    pub use crate::simulator::SimulatorBackend;
    pub use crate::statevector::Statevector;
    pub use crate::transpiler::{transpile, Transpiler, TranspilerConfig};
}

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use ryvol_core::CircuitBuilder;

    #[test]
    fn test_transpiled_run_matches_ideal() {
        let backend = SimulatorBackend::rydberg(3).with_seed(11);
        let circuit = CircuitBuilder::new(3)
            .h(0)
            .cnot(0, 1)
            .cnot(1, 2)
            .measure_all()
            .build();

        let native = transpile(&circuit, &backend, true).unwrap();
        let result = backend.execute(&native, 2000).unwrap();

        // GHZ: only 000 and 111
        assert!(result.counts.keys().all(|k| k == "000" || k == "111"));
        let p000 = result.probability("000");
        assert!(p000 > 0.4 && p000 < 0.6, "P(000) = {}", p000);
    }

    #[test]
    fn test_untranspiled_run_fails_on_rydberg() {
        let backend = SimulatorBackend::rydberg(2);
        let circuit = CircuitBuilder::new(2).cnot(0, 1).build();
        assert!(backend.execute(&circuit, 10).is_err());
    }

    #[test]
    fn test_batch_execution() {
        let backend = SimulatorBackend::ideal(2).with_seed(5);
        let circuits = vec![
            CircuitBuilder::new(1).x(0).build(),
            CircuitBuilder::new(2).x(1).build(),
        ];

        let results = backend.execute_batch(&circuits, 50).unwrap();
        assert_eq!(results[0].counts["1"], 50);
        assert_eq!(results[1].counts["10"], 50);
    }
}
