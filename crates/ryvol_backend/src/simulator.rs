//! Simulator backend for RYVOL
//!
//! Gantree: L3_Backend → SimulatorBackend
//!
//! Noise-free runs sample one exact state vector. With a noise model each
//! shot is its own trajectory with stochastic Pauli and readout errors.

use crate::execution::{Backend, BackendConfiguration, ExecutionMetadata, ExecutionResult};
use crate::noise::NoiseModel;
use crate::statevector::Statevector;
use log::debug;
use rand::prelude::*;
use rand::rngs::StdRng;
use ryvol_core::{Circuit, Counts, Gate, RyvolError, RyvolResult};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Simulator backend with noise model
/// Gantree: SimulatorBackend // 시뮬레이터 구현
pub struct SimulatorBackend {
    configuration: BackendConfiguration,
    noise_model: NoiseModel,
    seed: Option<u64>,
    // executions so far; offsets the seed so each run draws fresh samples
    calls: AtomicU64,
}

impl SimulatorBackend {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create new simulator backend
    pub fn new(configuration: BackendConfiguration, noise_model: NoiseModel) -> Self {
        Self {
            configuration,
            noise_model,
            seed: None,
            calls: AtomicU64::new(0),
        }
    }

    /// Create ideal (noiseless) simulator accepting every gate
    pub fn ideal(num_qubits: usize) -> Self {
        Self::new(BackendConfiguration::all_to_all(num_qubits), NoiseModel::ideal())
    }

    /// Ideal neutral-atom array that only runs `rx`, `ry`, `cz`
    pub fn rydberg(num_atoms: usize) -> Self {
        Self::new(BackendConfiguration::rydberg(num_atoms), NoiseModel::ideal())
    }

    /// Create from depolarizing error rate
    pub fn from_depol(num_qubits: usize, p_depol: f64) -> RyvolResult<Self> {
        let noise_model = NoiseModel::from_depol(p_depol)?;
        Ok(Self::new(
            BackendConfiguration::all_to_all(num_qubits),
            noise_model,
        ))
    }

    /// Set seed for reproducibility
    ///
    /// Execution `k` on this backend uses `seed + k`, so a fresh backend with
    /// the same seed replays the same sequence of runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self.calls = AtomicU64::new(0);
        self
    }

    /// Replace the noise model
    pub fn with_noise(mut self, noise_model: NoiseModel) -> Self {
        self.noise_model = noise_model;
        self
    }

    /// Set backend name
    pub fn with_name(mut self, name: &str) -> Self {
        self.configuration.name = name.to_string();
        self
    }

    /// Active noise model
    pub fn noise_model(&self) -> &NoiseModel {
        &self.noise_model
    }

    // ========================================================================
    // Validation
    // ========================================================================

    fn validate(&self, circuit: &Circuit, shots: u64) -> RyvolResult<()> {
        if circuit.num_qubits() > self.configuration.num_qubits {
            return Err(RyvolError::QubitOutOfRange {
                qubit: circuit.num_qubits(),
                max: self.configuration.num_qubits,
            });
        }
        if shots == 0 || shots > self.max_shots() {
            return Err(RyvolError::ShotsOutOfRange(shots, 1, self.max_shots()));
        }
        if let Some(gate) = circuit
            .gates()
            .iter()
            .find(|g| !self.configuration.supports(g.name()))
        {
            return Err(RyvolError::UnsupportedGate {
                gate: gate.name().to_string(),
                basis: self.configuration.basis_gates.join(", "),
            });
        }
        Ok(())
    }

    // ========================================================================
    // Simulation
    // ========================================================================

    /// Simulate circuit and return counts
    fn simulate(&self, circuit: &Circuit, shots: u64, rng: &mut StdRng) -> RyvolResult<Counts> {
        if self.noise_model.is_ideal() {
            let state = Statevector::from_circuit(circuit)?;
            return Ok(state.sample_counts(shots, rng));
        }

        let mut counts: Counts = HashMap::new();
        for _ in 0..shots {
            let bitstring = self.simulate_single_shot(circuit, rng)?;
            *counts.entry(bitstring).or_insert(0) += 1;
        }
        Ok(counts)
    }

    /// Simulate a single noisy trajectory
    fn simulate_single_shot(&self, circuit: &Circuit, rng: &mut StdRng) -> RyvolResult<String> {
        let mut state = Statevector::new(circuit.num_qubits())?;

        for gate in circuit.gates() {
            state.apply_gate(gate)?;

            let error_rate = if gate.is_two_qubit() {
                self.noise_model.gate_error_2q()
            } else if gate.is_single_qubit() {
                self.noise_model.gate_error_1q()
            } else {
                0.0
            };
            if error_rate > 0.0 && rng.gen::<f64>() < error_rate {
                apply_random_pauli(&mut state, gate, rng)?;
            }
        }

        let mut outcome = state.sample_index(rng);
        let readout_error = self.noise_model.readout_error();
        if readout_error > 0.0 {
            for bit in 0..circuit.num_qubits() {
                if rng.gen::<f64>() < readout_error {
                    outcome ^= 1 << bit;
                }
            }
        }

        Ok(state.bitstring(outcome))
    }
}

/// Random X, Y or Z on one of the gate's qubits
fn apply_random_pauli(state: &mut Statevector, gate: &Gate, rng: &mut StdRng) -> RyvolResult<()> {
    let qubits = gate.qubits();
    let Some(&q) = qubits.choose(rng) else {
        return Ok(());
    };
    let pauli = match rng.gen_range(0..3) {
        0 => Gate::X(q),
        1 => Gate::Y(q),
        _ => Gate::Z(q),
    };
    state.apply_gate(&pauli)
}

impl Backend for SimulatorBackend {
    fn name(&self) -> &str {
        &self.configuration.name
    }

    fn configuration(&self) -> &BackendConfiguration {
        &self.configuration
    }

    fn execute(&self, circuit: &Circuit, shots: u64) -> RyvolResult<ExecutionResult> {
        self.validate(circuit, shots)?;

        let call = self.calls.fetch_add(1, Ordering::Relaxed);
        let run_seed = self.seed.map(|seed| seed.wrapping_add(call));
        let mut rng = match run_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let start = Instant::now();
        let counts = self.simulate(circuit, shots, &mut rng)?;
        let elapsed_ms = start.elapsed().as_millis() as u64;
        debug!(
            "{}: {} shots on {} qubits in {} ms",
            self.configuration.name,
            shots,
            circuit.num_qubits(),
            elapsed_ms
        );

        Ok(ExecutionResult {
            counts,
            shots,
            metadata: ExecutionMetadata {
                backend: self.configuration.name.clone(),
                execution_time_ms: Some(elapsed_ms),
                simulated: true,
                seed: run_seed,
                ..Default::default()
            },
        })
    }

    fn is_simulator(&self) -> bool {
        true
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ryvol_core::CircuitBuilder;
    use std::f64::consts::PI;

    #[test]
    fn test_simulator_ideal() {
        let backend = SimulatorBackend::ideal(3).with_seed(42);

        // Bell state circuit
        let circuit = CircuitBuilder::new(2).h(0).cnot(0, 1).measure_all().build();
        let result = backend.execute(&circuit, 1000).unwrap();

        let p00 = result.probability("00");
        let p11 = result.probability("11");
        assert!(p00 > 0.4 && p00 < 0.6, "P(00) = {}", p00);
        assert!(p11 > 0.4 && p11 < 0.6, "P(11) = {}", p11);
        assert_eq!(result.total_counts(), 1000);
    }

    #[test]
    fn test_simulator_noisy() {
        let backend = SimulatorBackend::from_depol(3, 0.01).unwrap().with_seed(42);

        let circuit = CircuitBuilder::new(2).h(0).cnot(0, 1).build();
        let result = backend.execute(&circuit, 1000).unwrap();

        // With noise, should still see mostly |00⟩ and |11⟩
        let p00 = result.probability("00");
        let p11 = result.probability("11");
        assert!(p00 + p11 > 0.8, "P(00)+P(11) = {}", p00 + p11);
    }

    #[test]
    fn test_readout_noise_only() {
        let noise = NoiseModel::ideal().with_readout_error(0.5);
        let backend = SimulatorBackend::ideal(1).with_noise(noise).with_seed(3);

        let result = backend.execute(&Circuit::new(1), 2000).unwrap();
        let p1 = result.probability("1");
        assert!(p1 > 0.4 && p1 < 0.6, "P(1) = {}", p1);
    }

    #[test]
    fn test_rydberg_rejects_non_native_gates() {
        let backend = SimulatorBackend::rydberg(2);

        let circuit = CircuitBuilder::new(2).h(0).build();
        assert!(matches!(
            backend.execute(&circuit, 10),
            Err(RyvolError::UnsupportedGate { .. })
        ));

        let circuit = CircuitBuilder::new(2)
            .ry(0, PI / 2.0)
            .rx(0, PI)
            .cz(0, 1)
            .measure_all()
            .build();
        assert!(backend.execute(&circuit, 10).is_ok());
    }

    #[test]
    fn test_limits() {
        let backend = SimulatorBackend::ideal(3);

        let circuit = CircuitBuilder::new(5).build();
        assert!(matches!(
            backend.execute(&circuit, 100),
            Err(RyvolError::QubitOutOfRange { qubit: 5, max: 3 })
        ));

        let circuit = CircuitBuilder::new(2).build();
        assert!(matches!(
            backend.execute(&circuit, 0),
            Err(RyvolError::ShotsOutOfRange(0, 1, _))
        ));
    }

    #[test]
    fn test_seed_reproducibility() {
        let backend1 = SimulatorBackend::from_depol(3, 0.02).unwrap().with_seed(42);
        let backend2 = SimulatorBackend::from_depol(3, 0.02).unwrap().with_seed(42);

        let circuit = CircuitBuilder::new(3).h(0).cnot(0, 1).cnot(1, 2).build();

        let result1 = backend1.execute(&circuit, 100).unwrap();
        let result2 = backend2.execute(&circuit, 100).unwrap();
        assert_eq!(result1.counts, result2.counts);
        assert_eq!(result1.metadata.seed, Some(42));
    }

    #[test]
    fn test_repeated_runs_draw_fresh_samples() {
        let circuit = CircuitBuilder::new(4).h(0).h(1).h(2).h(3).build();

        let backend = SimulatorBackend::ideal(4).with_seed(42);
        let first = backend.execute(&circuit, 200).unwrap();
        let second = backend.execute(&circuit, 200).unwrap();
        assert_ne!(first.counts, second.counts);
        assert_eq!(second.metadata.seed, Some(43));

        // a fresh backend replays the same sequence
        let replay = SimulatorBackend::ideal(4).with_seed(42);
        assert_eq!(replay.execute(&circuit, 200).unwrap().counts, first.counts);
        assert_eq!(replay.execute(&circuit, 200).unwrap().counts, second.counts);
    }
}
