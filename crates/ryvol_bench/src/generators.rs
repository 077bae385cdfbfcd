//! Quantum volume model circuits
//!
//! Gantree: L4_Benchmark → Generators
//!
//! A model circuit of width `n` has `n` layers. Each layer shuffles the
//! qubits, pairs them off, and applies an independent random two-qubit
//! unitary to every pair; with odd `n` one qubit idles per layer.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use ryvol_core::{Circuit, Gate, QubitId, RyvolResult};
use std::f64::consts::PI;

/// Seeded generator of model circuits
/// Gantree: QvCircuitGenerator // QV 회로 생성기
pub struct QvCircuitGenerator {
    rng: ChaCha8Rng,
}

impl QvCircuitGenerator {
    /// Create generator; `None` seeds from entropy
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self { rng }
    }

    /// Create generator with seed
    pub fn with_seed(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    /// Square model circuit (depth = width), no measurements
    /// Gantree: generate(n) -> Circuit // 모델 회로
    pub fn generate(&mut self, num_qubits: usize) -> RyvolResult<Circuit> {
        self.generate_with_depth(num_qubits, num_qubits)
    }

    /// Model circuit with an explicit number of layers
    pub fn generate_with_depth(&mut self, num_qubits: usize, depth: usize) -> RyvolResult<Circuit> {
        let mut circuit = Circuit::with_name(num_qubits, format!("quantum_volume_{}", num_qubits));
        let mut order: Vec<QubitId> = (0..num_qubits).collect();

        for _ in 0..depth {
            order.shuffle(&mut self.rng);
            for pair in order.chunks_exact(2) {
                let block = self.random_su4(pair[0], pair[1]);
                circuit.add_gates(block)?;
            }
        }

        Ok(circuit)
    }

    /// `count` independent square model circuits
    pub fn generate_batch(&mut self, num_qubits: usize, count: usize) -> RyvolResult<Vec<Circuit>> {
        (0..count).map(|_| self.generate(num_qubits)).collect()
    }

    /// Random two-qubit unitary as local layers around a 3-CNOT core
    fn random_su4(&mut self, a: QubitId, b: QubitId) -> Vec<Gate> {
        let mut gates = Vec::with_capacity(11);
        gates.push(self.random_u(a));
        gates.push(self.random_u(b));

        // canonical (non-local) part
        gates.push(Gate::Cnot(b, a));
        gates.push(Gate::Rz(a, self.rng.gen_range(0.0..2.0 * PI)));
        gates.push(Gate::Ry(b, self.rng.gen_range(0.0..2.0 * PI)));
        gates.push(Gate::Cnot(a, b));
        gates.push(Gate::Ry(b, self.rng.gen_range(0.0..2.0 * PI)));
        gates.push(Gate::Cnot(b, a));

        gates.push(self.random_u(a));
        gates.push(self.random_u(b));
        gates
    }

    /// Haar-random single-qubit gate
    fn random_u(&mut self, q: QubitId) -> Gate {
        let theta = (1.0 - 2.0 * self.rng.gen::<f64>()).acos();
        let phi = self.rng.gen_range(0.0..2.0 * PI);
        let lambda = self.rng.gen_range(0.0..2.0 * PI);
        Gate::U(q, theta, phi, lambda)
    }
}

// ============================================================================
// Tests
// ============================================================================
