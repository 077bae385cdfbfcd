//! Circuit builder for RYVOL
//!
//! Gantree: L1_Circuit → CircuitBuilder
//!
//! Fluent construction of circuits. Out-of-range qubits are recorded and
//! reported by `build_validated`; `build` drops them silently.

use crate::circuit::Circuit;
use crate::error::{RyvolError, RyvolResult};
use crate::gate::Gate;
use crate::types::{Angle, QubitId};

/// Fluent circuit builder (consuming self pattern)
/// Gantree: CircuitBuilder // 빌더 패턴
pub struct CircuitBuilder {
    circuit: Circuit,

    /// First rejected gate, if any
    error: Option<RyvolError>,
}

impl CircuitBuilder {
    // ========================================================================
    // Constructor
    // ========================================================================

    /// Create a new circuit builder
    pub fn new(num_qubits: usize) -> Self {
        Self {
            circuit: Circuit::new(num_qubits),
            error: None,
        }
    }

    /// Create with circuit name
    pub fn with_name(num_qubits: usize, name: impl Into<String>) -> Self {
        Self {
            circuit: Circuit::with_name(num_qubits, name),
            error: None,
        }
    }

    /// Append any gate
    /// Gantree: gate(self, Gate) -> Self // 게이트 추가
    pub fn gate(mut self, gate: Gate) -> Self {
        if let Err(e) = self.circuit.add_gate(gate) {
            self.error.get_or_insert(e);
        }
        self
    }

    // ========================================================================
    // Single-Qubit Gates
    // ========================================================================

    /// Add Hadamard gate
    pub fn h(self, qubit: QubitId) -> Self {
        self.gate(Gate::H(qubit))
    }

    /// Add Pauli-X gate
    pub fn x(self, qubit: QubitId) -> Self {
        self.gate(Gate::X(qubit))
    }

    /// Add Pauli-Y gate
    pub fn y(self, qubit: QubitId) -> Self {
        self.gate(Gate::Y(qubit))
    }

    /// Add Pauli-Z gate
    pub fn z(self, qubit: QubitId) -> Self {
        self.gate(Gate::Z(qubit))
    }

    /// Add S gate
    pub fn s(self, qubit: QubitId) -> Self {
        self.gate(Gate::S(qubit))
    }

    /// Add T gate
    pub fn t(self, qubit: QubitId) -> Self {
        self.gate(Gate::T(qubit))
    }

    /// Add SX gate
    pub fn sx(self, qubit: QubitId) -> Self {
        self.gate(Gate::Sx(qubit))
    }

    // ========================================================================
    // Rotations
    // ========================================================================

    /// Add Rx rotation
    /// Gantree: rx(self, q, θ) -> Self // Rx 추가
    pub fn rx(self, qubit: QubitId, angle: Angle) -> Self {
        self.gate(Gate::Rx(qubit, angle))
    }

    /// Add Ry rotation
    /// Gantree: ry(self, q, θ) -> Self // Ry 추가
    pub fn ry(self, qubit: QubitId, angle: Angle) -> Self {
        self.gate(Gate::Ry(qubit, angle))
    }

    /// Add Rz rotation
    pub fn rz(self, qubit: QubitId, angle: Angle) -> Self {
        self.gate(Gate::Rz(qubit, angle))
    }

    /// Add U(θ, φ, λ)
    pub fn u(self, qubit: QubitId, theta: Angle, phi: Angle, lambda: Angle) -> Self {
        self.gate(Gate::U(qubit, theta, phi, lambda))
    }

    /// Add phase gate
    pub fn p(self, qubit: QubitId, lambda: Angle) -> Self {
        self.gate(Gate::P(qubit, lambda))
    }

    // ========================================================================
    // Two-Qubit Gates
    // ========================================================================

    /// Add CNOT gate
    pub fn cnot(self, control: QubitId, target: QubitId) -> Self {
        self.gate(Gate::Cnot(control, target))
    }

    /// Add CX gate (alias for CNOT)
    pub fn cx(self, control: QubitId, target: QubitId) -> Self {
        self.cnot(control, target)
    }

    /// Add CZ gate
    /// Gantree: cz(self, a, b) -> Self // CZ 추가
    pub fn cz(self, control: QubitId, target: QubitId) -> Self {
        self.gate(Gate::Cz(control, target))
    }

    /// Add SWAP gate
    pub fn swap(self, qubit1: QubitId, qubit2: QubitId) -> Self {
        self.gate(Gate::Swap(qubit1, qubit2))
    }

    /// Add controlled-Rx
    pub fn crx(self, control: QubitId, target: QubitId, angle: Angle) -> Self {
        self.gate(Gate::Crx(control, target, angle))
    }

    /// Add controlled-Ry
    pub fn cry(self, control: QubitId, target: QubitId, angle: Angle) -> Self {
        self.gate(Gate::Cry(control, target, angle))
    }

    /// Add controlled-Rz
    pub fn crz(self, control: QubitId, target: QubitId, angle: Angle) -> Self {
        self.gate(Gate::Crz(control, target, angle))
    }

    // ========================================================================
    // Measurement and Control
    // ========================================================================

    /// Add single-qubit measurement
    pub fn measure(self, qubit: QubitId) -> Self {
        self.gate(Gate::Measure(qubit))
    }

    /// Barrier plus measurement on every qubit
    pub fn measure_all(mut self) -> Self {
        self.circuit.measure_all();
        self
    }

    /// Barrier across all qubits
    pub fn barrier(self) -> Self {
        let all = (0..self.circuit.num_qubits()).collect();
        self.gate(Gate::Barrier(all))
    }

    /// Add reset
    pub fn reset(self, qubit: QubitId) -> Self {
        self.gate(Gate::Reset(qubit))
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build and return the circuit
    pub fn build(self) -> Circuit {
        self.circuit
    }

    /// Build, failing on an empty circuit or any rejected gate
    pub fn build_validated(self) -> RyvolResult<Circuit> {
        if let Some(e) = self.error {
            return Err(e);
        }
        if self.circuit.is_empty() {
            return Err(RyvolError::EmptyCircuit);
        }
        Ok(self.circuit)
    }

    /// Get reference to current circuit state
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// Get number of qubits
    pub fn num_qubits(&self) -> usize {
        self.circuit.num_qubits()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_basic() {
        let circuit = CircuitBuilder::new(2)
            .rx(0, 0.5)
            .ry(1, -0.25)
            .cz(0, 1)
            .measure_all()
            .build();

        // 3 gates + barrier + 2 measures
        assert_eq!(circuit.gate_count(), 6);
        assert_eq!(circuit.count_2q(), 1);
    }

    #[test]
    fn test_build_validated_reports_bad_qubit() {
        let result = CircuitBuilder::new(2).h(0).cz(1, 7).build_validated();
        assert_eq!(
            result,
            Err(RyvolError::GateQubitMismatch {
                qubit: 7,
                num_qubits: 2
            })
        );
    }

    #[test]
    fn test_build_validated_empty() {
        assert_eq!(
            CircuitBuilder::new(3).build_validated(),
            Err(RyvolError::EmptyCircuit)
        );
    }
}
