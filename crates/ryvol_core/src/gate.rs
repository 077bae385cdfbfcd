//! Quantum gate definitions for RYVOL
//!
//! Gantree: L1_Circuit → Gate
//!
//! Gate enum covering the circuit-level operations that the transpiler,
//! the simulator and the pulse translation understand.

use crate::types::{Angle, QubitId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quantum gate enumeration
/// Gantree: Gate // 게이트 enum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    // ========================================================================
    // Single-Qubit Gates (Non-Parameterized)
    // ========================================================================
    /// Hadamard gate
    H(QubitId),

    /// Pauli-X gate (NOT)
    X(QubitId),

    /// Pauli-Y gate
    Y(QubitId),

    /// Pauli-Z gate
    Z(QubitId),

    /// S gate (sqrt(Z))
    S(QubitId),

    /// S-dagger gate (inverse of S)
    Sdg(QubitId),

    /// T gate (fourth root of Z)
    T(QubitId),

    /// T-dagger gate (inverse of T)
    Tdg(QubitId),

    /// SX gate (sqrt(X))
    Sx(QubitId),

    /// Identity gate (for padding/timing)
    Id(QubitId),

    // ========================================================================
    // Single-Qubit Parameterized Rotation Gates
    // ========================================================================
    /// Rotation around X-axis
    /// Gantree: Rx(QubitId, Angle) // X 회전
    Rx(QubitId, Angle),

    /// Rotation around Y-axis
    /// Gantree: Ry(QubitId, Angle) // Y 회전
    Ry(QubitId, Angle),

    /// Rotation around Z-axis
    Rz(QubitId, Angle),

    /// General single-qubit rotation U(θ, φ, λ)
    U(QubitId, Angle, Angle, Angle),

    /// Phase gate P(λ) = diag(1, e^{iλ})
    P(QubitId, Angle),

    // ========================================================================
    // Two-Qubit Gates
    // ========================================================================
    /// Controlled-NOT (CX)
    Cnot(QubitId, QubitId),

    /// Controlled-Z
    /// Gantree: CZ(QubitId, QubitId) // 제어-Z
    Cz(QubitId, QubitId),

    /// SWAP gate
    Swap(QubitId, QubitId),

    /// Controlled-Rx
    Crx(QubitId, QubitId, Angle),

    /// Controlled-Ry
    Cry(QubitId, QubitId, Angle),

    /// Controlled-Rz
    Crz(QubitId, QubitId, Angle),

    // ========================================================================
    // Measurement and Control
    // ========================================================================
    /// Single qubit measurement
    Measure(QubitId),

    /// Measure all qubits (convenience)
    MeasureAll,

    /// Barrier (for timing/visualization)
    Barrier(Vec<QubitId>),

    /// Reset qubit to |0⟩
    Reset(QubitId),
}

impl Gate {
    // ========================================================================
    // Gate Properties
    // ========================================================================

    /// Get qubits involved in this gate
    /// Gantree: qubits(&self) -> Vec<QubitId> // 관련 큐비트
    pub fn qubits(&self) -> Vec<QubitId> {
        match self {
            Gate::H(q)
            | Gate::X(q)
            | Gate::Y(q)
            | Gate::Z(q)
            | Gate::S(q)
            | Gate::Sdg(q)
            | Gate::T(q)
            | Gate::Tdg(q)
            | Gate::Sx(q)
            | Gate::Id(q)
            | Gate::Rx(q, _)
            | Gate::Ry(q, _)
            | Gate::Rz(q, _)
            | Gate::U(q, _, _, _)
            | Gate::P(q, _)
            | Gate::Measure(q)
            | Gate::Reset(q) => vec![*q],

            Gate::Cnot(c, t)
            | Gate::Cz(c, t)
            | Gate::Swap(c, t)
            | Gate::Crx(c, t, _)
            | Gate::Cry(c, t, _)
            | Gate::Crz(c, t, _) => vec![*c, *t],

            Gate::MeasureAll => vec![], // Applied to all qubits
            Gate::Barrier(qs) => qs.clone(),
        }
    }

    /// Get gate parameters (angles) in declaration order
    /// Gantree: params(&self) -> Vec<Angle> // 파라미터
    pub fn params(&self) -> Vec<Angle> {
        match self {
            Gate::Rx(_, a)
            | Gate::Ry(_, a)
            | Gate::Rz(_, a)
            | Gate::P(_, a)
            | Gate::Crx(_, _, a)
            | Gate::Cry(_, _, a)
            | Gate::Crz(_, _, a) => vec![*a],
            Gate::U(_, theta, phi, lambda) => vec![*theta, *phi, *lambda],
            _ => vec![],
        }
    }

    /// Check if gate is single-qubit (unitary)
    pub fn is_single_qubit(&self) -> bool {
        matches!(
            self,
            Gate::H(_)
                | Gate::X(_)
                | Gate::Y(_)
                | Gate::Z(_)
                | Gate::S(_)
                | Gate::Sdg(_)
                | Gate::T(_)
                | Gate::Tdg(_)
                | Gate::Sx(_)
                | Gate::Id(_)
                | Gate::Rx(_, _)
                | Gate::Ry(_, _)
                | Gate::Rz(_, _)
                | Gate::U(_, _, _, _)
                | Gate::P(_, _)
        )
    }

    /// Check if gate is two-qubit
    pub fn is_two_qubit(&self) -> bool {
        matches!(
            self,
            Gate::Cnot(_, _)
                | Gate::Cz(_, _)
                | Gate::Swap(_, _)
                | Gate::Crx(_, _, _)
                | Gate::Cry(_, _, _)
                | Gate::Crz(_, _, _)
        )
    }

    /// Check if gate is parameterized
    pub fn is_parameterized(&self) -> bool {
        !self.params().is_empty()
    }

    /// Check if gate is measurement
    pub fn is_measurement(&self) -> bool {
        matches!(self, Gate::Measure(_) | Gate::MeasureAll)
    }

    /// Check if gate is a barrier
    pub fn is_barrier(&self) -> bool {
        matches!(self, Gate::Barrier(_))
    }

    /// Get gate name (OpenQASM mnemonic)
    pub fn name(&self) -> &'static str {
        match self {
            Gate::H(_) => "h",
            Gate::X(_) => "x",
            Gate::Y(_) => "y",
            Gate::Z(_) => "z",
            Gate::S(_) => "s",
            Gate::Sdg(_) => "sdg",
            Gate::T(_) => "t",
            Gate::Tdg(_) => "tdg",
            Gate::Sx(_) => "sx",
            Gate::Id(_) => "id",
            Gate::Rx(_, _) => "rx",
            Gate::Ry(_, _) => "ry",
            Gate::Rz(_, _) => "rz",
            Gate::U(_, _, _, _) => "u",
            Gate::P(_, _) => "p",
            Gate::Cnot(_, _) => "cx",
            Gate::Cz(_, _) => "cz",
            Gate::Swap(_, _) => "swap",
            Gate::Crx(_, _, _) => "crx",
            Gate::Cry(_, _, _) => "cry",
            Gate::Crz(_, _, _) => "crz",
            Gate::Measure(_) | Gate::MeasureAll => "measure",
            Gate::Barrier(_) => "barrier",
            Gate::Reset(_) => "reset",
        }
    }

    /// Convert to OpenQASM 2.0 string
    /// Gantree: to_qasm(&self) -> String // QASM 변환
    pub fn to_qasm(&self) -> String {
        match self {
            Gate::Rx(q, a) | Gate::Ry(q, a) | Gate::Rz(q, a) | Gate::P(q, a) => {
                format!("{}({}) q[{}];", self.name(), a, q)
            }
            Gate::U(q, theta, phi, lambda) => {
                format!("u({},{},{}) q[{}];", theta, phi, lambda, q)
            }
            Gate::Cnot(c, t) | Gate::Cz(c, t) | Gate::Swap(c, t) => {
                format!("{} q[{}],q[{}];", self.name(), c, t)
            }
            Gate::Crx(c, t, a) | Gate::Cry(c, t, a) | Gate::Crz(c, t, a) => {
                format!("{}({}) q[{}],q[{}];", self.name(), a, c, t)
            }
            Gate::Measure(q) => format!("measure q[{}] -> c[{}];", q, q),
            Gate::MeasureAll => "measure q -> c;".to_string(),
            Gate::Barrier(qs) => {
                if qs.is_empty() {
                    "barrier q;".to_string()
                } else {
                    let qubits: Vec<String> = qs.iter().map(|q| format!("q[{}]", q)).collect();
                    format!("barrier {};", qubits.join(","))
                }
            }
            // Remaining single-qubit gates share one shape
            other => {
                let qubits = other.qubits();
                format!("{} q[{}];", other.name(), qubits[0])
            }
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_qasm())
    }
}

// ============================================================================
// Tests
// ============================================================================
