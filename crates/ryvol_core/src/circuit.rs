//! Quantum circuit structure for RYVOL
//!
//! Gantree: L1_Circuit → Circuit
//!
//! Ordered gate list over a fixed qubit register. Consumed by the pulse
//! translation loop, the state-vector simulator and the transpiler.

use crate::error::{RyvolError, RyvolResult};
use crate::gate::Gate;
use crate::types::QubitId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quantum circuit
/// Gantree: Circuit // 회로 구조체
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Number of qubits
    num_qubits: usize,

    /// Gate sequence
    gates: Vec<Gate>,

    /// Optional circuit name
    name: Option<String>,
}

impl Circuit {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a new empty circuit
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            gates: Vec::new(),
            name: None,
        }
    }

    /// Create a circuit with a name
    pub fn with_name(num_qubits: usize, name: impl Into<String>) -> Self {
        Self {
            num_qubits,
            gates: Vec::new(),
            name: Some(name.into()),
        }
    }

    /// Create from a vector of gates
    pub fn from_gates(num_qubits: usize, gates: Vec<Gate>) -> RyvolResult<Self> {
        let mut circuit = Self::new(num_qubits);
        circuit.add_gates(gates)?;
        Ok(circuit)
    }

    // ========================================================================
    // Basic Operations
    // ========================================================================

    /// Add a gate to the circuit
    /// Gantree: add_gate(&mut, Gate) -> Result // 게이트 추가
    pub fn add_gate(&mut self, gate: Gate) -> RyvolResult<()> {
        for &qubit in &gate.qubits() {
            if qubit >= self.num_qubits {
                return Err(RyvolError::GateQubitMismatch {
                    qubit,
                    num_qubits: self.num_qubits,
                });
            }
        }
        self.gates.push(gate);
        Ok(())
    }

    /// Add multiple gates
    pub fn add_gates(&mut self, gates: impl IntoIterator<Item = Gate>) -> RyvolResult<()> {
        for gate in gates {
            self.add_gate(gate)?;
        }
        Ok(())
    }

    /// Get number of qubits
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get gates
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Get circuit name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set circuit name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Check if circuit is empty
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    // ========================================================================
    // Measurement Handling
    // ========================================================================

    /// Append a full-register barrier followed by a measurement on every qubit
    /// Gantree: measure_all(&mut) // 전체 측정
    pub fn measure_all(&mut self) {
        self.gates
            .push(Gate::Barrier((0..self.num_qubits).collect()));
        self.gates
            .extend((0..self.num_qubits).map(Gate::Measure));
    }

    /// Copy of the circuit with trailing measurements and barriers stripped
    /// Gantree: remove_final_measurements(&self) -> Circuit // 최종 측정 제거
    pub fn remove_final_measurements(&self) -> Circuit {
        let keep = self
            .gates
            .iter()
            .rposition(|g| !(g.is_measurement() || g.is_barrier()))
            .map_or(0, |i| i + 1);

        Circuit {
            num_qubits: self.num_qubits,
            gates: self.gates[..keep].to_vec(),
            name: self.name.clone(),
        }
    }

    /// Whether any measurement is present
    pub fn has_measurements(&self) -> bool {
        self.gates.iter().any(|g| g.is_measurement())
    }

    // ========================================================================
    // Circuit Analysis
    // ========================================================================

    /// Calculate circuit depth (longest path)
    /// Gantree: depth(&self) -> usize // 깊이 계산
    pub fn depth(&self) -> usize {
        let mut qubit_depths = vec![0usize; self.num_qubits];

        for gate in &self.gates {
            if gate.is_barrier() {
                continue;
            }
            let qubits = gate.qubits();
            if qubits.is_empty() {
                // MeasureAll
                let max_depth = qubit_depths.iter().copied().max().unwrap_or(0);
                qubit_depths.iter_mut().for_each(|d| *d = max_depth + 1);
            } else {
                let max_depth = qubits
                    .iter()
                    .filter_map(|&q| qubit_depths.get(q))
                    .max()
                    .copied()
                    .unwrap_or(0);
                for &q in &qubits {
                    qubit_depths[q] = max_depth + 1;
                }
            }
        }

        qubit_depths.into_iter().max().unwrap_or(0)
    }

    /// Get total gate count
    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    /// Count single-qubit gates
    pub fn count_1q(&self) -> usize {
        self.gates.iter().filter(|g| g.is_single_qubit()).count()
    }

    /// Count two-qubit gates
    pub fn count_2q(&self) -> usize {
        self.gates.iter().filter(|g| g.is_two_qubit()).count()
    }

    /// Count gates with a given name
    pub fn count_named(&self, name: &str) -> usize {
        self.gates.iter().filter(|g| g.name() == name).count()
    }

    /// Get two-qubit gate pairs (for coupling validation)
    pub fn two_qubit_pairs(&self) -> Vec<(QubitId, QubitId)> {
        self.gates
            .iter()
            .filter(|g| g.is_two_qubit())
            .filter_map(|g| match g.qubits().as_slice() {
                [a, b, ..] => Some((*a, *b)),
                _ => None,
            })
            .collect()
    }

    // ========================================================================
    // QASM Conversion
    // ========================================================================

    /// Convert to OpenQASM 2.0 string
    pub fn to_qasm(&self) -> String {
        let mut lines = vec![
            "OPENQASM 2.0;".to_string(),
            "include \"qelib1.inc\";".to_string(),
            String::new(),
            format!("qreg q[{}];", self.num_qubits),
            format!("creg c[{}];", self.num_qubits),
            String::new(),
        ];

        lines.extend(self.gates.iter().map(Gate::to_qasm));
        lines.join("\n")
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Circuit({} qubits, {} gates)",
            self.num_qubits,
            self.gates.len()
        )?;
        writeln!(f, "  Depth: {}", self.depth())?;
        writeln!(f, "  1Q gates: {}", self.count_1q())?;
        writeln!(f, "  2Q gates: {}", self.count_2q())?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
