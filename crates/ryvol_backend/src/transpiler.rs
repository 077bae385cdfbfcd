//! Basis translation
//!
//! Gantree: L3_Backend → Transpiler
//!
//! Rewrites gates the target does not run natively into ones it does,
//! exact up to global phase. No routing and no optimisation: a two-qubit
//! gate on an uncoupled pair is an error, not a SWAP chain.

use crate::execution::{Backend, BackendConfiguration};
use log::debug;
use ryvol_core::{Circuit, Gate, RyvolError, RyvolResult};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

/// Rewrite depth after which a gate is declared untranslatable
const MAX_REWRITE_DEPTH: usize = 8;

/// Transpiler configuration
#[derive(Debug, Clone)]
pub struct TranspilerConfig {
    /// Target basis gates
    pub basis_gates: Vec<String>,

    /// Coupling map (allowed 2-qubit connections); `None` skips the check
    pub coupling_map: Option<Vec<(usize, usize)>>,

    /// Number of qubits on target; `None` skips the check
    pub num_qubits: Option<usize>,
}

impl TranspilerConfig {
    /// Translate to a basis only
    pub fn basis_only(basis_gates: &[String]) -> Self {
        Self {
            basis_gates: basis_gates.to_vec(),
            coupling_map: None,
            num_qubits: None,
        }
    }

    /// Translate to a basis and respect the device's width and coupling
    pub fn for_backend(configuration: &BackendConfiguration) -> Self {
        Self {
            basis_gates: configuration.basis_gates.clone(),
            coupling_map: configuration.coupling_map.clone(),
            num_qubits: Some(configuration.num_qubits),
        }
    }
}

/// Circuit transpiler
/// Gantree: Transpiler // 기저 변환
pub struct Transpiler {
    config: TranspilerConfig,
}

impl Transpiler {
    /// Create new transpiler
    pub fn new(config: TranspilerConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub fn config(&self) -> &TranspilerConfig {
        &self.config
    }

    /// Translate a circuit into the target basis
    /// Gantree: transpile(&self, circuit) -> Result<Circuit> // 변환
    pub fn transpile(&self, circuit: &Circuit) -> RyvolResult<Circuit> {
        if let Some(max) = self.config.num_qubits {
            if circuit.num_qubits() > max {
                return Err(RyvolError::QubitOutOfRange {
                    qubit: circuit.num_qubits(),
                    max,
                });
            }
        }

        let mut gates = Vec::with_capacity(circuit.gate_count());
        for gate in circuit.gates() {
            self.lower(gate.clone(), 0, &mut gates)?;
        }

        let mut out = Circuit::from_gates(circuit.num_qubits(), gates)?;
        if let Some(name) = circuit.name() {
            out.set_name(name);
        }
        self.validate(&out)?;

        debug!(
            "Transpiled {} gates into {} for basis [{}]",
            circuit.gate_count(),
            out.gate_count(),
            self.config.basis_gates.join(", ")
        );
        Ok(out)
    }

    /// Check coupling of every two-qubit gate
    pub fn validate(&self, circuit: &Circuit) -> RyvolResult<()> {
        if let Some(coupling) = &self.config.coupling_map {
            for (q1, q2) in circuit.two_qubit_pairs() {
                if !coupling
                    .iter()
                    .any(|&(a, b)| (a, b) == (q1, q2) || (b, a) == (q1, q2))
                {
                    return Err(RyvolError::TopologyViolation { q1, q2 });
                }
            }
        }
        Ok(())
    }

    /// Check if circuit uses only basis gates
    pub fn uses_basis_gates(&self, circuit: &Circuit) -> bool {
        circuit.gates().iter().all(|g| self.supports(g))
    }

    fn supports(&self, gate: &Gate) -> bool {
        // measurements and barriers pass through on every target
        gate.is_measurement()
            || gate.is_barrier()
            || self.config.basis_gates.iter().any(|b| b == gate.name())
    }

    fn has(&self, name: &str) -> bool {
        self.config.basis_gates.iter().any(|b| b == name)
    }

    fn lower(&self, gate: Gate, depth: usize, out: &mut Vec<Gate>) -> RyvolResult<()> {
        if self.supports(&gate) {
            out.push(gate);
            return Ok(());
        }

        let rewrite = if depth < MAX_REWRITE_DEPTH {
            self.rewrite(&gate)
        } else {
            None
        };
        let Some(replacement) = rewrite else {
            return Err(RyvolError::UnsupportedGate {
                gate: gate.name().to_string(),
                basis: self.config.basis_gates.join(", "),
            });
        };

        for g in replacement {
            self.lower(g, depth + 1, out)?;
        }
        Ok(())
    }

    /// One rewrite step; circuit order, equal up to global phase
    fn rewrite(&self, gate: &Gate) -> Option<Vec<Gate>> {
        let gates = match *gate {
            Gate::H(q) => vec![Gate::Ry(q, FRAC_PI_2), Gate::Rx(q, PI)],
            Gate::X(q) => vec![Gate::Rx(q, PI)],
            Gate::Y(q) => vec![Gate::Ry(q, PI)],
            Gate::Z(q) => vec![Gate::Rz(q, PI)],
            Gate::S(q) => vec![Gate::Rz(q, FRAC_PI_2)],
            Gate::Sdg(q) => vec![Gate::Rz(q, -FRAC_PI_2)],
            Gate::T(q) => vec![Gate::Rz(q, FRAC_PI_4)],
            Gate::Tdg(q) => vec![Gate::Rz(q, -FRAC_PI_4)],
            Gate::Sx(q) => vec![Gate::Rx(q, FRAC_PI_2)],
            Gate::Id(_) => vec![],
            Gate::P(q, lambda) => vec![Gate::Rz(q, lambda)],

            Gate::Rz(q, theta) if self.has("rx") && self.has("ry") => vec![
                Gate::Rx(q, -FRAC_PI_2),
                Gate::Ry(q, theta),
                Gate::Rx(q, FRAC_PI_2),
            ],
            Gate::Rz(q, theta) => vec![Gate::U(q, 0.0, 0.0, theta)],
            Gate::Rx(q, theta) => vec![Gate::U(q, theta, -FRAC_PI_2, FRAC_PI_2)],
            Gate::Ry(q, theta) => vec![Gate::U(q, theta, 0.0, 0.0)],
            Gate::U(q, theta, phi, lambda) => {
                vec![Gate::Rz(q, lambda), Gate::Ry(q, theta), Gate::Rz(q, phi)]
            }

            Gate::Cnot(c, t) => vec![Gate::Ry(t, -FRAC_PI_2), Gate::Cz(c, t), Gate::Ry(t, FRAC_PI_2)],
            Gate::Cz(c, t) => vec![Gate::H(t), Gate::Cnot(c, t), Gate::H(t)],
            Gate::Swap(a, b) => vec![Gate::Cnot(a, b), Gate::Cnot(b, a), Gate::Cnot(a, b)],
            Gate::Cry(c, t, theta) => vec![
                Gate::Ry(t, theta / 2.0),
                Gate::Cnot(c, t),
                Gate::Ry(t, -theta / 2.0),
                Gate::Cnot(c, t),
            ],
            Gate::Crz(c, t, theta) => vec![
                Gate::Rz(t, theta / 2.0),
                Gate::Cnot(c, t),
                Gate::Rz(t, -theta / 2.0),
                Gate::Cnot(c, t),
            ],
            Gate::Crx(c, t, theta) => vec![Gate::H(t), Gate::Crz(c, t, theta), Gate::H(t)],

            Gate::Measure(_) | Gate::MeasureAll | Gate::Barrier(_) | Gate::Reset(_) => {
                return None
            }
        };
        Some(gates)
    }
}

/// Prepare a circuit for a backend
///
/// With `use_backend_properties` the device width and coupling map are
/// enforced; otherwise only its basis gates are targeted.
pub fn transpile<B: Backend + ?Sized>(
    circuit: &Circuit,
    backend: &B,
    use_backend_properties: bool,
) -> RyvolResult<Circuit> {
    let configuration = backend.configuration();
    let config = if use_backend_properties {
        TranspilerConfig::for_backend(configuration)
    } else {
        TranspilerConfig::basis_only(&configuration.basis_gates)
    };
    Transpiler::new(config).transpile(circuit)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statevector::Statevector;
    use approx::assert_relative_eq;
    use ryvol_core::CircuitBuilder;

    fn rydberg() -> Transpiler {
        Transpiler::new(TranspilerConfig::for_backend(&BackendConfiguration::rydberg(3)))
    }

    /// |⟨a|b⟩|², 1 when equal up to global phase
    fn fidelity(a: &Circuit, b: &Circuit) -> f64 {
        let sa = Statevector::from_circuit(a).unwrap();
        let sb = Statevector::from_circuit(b).unwrap();
        sa.amplitudes()
            .iter()
            .zip(sb.amplitudes())
            .map(|(x, y)| x.conj() * y)
            .sum::<num_complex::Complex64>()
            .norm_sqr()
    }

    fn assert_equivalent(circuit: &Circuit, transpiler: &Transpiler) {
        let out = transpiler.transpile(circuit).unwrap();
        assert!(transpiler.uses_basis_gates(&out), "{}", out.to_qasm());
        assert_relative_eq!(fidelity(circuit, &out), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_single_qubit_identities() {
        let transpiler = rydberg();
        let prep = |b: CircuitBuilder| b.ry(0, 0.3).rx(0, 0.8);

        for circuit in [
            prep(CircuitBuilder::new(1)).h(0).build(),
            prep(CircuitBuilder::new(1)).rz(0, 1.234).build(),
            prep(CircuitBuilder::new(1)).s(0).t(0).z(0).build(),
            prep(CircuitBuilder::new(1)).u(0, 0.4, 1.3, -0.7).build(),
            prep(CircuitBuilder::new(1)).p(0, 0.9).sx(0).y(0).x(0).build(),
        ] {
            assert_equivalent(&circuit, &transpiler);
        }
    }

    #[test]
    fn test_two_qubit_identities() {
        let transpiler = rydberg();
        let prep = |b: CircuitBuilder| b.ry(0, 1.1).rx(1, 0.6).ry(2, -0.4);

        for circuit in [
            prep(CircuitBuilder::new(3)).cnot(0, 1).build(),
            prep(CircuitBuilder::new(3)).swap(0, 2).build(),
            prep(CircuitBuilder::new(3)).cry(0, 1, 0.7).build(),
            prep(CircuitBuilder::new(3)).crz(1, 2, -1.3).h(2).build(),
            prep(CircuitBuilder::new(3)).crx(2, 0, 2.2).build(),
        ] {
            assert_equivalent(&circuit, &transpiler);
        }
    }

    #[test]
    fn test_cz_to_cx_basis() {
        let basis: Vec<String> = ["u", "cx"].iter().map(|s| s.to_string()).collect();
        let transpiler = Transpiler::new(TranspilerConfig::basis_only(&basis));
        let circuit = CircuitBuilder::new(2).h(0).ry(1, 0.2).cz(0, 1).rx(1, 0.5).build();
        assert_equivalent(&circuit, &transpiler);
    }

    #[test]
    fn test_native_gates_untouched() {
        let circuit = CircuitBuilder::new(2)
            .rx(0, 0.1)
            .cz(0, 1)
            .measure_all()
            .build();
        let out = rydberg().transpile(&circuit).unwrap();
        assert_eq!(out.gates(), circuit.gates());
    }

    #[test]
    fn test_unsupported_gate() {
        let basis = vec!["rx".to_string()];
        let transpiler = Transpiler::new(TranspilerConfig::basis_only(&basis));
        let circuit = CircuitBuilder::new(2).cz(0, 1).build();
        assert!(matches!(
            transpiler.transpile(&circuit),
            Err(RyvolError::UnsupportedGate { .. })
        ));

        let circuit = CircuitBuilder::new(1).reset(0).build();
        assert!(rydberg().transpile(&circuit).is_err());
    }

    #[test]
    fn test_backend_properties() {
        let configuration = BackendConfiguration::rydberg(3).with_linear_coupling();
        let with_props = Transpiler::new(TranspilerConfig::for_backend(&configuration));
        let basis_only = Transpiler::new(TranspilerConfig::basis_only(&configuration.basis_gates));

        let circuit = CircuitBuilder::new(3).cz(0, 2).build();
        assert_eq!(
            with_props.transpile(&circuit).unwrap_err(),
            RyvolError::TopologyViolation { q1: 0, q2: 2 }
        );
        assert!(basis_only.transpile(&circuit).is_ok());

        let wide = CircuitBuilder::new(4).rx(3, 1.0).build();
        assert!(matches!(
            with_props.transpile(&wide),
            Err(RyvolError::QubitOutOfRange { qubit: 4, max: 3 })
        ));
        assert!(basis_only.transpile(&wide).is_ok());
    }
}
