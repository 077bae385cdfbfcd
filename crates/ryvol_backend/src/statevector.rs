//! Exact state-vector simulation
//!
//! Gantree: L3_Backend → Statevector
//!
//! Amplitude index bit `q` is qubit `q`, so basis state `i` renders as
//! `format!("{:0n$b}", i)` with qubit 0 as the rightmost character.

use num_complex::Complex64;
use rand::Rng;
use ryvol_core::constants::qv::ZERO_PROBABILITY_EPS;
use ryvol_core::error::{RyvolError, RyvolResult};
use ryvol_core::{Circuit, Counts, Gate, ProbabilityMap, QubitId};
use std::collections::HashMap;
use std::f64::consts::{FRAC_1_SQRT_2, PI};

/// Widest register the simulator will allocate
pub const MAX_STATEVECTOR_QUBITS: usize = 24;

type Matrix2 = [[Complex64; 2]; 2];

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);

/// Pure state of an n-qubit register
/// Gantree: Statevector // 상태 벡터
#[derive(Debug, Clone, PartialEq)]
pub struct Statevector {
    num_qubits: usize,
    amplitudes: Vec<Complex64>,
}

impl Statevector {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// |0...0⟩ on `num_qubits` qubits
    pub fn new(num_qubits: usize) -> RyvolResult<Self> {
        if num_qubits > MAX_STATEVECTOR_QUBITS {
            return Err(RyvolError::QubitOutOfRange {
                qubit: num_qubits,
                max: MAX_STATEVECTOR_QUBITS,
            });
        }
        let mut amplitudes = vec![ZERO; 1 << num_qubits];
        amplitudes[0] = ONE;
        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// State prepared by a circuit; measurements and barriers are ignored
    /// Gantree: from_circuit(circuit) -> Result<Statevector> // 회로 시뮬레이션
    pub fn from_circuit(circuit: &Circuit) -> RyvolResult<Self> {
        let mut state = Self::new(circuit.num_qubits())?;
        for gate in circuit.gates() {
            state.apply_gate(gate)?;
        }
        Ok(state)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of qubits
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Raw amplitudes
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Basis-state probabilities, indexed like the amplitudes
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Non-zero probabilities keyed by bitstring
    /// Gantree: probabilities_dict(&self) -> ProbabilityMap // 확률 분포
    pub fn probabilities_dict(&self) -> ProbabilityMap {
        self.probabilities()
            .into_iter()
            .enumerate()
            .filter(|&(_, p)| p > ZERO_PROBABILITY_EPS)
            .map(|(i, p)| (self.bitstring(i), p))
            .collect()
    }

    /// Render a basis index as a bitstring
    pub fn bitstring(&self, index: usize) -> String {
        format!("{:0width$b}", index, width = self.num_qubits)
    }

    // ========================================================================
    // Sampling
    // ========================================================================

    /// Draw one basis index
    pub fn sample_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let r: f64 = rng.gen();
        let mut cumsum = 0.0;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            cumsum += amp.norm_sqr();
            if r < cumsum {
                return i;
            }
        }
        // rounding left the total a hair under 1
        self.amplitudes.len() - 1
    }

    /// Sample measurement counts over the full register
    pub fn sample_counts<R: Rng + ?Sized>(&self, shots: u64, rng: &mut R) -> Counts {
        let cumulative: Vec<f64> = self
            .amplitudes
            .iter()
            .scan(0.0, |acc, a| {
                *acc += a.norm_sqr();
                Some(*acc)
            })
            .collect();
        let last = cumulative.len() - 1;

        let mut counts: Counts = HashMap::new();
        for _ in 0..shots {
            let r: f64 = rng.gen();
            let index = cumulative.partition_point(|&c| c <= r).min(last);
            *counts.entry(self.bitstring(index)).or_insert(0) += 1;
        }
        counts
    }

    // ========================================================================
    // Gate Application
    // ========================================================================

    /// Apply one circuit operation
    pub fn apply_gate(&mut self, gate: &Gate) -> RyvolResult<()> {
        for &q in &gate.qubits() {
            self.check_qubit(q)?;
        }

        match *gate {
            Gate::H(q) => self.apply_1q(q, hadamard()),
            Gate::X(q) => self.apply_1q(q, [[ZERO, ONE], [ONE, ZERO]]),
            Gate::Y(q) => self.apply_1q(q, [[ZERO, -I], [I, ZERO]]),
            Gate::Z(q) => self.apply_1q(q, phase(PI)),
            Gate::S(q) => self.apply_1q(q, phase(PI / 2.0)),
            Gate::Sdg(q) => self.apply_1q(q, phase(-PI / 2.0)),
            Gate::T(q) => self.apply_1q(q, phase(PI / 4.0)),
            Gate::Tdg(q) => self.apply_1q(q, phase(-PI / 4.0)),
            Gate::Sx(q) => self.apply_1q(q, sx()),
            Gate::Id(_) => {}
            Gate::Rx(q, theta) => self.apply_1q(q, rx(theta)),
            Gate::Ry(q, theta) => self.apply_1q(q, ry(theta)),
            Gate::Rz(q, theta) => self.apply_1q(q, rz(theta)),
            Gate::U(q, theta, phi, lambda) => self.apply_1q(q, u(theta, phi, lambda)),
            Gate::P(q, lambda) => self.apply_1q(q, phase(lambda)),
            Gate::Cnot(c, t) => self.apply_controlled(c, t, [[ZERO, ONE], [ONE, ZERO]]),
            Gate::Cz(a, b) => self.apply_cz(a, b),
            Gate::Swap(a, b) => self.apply_swap(a, b),
            Gate::Crx(c, t, theta) => self.apply_controlled(c, t, rx(theta)),
            Gate::Cry(c, t, theta) => self.apply_controlled(c, t, ry(theta)),
            Gate::Crz(c, t, theta) => self.apply_controlled(c, t, rz(theta)),
            Gate::Measure(_) | Gate::MeasureAll | Gate::Barrier(_) => {}
            Gate::Reset(_) => {
                return Err(RyvolError::BackendError(
                    "reset cannot be applied to a pure state".into(),
                ))
            }
        }
        Ok(())
    }

    fn check_qubit(&self, qubit: QubitId) -> RyvolResult<()> {
        if qubit >= self.num_qubits {
            return Err(RyvolError::GateQubitMismatch {
                qubit,
                num_qubits: self.num_qubits,
            });
        }
        Ok(())
    }

    fn apply_1q(&mut self, q: QubitId, m: Matrix2) {
        let mask = 1 << q;
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let (a, b) = (self.amplitudes[i], self.amplitudes[j]);
                self.amplitudes[i] = m[0][0] * a + m[0][1] * b;
                self.amplitudes[j] = m[1][0] * a + m[1][1] * b;
            }
        }
    }

    fn apply_controlled(&mut self, control: QubitId, target: QubitId, m: Matrix2) {
        let control_mask = 1 << control;
        let target_mask = 1 << target;
        for i in 0..self.amplitudes.len() {
            if i & control_mask != 0 && i & target_mask == 0 {
                let j = i | target_mask;
                let (a, b) = (self.amplitudes[i], self.amplitudes[j]);
                self.amplitudes[i] = m[0][0] * a + m[0][1] * b;
                self.amplitudes[j] = m[1][0] * a + m[1][1] * b;
            }
        }
    }

    fn apply_cz(&mut self, q1: QubitId, q2: QubitId) {
        let mask = (1 << q1) | (1 << q2);
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if i & mask == mask {
                *amp = -*amp;
            }
        }
    }

    fn apply_swap(&mut self, q1: QubitId, q2: QubitId) {
        let mask1 = 1 << q1;
        let mask2 = 1 << q2;
        for i in 0..self.amplitudes.len() {
            if i & mask1 != 0 && i & mask2 == 0 {
                self.amplitudes.swap(i, i ^ mask1 ^ mask2);
            }
        }
    }
}

// ============================================================================
// Gate Matrices
// ============================================================================

fn hadamard() -> Matrix2 {
    let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
    [[h, h], [h, -h]]
}

fn sx() -> Matrix2 {
    let p = Complex64::new(0.5, 0.5);
    let m = Complex64::new(0.5, -0.5);
    [[p, m], [m, p]]
}

fn phase(lambda: f64) -> Matrix2 {
    [[ONE, ZERO], [ZERO, Complex64::from_polar(1.0, lambda)]]
}

fn rx(theta: f64) -> Matrix2 {
    let c = Complex64::new((theta / 2.0).cos(), 0.0);
    let s = Complex64::new(0.0, -(theta / 2.0).sin());
    [[c, s], [s, c]]
}

fn ry(theta: f64) -> Matrix2 {
    let c = Complex64::new((theta / 2.0).cos(), 0.0);
    let s = Complex64::new((theta / 2.0).sin(), 0.0);
    [[c, -s], [s, c]]
}

fn rz(theta: f64) -> Matrix2 {
    [
        [Complex64::from_polar(1.0, -theta / 2.0), ZERO],
        [ZERO, Complex64::from_polar(1.0, theta / 2.0)],
    ]
}

fn u(theta: f64, phi: f64, lambda: f64) -> Matrix2 {
    let c = (theta / 2.0).cos();
    let s = (theta / 2.0).sin();
    [
        [
            Complex64::new(c, 0.0),
            -Complex64::from_polar(s, lambda),
        ],
        [
            Complex64::from_polar(s, phi),
            Complex64::from_polar(c, phi + lambda),
        ],
    ]
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ryvol_core::CircuitBuilder;

    #[test]
    fn test_initial_state() {
        let state = Statevector::new(3).unwrap();
        assert_eq!(state.probabilities()[0], 1.0);
        assert_eq!(state.probabilities_dict().len(), 1);
        assert_eq!(state.probabilities_dict()["000"], 1.0);
    }

    #[test]
    fn test_bell_state() {
        let circuit = CircuitBuilder::new(2).h(0).cnot(0, 1).build();
        let probs = Statevector::from_circuit(&circuit).unwrap().probabilities_dict();

        assert_eq!(probs.len(), 2);
        assert_relative_eq!(probs["00"], 0.5, epsilon = 1e-12);
        assert_relative_eq!(probs["11"], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_qubit_zero_is_rightmost() {
        let circuit = CircuitBuilder::new(3).x(0).build();
        let probs = Statevector::from_circuit(&circuit).unwrap().probabilities_dict();
        assert_relative_eq!(probs["001"], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotations() {
        // Ry(θ)|0⟩ -> P(1) = sin²(θ/2)
        let theta = 0.7;
        let state = Statevector::from_circuit(&CircuitBuilder::new(1).ry(0, theta).build()).unwrap();
        assert_relative_eq!(state.probabilities()[1], (theta / 2.0).sin().powi(2), epsilon = 1e-12);

        // H Rz(π) H = X up to phase
        let circuit = CircuitBuilder::new(1).h(0).rz(0, PI).h(0).build();
        let state = Statevector::from_circuit(&circuit).unwrap();
        assert_relative_eq!(state.probabilities()[1], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_u_matches_ry() {
        let a = Statevector::from_circuit(&CircuitBuilder::new(1).u(0, 1.1, 0.0, 0.0).build()).unwrap();
        let b = Statevector::from_circuit(&CircuitBuilder::new(1).ry(0, 1.1).build()).unwrap();
        for (x, y) in a.amplitudes().iter().zip(b.amplitudes()) {
            assert_relative_eq!(x.re, y.re, epsilon = 1e-12);
            assert_relative_eq!(x.im, y.im, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_swap_and_controlled() {
        let circuit = CircuitBuilder::new(3).x(0).swap(0, 2).build();
        let probs = Statevector::from_circuit(&circuit).unwrap().probabilities_dict();
        assert_relative_eq!(probs["100"], 1.0, epsilon = 1e-12);

        // control off -> no rotation
        let circuit = CircuitBuilder::new(2).cry(0, 1, PI).build();
        let probs = Statevector::from_circuit(&circuit).unwrap().probabilities_dict();
        assert_relative_eq!(probs["00"], 1.0, epsilon = 1e-12);

        let circuit = CircuitBuilder::new(2).x(0).cry(0, 1, PI).build();
        let probs = Statevector::from_circuit(&circuit).unwrap().probabilities_dict();
        assert_relative_eq!(probs["11"], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_measurements_ignored() {
        let circuit = CircuitBuilder::new(2).h(1).measure_all().build();
        let probs = Statevector::from_circuit(&circuit).unwrap().probabilities_dict();
        assert_relative_eq!(probs["10"], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_reset_rejected() {
        let circuit = CircuitBuilder::new(1).reset(0).build();
        assert!(matches!(
            Statevector::from_circuit(&circuit),
            Err(RyvolError::BackendError(_))
        ));
    }

    #[test]
    fn test_too_wide() {
        assert!(Statevector::new(MAX_STATEVECTOR_QUBITS + 1).is_err());
    }

    #[test]
    fn test_sample_counts() {
        let circuit = CircuitBuilder::new(2).h(0).cnot(0, 1).build();
        let state = Statevector::from_circuit(&circuit).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let counts = state.sample_counts(2000, &mut rng);
        assert_eq!(counts.values().sum::<u64>(), 2000);
        assert!(counts.keys().all(|k| k == "00" || k == "11"));
        let p00 = counts["00"] as f64 / 2000.0;
        assert!(p00 > 0.4 && p00 < 0.6, "P(00) = {}", p00);
    }
}
