//! Gate and readout error model
//!
//! Gantree: L3_Backend → NoiseModel
//!
//! Errors are sampled per shot: after each gate a random Pauli hits one of
//! its qubits with the gate's error probability, and each measured bit
//! flips with the readout error probability.

use ryvol_core::error::{RyvolError, RyvolResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest depolarising rate accepted by `from_depol`
pub const MAX_DEPOL: f64 = 0.1;

/// Stochastic Pauli noise model
/// Gantree: NoiseModel // 노이즈 모델
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseModel {
    gate_error_1q: f64,
    gate_error_2q: f64,
    readout_error: f64,
}

impl NoiseModel {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a validated noise model
    pub fn new(gate_error_1q: f64, gate_error_2q: f64, readout_error: f64) -> RyvolResult<Self> {
        let model = Self {
            gate_error_1q,
            gate_error_2q,
            readout_error,
        };
        model.validate()?;
        Ok(model)
    }

    /// Noise-free model
    pub fn ideal() -> Self {
        Self {
            gate_error_1q: 0.0,
            gate_error_2q: 0.0,
            readout_error: 0.0,
        }
    }

    /// Derive all rates from one depolarising probability
    ///
    /// Two-qubit gates get ten times the single-qubit rate and readout a
    /// quarter of it.
    pub fn from_depol(p_depol: f64) -> RyvolResult<Self> {
        if !(0.0..=MAX_DEPOL).contains(&p_depol) {
            return Err(RyvolError::InvalidProbability(p_depol));
        }
        Self::new(p_depol, (p_depol * 10.0).min(1.0), p_depol / 4.0)
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Set single-qubit gate error
    pub fn with_gate_error_1q(mut self, error: f64) -> Self {
        self.gate_error_1q = error;
        self
    }

    /// Set two-qubit gate error
    pub fn with_gate_error_2q(mut self, error: f64) -> Self {
        self.gate_error_2q = error;
        self
    }

    /// Set readout error
    pub fn with_readout_error(mut self, error: f64) -> Self {
        self.readout_error = error;
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Single-qubit gate error probability
    pub fn gate_error_1q(&self) -> f64 {
        self.gate_error_1q
    }

    /// Two-qubit gate error probability
    pub fn gate_error_2q(&self) -> f64 {
        self.gate_error_2q
    }

    /// Per-bit readout flip probability
    pub fn readout_error(&self) -> f64 {
        self.readout_error
    }

    /// Whether every rate is zero
    pub fn is_ideal(&self) -> bool {
        self.gate_error_1q == 0.0 && self.gate_error_2q == 0.0 && self.readout_error == 0.0
    }

    /// Check every rate lies in [0, 1]
    pub fn validate(&self) -> RyvolResult<()> {
        for p in [self.gate_error_1q, self.gate_error_2q, self.readout_error] {
            if !(0.0..=1.0).contains(&p) {
                return Err(RyvolError::InvalidProbability(p));
            }
        }
        Ok(())
    }
}

impl Default for NoiseModel {
    fn default() -> Self {
        Self::ideal()
    }
}

impl fmt::Display for NoiseModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NoiseModel(1q={:.2e}, 2q={:.2e}, readout={:.2e})",
            self.gate_error_1q, self.gate_error_2q, self.readout_error
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ideal() {
        assert!(NoiseModel::ideal().is_ideal());
        assert!(!NoiseModel::ideal().with_readout_error(0.01).is_ideal());
    }

    #[test]
    fn test_from_depol() {
        let model = NoiseModel::from_depol(0.02).unwrap();
        assert_eq!(model.gate_error_1q(), 0.02);
        assert_relative_eq!(model.gate_error_2q(), 0.2);
        assert_relative_eq!(model.readout_error(), 0.005);

        assert!(NoiseModel::from_depol(0.5).is_err());
        assert!(NoiseModel::from_depol(-0.01).is_err());
    }

    #[test]
    fn test_validate() {
        assert_eq!(
            NoiseModel::new(0.01, 1.5, 0.0),
            Err(RyvolError::InvalidProbability(1.5))
        );
        assert!(NoiseModel::new(0.0, 0.0, f64::NAN).is_err());
    }
}
