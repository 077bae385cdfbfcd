//! Error types for RYVOL
//!
//! Gantree: L0_Foundation → Errors
//!
//! One error enum shared by the pulse, backend and benchmark crates.

// Error variant fields are self-documenting via error messages
#![allow(missing_docs)]

use thiserror::Error;

/// Main error type for RYVOL
/// Gantree: RyvolError // enum
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RyvolError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// Angle is NaN or infinite
    #[error("Invalid angle {0}: must be finite")]
    InvalidAngle(f64),

    /// Rabi amplitude must be a positive, finite frequency
    #[error("Invalid Rabi amplitude {0} Hz: must be positive and finite")]
    InvalidRabiAmplitude(f64),

    /// Pulse duration must be positive and finite
    #[error("Invalid duration {0} s: must be positive and finite")]
    InvalidDuration(f64),

    /// Probability value out of range [0, 1]
    #[error("Invalid probability {0}: must be in range [0, 1]")]
    InvalidProbability(f64),

    // ========================================================================
    // Circuit Errors
    // ========================================================================
    /// Empty circuit
    #[error("Circuit is empty")]
    EmptyCircuit,

    /// Gate on non-existent qubit
    #[error("Gate references qubit {qubit} but circuit has only {num_qubits} qubits")]
    GateQubitMismatch { qubit: usize, num_qubits: usize },

    /// Gate cannot be expressed in the requested basis
    #[error("Gate '{gate}' is not supported by basis [{basis}]")]
    UnsupportedGate { gate: String, basis: String },

    /// Two-qubit gate on an uncoupled pair
    #[error("Topology violation: qubits {q1} and {q2} are not connected")]
    TopologyViolation { q1: usize, q2: usize },

    // ========================================================================
    // Pulse Errors
    // ========================================================================
    /// Drive line not registered on the system
    #[error("Unknown drive '{0}'")]
    UnknownDrive(String),

    /// Instruction targets an atom the system does not have
    #[error("Atom {atom} out of range: system has {num_atoms} atoms")]
    AtomOutOfRange { atom: usize, num_atoms: usize },

    // ========================================================================
    // Backend Errors
    // ========================================================================
    /// Backend execution error
    #[error("Backend error: {0}")]
    BackendError(String),

    /// Circuit wider than the backend
    #[error("Qubit {qubit} out of range: max is {max}")]
    QubitOutOfRange { qubit: usize, max: usize },

    /// Shots out of range
    #[error("Shots {0} out of range [{1}, {2}]")]
    ShotsOutOfRange(u64, u64, u64),

    // ========================================================================
    // Configuration / I/O Errors
    // ========================================================================
    /// Configuration rejected by validation
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(String),
}

/// Result type alias for RYVOL operations
pub type RyvolResult<T> = Result<T, RyvolError>;

// ============================================================================
// Error Conversion Helpers
// ============================================================================

impl From<serde_json::Error> for RyvolError {
    fn from(err: serde_json::Error) -> Self {
        RyvolError::JsonError(err.to_string())
    }
}

// ============================================================================
// Error Helpers
// ============================================================================

impl RyvolError {
    /// Check if error is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            RyvolError::InvalidAngle(_)
                | RyvolError::InvalidRabiAmplitude(_)
                | RyvolError::InvalidDuration(_)
                | RyvolError::InvalidProbability(_)
        )
    }

    /// Check if error is a circuit error
    pub fn is_circuit_error(&self) -> bool {
        matches!(
            self,
            RyvolError::EmptyCircuit
                | RyvolError::GateQubitMismatch { .. }
                | RyvolError::UnsupportedGate { .. }
                | RyvolError::TopologyViolation { .. }
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RyvolError::InvalidRabiAmplitude(-2e6);
        assert!(err.to_string().contains("-2000000"));
    }

    #[test]
    fn test_unsupported_gate_display() {
        let err = RyvolError::UnsupportedGate {
            gate: "swap".into(),
            basis: "rx, ry".into(),
        };
        assert_eq!(
            err.to_string(),
            "Gate 'swap' is not supported by basis [rx, ry]"
        );
    }

    #[test]
    fn test_is_validation_error() {
        assert!(RyvolError::InvalidAngle(f64::NAN).is_validation_error());
        assert!(!RyvolError::BackendError("test".into()).is_validation_error());
    }

    #[test]
    fn test_is_circuit_error() {
        assert!(RyvolError::TopologyViolation { q1: 0, q2: 3 }.is_circuit_error());
        assert!(!RyvolError::UnknownDrive("rx9".into()).is_circuit_error());
    }

    #[test]
    fn test_from_json_error() {
        let err: RyvolError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, RyvolError::JsonError(_)));
    }
}
