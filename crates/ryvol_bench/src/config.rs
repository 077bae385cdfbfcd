//! Quantum volume run configuration
//!
//! Gantree: L4_Benchmark → QvConfig

use ryvol_core::constants::qv;
use ryvol_core::error::{RyvolError, RyvolResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parameters of one heavy-output test
/// Gantree: QvConfig // QV 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QvConfig {
    /// Circuit width (and depth)
    pub num_qubits: usize,

    /// Number of random model circuits
    pub num_circuits: usize,

    /// Shots per circuit
    pub shots: u64,

    /// Respect the backend's width and coupling map when transpiling
    pub use_backend_properties: bool,

    /// Seed for circuit generation; `None` draws from entropy
    pub seed: Option<u64>,

    /// Print the summary to stdout
    pub verbose: bool,
}

impl QvConfig {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Default circuit and shot counts for a width
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            num_circuits: qv::DEFAULT_CIRCUITS,
            shots: qv::DEFAULT_SHOTS,
            use_backend_properties: true,
            seed: None,
            verbose: false,
        }
    }

    /// Small run for smoke tests
    pub fn quick(num_qubits: usize) -> Self {
        Self {
            num_circuits: 20,
            shots: 256,
            ..Self::new(num_qubits)
        }
    }

    /// Load from a JSON document
    pub fn from_json(json: &str) -> RyvolResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Set number of circuits
    pub fn with_circuits(mut self, n: usize) -> Self {
        self.num_circuits = n;
        self
    }

    /// Set shots per circuit
    pub fn with_shots(mut self, shots: u64) -> Self {
        self.shots = shots;
        self
    }

    /// Toggle backend-aware transpilation
    pub fn with_backend_properties(mut self, enabled: bool) -> Self {
        self.use_backend_properties = enabled;
        self
    }

    /// Set seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable verbose output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Validate configuration
    pub fn validate(&self) -> RyvolResult<()> {
        if self.num_qubits < 2 {
            return Err(RyvolError::ConfigError(format!(
                "num_qubits must be >= 2, got {}",
                self.num_qubits
            )));
        }
        if self.num_circuits == 0 {
            return Err(RyvolError::ConfigError("num_circuits must be > 0".into()));
        }
        if self.shots == 0 {
            return Err(RyvolError::ConfigError("shots must be > 0".into()));
        }
        Ok(())
    }

    /// Total shots across all circuits
    pub fn total_shots(&self) -> u64 {
        self.num_circuits as u64 * self.shots
    }
}

impl fmt::Display for QvConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "QvConfig:")?;
        writeln!(
            f,
            "  Width: {} (QV {})",
            self.num_qubits,
            qv::volume(self.num_qubits)
        )?;
        writeln!(f, "  Circuits: {}", self.num_circuits)?;
        writeln!(f, "  Shots: {}", self.shots)?;
        writeln!(f, "  Backend properties: {}", self.use_backend_properties)?;
        if let Some(seed) = self.seed {
            writeln!(f, "  Seed: {}", seed)?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = QvConfig::new(3);
        assert_eq!(config.num_circuits, 100);
        assert_eq!(config.shots, 1024);
        assert!(config.use_backend_properties);
        assert!(config.validate().is_ok());
        assert_eq!(config.total_shots(), 102_400);
    }

    #[test]
    fn test_validate() {
        assert!(QvConfig::new(1).validate().is_err());
        assert!(QvConfig::new(3).with_circuits(0).validate().is_err());
        assert!(QvConfig::new(3).with_shots(0).validate().is_err());
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "num_qubits": 4,
            "num_circuits": 10,
            "shots": 100,
            "use_backend_properties": false,
            "seed": 7,
            "verbose": false
        }"#;
        let config = QvConfig::from_json(json).unwrap();
        assert_eq!(config.seed, Some(7));
        assert!(!config.use_backend_properties);

    }

    #[test]
    fn test_from_json_rejects_narrow_width() {
        let json = r#"{
            "num_qubits": 1,
            "num_circuits": 10,
            "shots": 100,
            "use_backend_properties": true,
            "seed": null,
            "verbose": false
        }"#;
        assert!(matches!(
            QvConfig::from_json(json),
            Err(RyvolError::ConfigError(_))
        ));
    }

    #[test]
    fn test_from_json_missing_fields() {
        assert!(matches!(
            QvConfig::from_json(r#"{"num_qubits": 3}"#),
            Err(RyvolError::JsonError(_))
        ));
    }
}
