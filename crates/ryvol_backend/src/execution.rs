//! Backend execution types and traits
//!
//! Gantree: L3_Backend → BackendTrait
//!
//! A backend advertises a `BackendConfiguration` (width, native gates,
//! coupling) and executes already-translated circuits.

use ryvol_core::{Circuit, Counts, QubitId, RyvolResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// Backend Configuration
// ============================================================================

/// Every gate name the simulator can execute directly
const FULL_BASIS: &[&str] = &[
    "h", "x", "y", "z", "s", "sdg", "t", "tdg", "sx", "id", "rx", "ry", "rz", "u", "p", "cx",
    "cz", "swap", "crx", "cry", "crz", "measure", "barrier", "reset",
];

/// Native gates of a neutral-atom array driven by Raman and Rydberg lasers
const RYDBERG_BASIS: &[&str] = &["rx", "ry", "cz", "measure", "barrier"];

/// Static description of a backend
/// Gantree: BackendConfiguration // 백엔드 구성
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfiguration {
    /// Backend name
    pub name: String,

    /// Number of qubits
    pub num_qubits: usize,

    /// Gate names executed natively
    pub basis_gates: Vec<String>,

    /// Undirected coupled pairs; `None` means all-to-all
    pub coupling_map: Option<Vec<(QubitId, QubitId)>>,
}

impl BackendConfiguration {
    /// Create a configuration from a basis list
    pub fn new(name: impl Into<String>, num_qubits: usize, basis_gates: &[&str]) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            basis_gates: basis_gates.iter().map(|g| g.to_string()).collect(),
            coupling_map: None,
        }
    }

    /// Neutral-atom array with `rx`, `ry`, `cz` natives
    pub fn rydberg(num_atoms: usize) -> Self {
        Self::new("rydberg_array", num_atoms, RYDBERG_BASIS)
    }

    /// Fully connected device accepting every gate
    pub fn all_to_all(num_qubits: usize) -> Self {
        Self::new("ryvol_simulator", num_qubits, FULL_BASIS)
    }

    /// Restrict two-qubit gates to the given pairs
    pub fn with_coupling_map(mut self, pairs: Vec<(QubitId, QubitId)>) -> Self {
        self.coupling_map = Some(pairs);
        self
    }

    /// Nearest-neighbour chain coupling
    pub fn with_linear_coupling(self) -> Self {
        let pairs = (0..self.num_qubits.saturating_sub(1))
            .map(|q| (q, q + 1))
            .collect();
        self.with_coupling_map(pairs)
    }

    /// Whether a gate name is native
    pub fn supports(&self, gate_name: &str) -> bool {
        self.basis_gates.iter().any(|g| g == gate_name)
    }

    /// Whether two qubits may share a two-qubit gate
    pub fn is_coupled(&self, q1: QubitId, q2: QubitId) -> bool {
        match &self.coupling_map {
            None => q1 < self.num_qubits && q2 < self.num_qubits,
            Some(pairs) => pairs
                .iter()
                .any(|&(a, b)| (a, b) == (q1, q2) || (b, a) == (q1, q2)),
        }
    }
}

impl fmt::Display for BackendConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} qubits, basis [{}])",
            self.name,
            self.num_qubits,
            self.basis_gates.join(", ")
        )
    }
}

// ============================================================================
// Execution Result
// ============================================================================

/// Result of circuit execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Measurement counts (bitstring -> count)
    pub counts: Counts,

    /// Number of shots executed
    pub shots: u64,

    /// Execution metadata
    pub metadata: ExecutionMetadata,
}

/// Execution metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecutionMetadata {
    /// Backend name
    pub backend: String,

    /// Job ID (if applicable)
    pub job_id: Option<String>,

    /// Execution time in milliseconds
    pub execution_time_ms: Option<u64>,

    /// Whether simulation was used
    pub simulated: bool,

    /// Seed used (if any)
    pub seed: Option<u64>,

    /// Additional info
    pub extra: HashMap<String, String>,
}

impl ExecutionResult {
    /// Create new execution result
    pub fn new(counts: Counts, shots: u64, backend: &str) -> Self {
        Self {
            counts,
            shots,
            metadata: ExecutionMetadata {
                backend: backend.to_string(),
                simulated: true,
                ..Default::default()
            },
        }
    }

    /// Get total count (should equal shots)
    pub fn total_counts(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Get probability of a specific bitstring
    pub fn probability(&self, bitstring: &str) -> f64 {
        if self.shots == 0 {
            return 0.0;
        }
        let count = self.counts.get(bitstring).copied().unwrap_or(0);
        count as f64 / self.shots as f64
    }

    /// Get most frequent bitstring
    pub fn most_frequent(&self) -> Option<(&String, u64)> {
        self.counts
            .iter()
            .max_by_key(|(_, &count)| count)
            .map(|(bs, &count)| (bs, count))
    }

    /// Total shots whose outcome is in `outcomes`
    /// Gantree: count_in(outcomes) -> u64 // 집합 내 카운트
    pub fn count_in<'a, I>(&self, outcomes: I) -> u64
    where
        I: IntoIterator<Item = &'a str>,
    {
        outcomes
            .into_iter()
            .filter_map(|o| self.counts.get(o))
            .sum()
    }
}

impl fmt::Display for ExecutionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ExecutionResult(backend={}, shots={}, unique={})",
            self.metadata.backend,
            self.shots,
            self.counts.len()
        )
    }
}

// ============================================================================
// Backend Trait
// ============================================================================

/// Quantum backend trait
/// Gantree: BackendTrait // 백엔드 인터페이스
pub trait Backend: Send + Sync {
    /// Get backend name
    fn name(&self) -> &str;

    /// Static device description
    fn configuration(&self) -> &BackendConfiguration;

    /// Get number of qubits
    fn num_qubits(&self) -> usize {
        self.configuration().num_qubits
    }

    /// Execute a circuit
    /// Gantree: execute(circuit, shots) -> Result<ExecutionResult>
    fn execute(&self, circuit: &Circuit, shots: u64) -> RyvolResult<ExecutionResult>;

    /// Execute multiple circuits (batch)
    fn execute_batch(&self, circuits: &[Circuit], shots: u64) -> RyvolResult<Vec<ExecutionResult>> {
        circuits.iter().map(|c| self.execute(c, shots)).collect()
    }

    /// Check if backend is simulator
    fn is_simulator(&self) -> bool {
        true
    }

    /// Get maximum shots per execution
    fn max_shots(&self) -> u64 {
        100_000
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_counts() -> Counts {
        let mut counts = HashMap::new();
        counts.insert("00".to_string(), 500);
        counts.insert("01".to_string(), 100);
        counts.insert("10".to_string(), 150);
        counts.insert("11".to_string(), 250);
        counts
    }

    #[test]
    fn test_total_and_probability() {
        let result = ExecutionResult::new(make_test_counts(), 1000, "test");

        assert_eq!(result.total_counts(), 1000);
        assert!((result.probability("11") - 0.25).abs() < 1e-10);
        assert_eq!(result.probability("111"), 0.0);
    }

    #[test]
    fn test_most_frequent() {
        let result = ExecutionResult::new(make_test_counts(), 1000, "test");
        let (bs, count) = result.most_frequent().unwrap();
        assert_eq!(bs, "00");
        assert_eq!(count, 500);
    }

    #[test]
    fn test_count_in() {
        let result = ExecutionResult::new(make_test_counts(), 1000, "test");
        assert_eq!(result.count_in(["00", "11", "missing"]), 750);
        assert_eq!(result.count_in(Vec::<&str>::new()), 0);
    }

    #[test]
    fn test_rydberg_configuration() {
        let config = BackendConfiguration::rydberg(4);
        assert!(config.supports("cz"));
        assert!(config.supports("ry"));
        assert!(!config.supports("cx"));
        assert!(config.is_coupled(0, 3));
        assert!(!config.is_coupled(0, 4));
    }

    #[test]
    fn test_linear_coupling() {
        let config = BackendConfiguration::all_to_all(3).with_linear_coupling();
        assert!(config.is_coupled(1, 0));
        assert!(config.is_coupled(1, 2));
        assert!(!config.is_coupled(0, 2));
    }
}
