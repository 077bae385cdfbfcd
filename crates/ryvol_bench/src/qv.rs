//! Quantum volume heavy-output test
//!
//! Gantree: L4_Benchmark → QuantumVolume
//!
//! For each random model circuit the ideal output distribution is computed
//! exactly; outcomes above its median are "heavy". The device passes when,
//! two standard deviations below the measured mean, more than two thirds
//! of all shots land in heavy sets.

use crate::config::QvConfig;
use crate::generators::QvCircuitGenerator;
use log::{debug, info};
use ryvol_backend::{transpile, Backend, Statevector};
use ryvol_core::constants::qv;
use ryvol_core::{Circuit, ProbabilityMap, RyvolResult};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// Statistics
// ============================================================================

/// Upper half of a distribution by value
///
/// Entries are ordered by `(value, key)` ascending and the last
/// `len - len / 2` keys are returned, smallest first.
/// Gantree: heavy_outputs(dist) -> Vec<String> // 상위 절반
pub fn heavy_outputs<V>(distribution: &HashMap<String, V>) -> Vec<String>
where
    V: PartialOrd + Copy,
{
    let mut entries: Vec<(&String, V)> = distribution.iter().map(|(k, &v)| (k, v)).collect();
    entries.sort_by(|(ka, va), (kb, vb)| {
        va.partial_cmp(vb)
            .unwrap_or(Ordering::Equal)
            .then_with(|| ka.cmp(kb))
    });

    let half = entries.len() / 2;
    entries[half..].iter().map(|(k, _)| (*k).clone()).collect()
}

/// Two-sigma heavy-output test
///
/// `nheavies` is the heavy count summed over `ncircuits` circuits of
/// `nshots` shots each. Degenerate inputs (no circuits, no shots, or a
/// negative variance term) fail.
/// Gantree: check_threshold(nheavies, ncircuits, nshots) -> bool // 임계값 검사
pub fn check_threshold(nheavies: u64, ncircuits: usize, nshots: u64) -> bool {
    if ncircuits == 0 || nshots == 0 {
        return false;
    }
    let n = nheavies as f64;
    let c = ncircuits as f64;
    let s = nshots as f64;

    let sigma = (n * (s - n / c)).sqrt();
    let lower = (n - qv::CONFIDENCE_SIGMAS * sigma) / (c * s);

    // NaN compares false
    lower > qv::HEAVY_OUTPUT_THRESHOLD
}

/// Heavy shots as a percentage of all shots
pub fn heavy_output_percentage(nheavies: u64, ncircuits: usize, nshots: u64) -> f64 {
    let total = ncircuits as f64 * nshots as f64;
    if total == 0.0 {
        return 0.0;
    }
    nheavies as f64 / total * 100.0
}

/// Exact output distribution with final measurements stripped
/// Gantree: ideal_probabilities(circuit) -> ProbabilityMap // 이상 분포
pub fn ideal_probabilities(circuit: &Circuit) -> RyvolResult<ProbabilityMap> {
    let unmeasured = circuit.remove_final_measurements();
    Ok(Statevector::from_circuit(&unmeasured)?.probabilities_dict())
}

// ============================================================================
// Results
// ============================================================================

/// Outcome of one model circuit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QvCircuitResult {
    /// Circuit name
    pub name: String,

    /// Heavy outcomes of the ideal distribution
    pub heavy_outputs: Vec<String>,

    /// Ideal probability mass of the heavy set
    pub ideal_heavy_probability: f64,

    /// Measured shots landing in the heavy set
    pub heavy_counts: u64,

    /// Shots executed
    pub shots: u64,
}

impl QvCircuitResult {
    /// Measured heavy fraction
    pub fn heavy_fraction(&self) -> f64 {
        if self.shots == 0 {
            return 0.0;
        }
        self.heavy_counts as f64 / self.shots as f64
    }
}

/// Aggregate heavy-output test result
/// Gantree: QvResult // QV 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QvResult {
    /// Backend name
    pub backend: String,

    /// Circuit width
    pub num_qubits: usize,

    /// `2^num_qubits`
    pub quantum_volume: u64,

    /// Number of circuits
    pub num_circuits: usize,

    /// Shots per circuit
    pub shots: u64,

    /// Heavy shots across all circuits
    pub heavy_counts: u64,

    /// `heavy_counts` over all shots, in percent
    pub heavy_percentage: f64,

    /// Threshold test outcome
    pub passed: bool,

    /// Per-circuit detail
    pub circuits: Vec<QvCircuitResult>,
}

impl QvResult {
    /// Build from per-circuit results
    pub fn from_circuits(
        backend: &str,
        num_qubits: usize,
        shots: u64,
        circuits: Vec<QvCircuitResult>,
    ) -> Self {
        let num_circuits = circuits.len();
        let heavy_counts: u64 = circuits.iter().map(|c| c.heavy_counts).sum();
        Self {
            backend: backend.to_string(),
            num_qubits,
            quantum_volume: qv::volume(num_qubits),
            num_circuits,
            shots,
            heavy_counts,
            heavy_percentage: heavy_output_percentage(heavy_counts, num_circuits, shots),
            passed: check_threshold(heavy_counts, num_circuits, shots),
            circuits,
        }
    }

    /// Mean ideal heavy probability over circuits
    pub fn mean_ideal_heavy_probability(&self) -> f64 {
        if self.circuits.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.circuits.iter().map(|c| c.ideal_heavy_probability).sum();
        sum / self.circuits.len() as f64
    }

    /// Three-line summary
    pub fn summary(&self) -> String {
        format!(
            "Quantum Volume: {}\nPercentage Heavy Outputs: {:.1}%\nPassed?: {}",
            self.quantum_volume, self.heavy_percentage, self.passed
        )
    }
}

impl fmt::Display for QvResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "QvResult(backend={}, width={}, QV={}, heavy={:.1}%, passed={})",
            self.backend, self.num_qubits, self.quantum_volume, self.heavy_percentage, self.passed
        )
    }
}

// ============================================================================
// Runner
// ============================================================================

/// Heavy-output test runner
/// Gantree: QuantumVolume // QV 실행기
pub struct QuantumVolume {
    config: QvConfig,
}

impl QuantumVolume {
    /// Create runner with validated configuration
    pub fn new(config: QvConfig) -> RyvolResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get configuration
    pub fn config(&self) -> &QvConfig {
        &self.config
    }

    /// Run the test on a backend
    /// Gantree: run(&self, backend) -> RyvolResult<QvResult> // QV 실행
    pub fn run<B: Backend + ?Sized>(&self, backend: &B) -> RyvolResult<QvResult> {
        let n = self.config.num_qubits;
        let mut generator = QvCircuitGenerator::new(self.config.seed);
        let models = generator.generate_batch(n, self.config.num_circuits)?;

        let mut circuits = Vec::with_capacity(models.len());
        for (i, model) in models.into_iter().enumerate() {
            let result = self.run_circuit(backend, model, i)?;
            debug!(
                "qv[{}] circuit {}: {}/{} heavy (ideal {:.3})",
                n, i, result.heavy_counts, result.shots, result.ideal_heavy_probability
            );
            circuits.push(result);
        }

        let result = QvResult::from_circuits(backend.name(), n, self.config.shots, circuits);
        info!(
            "{}: QV {} heavy {:.1}% passed={}",
            result.backend, result.quantum_volume, result.heavy_percentage, result.passed
        );
        if self.config.verbose {
            println!("{}", result.summary());
        }
        Ok(result)
    }

    fn run_circuit<B: Backend + ?Sized>(
        &self,
        backend: &B,
        mut circuit: Circuit,
        index: usize,
    ) -> RyvolResult<QvCircuitResult> {
        let name = format!("qv_{}_{}", self.config.num_qubits, index);
        circuit.set_name(name.clone());

        let ideal = ideal_probabilities(&circuit)?;
        let heavy = heavy_outputs(&ideal);
        let ideal_heavy_probability: f64 = heavy.iter().filter_map(|k| ideal.get(k)).sum();

        circuit.measure_all();
        let native = transpile(&circuit, backend, self.config.use_backend_properties)?;
        let execution = backend.execute(&native, self.config.shots)?;

        Ok(QvCircuitResult {
            name,
            heavy_counts: execution.count_in(heavy.iter().map(String::as_str)),
            heavy_outputs: heavy,
            ideal_heavy_probability,
            shots: self.config.shots,
        })
    }
}

/// Run the test at several widths sharing the other settings of `base`
pub fn run_sweep<B: Backend + ?Sized>(
    backend: &B,
    base: &QvConfig,
    widths: impl IntoIterator<Item = usize>,
) -> RyvolResult<Vec<QvResult>> {
    widths
        .into_iter()
        .map(|n| {
            let config = QvConfig {
                num_qubits: n,
                ..base.clone()
            };
            QuantumVolume::new(config)?.run(backend)
        })
        .collect()
}

/// Largest passing quantum volume of a sweep
pub fn achieved_volume(results: &[QvResult]) -> Option<u64> {
    results
        .iter()
        .filter(|r| r.passed)
        .map(|r| r.quantum_volume)
        .max()
}

/// One-call heavy-output test; prints the summary and returns the verdict
/// Gantree: quantum_volume(backend, n, circuits, shots, props) -> bool // QV 판정
pub fn quantum_volume<B: Backend + ?Sized>(
    backend: &B,
    nqubits: usize,
    ncircuits: usize,
    nshots: u64,
    use_backend_properties: bool,
) -> RyvolResult<bool> {
    let config = QvConfig::new(nqubits)
        .with_circuits(ncircuits)
        .with_shots(nshots)
        .with_backend_properties(use_backend_properties)
        .with_verbose(true);
    Ok(QuantumVolume::new(config)?.run(backend)?.passed)
}

// ============================================================================
// Tests
// ============================================================================
