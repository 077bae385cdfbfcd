//! QV reporting
//!
//! Gantree: L4_Benchmark → Reporter
//!
//! Renders heavy-output test results as text, Markdown or JSON.

use crate::qv::QvResult;
use std::fmt::Write;

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Plain text summary
    Text,
    /// Markdown table
    Markdown,
    /// JSON
    Json,
}

/// QV reporter
/// Gantree: QvReporter // 결과 리포팅
pub struct QvReporter;

impl QvReporter {
    /// Generate report in specified format
    pub fn report(results: &[QvResult], format: ReportFormat) -> String {
        match format {
            ReportFormat::Text => Self::to_text(results),
            ReportFormat::Markdown => Self::to_markdown(results),
            ReportFormat::Json => Self::to_json(results),
        }
    }

    /// Plain text, one summary block per result
    pub fn to_text(results: &[QvResult]) -> String {
        let mut output = String::new();
        output.push_str("RYVOL Quantum Volume\n");
        output.push_str("====================\n");

        for r in results {
            let _ = writeln!(
                output,
                "\n[{}] width {} ({} circuits x {} shots)",
                r.backend, r.num_qubits, r.num_circuits, r.shots
            );
            let _ = writeln!(output, "{}", r.summary());
        }
        output
    }

    /// Markdown table
    pub fn to_markdown(results: &[QvResult]) -> String {
        let mut output = String::new();
        output.push_str("# RYVOL Quantum Volume\n\n");
        output.push_str("| Backend | Width | QV | Circuits | Shots | Heavy % | Ideal Heavy | Passed |\n");
        output.push_str("|---------|-------|----|----------|-------|---------|-------------|--------|\n");

        for r in results {
            let _ = writeln!(
                output,
                "| {} | {} | {} | {} | {} | {:.1}% | {:.3} | {} |",
                r.backend,
                r.num_qubits,
                r.quantum_volume,
                r.num_circuits,
                r.shots,
                r.heavy_percentage,
                r.mean_ideal_heavy_probability(),
                if r.passed { "✓" } else { "✗" }
            );
        }
        output
    }

    /// JSON array of results
    pub fn to_json(results: &[QvResult]) -> String {
        serde_json::to_string_pretty(results).unwrap_or_else(|_| "[]".to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qv::QvCircuitResult;

    fn sample() -> Vec<QvResult> {
        let circuit = QvCircuitResult {
            name: "qv_2_0".into(),
            heavy_outputs: vec!["01".into(), "11".into()],
            ideal_heavy_probability: 0.8,
            heavy_counts: 90,
            shots: 100,
        };
        vec![QvResult::from_circuits("sim", 2, 100, vec![circuit])]
    }

    #[test]
    fn test_text_contains_summary() {
        let text = QvReporter::report(&sample(), ReportFormat::Text);
        assert!(text.contains("Quantum Volume: 4"));
        assert!(text.contains("Percentage Heavy Outputs: 90.0%"));
    }

    #[test]
    fn test_markdown_row() {
        let md = QvReporter::report(&sample(), ReportFormat::Markdown);
        assert!(md.contains("| sim | 2 | 4 | 1 | 100 | 90.0% | 0.800 |"));
    }

    #[test]
    fn test_json_roundtrip() {
        let json = QvReporter::report(&sample(), ReportFormat::Json);
        let parsed: Vec<QvResult> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample());
    }
}
