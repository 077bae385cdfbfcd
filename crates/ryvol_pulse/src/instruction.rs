//! Pulse-level instruction records
//!
//! Gantree: L2_Pulse → Instruction

use ryvol_core::{Gate, QubitId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One pulse played on one drive line
/// Gantree: Instruction // 펄스 명령
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// Unique name encoding gate type, angle and atoms
    pub name: String,

    /// Pulse end time in seconds
    pub t_end: f64,

    /// Atoms the instruction acts on
    pub targets: Vec<QubitId>,

    /// Drive lines the pulse is played on
    pub channels: Vec<String>,

    /// Circuit-level gate this pulse implements (`rx`, `ry`, `cz`)
    pub gate_type: String,

    /// Ideal unitary; never populated for pulse-level instructions
    pub ideal: Option<Gate>,
}

impl Instruction {
    /// Create an instruction on a single drive
    pub fn new(
        name: impl Into<String>,
        t_end: f64,
        targets: Vec<QubitId>,
        channel: impl Into<String>,
        gate_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            t_end,
            targets,
            channels: vec![channel.into()],
            gate_type: gate_type.into(),
            ideal: None,
        }
    }

    /// Duration in nanoseconds
    pub fn duration_ns(&self) -> f64 {
        self.t_end * 1e9
    }

    /// Whether the instruction touches an atom
    pub fn affects_atom(&self, atom: QubitId) -> bool {
        self.targets.contains(&atom)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{:.0}ns] on {} -> {:?}",
            self.name,
            self.duration_ns(),
            self.channels.join(","),
            self.targets
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_new() {
        let inst = Instruction::new("cz_01_2", 5e-7, vec![0, 1], "rydbergx1", "cz");
        assert_eq!(inst.channels, vec!["rydbergx1".to_string()]);
        assert!(inst.ideal.is_none());
        assert!(inst.affects_atom(1));
        assert!(!inst.affects_atom(2));
    }

    #[test]
    fn test_display() {
        let inst = Instruction::new("rx_0.5_3", 4e-8, vec![3], "rx3", "rx");
        assert_eq!(inst.to_string(), "rx_0.5_3 [40ns] on rx3 -> [3]");
    }
}
