//! Rydberg atom-array control system
//!
//! Gantree: L2_Pulse → System
//!
//! A `PulseSystem` owns named drive lines and accumulates the pulses
//! registered on them. `RydbergSystem` is the in-memory model: every atom
//! `i` carries an `rx{i}` and a `ry{i}` Raman drive plus a `rydbergx{i}`
//! excitation laser.

use crate::envelope::RectEnvelope;
use crate::instruction::Instruction;
use ryvol_core::constants::physics;
use ryvol_core::error::{RyvolError, RyvolResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

// ============================================================================
// PulseSystem Trait
// ============================================================================

/// Target for gate-to-pulse translation
/// Gantree: PulseSystem // 펄스 시스템 trait
pub trait PulseSystem {
    /// Number of atoms in the register
    fn num_atoms(&self) -> usize;

    /// Whether a drive line exists
    fn has_drive(&self, drive: &str) -> bool;

    /// Register a pulse on a drive
    fn add_instruction(
        &mut self,
        instruction: &Instruction,
        envelope: RectEnvelope,
        drive: &str,
    ) -> RyvolResult<()>;
}

// ============================================================================
// RydbergSystem
// ============================================================================

/// Pulse registered on a drive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrivenPulse {
    /// Instruction record
    pub instruction: Instruction,
    /// Envelope played
    pub envelope: RectEnvelope,
    /// Drive line name
    pub drive: String,
}

/// In-memory neutral-atom system
/// Gantree: RydbergSystem // 리드버그 시스템
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RydbergSystem {
    num_atoms: usize,
    drives: BTreeSet<String>,
    pulses: Vec<DrivenPulse>,
}

impl RydbergSystem {
    /// Create a system with the standard three drives per atom
    pub fn new(num_atoms: usize) -> Self {
        let drives = (0..num_atoms)
            .flat_map(|i| {
                [
                    physics::RX_DRIVE_PREFIX,
                    physics::RY_DRIVE_PREFIX,
                    physics::RYDBERG_DRIVE_PREFIX,
                ]
                .into_iter()
                .map(move |prefix| format!("{}{}", prefix, i))
            })
            .collect();

        Self {
            num_atoms,
            drives,
            pulses: Vec::new(),
        }
    }

    /// Registered drive names, sorted
    pub fn drives(&self) -> impl Iterator<Item = &str> {
        self.drives.iter().map(String::as_str)
    }

    /// Registered pulses in insertion order
    pub fn pulses(&self) -> &[DrivenPulse] {
        &self.pulses
    }

    /// Registered instructions in insertion order
    pub fn instructions(&self) -> impl Iterator<Item = &Instruction> {
        self.pulses.iter().map(|p| &p.instruction)
    }

    /// Number of registered pulses
    pub fn len(&self) -> usize {
        self.pulses.len()
    }

    /// Check if no pulses are registered
    pub fn is_empty(&self) -> bool {
        self.pulses.is_empty()
    }

    /// Total time when the pulses play back-to-back (seconds)
    /// Gantree: total_duration(&self) -> f64 // 전체 시간
    pub fn total_duration(&self) -> f64 {
        self.pulses.iter().map(|p| p.instruction.t_end).sum()
    }

    /// Time spent on one drive (seconds)
    pub fn drive_duration(&self, drive: &str) -> f64 {
        self.pulses
            .iter()
            .filter(|p| p.drive == drive)
            .map(|p| p.instruction.t_end)
            .sum()
    }

    /// Remove all registered pulses, keeping the drives
    pub fn clear(&mut self) {
        self.pulses.clear();
    }
}

impl PulseSystem for RydbergSystem {
    fn num_atoms(&self) -> usize {
        self.num_atoms
    }

    fn has_drive(&self, drive: &str) -> bool {
        self.drives.contains(drive)
    }

    fn add_instruction(
        &mut self,
        instruction: &Instruction,
        envelope: RectEnvelope,
        drive: &str,
    ) -> RyvolResult<()> {
        if !self.has_drive(drive) {
            return Err(RyvolError::UnknownDrive(drive.to_string()));
        }
        if let Some(&atom) = instruction.targets.iter().find(|&&a| a >= self.num_atoms) {
            return Err(RyvolError::AtomOutOfRange {
                atom,
                num_atoms: self.num_atoms,
            });
        }

        self.pulses.push(DrivenPulse {
            instruction: instruction.clone(),
            envelope,
            drive: drive.to_string(),
        });
        Ok(())
    }
}

impl fmt::Display for RydbergSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "RydbergSystem({} atoms, {} drives, {} pulses)",
            self.num_atoms,
            self.drives.len(),
            self.pulses.len()
        )?;
        writeln!(
            f,
            "  Total duration: {:.1}ns",
            physics::s_to_ns(self.total_duration())
        )?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
