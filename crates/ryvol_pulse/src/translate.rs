//! Circuit-to-pulse dispatch
//!
//! Gantree: L2_Pulse → Translator
//!
//! Walks a circuit in order and translates every operation the Rydberg
//! drives can play. Routing is by gate name: any name containing `ry`
//! becomes a y rotation, then any name containing `rx` an x rotation,
//! then exactly `cz` the CZ sequence. Controlled rotations (`cry`, `crx`)
//! therefore land on their first qubit. Everything else is logged and
//! skipped.

use crate::config::PulseConfig;
use crate::gates::{create_cz_gate, create_rotation_gate, RotationAxis};
use crate::instruction::Instruction;
use crate::system::PulseSystem;
use log::{debug, info};
use ryvol_core::error::{RyvolError, RyvolResult};
use ryvol_core::{Circuit, Gate};

/// Gate-to-pulse translator with fixed drive parameters
/// Gantree: PulseTranslator // 회로 변환기
#[derive(Debug, Clone, Default)]
pub struct PulseTranslator {
    config: PulseConfig,
}

impl PulseTranslator {
    /// Create a translator; the configuration is validated
    pub fn new(config: PulseConfig) -> RyvolResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    pub fn config(&self) -> &PulseConfig {
        &self.config
    }

    /// Translate one operation; `None` when it has no pulse form
    pub fn translate_gate<S: PulseSystem + ?Sized>(
        &self,
        system: &mut S,
        gate: &Gate,
    ) -> RyvolResult<Option<Vec<Instruction>>> {
        let name = gate.name();
        let rabi = self.config.rabi_amplitude_hz;

        let axis = if name.contains("ry") {
            Some((RotationAxis::Y, self.config.ry_min_duration_s))
        } else if name.contains("rx") {
            Some((RotationAxis::X, self.config.rx_min_duration_s))
        } else {
            None
        };

        if let Some((axis, floor)) = axis {
            let (angle, atom) = first_param_and_qubit(gate)?;
            let instruction = create_rotation_gate(system, axis, angle, atom, rabi, floor)?;
            return Ok(Some(vec![instruction]));
        }

        if name == "cz" {
            if let &[atom1, atom2] = gate.qubits().as_slice() {
                return create_cz_gate(system, atom1, atom2, rabi).map(Some);
            }
        }

        Ok(None)
    }

    /// Translate a whole circuit into a flat instruction list
    /// Gantree: translate(&self, sys, circuit) -> Vec<Instruction> // 회로 변환
    pub fn translate<S: PulseSystem + ?Sized>(
        &self,
        system: &mut S,
        circuit: &Circuit,
    ) -> RyvolResult<Vec<Instruction>> {
        let mut instructions = Vec::new();

        for gate in circuit.gates() {
            match self.translate_gate(system, gate)? {
                Some(pulses) => instructions.extend(pulses),
                None => info!("No pulse translation for '{}', skipping", gate.name()),
            }
        }

        debug!(
            "Translated {} operations into {} instructions",
            circuit.gate_count(),
            instructions.len()
        );
        Ok(instructions)
    }
}

fn first_param_and_qubit(gate: &Gate) -> RyvolResult<(f64, usize)> {
    match (gate.params().first(), gate.qubits().first()) {
        (Some(&angle), Some(&atom)) => Ok((angle, atom)),
        _ => Err(RyvolError::UnsupportedGate {
            gate: gate.name().to_string(),
            basis: "rx, ry, cz".to_string(),
        }),
    }
}

/// Translate a circuit with the default duration floors
pub fn create_instructions<S: PulseSystem + ?Sized>(
    system: &mut S,
    circuit: &Circuit,
    rabi_amplitude: f64,
) -> RyvolResult<Vec<Instruction>> {
    PulseTranslator::new(PulseConfig::with_rabi(rabi_amplitude))?.translate(system, circuit)
}

// ============================================================================
// Tests
// ============================================================================
