//! Gate-to-pulse translation
//!
//! Gantree: L2_Pulse → GatePulses
//!
//! Rotations become a single rectangular pulse whose length is
//! `|θ| / (2π·Ω)` on the 1 ns grid, clamped to a per-axis floor. A CZ is a
//! π / 2π / π sequence on the Rydberg lasers of the two atoms.

use crate::envelope::RectEnvelope;
use crate::instruction::Instruction;
use crate::naming::{name_cz_part, name_rx_gate, name_ry_gate};
use crate::system::PulseSystem;
use log::warn;
use ryvol_core::constants::physics;
use ryvol_core::error::{RyvolError, RyvolResult};
use ryvol_core::numeric::round_to;
use ryvol_core::QubitId;
use std::f64::consts::PI;

// ============================================================================
// Rotation Axis
// ============================================================================

/// Axis of a single-atom rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationAxis {
    /// Rotation about x, played on `rx{atom}`
    X,
    /// Rotation about y, played on `ry{atom}`
    Y,
}

impl RotationAxis {
    /// Circuit-level gate name
    pub fn gate_type(self) -> &'static str {
        match self {
            RotationAxis::X => "rx",
            RotationAxis::Y => "ry",
        }
    }

    /// Drive line for an atom
    pub fn drive(self, atom: QubitId) -> String {
        let prefix = match self {
            RotationAxis::X => physics::RX_DRIVE_PREFIX,
            RotationAxis::Y => physics::RY_DRIVE_PREFIX,
        };
        format!("{}{}", prefix, atom)
    }

    /// Shortest pulse the hardware plays on this axis
    pub fn default_min_duration(self) -> f64 {
        match self {
            RotationAxis::X => physics::RX_MIN_DURATION_S,
            RotationAxis::Y => physics::RY_MIN_DURATION_S,
        }
    }

    fn name(self, angle: f64, atom: QubitId) -> String {
        match self {
            RotationAxis::X => name_rx_gate(angle, atom),
            RotationAxis::Y => name_ry_gate(angle, atom),
        }
    }
}

// ============================================================================
// Timing
// ============================================================================

fn check_rabi(rabi_amplitude: f64) -> RyvolResult<()> {
    if !rabi_amplitude.is_finite() || rabi_amplitude <= 0.0 {
        return Err(RyvolError::InvalidRabiAmplitude(rabi_amplitude));
    }
    Ok(())
}

/// Unclamped rotation time in seconds, on the 1 ns grid
/// Gantree: rotation_duration(θ, Ω) -> f64 // 회전 시간
pub fn rotation_duration(angle: f64, rabi_amplitude: f64) -> f64 {
    let abs_angle = round_to(round_to(angle, physics::ANGLE_DECIMALS).abs(), physics::ANGLE_DECIMALS);
    round_to(
        abs_angle / (2.0 * PI * rabi_amplitude),
        physics::DURATION_DECIMALS,
    )
}

/// Rydberg π-pulse time in seconds, on the 1 ns grid
pub fn cz_pi_time(rabi_amplitude: f64) -> f64 {
    (1.0 / (2.0 * rabi_amplitude) * 1e9).round_ties_even() * 1e-9
}

// ============================================================================
// Rotations
// ============================================================================

/// Translate a rotation with an explicit duration floor
/// Gantree: create_rotation_gate(sys, axis, θ, atom, Ω, floor) -> Instruction // 회전 펄스
pub fn create_rotation_gate<S: PulseSystem + ?Sized>(
    system: &mut S,
    axis: RotationAxis,
    angle: f64,
    atom: QubitId,
    rabi_amplitude: f64,
    min_duration: f64,
) -> RyvolResult<Instruction> {
    if !angle.is_finite() {
        return Err(RyvolError::InvalidAngle(angle));
    }
    check_rabi(rabi_amplitude)?;

    let rounded = round_to(angle, physics::ANGLE_DECIMALS);
    let rabi = if rounded < 0.0 {
        -rabi_amplitude
    } else {
        rabi_amplitude
    };

    let mut t_gate = rotation_duration(angle, rabi_amplitude);
    if t_gate < min_duration {
        warn!(
            "{} pulse on atom {} too short ({:.3e} s) for angle {}; clamping to {:.1e} s",
            axis.gate_type(),
            atom,
            t_gate,
            angle,
            min_duration
        );
        t_gate = min_duration;
    }

    let drive = axis.drive(atom);
    let instruction = Instruction::new(
        axis.name(rounded, atom),
        t_gate,
        vec![atom],
        drive.clone(),
        axis.gate_type(),
    );
    let envelope = RectEnvelope::new(physics::angular_amplitude(rabi), t_gate)?;
    system.add_instruction(&instruction, envelope, &drive)?;

    Ok(instruction)
}

/// Translate `rx(angle)` on `atom`
pub fn create_rx_gate<S: PulseSystem + ?Sized>(
    system: &mut S,
    angle: f64,
    atom: QubitId,
    rabi_amplitude: f64,
) -> RyvolResult<Instruction> {
    create_rotation_gate(
        system,
        RotationAxis::X,
        angle,
        atom,
        rabi_amplitude,
        physics::RX_MIN_DURATION_S,
    )
}

/// Translate `ry(angle)` on `atom`
pub fn create_ry_gate<S: PulseSystem + ?Sized>(
    system: &mut S,
    angle: f64,
    atom: QubitId,
    rabi_amplitude: f64,
) -> RyvolResult<Instruction> {
    create_rotation_gate(
        system,
        RotationAxis::Y,
        angle,
        atom,
        rabi_amplitude,
        physics::RY_MIN_DURATION_S,
    )
}

// ============================================================================
// Controlled-Z
// ============================================================================

/// Translate `cz(atom1, atom2)` into its three Rydberg sub-pulses
/// Gantree: create_cz_gate(sys, a1, a2, Ω) -> [Instruction; 3] // CZ 펄스
pub fn create_cz_gate<S: PulseSystem + ?Sized>(
    system: &mut S,
    atom1: QubitId,
    atom2: QubitId,
    rabi_amplitude: f64,
) -> RyvolResult<Vec<Instruction>> {
    check_rabi(rabi_amplitude)?;

    let mut t_pi = cz_pi_time(rabi_amplitude);
    if t_pi < physics::CZ_MIN_PI_TIME_S {
        warn!(
            "cz π-pulse on atoms {},{} too short ({:.3e} s) at {:.3e} Hz; clamping to {:.1e} s",
            atom1,
            atom2,
            t_pi,
            rabi_amplitude,
            physics::CZ_MIN_PI_TIME_S
        );
        t_pi = physics::CZ_MIN_PI_TIME_S;
    }
    let drive1 = format!("{}{}", physics::RYDBERG_DRIVE_PREFIX, atom1);
    let drive2 = format!("{}{}", physics::RYDBERG_DRIVE_PREFIX, atom2);

    // reject before anything is registered
    for drive in [&drive1, &drive2] {
        if !system.has_drive(drive) {
            return Err(RyvolError::UnknownDrive(drive.clone()));
        }
    }

    let amplitude = physics::angular_amplitude(rabi_amplitude);
    let sequence = [(t_pi, &drive1), (2.0 * t_pi, &drive2), (t_pi, &drive1)];

    let mut instructions = Vec::with_capacity(sequence.len());
    for (part, (t_end, drive)) in sequence.into_iter().enumerate() {
        let instruction = Instruction::new(
            name_cz_part(atom1, atom2, part + 1),
            t_end,
            vec![atom1, atom2],
            drive.clone(),
            "cz",
        );
        system.add_instruction(&instruction, RectEnvelope::new(amplitude, t_end)?, drive)?;
        instructions.push(instruction);
    }

    Ok(instructions)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::RydbergSystem;
    use approx::assert_relative_eq;

    const RABI: f64 = 2e6;

    #[test]
    fn test_rotation_duration() {
        // π/2 at 2 MHz -> 125 ns
        assert_relative_eq!(rotation_duration(PI / 2.0, RABI), 1.25e-7, max_relative = 1e-12);
        assert_relative_eq!(rotation_duration(-PI, RABI), 2.5e-7, max_relative = 1e-12);
    }

    #[test]
    fn test_rx_zero_angle_clamps() {
        let mut system = RydbergSystem::new(1);
        let gate = create_rx_gate(&mut system, 0.0, 0, RABI).unwrap();
        assert_eq!(gate.t_end, 1e-9);
        assert_eq!(gate.name, "rx_0.0_0");
        assert_eq!(gate.channels, vec!["rx0".to_string()]);
    }

    #[test]
    fn test_ry_zero_angle_clamps() {
        let mut system = RydbergSystem::new(1);
        let gate = create_ry_gate(&mut system, 0.0, 0, RABI).unwrap();
        assert_eq!(gate.t_end, 4e-9);
        assert_eq!(gate.gate_type, "ry");
    }

    #[test]
    fn test_small_ry_clamps_but_rx_does_not() {
        // 0.03 rad at 2 MHz -> ~2.4 ns
        let mut system = RydbergSystem::new(1);
        let rx = create_rx_gate(&mut system, 0.03, 0, RABI).unwrap();
        let ry = create_ry_gate(&mut system, 0.03, 0, RABI).unwrap();
        assert_relative_eq!(rx.t_end, 2e-9, max_relative = 1e-12);
        assert_eq!(ry.t_end, 4e-9);
    }

    #[test]
    fn test_negative_angle_flips_amplitude() {
        let mut system = RydbergSystem::new(2);
        let gate = create_rx_gate(&mut system, -PI / 2.0, 1, RABI).unwrap();
        assert_eq!(gate.name, "rx_-1.570796_1");

        let pulse = &system.pulses()[0];
        assert!(pulse.envelope.amplitude < 0.0);
        assert_relative_eq!(pulse.envelope.amplitude, -4.0 * PI, max_relative = 1e-12);
        assert_relative_eq!(pulse.envelope.area(), -PI / 2.0, max_relative = 1e-6);
        assert_eq!(pulse.drive, "rx1");
    }

    #[test]
    fn test_rotation_rejects_bad_inputs() {
        let mut system = RydbergSystem::new(1);
        assert!(matches!(
            create_rx_gate(&mut system, f64::NAN, 0, RABI),
            Err(RyvolError::InvalidAngle(_))
        ));
        assert!(matches!(
            create_ry_gate(&mut system, 1.0, 0, 0.0),
            Err(RyvolError::InvalidRabiAmplitude(_))
        ));
        assert!(matches!(
            create_ry_gate(&mut system, 1.0, 4, RABI),
            Err(RyvolError::UnknownDrive(_))
        ));
        assert!(system.is_empty());
    }

    #[test]
    fn test_cz_sequence() {
        let mut system = RydbergSystem::new(3);
        let parts = create_cz_gate(&mut system, 0, 2, RABI).unwrap();

        let names: Vec<&str> = parts.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["cz_02_1", "cz_02_2", "cz_02_3"]);

        let channels: Vec<&str> = parts.iter().map(|p| p.channels[0].as_str()).collect();
        assert_eq!(channels, vec!["rydbergx0", "rydbergx2", "rydbergx0"]);

        assert!(parts.iter().all(|p| p.targets == vec![0, 2] && p.gate_type == "cz"));
        assert_relative_eq!(parts[1].t_end, 2.0 * parts[0].t_end);
        assert_eq!(parts[0].t_end, parts[2].t_end);
    }

    #[test]
    fn test_cz_total_is_four_pi_times() {
        for rabi in [1e6, 2e6, 3.3e6, 7e6] {
            let mut system = RydbergSystem::new(2);
            let parts = create_cz_gate(&mut system, 0, 1, rabi).unwrap();
            let total: f64 = parts.iter().map(|p| p.t_end).sum();
            assert_relative_eq!(total, 4.0 * cz_pi_time(rabi), max_relative = 1e-12);
            assert_relative_eq!(system.total_duration(), total);
        }
    }

    #[test]
    fn test_cz_pi_time_grid() {
        assert_relative_eq!(cz_pi_time(2e6), 2.5e-7, max_relative = 1e-12);
        // 1/(2·3.3 MHz) = 151.5 ns -> 152 ns
        assert_relative_eq!(cz_pi_time(3.3e6), 1.52e-7, max_relative = 1e-12);
    }

    #[test]
    fn test_cz_unknown_atom_registers_nothing() {
        let mut system = RydbergSystem::new(2);
        assert!(create_cz_gate(&mut system, 0, 3, RABI).is_err());
        assert!(system.is_empty());
    }

    #[test]
    fn test_cz_fast_rabi_clamps_to_grid_step() {
        // 1/(2·1 GHz) = 0.5 ns rounds to 0 on the 1 ns grid
        assert_eq!(cz_pi_time(1e9), 0.0);

        let mut system = RydbergSystem::new(2);
        let parts = create_cz_gate(&mut system, 0, 1, 1e9).unwrap();
        let durations: Vec<f64> = parts.iter().map(|p| p.t_end).collect();
        assert_eq!(durations, vec![1e-9, 2e-9, 1e-9]);
        assert_eq!(system.len(), 3);
    }
}
