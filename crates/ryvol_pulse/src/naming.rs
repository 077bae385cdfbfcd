//! Deterministic instruction names
//!
//! Gantree: L2_Pulse → Naming
//!
//! Rotation names embed the angle rounded to six decimals, so angles that
//! agree to that precision share a name.

use ryvol_core::constants::physics::ANGLE_DECIMALS;
use ryvol_core::numeric::{format_float, round_to};
use ryvol_core::QubitId;

/// `rx_{angle}_{atom}`
pub fn name_rx_gate(angle: f64, atom: QubitId) -> String {
    format!("rx_{}_{}", format_float(round_to(angle, ANGLE_DECIMALS)), atom)
}

/// `ry_{angle}_{atom}`
pub fn name_ry_gate(angle: f64, atom: QubitId) -> String {
    format!("ry_{}_{}", format_float(round_to(angle, ANGLE_DECIMALS)), atom)
}

/// `cz_{atom1}{atom2}`
pub fn name_cz_gate(atom1: QubitId, atom2: QubitId) -> String {
    format!("cz_{}{}", atom1, atom2)
}

/// Name of the `part`-th sub-pulse of a CZ (1-based)
pub fn name_cz_part(atom1: QubitId, atom2: QubitId, part: usize) -> String {
    format!("{}_{}", name_cz_gate(atom1, atom2), part)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_rotation_names() {
        assert_eq!(name_rx_gate(PI / 2.0, 0), "rx_1.570796_0");
        assert_eq!(name_ry_gate(-PI, 12), "ry_-3.141593_12");
        assert_eq!(name_rx_gate(0.0, 1), "rx_0.0_1");
        assert_eq!(name_ry_gate(2.0, 1), "ry_2.0_1");
    }

    #[test]
    fn test_names_stable_under_rounding() {
        assert_eq!(name_rx_gate(0.1234564, 2), name_rx_gate(0.1234561, 2));
        assert_ne!(name_rx_gate(0.123456, 2), name_rx_gate(0.123457, 2));
    }

    #[test]
    fn test_tiny_angle_rounds_to_zero() {
        assert_eq!(name_ry_gate(4e-7, 0), "ry_0.0_0");
    }

    #[test]
    fn test_cz_names() {
        assert_eq!(name_cz_gate(0, 1), "cz_01");
        assert_eq!(name_cz_part(3, 12, 2), "cz_312_2");
    }
}
