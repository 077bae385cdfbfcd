//! Constants for RYVOL
//!
//! Gantree: L0_Foundation → Constants
//!
//! Rydberg drive parameters, pulse timing grid, and quantum volume
//! statistics.

// ============================================================================
// Physics Constants
// Gantree: physics // 물리 상수
// ============================================================================

pub mod physics {
    //! Neutral-atom drive parameters

    /// Default Rabi amplitude in Hz (2 MHz)
    /// Gantree: DEFAULT_RABI_AMPLITUDE_HZ: f64 = 2e6
    pub const DEFAULT_RABI_AMPLITUDE_HZ: f64 = 2e6;

    /// Shortest rx pulse the AWG can play (seconds)
    pub const RX_MIN_DURATION_S: f64 = 1e-9;

    /// Shortest ry pulse the AWG can play (seconds)
    pub const RY_MIN_DURATION_S: f64 = 4e-9;

    /// Shortest Rydberg π-pulse (seconds), one grid step
    pub const CZ_MIN_PI_TIME_S: f64 = 1e-9;

    /// Decimal places kept on rotation angles
    pub const ANGLE_DECIMALS: i32 = 6;

    /// Decimal places kept on durations in seconds (1 ns grid)
    pub const DURATION_DECIMALS: i32 = 9;

    /// Rectangular envelope name used for every generated pulse
    pub const RECT_ENVELOPE_NAME: &str = "rectangular_envelope";

    /// Drive prefix for x rotations
    pub const RX_DRIVE_PREFIX: &str = "rx";

    /// Drive prefix for y rotations
    pub const RY_DRIVE_PREFIX: &str = "ry";

    /// Drive prefix for the Rydberg excitation laser
    pub const RYDBERG_DRIVE_PREFIX: &str = "rydbergx";

    /// Angular drive amplitude in rad/µs for a Rabi frequency in Hz
    #[inline]
    pub fn angular_amplitude(rabi_hz: f64) -> f64 {
        2.0 * std::f64::consts::PI * rabi_hz * 1e-6
    }

    /// Convert seconds to nanoseconds
    #[inline]
    pub fn s_to_ns(s: f64) -> f64 {
        s * 1e9
    }

    /// Convert nanoseconds to seconds
    #[inline]
    pub fn ns_to_s(ns: f64) -> f64 {
        ns * 1e-9
    }
}

// ============================================================================
// Quantum Volume Constants
// Gantree: qv // QV 상수
// ============================================================================

pub mod qv {
    //! Heavy-output test parameters

    /// Heavy output probability a device must exceed
    /// Gantree: HEAVY_OUTPUT_THRESHOLD: f64 = 2/3
    pub const HEAVY_OUTPUT_THRESHOLD: f64 = 2.0 / 3.0;

    /// Standard deviations subtracted from the heavy count (~97.7% one-sided)
    pub const CONFIDENCE_SIGMAS: f64 = 2.0;

    /// Default number of random circuits
    pub const DEFAULT_CIRCUITS: usize = 100;

    /// Default shots per circuit
    pub const DEFAULT_SHOTS: u64 = 1024;

    /// Probabilities at or below this are treated as unreachable outcomes
    pub const ZERO_PROBABILITY_EPS: f64 = 1e-15;

    /// Quantum volume reported for a width
    #[inline]
    pub fn volume(num_qubits: usize) -> u64 {
        1u64.checked_shl(num_qubits as u32).unwrap_or(u64::MAX)
    }
}

// ============================================================================
// Tests
// ============================================================================
