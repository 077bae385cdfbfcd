//! Rectangular pulse envelopes
//!
//! Gantree: L2_Pulse → Envelope
//!
//! Amplitudes are angular rates in rad/µs; times are in seconds.

use ryvol_core::constants::physics;
use ryvol_core::error::{RyvolError, RyvolResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Constant-amplitude envelope on `[0, t_final]`
/// Gantree: RectEnvelope // 사각 엔벨로프
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectEnvelope {
    /// Envelope name
    pub name: String,

    /// Drive amplitude in rad/µs; the sign carries the rotation direction
    pub amplitude: f64,

    /// Pulse length in seconds
    pub t_final: f64,
}

impl RectEnvelope {
    /// Create a rectangular envelope
    pub fn new(amplitude: f64, t_final: f64) -> RyvolResult<Self> {
        if !amplitude.is_finite() {
            return Err(RyvolError::InvalidRabiAmplitude(amplitude));
        }
        if !t_final.is_finite() || t_final <= 0.0 {
            return Err(RyvolError::InvalidDuration(t_final));
        }
        Ok(Self {
            name: physics::RECT_ENVELOPE_NAME.to_string(),
            amplitude,
            t_final,
        })
    }

    /// Envelope value at time `t` (seconds)
    /// Gantree: shape(&self, t) -> f64 // 엔벨로프 값
    pub fn shape(&self, t: f64) -> f64 {
        if (0.0..=self.t_final).contains(&t) {
            self.amplitude
        } else {
            0.0
        }
    }

    /// Piecewise-constant samples at `0, dt, 2dt, ...` covering the pulse
    pub fn sample(&self, dt: f64) -> RyvolResult<Vec<f64>> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(RyvolError::InvalidDuration(dt));
        }
        // ratios like 1.25e-7 / 1e-9 land a hair above the integer
        let steps = (self.t_final / dt - 1e-9).ceil().max(1.0) as usize;
        Ok((0..steps).map(|i| self.shape(i as f64 * dt)).collect())
    }

    /// Rotation angle delivered by the pulse in radians
    pub fn area(&self) -> f64 {
        self.amplitude * self.t_final * 1e6
    }

    /// Pulse length in nanoseconds
    pub fn duration_ns(&self) -> f64 {
        physics::s_to_ns(self.t_final)
    }
}

impl fmt::Display for RectEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(amp={:.4} rad/µs, t={:.1}ns)",
            self.name,
            self.amplitude,
            self.duration_ns()
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
