//! Pulse translation configuration
//!
//! Gantree: L2_Pulse → PulseConfig

use ryvol_core::constants::physics;
use ryvol_core::error::{RyvolError, RyvolResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Drive parameters used when translating gates to pulses
/// Gantree: PulseConfig // 펄스 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseConfig {
    /// Rabi amplitude in Hz
    pub rabi_amplitude_hz: f64,

    /// Shortest rx pulse (seconds)
    pub rx_min_duration_s: f64,

    /// Shortest ry pulse (seconds)
    pub ry_min_duration_s: f64,
}

impl PulseConfig {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Configuration with a given Rabi amplitude and default floors
    pub fn with_rabi(rabi_amplitude_hz: f64) -> Self {
        Self {
            rabi_amplitude_hz,
            ..Self::default()
        }
    }

    /// Load from a JSON document; missing fields take defaults
    pub fn from_json(json: &str) -> RyvolResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> RyvolResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Set the Rabi amplitude
    pub fn with_rabi_amplitude(mut self, hz: f64) -> Self {
        self.rabi_amplitude_hz = hz;
        self
    }

    /// Set the rx duration floor
    pub fn with_rx_min_duration(mut self, seconds: f64) -> Self {
        self.rx_min_duration_s = seconds;
        self
    }

    /// Set the ry duration floor
    pub fn with_ry_min_duration(mut self, seconds: f64) -> Self {
        self.ry_min_duration_s = seconds;
        self
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Validate configuration
    pub fn validate(&self) -> RyvolResult<()> {
        if !self.rabi_amplitude_hz.is_finite() || self.rabi_amplitude_hz <= 0.0 {
            return Err(RyvolError::InvalidRabiAmplitude(self.rabi_amplitude_hz));
        }
        for (label, value) in [
            ("rx_min_duration_s", self.rx_min_duration_s),
            ("ry_min_duration_s", self.ry_min_duration_s),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(RyvolError::ConfigError(format!(
                    "{} must be positive, got {}",
                    label, value
                )));
            }
        }
        Ok(())
    }
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            rabi_amplitude_hz: physics::DEFAULT_RABI_AMPLITUDE_HZ,
            rx_min_duration_s: physics::RX_MIN_DURATION_S,
            ry_min_duration_s: physics::RY_MIN_DURATION_S,
        }
    }
}

impl fmt::Display for PulseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PulseConfig:")?;
        writeln!(f, "  Rabi amplitude: {:.3} MHz", self.rabi_amplitude_hz * 1e-6)?;
        writeln!(
            f,
            "  Min durations: rx {:.1}ns, ry {:.1}ns",
            physics::s_to_ns(self.rx_min_duration_s),
            physics::s_to_ns(self.ry_min_duration_s)
        )?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PulseConfig::default();
        assert_eq!(config.rabi_amplitude_hz, 2e6);
        assert_eq!(config.rx_min_duration_s, 1e-9);
        assert_eq!(config.ry_min_duration_s, 4e-9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_rabi() {
        assert!(PulseConfig::with_rabi(0.0).validate().is_err());
        assert!(PulseConfig::with_rabi(f64::INFINITY).validate().is_err());
        assert!(PulseConfig::default()
            .with_ry_min_duration(-1e-9)
            .validate()
            .is_err());
    }

    #[test]
    fn test_from_json_partial() {
        let config = PulseConfig::from_json(r#"{"rabi_amplitude_hz": 1e6}"#).unwrap();
        assert_eq!(config.rabi_amplitude_hz, 1e6);
        assert_eq!(config.ry_min_duration_s, 4e-9);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            PulseConfig::from_json("{"),
            Err(RyvolError::JsonError(_))
        ));
        assert!(matches!(
            PulseConfig::from_json(r#"{"rabi_amplitude_hz": -5.0}"#),
            Err(RyvolError::InvalidRabiAmplitude(_))
        ));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = PulseConfig::with_rabi(3e6).with_rx_min_duration(2e-9);
        let parsed = PulseConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
