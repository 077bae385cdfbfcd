//! # RYVOL Pulse
//!
//! Translation of `rx`, `ry` and `cz` gates into rectangular drive pulses
//! for a neutral-atom (Rydberg) processor.
//!
//! ## Gantree Architecture
//!
//! ```text
//! ryvol_pulse // L2: Pulse
//!     Envelope // 사각 엔벨로프
//!     Instruction // 펄스 명령
//!     Naming // 이름 규칙
//!     System // 드라이브 시스템
//!     PulseConfig // 설정
//!     GatePulses // 게이트 → 펄스
//!     Translator // 회로 → 펄스
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use ryvol_core::CircuitBuilder;
//! use ryvol_pulse::prelude::*;
//!
//! let circuit = CircuitBuilder::new(2)
//!     .ry(0, std::f64::consts::FRAC_PI_2)
//!     .cz(0, 1)
//!     .build();
//!
//! let mut system = RydbergSystem::new(2);
//! let instructions = create_instructions(&mut system, &circuit, 2e6).unwrap();
//! assert_eq!(instructions.len(), 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Rectangular envelopes (Gantree: L2_Pulse → Envelope)
pub mod envelope;

/// Instruction records (Gantree: L2_Pulse → Instruction)
pub mod instruction;

/// Instruction naming (Gantree: L2_Pulse → Naming)
pub mod naming;

/// Drive systems (Gantree: L2_Pulse → System)
pub mod system;

/// Configuration (Gantree: L2_Pulse → PulseConfig)
pub mod config;

/// Gate pulses (Gantree: L2_Pulse → GatePulses)
pub mod gates;

/// Circuit dispatch (Gantree: L2_Pulse → Translator)
pub mod translate;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::PulseConfig;
pub use envelope::RectEnvelope;
pub use gates::{
    create_cz_gate, create_rotation_gate, create_rx_gate, create_ry_gate, cz_pi_time,
    rotation_duration, RotationAxis,
};
pub use instruction::Instruction;
pub use naming::{name_cz_gate, name_cz_part, name_rx_gate, name_ry_gate};
pub use system::{DrivenPulse, PulseSystem, RydbergSystem};
pub use translate::{create_instructions, PulseTranslator};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases

    pub use crate::config::PulseConfig;
    pub use crate::envelope::RectEnvelope;
    pub use crate::gates::{create_cz_gate, create_rx_gate, create_ry_gate, RotationAxis};
    pub use crate::instruction::Instruction;
    pub use crate::system::{PulseSystem, RydbergSystem};
    pub use crate::translate::{create_instructions, PulseTranslator};
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Integration Tests
// ============================================================================
