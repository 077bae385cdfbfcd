//! # RYVOL Core
//!
//! Foundation types, gates, and circuits shared by the Rydberg pulse
//! translation and the quantum volume benchmark.
//!
//! ## Gantree Architecture
//!
//! ```text
//! ryvol_core // L0+L1: Foundation + Circuit
//!     L0_Foundation // 기반 타입/상수/에러
//!         CoreTypes // 핵심 타입
//!         Numeric // 반올림/포맷
//!         Constants // 물리/QV 상수
//!         Errors // 에러 타입
//!     L1_Circuit // 회로 구조
//!         Gate // 게이트 enum
//!         Circuit // 회로 구조체
//!         CircuitBuilder // 빌더 패턴
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use ryvol_core::prelude::*;
//!
//! let circuit = CircuitBuilder::new(2)
//!     .rx(0, std::f64::consts::FRAC_PI_2)
//!     .cz(0, 1)
//!     .measure_all()
//!     .build();
//!
//! assert_eq!(circuit.count_2q(), 1);
//! println!("{}", circuit.to_qasm());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Core types (Gantree: L0_Foundation → CoreTypes)
pub mod types;

/// Rounding and float formatting (Gantree: L0_Foundation → Numeric)
pub mod numeric;

/// Constants (Gantree: L0_Foundation → Constants)
pub mod constants;

/// Error types (Gantree: L0_Foundation → Errors)
pub mod error;

/// Quantum gates (Gantree: L1_Circuit → Gate)
pub mod gate;

/// Circuit structure (Gantree: L1_Circuit → Circuit)
pub mod circuit;

/// Circuit builder (Gantree: L1_Circuit → CircuitBuilder)
pub mod builder;

// ============================================================================
// Re-exports
// ============================================================================

pub use builder::CircuitBuilder;
pub use circuit::Circuit;
pub use constants::{physics, qv};
pub use error::{RyvolError, RyvolResult};
pub use gate::Gate;
pub use numeric::{format_float, round_to};
pub use types::{Angle, Counts, ProbabilityMap, QubitId};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use ryvol_core::prelude::*;
    //! ```

    pub use crate::builder::CircuitBuilder;
    pub use crate::circuit::Circuit;
    pub use crate::constants::{physics, qv};
    pub use crate::error::{RyvolError, RyvolResult};
    pub use crate::gate::Gate;
    pub use crate::numeric::{format_float, round_to};
    pub use crate::types::{Angle, Counts, ProbabilityMap, QubitId};
}

// ============================================================================
// Version Information
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

// ============================================================================
// Integration Tests
// ============================================================================
