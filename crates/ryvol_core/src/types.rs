//! Core types for RYVOL
//!
//! Gantree: L0_Foundation → CoreTypes
//!
//! Type aliases used throughout the RYVOL workspace. Bitstring keys put
//! qubit 0 in the rightmost character.

use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// Qubit (atom) identifier, 0-indexed
/// Gantree: QubitId // pub type QubitId = usize
pub type QubitId = usize;

/// Rotation angle in radians
/// Gantree: Angle // pub type Angle = f64
pub type Angle = f64;

/// Measurement counts: bitstring -> count
/// Gantree: Counts // pub type Counts = HashMap<String, u64>
pub type Counts = HashMap<String, u64>;

/// Outcome probabilities: bitstring -> probability
pub type ProbabilityMap = HashMap<String, f64>;
