// ============================================================================
// Numeric Module
// Exact rational arithmetic over fixed-width integers
// ============================================================================
//
// This module provides:
// - Rational: reduced fraction with a positive denominator
// - RationalError: Error types for arithmetic and parsing
// - Text grammar: INTEGER [ "/" INTEGER ] via FromStr and prefix parsing
//
// Design principles:
// - No floating-point operations
// - Checked arithmetic returns Result, a failed operation never mutates
// - i128 intermediates, results narrowed to i64 after reduction
// - Canonical form, so equality and hashing are structural

mod errors;
mod parse;
mod rational;

pub use errors::{RationalError, RationalResult};
pub use rational::Rational;
