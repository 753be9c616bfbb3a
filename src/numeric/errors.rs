// ============================================================================
// Rational Errors
// Error types for rational arithmetic and text parsing
// ============================================================================

use std::fmt;
use std::num::ParseIntError;

/// Errors that can occur while building, combining or parsing rationals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RationalError {
    /// A zero denominator was supplied or a division by zero was attempted
    DivisionByZero,
    /// The reduced result does not fit in i64
    Overflow,
    /// The numerator token is not a valid integer
    InvalidNumerator(ParseIntError),
    /// The denominator token is not a valid integer
    InvalidDenominator(ParseIntError),
    /// Characters remain after a complete rational
    TrailingInput,
}

impl fmt::Display for RationalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RationalError::DivisionByZero => write!(f, "division by zero"),
            RationalError::Overflow => {
                write!(f, "arithmetic overflow: reduced result does not fit in i64")
            },
            RationalError::InvalidNumerator(e) => write!(f, "invalid numerator: {}", e),
            RationalError::InvalidDenominator(e) => write!(f, "invalid denominator: {}", e),
            RationalError::TrailingInput => {
                write!(f, "invalid input: unexpected characters after rational")
            },
        }
    }
}

impl std::error::Error for RationalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RationalError::InvalidNumerator(e) | RationalError::InvalidDenominator(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type alias for rational operations
pub type RationalResult<T> = Result<T, RationalError>;
