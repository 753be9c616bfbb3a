// ============================================================================
// Exact Rational Library
// Reduced fractions over fixed-width integers with checked arithmetic
// ============================================================================

//! # Exact Rational
//!
//! An exact rational-number value type for bookkeeping that must not drift
//! the way floating point does.
//!
//! ## Features
//!
//! - **Canonical form**: always reduced, denominator always positive
//! - **Checked arithmetic**: `i128` intermediates, `Overflow` instead of wraparound
//! - **No partial updates**: a failed operation leaves its receiver unchanged
//! - **Text form**: `3`, `-3/4`, parsed back with `FromStr` or prefix extraction
//! - **Stream reading**: successive rationals from any `BufRead`
//!
//! ## Example
//!
//! ```rust
//! use exact_rational::prelude::*;
//!
//! let mut balance = Rational::new(1, 2)?;
//! balance.try_add_assign("1/3".parse()?)?;
//! assert_eq!(balance.to_string(), "5/6");
//!
//! let previous = balance.post_increment()?;
//! assert_eq!(previous, Rational::new(5, 6)?);
//! assert_eq!(balance, Rational::new(11, 6)?);
//!
//! assert_eq!(balance.checked_div(Rational::ZERO), Err(RationalError::DivisionByZero));
//! # Ok::<(), RationalError>(())
//! ```

pub mod numeric;
pub mod stream;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{Rational, RationalError, RationalResult};
    pub use crate::stream::{RationalReader, StreamError};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    fn r(numerator: i64, denominator: i64) -> Rational {
        Rational::new(numerator, denominator).unwrap()
    }

    #[test]
    fn test_end_to_end_bookkeeping() {
        // Split 7 units three ways, then check the shares add back up
        let total = Rational::from(7);
        let share = total.checked_div(Rational::from(3)).unwrap();
        assert_eq!(share.to_string(), "7/3");

        let mut accumulated = Rational::ZERO;
        for _ in 0..3 {
            accumulated.try_add_assign(share).unwrap();
        }
        assert_eq!(accumulated, total);
        assert!(accumulated.is_integer());
    }

    #[test]
    fn test_division_by_zero_sites() {
        assert_eq!(Rational::new(1, 0), Err(RationalError::DivisionByZero));

        let mut x = r(1, 2);
        assert_eq!(x.set_denominator(0), Err(RationalError::DivisionByZero));
        assert_eq!(x, r(1, 2));

        assert_eq!(x.checked_div(r(0, 5)), Err(RationalError::DivisionByZero));
        assert_eq!("5/0".parse::<Rational>(), Err(RationalError::DivisionByZero));
    }

    #[test]
    fn test_text_stream_to_total() {
        let input = "1/2 1/3 1/6\n-1/4 bogus 1/4\n";
        let mut total = Rational::ZERO;
        let mut rejected = 0;

        for item in RationalReader::new(input.as_bytes()) {
            match item {
                Ok(value) => {
                    total.try_add_assign(value).unwrap();
                },
                Err(StreamError::Parse { .. }) => rejected += 1,
                Err(e) => panic!("unexpected error: {}", e),
            }
        }

        assert_eq!(total, Rational::ONE);
        assert_eq!(rejected, 1);
        assert_eq!(total.to_string().parse::<Rational>().unwrap(), total);
    }
}
