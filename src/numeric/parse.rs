// ============================================================================
// Rational Parsing
// Text grammar: INTEGER [ "/" INTEGER ]
// ============================================================================

use super::errors::{RationalError, RationalResult};
use super::rational::Rational;
use std::str::FromStr;

/// Split one integer token off the front of `input`.
///
/// Leading ASCII whitespace is skipped, then an optional sign and the run of
/// ASCII digits form the token. Validation is left to `i64::from_str`, so an
/// empty or sign-only token reports that primitive's own error.
fn split_integer(input: &str) -> (&str, &str) {
    let input = input.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let sign_len = usize::from(input.starts_with(['+', '-']));
    let digits_len = input[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    input.split_at(sign_len + digits_len)
}

impl Rational {
    /// Read a rational from the front of `input` and return the rest.
    ///
    /// Reads a signed integer numerator. If the next character is `/` it is
    /// consumed and a signed integer denominator follows, otherwise the
    /// denominator is 1. Whitespace is skipped before each integer but never
    /// between the numerator and the `/`.
    ///
    /// # Example
    /// ```
    /// use exact_rational::numeric::Rational;
    ///
    /// let (value, rest) = Rational::parse_prefix(" 6/8 apples")?;
    /// assert_eq!(value, Rational::new(3, 4)?);
    /// assert_eq!(rest, " apples");
    /// # Ok::<(), exact_rational::numeric::RationalError>(())
    /// ```
    ///
    /// # Errors
    /// - `InvalidNumerator` / `InvalidDenominator` for malformed integers
    /// - `DivisionByZero` for an explicit zero denominator
    /// - `Overflow` if the reduced value does not fit, e.g. `i64::MIN/-1`
    pub fn parse_prefix(input: &str) -> RationalResult<(Self, &str)> {
        let (token, rest) = split_integer(input);
        let numerator: i64 = token.parse().map_err(RationalError::InvalidNumerator)?;

        let (denominator, rest) = match rest.strip_prefix('/') {
            Some(after_bar) => {
                let (token, rest) = split_integer(after_bar);
                let denominator: i64 = token.parse().map_err(RationalError::InvalidDenominator)?;
                (denominator, rest)
            },
            None => (1, rest),
        };

        Ok((Self::new(numerator, denominator)?, rest))
    }

    /// Parse from the front of `input` into `self`, returning the rest.
    ///
    /// On error `self` keeps its previous value.
    pub fn assign_parsed<'a>(&mut self, input: &'a str) -> RationalResult<&'a str> {
        let (value, rest) = Self::parse_prefix(input)?;
        *self = value;
        Ok(rest)
    }
}

impl FromStr for Rational {
    type Err = RationalError;

    /// Parse a complete rational.
    ///
    /// # Examples
    /// - "3" -> 3/1
    /// - "-6/8" -> -3/4
    /// - "1/-2" -> -1/2
    /// - "3/4 " -> `TrailingInput`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value, rest) = Self::parse_prefix(s)?;
        if !rest.is_empty() {
            return Err(RationalError::TrailingInput);
        }
        Ok(value)
    }
}

// ============================================================================
// Tests
// ============================================================================
