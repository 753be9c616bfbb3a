// ============================================================================
// Rational
// Exact fractions over i64, always stored in reduced form
// ============================================================================

use super::errors::{RationalError, RationalResult};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Exact rational number `numerator / denominator`.
///
/// Every value is kept in canonical form:
/// - `denominator > 0`, the sign lives in the numerator
/// - `gcd(|numerator|, denominator) == 1`, zero is `0/1`
///
/// Canonical form makes structural equality the same as numeric equality,
/// so `PartialEq`, `Eq` and `Hash` are derived.
///
/// All arithmetic goes through `i128` intermediates. The reduced result is
/// narrowed back to `i64` and `RationalError::Overflow` is returned when it
/// does not fit.
///
/// # Example
/// ```
/// use exact_rational::numeric::Rational;
///
/// let half = Rational::new(1, 2)?;
/// let third = Rational::new(1, 3)?;
/// assert_eq!(half.checked_add(third)?, Rational::new(5, 6)?);
/// assert_eq!(Rational::new(2, -4)?.to_string(), "-1/2");
/// # Ok::<(), exact_rational::numeric::RationalError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: i64,
    denominator: i64,
}

// ============================================================================
// Normalization
// ============================================================================

/// Euclidean gcd over non-negative operands. `gcd(a, 0) == a`.
const fn gcd(mut a: i128, mut b: i128) -> i128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

impl Rational {
    /// Zero (0/1)
    pub const ZERO: Self = Self::from_integer(0);

    /// One (1/1)
    pub const ONE: Self = Self::from_integer(1);

    /// Bring a wide fraction into canonical form and narrow it to i64.
    fn normalize(mut numerator: i128, mut denominator: i128) -> RationalResult<Self> {
        if denominator == 0 {
            return Err(RationalError::DivisionByZero);
        }
        if denominator < 0 {
            numerator = -numerator;
            denominator = -denominator;
        }

        let common = gcd(numerator.abs(), denominator);
        numerator /= common;
        denominator /= common;

        Ok(Self {
            numerator: i64::try_from(numerator).map_err(|_| RationalError::Overflow)?,
            denominator: i64::try_from(denominator).map_err(|_| RationalError::Overflow)?,
        })
    }

    #[inline]
    const fn wide(self) -> (i128, i128) {
        (self.numerator as i128, self.denominator as i128)
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create `numerator / denominator` in reduced form.
    ///
    /// # Errors
    /// - `DivisionByZero` if `denominator` is zero
    /// - `Overflow` if the reduced numerator or denominator falls outside
    ///   i64, e.g. `i64::MIN / -1` or `1 / i64::MIN`
    pub fn new(numerator: i64, denominator: i64) -> RationalResult<Self> {
        Self::normalize(numerator as i128, denominator as i128)
    }

    /// Create the integer `value / 1`.
    #[inline]
    pub const fn from_integer(value: i64) -> Self {
        Self {
            numerator: value,
            denominator: 1,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Reduced numerator, carries the sign.
    #[inline]
    pub const fn numerator(self) -> i64 {
        self.numerator
    }

    /// Reduced denominator, always positive.
    #[inline]
    pub const fn denominator(self) -> i64 {
        self.denominator
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.numerator == 0
    }

    #[inline]
    pub const fn is_integer(self) -> bool {
        self.denominator == 1
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        self.numerator > 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.numerator < 0
    }

    // ========================================================================
    // Mutators
    // ========================================================================

    /// Replace the numerator, keeping the current denominator, and reduce.
    ///
    /// On error the value is left untouched.
    pub fn set_numerator(&mut self, numerator: i64) -> RationalResult<()> {
        *self = Self::new(numerator, self.denominator)?;
        Ok(())
    }

    /// Replace the denominator, keeping the current numerator, and reduce.
    ///
    /// # Errors
    /// `DivisionByZero` for a zero denominator. The value is left untouched.
    pub fn set_denominator(&mut self, denominator: i64) -> RationalResult<()> {
        *self = Self::new(self.numerator, denominator)?;
        Ok(())
    }

    // ========================================================================
    // In-place Arithmetic
    // ========================================================================
    //
    // Each operation computes the new value first and only then stores it,
    // so a failed operation leaves `self` unchanged. The returned `&mut Self`
    // allows chaining: `x.try_add_assign(a)?.try_mul_assign(b)?;`
    //
    // Operands are i64 with a positive denominator, so every cross product
    // stays below 2^126 in magnitude and sums of two of them fit in i128.

    /// `self += rhs`
    pub fn try_add_assign(&mut self, rhs: Self) -> RationalResult<&mut Self> {
        let (a, b) = self.wide();
        let (c, d) = rhs.wide();
        *self = Self::normalize(a * d + c * b, b * d)?;
        Ok(self)
    }

    /// `self -= rhs`
    pub fn try_sub_assign(&mut self, rhs: Self) -> RationalResult<&mut Self> {
        let (a, b) = self.wide();
        let (c, d) = rhs.wide();
        *self = Self::normalize(a * d - c * b, b * d)?;
        Ok(self)
    }

    /// `self *= rhs`
    pub fn try_mul_assign(&mut self, rhs: Self) -> RationalResult<&mut Self> {
        let (a, b) = self.wide();
        let (c, d) = rhs.wide();
        *self = Self::normalize(a * c, b * d)?;
        Ok(self)
    }

    /// `self /= rhs`
    ///
    /// # Errors
    /// `DivisionByZero` if `rhs` is zero.
    pub fn try_div_assign(&mut self, rhs: Self) -> RationalResult<&mut Self> {
        if rhs.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        let (a, b) = self.wide();
        let (c, d) = rhs.wide();
        *self = Self::normalize(a * d, b * c)?;
        Ok(self)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> RationalResult<Self> {
        let mut result = self;
        result.try_add_assign(rhs)?;
        Ok(result)
    }

    /// Checked subtraction.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> RationalResult<Self> {
        let mut result = self;
        result.try_sub_assign(rhs)?;
        Ok(result)
    }

    /// Checked multiplication.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> RationalResult<Self> {
        let mut result = self;
        result.try_mul_assign(rhs)?;
        Ok(result)
    }

    /// Checked division.
    ///
    /// # Errors
    /// `DivisionByZero` if `rhs` is zero, `Overflow` if the quotient does not fit.
    #[inline]
    pub fn checked_div(self, rhs: Self) -> RationalResult<Self> {
        let mut result = self;
        result.try_div_assign(rhs)?;
        Ok(result)
    }

    /// Unary plus.
    #[inline]
    pub const fn pos(self) -> Self {
        self
    }

    /// Checked negation. Fails only for an `i64::MIN` numerator.
    #[inline]
    pub fn checked_neg(self) -> RationalResult<Self> {
        self.numerator
            .checked_neg()
            .map(|numerator| Self {
                numerator,
                denominator: self.denominator,
            })
            .ok_or(RationalError::Overflow)
    }

    /// Get absolute value.
    #[inline]
    pub fn abs(self) -> RationalResult<Self> {
        if self.is_negative() {
            self.checked_neg()
        } else {
            Ok(self)
        }
    }

    // ========================================================================
    // Increment / Decrement
    // ========================================================================
    //
    // Adding the denominator to the numerator adds exactly one. No reduction
    // pass is needed: gcd(n + d, d) == gcd(n, d) == 1.

    /// Pre-increment: add one and return the updated value.
    pub fn increment(&mut self) -> RationalResult<&mut Self> {
        self.numerator = self
            .numerator
            .checked_add(self.denominator)
            .ok_or(RationalError::Overflow)?;
        Ok(self)
    }

    /// Pre-decrement: subtract one and return the updated value.
    pub fn decrement(&mut self) -> RationalResult<&mut Self> {
        self.numerator = self
            .numerator
            .checked_sub(self.denominator)
            .ok_or(RationalError::Overflow)?;
        Ok(self)
    }

    /// Post-increment: add one and return the value from before the update.
    pub fn post_increment(&mut self) -> RationalResult<Self> {
        let previous = *self;
        self.increment()?;
        Ok(previous)
    }

    /// Post-decrement: subtract one and return the value from before the update.
    pub fn post_decrement(&mut self) -> RationalResult<Self> {
        let previous = *self;
        self.decrement()?;
        Ok(previous)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Rational {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for Rational {
    #[inline]
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl PartialOrd for Rational {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    /// Cross-multiplication `a*d` vs `c*b`. Both denominators are positive so
    /// the inequality direction is preserved, and i128 products cannot overflow.
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = self.wide();
        let (c, d) = other.wide();
        (a * d).cmp(&(c * b))
    }
}

impl Neg for Rational {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.checked_neg().expect("Rational negation overflow")
    }
}

// Infallible operators for ergonomics. They panic on division by zero or
// overflow, like the integer operators; use checked_* to handle errors.
macro_rules! impl_panicking_op {
    ($op:ident, $method:ident, $assign_op:ident, $assign_method:ident, $checked:ident, $msg:literal) => {
        impl $op for Rational {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self::Output {
                match self.$checked(rhs) {
                    Ok(value) => value,
                    Err(e) => panic!("{}: {}", $msg, e),
                }
            }
        }

        impl $assign_op for Rational {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = $op::$method(*self, rhs);
            }
        }
    };
}

impl_panicking_op!(Add, add, AddAssign, add_assign, checked_add, "Rational addition failed");
impl_panicking_op!(Sub, sub, SubAssign, sub_assign, checked_sub, "Rational subtraction failed");
impl_panicking_op!(Mul, mul, MulAssign, mul_assign, checked_mul, "Rational multiplication failed");
impl_panicking_op!(Div, div, DivAssign, div_assign, checked_div, "Rational division failed");

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}/{})", self.numerator, self.denominator)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl Rational {
    /// Convert from rust_decimal::Decimal exactly.
    ///
    /// `123.45` becomes `2469/20`.
    ///
    /// # Errors
    /// `Overflow` if the reduced fraction does not fit in i64.
    pub fn from_decimal(d: rust_decimal::Decimal) -> RationalResult<Self> {
        // Decimal scale is at most 28 and 10^28 < i128::MAX.
        let denominator = 10i128.pow(d.scale());
        Self::normalize(d.mantissa(), denominator)
    }

    /// Convert to rust_decimal::Decimal.
    ///
    /// The quotient is rounded to Decimal's 28 significant digits, so this
    /// is lossy for denominators with prime factors other than 2 and 5.
    pub fn to_decimal(self) -> rust_decimal::Decimal {
        rust_decimal::Decimal::from(self.numerator) / rust_decimal::Decimal::from(self.denominator)
    }
}

// ============================================================================
// Serialization (text form, so deserialized values are always normalized)
// ============================================================================

#[cfg(feature = "serde")]
impl Serialize for Rational {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Rational {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse::<Rational>().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn r(numerator: i64, denominator: i64) -> Rational {
        Rational::new(numerator, denominator).unwrap()
    }

    #[test]
    fn test_constants() {
        assert_eq!(Rational::ZERO.numerator(), 0);
        assert_eq!(Rational::ZERO.denominator(), 1);
        assert_eq!(Rational::ONE, r(7, 7));
        assert_eq!(Rational::default(), Rational::ZERO);
    }

    #[test]
    fn test_new_reduces() {
        let x = r(2, 4);
        assert_eq!(x.numerator(), 1);
        assert_eq!(x.denominator(), 2);
        assert_eq!(x, r(1, 2));

        let zero = r(0, -17);
        assert_eq!(zero.numerator(), 0);
        assert_eq!(zero.denominator(), 1);
    }

    #[test]
    fn test_sign_canonicalization() {
        assert_eq!(r(1, -2), r(-1, 2));
        assert_eq!(r(-1, -2), r(1, 2));
        assert!(r(3, -9).denominator() > 0);
        assert_eq!(r(3, -9).numerator(), -1);
    }

    #[test]
    fn test_new_zero_denominator() {
        assert_eq!(Rational::new(5, 0), Err(RationalError::DivisionByZero));
        assert_eq!(Rational::new(0, 0), Err(RationalError::DivisionByZero));
    }

    #[test]
    fn test_new_overflow() {
        assert_eq!(Rational::new(i64::MIN, -1), Err(RationalError::Overflow));
        // Moving the sign out of an i64::MIN denominator leaves 2^63
        assert_eq!(Rational::new(1, i64::MIN), Err(RationalError::Overflow));
        assert_eq!(Rational::new(-3, i64::MIN), Err(RationalError::Overflow));
        assert_eq!(r(2, i64::MIN), r(-1, 1 << 62));
        // Reduction happens before narrowing
        assert_eq!(Rational::new(i64::MIN, -2).unwrap().numerator(), 1 << 62);
        assert_eq!(r(i64::MIN, 1).numerator(), i64::MIN);
    }

    #[test]
    fn test_from_integer() {
        let x = Rational::from(-12);
        assert_eq!(x.numerator(), -12);
        assert_eq!(x.denominator(), 1);
        assert!(x.is_integer());
        assert!(x.is_negative());
    }

    #[test]
    fn test_predicates() {
        assert!(Rational::ZERO.is_zero());
        assert!(!Rational::ZERO.is_positive());
        assert!(!Rational::ZERO.is_negative());
        assert!(r(1, 3).is_positive());
        assert!(!r(1, 3).is_integer());
    }

    #[test]
    fn test_set_numerator() {
        let mut x = r(1, 4);
        x.set_numerator(2).unwrap();
        assert_eq!(x, r(1, 2));

        x.set_numerator(0).unwrap();
        assert_eq!(x, Rational::ZERO);
    }

    #[test]
    fn test_set_denominator() {
        let mut x = r(3, 1);
        x.set_denominator(-6).unwrap();
        assert_eq!(x, r(-1, 2));
    }

    #[test]
    fn test_set_denominator_zero_leaves_value() {
        let mut x = r(3, 4);
        assert_eq!(x.set_denominator(0), Err(RationalError::DivisionByZero));
        assert_eq!(x, r(3, 4));
    }

    #[test]
    fn test_set_denominator_overflow_leaves_value() {
        let mut x = r(1, 2);
        assert_eq!(x.set_denominator(i64::MIN), Err(RationalError::Overflow));
        assert_eq!(x, r(1, 2));
    }

    #[test]
    fn test_checked_add() {
        assert_eq!(r(1, 2).checked_add(r(1, 3)).unwrap(), r(5, 6));
        assert_eq!(r(1, 2).checked_add(r(1, 2)).unwrap(), Rational::ONE);
        assert_eq!(r(-1, 2).checked_add(r(1, 2)).unwrap(), Rational::ZERO);
    }

    #[test]
    fn test_checked_sub() {
        assert_eq!(r(1, 2).checked_sub(r(1, 3)).unwrap(), r(1, 6));
        assert_eq!(r(1, 3).checked_sub(r(1, 2)).unwrap(), r(-1, 6));
    }

    #[test]
    fn test_checked_mul() {
        assert_eq!(r(1, 2).checked_mul(r(2, 1)).unwrap(), Rational::ONE);
        assert_eq!(r(-2, 3).checked_mul(r(3, 4)).unwrap(), r(-1, 2));
    }

    #[test]
    fn test_checked_div() {
        assert_eq!(Rational::ONE.checked_div(r(2, 1)).unwrap(), r(1, 2));
        // Negative divisor moves the sign to the numerator
        assert_eq!(r(1, 2).checked_div(r(-3, 4)).unwrap(), r(-2, 3));
    }

    #[test]
    fn test_checked_div_by_zero() {
        assert_eq!(
            r(1, 2).checked_div(Rational::ZERO),
            Err(RationalError::DivisionByZero)
        );
    }

    #[test]
    fn test_overflow_is_reported() {
        let max = Rational::from(i64::MAX);
        assert_eq!(max.checked_add(Rational::ONE), Err(RationalError::Overflow));
        assert_eq!(max.checked_mul(r(2, 1)), Err(RationalError::Overflow));

        let tiny = r(1, i64::MAX);
        assert_eq!(tiny.checked_mul(r(1, 2)), Err(RationalError::Overflow));
    }

    #[test]
    fn test_wide_intermediates_reduce_back() {
        // The cross products overflow i64 but the reduced result fits
        let big = r(i64::MAX, 2);
        assert_eq!(big.checked_mul(r(2, i64::MAX)).unwrap(), Rational::ONE);
        assert_eq!(big.checked_sub(big).unwrap(), Rational::ZERO);
    }

    #[test]
    fn test_in_place_chaining() {
        let mut x = r(1, 2);
        x.try_add_assign(r(1, 2))
            .unwrap()
            .try_mul_assign(r(3, 1))
            .unwrap()
            .try_div_assign(r(6, 1))
            .unwrap()
            .try_sub_assign(r(1, 4))
            .unwrap();
        assert_eq!(x, r(1, 4));
    }

    #[test]
    fn test_in_place_failure_leaves_value() {
        let mut x = r(5, 7);
        assert_eq!(
            x.try_div_assign(Rational::ZERO).map(|v| *v),
            Err(RationalError::DivisionByZero)
        );
        assert_eq!(x, r(5, 7));

        let mut y = Rational::from(i64::MAX);
        assert!(y.try_add_assign(Rational::ONE).is_err());
        assert_eq!(y, Rational::from(i64::MAX));
    }

    #[test]
    fn test_operators() {
        assert_eq!(r(1, 2) + r(1, 3), r(5, 6));
        assert_eq!(r(1, 2) - r(1, 3), r(1, 6));
        assert_eq!(r(1, 2) * r(2, 1), Rational::ONE);
        assert_eq!(Rational::ONE / r(2, 1), r(1, 2));

        let mut x = r(1, 3);
        x += r(1, 3);
        x *= r(3, 1);
        x -= Rational::ONE;
        x /= r(2, 1);
        assert_eq!(x, r(1, 2));
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_div_operator_panics_on_zero() {
        let _ = Rational::ONE / Rational::ZERO;
    }

    #[test]
    fn test_negation() {
        let x = -r(3, 4);
        assert_eq!(x, r(-3, 4));
        assert_eq!(x.denominator(), 4);
        assert_eq!(-x, r(3, 4));
        assert_eq!(r(3, 4).pos(), r(3, 4));
        assert_eq!(
            Rational::from(i64::MIN).checked_neg(),
            Err(RationalError::Overflow)
        );
    }

    #[test]
    fn test_abs() {
        assert_eq!(r(-3, 4).abs().unwrap(), r(3, 4));
        assert_eq!(r(3, 4).abs().unwrap(), r(3, 4));
    }

    #[test]
    fn test_increment() {
        let mut x = r(1, 2);
        assert_eq!(*x.increment().unwrap(), r(3, 2));
        assert_eq!(x, r(3, 2));

        let mut y = r(1, 2);
        assert_eq!(y.post_increment().unwrap(), r(1, 2));
        assert_eq!(y, r(3, 2));
    }

    #[test]
    fn test_decrement() {
        let mut x = r(1, 2);
        assert_eq!(*x.decrement().unwrap(), r(-1, 2));

        let mut y = r(5, 3);
        assert_eq!(y.post_decrement().unwrap(), r(5, 3));
        assert_eq!(y, r(2, 3));

        let mut z = Rational::ONE;
        z.decrement().unwrap();
        assert_eq!(z, Rational::ZERO);
        assert_eq!(z.denominator(), 1);
    }

    #[test]
    fn test_increment_overflow_leaves_value() {
        let mut x = Rational::from(i64::MAX);
        assert_eq!(x.post_increment(), Err(RationalError::Overflow));
        assert_eq!(x, Rational::from(i64::MAX));

        let mut y = Rational::from(i64::MIN);
        assert!(y.decrement().is_err());
        assert_eq!(y, Rational::from(i64::MIN));
    }

    #[test]
    fn test_comparison() {
        assert!(r(1, 3) < r(1, 2));
        assert!(r(-1, 2) < Rational::ZERO);
        assert!(r(1, 2) <= r(2, 4));
        assert!(r(2, 3) > r(3, 5));
        assert!(r(2, 3) >= r(3, 5));
        assert_ne!(r(1, 2), r(1, 3));
        assert_eq!(r(1, 3).max(r(1, 2)), r(1, 2));
        assert_eq!(r(1, 3).min(r(-1, 2)), r(-1, 2));
    }

    #[test]
    fn test_comparison_extremes() {
        let max = Rational::from(i64::MAX);
        let min = Rational::from(i64::MIN);
        assert!(min < max);
        assert!(r(1, i64::MAX) > Rational::ZERO);
        assert!(r(i64::MAX - 1, i64::MAX) < Rational::ONE);
    }

    #[test]
    fn test_display() {
        assert_eq!(r(3, 1).to_string(), "3");
        assert_eq!(r(3, 4).to_string(), "3/4");
        assert_eq!(r(-3, 4).to_string(), "-3/4");
        assert_eq!(Rational::ZERO.to_string(), "0");
        assert_eq!(format!("{:?}", r(6, 8)), "Rational(3/4)");
    }

    #[test]
    fn test_from_decimal() {
        use rust_decimal::Decimal;

        let d = Decimal::new(12345, 2); // 123.45
        assert_eq!(Rational::from_decimal(d).unwrap(), r(2469, 20));

        let neg = Decimal::new(-5, 1); // -0.5
        assert_eq!(Rational::from_decimal(neg).unwrap(), r(-1, 2));

        assert_eq!(Rational::from_decimal(Decimal::ZERO).unwrap(), Rational::ZERO);
    }

    #[test]
    fn test_from_decimal_overflow() {
        assert_eq!(
            Rational::from_decimal(rust_decimal::Decimal::MAX),
            Err(RationalError::Overflow)
        );
    }

    #[test]
    fn test_to_decimal() {
        use rust_decimal::Decimal;

        assert_eq!(r(3, 4).to_decimal(), Decimal::new(75, 2));
        assert_eq!(r(-7, 1).to_decimal(), Decimal::from(-7));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_text_form() {
        let json = serde_json::to_string(&r(-6, 8)).unwrap();
        assert_eq!(json, "\"-3/4\"");

        let back: Rational = serde_json::from_str("\"10/-4\"").unwrap();
        assert_eq!(back, r(-5, 2));

        assert!(serde_json::from_str::<Rational>("\"1/0\"").is_err());
    }
}
