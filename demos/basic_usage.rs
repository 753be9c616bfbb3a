// ============================================================================
// Basic Usage Example
// ============================================================================

use exact_rational::prelude::*;

fn main() -> Result<(), RationalError> {
    println!("=== Exact Rational Example ===\n");

    // Construction always reduces and moves the sign to the numerator
    let a = Rational::new(6, -8)?;
    let b: Rational = "5/12".parse()?;
    println!("a = {}  (from 6/-8)", a);
    println!("b = {}", b);

    // Checked arithmetic
    println!("\n=== Arithmetic ===");
    println!("a + b = {}", a.checked_add(b)?);
    println!("a - b = {}", a.checked_sub(b)?);
    println!("a * b = {}", a.checked_mul(b)?);
    println!("a / b = {}", a.checked_div(b)?);

    // In-place updates chain
    let mut c = Rational::ONE;
    c.try_mul_assign(a)?.try_sub_assign(b)?;
    println!("1 * a - b = {}", c);

    // Increment / decrement
    println!("\n=== Increment ===");
    let before = c.post_increment()?;
    println!("{} ++ -> {}", before, c);

    // Failures leave the value untouched
    println!("\n=== Errors ===");
    match c.try_div_assign(Rational::ZERO) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("c / 0: {} (c is still {})", e, c),
    }
    match Rational::from(i64::MAX).checked_add(Rational::ONE) {
        Ok(v) => println!("unexpected success: {}", v),
        Err(e) => println!("i64::MAX + 1: {}", e),
    }

    // Ordering and decimal interop
    println!("\n=== Comparison ===");
    let mut values = vec![a, b, c, Rational::ZERO];
    values.sort();
    let listed: Vec<String> = values.iter().map(ToString::to_string).collect();
    println!("sorted: {}", listed.join(" < "));
    println!("b as decimal: {}", b.to_decimal());

    Ok(())
}
