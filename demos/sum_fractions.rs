// ============================================================================
// Sum Fractions Example
// Reads rationals from stdin and prints their exact total
//
// Usage:
//   printf '1/2 1/3\n1/6\n' | cargo run --example sum_fractions --features logging
// ============================================================================

use exact_rational::prelude::*;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut total = Rational::ZERO;
    let mut count = 0usize;
    let mut rejected = 0usize;

    for item in RationalReader::new(stdin.lock()) {
        match item {
            Ok(value) => match total.checked_add(value) {
                Ok(sum) => {
                    total = sum;
                    count += 1;
                },
                Err(e) => {
                    eprintln!("cannot add {} to running total {}: {}", value, total, e);
                    return ExitCode::FAILURE;
                },
            },
            Err(StreamError::Io(e)) => {
                eprintln!("read error: {}", e);
                return ExitCode::FAILURE;
            },
            Err(e) => {
                eprintln!("skipping: {}", e);
                rejected += 1;
            },
        }
    }

    println!("{}", total);
    eprintln!("{} values summed, {} rejected", count, rejected);
    ExitCode::SUCCESS
}
