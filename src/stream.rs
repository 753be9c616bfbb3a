// ============================================================================
// Rational Stream Reader
// Reads successive whitespace-separated rationals from any BufRead
// ============================================================================

use crate::numeric::{Rational, RationalError};
use std::fmt;
use std::io::{self, BufRead};

/// Errors produced while reading rationals from a stream.
#[derive(Debug)]
pub enum StreamError {
    /// The underlying reader failed
    Io(io::Error),
    /// A token could not be parsed as a rational
    Parse {
        line: usize,
        token: String,
        source: RationalError,
    },
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamError::Io(e) => write!(f, "read error: {}", e),
            StreamError::Parse {
                line,
                token,
                source,
            } => write!(f, "line {}: cannot read {:?}: {}", line, token, source),
        }
    }
}

impl std::error::Error for StreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StreamError::Io(e) => Some(e),
            StreamError::Parse { source, .. } => Some(source),
        }
    }
}

impl From<io::Error> for StreamError {
    fn from(e: io::Error) -> Self {
        StreamError::Io(e)
    }
}

/// Iterator over the rationals in a text stream.
///
/// Tokens are separated by ASCII whitespace and each must be a complete
/// rational (`3`, `-6/8`, `1/-2`). A malformed token yields an error and
/// reading continues with the next token. An I/O error ends the iteration.
///
/// # Example
/// ```
/// use exact_rational::numeric::Rational;
/// use exact_rational::stream::RationalReader;
///
/// let input = "1/2 1/3\n1/6\n";
/// let values: Result<Vec<_>, _> = RationalReader::new(input.as_bytes()).collect();
/// let total = values
///     .unwrap()
///     .into_iter()
///     .try_fold(Rational::ZERO, Rational::checked_add)
///     .unwrap();
/// assert_eq!(total, Rational::ONE);
/// ```
pub struct RationalReader<R> {
    reader: R,
    line: String,
    offset: usize,
    line_number: usize,
    finished: bool,
}

impl<R: BufRead> RationalReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            offset: 0,
            line_number: 0,
            finished: false,
        }
    }

    /// Number of lines read so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Locate the next token in the buffered line, refilling as needed.
    /// Returns `Ok(None)` at end of input.
    fn next_token_span(&mut self) -> io::Result<Option<(usize, usize)>> {
        loop {
            let rest = &self.line[self.offset..];
            let skipped = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_whitespace()).len();
            let start = self.offset + skipped;

            if start < self.line.len() {
                let len = self.line[start..]
                    .find(|c: char| c.is_ascii_whitespace())
                    .unwrap_or(self.line.len() - start);
                return Ok(Some((start, start + len)));
            }

            self.line.clear();
            self.offset = 0;
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;
        }
    }
}

impl<R: BufRead> Iterator for RationalReader<R> {
    type Item = Result<Rational, StreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let (start, end) = match self.next_token_span() {
            Ok(Some(span)) => span,
            Ok(None) => {
                self.finished = true;
                return None;
            },
            Err(e) => {
                self.finished = true;
                tracing::debug!("Rational stream read failed after line {}: {}", self.line_number, e);
                return Some(Err(StreamError::Io(e)));
            },
        };
        self.offset = end;

        let token = &self.line[start..end];
        match token.parse::<Rational>() {
            Ok(value) => Some(Ok(value)),
            Err(source) => {
                tracing::debug!(
                    "Rejected rational token {:?} on line {}: {}",
                    token,
                    self.line_number,
                    source
                );
                Some(Err(StreamError::Parse {
                    line: self.line_number,
                    token: token.to_string(),
                    source,
                }))
            },
        }
    }
}
