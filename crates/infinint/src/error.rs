use std::io;

use thiserror::Error;

/// Errors produced by [`BigUint`](crate::BigUint) arithmetic and its codecs.
#[derive(Debug, Error)]
pub enum InfinintError {
    /// A decimal string contained no digits or a character other than `0-9`.
    #[error("invalid decimal number '{input}': {reason}")]
    Parse {
        /// Text that failed to parse.
        input: String,
        /// Short description of the problem.
        reason: &'static str,
    },
    /// Subtraction or decrement would have produced a negative value.
    #[error("subtraction underflow: the subtrahend exceeds the minuend")]
    Underflow,
    /// Division or remainder by zero.
    #[error("division by zero")]
    DivideByZero,
    /// An encoded integer ended before its announced width.
    #[error("truncated encoded integer: {missing} byte(s) missing")]
    Truncated {
        /// Number of bytes that were still expected.
        missing: usize,
    },
    /// The width preamble of an encoded integer was not a single set bit.
    #[error("malformed encoded integer preamble byte 0x{byte:02x}")]
    MalformedPreamble {
        /// The offending preamble byte.
        byte: u8,
    },
    /// The underlying reader or writer failed.
    #[error("encoded integer I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl InfinintError {
    pub(crate) fn parse(input: &str, reason: &'static str) -> Self {
        Self::Parse {
            input: input.to_owned(),
            reason,
        }
    }
}
