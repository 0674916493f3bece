#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `infinint` provides the unbounded unsigned integer used by every counter,
//! file size and timestamp in the archive engine. Counters in long running
//! backups routinely exceed what a fixed-width integer can hold, so arithmetic
//! never wraps: addition and multiplication grow the value, and operations
//! that cannot produce an unsigned result report an [`InfinintError`].
//!
//! # Design
//!
//! - [`BigUint`] stores its magnitude as little-endian 32-bit limbs with no
//!   trailing zero limbs, so zero has exactly one representation and equality
//!   is structural.
//! - Infallible operations use the standard operator traits (`+`, `*`, `<<`,
//!   `>>` and their compound forms). Subtraction, division and remainder are
//!   exposed as `checked_*` methods returning [`Result`].
//! - [`Deci`] is the textual codec: it holds decimal digits and converts to
//!   and from [`BigUint`] without loss.
//! - The [`codec`](crate::encode_infinint_to_vec) functions implement the
//!   self-delimiting archive wire format in the same shape as the streaming
//!   varint helpers used elsewhere in the workspace.
//!
//! # Invariants
//!
//! - `BigUint` never holds a negative value; `checked_sub` fails with
//!   [`InfinintError::Underflow`] instead of wrapping.
//! - `euclide(a, b)` returns `(q, r)` with `a == q * b + r` and `r < b`.
//! - Decimal parsing accepts only ASCII digits and rejects the empty string.
//!
//! # Errors
//!
//! All fallible operations return [`InfinintError`].
//!
//! # Examples
//!
//! ```
//! use infinint::{BigUint, Deci};
//!
//! let a: BigUint = "18446744073709551616".parse().unwrap();
//! let b = BigUint::from(3u32);
//! let (q, r) = a.euclide(&b).unwrap();
//! assert_eq!(Deci::from(&(q * b + r)).human(), "18446744073709551616");
//! ```
//!
//! # See also
//!
//! - `statistics` for the counters built on top of this type.

mod biguint;
mod codec;
mod deci;
mod error;
mod ops;

#[cfg(feature = "serde")]
mod serde_impl;

#[cfg(test)]
mod tests;

pub use biguint::BigUint;
pub use codec::{GROUP_WIDTH, decode_infinint, encode_infinint_to_vec, read_infinint, write_infinint};
pub use deci::Deci;
pub use error::InfinintError;
