//! # Overview
//!
//! Archive headers store sizes, dates and counters in a self-delimiting
//! encoding. A width preamble announces how many groups of
//! [`GROUP_WIDTH`] bytes follow, then the big-endian magnitude fills those
//! groups.
//!
//! # Design
//!
//! For a magnitude that needs `g` groups, the preamble is `(g - 1) / 8` zero
//! bytes followed by the byte `0x80 >> ((g - 1) % 8)`. The magnitude is left
//! padded with zeros to exactly `g * GROUP_WIDTH` bytes. Zero is encoded as
//! `80 00 00 00 00`.
//!
//! The API mirrors the streaming varint helpers: [`write_infinint`] and
//! [`read_infinint`] work on I/O objects while [`encode_infinint_to_vec`] and
//! [`decode_infinint`] operate on in-memory buffers.
//!
//! # Examples
//!
//! ```
//! use infinint::{BigUint, decode_infinint, encode_infinint_to_vec};
//!
//! let mut encoded = Vec::new();
//! encode_infinint_to_vec(&BigUint::from(258u32), &mut encoded);
//! assert_eq!(encoded, [0x80, 0x00, 0x00, 0x01, 0x02]);
//! let (value, rest) = decode_infinint(&encoded).expect("well formed");
//! assert_eq!(value.to_u64(), Some(258));
//! assert!(rest.is_empty());
//! ```

use std::io::{self, Read, Write};

use crate::biguint::BigUint;
use crate::error::InfinintError;

/// Size in bytes of one magnitude group.
pub const GROUP_WIDTH: usize = 4;

/// Number of groups announced by one preamble byte.
const GROUPS_PER_PREAMBLE_BYTE: usize = 8;

fn preamble(groups: usize) -> (usize, u8) {
    let index = groups - 1;
    (
        index / GROUPS_PER_PREAMBLE_BYTE,
        0x80 >> (index % GROUPS_PER_PREAMBLE_BYTE),
    )
}

/// Appends the encoding of `value` to `out`.
pub fn encode_infinint_to_vec(value: &BigUint, out: &mut Vec<u8>) {
    let magnitude = value.to_be_bytes();
    let groups = magnitude.len().div_ceil(GROUP_WIDTH);
    let padding = groups * GROUP_WIDTH - magnitude.len();
    let (zero_bytes, marker) = preamble(groups);

    out.reserve(zero_bytes + 1 + groups * GROUP_WIDTH);
    out.extend(std::iter::repeat_n(0u8, zero_bytes));
    out.push(marker);
    out.extend(std::iter::repeat_n(0u8, padding));
    out.extend_from_slice(&magnitude);
}

/// Writes the encoding of `value` to `writer`.
pub fn write_infinint<W: Write + ?Sized>(writer: &mut W, value: &BigUint) -> io::Result<()> {
    let mut encoded = Vec::new();
    encode_infinint_to_vec(value, &mut encoded);
    writer.write_all(&encoded)
}

fn groups_from_marker(zero_bytes: usize, marker: u8) -> Result<usize, InfinintError> {
    if marker.count_ones() != 1 {
        return Err(InfinintError::MalformedPreamble { byte: marker });
    }
    let position = marker.leading_zeros() as usize + 1;
    zero_bytes
        .checked_mul(GROUPS_PER_PREAMBLE_BYTE)
        .and_then(|groups| groups.checked_add(position))
        .ok_or(InfinintError::MalformedPreamble { byte: marker })
}

/// Decodes one value from the front of `bytes`, returning it with the
/// unconsumed remainder.
pub fn decode_infinint(bytes: &[u8]) -> Result<(BigUint, &[u8]), InfinintError> {
    let zero_bytes = bytes.iter().take_while(|byte| **byte == 0).count();
    let Some(&marker) = bytes.get(zero_bytes) else {
        return Err(InfinintError::Truncated { missing: 1 });
    };
    let groups = groups_from_marker(zero_bytes, marker)?;
    let body = &bytes[zero_bytes + 1..];
    let width = groups
        .checked_mul(GROUP_WIDTH)
        .ok_or(InfinintError::MalformedPreamble { byte: marker })?;
    if body.len() < width {
        return Err(InfinintError::Truncated {
            missing: width - body.len(),
        });
    }
    let (magnitude, rest) = body.split_at(width);
    Ok((BigUint::from_be_bytes(magnitude), rest))
}

/// Reads one value from `reader`.
pub fn read_infinint<R: Read + ?Sized>(reader: &mut R) -> Result<BigUint, InfinintError> {
    let mut zero_bytes = 0usize;
    let marker = loop {
        let mut byte = [0u8; 1];
        match reader.read(&mut byte) {
            Ok(0) => return Err(InfinintError::Truncated { missing: 1 }),
            Ok(_) if byte[0] == 0 => zero_bytes += 1,
            Ok(_) => break byte[0],
            Err(error) if error.kind() == io::ErrorKind::Interrupted => {}
            Err(error) => return Err(error.into()),
        }
    };
    let groups = groups_from_marker(zero_bytes, marker)?;
    let width = groups
        .checked_mul(GROUP_WIDTH)
        .ok_or(InfinintError::MalformedPreamble { byte: marker })?;

    let mut magnitude = Vec::new();
    (&mut *reader).take(width as u64).read_to_end(&mut magnitude)?;
    if magnitude.len() < width {
        return Err(InfinintError::Truncated {
            missing: width - magnitude.len(),
        });
    }
    Ok(BigUint::from_be_bytes(&magnitude))
}
