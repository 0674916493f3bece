use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::InfinintError;

/// Largest power of ten that fits in a limb, used for decimal conversion.
const DECIMAL_CHUNK: u32 = 1_000_000_000;
/// Number of decimal digits held by [`DECIMAL_CHUNK`].
const DECIMAL_CHUNK_DIGITS: usize = 9;

/// Arbitrary-precision unsigned integer.
///
/// The magnitude is kept as little-endian 32-bit limbs without trailing zero
/// limbs. [`BigUint::default`] is zero.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BigUint {
    limbs: Vec<u32>,
}

impl BigUint {
    /// Returns zero.
    #[must_use]
    pub const fn zero() -> Self {
        Self { limbs: Vec::new() }
    }

    /// Returns one.
    #[must_use]
    pub fn one() -> Self {
        Self { limbs: vec![1] }
    }

    pub(crate) fn from_limbs(limbs: Vec<u32>) -> Self {
        let mut value = Self { limbs };
        value.normalize();
        value
    }

    pub(crate) fn limbs(&self) -> &[u32] {
        &self.limbs
    }

    fn normalize(&mut self) {
        while self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
    }

    /// Reports whether the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Number of significant bits; zero for zero.
    #[must_use]
    pub fn bit_len(&self) -> u64 {
        match self.limbs.last() {
            None => 0,
            Some(top) => {
                (self.limbs.len() as u64 - 1) * 32 + u64::from(32 - top.leading_zeros())
            }
        }
    }

    fn bit(&self, index: u64) -> bool {
        let limb = (index / 32) as usize;
        self.limbs
            .get(limb)
            .is_some_and(|value| (value >> (index % 32)) & 1 == 1)
    }

    /// Converts to `u64` when the value fits.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        match self.limbs.as_slice() {
            [] => Some(0),
            [low] => Some(u64::from(*low)),
            [low, high] => Some(u64::from(*low) | (u64::from(*high) << 32)),
            _ => None,
        }
    }

    /// Converts to `u128` when the value fits.
    #[must_use]
    pub fn to_u128(&self) -> Option<u128> {
        if self.limbs.len() > 4 {
            return None;
        }
        Some(
            self.limbs
                .iter()
                .rev()
                .fold(0u128, |acc, limb| (acc << 32) | u128::from(*limb)),
        )
    }

    /// Big-endian magnitude with leading zero bytes removed.
    ///
    /// Zero yields a single `0x00` byte so every value has at least one byte.
    #[must_use]
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut bytes: Vec<u8> = self
            .limbs
            .iter()
            .rev()
            .flat_map(|limb| limb.to_be_bytes())
            .skip_while(|byte| *byte == 0)
            .collect();
        if bytes.is_empty() {
            bytes.push(0);
        }
        bytes
    }

    /// Builds a value from a big-endian magnitude. Leading zeros are ignored.
    #[must_use]
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let limbs = bytes
            .rchunks(4)
            .map(|chunk| {
                chunk
                    .iter()
                    .fold(0u32, |acc, byte| (acc << 8) | u32::from(*byte))
            })
            .collect();
        Self::from_limbs(limbs)
    }

    /// Subtracts `rhs`, failing when `rhs > self`.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, InfinintError> {
        if *self < *rhs {
            return Err(InfinintError::Underflow);
        }
        Ok(Self::from_limbs(sub_limbs(&self.limbs, &rhs.limbs)))
    }

    /// In-place form of [`BigUint::checked_sub`]. `self` is unchanged on error.
    pub fn checked_sub_assign(&mut self, rhs: &Self) -> Result<(), InfinintError> {
        *self = self.checked_sub(rhs)?;
        Ok(())
    }

    /// Adds one.
    pub fn increment(&mut self) {
        for limb in &mut self.limbs {
            let (next, carry) = limb.overflowing_add(1);
            *limb = next;
            if !carry {
                return;
            }
        }
        self.limbs.push(1);
    }

    /// Subtracts one, failing on zero.
    pub fn checked_decrement(&mut self) -> Result<(), InfinintError> {
        if self.is_zero() {
            return Err(InfinintError::Underflow);
        }
        for limb in &mut self.limbs {
            let (next, borrow) = limb.overflowing_sub(1);
            *limb = next;
            if !borrow {
                break;
            }
        }
        self.normalize();
        Ok(())
    }

    /// Euclidean division: returns `(quotient, remainder)`.
    ///
    /// The result satisfies `self == quotient * divisor + remainder` with
    /// `remainder < divisor`.
    pub fn euclide(&self, divisor: &Self) -> Result<(Self, Self), InfinintError> {
        if divisor.is_zero() {
            return Err(InfinintError::DivideByZero);
        }
        if *self < *divisor {
            return Ok((Self::zero(), self.clone()));
        }
        if let [small] = divisor.limbs.as_slice() {
            let (quotient, remainder) = self.div_rem_small(*small);
            return Ok((quotient, Self::from(remainder)));
        }

        let mut quotient = vec![0u32; self.limbs.len()];
        let mut remainder = Self::zero();
        for index in (0..self.bit_len()).rev() {
            shl1_in_place(&mut remainder.limbs);
            if self.bit(index) {
                match remainder.limbs.first_mut() {
                    Some(low) => *low |= 1,
                    None => remainder.limbs.push(1),
                }
            }
            if remainder >= *divisor {
                remainder = Self::from_limbs(sub_limbs(&remainder.limbs, &divisor.limbs));
                quotient[(index / 32) as usize] |= 1 << (index % 32);
            }
        }
        Ok((Self::from_limbs(quotient), remainder))
    }

    /// Quotient of Euclidean division.
    pub fn checked_div(&self, divisor: &Self) -> Result<Self, InfinintError> {
        self.euclide(divisor).map(|(quotient, _)| quotient)
    }

    /// Remainder of Euclidean division.
    pub fn checked_rem(&self, divisor: &Self) -> Result<Self, InfinintError> {
        self.euclide(divisor).map(|(_, remainder)| remainder)
    }

    /// Divides by a nonzero single-limb divisor.
    pub(crate) fn div_rem_small(&self, divisor: u32) -> (Self, u32) {
        debug_assert!(divisor != 0);
        let divisor = u64::from(divisor);
        let mut quotient = vec![0u32; self.limbs.len()];
        let mut remainder = 0u64;
        for (slot, limb) in quotient.iter_mut().zip(&self.limbs).rev() {
            let current = (remainder << 32) | u64::from(*limb);
            *slot = (current / divisor) as u32;
            remainder = current % divisor;
        }
        (Self::from_limbs(quotient), remainder as u32)
    }

    /// Computes `self * factor + addend` in place.
    pub(crate) fn mul_small_add(&mut self, factor: u32, addend: u32) {
        let mut carry = u64::from(addend);
        for limb in &mut self.limbs {
            let current = u64::from(*limb) * u64::from(factor) + carry;
            *limb = current as u32;
            carry = current >> 32;
        }
        if carry != 0 {
            self.limbs.push(carry as u32);
        }
        self.normalize();
    }

    /// Decimal digits of the value, most significant first, as ASCII.
    pub(crate) fn to_decimal_string(&self) -> String {
        if self.is_zero() {
            return "0".to_owned();
        }
        let mut chunks = Vec::new();
        let mut rest = self.clone();
        while !rest.is_zero() {
            let (quotient, chunk) = rest.div_rem_small(DECIMAL_CHUNK);
            chunks.push(chunk);
            rest = quotient;
        }
        let mut text = String::with_capacity(chunks.len() * DECIMAL_CHUNK_DIGITS);
        let mut iter = chunks.iter().rev();
        if let Some(first) = iter.next() {
            text.push_str(&first.to_string());
        }
        for chunk in iter {
            text.push_str(&format!("{chunk:0width$}", width = DECIMAL_CHUNK_DIGITS));
        }
        text
    }
}

fn cmp_limbs(a: &[u32], b: &[u32]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

pub(crate) fn add_limbs(a: &[u32], b: &[u32]) -> Vec<u32> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry = 0u64;
    for (index, limb) in long.iter().enumerate() {
        let other = short.get(index).copied().unwrap_or(0);
        let sum = u64::from(*limb) + u64::from(other) + carry;
        out.push(sum as u32);
        carry = sum >> 32;
    }
    if carry != 0 {
        out.push(carry as u32);
    }
    out
}

/// Computes `a - b`; callers guarantee `a >= b`.
fn sub_limbs(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = false;
    for (index, limb) in a.iter().enumerate() {
        let other = b.get(index).copied().unwrap_or(0);
        let (partial, first) = limb.overflowing_sub(other);
        let (value, second) = partial.overflowing_sub(u32::from(borrow));
        out.push(value);
        borrow = first || second;
    }
    debug_assert!(!borrow);
    out
}

pub(crate) fn mul_limbs(a: &[u32], b: &[u32]) -> Vec<u32> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0u32; a.len() + b.len()];
    for (i, x) in a.iter().enumerate() {
        let mut carry = 0u64;
        for (j, y) in b.iter().enumerate() {
            let current = u64::from(out[i + j]) + u64::from(*x) * u64::from(*y) + carry;
            out[i + j] = current as u32;
            carry = current >> 32;
        }
        let mut k = i + b.len();
        while carry != 0 {
            let current = u64::from(out[k]) + carry;
            out[k] = current as u32;
            carry = current >> 32;
            k += 1;
        }
    }
    out
}

pub(crate) fn shl_limbs(a: &[u32], shift: u32) -> Vec<u32> {
    if a.is_empty() {
        return Vec::new();
    }
    let bits = shift % 32;
    let mut out = vec![0u32; (shift / 32) as usize];
    out.reserve(a.len() + 1);
    if bits == 0 {
        out.extend_from_slice(a);
    } else {
        let mut carry = 0u32;
        for limb in a {
            out.push((limb << bits) | carry);
            carry = limb >> (32 - bits);
        }
        if carry != 0 {
            out.push(carry);
        }
    }
    out
}

pub(crate) fn shr_limbs(a: &[u32], shift: u32) -> Vec<u32> {
    let skip = (shift / 32) as usize;
    if skip >= a.len() {
        return Vec::new();
    }
    let bits = shift % 32;
    let source = &a[skip..];
    if bits == 0 {
        return source.to_vec();
    }
    (0..source.len())
        .map(|index| {
            let high = source.get(index + 1).map_or(0, |next| next << (32 - bits));
            (source[index] >> bits) | high
        })
        .collect()
}

fn shl1_in_place(limbs: &mut Vec<u32>) {
    let mut carry = 0u32;
    for limb in limbs.iter_mut() {
        let next = *limb >> 31;
        *limb = (*limb << 1) | carry;
        carry = next;
    }
    if carry != 0 {
        limbs.push(carry);
    }
}

impl Ord for BigUint {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_limbs(&self.limbs, &other.limbs)
    }
}

impl PartialOrd for BigUint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for BigUint {
                fn from(value: $ty) -> Self {
                    Self::from(u128::from(value))
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64);

impl From<u128> for BigUint {
    fn from(mut value: u128) -> Self {
        let mut limbs = Vec::with_capacity(4);
        while value != 0 {
            limbs.push(value as u32);
            value >>= 32;
        }
        Self { limbs }
    }
}

impl From<usize> for BigUint {
    fn from(value: usize) -> Self {
        Self::from(value as u64)
    }
}

impl FromStr for BigUint {
    type Err = InfinintError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.is_empty() {
            return Err(InfinintError::parse(text, "no digits"));
        }
        if !text.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(InfinintError::parse(text, "only the digits 0-9 are allowed"));
        }
        let mut value = Self::zero();
        for chunk in text.as_bytes().chunks(DECIMAL_CHUNK_DIGITS) {
            let factor = 10u32.pow(chunk.len() as u32);
            let addend = chunk
                .iter()
                .fold(0u32, |acc, digit| acc * 10 + u32::from(digit - b'0'));
            value.mul_small_add(factor, addend);
        }
        Ok(value)
    }
}

impl fmt::Display for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "", &self.to_decimal_string())
    }
}

impl fmt::Debug for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigUint({})", self.to_decimal_string())
    }
}
