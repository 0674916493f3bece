use std::fmt;
use std::str::FromStr;

use crate::biguint::BigUint;
use crate::error::InfinintError;

/// Decimal digit string convertible to and from [`BigUint`].
///
/// Digits are stored most significant first with leading zeros removed; zero
/// is the single digit `0`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Deci {
    digits: Vec<u8>,
}

impl Deci {
    /// Human readable decimal text.
    #[must_use]
    pub fn human(&self) -> String {
        self.digits.iter().map(|digit| char::from(b'0' + digit)).collect()
    }

    /// Numeric value of the digits.
    #[must_use]
    pub fn computer(&self) -> BigUint {
        let mut value = BigUint::zero();
        for digit in &self.digits {
            value.mul_small_add(10, u32::from(*digit));
        }
        value
    }

    /// Number of decimal digits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always `false`; zero still has one digit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}

impl From<&BigUint> for Deci {
    fn from(value: &BigUint) -> Self {
        let digits = value
            .to_decimal_string()
            .bytes()
            .map(|byte| byte - b'0')
            .collect();
        Self { digits }
    }
}

impl From<BigUint> for Deci {
    fn from(value: BigUint) -> Self {
        Self::from(&value)
    }
}

impl FromStr for Deci {
    type Err = InfinintError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.is_empty() {
            return Err(InfinintError::parse(text, "no digits"));
        }
        if !text.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(InfinintError::parse(text, "only the digits 0-9 are allowed"));
        }
        let trimmed = text.trim_start_matches('0');
        let digits = if trimmed.is_empty() {
            vec![0]
        } else {
            trimmed.bytes().map(|byte| byte - b'0').collect()
        };
        Ok(Self { digits })
    }
}

impl fmt::Display for Deci {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "", &self.human())
    }
}
