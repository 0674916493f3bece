//! Serde support: values serialize as decimal strings so no precision is lost
//! in JSON. Deserialization also accepts plain unsigned integers.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{BigUint, Deci};

impl Serialize for BigUint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct BigUintVisitor;

impl Visitor<'_> for BigUintVisitor {
    type Value = BigUint;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an unsigned integer or a string of decimal digits")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<BigUint, E> {
        Ok(BigUint::from(value))
    }

    fn visit_u128<E: de::Error>(self, value: u128) -> Result<BigUint, E> {
        Ok(BigUint::from(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<BigUint, E> {
        value.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for BigUint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(BigUintVisitor)
    }
}

impl Serialize for Deci {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Deci {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer
            .deserialize_any(BigUintVisitor)
            .map(Self::from)
    }
}
