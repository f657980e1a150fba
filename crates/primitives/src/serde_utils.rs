//! Serde helpers for the textual representation of 256-bit integers.
//!
//! Integers serialize as decimal strings (the format produced by common Groth16 tooling) and
//! deserialize from decimal strings, `0x`-prefixed hex strings or plain unsigned numbers.

use std::{fmt, str::FromStr};

use alloy_primitives::U256;
use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::errors::ParseError;

/// Parses a 256-bit integer from a decimal or `0x`-prefixed hex string.
pub fn parse_u256(s: &str) -> Result<U256, ParseError> {
    let trimmed = s.trim();
    U256::from_str(trimmed).map_err(|_| ParseError::InvalidInteger(trimmed.to_string()))
}

/// A [`U256`] with the decimal-string serde representation described in the module docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FieldString(pub U256);

impl From<U256> for FieldString {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl From<FieldString> for U256 {
    fn from(value: FieldString) -> Self {
        value.0
    }
}

impl Serialize for FieldString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for FieldString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FieldStringVisitor)
    }
}

struct FieldStringVisitor;

impl Visitor<'_> for FieldStringVisitor {
    type Value = FieldString;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal or 0x-prefixed hex string, or an unsigned integer")
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(FieldString(U256::from(v)))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        u64::try_from(v)
            .map(|v| FieldString(U256::from(v)))
            .map_err(|_| E::custom(format!("negative integer {v}")))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        parse_u256(v).map(FieldString).map_err(E::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_and_hex() {
        assert_eq!(parse_u256("42").unwrap(), U256::from(42));
        assert_eq!(parse_u256(" 0x2a ").unwrap(), U256::from(42));
        assert!(parse_u256("forty-two").is_err());
    }

    #[test]
    fn field_string_json_forms() {
        let from_str: FieldString = serde_json::from_str("\"123\"").unwrap();
        let from_num: FieldString = serde_json::from_str("123").unwrap();
        let from_hex: FieldString = serde_json::from_str("\"0x7b\"").unwrap();

        assert_eq!(from_str, from_num);
        assert_eq!(from_str, from_hex);
        assert_eq!(serde_json::to_string(&from_str).unwrap(), "\"123\"");
    }
}
