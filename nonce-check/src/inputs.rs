//! Signature inputs and their hexadecimal text encoding.

use num_bigint::BigUint;
use num_traits::Num;
use serde::{Deserialize, Serialize};

use crate::errors::CheckError;

/// The five integers a consistency check operates on.
///
/// No range validation is applied: values at or above the group order are
/// accepted and reduced during the computation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HexSignatureInputs")]
pub struct SignatureInputs {
    /// Signature component r
    #[serde(serialize_with = "hex_integer::serialize")]
    pub r: BigUint,
    /// Signature component s, compared as given
    #[serde(serialize_with = "hex_integer::serialize")]
    pub s: BigUint,
    /// Message hash as an integer
    #[serde(serialize_with = "hex_integer::serialize")]
    pub z: BigUint,
    /// Candidate nonce
    #[serde(serialize_with = "hex_integer::serialize")]
    pub k: BigUint,
    /// Private key
    #[serde(serialize_with = "hex_integer::serialize")]
    pub d: BigUint,
}

/// Text form of [`SignatureInputs`], parsed field by field so errors name the field.
#[derive(Deserialize)]
struct HexSignatureInputs {
    r: String,
    s: String,
    z: String,
    k: String,
    d: String,
}

impl TryFrom<HexSignatureInputs> for SignatureInputs {
    type Error = CheckError;

    fn try_from(hex: HexSignatureInputs) -> Result<Self, Self::Error> {
        Self::from_hex(&hex.r, &hex.s, &hex.z, &hex.k, &hex.d)
    }
}

impl SignatureInputs {
    /// Parses all five values from hexadecimal text.
    pub fn from_hex(r: &str, s: &str, z: &str, k: &str, d: &str) -> Result<Self, CheckError> {
        Ok(Self {
            r: parse_integer("r", r)?,
            s: parse_integer("s", s)?,
            z: parse_integer("z", z)?,
            k: parse_integer("k", k)?,
            d: parse_integer("d", d)?,
        })
    }
}

/// Parses a hexadecimal integer, with or without a `0x`/`0X` prefix.
///
/// Surrounding whitespace is ignored; an empty digit string is rejected.
pub fn parse_integer(field: &'static str, text: &str) -> Result<BigUint, CheckError> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    // from_str_radix tolerates '_' separators and a leading '+'
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CheckError::InvalidInteger {
            field,
            value: text.to_owned(),
        });
    }

    BigUint::from_str_radix(digits, 16).map_err(|_| CheckError::InvalidInteger {
        field,
        value: text.to_owned(),
    })
}

/// Formats an integer the way the report prints it: lowercase, `0x`-prefixed,
/// no leading zeros.
pub fn format_integer(value: &BigUint) -> String {
    format!("{value:#x}")
}

pub(crate) mod hex_integer {
    use num_bigint::BigUint;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_integer(value))
    }

    /// Parses one named field; errors carry `field`.
    pub fn deserialize_field<'de, D: Deserializer<'de>>(
        field: &'static str,
        deserializer: D,
    ) -> Result<BigUint, D::Error> {
        let text = String::deserialize(deserializer)?;
        super::parse_integer(field, &text).map_err(D::Error::custom)
    }
}
