//! secp256k1 domain parameters.
//!
//! Specified in SEC 2: Recommended Elliptic Curve Domain Parameters,
//! <https://www.secg.org/sec2-v2.pdf>. The curve is `y² = x³ + 7` over the
//! prime field of order `p = 2^256 - 2^32 - 977`.

use num_bigint::BigUint;

/// Group order n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
///
/// Little-endian 64-bit limbs.
pub const SECP256K1_ORDER: [u64; 4] = [
    0xbfd25e8cd0364141,
    0xbaaedce6af48a03b,
    0xfffffffffffffffe,
    0xffffffffffffffff,
];

/// Group order as a big-endian hex string.
pub const SECP256K1_ORDER_HEX: &str =
    "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";

// Base field prime p = 2^256 - 2^32 - 977
const FIELD_MODULUS: [u64; 4] = [
    0xfffffffefffffc2f,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0xffffffffffffffff,
];

const GENERATOR_X: [u64; 4] = [
    0x59f2815b16f81798,
    0x029bfcdb2dce28d9,
    0x55a06295ce870b07,
    0x79be667ef9dcbbac,
];

const GENERATOR_Y: [u64; 4] = [
    0x9c47d08ffb10d4b8,
    0xfd17b448a6855419,
    0x5da4fbfc0e1108a8,
    0x483ada7726a3c465,
];

pub(crate) fn limbs_to_biguint(limbs: &[u64; 4]) -> BigUint {
    let mut bytes = Vec::with_capacity(32);
    for &limb in limbs {
        bytes.extend_from_slice(&limb.to_le_bytes());
    }
    BigUint::from_bytes_le(&bytes)
}

/// Marker type for the secp256k1 curve.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Secp256k1;

impl Secp256k1 {
    /// The standard generator point `G`.
    pub fn generator() -> GeneratorPoint {
        GeneratorPoint {
            x: limbs_to_biguint(&GENERATOR_X),
            y: limbs_to_biguint(&GENERATOR_Y),
        }
    }

    /// Order of the subgroup generated by `G`.
    pub fn order() -> BigUint {
        limbs_to_biguint(&SECP256K1_ORDER)
    }

    /// Prime of the base field the curve is defined over.
    pub fn field_modulus() -> BigUint {
        limbs_to_biguint(&FIELD_MODULUS)
    }
}

/// Affine coordinates of the secp256k1 generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorPoint {
    pub x: BigUint,
    pub y: BigUint,
}

impl GeneratorPoint {
    /// Number of points in the cyclic subgroup generated by this point.
    pub fn order(&self) -> BigUint {
        Secp256k1::order()
    }
}
