//! Arbitrary-precision modular arithmetic on `BigUint`.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::backend::ScalarBackend;
use crate::errors::ScalarError;
use crate::params::Secp256k1;

/// Computes `a⁻¹ mod m`, the unique value in `[0, m)` with `a * a⁻¹ ≡ 1 (mod m)`.
///
/// # Errors
///
/// - [`ScalarError::ZeroModulus`] if `m` is zero
/// - [`ScalarError::NonInvertible`] if `gcd(a, m) != 1`
///
/// # Example
///
/// ```
/// use secp256k1_scalar::{inverse_mod, BigUint};
///
/// let inv = inverse_mod(&BigUint::from(3u32), &BigUint::from(7u32)).unwrap();
/// assert_eq!(inv, BigUint::from(5u32));
/// ```
pub fn inverse_mod(a: &BigUint, m: &BigUint) -> Result<BigUint, ScalarError> {
    if m.is_zero() {
        return Err(ScalarError::ZeroModulus);
    }

    a.modinv(m).ok_or_else(|| ScalarError::NonInvertible {
        value: a.clone(),
        modulus: m.clone(),
    })
}

/// Backend doing every operation on unbounded integers, reduced mod `modulus`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BigUintBackend {
    modulus: BigUint,
}

impl BigUintBackend {
    /// Creates a backend for an arbitrary non-zero modulus.
    pub fn new(modulus: BigUint) -> Result<Self, ScalarError> {
        if modulus.is_zero() {
            return Err(ScalarError::ZeroModulus);
        }
        Ok(Self { modulus })
    }

    /// Backend over the secp256k1 group order.
    pub fn secp256k1() -> Self {
        Self {
            modulus: Secp256k1::generator().order(),
        }
    }
}

impl ScalarBackend for BigUintBackend {
    type Scalar = BigUint;

    fn name(&self) -> &'static str {
        "biguint"
    }

    fn modulus(&self) -> BigUint {
        self.modulus.clone()
    }

    fn reduce(&self, value: &BigUint) -> BigUint {
        value % &self.modulus
    }

    fn to_biguint(&self, value: &BigUint) -> BigUint {
        value.clone()
    }

    fn mod_add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.modulus
    }

    fn mod_mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.modulus
    }

    fn mod_inverse(&self, a: &BigUint) -> Result<BigUint, ScalarError> {
        if self.modulus.is_one() {
            // Every residue is zero mod 1, and 0 * 0 ≡ 1 holds trivially.
            return Ok(BigUint::zero());
        }
        inverse_mod(a, &self.modulus)
    }
}
