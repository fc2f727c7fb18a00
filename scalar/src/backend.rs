use core::fmt::Debug;

use num_bigint::BigUint;
use tracing::trace;

use crate::errors::ScalarError;
use crate::params::Secp256k1;
use crate::scalarfield::Scalar;

/// Minimal modular arithmetic needed to recompute an ECDSA `s`.
///
/// Implementations fix their modulus at construction; all operations return
/// values already reduced into `[0, modulus)`.
pub trait ScalarBackend {
    type Scalar: Clone + PartialEq + Debug;

    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;

    fn modulus(&self) -> BigUint;

    /// Maps an unbounded integer to its residue.
    fn reduce(&self, value: &BigUint) -> Self::Scalar;

    fn to_biguint(&self, value: &Self::Scalar) -> BigUint;

    fn mod_add(&self, a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar;

    fn mod_mul(&self, a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar;

    /// Fails with [`ScalarError::NonInvertible`] when `gcd(a, modulus) != 1`.
    fn mod_inverse(&self, a: &Self::Scalar) -> Result<Self::Scalar, ScalarError>;
}

/// Fixed-width backend over the secp256k1 order using [`Scalar`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MontgomeryBackend;

impl ScalarBackend for MontgomeryBackend {
    type Scalar = Scalar;

    fn name(&self) -> &'static str {
        "montgomery"
    }

    fn modulus(&self) -> BigUint {
        Secp256k1::order()
    }

    fn reduce(&self, value: &BigUint) -> Scalar {
        Scalar::from_biguint(value)
    }

    fn to_biguint(&self, value: &Scalar) -> BigUint {
        value.to_biguint()
    }

    fn mod_add(&self, a: &Scalar, b: &Scalar) -> Scalar {
        *a + *b
    }

    fn mod_mul(&self, a: &Scalar, b: &Scalar) -> Scalar {
        *a * *b
    }

    fn mod_inverse(&self, a: &Scalar) -> Result<Scalar, ScalarError> {
        a.invert().ok_or_else(|| {
            trace!("montgomery inversion hit zero");
            ScalarError::NonInvertible {
                value: a.to_biguint(),
                modulus: self.modulus(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bigint::BigUintBackend;
    use crate::random::RandomScalar;
    use num_traits::{One, Zero};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_backends_agree() {
        let mut rng = StdRng::seed_from_u64(42);
        let big = BigUintBackend::secp256k1();
        let mont = MontgomeryBackend;
        assert_eq!(big.modulus(), mont.modulus());

        for _ in 0..32 {
            // Wider than 256 bits to exercise reduction
            let a = BigUint::random(&mut rng) * BigUint::random(&mut rng) + 1u32;
            let b = BigUint::random(&mut rng);

            let (ba, bb) = (big.reduce(&a), big.reduce(&b));
            let (ma, mb) = (mont.reduce(&a), mont.reduce(&b));
            assert_eq!(big.to_biguint(&ba), mont.to_biguint(&ma));

            assert_eq!(
                big.to_biguint(&big.mod_add(&ba, &bb)),
                mont.to_biguint(&mont.mod_add(&ma, &mb))
            );
            assert_eq!(
                big.to_biguint(&big.mod_mul(&ba, &bb)),
                mont.to_biguint(&mont.mod_mul(&ma, &mb))
            );
            if !ba.is_zero() {
                assert_eq!(
                    big.to_biguint(&big.mod_inverse(&ba).unwrap()),
                    mont.to_biguint(&mont.mod_inverse(&ma).unwrap())
                );
            }
        }
    }

    #[test]
    fn test_montgomery_inverse() {
        let backend = MontgomeryBackend;
        let k = backend.reduce(&BigUint::from(12345u32));
        let k_inv = backend.mod_inverse(&k).unwrap();
        assert_eq!(backend.to_biguint(&backend.mod_mul(&k, &k_inv)), BigUint::one());
    }

    #[test]
    fn test_montgomery_non_invertible() {
        let backend = MontgomeryBackend;
        let n = backend.reduce(&Secp256k1::order());
        assert_eq!(
            backend.mod_inverse(&n),
            Err(ScalarError::NonInvertible {
                value: BigUint::from(0u32),
                modulus: Secp256k1::order(),
            })
        );
    }
}
