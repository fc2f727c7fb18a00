use num_bigint::BigUint;
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::Scalar;

/// Helper trait for sampling uniformly random scalars mod n.
pub trait RandomScalar: Sized {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

impl RandomScalar for Scalar {
    #[inline]
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        StandardUniform.sample(rng)
    }
}

impl RandomScalar for BigUint {
    #[inline]
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Scalar::random(rng).to_biguint()
    }
}
