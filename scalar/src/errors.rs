//! Error types for scalar arithmetic.

use num_bigint::BigUint;
use thiserror::Error;

/// Errors raised by modular scalar arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScalarError {
    /// The value shares a factor with the modulus, so no inverse exists.
    ///
    /// For the secp256k1 order, which is prime, this happens exactly when the
    /// value is a multiple of the order (zero included).
    #[error("{value:#x} has no inverse modulo {modulus:#x}")]
    NonInvertible { value: BigUint, modulus: BigUint },
    /// Arithmetic modulo zero is undefined.
    #[error("modulus must be non-zero")]
    ZeroModulus,
}
