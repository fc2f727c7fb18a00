//! Scalar arithmetic modulo the secp256k1 group order.
//!
//! This crate provides the curve parameters needed by ECDSA scalar
//! arithmetic, a fixed-width Montgomery scalar type, an arbitrary-precision
//! backend built on `num-bigint`, and the [`ScalarBackend`] trait that lets
//! callers swap one for the other.

mod backend;
mod bigint;
mod errors;
mod params;
mod random;
mod scalarfield;

pub use backend::{MontgomeryBackend, ScalarBackend};
pub use bigint::{inverse_mod, BigUintBackend};
pub use errors::ScalarError;
pub use num_bigint::BigUint;
pub use params::{GeneratorPoint, Secp256k1, SECP256K1_ORDER, SECP256K1_ORDER_HEX};
pub use random::RandomScalar;
pub use scalarfield::Scalar;
