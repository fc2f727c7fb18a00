//! Recomputation of the ECDSA `s` from a candidate nonce.

use core::fmt::{self, Display, Formatter};

use num_bigint::BigUint;
use secp256k1_scalar::{BigUintBackend, ScalarBackend, ScalarError};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

use crate::constants::{CONSISTENT_MESSAGE, INCONSISTENT_MESSAGE};
use crate::errors::CheckError;
use crate::inputs::{SignatureInputs, format_integer, hex_integer};

/// Outcome of a consistency check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    /// `k⁻¹ · (z + d·r) mod n`
    #[serde(
        serialize_with = "hex_integer::serialize",
        deserialize_with = "deserialize_s_test"
    )]
    pub s_test: BigUint,
    /// The `s` supplied with the signature
    #[serde(
        serialize_with = "hex_integer::serialize",
        deserialize_with = "deserialize_s"
    )]
    pub s: BigUint,
    /// Whether `s_test == s`
    pub consistent: bool,
}

fn deserialize_s_test<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
    hex_integer::deserialize_field("s_test", deserializer)
}

fn deserialize_s<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
    hex_integer::deserialize_field("s", deserializer)
}

impl Display for CheckReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "computed s: {}", format_integer(&self.s_test))?;
        writeln!(f, "original s: {}", format_integer(&self.s))?;
        if self.consistent {
            write!(f, "{CONSISTENT_MESSAGE}")
        } else {
            write!(f, "{INCONSISTENT_MESSAGE}")
        }
    }
}

/// Checks candidate nonces against a signature using a pluggable backend.
///
/// # Example
///
/// ```
/// use nonce_check::{ConsistencyChecker, SignatureInputs};
///
/// // k = 1, d = 2, r = 3, z = 4 gives s = z + d·r = 10
/// let inputs = SignatureInputs::from_hex("3", "a", "4", "1", "2").unwrap();
/// let report = ConsistencyChecker::secp256k1().check(&inputs).unwrap();
/// assert!(report.consistent);
/// ```
#[derive(Clone, Debug)]
pub struct ConsistencyChecker<B> {
    backend: B,
}

impl ConsistencyChecker<BigUintBackend> {
    /// Checker over the secp256k1 group order with arbitrary-precision arithmetic.
    pub fn secp256k1() -> Self {
        Self::new(BigUintBackend::secp256k1())
    }
}

impl<B: ScalarBackend> ConsistencyChecker<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Computes `s_test = k⁻¹ · (z + d·r) mod n`.
    ///
    /// # Errors
    ///
    /// Returns [`ScalarError::NonInvertible`] (wrapped in [`CheckError`]) when
    /// `gcd(k, n) != 1`. The error carries `k` as supplied.
    pub fn recompute_s(&self, inputs: &SignatureInputs) -> Result<BigUint, CheckError> {
        let b = &self.backend;
        debug!(backend = b.name(), "recomputing s");

        let k = b.reduce(&inputs.k);
        let k_inv = b.mod_inverse(&k).map_err(|err| {
            warn!(k = %format_integer(&inputs.k), "nonce is not invertible modulo the group order");
            match err {
                ScalarError::NonInvertible { modulus, .. } => ScalarError::NonInvertible {
                    value: inputs.k.clone(),
                    modulus,
                },
                other => other,
            }
        })?;

        let dr = b.mod_mul(&b.reduce(&inputs.d), &b.reduce(&inputs.r));
        let sum = b.mod_add(&b.reduce(&inputs.z), &dr);
        let s_test = b.to_biguint(&b.mod_mul(&k_inv, &sum));

        debug!(s_test = %format_integer(&s_test), "recomputed s");
        Ok(s_test)
    }

    /// Recomputes `s` and compares it with the supplied one.
    ///
    /// The supplied `s` is compared without reduction, so an `s` at or above
    /// the group order never matches.
    pub fn check(&self, inputs: &SignatureInputs) -> Result<CheckReport, CheckError> {
        let s_test = self.recompute_s(inputs)?;
        let consistent = s_test == inputs.s;
        debug!(consistent, "compared against supplied s");

        Ok(CheckReport {
            s_test,
            s: inputs.s.clone(),
            consistent,
        })
    }
}

/// Returns whether `s == k⁻¹ · (z + d·r) mod n`.
///
/// `n` may be any non-zero modulus; for ECDSA over secp256k1 pass
/// [`Secp256k1::order`](secp256k1_scalar::Secp256k1::order).
///
/// # Errors
///
/// Fails rather than returning `false` when `k` has no inverse modulo `n`,
/// and with [`ScalarError::ZeroModulus`] when `n` is zero.
pub fn check(
    r: &BigUint,
    s: &BigUint,
    z: &BigUint,
    k: &BigUint,
    d: &BigUint,
    n: &BigUint,
) -> Result<bool, CheckError> {
    let checker = ConsistencyChecker::new(BigUintBackend::new(n.clone())?);
    let inputs = SignatureInputs {
        r: r.clone(),
        s: s.clone(),
        z: z.clone(),
        k: k.clone(),
        d: d.clone(),
    };
    Ok(checker.check(&inputs)?.consistent)
}
