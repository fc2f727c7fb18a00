//! ECDSA nonce-consistency check over secp256k1.
//!
//! Given a signature `(r, s)`, a message hash `z`, a private key `d` and a
//! candidate nonce `k`, this crate recomputes
//!
//! ```text
//! s' = k⁻¹ · (z + d·r) mod n
//! ```
//!
//! where `n` is the secp256k1 group order, and reports whether `s' == s`.
//! A `k` that shares a factor with `n` has no inverse; that case is an error,
//! never a `false` result.
//!
//! # Example
//!
//! ```
//! use nonce_check::check;
//! use num_bigint::BigUint;
//! use secp256k1_scalar::Secp256k1;
//!
//! let n = Secp256k1::generator().order();
//! let one = BigUint::from(1u32);
//! // k = 1: s must equal z + d·r
//! let s = BigUint::from(7u32 + 2 * 3);
//! let ok = check(&BigUint::from(3u32), &s, &BigUint::from(7u32), &one, &BigUint::from(2u32), &n)
//!     .expect("k = 1 is invertible");
//! assert!(ok);
//! ```
//!
//! The arithmetic goes through [`secp256k1_scalar::ScalarBackend`], so the
//! arbitrary-precision and Montgomery backends are interchangeable.

mod checker;
mod cli;
mod constants;
mod errors;
mod inputs;


pub use checker::{CheckReport, ConsistencyChecker, check};
pub use cli::{Backend, NonceCheckCmd, OutputFormat, init_logging};
pub use constants::{CONSISTENT_MESSAGE, INCONSISTENT_MESSAGE};
pub use errors::CheckError;
pub use inputs::{SignatureInputs, format_integer, parse_integer};
