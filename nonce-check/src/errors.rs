//! Error types for the nonce-consistency check.

use secp256k1_scalar::ScalarError;
use thiserror::Error;

/// Errors that can occur while parsing inputs or recomputing `s`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// Modular arithmetic failed.
    ///
    /// In practice this is [`ScalarError::NonInvertible`]: the candidate nonce
    /// `k` shares a factor with the group order, so `k⁻¹` does not exist and
    /// the check cannot produce a result.
    #[error(transparent)]
    Scalar(#[from] ScalarError),
    /// An input could not be parsed as a hexadecimal integer.
    #[error("invalid value for `{field}`: {value:?} is not a hexadecimal integer")]
    InvalidInteger { field: &'static str, value: String },
}
