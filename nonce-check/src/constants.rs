//! Constants used by the checker and its command line.

/// Printed when the recomputed `s` equals the supplied one.
pub const CONSISTENT_MESSAGE: &str = "k is correct: the recomputed s matches the signature";

/// Printed when the recomputed `s` differs from the supplied one.
pub const INCONSISTENT_MESSAGE: &str = "k is incorrect: the recomputed s differs, check k or d";

/// Log filter used when `RUST_LOG` is unset.
pub(crate) const DEFAULT_LOG_FILTER: &str = "warn";
