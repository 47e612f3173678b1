//! Keys Module
//!
//! Builds bounded-length physical cache keys from logical identifiers.
//!
//! Two forms are produced:
//! - `NH_<prefix><key>` when the key fits the length budget
//! - `H_<md5 of key>_<truncated NH_ form>` when it does not
//!
//! Both forms are byte-compatible with entries written by the legacy key
//! function, so none of the constants below may change without invalidating
//! every existing cache entry.

mod builder;
mod physical;
mod stats;


// Re-export public types
pub use builder::{framing_length, make_key, KeyBuilder};
pub use physical::{KeyForm, PhysicalKey};
pub use stats::KeyStats;

// == Public Constants ==
/// Maximum total key length accepted by the backend, framing included
pub const MAX_KEY_LENGTH: usize = 250;

/// Tag for keys stored verbatim
pub const NO_HASH_TAG: &str = "NH_";

/// Tag for keys shortened with a digest
pub const HASH_TAG: &str = "H_";

/// Separates the digest from the truncated readable suffix
pub const HASH_SEPARATOR: &str = "_";

/// Length of a hex-encoded MD5 digest
pub const DIGEST_HEX_LENGTH: usize = 32;

/// Length of `H_<digest>_`, the smallest budget a hashed key can fit in
pub const MIN_KEY_BUDGET: usize = 2 + DIGEST_HEX_LENGTH + 1;
