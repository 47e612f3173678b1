//! Key Builder Module
//!
//! Maps `(raw key, namespace prefix, version)` to a physical key that, once
//! the store wraps it as `<prefix>:<version>:<key>`, never exceeds
//! [`MAX_KEY_LENGTH`].
//!
//! MD5 is used here only to shorten keys and keep distinct long keys apart.
//! It carries no security property, and switching algorithms would orphan
//! every entry already written under the current scheme.

use tracing::trace;

use crate::error::{KeyError, Result};
use crate::keys::{
    PhysicalKey, HASH_SEPARATOR, HASH_TAG, MAX_KEY_LENGTH, MIN_KEY_BUDGET, NO_HASH_TAG,
};

// == Framing Length ==
/// Length of the `<prefix>:<version>:` framing the store puts around a key.
pub fn framing_length(key_prefix: &str, version: u64) -> usize {
    key_prefix.chars().count() + 1 + version.to_string().len() + 1
}

// == Make Key ==
/// Builds a physical key in one call.
///
/// Equivalent to `KeyBuilder::new(key_prefix, version)?.build(raw_key)`.
/// Prefer a long-lived [`KeyBuilder`] when the prefix and version are fixed
/// for the deployment, so the configuration is validated once at startup.
pub fn make_key(raw_key: &str, key_prefix: &str, version: u64) -> Result<PhysicalKey> {
    Ok(KeyBuilder::new(key_prefix, version)?.build(raw_key))
}

// == Key Builder ==
/// Validated key construction settings for one namespace and version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBuilder {
    /// Namespace prefix, part of both the framing and the `NH_` form
    key_prefix: String,
    /// Cache-format generation
    version: u64,
    /// Chars left for the physical key once framing is accounted for
    budget: usize,
}

impl KeyBuilder {
    // == Constructor ==
    /// Creates a builder for the given namespace prefix and version.
    ///
    /// Fails with [`KeyError::InvalidConfig`] when the framing leaves less
    /// room than a hashed key needs. No raw key could be addressed under such
    /// a configuration, so callers should treat this as fatal at startup.
    pub fn new(key_prefix: impl Into<String>, version: u64) -> Result<Self> {
        let key_prefix = key_prefix.into();
        let framing = framing_length(&key_prefix, version);

        let budget = MAX_KEY_LENGTH
            .checked_sub(framing)
            .filter(|budget| *budget >= MIN_KEY_BUDGET)
            .ok_or_else(|| {
                KeyError::InvalidConfig(format!(
                    "key prefix of {} chars with version {} leaves no room for keys \
                     (framing {} of {} chars, need at least {} for a hashed key)",
                    key_prefix.chars().count(),
                    version,
                    framing,
                    MAX_KEY_LENGTH,
                    MIN_KEY_BUDGET
                ))
            })?;

        Ok(Self {
            key_prefix,
            version,
            budget,
        })
    }

    // == With Version ==
    /// Returns a builder for the same namespace at another version.
    pub fn with_version(&self, version: u64) -> Result<Self> {
        Self::new(self.key_prefix.clone(), version)
    }

    // == Build ==
    /// Builds the physical key for `raw_key`.
    ///
    /// The raw key is expected to be ASCII-normalized by the caller already.
    /// Lengths are counted in chars, and truncation uses the same unit.
    pub fn build(&self, raw_key: &str) -> PhysicalKey {
        let unhashed = format!("{}{}{}", NO_HASH_TAG, self.key_prefix, raw_key);
        let unhashed_len = unhashed.chars().count();

        if unhashed_len <= self.budget {
            return PhysicalKey::unhashed(unhashed);
        }

        // Digest covers the raw key only, never the prefix
        let hash_tag = format!("{}{:x}", HASH_TAG, md5::compute(raw_key.as_bytes()));
        let available = self.budget - hash_tag.len() - HASH_SEPARATOR.len();
        let readable: String = unhashed.chars().take(available).collect();

        trace!(
            "Hashed cache key of {} chars down to budget of {}",
            unhashed_len,
            self.budget
        );

        PhysicalKey::hashed(format!("{}{}{}", hash_tag, HASH_SEPARATOR, readable))
    }

    // == Build Bytes ==
    /// Builds the physical key for a raw key held as bytes.
    ///
    /// Non-UTF-8 input is rejected with [`KeyError::InvalidInput`].
    pub fn build_bytes(&self, raw_key: &[u8]) -> Result<PhysicalKey> {
        let raw_key = std::str::from_utf8(raw_key).map_err(|e| {
            KeyError::InvalidInput(format!("raw key is not valid UTF-8: {}", e))
        })?;
        Ok(self.build(raw_key))
    }

    // == Frame ==
    /// Renders the key as the store sees it: `<prefix>:<version>:<key>`.
    pub fn frame(&self, key: &PhysicalKey) -> String {
        format!("{}:{}:{}", self.key_prefix, self.version, key)
    }

    // == Accessors ==
    pub fn key_prefix(&self) -> &str {
        &self.key_prefix
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Maximum length in chars of any key this builder produces.
    pub fn budget(&self) -> usize {
        self.budget
    }
}
