//! Request DTOs for the key inspection API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Validates a raw key received from a client, whatever endpoint carried it.
///
/// Returns an error message if validation fails, None if valid.
pub fn validate_raw_key(key: &str) -> Option<String> {
    if key.chars().any(char::is_control) {
        return Some("Key cannot contain control characters".to_string());
    }
    None
}

/// Request body for building a key (POST /keys)
///
/// # Fields
/// - `key`: The raw cache key, already ASCII-normalized by the caller
/// - `version`: Optional version (uses the configured version if not specified)
#[derive(Debug, Clone, Deserialize)]
pub struct BuildKeyRequest {
    /// The raw cache key
    pub key: String,
    /// Optional cache-format version override
    #[serde(default)]
    pub version: Option<u64>,
}

impl BuildKeyRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_raw_key(&self.key)
    }
}
