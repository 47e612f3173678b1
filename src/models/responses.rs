//! Response DTOs for the key inspection API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::keys::{KeyBuilder, KeyForm, KeyStats, PhysicalKey, MAX_KEY_LENGTH};

/// Response body for key construction (POST /keys, GET /keys/:key)
#[derive(Debug, Clone, Serialize)]
pub struct KeyResponse {
    /// The raw key as received
    pub key: String,
    /// Version the key was built for
    pub version: u64,
    /// Key handed to the store
    pub physical_key: String,
    /// Key as it appears once the store adds `<prefix>:<version>:`
    pub framed_key: String,
    /// Construction path taken
    pub form: KeyForm,
    /// Physical key length in chars
    pub length: usize,
    /// Maximum physical key length for this prefix and version
    pub budget: usize,
}

impl KeyResponse {
    /// Creates a new KeyResponse from a built key
    pub fn new(key: impl Into<String>, builder: &KeyBuilder, physical: &PhysicalKey) -> Self {
        Self {
            key: key.into(),
            version: builder.version(),
            physical_key: physical.as_str().to_string(),
            framed_key: builder.frame(physical),
            form: physical.form(),
            length: physical.len(),
            budget: builder.budget(),
        }
    }
}

/// Response body for the config endpoint (GET /config)
#[derive(Debug, Clone, Serialize)]
pub struct ConfigResponse {
    pub key_prefix: String,
    pub version: u64,
    pub max_key_length: usize,
    pub budget: usize,
}

impl ConfigResponse {
    pub fn new(builder: &KeyBuilder) -> Self {
        Self {
            key_prefix: builder.key_prefix().to_string(),
            version: builder.version(),
            max_key_length: MAX_KEY_LENGTH,
            budget: builder.budget(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Keys returned readable
    pub unhashed: u64,
    /// Keys shortened with a digest
    pub hashed: u64,
    /// Requests rejected before key construction
    pub rejected: u64,
    /// Keys built
    pub total: u64,
    /// Hashed ratio (hashed / total)
    pub hashed_ratio: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from key statistics
    pub fn new(stats: &KeyStats) -> Self {
        Self {
            unhashed: stats.unhashed,
            hashed: stats.hashed,
            rejected: stats.rejected,
            total: stats.total(),
            hashed_ratio: stats.hashed_ratio(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_response_unhashed() {
        let builder = KeyBuilder::new("app", 2).unwrap();
        let physical = builder.build("foo");

        let resp = KeyResponse::new("foo", &builder, &physical);

        assert_eq!(resp.physical_key, "NH_appfoo");
        assert_eq!(resp.framed_key, "app:2:NH_appfoo");
        assert_eq!(resp.form, KeyForm::Unhashed);
        assert_eq!(resp.length, 9);
        assert_eq!(resp.budget, 244);
    }

    #[test]
    fn test_key_response_serialize_form() {
        let builder = KeyBuilder::new("app", 2).unwrap();
        let raw = "r".repeat(300);
        let physical = builder.build(&raw);

        let json = serde_json::to_string(&KeyResponse::new(raw, &builder, &physical)).unwrap();
        assert!(json.contains(r#""form":"hashed""#));
        assert!(json.contains(r#""length":244"#));
    }

    #[test]
    fn test_config_response() {
        let builder = KeyBuilder::new("app", 1).unwrap();
        let resp = ConfigResponse::new(&builder);

        assert_eq!(resp.key_prefix, "app");
        assert_eq!(resp.max_key_length, 250);
        assert_eq!(resp.budget, 244);
    }

    #[test]
    fn test_stats_response_ratio() {
        let stats = KeyStats {
            unhashed: 8,
            hashed: 2,
            rejected: 1,
        };
        let resp = StatsResponse::new(&stats);

        assert_eq!(resp.total, 10);
        assert!((resp.hashed_ratio - 0.2).abs() < 0.001);
    }

    #[test]
    fn test_stats_response_zero_keys() {
        let resp = StatsResponse::new(&KeyStats::new());
        assert_eq!(resp.hashed_ratio, 0.0);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
