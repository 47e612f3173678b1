//! Request and Response models for the key inspection API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{validate_raw_key, BuildKeyRequest};
pub use responses::{ConfigResponse, ErrorResponse, HealthResponse, KeyResponse, StatsResponse};
