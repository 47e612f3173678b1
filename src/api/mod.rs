//! API Module
//!
//! HTTP handlers and routing for the key inspection REST API.
//!
//! # Endpoints
//! - `POST /keys` - Build a physical key from a raw key
//! - `GET /keys/:key` - Build a physical key at the configured version
//! - `GET /config` - Get key construction settings
//! - `GET /stats` - Get key construction statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
