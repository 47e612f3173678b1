//! API Handlers
//!
//! HTTP request handlers for each key inspection endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use crate::error::{KeyError, Result};
use crate::keys::{KeyBuilder, KeyStats};
use crate::models::{
    validate_raw_key, BuildKeyRequest, ConfigResponse, HealthResponse, KeyResponse,
    StatsResponse,
};

/// Application state shared across all handlers.
///
/// The builder is immutable and shared as-is; only the statistics need a lock.
#[derive(Clone)]
pub struct AppState {
    /// Key construction settings of this deployment
    pub builder: Arc<KeyBuilder>,
    /// Thread-safe key statistics
    pub stats: Arc<RwLock<KeyStats>>,
}

impl AppState {
    /// Creates a new AppState with the given key builder.
    pub fn new(builder: KeyBuilder) -> Self {
        Self {
            builder: Arc::new(builder),
            stats: Arc::new(RwLock::new(KeyStats::new())),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Fails when the configured prefix and version cannot produce any key.
    pub fn from_config(config: &crate::config::Config) -> Result<Self> {
        Ok(Self::new(config.key_builder()?))
    }
}

/// Handler for POST /keys
///
/// Builds the physical key for a raw key, optionally at another version.
pub async fn build_key_handler(
    State(state): State<AppState>,
    Json(req): Json<BuildKeyRequest>,
) -> Result<Json<KeyResponse>> {
    // Validate request
    if let Some(error_msg) = req.validate() {
        state.stats.write().await.record_rejected();
        return Err(KeyError::InvalidRequest(error_msg));
    }

    let builder = match req.version {
        Some(version) if version != state.builder.version() => {
            state.builder.with_version(version)?
        }
        _ => (*state.builder).clone(),
    };

    let physical = builder.build(&req.key);
    state.stats.write().await.record(&physical);
    debug!("Built {} key for version {}", physical.form(), builder.version());

    Ok(Json(KeyResponse::new(req.key, &builder, &physical)))
}

/// Handler for GET /keys/:key
///
/// Builds the physical key for a raw key at the configured version.
/// The path key is validated exactly like the POST body key.
pub async fn get_key_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<KeyResponse>> {
    if let Some(error_msg) = validate_raw_key(&key) {
        state.stats.write().await.record_rejected();
        return Err(KeyError::InvalidRequest(error_msg));
    }

    let physical = state.builder.build(&key);
    state.stats.write().await.record(&physical);

    Ok(Json(KeyResponse::new(key, &state.builder, &physical)))
}

/// Handler for GET /config
///
/// Returns the namespace, version and length budget keys are built with.
pub async fn config_handler(State(state): State<AppState>) -> Json<ConfigResponse> {
    Json(ConfigResponse::new(&state.builder))
}

/// Handler for GET /stats
///
/// Returns current key construction statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    // Acquire read lock for stats
    let stats = state.stats.read().await;
    Json(StatsResponse::new(&stats))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
