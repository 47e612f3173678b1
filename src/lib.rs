//! Cache Keys - Bounded-length cache key construction
//!
//! Turns `(key, prefix, version)` into memcached-safe keys that stay
//! compatible with the legacy `NH_` / `H_<md5>_` key scheme.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod keys;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use client::{KeyValueStore, KeyedCache};
pub use config::Config;
pub use error::{KeyError, Result};
pub use keys::{make_key, KeyBuilder, PhysicalKey};
pub use tasks::spawn_stats_reporter;
