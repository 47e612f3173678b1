//! Client Module
//!
//! Puts key construction in front of an external key-value store.
//!
//! The store itself lives outside this crate: anything that can get, set and
//! delete string keys implements [`KeyValueStore`], and [`KeyedCache`] maps
//! raw keys to physical keys before every call.

mod keyed;

pub use keyed::{KeyValueStore, KeyedCache};
