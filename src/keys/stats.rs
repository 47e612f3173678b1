//! Key Statistics Module
//!
//! Counts how often keys take the readable path versus the hashed path.

use serde::Serialize;

use crate::keys::{KeyForm, PhysicalKey};

// == Key Stats ==
/// Tracks key construction outcomes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeyStats {
    /// Keys returned in `NH_` form
    pub unhashed: u64,
    /// Keys shortened to `H_<digest>_` form
    pub hashed: u64,
    /// Raw keys rejected as invalid input
    pub rejected: u64,
}

impl KeyStats {
    // == Constructor ==
    /// Creates a new KeyStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record ==
    /// Counts a successfully built key by its form.
    pub fn record(&mut self, key: &PhysicalKey) {
        match key.form() {
            KeyForm::Unhashed => self.unhashed += 1,
            KeyForm::Hashed => self.hashed += 1,
        }
    }

    // == Record Rejected ==
    pub fn record_rejected(&mut self) {
        self.rejected += 1;
    }

    // == Total ==
    /// Number of keys built, rejected ones excluded.
    pub fn total(&self) -> u64 {
        self.unhashed + self.hashed
    }

    // == Hashed Ratio ==
    /// Returns hashed / (hashed + unhashed), or 0.0 if nothing was built.
    pub fn hashed_ratio(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.hashed as f64 / total as f64
        }
    }
}
