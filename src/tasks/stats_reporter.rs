//! Key Statistics Reporter
//!
//! Background task that periodically logs key construction statistics.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::keys::KeyStats;

/// Spawns a background task that periodically logs key statistics.
///
/// A line is logged at info level only when the counters moved since the
/// previous run, so an idle service stays quiet.
///
/// # Arguments
/// * `stats` - Arc<RwLock<KeyStats>> shared with the HTTP handlers
/// * `interval_secs` - Interval in seconds between reports, raised to 1 if 0
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let stats = Arc::new(RwLock::new(KeyStats::new()));
/// let reporter = spawn_stats_reporter(stats.clone(), 60);
/// // Later, during shutdown:
/// reporter.abort();
/// ```
pub fn spawn_stats_reporter(stats: Arc<RwLock<KeyStats>>, interval_secs: u64) -> JoinHandle<()> {
    let interval = report_interval(interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting key stats reporter with interval of {} seconds",
            interval.as_secs()
        );

        let mut last = KeyStats::new();
        loop {
            tokio::time::sleep(interval).await;

            let current = stats.read().await.clone();
            if let Some(snapshot) = changed_since(&last, current) {
                info!(
                    "Key stats: unhashed={}, hashed={}, rejected={}, hashed_ratio={:.3}",
                    snapshot.unhashed,
                    snapshot.hashed,
                    snapshot.rejected,
                    snapshot.hashed_ratio()
                );
                last = snapshot;
            } else {
                debug!("Key stats: no new keys built");
            }
        }
    })
}

/// Sleep between reports, never shorter than one second.
fn report_interval(interval_secs: u64) -> Duration {
    Duration::from_secs(interval_secs.max(1))
}

/// Returns the current snapshot if it differs from the last reported one.
fn changed_since(last: &KeyStats, current: KeyStats) -> Option<KeyStats> {
    if *last == current {
        None
    } else {
        Some(current)
    }
}
