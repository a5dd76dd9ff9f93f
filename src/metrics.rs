// Performance metrics module
//
// Lightweight lock-free counters for the load pipeline. Collected over the
// process lifetime and logged as a summary on shutdown.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Counters for the catalog load pipeline.
///
/// Uses atomic operations for thread-safe tracking without locks; writers
/// are the state manager's fetch tasks, readers are tests and the shutdown
/// summary.
#[derive(Debug)]
pub struct Metrics {
    /// List fetches started (at most one per manager by design).
    list_fetches: AtomicU64,

    /// Detail requests issued.
    detail_requests: AtomicU64,

    /// Detail results applied to the slot.
    detail_results_applied: AtomicU64,

    /// Detail results discarded because a newer request superseded them.
    stale_results_discarded: AtomicU64,

    /// Values published into the state slots.
    state_publishes: AtomicU64,

    start_time: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            list_fetches: AtomicU64::new(0),
            detail_requests: AtomicU64::new(0),
            detail_results_applied: AtomicU64::new(0),
            stale_results_discarded: AtomicU64::new(0),
            state_publishes: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn record_list_fetch(&self) {
        self.list_fetches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_detail_request(&self) {
        self.detail_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_detail_applied(&self) {
        self.detail_results_applied.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_stale_discard(&self) {
        self.stale_results_discarded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_state_publish(&self) {
        self.state_publishes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn list_fetches(&self) -> u64 {
        self.list_fetches.load(Ordering::Relaxed)
    }

    pub fn detail_requests(&self) -> u64 {
        self.detail_requests.load(Ordering::Relaxed)
    }

    pub fn detail_results_applied(&self) -> u64 {
        self.detail_results_applied.load(Ordering::Relaxed)
    }

    pub fn stale_results_discarded(&self) -> u64 {
        self.stale_results_discarded.load(Ordering::Relaxed)
    }

    pub fn state_publishes(&self) -> u64 {
        self.state_publishes.load(Ordering::Relaxed)
    }

    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Log a metrics summary
    pub fn log_summary(&self) {
        tracing::info!("=== Catalog Client Metrics ===");
        tracing::info!("Uptime: {:.2}s", self.uptime().as_secs_f64());
        tracing::info!(
            "Fetches: {} list, {} detail ({} applied, {} stale discarded)",
            self.list_fetches(),
            self.detail_requests(),
            self.detail_results_applied(),
            self.stale_results_discarded()
        );
        tracing::info!("State publishes: {}", self.state_publishes());
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
