//! Process-wide running counters.

use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Request and ingestion counters for the lifetime of one server instance.
///
/// Counters are independent atomics; a [`snapshot`](Self::snapshot) taken
/// while requests are in flight may mix values from slightly different
/// moments. They are never persisted.
#[derive(Debug)]
pub struct StatsService {
    total_received: AtomicU64,
    unique_domains: AtomicU64,
    requests: AtomicU64,
    started: Instant,
    started_at: DateTime<Utc>,
}

/// Point-in-time copy of [`StatsService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub total_received: u64,
    pub unique_domains: u64,
    pub requests: u64,
    pub uptime: Duration,
    pub started_at: DateTime<Utc>,
}

impl StatsService {
    /// Starts the clock, seeding `unique_domains` with the size of the set
    /// found on disk.
    pub fn new(unique_domains: u64) -> Self {
        Self {
            total_received: AtomicU64::new(0),
            unique_domains: AtomicU64::new(unique_domains),
            requests: AtomicU64::new(0),
            started: Instant::now(),
            started_at: Utc::now(),
        }
    }

    pub fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Accounts for an ingestion batch of `received` raw items that left the
    /// set at `unique_now` entries.
    pub fn record_batch(&self, received: usize, unique_now: usize) {
        self.total_received
            .fetch_add(received as u64, Ordering::Relaxed);
        self.unique_domains
            .store(unique_now as u64, Ordering::Relaxed);
    }

    pub fn record_clear(&self) {
        self.unique_domains.store(0, Ordering::Relaxed);
    }

    pub fn uptime(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            total_received: self.total_received.load(Ordering::Relaxed),
            unique_domains: self.unique_domains.load(Ordering::Relaxed),
            requests: self.requests.load(Ordering::Relaxed),
            uptime: self.uptime(),
            started_at: self.started_at,
        }
    }
}

impl Default for StatsService {
    fn default() -> Self {
        Self::new(0)
    }
}
