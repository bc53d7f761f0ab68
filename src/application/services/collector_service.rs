//! Domain set ingestion service.

use serde_json::Value;
use std::collections::{BTreeSet, HashSet};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::blocklist::Blocklist;
use crate::domain::entities::{BatchOutcome, CanonicalItem, DomainPage};
use crate::application::services::StatsService;
use crate::domain::repositories::DomainSetRepository;
use crate::error::AppError;
use crate::utils::normalizer::normalize_value;

/// Owns the persisted domain set.
///
/// Every read-modify-write of the set ([`add_batch`](Self::add_batch),
/// [`clear`](Self::clear)) runs under one async mutex, so concurrent batches
/// can never both read the same snapshot and overwrite each other's additions.
/// Reads go straight to the repository, whose writes are atomic replacements.
///
/// Statistics are recorded while the lock is still held, so `unique_domains`
/// follows the same order as the writes to the set.
pub struct CollectorService<R: DomainSetRepository> {
    repository: Arc<R>,
    stats: Arc<StatsService>,
    blocklist: Blocklist,
    write_lock: Mutex<()>,
}

impl<R: DomainSetRepository> CollectorService<R> {
    /// Creates a service that filters with the built-in blocklist.
    pub fn new(repository: Arc<R>, stats: Arc<StatsService>) -> Self {
        Self::with_blocklist(repository, stats, Blocklist::default())
    }

    pub fn with_blocklist(
        repository: Arc<R>,
        stats: Arc<StatsService>,
        blocklist: Blocklist,
    ) -> Self {
        Self {
            repository,
            stats,
            blocklist,
            write_lock: Mutex::new(()),
        }
    }

    /// Normalizes, filters and merges a batch of raw items.
    ///
    /// Invalid and blocked items are dropped without error. Items are
    /// considered in input order, so `added` lists net-new entries in the
    /// order they were submitted. A bare domain is already present when any
    /// stored entry, URL or domain, has that host. The file is only rewritten
    /// when something was added.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the set cannot be read or written.
    /// A failed write leaves the persisted set untouched.
    pub async fn add_batch(&self, items: &[Value]) -> Result<BatchOutcome, AppError> {
        let candidates: Vec<CanonicalItem> = items
            .iter()
            .filter_map(normalize_value)
            .filter(|item| !self.blocklist.is_blocked(item.host()))
            .collect();

        let _guard = self.write_lock.lock().await;

        let mut set = self.repository.load().await?;
        let added = merge(&mut set, candidates);

        if !added.is_empty() {
            self.repository.replace(&set).await?;
        }
        self.stats.record_batch(items.len(), set.len());

        Ok(BatchOutcome {
            received: items.len(),
            added,
            total: set.len(),
        })
    }

    /// Removes the persisted set. Clearing an empty store is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if an existing store cannot be removed.
    pub async fn clear(&self) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        self.repository.remove_all().await?;
        self.stats.record_clear();
        Ok(())
    }

    /// Returns `[offset, offset + limit)` of the sorted set, or everything from
    /// `offset` on when `limit` is zero.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the set cannot be read.
    pub async fn read_all(&self, offset: usize, limit: usize) -> Result<DomainPage, AppError> {
        let set = self.repository.load().await?;
        Ok(DomainPage::slice(set.into_iter(), offset, limit))
    }

    /// Current size of the persisted set.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the set cannot be read.
    pub async fn count(&self) -> Result<usize, AppError> {
        Ok(self.repository.load().await?.len())
    }

    /// Where the set is persisted.
    pub fn output_file(&self) -> PathBuf {
        self.repository.location()
    }
}

/// Inserts net-new candidates into `set` and returns them in input order.
fn merge(set: &mut BTreeSet<String>, candidates: Vec<CanonicalItem>) -> Vec<String> {
    let mut hosts: HashSet<String> = set
        .iter()
        .map(|stored| CanonicalItem::stored_host(stored).to_string())
        .collect();
    let mut added = Vec::new();

    for candidate in candidates {
        let is_new = match &candidate {
            CanonicalItem::Domain(domain) => !hosts.contains(domain),
            CanonicalItem::Url { url, .. } => !set.contains(url),
        };
        if !is_new {
            continue;
        }

        hosts.insert(candidate.host().to_string());
        let value = candidate.into_string();
        set.insert(value.clone());
        added.push(value);
    }

    added
}
