//! Repository trait for the persisted domain set.

use async_trait::async_trait;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Failures of the backing store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Stored data in {} is not valid UTF-8", path.display())]
    Encoding { path: PathBuf },
}

/// Storage contract for the set of canonical strings.
///
/// Implementations hold no locks of their own: callers that read, modify and
/// write back must serialize those steps themselves (see
/// [`crate::application::services::CollectorService`]). What implementations
/// must guarantee is that [`replace`](Self::replace) is all-or-nothing for a
/// concurrent [`load`](Self::load).
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::FileDomainSetRepository`] - one item per line
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DomainSetRepository: Send + Sync {
    /// Loads the whole set. A store that does not exist yet is an empty set.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store exists but cannot be read.
    async fn load(&self) -> Result<BTreeSet<String>, StoreError>;

    /// Replaces the stored set with `items`, in sorted order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on write failure; the previous contents stay intact.
    async fn replace(&self, items: &BTreeSet<String>) -> Result<(), StoreError>;

    /// Removes the store entirely. Removing a missing store is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store exists but cannot be removed.
    async fn remove_all(&self) -> Result<(), StoreError>;

    /// Where the set lives, for reporting.
    fn location(&self) -> PathBuf;
}
