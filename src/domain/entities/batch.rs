//! Results of store operations.

/// Outcome of merging one ingestion batch into the domain set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Raw items in the batch, valid or not.
    pub received: usize,
    /// Canonical strings that were not in the set before this batch, in input order.
    pub added: Vec<String>,
    /// Set size after the merge.
    pub total: usize,
}

impl BatchOutcome {
    pub fn added_count(&self) -> usize {
        self.added.len()
    }
}

/// A window over the sorted domain set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainPage {
    pub domains: Vec<String>,
    /// Size of the whole set, not of this page.
    pub total: usize,
}

impl DomainPage {
    /// Slices a sorted set.
    ///
    /// `limit == 0` means "everything from `offset` on". Offsets past the end
    /// produce an empty page rather than an error.
    pub fn slice<I>(sorted: I, offset: usize, limit: usize) -> Self
    where
        I: ExactSizeIterator<Item = String>,
    {
        let total = sorted.len();
        let take = if limit == 0 { usize::MAX } else { limit };
        let domains = sorted.skip(offset).take(take).collect();

        Self { domains, total }
    }
}
