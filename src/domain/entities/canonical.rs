//! Canonical representation of an accepted item.

use std::fmt;

/// A raw item after successful normalization.
///
/// Bare domains and URLs share one set on disk, so both forms render to a
/// single canonical string via [`CanonicalItem::as_str`]. The host is kept
/// separately because blocklist checks apply to the host only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonicalItem {
    /// `label(.label)*.tld`, lowercase, no scheme, `www.`, port or path.
    Domain(String),
    /// `scheme://host[path]` with query and fragment removed.
    Url { host: String, url: String },
}

impl CanonicalItem {
    /// The domain the item belongs to.
    pub fn host(&self) -> &str {
        match self {
            CanonicalItem::Domain(domain) => domain,
            CanonicalItem::Url { host, .. } => host,
        }
    }

    /// The string stored in the domain set.
    pub fn as_str(&self) -> &str {
        match self {
            CanonicalItem::Domain(domain) => domain,
            CanonicalItem::Url { url, .. } => url,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            CanonicalItem::Domain(domain) => domain,
            CanonicalItem::Url { url, .. } => url,
        }
    }

    pub fn is_url(&self) -> bool {
        matches!(self, CanonicalItem::Url { .. })
    }

    /// Host of an already stored canonical string.
    pub fn stored_host(stored: &str) -> &str {
        match stored
            .strip_prefix("https://")
            .or_else(|| stored.strip_prefix("http://"))
        {
            Some(rest) => rest.split('/').next().unwrap_or(rest),
            None => stored,
        }
    }
}

impl fmt::Display for CanonicalItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
