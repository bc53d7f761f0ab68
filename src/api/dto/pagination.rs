//! Paging query parameters for `GET /domains`.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

/// Offset/limit paging.
///
/// Uses `serde_with` to parse numbers from query strings; negative or
/// non-numeric values are rejected by the extractor.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub offset: Option<usize>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<usize>,
}

impl ListParams {
    /// Returns `(offset, limit)`; both default to 0, and a zero limit means
    /// "no limit".
    pub fn offset_limit(&self) -> (usize, usize) {
        (self.offset.unwrap_or(0), self.limit.unwrap_or(0))
    }
}
