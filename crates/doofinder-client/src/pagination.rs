//! Page-window arithmetic over the provider's fixed-size pagination.
//!
//! Doofinder only serves page-based retrieval (`page`, `rpp`) with a bounded
//! page size, while callers ask for an arbitrary global `offset`/`limit`
//! window (e.g. "items 37–45"). A [`PageWindow`] names the minimal run of
//! provider pages covering that window and how far into the concatenated
//! results the window starts.

use crate::error::ClientError;

/// The provider caps `rpp` (results per page) at 100.
pub const MAX_RESULTS_PER_PAGE: u64 = 100;

/// The provider page fetches needed to serve one offset/limit window.
///
/// Pages are 1-indexed. The concatenation of pages `first_page..=last_page`
/// (each sized `rpp`) covers the window; the window itself is
/// `[skip, skip + limit)` within that concatenation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Results per page to request; `min(limit, MAX_RESULTS_PER_PAGE)`.
    pub rpp: u64,
    pub first_page: u64,
    pub last_page: u64,
    /// Offset of the first wanted record within the first fetched page.
    pub skip: u64,
}

impl PageWindow {
    /// Computes the page run for a global `offset`/`limit` window.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidWindow`] when `limit` is zero; a zero
    /// limit has no well-defined page run (and would divide by zero).
    pub fn compute(offset: u64, limit: u64, max_rpp: u64) -> Result<Self, ClientError> {
        if limit == 0 || max_rpp == 0 {
            return Err(ClientError::InvalidWindow { offset, limit });
        }

        let rpp = limit.min(max_rpp);
        let first_page = offset / rpp + 1;
        let last_page = (offset + limit).div_ceil(rpp);
        let skip = offset % rpp;

        Ok(Self {
            rpp,
            first_page,
            last_page,
            skip,
        })
    }

    /// Number of provider fetches this window needs.
    #[must_use]
    pub fn page_count(&self) -> u64 {
        self.last_page - self.first_page + 1
    }
}
