//! Catalogue query facade: filter, then sort.

use std::num::NonZeroUsize;
use std::sync::Mutex;

use lru::LruCache;

use crate::logic::filter::filter_records;
use crate::logic::sort::sort_records;
use crate::state::{ProductRecord, UiState};

/// What: Answer "what does the grid show" for one UI state.
///
/// Inputs:
/// - `records`: Full catalogue.
/// - `ui`: Search text, facet selections and sort mode.
///
/// Output:
/// - Borrowed records, filtered and ordered.
///
/// Details:
/// - Pure composition of [`filter_records`] and [`sort_records`].
#[must_use]
pub fn query<'a>(records: &'a [ProductRecord], ui: &UiState) -> Vec<&'a ProductRecord> {
    let filtered = filter_records(records, &ui.search, &ui.facets);
    sort_records(&filtered, ui.sort_mode)
}

/// Memoising wrapper around [`query`] for one catalogue.
///
/// Both stages are pure, so a result only depends on the UI state once the
/// record slice is fixed. Results are kept in an LRU keyed by [`UiState`].
#[derive(Debug)]
pub struct CachedQuery<'a> {
    records: &'a [ProductRecord],
    cache: Mutex<LruCache<UiState, Vec<&'a ProductRecord>>>,
}

impl<'a> CachedQuery<'a> {
    /// What: Create a cache bound to one record slice.
    ///
    /// Inputs:
    /// - `records`: Catalogue the cache answers for.
    /// - `capacity`: Maximum remembered UI states; `0` is treated as 1.
    ///
    /// Output:
    /// - Empty cache.
    #[must_use]
    pub fn new(records: &'a [ProductRecord], capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            records,
            cache: Mutex::new(LruCache::new(cap)),
        }
    }

    /// What: Run the query, reusing a cached answer when the UI state repeats.
    ///
    /// Inputs:
    /// - `ui`: UI state.
    ///
    /// Output:
    /// - Same records and order as [`query`].
    ///
    /// Details:
    /// - A poisoned lock bypasses the cache rather than failing.
    #[must_use]
    pub fn query(&self, ui: &UiState) -> Vec<&'a ProductRecord> {
        let Ok(mut cache) = self.cache.lock() else {
            tracing::warn!("[Query] Cache lock poisoned; computing without cache");
            return query(self.records, ui);
        };
        if let Some(hit) = cache.get(ui) {
            tracing::trace!(results = hit.len(), "[Query] Cache hit");
            return hit.clone();
        }
        let fresh = query(self.records, ui);
        cache.put(ui.clone(), fresh.clone());
        fresh
    }

    /// Number of UI states currently cached.
    #[must_use]
    pub fn cached_states(&self) -> usize {
        self.cache.lock().map_or(0, |c| c.len())
    }
}
