//! Catalogue engine: classification, filtering, ordering and comparison.

pub mod classify;
pub mod compare;
pub mod filter;
pub mod query;
pub mod sort;

// Re-export public APIs so callers can use `crate::logic::...` directly
pub use classify::type_priority;
pub use compare::{ComparisonRow, comparison_table, select_for_comparison};
pub use filter::filter_records;
pub use query::{CachedQuery, query};
pub use sort::{sort_records, sort_records_by_key};
