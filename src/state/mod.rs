//! Catalogue value types.
//!
//! Records, facet selections and sort modes live in `types`; the forgiving
//! deserialisation helpers they rely on live in `lenient`.

pub mod lenient;
pub mod types;

pub use types::{
    Category, FabricType, FacetToken, Facets, Hardware, ProductRecord, SortMode, SpecTags, UiState,
    WeightBucket,
};
