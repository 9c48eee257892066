//! Immutable in-memory product store.
//!
//! The store is built once, from the JSON bundled into the binary or from a
//! data file, and is read-only afterwards. Loading is forgiving per record:
//! only items that cannot be read or that lack a slug or name are skipped,
//! with a warning. Content gaps such as a missing MOQ stay in the store for
//! the QA checks to report. A later record reusing an earlier slug is dropped
//! so slugs stay unique.

mod error;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

pub use error::CatalogError;

use crate::state::{Category, ProductRecord};
use crate::validation::{ValidationResult, validate_product};

/// Product data compiled into the binary.
const BUNDLED_PRODUCTS: &str = include_str!("../../data/products.json");

/// Validation outcome for one item of a product document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RecordCheck {
    /// Position in the document.
    pub index: usize,
    /// Slug, when the item has a string one.
    pub slug: Option<String>,
    /// Validation errors; empty when the item is complete.
    pub result: ValidationResult,
}

/// Read-only collection of product records with unique slugs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    records: Vec<ProductRecord>,
}

impl Catalog {
    /// What: Build a catalogue from already-typed records.
    ///
    /// Inputs:
    /// - `records`: Records in display order.
    ///
    /// Output:
    /// - Catalogue keeping the first record for each slug.
    ///
    /// Details:
    /// - Records are not validated here; the filter copes with incomplete ones.
    #[must_use]
    pub fn from_records(records: Vec<ProductRecord>) -> Self {
        let mut seen: HashSet<String> = HashSet::with_capacity(records.len());
        let mut kept = Vec::with_capacity(records.len());
        for r in records {
            if seen.insert(r.slug.clone()) {
                kept.push(r);
            } else {
                tracing::warn!(slug = %r.slug, "[Catalog] Duplicate slug; keeping the first record");
            }
        }
        Self { records: kept }
    }

    /// What: Parse a JSON array of products.
    ///
    /// Inputs:
    /// - `raw`: Document text.
    ///
    /// Output:
    /// - `Ok(Catalog)` with every usable record; `Err` only when the document
    ///   itself is not a JSON array.
    ///
    /// Details:
    /// - Items that fail to deserialise (e.g. no `category`) or have an empty
    ///   slug or name are skipped. Field-level validation is left to
    ///   [`Catalog::check_document`].
    ///
    /// # Errors
    /// - [`CatalogError::Json`] for malformed JSON.
    /// - [`CatalogError::NotAnArray`] when the top level is not an array.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let Value::Array(items) = serde_json::from_str::<Value>(raw)? else {
            return Err(CatalogError::NotAnArray);
        };
        let total = items.len();
        let mut records = Vec::with_capacity(total);
        for (index, item) in items.into_iter().enumerate() {
            let slug = item
                .get("slug")
                .and_then(Value::as_str)
                .unwrap_or("<none>")
                .to_string();
            match serde_json::from_value::<ProductRecord>(item) {
                Ok(r) if r.is_well_formed() => records.push(r),
                Ok(_) => {
                    tracing::warn!(index, slug = %slug, "[Catalog] Skipping product without slug or name");
                }
                Err(e) => {
                    tracing::warn!(index, slug = %slug, error = %e, "[Catalog] Skipping unreadable product");
                }
            }
        }
        let catalog = Self::from_records(records);
        tracing::debug!(
            total,
            loaded = catalog.len(),
            "[Catalog] Product data parsed"
        );
        Ok(catalog)
    }

    /// Load products from a JSON file.
    ///
    /// # Errors
    /// - [`CatalogError::Io`] if the file cannot be read, plus the errors of
    ///   [`Catalog::from_json_str`].
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&raw)?;
        tracing::info!(path = %path.display(), count = catalog.len(), "[Catalog] Loaded product data");
        Ok(catalog)
    }

    /// Products compiled into the binary.
    ///
    /// # Errors
    /// - Only if the bundled document is corrupt, which the test suite rules out.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json_str(BUNDLED_PRODUCTS)
    }

    /// Raw text of the bundled product document.
    #[must_use]
    pub const fn bundled_source() -> &'static str {
        BUNDLED_PRODUCTS
    }

    /// What: Validate every item of a product document without loading it.
    ///
    /// Inputs:
    /// - `raw`: Document text.
    ///
    /// Output:
    /// - One [`RecordCheck`] per array item, in document order.
    ///
    /// # Errors
    /// - [`CatalogError::Json`] or [`CatalogError::NotAnArray`] as for loading.
    pub fn check_document(raw: &str) -> Result<Vec<RecordCheck>, CatalogError> {
        let Value::Array(items) = serde_json::from_str::<Value>(raw)? else {
            return Err(CatalogError::NotAnArray);
        };
        Ok(items
            .iter()
            .enumerate()
            .map(|(index, item)| RecordCheck {
                index,
                slug: item
                    .get("slug")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                result: validate_product(item),
            })
            .collect())
    }

    /// All records in catalogue order.
    #[must_use]
    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    /// Look a record up by slug.
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&ProductRecord> {
        self.records.iter().find(|r| r.slug == slug)
    }

    /// Records in one catalogue section, catalogue order.
    #[must_use]
    pub fn by_category(&self, category: Category) -> Vec<&ProductRecord> {
        self.records
            .iter()
            .filter(|r| r.category == category)
            .collect()
    }

    /// Distinct sub-categories in first-seen order; feeds the category facet.
    #[must_use]
    pub fn sub_categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter_map(|r| r.sub_category.as_deref())
            .filter(|s| seen.insert(*s))
            .collect()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// No records loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
