//! Catalogue content checks for the Women's range.
//!
//! Nothing here runs on its own; callers invoke [`run_full_suite`] (the CLI
//! does so for `--qa`) or the individual checks.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::sizechart::SizeCharts;
use crate::state::{Category, ProductRecord};

/// Analytics events the product pages are expected to emit.
pub const EXPECTED_EVENTS: [&str; 5] = [
    "product_card_open",
    "view_item",
    "size_guide_open",
    "specsheet_downloaded",
    "add_to_rfq",
];

/// Summary of content gaps in the Women's range.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QaReport {
    /// Every Women's slug is routable.
    pub womens_routes_ok: bool,
    /// Slugs showing a placeholder or default image.
    pub missing_images: Vec<String>,
    /// Slugs with a blank MOQ.
    pub products_without_moq: Vec<String>,
    /// Placeholder or default images across the range.
    pub placeholders_in_use: usize,
    /// Analytics events expected to be bound.
    pub events_bound: Vec<String>,
}

/// Content problems found for one product.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProductIssues {
    /// Product slug.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Human readable problems; empty when the product is complete.
    pub issues: Vec<String>,
}

/// Outcome of [`run_full_suite`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QaSuiteResult {
    /// Headline report.
    pub report: QaReport,
    /// Result of [`validate_womens_routes`].
    pub routes_ok: bool,
    /// Result of [`validate_product_data`].
    pub product_data_ok: bool,
    /// Per product findings of [`validate_data_binding`].
    pub data_binding: Vec<ProductIssues>,
}

impl QaSuiteResult {
    /// True when no check found anything to fix.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.routes_ok
            && self.product_data_ok
            && self.report.missing_images.is_empty()
            && self.report.products_without_moq.is_empty()
            && self.data_binding.iter().all(|p| p.issues.is_empty())
    }
}

fn is_placeholder_or_default(url: &str) -> bool {
    url.contains("placeholder") || url.contains("default")
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// What: Build the headline report for Women's products.
///
/// Inputs:
/// - `catalog`: Product store.
///
/// Output:
/// - [`QaReport`] listing placeholder images and blank MOQs.
#[must_use]
pub fn generate_report(catalog: &Catalog) -> QaReport {
    let womens = catalog.by_category(Category::Women);
    let missing_images = womens
        .iter()
        .filter(|p| p.images.iter().any(|i| is_placeholder_or_default(i)))
        .map(|p| p.slug.clone())
        .collect();
    let products_without_moq = womens
        .iter()
        .filter(|p| is_blank(&p.moq))
        .map(|p| p.slug.clone())
        .collect();
    let placeholders_in_use = womens
        .iter()
        .flat_map(|p| p.images.iter())
        .filter(|i| is_placeholder_or_default(i))
        .count();
    QaReport {
        womens_routes_ok: routes_ok(&womens),
        missing_images,
        products_without_moq,
        placeholders_in_use,
        events_bound: EXPECTED_EVENTS.iter().map(ToString::to_string).collect(),
    }
}

fn routes_ok(womens: &[&ProductRecord]) -> bool {
    womens
        .iter()
        .all(|p| !p.slug.is_empty() && !p.slug.contains(' '))
}

/// Every Women's product has a non-empty slug without spaces.
#[must_use]
pub fn validate_womens_routes(catalog: &Catalog) -> bool {
    let womens = catalog.by_category(Category::Women);
    let ok = routes_ok(&womens);
    tracing::info!(products = womens.len(), ok, "[QA] Women's routes");
    ok
}

/// What: Check that Women's products carry the fields a product page renders.
///
/// Inputs:
/// - `catalog`: Product store.
///
/// Output:
/// - `true` when every product has slug, name, summary, key specs, MOQ, sizes and features.
#[must_use]
pub fn validate_product_data(catalog: &Catalog) -> bool {
    let womens = catalog.by_category(Category::Women);
    let complete = womens
        .iter()
        .filter(|p| {
            !is_blank(&p.slug)
                && !is_blank(&p.name)
                && !is_blank(&p.summary)
                && !p.key_specs.is_empty()
                && !is_blank(&p.moq)
                && !p.sizes.is_empty()
                && !p.features.is_empty()
        })
        .count();
    let ok = complete == womens.len();
    tracing::info!(complete, total = womens.len(), ok, "[QA] Product data");
    ok
}

/// What: List the data gaps of each Women's product.
///
/// Inputs:
/// - `catalog`: Product store.
/// - `charts`: Size charts, to confirm each product has one.
///
/// Output:
/// - One entry per product, in catalogue order.
///
/// Details:
/// - Only `placeholder` images count here; `default` images are reported by
///   [`generate_report`].
#[must_use]
pub fn validate_data_binding(catalog: &Catalog, charts: &SizeCharts) -> Vec<ProductIssues> {
    catalog
        .by_category(Category::Women)
        .into_iter()
        .map(|p| {
            let mut issues = Vec::new();
            if is_blank(&p.moq) {
                issues.push("Missing MOQ".to_string());
            }
            if !charts.has_chart(&p.slug) {
                issues.push("Missing size chart".to_string());
            }
            if p.features.is_empty() {
                issues.push("Missing features".to_string());
            }
            if p.key_specs.is_empty() {
                issues.push("Missing key specs".to_string());
            }
            if p.variants.is_empty() {
                issues.push("Missing variants".to_string());
            }
            let placeholders = p.images.iter().filter(|i| i.contains("placeholder")).count();
            if placeholders > 0 {
                issues.push(format!("{placeholders} placeholder images"));
            }
            if issues.is_empty() {
                tracing::info!(slug = %p.slug, "[QA] Data complete");
            } else {
                tracing::warn!(slug = %p.slug, issues = %issues.join(", "), "[QA] Data incomplete");
            }
            ProductIssues {
                slug: p.slug.clone(),
                name: p.name.clone(),
                issues,
            }
        })
        .collect()
}

/// What: Run every check and log a summary.
///
/// Inputs:
/// - `catalog`: Product store.
/// - `charts`: Size charts.
///
/// Output:
/// - Combined [`QaSuiteResult`].
#[must_use]
pub fn run_full_suite(catalog: &Catalog, charts: &SizeCharts) -> QaSuiteResult {
    tracing::info!(products = catalog.len(), "[QA] Running suite");
    let report = generate_report(catalog);
    tracing::info!(
        placeholder_products = report.missing_images.len(),
        missing_moq = report.products_without_moq.len(),
        placeholder_images = report.placeholders_in_use,
        events = report.events_bound.len(),
        "[QA] Report"
    );
    let result = QaSuiteResult {
        routes_ok: validate_womens_routes(catalog),
        product_data_ok: validate_product_data(catalog),
        data_binding: validate_data_binding(catalog, charts),
        report,
    };
    tracing::info!(passed = result.all_passed(), "[QA] Suite complete");
    result
}
