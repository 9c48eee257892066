//! Side-by-side product comparison.

use serde::Serialize;

use crate::state::ProductRecord;

/// Placeholder for a value the product does not carry.
const MISSING: &str = "—";

/// One attribute line of the comparison table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    /// Attribute label.
    pub label: &'static str,
    /// One cell per compared product, in column order.
    pub values: Vec<String>,
}

/// What: Pick the records to compare.
///
/// Inputs:
/// - `records`: Catalogue records.
/// - `slugs`: Slugs ticked for comparison.
///
/// Output:
/// - Matching records in catalogue order; unknown slugs are ignored.
#[must_use]
pub fn select_for_comparison<'a, S: AsRef<str>>(
    records: &'a [ProductRecord],
    slugs: &[S],
) -> Vec<&'a ProductRecord> {
    records
        .iter()
        .filter(|r| slugs.iter().any(|s| s.as_ref() == r.slug))
        .collect()
}

/// What: Build the attribute rows of the comparison table.
///
/// Inputs:
/// - `products`: Columns, already selected.
///
/// Output:
/// - Rows for category, fabric weight, lining, MOQ, size range and key specs.
///   Empty when there is nothing to compare.
#[must_use]
pub fn comparison_table(products: &[&ProductRecord]) -> Vec<ComparisonRow> {
    if products.is_empty() {
        return Vec::new();
    }
    let row = |label: &'static str, cell: &dyn Fn(&ProductRecord) -> String| ComparisonRow {
        label,
        values: products.iter().map(|p| cell(p)).collect(),
    };
    vec![
        row("Category", &|p| match &p.sub_category {
            Some(sub) => format!("{} / {sub}", p.category),
            None => p.category.to_string(),
        }),
        row("Fabric weight", &|p| {
            p.fabric_weight_oz
                .map_or_else(|| MISSING.to_string(), |oz| format!("{oz}oz"))
        }),
        row("Lining", &|p| {
            p.lining.clone().unwrap_or_else(|| MISSING.to_string())
        }),
        row("MOQ", &|p| non_blank(&p.moq)),
        row("Size range", &|p| size_range(&p.sizes)),
        row("Key specs", &|p| {
            if p.key_specs.is_empty() {
                MISSING.to_string()
            } else {
                p.key_specs.join("; ")
            }
        }),
    ]
}

fn non_blank(s: &str) -> String {
    let t = s.trim();
    if t.is_empty() {
        MISSING.to_string()
    } else {
        t.to_string()
    }
}

/// "S - 2XL" from an ordered size list.
fn size_range(sizes: &[String]) -> String {
    match (sizes.first(), sizes.last()) {
        (Some(a), Some(b)) if a == b => a.clone(),
        (Some(a), Some(b)) => format!("{a} - {b}"),
        _ => MISSING.to_string(),
    }
}
