use crate::state::{Facets, Hardware, ProductRecord};

/// What: Reduce the catalogue to the records matching the search box and facet panel.
///
/// Inputs:
/// - `records`: Full record set in catalogue order.
/// - `search`: Raw search text; trimmed and compared case-insensitively.
/// - `facets`: Facet selections; empty selections do not filter.
///
/// Output:
/// - Borrowed records that pass every active check, in input order.
///
/// Details:
/// - Search matches a substring of `name` or `summary`; blank search matches all.
/// - Category is an exact sub-category match.
/// - Every requested fabric must be present (AND); any requested weight range may match (OR).
/// - Records without a fabric weight pass the weight facet.
/// - Records missing a slug or name are excluded with a warning.
#[must_use]
pub fn filter_records<'a>(
    records: &'a [ProductRecord],
    search: &str,
    facets: &Facets,
) -> Vec<&'a ProductRecord> {
    let needle = search.trim().to_lowercase();
    let mut out: Vec<&ProductRecord> = Vec::with_capacity(records.len());
    for r in records {
        if !r.is_well_formed() {
            tracing::warn!(slug = %r.slug, name = %r.name, "[Filter] Skipping incomplete product");
            continue;
        }
        if matches_search(r, &needle) && matches_facets(r, facets) {
            out.push(r);
        }
    }
    tracing::trace!(
        total = records.len(),
        kept = out.len(),
        search = %needle,
        facets = facets.active_count(),
        "[Filter] Applied"
    );
    out
}

/// Search check against an already trimmed, lower-cased needle.
fn matches_search(r: &ProductRecord, needle: &str) -> bool {
    needle.is_empty()
        || r.name.to_lowercase().contains(needle)
        || r.summary.to_lowercase().contains(needle)
}

/// What: Apply every active facet to one record.
///
/// Inputs:
/// - `r`: Record to test.
/// - `facets`: Selections.
///
/// Output:
/// - `true` when no active facet rejects the record.
fn matches_facets(r: &ProductRecord, facets: &Facets) -> bool {
    if !facets.category.is_empty()
        && !r
            .sub_category
            .as_ref()
            .is_some_and(|sub| facets.category.contains(sub))
    {
        return false;
    }

    let tags = r.spec_tags();

    if !facets.fabric.iter().all(|f| f.is_set(tags)) {
        return false;
    }

    if !facets.fabric_weight.is_empty()
        && let Some(oz) = r.fabric_weight_oz
        && !facets.fabric_weight.iter().any(|b| b.contains(oz))
    {
        return false;
    }

    if facets.weather_resistant && !tags.weather_resistant {
        return false;
    }

    if facets.hardware.contains(&Hardware::Ykk) && !tags.ykk {
        return false;
    }

    true
}
