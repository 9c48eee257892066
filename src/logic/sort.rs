use std::cmp::Ordering;

use crate::logic::classify::type_priority;
use crate::state::{ProductRecord, SortMode};

/// What: Order records by type rank, then by the selected sort mode.
///
/// Inputs:
/// - `records`: Records to order (usually the filter output).
/// - `mode`: Selected sort; `None` means the requested mode was not recognised.
///
/// Output:
/// - New vector holding a permutation of `records`.
///
/// Details:
/// - Primary key: [`type_priority`] ascending (jackets/coats, vests, other).
/// - `FabricWeightHigh`/`FabricWeightLow` compare weight inside a rank; a missing
///   or non-finite weight counts as 0.
/// - `Newest`, `MostRfq` and `None` add no secondary key. The sort is stable, so
///   records keep their input order inside each rank.
#[must_use]
pub fn sort_records<'a>(records: &[&'a ProductRecord], mode: Option<SortMode>) -> Vec<&'a ProductRecord> {
    if mode.is_none() {
        tracing::debug!("[Sort] No sort mode; ordering by product type only");
    }
    let mut keyed: Vec<(u8, f64, &'a ProductRecord)> = records
        .iter()
        .map(|r| (type_priority(r), weight_key(r), *r))
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| secondary(mode, a.1, b.1)));
    keyed.into_iter().map(|(_, _, r)| r).collect()
}

/// What: Sort using a mode given as text (URL parameter, settings value).
///
/// Inputs:
/// - `records`: Records to order.
/// - `key`: Sort mode key such as `fabric-weight-high`.
///
/// Output:
/// - Same as [`sort_records`]; unknown keys log a warning and use type order only.
#[must_use]
pub fn sort_records_by_key<'a>(records: &[&'a ProductRecord], key: &str) -> Vec<&'a ProductRecord> {
    let mode = SortMode::from_config_key(key);
    if mode.is_none() {
        tracing::warn!(sort = %key, "[Sort] Unknown sort option; ordering by product type only");
    }
    sort_records(records, mode)
}

/// Secondary ordering inside one type rank.
fn secondary(mode: Option<SortMode>, a: f64, b: f64) -> Ordering {
    match mode {
        Some(SortMode::FabricWeightHigh) => b.total_cmp(&a),
        Some(SortMode::FabricWeightLow) => a.total_cmp(&b),
        Some(SortMode::Newest | SortMode::MostRfq) | None => Ordering::Equal,
    }
}

/// Weight used as sort key; absent and non-finite weights count as 0.
fn weight_key(r: &ProductRecord) -> f64 {
    match r.fabric_weight_oz {
        // `+ 0.0` folds -0.0 into 0.0 so it ties with missing weights
        Some(w) if w.is_finite() => w + 0.0,
        Some(w) => {
            tracing::warn!(slug = %r.slug, weight = w, "[Sort] Non-finite fabric weight; treating as 0");
            0.0
        }
        None => 0.0,
    }
}
