use crate::state::ProductRecord;

/// Jackets and coats.
pub const PRIORITY_OUTERWEAR: u8 = 1;
/// Vests and gilets named as vests.
pub const PRIORITY_VEST: u8 = 2;
/// Everything else.
pub const PRIORITY_OTHER: u8 = 3;

/// What: Infer the coarse type rank used as the primary sort key.
///
/// Inputs:
/// - `product`: Record to classify.
///
/// Output:
/// - `1` when sub-category or name mentions "jacket" or "coat", `2` for "vest", `3` otherwise.
///
/// Details:
/// - Case-insensitive; a missing sub-category is treated as empty text.
#[must_use]
pub fn type_priority(product: &ProductRecord) -> u8 {
    let sub = product.sub_category_str().to_lowercase();
    let name = product.name.to_lowercase();
    let mentions = |token: &str| sub.contains(token) || name.contains(token);

    if mentions("jacket") || mentions("coat") {
        PRIORITY_OUTERWEAR
    } else if mentions("vest") {
        PRIORITY_VEST
    } else {
        PRIORITY_OTHER
    }
}
