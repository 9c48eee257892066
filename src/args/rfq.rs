//! RFQ submission from a JSON file.

use std::fs;
use std::path::Path;

use fa_catalogue::catalog::Catalog;
use fa_catalogue::rfq::{RfqSubmission, submit};

use crate::args::Result;

/// What: Submit the RFQ stored in `path`.
///
/// Inputs:
/// - `catalog`: Product store, used to flag slugs it does not carry.
/// - `path`: JSON file in the RFQ form's payload shape.
/// - `json`: Emit the acknowledgement as JSON.
///
/// Output:
/// - Acknowledgement text; a rejected submission is reported, not returned as an error.
///
/// # Errors
/// - The file cannot be read or is not a JSON object.
pub fn handle_rfq(catalog: &Catalog, path: &Path, json: bool) -> Result<String> {
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("failed to read RFQ {}: {e}", path.display()))?;
    let submission: RfqSubmission = serde_json::from_str(&raw)
        .map_err(|e| format!("RFQ {} is not valid JSON: {e}", path.display()))?;
    for item in &submission.items {
        if !item.product_slug.is_empty() && catalog.get(&item.product_slug).is_none() {
            tracing::warn!(slug = %item.product_slug, "[RFQ] Requested product is not in the catalogue");
        }
    }
    let ack = submit(&submission);
    if json {
        return Ok(serde_json::to_string_pretty(&ack)?);
    }
    Ok(match ack.rfq_id {
        Some(id) if ack.success => format!("{} ({id})\n", ack.message),
        _ => format!("RFQ rejected: {}\n", ack.message),
    })
}
