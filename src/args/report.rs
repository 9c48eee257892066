//! Data validation and QA reports from the command line.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use fa_catalogue::catalog::{Catalog, RecordCheck};
use fa_catalogue::qa::run_full_suite;
use fa_catalogue::sizechart::SizeCharts;

use crate::args::Result;

/// What: Validate every item of the product document.
///
/// Inputs:
/// - `path`: Data file, or `None` for the bundled document.
/// - `json`: Emit the checks as JSON.
///
/// Output:
/// - One line per item plus a summary, or a JSON array.
///
/// # Errors
/// - The file cannot be read or is not a JSON array.
pub fn handle_validate(path: Option<&Path>, json: bool) -> Result<String> {
    let checks = match path {
        Some(p) => {
            let raw = fs::read_to_string(p)
                .map_err(|e| format!("failed to read product data {}: {e}", p.display()))?;
            Catalog::check_document(&raw)?
        }
        None => Catalog::check_document(Catalog::bundled_source())?,
    };
    let invalid = checks.iter().filter(|c| !c.result.is_valid()).count();
    tracing::info!(records = checks.len(), invalid, "[Validate] Product data checked");
    if json {
        return Ok(serde_json::to_string_pretty(&checks)?);
    }
    Ok(render_checks(&checks, invalid))
}

fn render_checks(checks: &[RecordCheck], invalid: usize) -> String {
    let mut out = String::new();
    for c in checks {
        let label = c
            .slug
            .clone()
            .unwrap_or_else(|| format!("#{}", c.index));
        if c.result.is_valid() {
            let _ = writeln!(out, "OK    {label}");
        } else {
            let _ = writeln!(out, "FAIL  {label}: {}", c.result.errors.join("; "));
        }
    }
    let _ = writeln!(out, "{} records, {invalid} invalid", checks.len());
    out
}

/// What: Run the QA suite and render its findings.
///
/// Inputs:
/// - `catalog`: Product store.
/// - `json`: Emit the suite result as JSON.
///
/// Output:
/// - Report text or JSON.
///
/// # Errors
/// - The bundled size charts are corrupt; JSON serialisation failures.
pub fn handle_qa(catalog: &Catalog, json: bool) -> Result<String> {
    let charts = SizeCharts::bundled()?;
    let suite = run_full_suite(catalog, &charts);
    if json {
        return Ok(serde_json::to_string_pretty(&suite)?);
    }
    let pass = |ok: bool| if ok { "PASS" } else { "FAIL" };
    let r = &suite.report;
    let mut out = String::from("QA report (Women's range)\n");
    let _ = writeln!(out, "Routes:                 {}", pass(suite.routes_ok));
    let _ = writeln!(out, "Product data:           {}", pass(suite.product_data_ok));
    let _ = writeln!(out, "Using placeholders:     {}", r.missing_images.len());
    let _ = writeln!(out, "Missing MOQ:            {}", r.products_without_moq.len());
    let _ = writeln!(out, "Placeholder images:     {}", r.placeholders_in_use);
    let _ = writeln!(out, "Analytics events:       {}", r.events_bound.join(", "));
    for p in suite.data_binding.iter().filter(|p| !p.issues.is_empty()) {
        let _ = writeln!(out, "  {}: {}", p.name, p.issues.join(", "));
    }
    let _ = writeln!(
        out,
        "Overall: {}",
        if suite.all_passed() { "PASS" } else { "NEEDS ATTENTION" }
    );
    Ok(out)
}
