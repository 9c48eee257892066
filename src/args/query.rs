//! Product listing and comparison from the command line.

use std::fmt::Write as _;
use std::fs;

use fa_catalogue::catalog::Catalog;
use fa_catalogue::logic::{comparison_table, query, select_for_comparison};
use fa_catalogue::settings::Settings;
use fa_catalogue::state::{ProductRecord, SortMode, UiState};
use fa_catalogue::validation::validate_search_term;

use crate::args::utils::format_weight;
use crate::args::{Args, Result};

/// What: Build the UI state a listing runs with.
///
/// Inputs:
/// - `args`: Flags; each one present overrides the corresponding state field.
/// - `settings`: Supplies the default sort when no state file is given.
///
/// Output:
/// - `UiState` ready for the query engine.
///
/// # Errors
/// - The `--state` file cannot be read or is not JSON.
///
/// Details:
/// - Facet flags add to the selections loaded from the state file.
/// - An unknown `--sort` value logs a warning and leaves type order only.
pub fn build_ui_state(args: &Args, settings: &Settings) -> Result<UiState> {
    let mut ui = match &args.state {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|e| format!("failed to read UI state {}: {e}", path.display()))?;
            serde_json::from_str::<UiState>(&raw)
                .map_err(|e| format!("UI state {} is not valid JSON: {e}", path.display()))?
        }
        None => UiState {
            sort_mode: Some(settings.sort_mode),
            ..UiState::default()
        },
    };

    if let Some(search) = &args.search {
        ui.search = validate_search_term(search);
    }
    ui.facets.category.extend(args.category.iter().cloned());
    ui.facets.fabric.extend(args.fabric.iter().copied());
    ui.facets.fabric_weight.extend(args.weight.iter().copied());
    ui.facets.hardware.extend(args.hardware.iter().copied());
    ui.facets.weather_resistant |= args.weather;
    if let Some(key) = &args.sort {
        ui.sort_mode = SortMode::from_config_key(key);
        if ui.sort_mode.is_none() {
            tracing::warn!(sort = %key, "[CLI] Unknown sort option; ordering by product type only");
        }
    }
    Ok(ui)
}

/// What: List the products matching the flags.
///
/// Inputs:
/// - `catalog`: Product store.
/// - `args`, `settings`: Query inputs.
/// - `json`: Emit a JSON array of records instead of a table.
///
/// Output:
/// - Rendered listing.
///
/// # Errors
/// - See [`build_ui_state`]; JSON serialisation failures.
pub fn handle_query(catalog: &Catalog, args: &Args, settings: &Settings, json: bool) -> Result<String> {
    let ui = build_ui_state(args, settings)?;
    let results = query(catalog.records(), &ui);
    tracing::info!(
        search = %ui.search,
        facets = ui.facets.active_count(),
        sort = ui.sort_mode.map_or("type-order", |m| m.as_config_key()),
        results = results.len(),
        "[CLI] Query"
    );
    if json {
        return Ok(serde_json::to_string_pretty(&results)?);
    }
    Ok(render_listing(&results, &ui))
}

/// Plain-text table of query results.
fn render_listing(results: &[&ProductRecord], ui: &UiState) -> String {
    let sort = ui.sort_mode.map_or("type order", |m| m.as_config_key());
    let mut out = format!("{} products (sort: {sort})\n", results.len());
    for r in results {
        let _ = writeln!(
            out,
            "{:<28} {:<12} {:<9} {:>6}  {}",
            r.slug,
            r.category.as_str(),
            r.sub_category_str(),
            format_weight(r.fabric_weight_oz),
            r.name
        );
    }
    out
}

/// What: Compare products side by side.
///
/// Inputs:
/// - `catalog`: Product store.
/// - `slugs`: Requested products.
/// - `json`: Emit rows as JSON.
///
/// Output:
/// - Comparison table, or a notice when none of the slugs exist.
///
/// # Errors
/// - JSON serialisation failures.
pub fn handle_compare(catalog: &Catalog, slugs: &[String], json: bool) -> Result<String> {
    let picked = select_for_comparison(catalog.records(), slugs);
    for missing in slugs.iter().filter(|s| catalog.get(s).is_none()) {
        tracing::warn!(slug = %missing, "[CLI] Unknown product in comparison");
    }
    let rows = comparison_table(&picked);
    if json {
        return Ok(serde_json::to_string_pretty(&rows)?);
    }
    if picked.is_empty() {
        return Ok("No matching products to compare\n".to_string());
    }
    let mut out = format!("{:<14}", "");
    for p in &picked {
        let _ = write!(out, " | {:<28}", p.name);
    }
    out.push('\n');
    for row in rows {
        let _ = write!(out, "{:<14}", row.label);
        for v in &row.values {
            let _ = write!(out, " | {v:<28}");
        }
        out.push('\n');
    }
    Ok(out)
}
