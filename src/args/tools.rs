//! Size chart lookup and image filename parsing from the command line.

use std::fmt::Write as _;

use fa_catalogue::images::{derive_urls, parse_filename};
use fa_catalogue::sizechart::{Row, SizeCharts};

use crate::args::Result;

/// What: Show the size chart for a product page path.
///
/// Inputs:
/// - `path`: Request path, e.g. `/products/womens/clara`.
/// - `json`: Emit the lookup as JSON.
///
/// Output:
/// - Rows and PDF link, or a notice when the garment has no chart.
///
/// # Errors
/// - The bundled chart data is corrupt; JSON serialisation failures.
pub fn handle_size_chart(path: &str, json: bool) -> Result<String> {
    let charts = SizeCharts::bundled()?;
    let lookup = charts.chart_for_path(path);
    if json {
        return Ok(serde_json::to_string_pretty(&lookup)?);
    }
    let mut out = match lookup.used_key {
        Some(key) => format!("Size chart ({}) for {key}\n", lookup.gender),
        None => format!("No {} size chart for {path}\n", lookup.gender),
    };
    for row in lookup.rows {
        let _ = writeln!(out, "  {}", render_row(row));
    }
    let _ = writeln!(out, "PDF: {}", lookup.pdf_href);
    Ok(out)
}

fn render_row(row: &Row) -> String {
    let cells: Vec<String> = [
        ("chest", row.chest),
        ("bust", row.bust),
        ("hip", row.hip),
        ("shoulder", row.shoulder),
        ("sleeve", row.sleeve),
        ("length", row.length),
    ]
    .into_iter()
    .filter_map(|(label, v)| v.map(|cm| format!("{label} {cm}")))
    .collect();
    format!("{:<4} {}", row.size, cells.join(", "))
}

/// What: Parse an image filename and show its derived URLs.
///
/// Inputs:
/// - `name`: Filename such as `swift-waxed-jacket-brown-front-01.png`.
/// - `json`: Emit the processed image as JSON.
///
/// Output:
/// - Parsed fields, URLs and alt text.
///
/// # Errors
/// - The name does not follow `{handle}-{color}-{view}-{NN}.png`.
pub fn handle_parse_image(name: &str, json: bool) -> Result<String> {
    let Some(parsed) = parse_filename(name) else {
        tracing::warn!(file = %name, "[Images] Filename does not follow the naming convention");
        return Err(format!("not a product image filename: {name}").into());
    };
    let processed = derive_urls(&parsed);
    if json {
        return Ok(serde_json::to_string_pretty(&processed)?);
    }
    let mut out = format!(
        "handle: {}\ncolor: {}\nview: {}\nindex: {:02}\nprimary: {}\nalt: {}\noriginal: {}\n",
        parsed.handle,
        parsed.color,
        parsed.view,
        parsed.index,
        processed.is_primary,
        processed.alt_text,
        processed.original_url
    );
    for (width, url) in &processed.renditions {
        let _ = writeln!(out, "{width}w: {url}");
    }
    Ok(out)
}
