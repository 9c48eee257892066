//! Command-line argument definition and processing.

use std::path::PathBuf;

use clap::Parser;

use fa_catalogue::catalog::Catalog;
use fa_catalogue::settings::Settings;
use fa_catalogue::state::{FabricType, Hardware, WeightBucket};

use crate::args::Result;

/// fa-catalogue - filter, sort and inspect the garment catalogue
#[derive(Parser, Debug)]
#[command(name = "fa-catalogue")]
#[command(version)]
#[command(about = "Filter, sort and inspect the garment catalogue", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Product data file (JSON array); defaults to `data_path` in settings, then the bundled catalogue
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Free-text search over product name and summary
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sub-category to include, e.g. Jackets (repeatable)
    #[arg(short, long)]
    pub category: Vec<String>,

    /// Required fabric: oilskin or waxed (repeatable, all must match)
    #[arg(long)]
    pub fabric: Vec<FabricType>,

    /// Fabric weight range: 9oz, 10-11oz or 12oz+ (repeatable, any may match)
    #[arg(long)]
    pub weight: Vec<WeightBucket>,

    /// Only weather-resistant products
    #[arg(long)]
    pub weather: bool,

    /// Required hardware brand, e.g. YKK (repeatable)
    #[arg(long)]
    pub hardware: Vec<Hardware>,

    /// Sort mode: newest, fabric-weight-high, fabric-weight-low, most-rfq
    #[arg(long)]
    pub sort: Option<String>,

    /// UI state JSON (search, facets, sortMode) to start from; flags are applied on top
    #[arg(long)]
    pub state: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Compare products side by side (slugs)
    #[arg(long, num_args = 1..)]
    pub compare: Vec<String>,

    /// Run the Women's range content checks
    #[arg(long)]
    pub qa: bool,

    /// Validate every record of the product data and report problems
    #[arg(long)]
    pub validate: bool,

    /// Submit an RFQ from a JSON file
    #[arg(long)]
    pub rfq: Option<PathBuf>,

    /// Show the size chart for a product page path, e.g. /products/womens/clara
    #[arg(long)]
    pub size_chart: Option<String>,

    /// Parse an image filename and show the derived URLs
    #[arg(long)]
    pub parse_image: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// JSON output from the flag or the `json_output` setting.
    #[must_use]
    pub const fn wants_json(&self, settings: &Settings) -> bool {
        self.json || settings.json_output
    }

    /// Any mode other than the default product listing was requested.
    #[must_use]
    pub fn has_tool_mode(&self) -> bool {
        self.validate
            || self.qa
            || self.rfq.is_some()
            || self.size_chart.is_some()
            || self.parse_image.is_some()
            || !self.compare.is_empty()
    }
}

/// What: Run every mode requested on the command line.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `settings`: User settings; flags take precedence.
///
/// Output:
/// - Text to print on stdout.
///
/// # Errors
/// - Unreadable data, state or RFQ files, and image names that do not parse.
///
/// Details:
/// - Tool modes run in a fixed order; the product listing runs only when none
///   of them was requested.
pub fn process_args(args: &Args, settings: &Settings) -> Result<String> {
    use crate::args::{query, report, rfq, tools};

    let json = args.wants_json(settings);
    let mut sections: Vec<String> = Vec::new();

    // --validate reads the raw document so skipped records are reported too
    if args.validate {
        sections.push(report::handle_validate(data_path(args, settings).as_deref(), json)?);
    }

    if let Some(name) = &args.parse_image {
        sections.push(tools::handle_parse_image(name, json)?);
    }
    if let Some(path) = &args.size_chart {
        sections.push(tools::handle_size_chart(path, json)?);
    }

    let needs_catalog = args.qa || args.rfq.is_some() || !args.compare.is_empty() || !args.has_tool_mode();
    if needs_catalog {
        let catalog = load_catalog(args, settings)?;
        if args.qa {
            sections.push(report::handle_qa(&catalog, json)?);
        }
        if let Some(path) = &args.rfq {
            sections.push(rfq::handle_rfq(&catalog, path, json)?);
        }
        if !args.compare.is_empty() {
            sections.push(query::handle_compare(&catalog, &args.compare, json)?);
        }
        if !args.has_tool_mode() {
            sections.push(query::handle_query(&catalog, args, settings, json)?);
        }
    }

    Ok(sections.join("\n"))
}

/// Data file from `--data`, else from settings.
fn data_path(args: &Args, settings: &Settings) -> Option<PathBuf> {
    args.data.clone().or_else(|| settings.data_path.clone())
}

/// What: Load the catalogue the CLI works on.
///
/// Inputs:
/// - `args`, `settings`: Sources of the data path.
///
/// Output:
/// - Catalogue from the data file, or the bundled one when no file is configured.
///
/// # Errors
/// - The configured file cannot be read or is not a JSON array.
pub fn load_catalog(args: &Args, settings: &Settings) -> Result<Catalog> {
    let catalog = match data_path(args, settings) {
        Some(path) => Catalog::load(&path)?,
        None => Catalog::bundled()?,
    };
    tracing::debug!(products = catalog.len(), "[Catalog] Ready");
    Ok(catalog)
}
