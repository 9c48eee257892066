//! Garment size charts keyed by gender and product slug.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogError;
use crate::util::{last_segment, slugify};

/// Size chart data compiled into the binary.
const BUNDLED_CHARTS: &str = include_str!("../data/size-charts.json");

/// Printable chart for women's garments.
pub const WOMENS_PDF: &str = "/downloads/size-chart-women.pdf";
/// Printable chart for men's garments.
pub const MENS_PDF: &str = "/downloads/size-chart-men.pdf";

/// Which chart family to read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Men's fits.
    Mens,
    /// Women's fits.
    Womens,
}

impl Gender {
    /// Key used in the chart document.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mens => "mens",
            Self::Womens => "womens",
        }
    }

    /// Downloadable PDF for this family.
    #[must_use]
    pub const fn pdf_href(self) -> &'static str {
        match self {
            Self::Mens => MENS_PDF,
            Self::Womens => WOMENS_PDF,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One size line; measurements are in centimetres and vary per garment.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Size label, e.g. "M".
    pub size: String,
    /// Chest, cm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chest: Option<f64>,
    /// Bust, cm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bust: Option<f64>,
    /// Hip, cm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hip: Option<f64>,
    /// Shoulder width, cm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shoulder: Option<f64>,
    /// Sleeve length, cm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleeve: Option<f64>,
    /// Body length, cm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
}

/// Short handle to chart slug, per gender.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
struct Aliases {
    #[serde(default)]
    mens: BTreeMap<String, String>,
    #[serde(default)]
    womens: BTreeMap<String, String>,
}

/// All size charts.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SizeCharts {
    #[serde(default)]
    mens: BTreeMap<String, Vec<Row>>,
    #[serde(default)]
    womens: BTreeMap<String, Vec<Row>>,
    #[serde(default)]
    aliases: Aliases,
}

/// Result of resolving a chart for a request path.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartLookup<'a> {
    /// Chart family chosen from the path.
    pub gender: Gender,
    /// Rows for the garment; empty when there is no chart.
    pub rows: &'a [Row],
    /// Chart key that matched, after alias resolution.
    pub used_key: Option<&'a str>,
    /// Downloadable PDF for the family.
    pub pdf_href: &'static str,
}

impl SizeCharts {
    /// Parse a chart document.
    ///
    /// # Errors
    /// Returns `CatalogError::Json` when the document does not match the chart layout.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Charts shipped with the binary.
    ///
    /// # Errors
    /// Only if the bundled document is malformed.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json_str(BUNDLED_CHARTS)
    }

    const fn family(&self, gender: Gender) -> (&BTreeMap<String, Vec<Row>>, &BTreeMap<String, String>) {
        match gender {
            Gender::Mens => (&self.mens, &self.aliases.mens),
            Gender::Womens => (&self.womens, &self.aliases.womens),
        }
    }

    /// What: Rows for one garment.
    ///
    /// Inputs:
    /// - `gender`: Chart family.
    /// - `slug`: Product slug or alias, any case.
    ///
    /// Output:
    /// - `(rows, used_key)`; empty rows and `None` when no chart exists.
    #[must_use]
    pub fn rows_for(&self, gender: Gender, slug: &str) -> (&[Row], Option<&str>) {
        let wanted = slug.to_lowercase();
        let (charts, aliases) = self.family(gender);
        let resolved = aliases.get(&wanted).map_or(wanted.as_str(), String::as_str);
        match charts.get_key_value(resolved) {
            Some((key, rows)) => (rows.as_slice(), Some(key.as_str())),
            None => (&[][..], None),
        }
    }

    /// Whether any chart exists for `slug` in either family.
    #[must_use]
    pub fn has_chart(&self, slug: &str) -> bool {
        [Gender::Mens, Gender::Womens]
            .into_iter()
            .any(|g| self.rows_for(g, slug).1.is_some())
    }

    /// What: Resolve the chart shown on a product page.
    ///
    /// Inputs:
    /// - `path`: Request path such as `/products/womens/clara?ref=grid`.
    ///
    /// Output:
    /// - Family from the path, rows for its slugified last segment, and PDF link.
    #[must_use]
    pub fn chart_for_path(&self, path: &str) -> ChartLookup<'_> {
        let gender = gender_from_path(path);
        let handle = slugify(last_segment(path));
        let (rows, used_key) = self.rows_for(gender, &handle);
        tracing::debug!(%gender, handle = %handle, rows = rows.len(), "[SizeChart] Resolved chart for path");
        ChartLookup {
            gender,
            rows,
            used_key,
            pdf_href: gender.pdf_href(),
        }
    }
}

/// Women's chart when the path mentions `/women` (which also covers `/womens`).
#[must_use]
pub fn gender_from_path(path: &str) -> Gender {
    if path.contains("/women") {
        Gender::Womens
    } else {
        Gender::Mens
    }
}
