//! Core value types used by the catalogue: product records, facets and sort modes.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::state::lenient;
use crate::util::any_contains_ci;

/// Top-level catalogue section a product is listed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Men's outerwear.
    Men,
    /// Women's outerwear.
    Women,
    /// Bags, hats and other accessories.
    Accessories,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Self; 3] = [Self::Men, Self::Women, Self::Accessories];

    /// Display label, identical to the JSON spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Men => "Men",
            Self::Women => "Women",
            Self::Accessories => "Accessories",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "men" | "mens" => Ok(Self::Men),
            "women" | "womens" => Ok(Self::Women),
            "accessories" => Ok(Self::Accessories),
            other => Err(format!("unknown category: {other}")),
        }
    }
}

/// Fabric and feature flags derived for a record.
///
/// Filled from explicit [`ProductRecord::tags`] when present, otherwise (and
/// additionally) inferred from key-spec prose.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpecTags {
    /// Oilskin cloth.
    pub oilskin: bool,
    /// Waxed cotton.
    pub waxed: bool,
    /// Water or wind resistant.
    pub weather_resistant: bool,
    /// YKK zips or hardware.
    pub ykk: bool,
}

/// A single catalogue entry. Loaded once, never mutated.
///
/// JSON field names follow the bundled product data (`subCategory`,
/// `fabric_oz`, `keySpecs`). Optional and list fields default to empty so a
/// sparse record still loads; fields holding the wrong JSON type are read as
/// absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Unique, stable identifier.
    #[serde(default, deserialize_with = "lenient::string")]
    pub slug: String,
    /// Display name.
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    /// Catalogue section.
    pub category: Category,
    /// Free-text sub-category such as "Jackets" or "Vests".
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub sub_category: Option<String>,
    /// Fabric weight in ounces.
    #[serde(
        rename = "fabric_oz",
        alias = "fabricWeightOz",
        default,
        deserialize_with = "lenient::opt_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub fabric_weight_oz: Option<f64>,
    /// Free-text specification bullets.
    #[serde(default, deserialize_with = "lenient::strings")]
    pub key_specs: Vec<String>,
    /// Short marketing summary.
    #[serde(default, deserialize_with = "lenient::string")]
    pub summary: String,
    /// Image URIs; the first is the primary image.
    #[serde(default, deserialize_with = "lenient::strings")]
    pub images: Vec<String>,
    /// Minimum order quantity, free text (e.g. "300 pcs / style").
    #[serde(default, deserialize_with = "lenient::string")]
    pub moq: String,
    /// Feature bullets shown on the detail page.
    #[serde(default, deserialize_with = "lenient::strings")]
    pub features: Vec<String>,
    /// Colour variant names.
    #[serde(default, deserialize_with = "lenient::strings")]
    pub variants: Vec<String>,
    /// Size labels, smallest first.
    #[serde(default, deserialize_with = "lenient::strings")]
    pub sizes: Vec<String>,
    /// Lining description.
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub lining: Option<String>,
    /// Structured tags (`oilskin`, `waxed`, `weather-resistant`, `ykk`).
    #[serde(
        default,
        deserialize_with = "lenient::strings",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tags: Vec<String>,
}

impl ProductRecord {
    /// What: Build a minimal record for fixtures and programmatic catalogues.
    ///
    /// Inputs:
    /// - `slug`, `name`: Identity fields.
    /// - `category`: Catalogue section.
    ///
    /// Output:
    /// - Record with every optional field empty.
    #[must_use]
    pub fn new(slug: impl Into<String>, name: impl Into<String>, category: Category) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            category,
            sub_category: None,
            fabric_weight_oz: None,
            key_specs: Vec::new(),
            summary: String::new(),
            images: Vec::new(),
            moq: String::new(),
            features: Vec::new(),
            variants: Vec::new(),
            sizes: Vec::new(),
            lining: None,
            tags: Vec::new(),
        }
    }

    /// Whether the identity fields a listing needs are present.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !self.slug.is_empty() && !self.name.is_empty()
    }

    /// Sub-category or the empty string.
    #[must_use]
    pub fn sub_category_str(&self) -> &str {
        self.sub_category.as_deref().unwrap_or("")
    }

    /// Case-insensitive mention of `token_lower` in any key spec.
    #[must_use]
    pub fn key_specs_mention(&self, token_lower: &str) -> bool {
        any_contains_ci(&self.key_specs, token_lower)
    }

    /// What: Derive fabric/feature flags for faceting.
    ///
    /// Inputs: none
    ///
    /// Output:
    /// - [`SpecTags`] where each flag is set by an explicit tag or by a key-spec mention.
    ///
    /// Details:
    /// - Key-spec inference: "oilskin", "waxed", "water"/"wind", "ykk".
    #[must_use]
    pub fn spec_tags(&self) -> SpecTags {
        let explicit = |names: &[&str]| {
            self.tags.iter().any(|t| {
                let t = t.trim().to_lowercase().replace('_', "-");
                names.contains(&t.as_str())
            })
        };
        SpecTags {
            oilskin: explicit(&["oilskin"]) || self.key_specs_mention("oilskin"),
            waxed: explicit(&["waxed"]) || self.key_specs_mention("waxed"),
            weather_resistant: explicit(&["weather-resistant", "waterproof", "windproof"])
                || self.key_specs_mention("water")
                || self.key_specs_mention("wind"),
            ykk: explicit(&["ykk"]) || self.key_specs_mention("ykk"),
        }
    }
}

/// Facet values exchanged with the filter panel by fixed token.
pub trait FacetToken: Sized + Copy + 'static {
    /// Every value, in panel order.
    const ALL: &'static [Self];

    /// Exact token used in UI state and the facet panel.
    fn token(self) -> &'static str;

    /// Value whose token equals `s` exactly; other spellings are not facets.
    #[must_use]
    fn from_token(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.token() == s)
    }

    /// Value whose token matches `s` ignoring case and surrounding spaces.
    #[must_use]
    fn from_token_ci(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.token().eq_ignore_ascii_case(s))
    }
}

/// Fabric types selectable in the fabric facet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FabricType {
    /// Oilskin cloth.
    Oilskin,
    /// Waxed cotton.
    Waxed,
}

impl FacetToken for FabricType {
    const ALL: &'static [Self] = &[Self::Oilskin, Self::Waxed];

    fn token(self) -> &'static str {
        match self {
            Self::Oilskin => "oilskin",
            Self::Waxed => "waxed",
        }
    }
}

impl FabricType {
    /// Whether the derived tags carry this fabric.
    #[must_use]
    pub const fn is_set(self, tags: SpecTags) -> bool {
        match self {
            Self::Oilskin => tags.oilskin,
            Self::Waxed => tags.waxed,
        }
    }
}

impl FromStr for FabricType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token_ci(s).ok_or_else(|| format!("unknown fabric type: {}", s.trim()))
    }
}

/// Fabric weight ranges offered by the weight facet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum WeightBucket {
    /// Exactly 9 oz.
    #[serde(rename = "9oz")]
    NineOz,
    /// 10 to 11 oz inclusive.
    #[serde(rename = "10-11oz")]
    TenToElevenOz,
    /// 12 oz and heavier.
    #[serde(rename = "12oz+")]
    TwelvePlusOz,
}

impl FacetToken for WeightBucket {
    const ALL: &'static [Self] = &[Self::NineOz, Self::TenToElevenOz, Self::TwelvePlusOz];

    fn token(self) -> &'static str {
        match self {
            Self::NineOz => "9oz",
            Self::TenToElevenOz => "10-11oz",
            Self::TwelvePlusOz => "12oz+",
        }
    }
}

impl WeightBucket {
    /// Whether `oz` falls in this bucket.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn contains(self, oz: f64) -> bool {
        match self {
            Self::NineOz => oz == 9.0,
            Self::TenToElevenOz => (10.0..=11.0).contains(&oz),
            Self::TwelvePlusOz => oz >= 12.0,
        }
    }
}

impl FromStr for WeightBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token_ci(s).ok_or_else(|| format!("unknown fabric weight range: {}", s.trim()))
    }
}

/// Hardware brands selectable in the hardware facet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Hardware {
    /// YKK zips and snaps.
    #[serde(rename = "YKK")]
    Ykk,
}

impl FacetToken for Hardware {
    const ALL: &'static [Self] = &[Self::Ykk];

    fn token(self) -> &'static str {
        match self {
            Self::Ykk => "YKK",
        }
    }
}

impl FromStr for Hardware {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token_ci(s).ok_or_else(|| format!("unknown hardware: {}", s.trim()))
    }
}

/// Facet selections from the filter panel.
///
/// Deserialisation is forgiving: a field that is not an array is treated as
/// unset, and unknown tokens inside an array are dropped, each with a warning.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Facets {
    /// Exact sub-category names.
    #[serde(deserialize_with = "lenient::string_set")]
    pub category: BTreeSet<String>,
    /// Required fabric types (all must match).
    #[serde(deserialize_with = "lenient::set")]
    pub fabric: BTreeSet<FabricType>,
    /// Accepted weight ranges (any may match).
    #[serde(deserialize_with = "lenient::set")]
    pub fabric_weight: BTreeSet<WeightBucket>,
    /// Only weather-resistant products.
    #[serde(deserialize_with = "lenient::truthy")]
    pub weather_resistant: bool,
    /// Required hardware brands.
    #[serde(deserialize_with = "lenient::set")]
    pub hardware: BTreeSet<Hardware>,
}

impl Facets {
    /// True when no facet would exclude anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.category.is_empty()
            && self.fabric.is_empty()
            && self.fabric_weight.is_empty()
            && !self.weather_resistant
            && self.hardware.is_empty()
    }

    /// Number of active selections, as shown on the filter badge.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.category.len()
            + self.fabric.len()
            + self.fabric_weight.len()
            + usize::from(self.weather_resistant)
            + self.hardware.len()
    }
}

/// Sorting mode for the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Default: keep catalogue order inside each type group.
    Newest,
    /// Heaviest fabric first inside each type group.
    FabricWeightHigh,
    /// Lightest fabric first inside each type group.
    FabricWeightLow,
    /// Most requested; no request counts exist yet, so type order only.
    MostRfq,
}

impl SortMode {
    /// Return the string key used in settings files and URLs for this sort mode.
    ///
    /// Inputs: none
    ///
    /// Output: Static config key string.
    #[must_use]
    pub const fn as_config_key(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::FabricWeightHigh => "fabric-weight-high",
            Self::FabricWeightLow => "fabric-weight-low",
            Self::MostRfq => "most-rfq",
        }
    }

    /// Parse a sort mode from its key; snake case and any letter case are accepted.
    ///
    /// Inputs: `s` config string.
    ///
    /// Output: `Some(SortMode)` on recognized value; `None` otherwise.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "newest" => Some(Self::Newest),
            "fabric-weight-high" => Some(Self::FabricWeightHigh),
            "fabric-weight-low" => Some(Self::FabricWeightLow),
            "most-rfq" => Some(Self::MostRfq),
            _ => None,
        }
    }
}

/// Everything the product grid needs to decide what to show.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UiState {
    /// Free-text search box contents.
    #[serde(deserialize_with = "lenient::string")]
    pub search: String,
    /// Facet selections.
    #[serde(alias = "filters")]
    pub facets: Facets,
    /// Chosen sort; `None` when the requested mode was not recognised.
    #[serde(alias = "sortBy", deserialize_with = "lenient::sort_mode")]
    pub sort_mode: Option<SortMode>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            search: String::new(),
            facets: Facets::default(),
            sort_mode: Some(SortMode::Newest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: SortMode config key mapping and alias handling
    ///
    /// - Input: Known keys in kebab/snake/upper case; unknown key
    /// - Output: Correct mapping to enum variants; None for unknown
    fn state_sortmode_config_keys() {
        for mode in [
            SortMode::Newest,
            SortMode::FabricWeightHigh,
            SortMode::FabricWeightLow,
            SortMode::MostRfq,
        ] {
            assert_eq!(SortMode::from_config_key(mode.as_config_key()), Some(mode));
        }
        assert_eq!(
            SortMode::from_config_key("FABRIC_WEIGHT_LOW"),
            Some(SortMode::FabricWeightLow)
        );
        assert_eq!(SortMode::from_config_key(" most-rfq "), Some(SortMode::MostRfq));
        assert_eq!(SortMode::from_config_key("price"), None);
    }

    #[test]
    /// What: Weight bucket boundaries
    ///
    /// - Input: Weights around each bucket edge
    /// - Output: 9oz is exact, 10-11oz inclusive, 12oz+ open-ended
    fn state_weight_bucket_bounds() {
        assert!(WeightBucket::NineOz.contains(9.0));
        assert!(!WeightBucket::NineOz.contains(9.5));
        assert!(WeightBucket::TenToElevenOz.contains(10.0));
        assert!(WeightBucket::TenToElevenOz.contains(11.0));
        assert!(!WeightBucket::TenToElevenOz.contains(11.5));
        assert!(!WeightBucket::TwelvePlusOz.contains(11.99));
        assert!(WeightBucket::TwelvePlusOz.contains(16.0));
    }

    #[test]
    /// What: Spec tag inference from prose and explicit tags
    ///
    /// - Input: Record with mixed-case key specs, then one with only explicit tags
    /// - Output: Flags set by either source
    fn state_spec_tags_inference() {
        let mut r = ProductRecord::new("swift", "Swift Jacket", Category::Men);
        r.key_specs = vec![
            "100% Waxed Cotton".into(),
            "Windproof storm flap".into(),
            "Heavy-duty YKK zips".into(),
        ];
        let tags = r.spec_tags();
        assert!(tags.waxed && tags.weather_resistant && tags.ykk);
        assert!(!tags.oilskin);

        let mut t = ProductRecord::new("tagged", "Tagged Vest", Category::Men);
        t.tags = vec!["Oilskin".into(), "weather_resistant".into()];
        let tags = t.spec_tags();
        assert!(tags.oilskin && tags.weather_resistant);
        assert!(!tags.waxed && !tags.ykk);
    }

    #[test]
    /// What: Record deserialisation tolerates wrong-typed fields
    ///
    /// - Input: JSON record with string `fabric_oz`, non-string key spec entries, missing lists
    /// - Output: Weight read as absent, only string specs kept, lists empty
    fn state_record_lenient_fields() {
        let json = serde_json::json!({
            "slug": "outrider-long-coat",
            "name": "Outrider Long Coat",
            "category": "Men",
            "subCategory": "Coats",
            "fabric_oz": "heavy",
            "keySpecs": ["Oilskin shell", 42, null, "YKK two-way zip"],
            "summary": "Full-length riding coat",
        });
        let r: ProductRecord = serde_json::from_value(json).expect("record parses");
        assert_eq!(r.fabric_weight_oz, None);
        assert_eq!(r.key_specs, vec!["Oilskin shell", "YKK two-way zip"]);
        assert!(r.images.is_empty());
        assert_eq!(r.sub_category_str(), "Coats");
        assert!(r.is_well_formed());
    }

    #[test]
    /// What: Facet and UI state deserialisation fail-open behaviour
    ///
    /// - Input: Non-array facet, unknown tokens, unknown sort mode
    /// - Output: Bad facets treated as unset; unknown sort becomes None
    fn state_facets_lenient() {
        let json = serde_json::json!({
            "search": "jacket",
            "filters": {
                "category": "Jackets",
                "fabric": ["oilskin", "linen"],
                "fabricWeight": ["12oz+"],
                "weatherResistant": 1,
                "hardware": ["YKK"],
            },
            "sortBy": "price-asc",
        });
        let ui: UiState = serde_json::from_value(json).expect("ui state parses");
        assert!(ui.facets.category.is_empty());
        assert_eq!(
            ui.facets.fabric.iter().copied().collect::<Vec<_>>(),
            vec![FabricType::Oilskin]
        );
        assert!(ui.facets.fabric_weight.contains(&WeightBucket::TwelvePlusOz));
        assert!(ui.facets.weather_resistant);
        assert!(ui.facets.hardware.contains(&Hardware::Ykk));
        assert_eq!(ui.sort_mode, None);
        assert_eq!(ui.facets.active_count(), 4);

        let empty: UiState = serde_json::from_str("{}").expect("empty object parses");
        assert_eq!(empty, UiState::default());
        assert!(empty.facets.is_empty());
    }

    #[test]
    /// What: UI state facets match tokens exactly; CLI spellings stay forgiving
    ///
    /// - Input: Facet arrays with other casings, then the same words through `FromStr`
    /// - Output: Miscased tokens dropped from UI state; CLI parsing accepts them
    fn state_facet_tokens_exact() {
        let json = serde_json::json!({
            "filters": {
                "category": ["Jackets"],
                "fabric": ["OILSKIN", "waxed"],
                "fabricWeight": ["12OZ+", "9oz"],
                "hardware": ["ykk"],
            },
        });
        let ui: UiState = serde_json::from_value(json).expect("ui state parses");
        assert!(ui.facets.category.contains("Jackets"));
        assert_eq!(
            ui.facets.fabric.iter().copied().collect::<Vec<_>>(),
            vec![FabricType::Waxed]
        );
        assert_eq!(
            ui.facets.fabric_weight.iter().copied().collect::<Vec<_>>(),
            vec![WeightBucket::NineOz]
        );
        assert!(ui.facets.hardware.is_empty());

        assert_eq!("OILSKIN".parse::<FabricType>(), Ok(FabricType::Oilskin));
        assert_eq!(" 12OZ+ ".parse::<WeightBucket>(), Ok(WeightBucket::TwelvePlusOz));
        assert_eq!("ykk".parse::<Hardware>(), Ok(Hardware::Ykk));
        assert!("denim".parse::<FabricType>().is_err());
        for bucket in WeightBucket::ALL {
            assert_eq!(WeightBucket::from_token(bucket.token()), Some(*bucket));
        }
    }
}
