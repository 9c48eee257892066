//! Concrete filter and sort scenarios through the query facade.

use fa_catalogue::logic::query;
use fa_catalogue::state::{
    Category, FabricType, ProductRecord, SortMode, UiState, WeightBucket,
};

fn product(slug: &str, name: &str, oz: Option<f64>, specs: &[&str]) -> ProductRecord {
    let mut r = ProductRecord::new(slug, name, Category::Men);
    r.sub_category = Some("Jackets".to_string());
    r.fabric_weight_oz = oz;
    r.key_specs = specs.iter().map(|s| (*s).to_string()).collect();
    r.summary = format!("{name} built for wet work");
    r
}

fn slugs(v: &[&ProductRecord]) -> Vec<String> {
    v.iter().map(|r| r.slug.clone()).collect()
}

fn ui(sort: Option<SortMode>) -> UiState {
    UiState {
        sort_mode: sort,
        ..UiState::default()
    }
}

#[test]
/// What: Heavy-first and light-first inside one type group
///
/// - Input: A 15oz, B 9oz, C without weight, all jackets
/// - Output: High gives A, B, C; low gives C, B, A
fn scenario_weight_ordering() {
    let records = vec![
        product("a", "A Jacket", Some(15.0), &[]),
        product("b", "B Jacket", Some(9.0), &[]),
        product("c", "C Jacket", None, &[]),
    ];
    assert_eq!(
        slugs(&query(&records, &ui(Some(SortMode::FabricWeightHigh)))),
        vec!["a", "b", "c"]
    );
    assert_eq!(
        slugs(&query(&records, &ui(Some(SortMode::FabricWeightLow)))),
        vec!["c", "b", "a"]
    );
}

#[test]
/// What: Fabric facet requires every selected fabric
///
/// - Input: Oilskin-only, waxed-only and dual-fabric products; both fabrics selected
/// - Output: Only the dual-fabric product
fn scenario_fabric_and_semantics() {
    let records = vec![
        product("oil", "Oil Jacket", None, &["12oz oilskin"]),
        product("wax", "Wax Jacket", None, &["Waxed cotton"]),
        product("both", "Hybrid Jacket", None, &["Oilskin yoke", "waxed body"]),
    ];
    let mut state = ui(Some(SortMode::Newest));
    state.facets.fabric.insert(FabricType::Oilskin);
    state.facets.fabric.insert(FabricType::Waxed);
    assert_eq!(slugs(&query(&records, &state)), vec!["both"]);
}

#[test]
/// What: Products without a fabric weight pass the weight facet
///
/// - Input: 9oz, 12oz and unweighted products; 9oz range selected
/// - Output: 9oz and unweighted products
fn scenario_weight_facet_passes_unweighted() {
    let records = vec![
        product("nine", "Nine Jacket", Some(9.0), &[]),
        product("twelve", "Twelve Jacket", Some(12.0), &[]),
        product("none", "Plain Jacket", None, &[]),
    ];
    let mut state = ui(Some(SortMode::Newest));
    state.facets.fabric_weight.insert(WeightBucket::NineOz);
    assert_eq!(slugs(&query(&records, &state)), vec!["nine", "none"]);
}

#[test]
/// What: Search is case-insensitive and does not over-match
///
/// - Input: "jacket" and "JACKET" against a jacket; "parka" against the same
/// - Output: Match for both spellings; nothing for "parka"
fn scenario_search_case() {
    let records = vec![product("j", "Field Jacket", None, &[])];
    for term in ["jacket", "JACKET", "  Jacket  "] {
        let state = UiState {
            search: term.to_string(),
            ..UiState::default()
        };
        assert_eq!(slugs(&query(&records, &state)), vec!["j"], "{term}");
    }
    let state = UiState {
        search: "parka".to_string(),
        ..UiState::default()
    };
    assert!(query(&records, &state).is_empty());
}

#[test]
/// What: Empty catalogue
///
/// - Input: No records, every sort mode, active facets
/// - Output: Empty results without panicking
fn scenario_empty_input() {
    let mut state = ui(Some(SortMode::FabricWeightHigh));
    state.facets.weather_resistant = true;
    assert!(query(&[], &state).is_empty());
    assert!(query(&[], &ui(None)).is_empty());
}

#[test]
/// What: UI state handed over as JSON degrades gracefully
///
/// - Input: Facet that is not an array, unknown tokens, unknown sort
/// - Output: Bad parts dropped; remaining selections applied
fn scenario_lenient_ui_state_json() {
    let state: UiState = serde_json::from_str(
        r#"{
            "search": "",
            "filters": {
                "category": "Jackets",
                "fabric": ["oilskin", "denim"],
                "fabricWeight": ["12oz+", "20oz"],
                "weatherResistant": true
            },
            "sortBy": "price-low"
        }"#,
    )
    .expect("state parses");
    assert!(state.facets.category.is_empty());
    assert_eq!(state.facets.fabric.len(), 1);
    assert_eq!(state.facets.fabric_weight.len(), 1);
    assert!(state.facets.weather_resistant);
    assert_eq!(state.sort_mode, None);

    let records = vec![
        product("coat", "Oil Coat", Some(15.0), &["Oilskin", "Waterproof"]),
        product("light", "Light Jacket", Some(10.0), &["Oilskin", "Windproof"]),
        product("dry", "Dry Jacket", Some(15.0), &["Oilskin"]),
    ];
    assert_eq!(slugs(&query(&records, &state)), vec!["coat"]);
}

#[test]
/// What: Explicit tags feed the facets alongside key-spec text
///
/// - Input: Product whose key specs never mention the fabric but carries a tag
/// - Output: Matched by the fabric and hardware facets
fn scenario_explicit_tags() {
    let mut tagged = product("t", "Tagged Jacket", None, &["Heritage cut"]);
    tagged.tags = vec!["waxed".to_string(), "YKK".to_string()];
    let records = vec![tagged, product("u", "Untagged Jacket", None, &["Heritage cut"])];
    let mut state = ui(Some(SortMode::Newest));
    state.facets.fabric.insert(FabricType::Waxed);
    state
        .facets
        .hardware
        .insert(fa_catalogue::state::Hardware::Ykk);
    assert_eq!(slugs(&query(&records, &state)), vec!["t"]);
}
