//! Queries against the catalogue shipped with the binary.

use fa_catalogue::catalog::Catalog;
use fa_catalogue::logic::{CachedQuery, query};
use fa_catalogue::rfq::{RfqBasket, RfqSubmission, submit};
use fa_catalogue::state::{Hardware, ProductRecord, SortMode, UiState, WeightBucket};

fn catalog() -> Catalog {
    Catalog::bundled().expect("bundled catalogue")
}

fn slugs(v: &[&ProductRecord]) -> Vec<String> {
    v.iter().map(|r| r.slug.clone()).collect()
}

#[test]
/// What: Default grid: outerwear, then vests, then the rest, catalogue order within
///
/// - Input: Bundled catalogue, default UI state
/// - Output: Every product, grouped by type
fn bundled_default_grid() {
    let c = catalog();
    let out = query(c.records(), &UiState::default());
    assert_eq!(
        slugs(&out),
        vec![
            "swift-waxed-jacket",
            "outrider-long-coat",
            "bushman-waxed-jacket",
            "clara-waxed-jacket",
            "isla-quilted-jacket",
            "evie-long-coat",
            "oilskin-dog-coat-black-acc",
            "drover-oilskin-vest",
            "ranger-quilted-vest",
            "ivy-gilet",
            "highland-shirt",
            "oilskin-hat-with-flaps-acc",
            "oilskin-gaiters-acc",
            "murray-hat-acc",
        ]
    );
}

#[test]
/// What: Weather and YKK facets together
///
/// - Input: Weather-resistant plus YKK
/// - Output: Only products whose specs mention both
fn bundled_weather_and_ykk() {
    let c = catalog();
    let mut ui = UiState::default();
    ui.facets.weather_resistant = true;
    ui.facets.hardware.insert(Hardware::Ykk);
    assert_eq!(
        slugs(&query(c.records(), &ui)),
        vec!["swift-waxed-jacket", "clara-waxed-jacket"]
    );
}

#[test]
/// What: Heavy fabrics, heaviest first
///
/// - Input: 12oz+ range, fabric-weight-high
/// - Output: Heavy and unweighted products, ranked by type then weight
fn bundled_heavy_weights_high_first() {
    let c = catalog();
    let mut ui = UiState {
        sort_mode: Some(SortMode::FabricWeightHigh),
        ..UiState::default()
    };
    ui.facets.fabric_weight.insert(WeightBucket::TwelvePlusOz);
    assert_eq!(
        slugs(&query(c.records(), &ui)),
        vec![
            "outrider-long-coat",
            "bushman-waxed-jacket",
            "oilskin-dog-coat-black-acc",
            "drover-oilskin-vest",
            "oilskin-gaiters-acc",
            "highland-shirt",
            "oilskin-hat-with-flaps-acc",
            "murray-hat-acc",
        ]
    );
}

#[test]
/// What: Cached answers match direct queries across many states
///
/// - Input: Several UI states queried twice through a small cache
/// - Output: Same slugs as the uncached facade every time
fn bundled_cache_matches_direct() {
    let c = catalog();
    let engine = CachedQuery::new(c.records(), 2);
    let mut states = vec![UiState::default()];
    for sort in [SortMode::FabricWeightLow, SortMode::MostRfq] {
        states.push(UiState {
            sort_mode: Some(sort),
            search: "waxed".to_string(),
            ..UiState::default()
        });
    }
    for ui in states.iter().chain(states.iter()) {
        assert_eq!(slugs(&engine.query(ui)), slugs(&query(c.records(), ui)));
    }
    assert!(engine.cached_states() <= 2);
}

#[test]
/// What: Basket built from grid picks submits as an RFQ
///
/// - Input: Two products added to the basket; contact details filled in
/// - Output: Accepted submission with an RFQ id
fn bundled_basket_to_submission() {
    let c = catalog();
    let mut basket = RfqBasket::default();
    assert!(basket.add("swift-waxed-jacket"));
    assert!(basket.add("evie-long-coat"));
    assert!(!basket.add("swift-waxed-jacket"));
    assert_eq!(basket.available_products(&c).len(), c.len() - 2);

    let submission = RfqSubmission {
        company_name: "Acme Outdoor".to_string(),
        contact_name: "Sam Lee".to_string(),
        email: "sam@acme.test".to_string(),
        country: "UK".to_string(),
        items: basket.into_items(),
        ..RfqSubmission::default()
    };
    let ack = submit(&submission);
    assert!(ack.success, "{}", ack.message);
    assert!(ack.rfq_id.is_some_and(|id| id.starts_with("RFQ-")));
}
