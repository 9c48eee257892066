//! Property tests for the filter and sort stages.

use fa_catalogue::logic::{filter_records, sort_records, type_priority};
use fa_catalogue::state::{
    Category, FabricType, Facets, Hardware, ProductRecord, SortMode, WeightBucket,
};
use proptest::prelude::*;

const NAMES: [&str; 7] = [
    "Field Jacket",
    "Long Coat",
    "Drover Vest",
    "Flannel Shirt",
    "Wool Hat",
    "Oilskin Gaiters",
    "",
];
const SUBS: [&str; 4] = ["Jackets", "Vests", "Hats", "Coats"];
const SPECS: [&str; 6] = [
    "12oz oilskin",
    "Waxed cotton",
    "Water resistant",
    "YKK zip",
    "Windproof",
    "Wool felt",
];
const SEARCHES: [&str; 6] = ["", "jacket", "COAT", "oilskin", "  vest ", "zzz"];

fn record() -> impl Strategy<Value = ProductRecord> {
    (
        prop::sample::select(NAMES.to_vec()),
        prop::option::of(prop::sample::select(SUBS.to_vec())),
        prop::option::of(5u8..20),
        prop::sample::subsequence(SPECS.to_vec(), 0..=SPECS.len()),
        prop::sample::select(Category::ALL.to_vec()),
    )
        .prop_map(|(name, sub, oz, specs, category)| {
            let mut r = ProductRecord::new("", name, category);
            r.sub_category = sub.map(str::to_string);
            r.fabric_weight_oz = oz.map(f64::from);
            r.key_specs = specs.into_iter().map(str::to_string).collect();
            r.summary = format!("{name} for the field");
            r
        })
}

fn records() -> impl Strategy<Value = Vec<ProductRecord>> {
    prop::collection::vec(record(), 0..14).prop_map(|mut v| {
        for (i, r) in v.iter_mut().enumerate() {
            r.slug = format!("p{i}");
        }
        v
    })
}

fn facets() -> impl Strategy<Value = Facets> {
    (
        prop::sample::subsequence(SUBS.to_vec(), 0..=2),
        prop::sample::subsequence(vec![FabricType::Oilskin, FabricType::Waxed], 0..=2),
        prop::sample::subsequence(
            vec![
                WeightBucket::NineOz,
                WeightBucket::TenToElevenOz,
                WeightBucket::TwelvePlusOz,
            ],
            0..=3,
        ),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(category, fabric, weight, weather, ykk)| {
            let mut f = Facets {
                category: category.into_iter().map(str::to_string).collect(),
                fabric: fabric.into_iter().collect(),
                fabric_weight: weight.into_iter().collect(),
                weather_resistant: weather,
                ..Facets::default()
            };
            if ykk {
                f.hardware.insert(Hardware::Ykk);
            }
            f
        })
}

fn sort_mode() -> impl Strategy<Value = Option<SortMode>> {
    prop::option::of(prop::sample::select(vec![
        SortMode::Newest,
        SortMode::FabricWeightHigh,
        SortMode::FabricWeightLow,
        SortMode::MostRfq,
    ]))
}

fn slugs(v: &[&ProductRecord]) -> Vec<String> {
    v.iter().map(|r| r.slug.clone()).collect()
}

fn weight(r: &ProductRecord) -> f64 {
    r.fabric_weight_oz.unwrap_or(0.0)
}

proptest! {
    #[test]
    /// What: Sorting returns a permutation of its input
    ///
    /// - Input: Random records and sort mode
    /// - Output: Same slugs, same count
    fn sort_is_a_permutation(recs in records(), mode in sort_mode()) {
        let input: Vec<&ProductRecord> = recs.iter().collect();
        let out = sort_records(&input, mode);
        let mut a = slugs(&input);
        let mut b = slugs(&out);
        a.sort();
        b.sort();
        prop_assert_eq!(a, b);
    }

    #[test]
    /// What: Filtering returns an order-preserving subset
    ///
    /// - Input: Random records, search text and facets
    /// - Output: Every result is an input record, in input order
    fn filter_is_an_ordered_subset(
        recs in records(),
        search in prop::sample::select(SEARCHES.to_vec()),
        f in facets(),
    ) {
        let out = filter_records(&recs, search, &f);
        prop_assert!(out.len() <= recs.len());
        let mut cursor = recs.iter();
        for r in &out {
            prop_assert!(cursor.any(|c| std::ptr::eq(c, *r)));
        }
    }

    #[test]
    /// What: Filter and sort are idempotent
    ///
    /// - Input: Random records, search, facets and mode
    /// - Output: Applying either stage twice changes nothing
    fn filter_and_sort_are_idempotent(
        recs in records(),
        search in prop::sample::select(SEARCHES.to_vec()),
        f in facets(),
        mode in sort_mode(),
    ) {
        let once = filter_records(&recs, search, &f);
        let owned: Vec<ProductRecord> = once.iter().map(|r| (*r).clone()).collect();
        let twice = filter_records(&owned, search, &f);
        prop_assert_eq!(slugs(&once), slugs(&twice));

        let sorted = sort_records(&once, mode);
        let resorted = sort_records(&sorted, mode);
        prop_assert_eq!(slugs(&sorted), slugs(&resorted));
    }

    #[test]
    /// What: Type rank is non-decreasing and weight is ordered inside each rank
    ///
    /// - Input: Random records and mode
    /// - Output: Grouped by rank; weight monotone for the weight modes
    fn sort_groups_by_type_then_weight(recs in records(), mode in sort_mode()) {
        let input: Vec<&ProductRecord> = recs.iter().collect();
        let out = sort_records(&input, mode);
        for pair in out.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(type_priority(a) <= type_priority(b));
            if type_priority(a) == type_priority(b) {
                match mode {
                    Some(SortMode::FabricWeightHigh) => prop_assert!(weight(a) >= weight(b)),
                    Some(SortMode::FabricWeightLow) => prop_assert!(weight(a) <= weight(b)),
                    _ => {}
                }
            }
        }
    }

    #[test]
    /// What: Modes without a secondary key keep input order inside each rank
    ///
    /// - Input: Random records; newest, most-rfq and unknown modes
    /// - Output: All three orders equal and stable within a rank
    fn sort_without_secondary_key_is_stable(recs in records()) {
        let input: Vec<&ProductRecord> = recs.iter().collect();
        let newest = slugs(&sort_records(&input, Some(SortMode::Newest)));
        prop_assert_eq!(&newest, &slugs(&sort_records(&input, Some(SortMode::MostRfq))));
        prop_assert_eq!(&newest, &slugs(&sort_records(&input, None)));

        let mut expected: Vec<&ProductRecord> = input.clone();
        expected.sort_by_key(|r| type_priority(r));
        prop_assert_eq!(newest, slugs(&expected));
    }
}
