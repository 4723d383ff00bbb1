//! Property tests for arrival estimation.

use chrono::{Datelike, Days, NaiveDate};
use pepeng_estimate::{ArrivalEstimator, FALLBACK_TRANSIT_DAYS, TransitBasis, TransitTable};
use pepeng_types::Courier;
use proptest::prelude::*;

/// Dates between 1900-01-01 and 2199-12-31.
fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    let start = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap().num_days_from_ce();
    let end = NaiveDate::from_ymd_opt(2199, 12, 31).unwrap().num_days_from_ce();
    (start..=end).prop_map(|days| NaiveDate::from_num_days_from_ce_opt(days).unwrap())
}

fn courier_strategy() -> impl Strategy<Value = Courier> {
    prop::sample::select(Courier::all().to_vec())
}

/// Exact codes the transit table knows.
const TABLE_CODES: [&str; 3] = ["JNE", "TIKI", "POS"];

/// Codes outside the table, including near misses of real codes.
fn unknown_code_strategy() -> impl Strategy<Value = String> {
    let near_miss = (
        prop::sample::select(TABLE_CODES.to_vec()),
        any::<bool>(),
        "[ ]{0,2}",
        "[ ]{0,2}",
    )
        .prop_map(|(code, lower, pad_left, pad_right)| {
            let code = if lower { code.to_lowercase() } else { code.to_string() };
            format!("{pad_left}{code}{pad_right}")
        });
    let label = Just("POS Indonesia".to_string());
    let free = prop::string::string_regex("[ A-Za-z]{0,10}").unwrap();

    prop_oneof![near_miss, label, free]
        .prop_filter("must not be an exact table code", |code| {
            !TABLE_CODES.contains(&code.as_str())
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Known couriers add exactly their table days.
    #[test]
    fn prop_known_courier_adds_table_days(courier in courier_strategy(), shipped in date_strategy()) {
        let estimate = ArrivalEstimator::new().estimate(courier, shipped).unwrap();
        let expected = shipped + Days::new(u64::from(TransitTable::global().days(courier)));

        prop_assert_eq!(estimate.arrival, expected);
        prop_assert_eq!(estimate.basis, TransitBasis::Table);
    }

    /// The code path agrees with the typed path for every known courier.
    #[test]
    fn prop_code_path_matches_typed_path(courier in courier_strategy(), shipped in date_strategy()) {
        let estimator = ArrivalEstimator::new();
        let typed = estimator.estimate(courier, shipped).unwrap();
        let by_code = estimator.estimate_code(courier.as_str(), shipped).unwrap();

        prop_assert_eq!(typed, by_code);
    }

    /// Codes that are not an exact table code always land three days later.
    #[test]
    fn prop_unknown_code_adds_fallback_days(code in unknown_code_strategy(), shipped in date_strategy()) {
        let estimate = ArrivalEstimator::new().estimate_code(&code, shipped).unwrap();

        prop_assert_eq!(estimate.arrival, shipped + Days::new(3));
        prop_assert_eq!(estimate.transit_days, FALLBACK_TRANSIT_DAYS);
        prop_assert!(estimate.basis.is_fallback());
    }

    /// Arrival is never before the ship date and never more than five days out.
    #[test]
    fn prop_arrival_window(code in "[A-Za-z]{0,6}", shipped in date_strategy()) {
        let estimate = ArrivalEstimator::new().estimate_code(&code, shipped).unwrap();
        let gap = (estimate.arrival - shipped).num_days();

        prop_assert!((2..=5).contains(&gap), "gap {} out of window", gap);
    }
}
