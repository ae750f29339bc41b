//! Property-based tests for the growth computation.
//!
//! These tests verify the relationships between the derived simulation
//! figures using `proptest` for random series generation.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use stocksim_core::simulator::compute_growth;
use stocksim_market_data::PricePoint;

// =============================================================================
// Generators
// =============================================================================

/// Generates a positive price with four decimal places.
fn arb_price() -> impl Strategy<Value = Decimal> {
    (1i64..=5_000_000).prop_map(|cents| Decimal::new(cents, 4))
}

/// Generates a positive investment amount with two decimal places.
fn arb_start_value() -> impl Strategy<Value = Decimal> {
    (1i64..=100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Generates a non-empty chronologically ordered series.
fn arb_series(max_len: usize) -> impl Strategy<Value = Vec<PricePoint>> {
    proptest::collection::vec(arb_price(), 1..=max_len).prop_map(|closes| {
        let base = Utc.with_ymd_and_hms(2020, 1, 2, 14, 30, 0).unwrap();
        closes
            .into_iter()
            .enumerate()
            .map(|(i, close)| {
                PricePoint::new(base + Duration::days(i as i64), close, close, close, close, 0)
            })
            .collect()
    })
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn derived_figures_are_consistent(
        start_value in arb_start_value(),
        series in arb_series(30),
    ) {
        let metrics = compute_growth(start_value, &series).unwrap();

        let first = series.first().unwrap().close;
        let last = series.last().unwrap().close;
        prop_assert_eq!(metrics.growth_rate, (last - first) / first);
        prop_assert_eq!(metrics.value_change, metrics.end_value - start_value);
        prop_assert_eq!(metrics.end_value, start_value * (Decimal::ONE + metrics.growth_rate));
    }

    #[test]
    fn only_endpoints_matter(
        start_value in arb_start_value(),
        series in arb_series(30),
        middle in proptest::collection::vec(arb_price(), 0..10),
    ) {
        let mut padded = vec![series.first().unwrap().clone()];
        let stamp = padded[0].timestamp;
        padded.extend(middle.into_iter().enumerate().map(|(i, close)| {
            PricePoint::new(stamp + Duration::hours(i as i64 + 1), close, close, close, close, 0)
        }));
        let mut tail = series.last().unwrap().clone();
        tail.timestamp = stamp + Duration::days(365);
        padded.push(tail);

        let two_point = vec![padded[0].clone(), padded.last().unwrap().clone()];
        prop_assert_eq!(
            compute_growth(start_value, &padded),
            compute_growth(start_value, &two_point)
        );
    }

    #[test]
    fn computation_is_deterministic(
        start_value in arb_start_value(),
        series in arb_series(30),
    ) {
        prop_assert_eq!(
            compute_growth(start_value, &series),
            compute_growth(start_value, &series)
        );
    }
}
