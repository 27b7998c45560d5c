//! Property-based tests for interval merging using proptest.
//!
//! These verify invariants that must hold for *any* raw interval list, not
//! just the handpicked examples in `interval_tests.rs`.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use slot_engine::busy::ParticipantBusySet;
use slot_engine::interval::{merge, Interval};

// ---------------------------------------------------------------------------
// Strategies — raw interval lists over a one-week minute grid
// ---------------------------------------------------------------------------

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 3, 0, 0, 0).unwrap()
}

fn at(minutes: i64) -> DateTime<Utc> {
    base() + Duration::minutes(minutes)
}

/// One raw interval: an offset into the week and a length. Length 0 is
/// deliberately included so the drop-zero-length rule gets exercised.
fn arb_interval() -> impl Strategy<Value = Interval> {
    (0i64..10_000, 0i64..600).prop_map(|(offset, len)| Interval::new(at(offset), at(offset + len)))
}

fn arb_intervals() -> impl Strategy<Value = Vec<Interval>> {
    prop::collection::vec(arb_interval(), 0..40)
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Property 1: Merged output is sorted and pairwise disjoint
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn merge_output_is_sorted_and_disjoint(raw in arb_intervals()) {
        let merged = merge(raw);

        for iv in &merged {
            prop_assert!(iv.start < iv.end, "degenerate interval survived: {:?}", iv);
        }
        for pair in merged.windows(2) {
            // Strict gap: adjacency would have merged.
            prop_assert!(
                pair[0].end < pair[1].start,
                "not disjoint/sorted: {:?} then {:?}",
                pair[0],
                pair[1]
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Merge is idempotent
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn merge_is_idempotent(raw in arb_intervals()) {
        let once = merge(raw);
        let twice = merge(once.clone());
        prop_assert_eq!(once, twice);
    }
}

// ---------------------------------------------------------------------------
// Property 3: Merging preserves coverage — an instant is inside the merged
// cover iff it was inside some raw interval
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn merge_preserves_coverage(raw in arb_intervals(), probe_minute in 0i64..11_000) {
        let merged = merge(raw.clone());
        let probe = at(probe_minute);

        let covered_raw = raw
            .iter()
            .any(|iv| iv.start <= probe && probe < iv.end);
        let covered_merged = merged
            .iter()
            .any(|iv| iv.start <= probe && probe < iv.end);

        prop_assert_eq!(covered_raw, covered_merged);
    }
}

// ---------------------------------------------------------------------------
// Property 4: is_busy agrees with raw half-open overlap
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn is_busy_matches_raw_overlap(
        raw in arb_intervals(),
        offset in 0i64..11_000,
        len in 1i64..240,
    ) {
        let candidate = Interval::new(at(offset), at(offset + len));
        let set = ParticipantBusySet::from_raw("p", raw.clone());

        let raw_overlap = raw
            .iter()
            .filter(|iv| iv.start < iv.end)
            .any(|iv| iv.overlaps(&candidate));

        prop_assert_eq!(set.is_busy(&candidate), raw_overlap);
    }
}
