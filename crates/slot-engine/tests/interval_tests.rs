//! Tests for the half-open interval model: overlap semantics and merging.

use chrono::{TimeZone, Utc};
use slot_engine::interval::{merge, Interval};

/// Helper to build an interval between two hour:minute points on one day.
fn iv(start_hour: u32, start_min: u32, end_hour: u32, end_min: u32) -> Interval {
    Interval::new(
        Utc.with_ymd_and_hms(2024, 6, 3, start_hour, start_min, 0)
            .unwrap(),
        Utc.with_ymd_and_hms(2024, 6, 3, end_hour, end_min, 0)
            .unwrap(),
    )
}

#[test]
fn overlapping_intervals_overlap() {
    assert!(iv(9, 0, 11, 0).overlaps(&iv(10, 0, 12, 0)));
    assert!(iv(10, 0, 12, 0).overlaps(&iv(9, 0, 11, 0)));
}

#[test]
fn contained_interval_overlaps() {
    assert!(iv(9, 0, 17, 0).overlaps(&iv(12, 0, 13, 0)));
    assert!(iv(12, 0, 13, 0).overlaps(&iv(9, 0, 17, 0)));
}

#[test]
fn touching_intervals_do_not_overlap() {
    // Half-open: [9:00, 10:00) and [10:00, 11:00) share no instant.
    assert!(!iv(9, 0, 10, 0).overlaps(&iv(10, 0, 11, 0)));
    assert!(!iv(10, 0, 11, 0).overlaps(&iv(9, 0, 10, 0)));
}

#[test]
fn disjoint_intervals_do_not_overlap() {
    assert!(!iv(8, 0, 9, 0).overlaps(&iv(14, 0, 15, 0)));
}

#[test]
fn merge_sorts_unsorted_input() {
    let merged = merge(vec![iv(14, 0, 15, 0), iv(9, 0, 10, 0)]);
    assert_eq!(merged, vec![iv(9, 0, 10, 0), iv(14, 0, 15, 0)]);
}

#[test]
fn merge_combines_overlapping_intervals() {
    let merged = merge(vec![iv(9, 0, 11, 0), iv(10, 0, 12, 0)]);
    assert_eq!(merged, vec![iv(9, 0, 12, 0)]);
}

#[test]
fn merge_combines_adjacent_intervals() {
    // [9, 10) next to [10, 11): busy the whole time, so one cover.
    let merged = merge(vec![iv(9, 0, 10, 0), iv(10, 0, 11, 0)]);
    assert_eq!(merged, vec![iv(9, 0, 11, 0)]);
}

#[test]
fn merge_drops_duplicates_and_zero_length() {
    let merged = merge(vec![
        iv(9, 0, 10, 0),
        iv(9, 0, 10, 0),
        iv(12, 0, 12, 0), // zero length
        iv(13, 0, 12, 0), // inverted
    ]);
    assert_eq!(merged, vec![iv(9, 0, 10, 0)]);
}

#[test]
fn merge_of_contained_interval_keeps_outer() {
    let merged = merge(vec![iv(9, 0, 17, 0), iv(12, 0, 13, 0)]);
    assert_eq!(merged, vec![iv(9, 0, 17, 0)]);
}

#[test]
fn merge_empty_input_is_empty() {
    assert!(merge(vec![]).is_empty());
}

#[test]
fn clip_inside_window_unchanged() {
    let window = iv(8, 0, 17, 0);
    assert_eq!(iv(9, 0, 10, 0).clip(&window), Some(iv(9, 0, 10, 0)));
}

#[test]
fn clip_straddling_window_is_bounded() {
    let window = iv(8, 0, 17, 0);
    assert_eq!(iv(7, 0, 9, 0).clip(&window), Some(iv(8, 0, 9, 0)));
    assert_eq!(iv(16, 0, 18, 0).clip(&window), Some(iv(16, 0, 17, 0)));
}

#[test]
fn clip_outside_window_is_none() {
    let window = iv(8, 0, 17, 0);
    assert_eq!(iv(18, 0, 19, 0).clip(&window), None);
    // Touching the window edge leaves nothing (half-open).
    assert_eq!(iv(17, 0, 19, 0).clip(&window), None);
}

#[test]
fn duration_minutes_reports_length() {
    assert_eq!(iv(9, 0, 10, 30).duration_minutes(), 90);
}
