// ABOUTME: Integration tests for the windowed aggregation functions
// ABOUTME: Covers trailing averages, maintenance estimation, and absence propagation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{entry_days_ago, fixed_now, init_test_logging};
use pondus::intelligence::aggregates::{maintenance_estimate, seven_day_average};

// === Seven-day average ===

#[test]
fn seven_day_average_excludes_entries_outside_window() {
    init_test_logging();
    let now = fixed_now();
    let entries = vec![
        entry_days_ago(now, 10, Some(81.0), None),
        entry_days_ago(now, 3, Some(79.0), None),
    ];

    let average = seven_day_average(&entries, now).unwrap();

    // Only the three-day-old entry qualifies; the mean of both would be 80.
    assert!((average - 79.0).abs() < f64::EPSILON);
}

#[test]
fn seven_day_average_means_all_qualifying_weights() {
    init_test_logging();
    let now = fixed_now();
    let entries = vec![
        entry_days_ago(now, 6, Some(80.0), None),
        entry_days_ago(now, 4, Some(79.0), None),
        entry_days_ago(now, 1, Some(78.0), None),
    ];

    let average = seven_day_average(&entries, now).unwrap();

    assert!((average - 79.0).abs() < f64::EPSILON);
}

#[test]
fn seven_day_average_skips_weightless_entries() {
    init_test_logging();
    let now = fixed_now();
    let entries = vec![
        entry_days_ago(now, 2, None, Some(2100)),
        entry_days_ago(now, 1, Some(77.5), None),
    ];

    let average = seven_day_average(&entries, now).unwrap();

    assert!((average - 77.5).abs() < f64::EPSILON);
}

#[test]
fn seven_day_average_absent_when_nothing_qualifies() {
    init_test_logging();
    let now = fixed_now();
    let entries = vec![
        entry_days_ago(now, 20, Some(83.0), None),
        entry_days_ago(now, 2, None, Some(2000)),
    ];

    assert_eq!(seven_day_average(&entries, now), None);
    assert_eq!(seven_day_average(&[], now), None);
}

// === Maintenance estimate ===

#[test]
fn maintenance_estimate_corrects_intake_by_trend_energy() {
    init_test_logging();
    let now = fixed_now();
    // 1 kg lost over 10 days at a reported 2000 kcal/day:
    // kcal_delta = (-1 * 7700) / 10 = -770, estimate = 2000 - (-770) = 2770.
    let entries = vec![
        entry_days_ago(now, 10, Some(80.0), Some(2000)),
        entry_days_ago(now, 0, Some(79.0), Some(2000)),
    ];

    assert_eq!(maintenance_estimate(&entries), Some(2770));
}

#[test]
fn maintenance_estimate_absent_without_complete_samples() {
    init_test_logging();
    let now = fixed_now();
    let entries = vec![
        entry_days_ago(now, 5, Some(80.0), None),
        entry_days_ago(now, 3, None, Some(2000)),
        entry_days_ago(now, 1, Some(79.5), None),
    ];

    assert_eq!(maintenance_estimate(&entries), None);
}

#[test]
fn maintenance_estimate_requires_two_samples() {
    init_test_logging();
    let now = fixed_now();
    let entries = vec![entry_days_ago(now, 1, Some(80.0), Some(2000))];

    assert_eq!(maintenance_estimate(&entries), None);
}

#[test]
fn maintenance_estimate_absent_over_zero_day_span() {
    init_test_logging();
    let now = fixed_now();
    // Two complete samples on the same day: no defined rate, never a fault.
    let entries = vec![
        entry_days_ago(now, 1, Some(80.0), Some(2000)),
        entry_days_ago(now, 1, Some(79.0), Some(2200)),
    ];

    assert_eq!(maintenance_estimate(&entries), None);
}

#[test]
fn maintenance_estimate_caps_window_at_fourteen_samples() {
    init_test_logging();
    let now = fixed_now();
    let mut entries = vec![
        entry_days_ago(now, 15, Some(100.0), Some(2000)),
        entry_days_ago(now, 14, Some(100.0), Some(2000)),
    ];
    for days_ago in (0..=13).rev() {
        entries.push(entry_days_ago(now, days_ago, Some(80.0), Some(2000)));
    }

    // The two old 100 kg samples fall outside the fourteen-sample window, so
    // the observed trend is flat and the estimate equals the mean intake.
    assert_eq!(maintenance_estimate(&entries), Some(2000));
}

#[test]
fn maintenance_estimate_sorts_unordered_input() {
    init_test_logging();
    let now = fixed_now();
    let entries = vec![
        entry_days_ago(now, 0, Some(79.0), Some(2000)),
        entry_days_ago(now, 10, Some(80.0), Some(2000)),
    ];

    assert_eq!(maintenance_estimate(&entries), Some(2770));
}

#[test]
fn derivations_are_idempotent_over_identical_snapshots() {
    init_test_logging();
    let now = fixed_now();
    let entries = vec![
        entry_days_ago(now, 9, Some(80.4), Some(2150)),
        entry_days_ago(now, 4, Some(80.0), Some(2050)),
        entry_days_ago(now, 1, Some(79.7), Some(2250)),
    ];

    assert_eq!(
        seven_day_average(&entries, now),
        seven_day_average(&entries, now)
    );
    assert_eq!(maintenance_estimate(&entries), maintenance_estimate(&entries));
}
