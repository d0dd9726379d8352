// ABOUTME: Windowed aggregations over the weight-entry series
// ABOUTME: Trailing seven-day average and energy-balance maintenance estimate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Windowed aggregations over the entry series
//!
//! Both functions tolerate unsorted input: the maintenance estimate sorts its
//! qualifying samples by recording time before windowing, and the trailing
//! average is order-independent.

use chrono::{DateTime, Duration, Utc};
use pondus_core::constants::windows::{
    MAINTENANCE_MIN_SAMPLES, MAINTENANCE_SAMPLE_CAP, TRAILING_AVERAGE_DAYS,
};
use pondus_core::models::WeightEntry;

use crate::physiology::energy::KCAL_PER_KG;

/// Mean measured weight over the trailing seven days
///
/// Entries without a weight, or recorded more than seven days before `now`,
/// are excluded. Returns `None` when no entry qualifies.
#[must_use]
pub fn seven_day_average(entries: &[WeightEntry], now: DateTime<Utc>) -> Option<f64> {
    let cutoff = now - Duration::days(TRAILING_AVERAGE_DAYS);
    let weights: Vec<f64> = entries
        .iter()
        .filter(|entry| entry.recorded_at >= cutoff)
        .filter_map(|entry| entry.weight_kg)
        .collect();
    if weights.is_empty() {
        return None;
    }
    Some(weights.iter().sum::<f64>() / weights.len() as f64)
}

/// Maintenance calorie estimate from recent complete samples
///
/// Considers the most recent [`MAINTENANCE_SAMPLE_CAP`] entries carrying both
/// a weight and a calorie total, and corrects the mean reported intake by the
/// energy implied by the observed weight trend: weight gained means intake
/// exceeded maintenance by the trend's energy equivalent, weight lost means
/// it fell short.
///
/// Returns `None` with fewer than [`MAINTENANCE_MIN_SAMPLES`] complete
/// samples, or when the first and last sample fall within the same day (no
/// defined rate over a zero span).
#[must_use]
pub fn maintenance_estimate(entries: &[WeightEntry]) -> Option<i32> {
    let mut samples: Vec<&WeightEntry> = entries
        .iter()
        .filter(|entry| entry.is_complete_sample())
        .collect();
    samples.sort_by_key(|entry| entry.recorded_at);

    let recent = &samples[samples.len().saturating_sub(MAINTENANCE_SAMPLE_CAP)..];
    if recent.len() < MAINTENANCE_MIN_SAMPLES {
        return None;
    }

    let first = recent.first()?;
    let last = recent.last()?;

    let days_between = (last.recorded_at - first.recorded_at).num_days();
    if days_between == 0 {
        return None;
    }

    let weight_delta = last.weight_kg? - first.weight_kg?;
    let kcal_delta = weight_delta * KCAL_PER_KG / days_between as f64;

    let intakes: Vec<f64> = recent
        .iter()
        .filter_map(|entry| entry.calories)
        .map(f64::from)
        .collect();
    let avg_calories = intakes.iter().sum::<f64>() / intakes.len() as f64;

    Some((avg_calories - kcal_delta).round() as i32)
}
