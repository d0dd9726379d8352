// ABOUTME: WeightEntry model for a single day's logged measurements
// ABOUTME: Either field may be absent; windowed computations skip incomplete entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single day's logged measurements
///
/// Either field may be absent: a day with only a weigh-in or only a calorie
/// total still occupies its slot in the series. Windowed computations skip
/// entries missing the field they need; they never substitute zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeightEntry {
    /// Unique entry id
    pub id: Uuid,
    /// When the measurements were recorded; the ordering key for the series
    pub recorded_at: DateTime<Utc>,
    /// Measured body weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Reported calorie intake for the day (kcal)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<i32>,
}

impl WeightEntry {
    /// Create an entry with a fresh id
    #[must_use]
    pub fn new(
        recorded_at: DateTime<Utc>,
        weight_kg: Option<f64>,
        calories: Option<i32>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at,
            weight_kg,
            calories,
        }
    }

    /// Whether both a weight and a calorie total were logged
    ///
    /// The maintenance estimate only considers complete samples.
    #[must_use]
    pub const fn is_complete_sample(&self) -> bool {
        self.weight_kg.is_some() && self.calories.is_some()
    }
}
