// ABOUTME: Derived goal projection values: completion date and calorie deltas
// ABOUTME: Recomputed from snapshots on every change; never persisted or cached
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Projection of the active goal against the observed weight trend
///
/// Every field is optional: a maintain goal has no finite completion date,
/// and an unresolvable rate leaves the calorie deltas absent rather than
/// zeroed. Values are derived fresh from the latest snapshots and carry no
/// identity of their own.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct GoalProjection {
    /// Estimated completion date, or the explicit deadline for by-date goals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_goal_date: Option<DateTime<Utc>>,
    /// Daily calorie adjustment (kcal/day; negative deficit, positive surplus)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_calorie_delta: Option<i32>,
    /// Total calorie adjustment over the projected window (kcal)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_calorie_delta: Option<i64>,
}
