// ABOUTME: Combination of the latest snapshots into a single projection outcome
// ABOUTME: The composition point of the derivation pipeline, itself still pure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Snapshot combination
//!
//! [`project`] is the composition point of the pipeline: it chains rate
//! resolution, date estimation, and calorie calculation over one consistent
//! tuple of snapshots. The reactive shell calls it again whenever any input
//! emits; given identical snapshots it returns identical results.

use chrono::{DateTime, Utc};
use pondus_core::models::{Goal, GoalProjection, WeightEntry};
use serde::{Deserialize, Serialize};

use crate::goals::{estimate_calories, estimate_goal_date, resolve_rate_kg_per_week};

/// Everything derived from one snapshot tuple
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ProjectionOutcome {
    /// Derived projection fields (completion date and calorie deltas)
    pub projection: GoalProjection,
    /// Daily calorie target reconciling the goal with estimated maintenance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_calories: Option<i32>,
}

/// Combine the latest snapshots into a goal projection
///
/// Returns `None` when no goal is set. Current weight falls back from the
/// trailing average to the most recent entry's weight, then to zero.
/// `goal_calories` is only defined when a maintenance estimate exists; an
/// absent daily delta contributes zero to it.
#[must_use]
pub fn project(
    goal: Option<&Goal>,
    entries: &[WeightEntry],
    seven_day_average: Option<f64>,
    maintenance_estimate: Option<i32>,
    now: DateTime<Utc>,
) -> Option<ProjectionOutcome> {
    let goal = goal?;

    let current_weight = seven_day_average
        .or_else(|| entries.last().and_then(|entry| entry.weight_kg))
        .unwrap_or(0.0);

    let rate = resolve_rate_kg_per_week(goal, current_weight, now);
    let estimated_goal_date = estimate_goal_date(
        current_weight,
        goal.goal_weight_kg,
        rate,
        goal.timeline,
        goal.goal_type,
        now,
    );
    let estimate = estimate_calories(
        goal.goal_type,
        rate,
        estimated_goal_date,
        goal.timeline.target_date(),
        now,
    );

    tracing::debug!(
        goal_weight = goal.goal_weight_kg,
        current_weight,
        rate = ?rate,
        daily_delta = ?estimate.daily_delta,
        maintenance = ?maintenance_estimate,
        entry_count = entries.len(),
        "recomputed goal projection"
    );

    let goal_calories =
        maintenance_estimate.map(|maintenance| maintenance + estimate.daily_delta.unwrap_or(0));

    Some(ProjectionOutcome {
        projection: GoalProjection {
            estimated_goal_date,
            daily_calorie_delta: estimate.daily_delta,
            total_calorie_delta: estimate.total,
        },
        goal_calories,
    })
}
