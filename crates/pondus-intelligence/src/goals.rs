// ABOUTME: Goal rate resolution, completion-date estimation, and calorie deltas
// ABOUTME: All three derivations propagate absence as None; none can divide by zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Goal rate, date, and calorie derivations
//!
//! A goal expresses its timeline as one of three modes: an explicit weekly
//! rate, a week count, or a calendar deadline. The resolver reconstructs an
//! effective weekly rate from whichever mode is active; the estimator and
//! calculator turn that rate into a projected completion date and calorie
//! adjustments.

use chrono::{DateTime, Duration, Utc};
use pondus_core::models::{Goal, GoalTimeline, GoalType};
use serde::{Deserialize, Serialize};

use crate::physiology::energy::KCAL_PER_KG;
use crate::physiology::time::{DAYS_PER_WEEK, SECONDS_PER_DAY};

/// Effective weekly rate of change implied by a goal
///
/// Maintain goals resolve to zero regardless of timeline mode. By-duration
/// and by-date timelines reconstruct the rate from the distance still to
/// travel, so its sign falls out of the direction of travel: negative when
/// the target is below the current weight. A zero-week duration is invalid
/// input and resolves to `None` rather than infinity; a deadline at or
/// behind `now` is floored to a minimal positive span.
#[must_use]
pub fn resolve_rate_kg_per_week(
    goal: &Goal,
    current_weight: f64,
    now: DateTime<Utc>,
) -> Option<f64> {
    if goal.goal_type == GoalType::Maintain {
        return Some(0.0);
    }
    match goal.timeline {
        GoalTimeline::ByRate { kg_per_week } => Some(kg_per_week),
        GoalTimeline::ByDuration { weeks } => {
            if weeks == 0 {
                return None;
            }
            Some((goal.goal_weight_kg - current_weight) / f64::from(weeks))
        }
        GoalTimeline::ByDate { target } => {
            let weeks_remaining = ((target - now).num_seconds() as f64
                / (SECONDS_PER_DAY * DAYS_PER_WEEK))
                .max(f64::EPSILON);
            Some((goal.goal_weight_kg - current_weight) / weeks_remaining)
        }
    }
}

/// Projected completion date for a directional goal
///
/// Maintain goals have no finite completion date, whatever their timeline
/// carries. By-date timelines pass their stored deadline through unchanged.
/// Otherwise the date is projected from the remaining distance at the
/// resolved rate; an unresolved or zero rate yields `None`.
#[must_use]
pub fn estimate_goal_date(
    current_weight: f64,
    goal_weight: f64,
    rate_kg_per_week: Option<f64>,
    timeline: GoalTimeline,
    goal_type: GoalType,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    if goal_type == GoalType::Maintain {
        return None;
    }
    if let GoalTimeline::ByDate { target } = timeline {
        return Some(target);
    }
    let rate = rate_kg_per_week?;
    if rate.abs() < f64::EPSILON {
        return None;
    }
    let weeks_needed = (current_weight - goal_weight).abs() / rate.abs();
    let seconds = weeks_needed * DAYS_PER_WEEK * SECONDS_PER_DAY;
    Some(now + Duration::seconds(seconds as i64))
}

/// Total and daily calorie adjustment for a goal
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalorieEstimate {
    /// Total adjustment over the projected window (kcal)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    /// Daily adjustment (kcal/day; negative deficit, positive surplus)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_delta: Option<i32>,
}

/// Convert a resolved rate and projected timeline into calorie adjustments
///
/// Maintain goals pin both values to zero. An unresolved rate propagates as
/// absence rather than defaulting to zero. The total is only defined when
/// some completion date is available, the estimated date taking precedence
/// over an explicit deadline.
#[must_use]
pub fn estimate_calories(
    goal_type: GoalType,
    rate_kg_per_week: Option<f64>,
    estimated_goal_date: Option<DateTime<Utc>>,
    target_date: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> CalorieEstimate {
    if goal_type == GoalType::Maintain {
        return CalorieEstimate {
            total: Some(0),
            daily_delta: Some(0),
        };
    }
    let Some(rate) = rate_kg_per_week else {
        return CalorieEstimate::default();
    };

    let daily_delta = (rate * KCAL_PER_KG / DAYS_PER_WEEK).round() as i32;
    let total = estimated_goal_date
        .or(target_date)
        .map(|date| i64::from(daily_delta) * days_until(date, now));

    CalorieEstimate {
        total,
        daily_delta: Some(daily_delta),
    }
}

/// Whole days from `now` until `date`, truncated toward zero
fn days_until(date: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (date - now).num_days()
}
