// ABOUTME: Goal model with direction tag and tagged-union timeline specification
// ABOUTME: Exactly one timeline mode (rate, duration, or date) is active per goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a weight goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    /// Reduce body weight toward the target
    Lose,
    /// Increase body weight toward the target
    Gain,
    /// Hold body weight; no directional rate applies
    Maintain,
}

impl std::fmt::Display for GoalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lose => write!(f, "lose"),
            Self::Gain => write!(f, "gain"),
            Self::Maintain => write!(f, "maintain"),
        }
    }
}

/// How a goal's timeline is expressed
///
/// Exactly one mode is active per goal. The resolver and estimator match
/// exhaustively on this union; there are no optional-field combinations to
/// keep consistent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum GoalTimeline {
    /// Explicit weekly rate of change, already signed per goal direction
    ByRate {
        /// Weekly weight change (kg/week, negative when losing)
        kg_per_week: f64,
    },
    /// Fixed number of weeks allotted to reach the target weight
    ByDuration {
        /// Week count; zero is invalid input and resolves to no rate
        weeks: u32,
    },
    /// Explicit calendar deadline
    ByDate {
        /// Target completion date
        target: DateTime<Utc>,
    },
}

impl GoalTimeline {
    /// The explicit deadline, when this timeline carries one
    #[must_use]
    pub fn target_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::ByDate { target } => Some(*target),
            Self::ByRate { .. } | Self::ByDuration { .. } => None,
        }
    }
}

/// The active weight goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    /// Unique goal id
    pub id: Uuid,
    /// Target body weight in kilograms
    pub goal_weight_kg: f64,
    /// Direction of travel
    pub goal_type: GoalType,
    /// Timeline specification
    pub timeline: GoalTimeline,
    /// When the goal was declared
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// Create a goal with a fresh id, declared now
    #[must_use]
    pub fn new(goal_weight_kg: f64, goal_type: GoalType, timeline: GoalTimeline) -> Self {
        Self {
            id: Uuid::new_v4(),
            goal_weight_kg,
            goal_type,
            timeline,
            created_at: Utc::now(),
        }
    }
}
