// ABOUTME: Shared test utilities and fixture builders for integration tests
// ABOUTME: Provides quiet logging setup and entry/goal construction helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
#![allow(missing_docs)]

//! Shared test utilities for `pondus`
//!
//! Derivations take `now` as a parameter, so tests pin it to a fixed instant
//! and build entries relative to that.

use chrono::{DateTime, Duration, TimeZone, Utc};
use pondus::models::{Goal, GoalTimeline, GoalType, WeightEntry};
use std::env;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls verbosity; default keeps test output quiet
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };
        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed reference instant for deterministic derivations
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).single().unwrap()
}

/// Entry recorded `days_ago` whole days before `now`
pub fn entry_days_ago(
    now: DateTime<Utc>,
    days_ago: i64,
    weight_kg: Option<f64>,
    calories: Option<i32>,
) -> WeightEntry {
    WeightEntry::new(now - Duration::days(days_ago), weight_kg, calories)
}

/// Goal of losing down to `goal_weight_kg` within `weeks`
pub fn lose_goal_by_duration(goal_weight_kg: f64, weeks: u32) -> Goal {
    Goal::new(
        goal_weight_kg,
        GoalType::Lose,
        GoalTimeline::ByDuration { weeks },
    )
}

/// Goal of losing down to `goal_weight_kg` at an explicit weekly rate
pub fn lose_goal_by_rate(goal_weight_kg: f64, kg_per_week: f64) -> Goal {
    Goal::new(
        goal_weight_kg,
        GoalType::Lose,
        GoalTimeline::ByRate { kg_per_week },
    )
}

/// Maintain goal; the timeline should be irrelevant to every derivation
pub fn maintain_goal(goal_weight_kg: f64, timeline: GoalTimeline) -> Goal {
    Goal::new(goal_weight_kg, GoalType::Maintain, timeline)
}
