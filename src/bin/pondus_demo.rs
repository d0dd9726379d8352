// ABOUTME: Demo binary seeding a synthetic weigh-in series and printing projections
// ABOUTME: Exercises the full dataflow: stores, derivation nodes, tracker surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Seed a deterministic synthetic measurement history, declare a goal, and
//! print the derived live values as JSON.
//!
//! ```bash
//! pondus-demo --days 28 --start-weight 82 --goal-weight 78 --weeks 10
//! ```

use std::sync::Arc;

use anyhow::{bail, Result};
use chrono::{Duration, Utc};
use clap::Parser;
use pondus::config::environment::TrackerConfig;
use pondus::dataflow::Live;
use pondus::logging;
use pondus::models::{Goal, GoalProjection, GoalTimeline, GoalType, WeightEntry};
use pondus::store::{EntryStore, InMemoryEntryStore, InMemoryGoalStore};
use pondus::tracker::WeightTracker;
use serde::Serialize;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "pondus-demo",
    about = "Seed a synthetic weigh-in series and print the derived goal projection"
)]
struct Args {
    /// Days of history to generate
    #[arg(long, default_value_t = 28)]
    days: u32,

    /// Starting body weight in kilograms
    #[arg(long, default_value_t = 82.0)]
    start_weight: f64,

    /// Linear weight trend across the generated history (kg/week)
    #[arg(long, default_value_t = -0.35, allow_hyphen_values = true)]
    trend_kg_per_week: f64,

    /// Mean reported daily intake (kcal)
    #[arg(long, default_value_t = 2200)]
    daily_intake: i32,

    /// Goal weight in kilograms
    #[arg(long, default_value_t = 78.0)]
    goal_weight: f64,

    /// Weeks allotted to reach the goal
    #[arg(long, default_value_t = 10)]
    weeks: u32,
}

#[derive(Serialize)]
struct DemoSummary {
    entries: usize,
    seven_day_average: Option<f64>,
    maintenance_estimate: Option<i32>,
    goal_calories: Option<i32>,
    projection: GoalProjection,
}

/// Generate `days` of history ending today, with deterministic day-to-day
/// jitter so the series looks plausible without a randomness dependency.
async fn seed_entries(store: &InMemoryEntryStore, args: &Args) -> Result<()> {
    let now = Utc::now();
    for day in 0..args.days {
        let days_ago = i64::from(args.days - 1 - day);
        let recorded_at = now - Duration::days(days_ago);

        let elapsed_weeks = f64::from(day) / 7.0;
        let jitter = f64::from((day * 37) % 11) * 0.04 - 0.2;
        let weight = args.start_weight + args.trend_kg_per_week * elapsed_weeks + jitter;

        let intake_jitter = ((day * 53) % 121) as i32 - 60;
        let calories = args.daily_intake + intake_jitter;

        // Leave occasional gaps: a skipped weigh-in or an unlogged intake
        // exercises the absence handling downstream.
        let weight = (day % 9 != 4).then_some(weight);
        let calories = (day % 7 != 5).then_some(calories);

        store
            .insert(WeightEntry::new(recorded_at, weight, calories))
            .await?;
    }
    Ok(())
}

/// Wait until a live value satisfies `ready`; the nodes compute
/// asynchronously, so the first read after subscribing may still be the
/// initial absent state.
async fn wait_for<T, F>(live: &mut Live<T>, ready: F) -> Result<T>
where
    T: Clone + Send + Sync + 'static,
    F: Fn(&T) -> bool,
{
    loop {
        let value = live.latest();
        if ready(&value) {
            return Ok(value);
        }
        if !live.changed().await {
            bail!("derivation node shut down before producing a value");
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_from_env()?;
    let args = Args::parse();
    let config = TrackerConfig::from_env()?;

    let entry_store = Arc::new(InMemoryEntryStore::new());
    let goal_store = Arc::new(InMemoryGoalStore::new());
    let entry_store_dyn: Arc<dyn EntryStore> = entry_store.clone();
    let tracker = WeightTracker::new(entry_store_dyn, goal_store, &config);

    seed_entries(&entry_store, &args).await?;

    let goal_type = if args.goal_weight < args.start_weight {
        GoalType::Lose
    } else {
        GoalType::Gain
    };
    tracker
        .set_goal(Goal::new(
            args.goal_weight,
            goal_type,
            GoalTimeline::ByDuration { weeks: args.weeks },
        ))
        .await?;
    info!(goal_weight = args.goal_weight, weeks = args.weeks, %goal_type, "goal declared");

    let mut entries = tracker.entries();
    let mut average = tracker.seven_day_average();
    let mut maintenance = tracker.maintenance_estimate();
    let mut projection = tracker.projection();
    let mut goal_calories = tracker.goal_calories();

    let entries = wait_for(&mut entries, |list: &Vec<WeightEntry>| !list.is_empty()).await?;
    let seven_day_average = wait_for(&mut average, |avg| avg.is_some()).await?;
    let maintenance_estimate = wait_for(&mut maintenance, |est| est.is_some()).await?;
    let Some(outcome) = wait_for(&mut projection, |out| out.is_some()).await? else {
        bail!("projection absent after goal was set");
    };
    let goal_calories = wait_for(&mut goal_calories, |kcal| kcal.is_some()).await?;

    let summary = DemoSummary {
        entries: entries.len(),
        seven_day_average,
        maintenance_estimate,
        goal_calories,
        projection: outcome.projection,
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
