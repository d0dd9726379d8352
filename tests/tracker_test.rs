// ABOUTME: Integration tests for the WeightTracker dataflow surface
// ABOUTME: Exercises stores, derivation nodes, commands, and combine-latest recomputation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use common::{entry_days_ago, init_test_logging, lose_goal_by_duration, lose_goal_by_rate};
use pondus::config::environment::TrackerConfig;
use pondus::dataflow::Live;
use pondus::errors::AppError;
use pondus::models::WeightEntry;
use pondus::store::{EntryStore, InMemoryEntryStore, InMemoryGoalStore};
use pondus::tracker::WeightTracker;
use tokio::time::timeout;

/// Wait until a live value satisfies `ready`, bounded by a generous timeout
/// so a wiring bug fails the test instead of hanging it.
async fn wait_for<T, F>(live: &mut Live<T>, ready: F) -> T
where
    T: Clone + Send + Sync + 'static,
    F: Fn(&T) -> bool,
{
    timeout(Duration::from_secs(5), async {
        loop {
            let value = live.latest();
            if ready(&value) {
                return value;
            }
            assert!(live.changed().await, "derivation node shut down");
        }
    })
    .await
    .expect("timed out waiting for live value")
}

struct Fixture {
    entry_store: Arc<InMemoryEntryStore>,
    tracker: WeightTracker,
}

fn fixture() -> Fixture {
    init_test_logging();
    let entry_store = Arc::new(InMemoryEntryStore::new());
    let goal_store = Arc::new(InMemoryGoalStore::new());
    let entry_store_dyn: Arc<dyn EntryStore> = entry_store.clone();
    let tracker = WeightTracker::new(
        entry_store_dyn,
        goal_store,
        &TrackerConfig::default(),
    );
    Fixture {
        entry_store,
        tracker,
    }
}

/// Two complete samples ten days apart, 80 -> 79 kg at 2000 kcal/day:
/// maintenance 2770, trailing average 79 (only the recent entry qualifies).
async fn seed_spec_series(store: &InMemoryEntryStore) {
    let now = Utc::now();
    store
        .insert(entry_days_ago(now, 10, Some(80.0), Some(2000)))
        .await
        .unwrap();
    store
        .insert(entry_days_ago(now, 0, Some(79.0), Some(2000)))
        .await
        .unwrap();
}

#[tokio::test]
async fn live_values_start_empty_and_absent() {
    let fx = fixture();

    assert!(fx.tracker.entries().get().is_empty());
    assert_eq!(fx.tracker.goal().get(), None);
    assert_eq!(fx.tracker.seven_day_average().get(), None);
    assert_eq!(fx.tracker.maintenance_estimate().get(), None);
    assert_eq!(fx.tracker.goal_calories().get(), None);
}

#[tokio::test]
async fn aggregates_follow_the_entry_store() {
    let fx = fixture();
    seed_spec_series(&fx.entry_store).await;

    let mut average = fx.tracker.seven_day_average();
    let mut maintenance = fx.tracker.maintenance_estimate();

    let average = wait_for(&mut average, Option::is_some).await.unwrap();
    assert!((average - 79.0).abs() < f64::EPSILON);
    assert_eq!(
        wait_for(&mut maintenance, Option::is_some).await,
        Some(2770)
    );
}

#[tokio::test]
async fn goal_calories_reconcile_goal_with_maintenance() {
    let fx = fixture();
    seed_spec_series(&fx.entry_store).await;

    // Current weight 79 (trailing average), losing to 75 over 5 weeks:
    // rate -0.8, daily delta -880, target 2770 - 880 = 1890.
    fx.tracker
        .set_goal(lose_goal_by_duration(75.0, 5))
        .await
        .unwrap();

    let mut goal_calories = fx.tracker.goal_calories();
    assert_eq!(
        wait_for(&mut goal_calories, Option::is_some).await,
        Some(1890)
    );
}

#[tokio::test]
async fn replacing_the_goal_recomputes_downstream_values() {
    let fx = fixture();
    seed_spec_series(&fx.entry_store).await;
    fx.tracker
        .set_goal(lose_goal_by_duration(75.0, 5))
        .await
        .unwrap();

    let mut goal_calories = fx.tracker.goal_calories();
    wait_for(&mut goal_calories, |kcal| *kcal == Some(1890)).await;

    // Only the goal stream changes; the other three inputs are untouched.
    fx.tracker
        .set_goal(lose_goal_by_rate(75.0, -1.0))
        .await
        .unwrap();

    wait_for(&mut goal_calories, |kcal| *kcal == Some(2770 - 1100)).await;
}

#[tokio::test]
async fn clearing_the_goal_clears_the_target() {
    let fx = fixture();
    seed_spec_series(&fx.entry_store).await;
    fx.tracker
        .set_goal(lose_goal_by_duration(75.0, 5))
        .await
        .unwrap();

    let mut goal_calories = fx.tracker.goal_calories();
    wait_for(&mut goal_calories, Option::is_some).await;

    fx.tracker.clear_goal().await.unwrap();

    wait_for(&mut goal_calories, Option::is_none).await;
}

#[tokio::test]
async fn add_entry_accepts_partial_measurements() {
    let fx = fixture();

    let entry = fx.tracker.add_entry(None, Some(2150)).await.unwrap();
    assert_eq!(entry.weight_kg, None);

    let mut entries = fx.tracker.entries();
    let entries = wait_for(&mut entries, |list: &Vec<WeightEntry>| !list.is_empty()).await;
    assert_eq!(entries[0].calories, Some(2150));
    assert_eq!(entries[0].weight_kg, None);
}

#[tokio::test]
async fn update_entry_replaces_the_stored_measurements() {
    let fx = fixture();
    let mut logged = fx.tracker.add_entry(Some(80.0), None).await.unwrap();

    logged.weight_kg = Some(80.6);
    fx.tracker.update_entry(logged.clone()).await.unwrap();

    let mut entries = fx.tracker.entries();
    let entries = wait_for(&mut entries, |list: &Vec<WeightEntry>| {
        list.iter().any(|entry| entry.weight_kg == Some(80.6))
    })
    .await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, logged.id);
}

#[tokio::test]
async fn update_of_an_unknown_entry_is_rejected() {
    let fx = fixture();
    let phantom = WeightEntry::new(Utc::now(), Some(80.0), None);

    let result = fx.tracker.update_entry(phantom.clone()).await;

    match result {
        Err(AppError::EntryNotFound { id }) => assert_eq!(id, phantom.id),
        other => panic!("expected EntryNotFound, got {other:?}"),
    }
}
