// ABOUTME: WeightTracker surface: live derived values plus entry and goal commands
// ABOUTME: Wires observed stores through shared derivation nodes into a dataflow graph
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! The tracker surface
//!
//! [`WeightTracker`] owns the derivation graph:
//!
//! ```text
//! entry store ──> entries ──┬──> seven_day_average ──┐
//!                           ├──> maintenance ────────┼──> projection ──> goal_calories
//! goal store ───> goal ─────┴────────────────────────┘
//! ```
//!
//! Every node recomputes from the latest value of each dependency whenever
//! any one of them emits, and each is independently shared with the
//! configured trailing-unsubscribe grace. All live values start empty or
//! absent until the first upstream emission reaches them.

use std::sync::Arc;

use chrono::Utc;
use pondus_core::errors::AppResult;
use pondus_core::models::{Goal, WeightEntry};
use pondus_intelligence::aggregates;
use pondus_intelligence::projection::{self, ProjectionOutcome};

use crate::config::TrackerConfig;
use crate::dataflow::{Live, Shared};
use crate::store::{EntryStore, GoalStore};

/// Live weight-trend state and the commands that feed it
pub struct WeightTracker {
    entry_store: Arc<dyn EntryStore>,
    goal_store: Arc<dyn GoalStore>,
    entries: Shared<Vec<WeightEntry>>,
    goal: Shared<Option<Goal>>,
    seven_day_average: Shared<Option<f64>>,
    maintenance_estimate: Shared<Option<i32>>,
    projection: Shared<Option<ProjectionOutcome>>,
    goal_calories: Shared<Option<i32>>,
}

impl WeightTracker {
    /// Build the derivation graph over the given stores
    #[must_use]
    pub fn new(
        entry_store: Arc<dyn EntryStore>,
        goal_store: Arc<dyn GoalStore>,
        config: &TrackerConfig,
    ) -> Self {
        let grace = config.share_grace;

        let entries = {
            let store = Arc::clone(&entry_store);
            Shared::new(Vec::new(), grace, move |tx| {
                let mut rx = store.observe_all();
                tokio::spawn(async move {
                    loop {
                        tx.send_replace(rx.borrow_and_update().clone());
                        if rx.changed().await.is_err() {
                            break;
                        }
                    }
                })
            })
        };

        let goal = {
            let store = Arc::clone(&goal_store);
            Shared::new(None, grace, move |tx| {
                let mut rx = store.observe_latest();
                tokio::spawn(async move {
                    loop {
                        tx.send_replace(rx.borrow_and_update().clone());
                        if rx.changed().await.is_err() {
                            break;
                        }
                    }
                })
            })
        };

        let seven_day_average = {
            let entries = entries.clone();
            Shared::new(None, grace, move |tx| {
                let mut live = entries.subscribe();
                tokio::spawn(async move {
                    loop {
                        let snapshot = live.latest();
                        tx.send_replace(aggregates::seven_day_average(&snapshot, Utc::now()));
                        if !live.changed().await {
                            break;
                        }
                    }
                })
            })
        };

        let maintenance_estimate = {
            let entries = entries.clone();
            Shared::new(None, grace, move |tx| {
                let mut live = entries.subscribe();
                tokio::spawn(async move {
                    loop {
                        let snapshot = live.latest();
                        tx.send_replace(aggregates::maintenance_estimate(&snapshot));
                        if !live.changed().await {
                            break;
                        }
                    }
                })
            })
        };

        let projection = {
            let goal = goal.clone();
            let entries = entries.clone();
            let average = seven_day_average.clone();
            let maintenance = maintenance_estimate.clone();
            Shared::new(None, grace, move |tx| {
                let mut goal = goal.subscribe();
                let mut entries = entries.subscribe();
                let mut average = average.subscribe();
                let mut maintenance = maintenance.subscribe();
                tokio::spawn(async move {
                    loop {
                        let outcome = projection::project(
                            goal.latest().as_ref(),
                            &entries.latest(),
                            average.latest(),
                            maintenance.latest(),
                            Utc::now(),
                        );
                        tx.send_replace(outcome);
                        // watch::changed is cancel-safe, so racing the four
                        // dependencies loses no updates.
                        tokio::select! {
                            open = goal.changed() => if !open { break },
                            open = entries.changed() => if !open { break },
                            open = average.changed() => if !open { break },
                            open = maintenance.changed() => if !open { break },
                        }
                    }
                })
            })
        };

        let goal_calories = {
            let projection = projection.clone();
            Shared::new(None, grace, move |tx| {
                let mut live = projection.subscribe();
                tokio::spawn(async move {
                    loop {
                        let outcome = live.latest();
                        tx.send_replace(outcome.and_then(|o| o.goal_calories));
                        if !live.changed().await {
                            break;
                        }
                    }
                })
            })
        };

        Self {
            entry_store,
            goal_store,
            entries,
            goal,
            seven_day_average,
            maintenance_estimate,
            projection,
            goal_calories,
        }
    }

    /// Log a new entry recorded now
    ///
    /// Either measurement may be omitted; the entry still occupies its slot
    /// in the series.
    ///
    /// # Errors
    ///
    /// Propagates the entry store's insertion error.
    pub async fn add_entry(
        &self,
        weight_kg: Option<f64>,
        calories: Option<i32>,
    ) -> AppResult<WeightEntry> {
        let entry = WeightEntry::new(Utc::now(), weight_kg, calories);
        self.entry_store.insert(entry.clone()).await?;
        Ok(entry)
    }

    /// Replace an existing entry
    ///
    /// # Errors
    ///
    /// Returns [`pondus_core::errors::AppError::EntryNotFound`] when the
    /// entry's id is unknown to the store.
    pub async fn update_entry(&self, entry: WeightEntry) -> AppResult<()> {
        self.entry_store.update(entry).await
    }

    /// Declare the active goal, replacing any previous one
    ///
    /// # Errors
    ///
    /// Propagates the goal store's insertion error.
    pub async fn set_goal(&self, goal: Goal) -> AppResult<()> {
        self.goal_store.insert(goal).await
    }

    /// Remove the active goal
    ///
    /// # Errors
    ///
    /// Propagates the goal store's clear error.
    pub async fn clear_goal(&self) -> AppResult<()> {
        self.goal_store.clear().await
    }

    /// Live ascending-by-time entry series
    #[must_use]
    pub fn entries(&self) -> Live<Vec<WeightEntry>> {
        self.entries.subscribe()
    }

    /// Live active goal
    #[must_use]
    pub fn goal(&self) -> Live<Option<Goal>> {
        self.goal.subscribe()
    }

    /// Live trailing seven-day average weight
    #[must_use]
    pub fn seven_day_average(&self) -> Live<Option<f64>> {
        self.seven_day_average.subscribe()
    }

    /// Live maintenance calorie estimate
    #[must_use]
    pub fn maintenance_estimate(&self) -> Live<Option<i32>> {
        self.maintenance_estimate.subscribe()
    }

    /// Live projection of the active goal
    #[must_use]
    pub fn projection(&self) -> Live<Option<ProjectionOutcome>> {
        self.projection.subscribe()
    }

    /// Live daily calorie target
    #[must_use]
    pub fn goal_calories(&self) -> Live<Option<i32>> {
        self.goal_calories.subscribe()
    }
}
