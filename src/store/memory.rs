// ABOUTME: In-memory reference implementation of the entry and goal stores
// ABOUTME: Backs tests and the demo binary; publishes snapshots through watch channels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! In-memory stores
//!
//! Mutations take the write lock, adjust the authoritative collection, and
//! publish a cloned snapshot. The ascending-by-time invariant of the entry
//! series is maintained here so downstream derivations never re-sort.

use async_trait::async_trait;
use pondus_core::errors::{AppError, AppResult};
use pondus_core::models::{Goal, WeightEntry};
use tokio::sync::{watch, RwLock};

use super::{EntryStore, GoalStore};

/// In-memory entry store
pub struct InMemoryEntryStore {
    entries: RwLock<Vec<WeightEntry>>,
    tx: watch::Sender<Vec<WeightEntry>>,
}

impl InMemoryEntryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Vec::new());
        Self {
            entries: RwLock::new(Vec::new()),
            tx,
        }
    }
}

impl Default for InMemoryEntryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntryStore for InMemoryEntryStore {
    fn observe_all(&self) -> watch::Receiver<Vec<WeightEntry>> {
        self.tx.subscribe()
    }

    async fn insert(&self, entry: WeightEntry) -> AppResult<()> {
        let mut entries = self.entries.write().await;
        entries.push(entry);
        entries.sort_by_key(|existing| existing.recorded_at);
        self.tx.send_replace(entries.clone());
        Ok(())
    }

    async fn update(&self, entry: WeightEntry) -> AppResult<()> {
        let mut entries = self.entries.write().await;
        let Some(slot) = entries.iter_mut().find(|existing| existing.id == entry.id) else {
            return Err(AppError::EntryNotFound { id: entry.id });
        };
        *slot = entry;
        entries.sort_by_key(|existing| existing.recorded_at);
        self.tx.send_replace(entries.clone());
        Ok(())
    }
}

/// In-memory goal store holding at most one active goal
pub struct InMemoryGoalStore {
    goal: RwLock<Option<Goal>>,
    tx: watch::Sender<Option<Goal>>,
}

impl InMemoryGoalStore {
    /// Create a store with no active goal
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            goal: RwLock::new(None),
            tx,
        }
    }
}

impl Default for InMemoryGoalStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GoalStore for InMemoryGoalStore {
    fn observe_latest(&self) -> watch::Receiver<Option<Goal>> {
        self.tx.subscribe()
    }

    async fn insert(&self, goal: Goal) -> AppResult<()> {
        let mut active = self.goal.write().await;
        *active = Some(goal.clone());
        self.tx.send_replace(Some(goal));
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        let mut active = self.goal.write().await;
        *active = None;
        self.tx.send_replace(None);
        Ok(())
    }
}
