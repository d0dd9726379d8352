// ABOUTME: Observed store contracts for weight entries and the active goal
// ABOUTME: Storage technology is a collaborator concern; only the interface matters here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Store contracts
//!
//! The engine reads consistent snapshots from observed stores and never
//! mutates them in place. Each `observe_*` receiver always carries the
//! latest snapshot; mutation methods publish a fresh snapshot to every
//! observer. The streams are independent: there is no transactional
//! coupling between the entry and goal stores.

use async_trait::async_trait;
use pondus_core::errors::AppResult;
use pondus_core::models::{Goal, WeightEntry};
use tokio::sync::watch;

/// In-memory reference implementation
pub mod memory;

pub use memory::{InMemoryEntryStore, InMemoryGoalStore};

/// Observed store of weight entries
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Live snapshot of all entries, ascending by recording time
    fn observe_all(&self) -> watch::Receiver<Vec<WeightEntry>>;

    /// Insert a new entry
    ///
    /// # Errors
    ///
    /// Implementations report backend failures; the in-memory store is
    /// infallible here.
    async fn insert(&self, entry: WeightEntry) -> AppResult<()>;

    /// Replace the entry carrying the same id
    ///
    /// # Errors
    ///
    /// Returns [`pondus_core::errors::AppError::EntryNotFound`] when no
    /// entry has the given id.
    async fn update(&self, entry: WeightEntry) -> AppResult<()>;
}

/// Observed store of the single active goal
#[async_trait]
pub trait GoalStore: Send + Sync {
    /// Live view of the active goal, `None` before one is set
    fn observe_latest(&self) -> watch::Receiver<Option<Goal>>;

    /// Set the active goal, replacing any previous one
    ///
    /// # Errors
    ///
    /// Implementations report backend failures; the in-memory store is
    /// infallible here.
    async fn insert(&self, goal: Goal) -> AppResult<()>;

    /// Remove the active goal
    ///
    /// # Errors
    ///
    /// Implementations report backend failures; the in-memory store is
    /// infallible here.
    async fn clear(&self) -> AppResult<()>;
}
