// ABOUTME: Main library entry point for the pondus weight-trend platform
// ABOUTME: Reactive shell around the pure derivation engine in pondus-intelligence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Pondus
//!
//! A weight-trend and goal-projection engine: logged weigh-ins and calorie
//! totals flow from observed stores through a shared derivation dataflow into
//! live values a presentation layer can subscribe to.
//!
//! ## Architecture
//!
//! - **Stores** (`store`): observed collaborator contracts for entries and
//!   the active goal, with an in-memory reference implementation
//! - **Dataflow** (`dataflow`): reference-counted shared derivation nodes
//!   with a trailing-unsubscribe grace window
//! - **Tracker** (`tracker`): the surface combining stores and derivations
//!   into live values and commands
//! - **Intelligence** (`pondus-intelligence`): the pure calculation engine;
//!   everything time-dependent takes `now` as a parameter
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use pondus::config::environment::TrackerConfig;
//! use pondus::store::{InMemoryEntryStore, InMemoryGoalStore};
//! use pondus::tracker::WeightTracker;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = TrackerConfig::from_env()?;
//!     let tracker = WeightTracker::new(
//!         Arc::new(InMemoryEntryStore::new()),
//!         Arc::new(InMemoryGoalStore::new()),
//!         &config,
//!     );
//!     tracker.add_entry(Some(81.4), Some(2150)).await?;
//!     println!("average: {:?}", tracker.seven_day_average().get());
//!     Ok(())
//! }
//! ```

/// Environment-based runtime configuration
pub mod config;

/// Reactive dataflow primitives (shared derivation nodes and live handles)
pub mod dataflow;

/// Tracing-based logging setup
pub mod logging;

/// Observed store contracts and the in-memory reference implementation
pub mod store;

/// The tracker surface combining stores and derivations
pub mod tracker;

pub use pondus_core::{constants, errors, models};
pub use pondus_intelligence as intelligence;
