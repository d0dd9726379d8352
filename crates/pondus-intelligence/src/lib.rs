// ABOUTME: Weight-series aggregation and goal-projection algorithms for pondus
// ABOUTME: Pure, synchronous derivations with no I/O and no hidden clock access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Pondus Intelligence
//!
//! The derivation engine for the pondus weight-trend platform: pure functions
//! that turn an ordered series of weigh-in entries plus a declarative goal
//! into trailing averages, a maintenance calorie estimate, and a goal
//! projection.
//!
//! Every function that depends on the current instant receives `now` as a
//! parameter, so derivations are deterministic and reproducible in tests.
//! Absence of data (missing fields, too few samples, zero time spans) flows
//! through as `Option::None` at every stage; nothing here panics or divides
//! by zero.
//!
//! ## Modules
//!
//! - **aggregates**: trailing average and maintenance estimate over the series
//! - **goals**: rate resolution, completion-date estimation, calorie deltas
//! - **projection**: combination of the latest snapshots into one outcome
//! - **physiology**: energy-balance constants used by the heuristics

/// Windowed aggregations over the entry series
pub mod aggregates;

/// Goal rate, date, and calorie derivations
pub mod goals;

/// Physiological and calendar constants for energy calculations
pub mod physiology;

/// Snapshot combination into a full projection outcome
pub mod projection;
