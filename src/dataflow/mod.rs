// ABOUTME: Reactive dataflow module: shared derivation nodes and live handles
// ABOUTME: Pure calculations stay in pondus-intelligence; this module only moves snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Reactive dataflow primitives
//!
//! Each derivation is a node holding the latest value of every dependency and
//! recomputing on any dependency update (combine-latest semantics). Nodes are
//! shared: the computation task starts lazily on the first subscription and
//! survives a trailing grace window after the last unsubscribe, so observer
//! churn does not tear derivations down just to rebuild them.
//!
//! Snapshots are immutable and flow through `tokio::sync::watch` channels;
//! there is no in-place mutation anywhere, so no locking beyond the channel
//! internals is needed.

/// Reference-counted shared derivation nodes
pub mod shared;

pub use shared::{Live, Shared};
