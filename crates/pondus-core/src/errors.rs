// ABOUTME: Error types for store mutations, configuration, and logging setup
// ABOUTME: The derivation core itself never errors; absence propagates as Option
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Error Types
//!
//! The derivation pipeline has no throwing taxonomy: insufficient data, zero
//! time spans, and absent optional fields all propagate as `Option::None`
//! through every computation stage. `AppError` exists for the surfaces around
//! the core that can genuinely fail: store mutations, environment
//! configuration, and logging initialization.

use thiserror::Error;
use uuid::Uuid;

/// Application error for the fallible shell surfaces
#[derive(Debug, Error)]
pub enum AppError {
    /// An update referenced an entry id that is not in the store
    #[error("weight entry not found: {id}")]
    EntryNotFound {
        /// Id carried by the rejected update
        id: Uuid,
    },

    /// An environment configuration value could not be parsed
    #[error("invalid configuration for {key}: {reason}")]
    InvalidConfig {
        /// Environment variable name
        key: String,
        /// Why the value was rejected
        reason: String,
    },

    /// The global tracing subscriber could not be installed
    #[error("logging setup failed: {0}")]
    LoggingSetup(String),
}

/// Convenience alias used across the workspace
pub type AppResult<T> = Result<T, AppError>;
