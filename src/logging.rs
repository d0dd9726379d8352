// ABOUTME: Tracing subscriber setup for the pondus shell and binaries
// ABOUTME: Environment-driven level and format selection (pretty, compact, json)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Logging initialization
//!
//! `RUST_LOG` takes precedence when set; otherwise the `LOG_LEVEL` variable
//! (default `info`) seeds the filter. `LOG_FORMAT` selects the output style.

use pondus_core::constants::env_config;
use pondus_core::errors::{AppError, AppResult};
use std::env;
use tracing_subscriber::{fmt, EnvFilter};

/// Output format for the global subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-line output (default)
    Pretty,
    /// Single-line output for dense terminals
    Compact,
    /// Structured JSON for log aggregation
    Json,
}

impl LogFormat {
    /// Parse from the `LOG_FORMAT` environment variable
    #[must_use]
    pub fn from_env() -> Self {
        match env::var(env_config::LOG_FORMAT).as_deref() {
            Ok("json") => Self::Json,
            Ok("compact") => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

/// Install the global tracing subscriber from environment settings
///
/// # Errors
///
/// Returns [`AppError::LoggingSetup`] when a global subscriber is already
/// installed.
pub fn init_from_env() -> AppResult<()> {
    let default_level = env::var(env_config::LOG_LEVEL).unwrap_or_else(|_| "info".to_owned());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = fmt().with_env_filter(filter);
    let result = match LogFormat::from_env() {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    result.map_err(|err| AppError::LoggingSetup(err.to_string()))
}
