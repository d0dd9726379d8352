// ABOUTME: Environment configuration for the tracker shell
// ABOUTME: Parses sharing-behavior overrides with strict validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Environment-based configuration

use pondus_core::constants::{env_config, sharing};
use pondus_core::errors::{AppError, AppResult};
use std::env;
use std::time::Duration;

/// Runtime configuration for the tracker shell
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Trailing-unsubscribe grace for shared derivation nodes
    ///
    /// A derivation node keeps running for this window after its last
    /// subscriber drops, so brief observer churn does not discard and
    /// rebuild derivations.
    pub share_grace: Duration,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            share_grace: Duration::from_millis(sharing::DEFAULT_SHARE_GRACE_MS),
        }
    }
}

impl TrackerConfig {
    /// Load configuration from the environment
    ///
    /// Missing variables fall back to compiled defaults; present but
    /// unparseable values are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidConfig`] when a variable is set to a value
    /// that cannot be parsed.
    pub fn from_env() -> AppResult<Self> {
        let share_grace = match env::var(env_config::SHARE_GRACE_MS) {
            Ok(raw) => {
                let millis: u64 = raw.parse().map_err(|_| AppError::InvalidConfig {
                    key: env_config::SHARE_GRACE_MS.to_owned(),
                    reason: format!("expected milliseconds, got {raw:?}"),
                })?;
                Duration::from_millis(millis)
            }
            Err(_) => Duration::from_millis(sharing::DEFAULT_SHARE_GRACE_MS),
        };

        Ok(Self { share_grace })
    }
}
