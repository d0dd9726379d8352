// ABOUTME: Application constants organized by domain for the pondus platform
// ABOUTME: Derivation window sizes, sharing behavior, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Constants module
//!
//! Application constants grouped by domain rather than collected in a single
//! flat list. Physiological constants (energy equivalence of body mass) live
//! in the intelligence crate next to the algorithms that use them.

/// Derivation window sizes
pub mod windows {
    /// Days included in the trailing average weight window
    pub const TRAILING_AVERAGE_DAYS: i64 = 7;

    /// Maximum complete samples considered by the maintenance estimate
    pub const MAINTENANCE_SAMPLE_CAP: usize = 14;

    /// Minimum complete samples required for a maintenance estimate
    pub const MAINTENANCE_MIN_SAMPLES: usize = 2;
}

/// Live-value sharing behavior
pub mod sharing {
    /// Default trailing-unsubscribe grace window in milliseconds
    ///
    /// A derivation node outlives its last subscriber by this window so that
    /// brief observer churn does not tear down and rebuild the node.
    pub const DEFAULT_SHARE_GRACE_MS: u64 = 5_000;
}

/// Environment variable names understood by the configuration loader
pub mod env_config {
    /// Override for the trailing-unsubscribe grace window (milliseconds)
    pub const SHARE_GRACE_MS: &str = "PONDUS_SHARE_GRACE_MS";

    /// Log level override (error|warn|info|debug|trace)
    pub const LOG_LEVEL: &str = "LOG_LEVEL";

    /// Log format override (pretty|compact|json)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}
