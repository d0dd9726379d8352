// ABOUTME: Physiological and calendar constants for weight-trend energy calculations
// ABOUTME: Energy equivalence of body-mass change and week-to-day conversion factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Physiological constants for the energy-balance heuristic
//!
//! The engine models weight change as a linear function of cumulative energy
//! surplus or deficit. The constants below are deliberately simple; the
//! platform does not attempt adaptive-thermogenesis or body-composition
//! modeling.

/// Energy equivalence of body-mass change
pub mod energy {
    /// Energy equivalent of one kilogram of body mass (kcal/kg)
    ///
    /// The classic linear approximation for mixed adipose tissue.
    /// Reference: Wishnofsky, M. (1958). "Caloric equivalents of gained or
    /// lost weight." *The American Journal of Clinical Nutrition*, 6(5),
    /// 542-546.
    pub const KCAL_PER_KG: f64 = 7700.0;
}

/// Calendar conversion factors used by rate arithmetic
pub mod time {
    /// Days per week, for weekly-rate to daily-delta conversions
    pub const DAYS_PER_WEEK: f64 = 7.0;

    /// Seconds per day, for fractional-week to calendar-time conversions
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
}
