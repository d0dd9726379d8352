// ABOUTME: Configuration module for the pondus tracker shell
// ABOUTME: Environment-based settings; no configuration files are read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Configuration management
//!
//! Configuration is environment-only: variables named in
//! `pondus_core::constants::env_config` override the compiled defaults.

/// Environment-based configuration loading
pub mod environment;

pub use environment::TrackerConfig;
