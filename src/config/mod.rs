// ABOUTME: Configuration module grouping environment-driven runtime settings
// ABOUTME: Re-exports the server configuration, log level and environment types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Injury Insight Contributors

//! Configuration management
//!
//! All settings come from environment variables; there are no config files.

/// Environment variable parsing and validation
pub mod environment;

pub use environment::{
    Environment, LogLevel, PopulationConfig, ProjectionConfig, QueryConfig, ServerConfig,
    DEFAULT_PROJECTION_SEED,
};
