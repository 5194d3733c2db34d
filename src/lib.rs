// ABOUTME: Main library entry point for the athlete injury-risk analytics platform
// ABOUTME: Provides population generation, the athlete repository, list queries and the analytics facade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Injury Insight Contributors

#![deny(unsafe_code)]

//! # Injury Insight
//!
//! Athlete injury-risk scoring, population analytics and financial impact
//! projection over a reproducible synthetic population.
//!
//! ## Architecture
//!
//! - **`injury_core`**: error taxonomy, category enumerations, the `Athlete`
//!   record, constants and pagination types
//! - **`injury_intelligence`**: risk model, aggregation engine, financial
//!   projector and population reports
//! - **this crate**: the seeded generator, the repository that owns the
//!   population, the query layer and [`service::AnalyticsService`]
//!
//! ## Example
//!
//! ```rust,no_run
//! use injury_insight::config::ServerConfig;
//! use injury_insight::service::AnalyticsService;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let service = AnalyticsService::new(ServerConfig::from_env()?);
//! let projection = service.financial()?;
//! println!("ROI: {}%", projection.roi_percentage);
//! # Ok(())
//! # }
//! ```

/// Environment-driven configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Seeded synthetic population generator
pub mod generator;

/// In-memory athlete repository with atomic swaps
pub mod repository;

/// Filter, sort and paginate athlete lists
pub mod query;

/// Analytics facade consumed by presentation code
pub mod service;

pub use injury_core::errors::{AppError, AppResult, ErrorCode};
pub use injury_core::models::Athlete;
