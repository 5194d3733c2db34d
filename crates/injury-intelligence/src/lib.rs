// ABOUTME: Injury intelligence algorithms: risk model, statistics, aggregation, financial projection
// ABOUTME: Pure computations over athlete collections with randomness injected by the caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Injury Insight Contributors

#![deny(unsafe_code)]

//! # Injury Intelligence
//!
//! Every entry point here is a synchronous function over an in-memory slice
//! of [`injury_core::models::Athlete`]. Functions that need randomness take
//! `&mut impl rand::Rng`, so the caller decides the seed and two calls with
//! equally seeded generators return identical results.
//!
//! ## Modules
//!
//! - **`risk_model`**: generation and prediction scoring paths, factor explanations
//! - **statistics**: Welford summaries, guarded ratios, Pearson correlation
//! - **aggregation**: grouped rollups, top-N, value counts, correlations
//! - **financial**: cost, ROI, and synthetic trend projection
//! - **reports**: dashboard, profile, analytics, statistics, monthly, return-to-play
//! - **cohort**: high-risk cohort report with seeded re-assessment
//! - **insight**: per-athlete recommendation cards

/// Closed-form injury risk model
pub mod risk_model;

/// Descriptive statistics and correlation
pub mod statistics;

/// Grouped rollups over athlete collections
pub mod aggregation;

/// Financial impact projection
pub mod financial;

/// Population reports
pub mod reports;

/// Risk cohort analysis
pub mod cohort;

/// Per-athlete recommendation cards
pub mod insight;

#[cfg(test)]
mod test_support;
