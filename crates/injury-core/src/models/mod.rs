// ABOUTME: Core data models for the athlete population
// ABOUTME: Re-exports Athlete, Sport, categorical enumerations, and buckets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Injury Insight Contributors

//! # Data Models
//!
//! - `Athlete`: one row of the population
//! - `Sport` / `SportKind`: closed sport table and the free-text prediction input
//! - Categorical enums: `Gender`, `InjurySeverity`, `RecoveryStatus`,
//!   `TreatmentType`, `MedicalClearance`
//! - Buckets: `RiskBucket`, `SeverityBucket`, `AgeBucket`

mod athlete;
mod buckets;
mod categories;
mod sport;

pub use athlete::{body_mass_index, Athlete};
pub use buckets::{AgeBucket, RiskBucket, SeverityBucket};
pub use categories::{Gender, InjurySeverity, MedicalClearance, RecoveryStatus, TreatmentType};
pub use sport::{Sport, SportKind};

#[cfg(test)]
pub(crate) use athlete::fixtures;
