// ABOUTME: Core types and constants for athlete injury-risk analytics
// ABOUTME: Foundation crate with error handling, category enumerations, athlete model, and pagination
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Injury Insight Contributors

#![deny(unsafe_code)]

//! # Injury Core
//!
//! Foundation crate shared by the intelligence crate and the root package.
//! It holds no randomness and performs no I/O, so it changes rarely and keeps
//! incremental builds of the workspace cheap.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and `ValidationError`
//! - **constants**: scoring weights, bucket boundaries, cost assumptions, catalogs
//! - **models**: `Athlete`, `Sport`, categorical enumerations, buckets
//! - **pagination**: page-number pagination and sort order
//! - **rounding**: presentation rounding

/// Unified error handling system with standard error codes
pub mod errors;

/// Domain constants organized by owning component
pub mod constants;

/// Core data models (Athlete, Sport, categories, buckets)
pub mod models;

/// Page-number pagination for list views
pub mod pagination;

/// Presentation rounding
pub mod rounding;
