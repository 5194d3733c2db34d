// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, seeded populations and a ready analytics service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Injury Insight Contributors
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `injury_insight`

use std::env;
use std::sync::{Arc, Once};

use chrono::NaiveDate;
use injury_insight::config::{PopulationConfig, ProjectionConfig, ServerConfig};
use injury_insight::generator::PopulationGenerator;
use injury_insight::repository::AthleteRepository;
use injury_insight::service::AnalyticsService;
use injury_insight::Athlete;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Population size used by most integration tests
pub const TEST_POPULATION: usize = 2000;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Population settings with the default injury probability
pub fn population_config(seed: u64, size: usize) -> PopulationConfig {
    PopulationConfig {
        seed,
        size,
        ..PopulationConfig::default()
    }
}

/// Generate a population
pub fn population(seed: u64, size: usize) -> Vec<Athlete> {
    PopulationGenerator::new(population_config(seed, size))
        .generate()
        .unwrap()
}

/// Fixed projection date so month labels are stable
pub fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

/// Configuration for a seeded population with a fixed projection date
pub fn test_config(seed: u64, size: usize) -> ServerConfig {
    ServerConfig {
        population: population_config(seed, size),
        projection: ProjectionConfig {
            seed: 7,
            as_of: as_of(),
        },
        ..ServerConfig::default()
    }
}

/// Analytics service over a lazily generated population
pub fn service(seed: u64, size: usize) -> AnalyticsService {
    init_test_logging();
    AnalyticsService::new(test_config(seed, size))
}

/// Analytics service over an explicit collection
pub fn service_with(athletes: Vec<Athlete>) -> AnalyticsService {
    init_test_logging();
    let config = test_config(42, athletes.len().max(1));
    let generator = PopulationGenerator::new(config.population);
    let repository = Arc::new(AthleteRepository::with_athletes(generator, athletes));
    AnalyticsService::with_repository(repository, config)
}
