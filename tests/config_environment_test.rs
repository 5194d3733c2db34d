// ABOUTME: Integration tests for environment-driven configuration loading
// ABOUTME: Covers defaults, malformed INJURY_* variables and range validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Injury Insight Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use chrono::NaiveDate;
use injury_insight::config::{Environment, LogLevel, ServerConfig};
use injury_insight::ErrorCode;
use serial_test::serial;

const INJURY_VARS: [&str; 7] = [
    "INJURY_SEED",
    "INJURY_POPULATION_SIZE",
    "INJURY_INJURED_PROBABILITY",
    "INJURY_PAGE_SIZE",
    "INJURY_PROJECTION_SEED",
    "INJURY_AS_OF",
    "ENVIRONMENT",
];

fn clear_injury_vars() {
    for key in INJURY_VARS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_from_env_uses_defaults_when_unset() {
    clear_injury_vars();

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.population.seed, 42);
    assert_eq!(config.population.size, 2000);
    assert!((config.population.injured_probability - 0.35).abs() < f64::EPSILON);
    assert_eq!(config.query.page_size, 25);
    assert_eq!(config.projection.seed, 7);
}

#[test]
#[serial]
fn test_from_env_reads_overrides() {
    clear_injury_vars();
    env::set_var("INJURY_SEED", "1234");
    env::set_var("INJURY_POPULATION_SIZE", " 300 ");
    env::set_var("INJURY_INJURED_PROBABILITY", "0.5");
    env::set_var("INJURY_PAGE_SIZE", "50");
    env::set_var("INJURY_AS_OF", "2024-02-29");
    env::set_var("ENVIRONMENT", "production");

    let config = ServerConfig::from_env().unwrap();
    clear_injury_vars();

    assert!(config.environment.is_production());
    assert_eq!(config.population.seed, 1234);
    assert_eq!(config.population.size, 300);
    assert_eq!(config.query.page_size, 50);
    assert_eq!(
        config.projection.as_of,
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    );
    assert!(config.summary().contains("300 athletes"));
}

#[test]
#[serial]
fn test_malformed_seed_is_config_error() {
    clear_injury_vars();
    env::set_var("INJURY_SEED", "forty-two");

    let err = ServerConfig::from_env().unwrap_err();
    clear_injury_vars();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.to_string().contains("INJURY_SEED"));
}

#[test]
#[serial]
fn test_probability_above_one_is_rejected() {
    clear_injury_vars();
    env::set_var("INJURY_INJURED_PROBABILITY", "1.5");

    let err = ServerConfig::from_env().unwrap_err();
    clear_injury_vars();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_page_size_bounds() {
    for raw in ["0", "501"] {
        clear_injury_vars();
        env::set_var("INJURY_PAGE_SIZE", raw);
        let err = ServerConfig::from_env().unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid, "page size {raw}");
    }

    env::set_var("INJURY_PAGE_SIZE", "500");
    let config = ServerConfig::from_env().unwrap();
    clear_injury_vars();
    assert_eq!(config.query.page_size, 500);
}

#[test]
#[serial]
fn test_bad_as_of_date_is_rejected() {
    clear_injury_vars();
    env::set_var("INJURY_AS_OF", "15/06/2025");

    let err = ServerConfig::from_env().unwrap_err();
    clear_injury_vars();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.to_string().contains("INJURY_AS_OF"));
}

#[test]
fn test_log_level_from_verbosity() {
    assert_eq!(LogLevel::from_verbosity(0), LogLevel::Info);
    assert_eq!(LogLevel::from_verbosity(1), LogLevel::Debug);
    assert_eq!(LogLevel::from_verbosity(5), LogLevel::Trace);
}
