// ABOUTME: Environment configuration for population generation, queries and projections
// ABOUTME: Parses INJURY_* variables into typed settings and validates their ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Injury Insight Contributors

//! Environment-based configuration

use std::env;
use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use injury_core::constants::population::{
    DEFAULT_INJURED_PROBABILITY, DEFAULT_POPULATION_SIZE, DEFAULT_SEED,
};
use injury_core::constants::query::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use injury_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::{info, Level};

/// Seed for the projector's stochastic parts when none is configured
pub const DEFAULT_PROJECTION_SEED: u64 = 7;

/// Date format accepted by `INJURY_AS_OF`
const AS_OF_FORMAT: &str = "%Y-%m-%d";

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational events
    #[default]
    Info,
    /// Debug detail
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(&self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }

    /// Level for a count of `-v` flags, starting from `Info`
    #[must_use]
    pub const fn from_verbosity(verbosity: u8) -> Self {
        match verbosity {
            0 => Self::Info,
            1 => Self::Debug,
            _ => Self::Trace,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a development environment
    #[must_use]
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    /// Check if this is a testing environment
    #[must_use]
    pub const fn is_testing(&self) -> bool {
        matches!(self, Self::Testing)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Synthetic population settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopulationConfig {
    /// Seed for the generation RNG
    pub seed: u64,
    /// Number of athletes to generate
    pub size: usize,
    /// Probability that a generated athlete is currently injured
    pub injured_probability: f64,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            size: DEFAULT_POPULATION_SIZE,
            injured_probability: DEFAULT_INJURED_PROBABILITY,
        }
    }
}

/// List view settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Default page size for athlete lists
    pub page_size: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Financial projection settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Seed for cost synthesis, trend backfill and cohort sampling
    pub seed: u64,
    /// Date the latest trend month is labelled from
    pub as_of: NaiveDate,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_PROJECTION_SEED,
            as_of: Local::now().date_naive(),
        }
    }
}

/// Complete runtime configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Population generation
    pub population: PopulationConfig,
    /// Athlete list queries
    pub query: QueryConfig,
    /// Financial projection
    pub projection: ProjectionConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error when a variable is malformed or a
    /// value falls outside its accepted range.
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            log_level: LogLevel::from_str_or_default(&env_var_or("RUST_LOG", "info")),
            population: PopulationConfig {
                seed: parse_env_or("INJURY_SEED", DEFAULT_SEED)?,
                size: parse_env_or("INJURY_POPULATION_SIZE", DEFAULT_POPULATION_SIZE)?,
                injured_probability: parse_env_or(
                    "INJURY_INJURED_PROBABILITY",
                    DEFAULT_INJURED_PROBABILITY,
                )?,
            },
            query: QueryConfig {
                page_size: parse_env_or("INJURY_PAGE_SIZE", DEFAULT_PAGE_SIZE)?,
            },
            projection: ProjectionConfig {
                seed: parse_env_or("INJURY_PROJECTION_SEED", DEFAULT_PROJECTION_SEED)?,
                as_of: parse_as_of()?,
            },
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate value ranges
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error for an empty population, an injury
    /// probability outside `[0, 1]` or a page size outside `1..=500`.
    pub fn validate(&self) -> AppResult<()> {
        if self.population.size == 0 {
            return Err(AppError::config(
                "INJURY_POPULATION_SIZE must be greater than zero",
            ));
        }

        let probability = self.population.injured_probability;
        if !(0.0..=1.0).contains(&probability) {
            return Err(AppError::config(format!(
                "INJURY_INJURED_PROBABILITY must be between 0 and 1, got {probability}"
            )));
        }

        if !(1..=MAX_PAGE_SIZE).contains(&self.query.page_size) {
            return Err(AppError::config(format!(
                "INJURY_PAGE_SIZE must be between 1 and {MAX_PAGE_SIZE}, got {}",
                self.query.page_size
            )));
        }

        Ok(())
    }

    /// Human-readable configuration summary
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Injury Insight Configuration:\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Population: {} athletes (seed {}, injured probability {})\n\
             - Page Size: {}\n\
             - Projection: seed {} as of {}",
            self.environment,
            self.log_level,
            self.population.size,
            self.population.seed,
            self.population.injured_probability,
            self.query.page_size,
            self.projection.seed,
            self.projection.as_of.format(AS_OF_FORMAT),
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_env_or<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config(format!("Invalid {key} value '{raw}': {e}"))),
        Err(_) => Ok(default),
    }
}

fn parse_as_of() -> AppResult<NaiveDate> {
    match env::var("INJURY_AS_OF") {
        Ok(raw) => NaiveDate::parse_from_str(raw.trim(), AS_OF_FORMAT).map_err(|e| {
            AppError::config(format!(
                "Invalid INJURY_AS_OF value '{raw}' (expected YYYY-MM-DD): {e}"
            ))
        }),
        Err(_) => Ok(Local::now().date_naive()),
    }
}
