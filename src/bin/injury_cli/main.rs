// ABOUTME: Injury Insight CLI - command-line access to risk scoring, rollups and projections
// ABOUTME: Parses subcommands, loads configuration and prints results as pretty JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Injury Insight Contributors
//!
//! Usage:
//! ```bash
//! # Population overview
//! injury-insight summary
//!
//! # Recommendation cards for one athlete
//! injury-insight insight PLY00042
//!
//! # Score a prediction form
//! injury-insight predict --sport Football --age 36 --prior-injuries 3 --severity Severe
//!
//! # Mean risk and career injuries by sport and position
//! injury-insight aggregate --by sport,position --metric risk_score:mean --metric total_injuries_career:sum
//!
//! # Injured swimmers, riskiest first
//! injury-insight query --sport Swimming --status injured --sort risk_score --order desc
//!
//! # Financial projection for a different population
//! injury-insight --seed 7 --size 500 financial
//! ```

mod commands;
mod helpers;

use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use injury_insight::config::{LogLevel, ServerConfig};
use injury_insight::logging::LoggingConfig;
use injury_insight::service::AnalyticsService;
use injury_intelligence::aggregation::{GroupField, MetricSpec};
use tracing::debug;

use commands::{reports, PredictArgs, QueryArgs};

#[derive(Parser)]
#[command(
    name = "injury-insight",
    about = "Athlete injury-risk analytics",
    long_about = "Score injury risk, roll up population statistics and project the financial impact of injuries over a reproducible synthetic athlete population."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Population seed override (INJURY_SEED)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Population size override (INJURY_POPULATION_SIZE)
    #[arg(long, global = true)]
    size: Option<usize>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Dashboard overview of the population
    Summary,

    /// Show the effective configuration
    Config,

    /// Score a prediction form
    Predict(PredictArgs),

    /// Profile of one athlete
    Athlete {
        /// Athlete ID, e.g. PLY00042
        id: String,
    },

    /// Recommendation cards for one athlete
    Insight {
        /// Athlete ID, e.g. PLY00042
        id: String,
    },

    /// Grouped rollup over the population
    Aggregate {
        /// Grouping fields, comma-separated
        #[arg(long, value_delimiter = ',', default_value = "sport")]
        by: Vec<GroupField>,

        /// Metric as field:reducer, repeatable
        #[arg(long = "metric")]
        metrics: Vec<MetricSpec>,
    },

    /// Pearson correlations over the whole population
    Correlations,

    /// Analytics dashboard
    Analytics,

    /// Statistics report
    Statistics,

    /// Financial impact projection
    Financial,

    /// High-risk cohorts and simulated re-assessment
    Cohort {
        /// Athletes to re-assess
        #[arg(long)]
        sample: Option<usize>,
    },

    /// Monthly report for the configured month
    Monthly,

    /// Return-to-play summary
    ReturnToPlay,

    /// Export summary
    Export,

    /// Filter, sort and page the athlete list
    Query(QueryArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    LoggingConfig::for_cli(LogLevel::from_verbosity(cli.verbose)).init()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(seed) = cli.seed {
        config.population.seed = seed;
    }
    if let Some(size) = cli.size {
        config.population.size = size;
    }
    config.validate()?;
    debug!("{}", config.summary());

    let service = AnalyticsService::new(config);

    match cli.command {
        Command::Summary => reports::summary(&service)?,
        Command::Config => println!("{}", service.config().summary()),
        Command::Predict(args) => commands::predict(&service, args)?,
        Command::Athlete { id } => reports::athlete(&service, &id)?,
        Command::Insight { id } => reports::insight(&service, &id)?,
        Command::Aggregate { by, metrics } => {
            reports::aggregate(&service, &by, metrics)?;
        }
        Command::Correlations => reports::correlations(&service)?,
        Command::Analytics => reports::analytics(&service)?,
        Command::Statistics => reports::statistics(&service)?,
        Command::Financial => reports::financial(&service)?,
        Command::Cohort { sample } => reports::cohort(&service, sample)?,
        Command::Monthly => reports::monthly(&service)?,
        Command::ReturnToPlay => reports::return_to_play(&service)?,
        Command::Export => reports::export(&service)?,
        Command::Query(args) => commands::query(&service, args)?,
    }

    Ok(())
}

