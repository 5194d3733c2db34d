// ABOUTME: Population reports built on the aggregation engine: overview, profile, analytics, statistics
// ABOUTME: Also the monthly report, return-to-play summary, and export summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Injury Insight Contributors
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Safe: means of day counts are small and non-negative

//! # Population Reports
//!
//! Each report is a plain serializable struct computed on demand from the
//! athlete collection. Grouped sections reuse [`AggregationEngine`] and are
//! rounded only when the report is assembled.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use injury_core::constants::risk::HIGH_RISK_SCORE;
use injury_core::errors::{AppError, AppResult};
use injury_core::models::{Athlete, InjurySeverity, RecoveryStatus};
use injury_core::rounding::round_to;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregation::{
    AggregateRow, AggregateTable, AggregationEngine, CategoryCount, CorrelationReport, GroupField,
    MetricSpec, NumericField, Reducer,
};
use crate::insight::{AthleteInsight, InsightGenerator};
use crate::risk_model::{ImpactTier, RiskFactor};
use crate::statistics::StatisticalAnalyzer;

/// Most recent injuries shown on the overview
const RECENT_INJURIES: usize = 8;
/// Similar athletes shown on a profile
const SIMILAR_ATHLETES: usize = 6;
/// Rows in the top-N analytics sections
const ANALYTICS_TOP: usize = 15;
/// Recovered performers listed in the return-to-play summary
const TOP_PERFORMERS: usize = 8;

/// Profile age above which age is flagged
const PROFILE_AGE_THRESHOLD: u32 = 32;
/// Profile surgery count above which surgical history is flagged
const PROFILE_SURGERY_THRESHOLD: u32 = 2;
/// Profile weekly hours above which training load is flagged
const PROFILE_TRAINING_THRESHOLD: u32 = 35;
/// Profile BMI above which weight is flagged
const PROFILE_BMI_THRESHOLD: f64 = 28.0;
/// Profile career injuries above which history is flagged
const PROFILE_INJURY_THRESHOLD: u32 = 5;

/// Compact athlete reference used in lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteSummary {
    /// Athlete ID
    pub id: String,
    /// Full name
    pub name: String,
    /// Sport label
    pub sport: String,
    /// Position
    pub position: String,
    /// Team
    pub team: String,
    /// Stored risk score
    pub risk_score: f64,
    /// Performance index
    pub performance_index: f64,
    /// Fitness level
    pub fitness_level: f64,
}

impl From<&Athlete> for AthleteSummary {
    fn from(athlete: &Athlete) -> Self {
        Self {
            id: athlete.id.clone(),
            name: athlete.full_name(),
            sport: athlete.sport.as_str().to_owned(),
            position: athlete.position.clone(),
            team: athlete.team.clone(),
            risk_score: athlete.risk_score,
            performance_index: athlete.performance_index,
            fitness_level: athlete.fitness_level,
        }
    }
}

/// A current injury on the overview feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjurySnapshot {
    /// Athlete ID
    pub athlete_id: String,
    /// Full name
    pub name: String,
    /// Sport label
    pub sport: String,
    /// Injury name
    pub injury: String,
    /// Severity, if recorded
    pub severity: Option<InjurySeverity>,
    /// Days since the injury
    pub days_ago: u32,
}

/// Dashboard overview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    /// Athletes in the population
    pub total_athletes: usize,
    /// Distinct sports
    pub total_sports: usize,
    /// Distinct countries
    pub total_countries: usize,
    /// Distinct teams
    pub total_teams: usize,
    /// Currently injured athletes
    pub injured_athletes: usize,
    /// Mean risk score, two decimals
    pub avg_risk_score: f64,
    /// Athletes above the high-risk score
    pub high_risk_athletes: usize,
    /// Mean age, one decimal
    pub avg_age: f64,
    /// Athletes per sport
    pub sport_distribution: Vec<CategoryCount>,
    /// Current injuries per severity
    pub severity_distribution: Vec<CategoryCount>,
    /// Athletes per risk bucket
    pub risk_distribution: Vec<CategoryCount>,
    /// Most recent current injuries
    pub recent_injuries: Vec<InjurySnapshot>,
}

/// Single athlete profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteProfile {
    /// The record
    pub athlete: Athlete,
    /// Career injuries per professional year, two decimals
    pub injury_rate: f64,
    /// Same sport and position, excluding the athlete
    pub similar_athletes: Vec<AthleteSummary>,
    /// Profile risk flags
    pub risk_factors: Vec<RiskFactor>,
}

/// Analytics dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsDashboard {
    /// Per sport: career injuries sum, risk mean, days missed sum
    pub injury_by_sport: AggregateTable,
    /// Most common current injuries
    pub injury_distribution: Vec<CategoryCount>,
    /// Current injuries per severity
    pub severity_distribution: Vec<CategoryCount>,
    /// Mean career injuries per age band
    pub injury_by_age: AggregateTable,
    /// Athletes per recovery status
    pub recovery_status_distribution: Vec<CategoryCount>,
    /// Athletes per risk bucket
    pub risk_distribution: Vec<CategoryCount>,
    /// Per treatment: mean rehabilitation progress and days missed
    pub treatment_effectiveness: AggregateTable,
    /// Sport and position pairs with the highest mean risk
    pub top_risk_positions: Vec<AggregateRow>,
    /// Per gender: mean career injuries, risk and fitness
    pub gender_comparison: AggregateTable,
}

/// Scalar descriptive statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveStats {
    /// Athletes
    pub total_athletes: usize,
    /// Mean age
    pub avg_age: f64,
    /// Sample standard deviation of age
    pub std_age: f64,
    /// Mean height
    pub avg_height: f64,
    /// Mean weight
    pub avg_weight: f64,
    /// Mean BMI
    pub avg_bmi: f64,
    /// Mean weekly training hours
    pub avg_training_hours: f64,
    /// Career injuries across the population
    pub total_injuries: u64,
    /// Mean career injuries
    pub avg_injuries_per_athlete: f64,
    /// Mean risk score
    pub avg_risk_score: f64,
    /// Athletes above the high-risk score
    pub high_risk_count: usize,
    /// Currently injured athletes
    pub currently_injured: usize,
    /// Mean days missed
    pub avg_days_missed: f64,
    /// Surgeries across the population
    pub total_surgeries: u64,
    /// Athletes with a chronic condition
    pub chronic_conditions_count: usize,
    /// Mean fitness
    pub avg_fitness: f64,
    /// Mean performance index
    pub avg_performance: f64,
    /// Mean professional years
    pub avg_years_pro: f64,
    /// Salaries across the population
    pub total_salary: u64,
}

/// Athletes of one age
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeCount {
    /// Age in years
    pub age: u32,
    /// Athletes of that age
    pub count: usize,
}

/// Statistics report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsReport {
    /// Scalar statistics
    pub summary: DescriptiveStats,
    /// Career injuries per sport, most first
    pub top_sports: Vec<AggregateRow>,
    /// Most represented countries
    pub country_distribution: Vec<CategoryCount>,
    /// Athletes per gender
    pub gender_distribution: Vec<CategoryCount>,
    /// Per gender: mean career injuries, risk, fitness and age
    pub gender_stats: AggregateTable,
    /// Per treatment: mean rehabilitation progress and patient count
    pub treatment_success: AggregateTable,
    /// Athletes per age, youngest first
    pub age_distribution: Vec<AgeCount>,
    /// Pearson correlations over the full population
    pub correlations: CorrelationReport,
    /// Per sport descriptive statistics
    pub sport_stats: AggregateTable,
}

/// Monthly report with per-sport breakdowns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// Month label, e.g. `June 2025`
    pub month: String,
    /// Athletes
    pub total_athletes: usize,
    /// Currently injured athletes
    pub currently_injured: usize,
    /// Injured share, percent
    pub injury_rate: f64,
    /// Mean risk score
    pub avg_risk_score: f64,
    /// Athletes above the high-risk score
    pub high_risk_count: usize,
    /// Current injuries of Critical severity
    pub critical_cases: usize,
    /// Athletes in recovery
    pub in_recovery: usize,
    /// Fully recovered athletes
    pub fully_recovered: usize,
    /// Mean fitness
    pub avg_fitness: f64,
    /// Mean performance index
    pub avg_performance: f64,
    /// Current injuries per sport and severity
    pub severity_by_sport: AggregateTable,
    /// Per sport injury summary
    pub injury_summary: AggregateTable,
    /// Per treatment outcomes
    pub treatment_outcomes: AggregateTable,
    /// Most represented countries with injuries and mean risk
    pub country_analysis: Vec<AggregateRow>,
    /// Per age band analysis
    pub age_analysis: AggregateTable,
}

/// Return-to-play figures for one sport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportReturnToPlay {
    /// Sport label
    pub sport: String,
    /// Fully recovered athletes
    pub recovered: usize,
    /// Mean performance index of the sport
    pub avg_performance: f64,
    /// Mean fitness of the sport
    pub avg_fitness: f64,
}

/// Return-to-play summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnToPlaySummary {
    /// Fully recovered plus in recovery
    pub total_rtp_cases: usize,
    /// Fully recovered
    pub successful_rtp: usize,
    /// Mean days missed of the fully recovered
    pub avg_recovery_days: u32,
    /// Successful share of the cases, percent
    pub rtp_success_rate: f64,
    /// Per sport figures
    pub sports: Vec<SportReturnToPlay>,
    /// Best recovered performers
    pub top_performers: Vec<AthleteSummary>,
}

/// Export summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSummary {
    /// Athletes
    pub total_athletes: usize,
    /// Sports in first-appearance order
    pub sports: Vec<String>,
    /// Career injuries across the population
    pub total_injuries: u64,
    /// Currently injured athletes
    pub currently_injured: usize,
    /// Mean risk score, three decimals
    pub avg_risk_score: f64,
}

fn metric(field: NumericField, reducer: Reducer) -> MetricSpec {
    MetricSpec::new(field, reducer)
}

fn mean_of(records: &[Athlete], field: NumericField) -> f64 {
    StatisticalAnalyzer::mean(records.iter().map(|athlete| field.value(athlete)))
}

fn distinct(records: &[Athlete], field: GroupField) -> usize {
    records
        .iter()
        .filter_map(|athlete| field.key(athlete))
        .collect::<BTreeSet<String>>()
        .len()
}

fn high_risk_count(records: &[Athlete]) -> usize {
    records
        .iter()
        .filter(|athlete| athlete.risk_score > HIGH_RISK_SCORE)
        .count()
}

fn injured_count(records: &[Athlete]) -> usize {
    records.iter().filter(|athlete| athlete.is_injured()).count()
}

fn status_count(records: &[Athlete], status: RecoveryStatus) -> usize {
    records
        .iter()
        .filter(|athlete| athlete.recovery_status == status)
        .count()
}

fn top_counts(records: &[Athlete], field: GroupField, n: usize) -> Vec<CategoryCount> {
    let mut counts = AggregationEngine::value_counts(records, field);
    counts.truncate(n);
    counts
}

/// Report builder over an athlete collection
pub struct PopulationReports;

impl PopulationReports {
    /// Dashboard overview
    #[must_use]
    pub fn overview(records: &[Athlete]) -> Overview {
        let mut injured: Vec<&Athlete> = records.iter().filter(|a| a.is_injured()).collect();
        injured.sort_by_key(|athlete| athlete.injury_days_ago.unwrap_or(u32::MAX));
        let recent_injuries = injured
            .into_iter()
            .take(RECENT_INJURIES)
            .map(|athlete| InjurySnapshot {
                athlete_id: athlete.id.clone(),
                name: athlete.full_name(),
                sport: athlete.sport.as_str().to_owned(),
                injury: athlete.current_injury.clone().unwrap_or_default(),
                severity: athlete.injury_severity,
                days_ago: athlete.injury_days_ago.unwrap_or_default(),
            })
            .collect();

        Overview {
            total_athletes: records.len(),
            total_sports: distinct(records, GroupField::Sport),
            total_countries: distinct(records, GroupField::Country),
            total_teams: distinct(records, GroupField::Team),
            injured_athletes: injured_count(records),
            avg_risk_score: round_to(mean_of(records, NumericField::RiskScore), 2),
            high_risk_athletes: high_risk_count(records),
            avg_age: round_to(mean_of(records, NumericField::Age), 1),
            sport_distribution: AggregationEngine::value_counts(records, GroupField::Sport),
            severity_distribution: AggregationEngine::value_counts(
                records,
                GroupField::InjurySeverity,
            ),
            risk_distribution: AggregationEngine::value_counts(records, GroupField::RiskBucket),
            recent_injuries,
        }
    }

    /// Profile of one athlete
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when no athlete has the given ID.
    pub fn athlete_profile(records: &[Athlete], athlete_id: &str) -> AppResult<AthleteProfile> {
        let athlete = records
            .iter()
            .find(|athlete| athlete.id == athlete_id)
            .ok_or_else(|| AppError::not_found("Athlete", athlete_id))?;

        let similar_athletes = records
            .iter()
            .filter(|other| {
                other.sport == athlete.sport
                    && other.position == athlete.position
                    && other.id != athlete.id
            })
            .take(SIMILAR_ATHLETES)
            .map(AthleteSummary::from)
            .collect();

        Ok(AthleteProfile {
            injury_rate: round_to(athlete.injury_rate(), 2),
            similar_athletes,
            risk_factors: Self::profile_risk_factors(athlete),
            athlete: athlete.clone(),
        })
    }

    /// Recommendation cards for one athlete
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown ID.
    pub fn insight(records: &[Athlete], athlete_id: &str) -> AppResult<AthleteInsight> {
        records
            .iter()
            .find(|athlete| athlete.id == athlete_id)
            .map(InsightGenerator::insight)
            .ok_or_else(|| AppError::not_found("Athlete", athlete_id))
    }

    /// Profile risk flags, in evaluation order
    #[must_use]
    pub fn profile_risk_factors(athlete: &Athlete) -> Vec<RiskFactor> {
        let mut factors = Vec::new();
        if athlete.age > PROFILE_AGE_THRESHOLD {
            factors.push(RiskFactor::new(
                "Age above 32",
                ImpactTier::High,
                "Increased injury risk with age",
            ));
        }
        if athlete.previous_surgeries > PROFILE_SURGERY_THRESHOLD {
            factors.push(RiskFactor::new(
                "Multiple previous surgeries",
                ImpactTier::High,
                "History of significant injuries",
            ));
        }
        if athlete.training_hours_weekly > PROFILE_TRAINING_THRESHOLD {
            factors.push(RiskFactor::new(
                "High training load",
                ImpactTier::Medium,
                "Overtraining risk",
            ));
        }
        if athlete.bmi > PROFILE_BMI_THRESHOLD {
            factors.push(RiskFactor::new(
                "Elevated BMI",
                ImpactTier::Medium,
                "Additional stress on joints",
            ));
        }
        if let Some(condition) = &athlete.chronic_condition {
            factors.push(RiskFactor::new(
                format!("Chronic: {condition}"),
                ImpactTier::High,
                "Pre-existing condition",
            ));
        }
        if athlete.total_injuries_career > PROFILE_INJURY_THRESHOLD {
            factors.push(RiskFactor::new(
                "Injury history",
                ImpactTier::Medium,
                "Multiple previous injuries",
            ));
        }
        factors
    }

    /// Analytics dashboard
    #[must_use]
    pub fn analytics(records: &[Athlete]) -> AnalyticsDashboard {
        use NumericField::{
            CareerInjuries, DaysMissed, FitnessLevel, RehabilitationProgress, RiskScore,
        };

        let mean_risk = metric(RiskScore, Reducer::Mean);
        let positions = AggregationEngine::aggregate(
            records,
            &[GroupField::Sport, GroupField::Position],
            &[mean_risk],
        )
        .rounded(3);
        let top_risk_positions = positions
            .top_by(&mean_risk, ANALYTICS_TOP)
            .into_iter()
            .cloned()
            .collect();

        let dashboard = AnalyticsDashboard {
            injury_by_sport: AggregationEngine::aggregate(
                records,
                &[GroupField::Sport],
                &[
                    metric(CareerInjuries, Reducer::Sum),
                    mean_risk,
                    metric(DaysMissed, Reducer::Sum),
                ],
            )
            .rounded(2),
            injury_distribution: top_counts(records, GroupField::CurrentInjury, ANALYTICS_TOP),
            severity_distribution: AggregationEngine::value_counts(
                records,
                GroupField::InjurySeverity,
            ),
            injury_by_age: AggregationEngine::aggregate(
                records,
                &[GroupField::AgeBucket],
                &[metric(CareerInjuries, Reducer::Mean)],
            )
            .rounded(2),
            recovery_status_distribution: AggregationEngine::value_counts(
                records,
                GroupField::RecoveryStatus,
            ),
            risk_distribution: AggregationEngine::value_counts(records, GroupField::RiskBucket),
            treatment_effectiveness: AggregationEngine::aggregate(
                records,
                &[GroupField::TreatmentType],
                &[
                    metric(RehabilitationProgress, Reducer::Mean),
                    metric(DaysMissed, Reducer::Mean),
                ],
            )
            .rounded(1),
            top_risk_positions,
            gender_comparison: AggregationEngine::aggregate(
                records,
                &[GroupField::Gender],
                &[
                    metric(CareerInjuries, Reducer::Mean),
                    mean_risk,
                    metric(FitnessLevel, Reducer::Mean),
                ],
            )
            .rounded(2),
        };
        debug!(records = records.len(), "analytics dashboard computed");
        dashboard
    }

    /// Statistics report
    #[must_use]
    pub fn statistics(records: &[Athlete]) -> StatisticsReport {
        use NumericField::{
            Age, CareerInjuries, FitnessLevel, RehabilitationProgress, RiskScore,
        };

        let ages = StatisticalAnalyzer::summarize(records.iter().map(|a| f64::from(a.age)));
        let summary = DescriptiveStats {
            total_athletes: records.len(),
            avg_age: round_to(ages.mean, 1),
            std_age: round_to(ages.std_dev, 1),
            avg_height: round_to(mean_of(records, NumericField::HeightCm), 1),
            avg_weight: round_to(mean_of(records, NumericField::WeightKg), 1),
            avg_bmi: round_to(mean_of(records, NumericField::Bmi), 1),
            avg_training_hours: round_to(mean_of(records, NumericField::TrainingHours), 1),
            total_injuries: records
                .iter()
                .map(|a| u64::from(a.total_injuries_career))
                .sum(),
            avg_injuries_per_athlete: round_to(mean_of(records, CareerInjuries), 2),
            avg_risk_score: round_to(mean_of(records, RiskScore), 2),
            high_risk_count: high_risk_count(records),
            currently_injured: injured_count(records),
            avg_days_missed: round_to(mean_of(records, NumericField::DaysMissed), 1),
            total_surgeries: records
                .iter()
                .map(|a| u64::from(a.previous_surgeries))
                .sum(),
            chronic_conditions_count: records
                .iter()
                .filter(|a| a.chronic_condition.is_some())
                .count(),
            avg_fitness: round_to(mean_of(records, FitnessLevel), 1),
            avg_performance: round_to(mean_of(records, NumericField::PerformanceIndex), 1),
            avg_years_pro: round_to(mean_of(records, NumericField::YearsProfessional), 1),
            total_salary: records.iter().map(|a| a.salary_usd).sum(),
        };

        let injuries_sum = metric(CareerInjuries, Reducer::Sum);
        let by_sport = AggregationEngine::aggregate(records, &[GroupField::Sport], &[injuries_sum]);
        let top_sports = by_sport
            .top_by(&injuries_sum, by_sport.len())
            .into_iter()
            .cloned()
            .collect();

        let mut age_distribution: Vec<AgeCount> = Vec::new();
        let mut ages_sorted: Vec<u32> = records.iter().map(|a| a.age).collect();
        ages_sorted.sort_unstable();
        for age in ages_sorted {
            match age_distribution.last_mut() {
                Some(last) if last.age == age => last.count += 1,
                _ => age_distribution.push(AgeCount { age, count: 1 }),
            }
        }

        StatisticsReport {
            summary,
            top_sports,
            country_distribution: top_counts(records, GroupField::Country, ANALYTICS_TOP),
            gender_distribution: AggregationEngine::value_counts(records, GroupField::Gender),
            gender_stats: AggregationEngine::aggregate(
                records,
                &[GroupField::Gender],
                &[
                    metric(CareerInjuries, Reducer::Mean),
                    metric(RiskScore, Reducer::Mean),
                    metric(FitnessLevel, Reducer::Mean),
                    metric(Age, Reducer::Mean),
                ],
            )
            .rounded(2),
            treatment_success: AggregationEngine::aggregate(
                records,
                &[GroupField::TreatmentType],
                &[metric(RehabilitationProgress, Reducer::Mean)],
            )
            .rounded(1),
            age_distribution,
            correlations: AggregationEngine::correlations(records).rounded(3),
            sport_stats: AggregationEngine::aggregate(
                records,
                &[GroupField::Sport],
                &[
                    metric(Age, Reducer::Mean),
                    metric(Age, Reducer::Std),
                    metric(CareerInjuries, Reducer::Mean),
                    injuries_sum,
                    metric(RiskScore, Reducer::Mean),
                    metric(RiskScore, Reducer::Std),
                    metric(FitnessLevel, Reducer::Mean),
                ],
            )
            .rounded(2),
        }
    }

    /// Monthly report labelled with the month of `as_of`
    #[must_use]
    pub fn monthly(records: &[Athlete], as_of: NaiveDate) -> MonthlyReport {
        use NumericField::{
            Age, CareerInjuries, DaysMissed, FitnessLevel, PerformanceIndex,
            RehabilitationProgress, RiskScore,
        };

        let currently_injured = injured_count(records);
        let players = metric(Age, Reducer::Count);
        let countries = AggregationEngine::aggregate(
            records,
            &[GroupField::Country],
            &[
                players,
                metric(CareerInjuries, Reducer::Sum),
                metric(RiskScore, Reducer::Mean),
            ],
        )
        .rounded(2);
        let country_analysis = countries
            .top_by(&players, ANALYTICS_TOP)
            .into_iter()
            .cloned()
            .collect();

        MonthlyReport {
            month: as_of.format("%B %Y").to_string(),
            total_athletes: records.len(),
            currently_injured,
            injury_rate: round_to(
                StatisticalAnalyzer::percentage(currently_injured, records.len()),
                1,
            ),
            avg_risk_score: round_to(mean_of(records, RiskScore), 2),
            high_risk_count: high_risk_count(records),
            critical_cases: records
                .iter()
                .filter(|a| a.injury_severity == Some(InjurySeverity::Critical))
                .count(),
            in_recovery: status_count(records, RecoveryStatus::InRecovery),
            fully_recovered: status_count(records, RecoveryStatus::FullyRecovered),
            avg_fitness: round_to(mean_of(records, FitnessLevel), 1),
            avg_performance: round_to(mean_of(records, PerformanceIndex), 1),
            severity_by_sport: AggregationEngine::aggregate(
                records,
                &[GroupField::Sport, GroupField::InjurySeverity],
                &[],
            ),
            injury_summary: AggregationEngine::aggregate(
                records,
                &[GroupField::Sport],
                &[
                    metric(CareerInjuries, Reducer::Sum),
                    metric(CareerInjuries, Reducer::Mean),
                    metric(DaysMissed, Reducer::Sum),
                    metric(DaysMissed, Reducer::Mean),
                    metric(RiskScore, Reducer::Mean),
                    metric(RiskScore, Reducer::Std),
                    metric(RehabilitationProgress, Reducer::Mean),
                ],
            )
            .rounded(2),
            treatment_outcomes: AggregationEngine::aggregate(
                records,
                &[GroupField::TreatmentType],
                &[
                    metric(RehabilitationProgress, Reducer::Mean),
                    metric(RehabilitationProgress, Reducer::Std),
                    metric(DaysMissed, Reducer::Mean),
                    metric(DaysMissed, Reducer::Std),
                ],
            )
            .rounded(1),
            country_analysis,
            age_analysis: AggregationEngine::aggregate(
                records,
                &[GroupField::AgeBucket],
                &[
                    metric(CareerInjuries, Reducer::Mean),
                    metric(RiskScore, Reducer::Mean),
                    metric(FitnessLevel, Reducer::Mean),
                ],
            )
            .rounded(2),
        }
    }

    /// Return-to-play summary
    #[must_use]
    pub fn return_to_play(records: &[Athlete]) -> ReturnToPlaySummary {
        let recovered: Vec<&Athlete> = records
            .iter()
            .filter(|a| a.recovery_status == RecoveryStatus::FullyRecovered)
            .collect();
        let total_rtp_cases = records
            .iter()
            .filter(|a| a.recovery_status.is_return_to_play())
            .count();
        let avg_recovery_days = StatisticalAnalyzer::mean(
            recovered
                .iter()
                .map(|a| f64::from(a.days_missed_current_season)),
        )
        .floor() as u32;

        let performance = metric(NumericField::PerformanceIndex, Reducer::Mean);
        let fitness = metric(NumericField::FitnessLevel, Reducer::Mean);
        let per_sport =
            AggregationEngine::aggregate(records, &[GroupField::Sport], &[performance, fitness]);
        let sports = per_sport
            .rows
            .iter()
            .map(|row| {
                let sport = row.key.first().cloned().unwrap_or_default();
                SportReturnToPlay {
                    recovered: recovered
                        .iter()
                        .filter(|a| a.sport.as_str() == sport)
                        .count(),
                    avg_performance: round_to(row.value(&performance).unwrap_or_default(), 1),
                    avg_fitness: round_to(row.value(&fitness).unwrap_or_default(), 1),
                    sport,
                }
            })
            .collect();

        let mut ranked = recovered.clone();
        ranked.sort_by(|a, b| b.performance_index.total_cmp(&a.performance_index));
        let top_performers = ranked
            .into_iter()
            .take(TOP_PERFORMERS)
            .map(AthleteSummary::from)
            .collect();

        ReturnToPlaySummary {
            total_rtp_cases,
            successful_rtp: recovered.len(),
            avg_recovery_days,
            rtp_success_rate: round_to(
                StatisticalAnalyzer::percentage(recovered.len(), total_rtp_cases),
                1,
            ),
            sports,
            top_performers,
        }
    }

    /// Export summary
    #[must_use]
    pub fn export_summary(records: &[Athlete]) -> ExportSummary {
        let mut sports: Vec<String> = Vec::new();
        for athlete in records {
            let sport = athlete.sport.as_str();
            if !sports.iter().any(|seen| seen == sport) {
                sports.push(sport.to_owned());
            }
        }
        ExportSummary {
            total_athletes: records.len(),
            sports,
            total_injuries: records
                .iter()
                .map(|a| u64::from(a.total_injuries_career))
                .sum(),
            currently_injured: injured_count(records),
            avg_risk_score: round_to(mean_of(records, NumericField::RiskScore), 3),
        }
    }
}
