// ABOUTME: Grouped rollups over the athlete collection with count/sum/mean/std/min/max reducers
// ABOUTME: Also provides stable top-N rankings, value counts, and population-wide Pearson correlations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Injury Insight Contributors
#![allow(clippy::cast_precision_loss)] // Safe: counts and salaries stay below 2^52

//! # Aggregation Engine
//!
//! `aggregate(records, group_by, metrics)` groups athletes by one or more
//! categorical fields and reduces numeric fields per group. Keys are the
//! display labels of the grouped values, in `group_by` order. Records whose
//! value is missing for a grouping field (no current injury, under-18 age
//! band) are left out of that rollup.
//!
//! Values are unrounded; call [`AggregateTable::rounded`] at the presentation
//! boundary.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use injury_core::errors::ValidationError;
use injury_core::models::Athlete;
use injury_core::rounding::round_to;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::statistics::{StatisticalAnalyzer, Summary};

/// Categorical fields an athlete collection can be grouped by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupField {
    /// Sport
    Sport,
    /// Playing position
    Position,
    /// Team or circuit
    Team,
    /// Country of origin
    Country,
    /// Gender
    Gender,
    /// Age band (under-18s excluded)
    AgeBucket,
    /// Risk bucket of the stored score
    RiskBucket,
    /// Financial severity bucket of the stored score
    SeverityBucket,
    /// Current injury severity (healthy athletes excluded)
    InjurySeverity,
    /// Treatment type
    TreatmentType,
    /// Recovery status
    RecoveryStatus,
    /// Current injury name (healthy athletes excluded)
    CurrentInjury,
}

impl GroupField {
    /// Every groupable field
    pub const ALL: [Self; 12] = [
        Self::Sport,
        Self::Position,
        Self::Team,
        Self::Country,
        Self::Gender,
        Self::AgeBucket,
        Self::RiskBucket,
        Self::SeverityBucket,
        Self::InjurySeverity,
        Self::TreatmentType,
        Self::RecoveryStatus,
        Self::CurrentInjury,
    ];

    /// Field name used in keys and CLI arguments
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sport => "sport",
            Self::Position => "position",
            Self::Team => "team",
            Self::Country => "country",
            Self::Gender => "gender",
            Self::AgeBucket => "age_bucket",
            Self::RiskBucket => "risk_bucket",
            Self::SeverityBucket => "severity_bucket",
            Self::InjurySeverity => "injury_severity",
            Self::TreatmentType => "treatment_type",
            Self::RecoveryStatus => "recovery_status",
            Self::CurrentInjury => "current_injury",
        }
    }

    /// Grouping label of `athlete`, `None` when the record has no value
    #[must_use]
    pub fn key(self, athlete: &Athlete) -> Option<String> {
        match self {
            Self::Sport => Some(athlete.sport.as_str().to_owned()),
            Self::Position => Some(athlete.position.clone()),
            Self::Team => Some(athlete.team.clone()),
            Self::Country => Some(athlete.country.clone()),
            Self::Gender => Some(athlete.gender.as_str().to_owned()),
            Self::AgeBucket => athlete.age_bucket().map(|bucket| bucket.as_str().to_owned()),
            Self::RiskBucket => Some(athlete.risk_bucket().as_str().to_owned()),
            Self::SeverityBucket => Some(athlete.severity_bucket().as_str().to_owned()),
            Self::InjurySeverity => athlete
                .injury_severity
                .map(|severity| severity.as_str().to_owned()),
            Self::TreatmentType => Some(athlete.treatment_type.as_str().to_owned()),
            Self::RecoveryStatus => Some(athlete.recovery_status.as_str().to_owned()),
            Self::CurrentInjury => athlete.current_injury.clone(),
        }
    }
}

impl fmt::Display for GroupField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ValidationError::unknown_category("group field", trimmed))
    }
}

/// Numeric athlete fields that can be reduced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericField {
    /// Age in years
    Age,
    /// Height in centimetres
    HeightCm,
    /// Weight in kilograms
    WeightKg,
    /// Body mass index
    Bmi,
    /// Years as a professional
    YearsProfessional,
    /// Weekly training hours
    TrainingHours,
    /// Career injury count
    CareerInjuries,
    /// Days missed this season
    DaysMissed,
    /// Stored risk score
    RiskScore,
    /// Fitness level
    FitnessLevel,
    /// Performance index
    PerformanceIndex,
    /// Rehabilitation progress
    RehabilitationProgress,
    /// Prior surgeries
    PreviousSurgeries,
    /// Salary in USD
    SalaryUsd,
    /// Expected recovery days
    RecoveryDays,
    /// Medical cost
    MedicalCost,
    /// Lost productivity cost
    LostProductivityCost,
}

impl NumericField {
    /// Every numeric field
    pub const ALL: [Self; 17] = [
        Self::Age,
        Self::HeightCm,
        Self::WeightKg,
        Self::Bmi,
        Self::YearsProfessional,
        Self::TrainingHours,
        Self::CareerInjuries,
        Self::DaysMissed,
        Self::RiskScore,
        Self::FitnessLevel,
        Self::PerformanceIndex,
        Self::RehabilitationProgress,
        Self::PreviousSurgeries,
        Self::SalaryUsd,
        Self::RecoveryDays,
        Self::MedicalCost,
        Self::LostProductivityCost,
    ];

    /// Field name used in metric labels and CLI arguments
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::HeightCm => "height_cm",
            Self::WeightKg => "weight_kg",
            Self::Bmi => "bmi",
            Self::YearsProfessional => "years_professional",
            Self::TrainingHours => "training_hours_weekly",
            Self::CareerInjuries => "total_injuries_career",
            Self::DaysMissed => "days_missed_current_season",
            Self::RiskScore => "risk_score",
            Self::FitnessLevel => "fitness_level",
            Self::PerformanceIndex => "performance_index",
            Self::RehabilitationProgress => "rehabilitation_progress",
            Self::PreviousSurgeries => "previous_surgeries",
            Self::SalaryUsd => "salary_usd",
            Self::RecoveryDays => "recovery_days",
            Self::MedicalCost => "medical_cost",
            Self::LostProductivityCost => "lost_productivity_cost",
        }
    }

    /// Value of this field on `athlete`
    #[must_use]
    pub fn value(self, athlete: &Athlete) -> f64 {
        match self {
            Self::Age => f64::from(athlete.age),
            Self::HeightCm => athlete.height_cm,
            Self::WeightKg => athlete.weight_kg,
            Self::Bmi => athlete.bmi,
            Self::YearsProfessional => f64::from(athlete.years_professional),
            Self::TrainingHours => f64::from(athlete.training_hours_weekly),
            Self::CareerInjuries => f64::from(athlete.total_injuries_career),
            Self::DaysMissed => f64::from(athlete.days_missed_current_season),
            Self::RiskScore => athlete.risk_score,
            Self::FitnessLevel => athlete.fitness_level,
            Self::PerformanceIndex => athlete.performance_index,
            Self::RehabilitationProgress => athlete.rehabilitation_progress,
            Self::PreviousSurgeries => f64::from(athlete.previous_surgeries),
            Self::SalaryUsd => athlete.salary_usd as f64,
            Self::RecoveryDays => f64::from(athlete.recovery_days),
            Self::MedicalCost => athlete.medical_cost,
            Self::LostProductivityCost => athlete.lost_productivity_cost,
        }
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NumericField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ValidationError::unknown_category("numeric field", trimmed))
    }
}

/// Reduction applied to a numeric field within a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reducer {
    /// Number of records
    Count,
    /// Sum
    Sum,
    /// Arithmetic mean
    Mean,
    /// Sample standard deviation
    Std,
    /// Minimum
    Min,
    /// Maximum
    Max,
}

impl Reducer {
    /// Every reducer
    pub const ALL: [Self; 6] = [
        Self::Count,
        Self::Sum,
        Self::Mean,
        Self::Std,
        Self::Min,
        Self::Max,
    ];

    /// Reducer name used in metric labels
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::Sum => "sum",
            Self::Mean => "mean",
            Self::Std => "std",
            Self::Min => "min",
            Self::Max => "max",
        }
    }

    /// Pick this reducer's value out of a summary
    #[must_use]
    pub fn apply(self, summary: &Summary) -> f64 {
        match self {
            Self::Count => summary.count as f64,
            Self::Sum => summary.sum,
            Self::Mean => summary.mean,
            Self::Std => summary.std_dev,
            Self::Min => summary.min,
            Self::Max => summary.max,
        }
    }
}

impl FromStr for Reducer {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|reducer| reducer.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ValidationError::unknown_category("reducer", trimmed))
    }
}

/// A numeric field paired with the reducer to apply to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetricSpec {
    /// Field to reduce
    pub field: NumericField,
    /// Reduction
    pub reducer: Reducer,
}

impl MetricSpec {
    /// Pair a field with a reducer
    #[must_use]
    pub const fn new(field: NumericField, reducer: Reducer) -> Self {
        Self { field, reducer }
    }

    /// Column label, e.g. `risk_score_mean`
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}_{}", self.field.as_str(), self.reducer.as_str())
    }
}

impl FromStr for MetricSpec {
    type Err = ValidationError;

    /// Parse `field:reducer`, e.g. `risk_score:mean`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, reducer) = s
            .split_once(':')
            .ok_or_else(|| ValidationError::unknown_category("metric", s.trim()))?;
        Ok(Self::new(field.parse()?, reducer.parse()?))
    }
}

/// One group of an aggregation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateRow {
    /// Group labels, one per grouping field
    pub key: Vec<String>,
    /// Records in the group
    pub count: usize,
    /// Reduced values keyed by metric label
    pub values: BTreeMap<String, f64>,
}

impl AggregateRow {
    /// Reduced value for a metric
    #[must_use]
    pub fn value(&self, metric: &MetricSpec) -> Option<f64> {
        self.values.get(&metric.label()).copied()
    }
}

/// Result of an aggregation, rows ordered by key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateTable {
    /// Grouping fields, in key order
    pub group_by: Vec<GroupField>,
    /// One row per non-empty group
    pub rows: Vec<AggregateRow>,
}

impl AggregateTable {
    /// Row for a key
    #[must_use]
    pub fn get(&self, key: &[&str]) -> Option<&AggregateRow> {
        self.rows.iter().find(|row| {
            row.key.len() == key.len() && row.key.iter().zip(key).all(|(a, b)| a == b)
        })
    }

    /// Number of groups
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no group was produced
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Top `n` rows by a metric, descending; ties keep key order
    #[must_use]
    pub fn top_by(&self, metric: &MetricSpec, n: usize) -> Vec<&AggregateRow> {
        let label = metric.label();
        let mut ranked: Vec<&AggregateRow> = self.rows.iter().collect();
        ranked.sort_by(|a, b| {
            let left = a.values.get(&label).copied().unwrap_or(f64::NEG_INFINITY);
            let right = b.values.get(&label).copied().unwrap_or(f64::NEG_INFINITY);
            right.total_cmp(&left)
        });
        ranked.truncate(n);
        ranked
    }

    /// Copy with every value rounded for presentation
    #[must_use]
    pub fn rounded(&self, decimals: i32) -> Self {
        Self {
            group_by: self.group_by.clone(),
            rows: self
                .rows
                .iter()
                .map(|row| AggregateRow {
                    key: row.key.clone(),
                    count: row.count,
                    values: row
                        .values
                        .iter()
                        .map(|(label, value)| (label.clone(), round_to(*value, decimals)))
                        .collect(),
                })
                .collect(),
        }
    }
}

/// A categorical value and how often it occurs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    /// Category label
    pub value: String,
    /// Occurrences
    pub count: usize,
}

/// Pearson correlations between numeric field pairs over the full collection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrelationReport {
    /// Age vs career injuries
    pub age_injuries: f64,
    /// Training hours vs risk score
    pub training_risk: f64,
    /// BMI vs career injuries
    pub bmi_injuries: f64,
    /// Fitness vs performance index
    pub fitness_performance: f64,
    /// Age vs risk score
    pub age_risk: f64,
    /// Years professional vs career injuries
    pub years_pro_injuries: f64,
}

impl CorrelationReport {
    /// Copy rounded for presentation
    #[must_use]
    pub fn rounded(&self, decimals: i32) -> Self {
        Self {
            age_injuries: round_to(self.age_injuries, decimals),
            training_risk: round_to(self.training_risk, decimals),
            bmi_injuries: round_to(self.bmi_injuries, decimals),
            fitness_performance: round_to(self.fitness_performance, decimals),
            age_risk: round_to(self.age_risk, decimals),
            years_pro_injuries: round_to(self.years_pro_injuries, decimals),
        }
    }
}

/// Aggregation engine
pub struct AggregationEngine;

impl AggregationEngine {
    /// Group `records` and reduce each metric per group.
    ///
    /// An empty collection gives an empty table. With no grouping fields the
    /// whole collection forms one group with an empty key.
    #[must_use]
    pub fn aggregate(
        records: &[Athlete],
        group_by: &[GroupField],
        metrics: &[MetricSpec],
    ) -> AggregateTable {
        let mut groups: BTreeMap<Vec<String>, Vec<&Athlete>> = BTreeMap::new();
        for athlete in records {
            let key: Option<Vec<String>> =
                group_by.iter().map(|field| field.key(athlete)).collect();
            if let Some(key) = key {
                groups.entry(key).or_default().push(athlete);
            }
        }

        let rows: Vec<AggregateRow> = groups
            .into_iter()
            .map(|(key, members)| {
                let values = metrics
                    .iter()
                    .map(|metric| {
                        let summary = StatisticalAnalyzer::summarize(
                            members.iter().map(|athlete| metric.field.value(athlete)),
                        );
                        (metric.label(), metric.reducer.apply(&summary))
                    })
                    .collect();
                AggregateRow {
                    key,
                    count: members.len(),
                    values,
                }
            })
            .collect();

        debug!(
            records = records.len(),
            groups = rows.len(),
            metrics = metrics.len(),
            "aggregation complete"
        );

        AggregateTable {
            group_by: group_by.to_vec(),
            rows,
        }
    }

    /// Occurrences per value of `field`, most frequent first; ties keep label order
    #[must_use]
    pub fn value_counts(records: &[Athlete], field: GroupField) -> Vec<CategoryCount> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for athlete in records {
            if let Some(value) = field.key(athlete) {
                *counts.entry(value).or_insert(0) += 1;
            }
        }
        let mut ranked: Vec<CategoryCount> = counts
            .into_iter()
            .map(|(value, count)| CategoryCount { value, count })
            .collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }

    /// Top `n` athletes by `field`, descending; ties keep original record order
    #[must_use]
    pub fn top_n(records: &[Athlete], field: NumericField, n: usize) -> Vec<&Athlete> {
        let mut ranked: Vec<&Athlete> = records.iter().collect();
        ranked.sort_by(|a, b| field.value(b).total_cmp(&field.value(a)));
        ranked.truncate(n);
        ranked
    }

    /// Pearson correlation between two numeric fields over every record
    #[must_use]
    pub fn correlation(records: &[Athlete], x: NumericField, y: NumericField) -> f64 {
        let pairs: Vec<(f64, f64)> = records
            .iter()
            .map(|athlete| (x.value(athlete), y.value(athlete)))
            .collect();
        StatisticalAnalyzer::pearson(&pairs)
    }

    /// The six standard correlations
    #[must_use]
    pub fn correlations(records: &[Athlete]) -> CorrelationReport {
        use NumericField::{
            Age, Bmi, CareerInjuries, FitnessLevel, PerformanceIndex, RiskScore, TrainingHours,
            YearsProfessional,
        };
        CorrelationReport {
            age_injuries: Self::correlation(records, Age, CareerInjuries),
            training_risk: Self::correlation(records, TrainingHours, RiskScore),
            bmi_injuries: Self::correlation(records, Bmi, CareerInjuries),
            fitness_performance: Self::correlation(records, FitnessLevel, PerformanceIndex),
            age_risk: Self::correlation(records, Age, RiskScore),
            years_pro_injuries: Self::correlation(records, YearsProfessional, CareerInjuries),
        }
    }
}
