// ABOUTME: Risk cohort report: high-risk roster, sport and position risk, injury probability
// ABOUTME: Includes a seeded re-assessment of sampled athletes with scaled adjustments and priorities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Injury Insight Contributors

use injury_core::constants::risk::{HIGH_RISK_SCORE, MAX_REASSESSED_RISK};
use injury_core::models::Athlete;
use injury_core::rounding::round_to;
use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregation::{
    AggregateRow, AggregationEngine, GroupField, MetricSpec, NumericField, Reducer,
};
use crate::reports::AthleteSummary;
use crate::risk_model::Priority;
use crate::statistics::StatisticalAnalyzer;

/// High-risk athletes listed
const HIGH_RISK_SHOWN: usize = 25;
/// Sport and position pairs listed
const POSITION_RISK_SHOWN: usize = 20;
/// Athletes sampled for re-assessment
pub const REASSESSMENT_SAMPLE: usize = 100;
/// Re-assessments listed
const REASSESSMENT_SHOWN: usize = 50;
/// Age band edges; each band is `(lower, upper]`
const AGE_RISK_BAND_EDGES: [u32; 7] = [17, 22, 25, 28, 32, 36, 45];
/// Range of the factor applied to the summed adjustments
const ADJUSTMENT_SCALE: (f64, f64) = (0.5, 1.0);

/// Re-assessment thresholds: (predicted risk above, priority, recommendation)
const PRIORITY_BANDS: [(f64, Priority, &str); 3] = [
    (0.8, Priority::Critical, "Immediate attention required"),
    (0.6, Priority::High, "Close monitoring recommended"),
    (0.4, Priority::Medium, "Regular check-ups advised"),
];

/// A weighted adjustment applied during re-assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedFactor {
    /// Factor name
    pub factor: String,
    /// Adjustment weight
    pub weight: f64,
}

/// Re-assessed risk of one athlete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reassessment {
    /// Athlete ID
    pub athlete_id: String,
    /// Full name
    pub name: String,
    /// Sport label
    pub sport: String,
    /// Position
    pub position: String,
    /// Stored risk score
    pub current_risk: f64,
    /// Re-assessed risk, three decimals
    pub predicted_risk: f64,
    /// Change from the stored score, three decimals
    pub risk_change: f64,
    /// Adjustments that applied
    pub risk_factors: Vec<WeightedFactor>,
    /// Follow-up recommendation
    pub recommendation: String,
    /// Follow-up priority
    pub priority: Priority,
}

/// Risk statistics of one sport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportRisk {
    /// Sport label
    pub sport: String,
    /// Mean risk
    pub avg_risk: f64,
    /// Sample standard deviation of risk
    pub std_risk: f64,
    /// Highest risk
    pub max_risk: f64,
    /// Career injuries
    pub total_injuries: f64,
}

/// Share of a sport's athletes currently injured
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InjuryProbability {
    /// Sport label
    pub sport: String,
    /// Injured share, percent
    pub percent_injured: f64,
}

/// Mean stored risk of an age band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeRiskBand {
    /// Inclusive age range, e.g. `23-25`
    pub band: String,
    /// Athletes in the band
    pub count: usize,
    /// Mean risk, three decimals; 0 for an empty band
    pub avg_risk: f64,
}

/// Cohort report for the predictions view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskCohortReport {
    /// Athletes above the high-risk score, riskiest first
    pub high_risk_athletes: Vec<AthleteSummary>,
    /// Per sport risk, highest mean first
    pub sport_risk: Vec<SportRisk>,
    /// Sport and position pairs with the highest mean risk
    pub position_risk: Vec<AggregateRow>,
    /// Injured share per sport, highest first
    pub injury_probability: Vec<InjuryProbability>,
    /// Mean risk per age band, youngest first
    pub age_risk: Vec<AgeRiskBand>,
    /// Re-assessed sample, highest predicted risk first
    pub reassessments: Vec<Reassessment>,
}

/// Cohort analyzer
pub struct CohortAnalyzer;

impl CohortAnalyzer {
    /// Adjustments that apply to `athlete`, in evaluation order
    #[must_use]
    pub fn adjustments(athlete: &Athlete) -> Vec<WeightedFactor> {
        let checks = [
            (athlete.age > 32, "Age > 32", 0.10),
            (athlete.previous_surgeries > 2, "Multiple surgeries", 0.12),
            (athlete.training_hours_weekly > 35, "High training load", 0.08),
            (athlete.bmi > 28.0, "Elevated BMI", 0.06),
            (athlete.chronic_condition.is_some(), "Chronic condition", 0.15),
            (athlete.total_injuries_career > 5, "Injury history", 0.10),
            (athlete.fitness_level < 65.0, "Low fitness", 0.08),
        ];
        checks
            .into_iter()
            .filter(|(applies, _, _)| *applies)
            .map(|(_, factor, weight)| WeightedFactor {
                factor: factor.to_owned(),
                weight,
            })
            .collect()
    }

    /// Re-assess one athlete.
    ///
    /// Draws one scale factor even when no adjustment applies so every
    /// athlete consumes the same amount of randomness.
    pub fn reassess<R: Rng + ?Sized>(athlete: &Athlete, rng: &mut R) -> Reassessment {
        let risk_factors = Self::adjustments(athlete);
        let total: f64 = risk_factors.iter().map(|factor| factor.weight).sum();
        let (scale_low, scale_high) = ADJUSTMENT_SCALE;
        let scale = rng.gen_range(scale_low..scale_high);
        let predicted = (athlete.risk_score + total * scale).min(MAX_REASSESSED_RISK);

        let (priority, recommendation) = PRIORITY_BANDS
            .iter()
            .find(|(threshold, _, _)| predicted > *threshold)
            .map_or((Priority::Low, "Standard monitoring"), |(_, priority, text)| {
                (*priority, *text)
            });

        Reassessment {
            athlete_id: athlete.id.clone(),
            name: athlete.full_name(),
            sport: athlete.sport.as_str().to_owned(),
            position: athlete.position.clone(),
            current_risk: athlete.risk_score,
            predicted_risk: round_to(predicted, 3),
            risk_change: round_to(predicted - athlete.risk_score, 3),
            risk_factors,
            recommendation: recommendation.to_owned(),
            priority,
        }
    }

    /// Mean risk per age band; ages outside every band are skipped
    #[must_use]
    pub fn age_risk(records: &[Athlete]) -> Vec<AgeRiskBand> {
        AGE_RISK_BAND_EDGES
            .windows(2)
            .map(|edges| {
                let (lower, upper) = (edges[0], edges[1]);
                let risks: Vec<f64> = records
                    .iter()
                    .filter(|athlete| athlete.age > lower && athlete.age <= upper)
                    .map(|athlete| athlete.risk_score)
                    .collect();
                AgeRiskBand {
                    band: format!("{}-{upper}", lower + 1),
                    count: risks.len(),
                    avg_risk: round_to(StatisticalAnalyzer::mean(risks.iter().copied()), 3),
                }
            })
            .collect()
    }

    /// Build the cohort report, re-assessing up to `sample_size` athletes drawn without replacement
    pub fn report<R: Rng + ?Sized>(
        records: &[Athlete],
        sample_size: usize,
        rng: &mut R,
    ) -> RiskCohortReport {
        let mut high_risk: Vec<&Athlete> = records
            .iter()
            .filter(|athlete| athlete.risk_score > HIGH_RISK_SCORE)
            .collect();
        high_risk.sort_by(|a, b| b.risk_score.total_cmp(&a.risk_score));
        let high_risk_athletes = high_risk
            .into_iter()
            .take(HIGH_RISK_SHOWN)
            .map(AthleteSummary::from)
            .collect();

        let mean_risk = MetricSpec::new(NumericField::RiskScore, Reducer::Mean);
        let std_risk = MetricSpec::new(NumericField::RiskScore, Reducer::Std);
        let max_risk = MetricSpec::new(NumericField::RiskScore, Reducer::Max);
        let injuries = MetricSpec::new(NumericField::CareerInjuries, Reducer::Sum);
        let by_sport = AggregationEngine::aggregate(
            records,
            &[GroupField::Sport],
            &[mean_risk, std_risk, max_risk, injuries],
        )
        .rounded(3);
        let sport_risk = by_sport
            .top_by(&mean_risk, by_sport.len())
            .into_iter()
            .map(|row| SportRisk {
                sport: row.key.first().cloned().unwrap_or_default(),
                avg_risk: row.value(&mean_risk).unwrap_or_default(),
                std_risk: row.value(&std_risk).unwrap_or_default(),
                max_risk: row.value(&max_risk).unwrap_or_default(),
                total_injuries: row.value(&injuries).unwrap_or_default(),
            })
            .collect();

        let positions = AggregationEngine::aggregate(
            records,
            &[GroupField::Sport, GroupField::Position],
            &[mean_risk],
        )
        .rounded(3);
        let position_risk = positions
            .top_by(&mean_risk, POSITION_RISK_SHOWN)
            .into_iter()
            .cloned()
            .collect();

        let mut injury_probability: Vec<InjuryProbability> =
            AggregationEngine::aggregate(records, &[GroupField::Sport], &[])
                .rows
                .into_iter()
                .map(|row| {
                    let sport = row.key.first().cloned().unwrap_or_default();
                    let injured = records
                        .iter()
                        .filter(|a| a.is_injured() && a.sport.as_str() == sport)
                        .count();
                    InjuryProbability {
                        percent_injured: round_to(
                            StatisticalAnalyzer::percentage(injured, row.count),
                            1,
                        ),
                        sport,
                    }
                })
                .collect();
        injury_probability.sort_by(|a, b| b.percent_injured.total_cmp(&a.percent_injured));

        let amount = sample_size.min(records.len());
        let mut reassessments: Vec<Reassessment> = index::sample(rng, records.len(), amount)
            .into_vec()
            .into_iter()
            .map(|i| Self::reassess(&records[i], rng))
            .collect();
        reassessments.sort_by(|a, b| b.predicted_risk.total_cmp(&a.predicted_risk));
        reassessments.truncate(REASSESSMENT_SHOWN);

        debug!(
            records = records.len(),
            sampled = amount,
            "risk cohort report computed"
        );

        RiskCohortReport {
            high_risk_athletes,
            sport_risk,
            position_risk,
            injury_probability,
            age_risk: Self::age_risk(records),
            reassessments,
        }
    }
}
