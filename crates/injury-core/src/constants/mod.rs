// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Scoring weights, bucket boundaries, cost assumptions, and population catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Injury Insight Contributors

//! Constants module
//!
//! Constants are grouped by the component that owns them. Values that two
//! components must agree on (bucket boundaries, base risk factors) live here
//! so neither side can drift.

/// Name pools, countries, injury types and other generation catalogs
pub mod catalog;

/// Risk model weights and thresholds
pub mod risk {
    /// Sport weight used when a sport name is not in the closed table
    pub const UNKNOWN_SPORT_RISK_WEIGHT: f64 = 0.08;

    /// Age factor below 25
    pub const AGE_FACTOR_UNDER_25: f64 = 0.1;
    /// Age factor from 25 to 29
    pub const AGE_FACTOR_UNDER_30: f64 = 0.2;
    /// Age factor from 30 to 34
    pub const AGE_FACTOR_UNDER_35: f64 = 0.3;
    /// Age factor from 35
    pub const AGE_FACTOR_SENIOR: f64 = 0.4;

    /// Contribution of each prior injury
    pub const INJURY_FACTOR_PER_INJURY: f64 = 0.05;
    /// Cap on the prior-injury contribution
    pub const INJURY_FACTOR_CAP: f64 = 0.4;

    /// Contribution of each prior surgery
    pub const SURGERY_ADJUSTMENT_PER_SURGERY: f64 = 0.05;
    /// Cap on the surgery contribution
    pub const SURGERY_ADJUSTMENT_CAP: f64 = 0.15;

    /// Weekly hours above which training load is heavy
    pub const HEAVY_TRAINING_HOURS: u32 = 35;
    /// Weekly hours above which training load is elevated
    pub const ELEVATED_TRAINING_HOURS: u32 = 25;
    /// Heavy training load adjustment
    pub const HEAVY_TRAINING_ADJUSTMENT: f64 = 0.08;
    /// Elevated training load adjustment
    pub const ELEVATED_TRAINING_ADJUSTMENT: f64 = 0.04;

    /// Chronic condition adjustment
    pub const CHRONIC_CONDITION_ADJUSTMENT: f64 = 0.12;

    /// Severe current injury adjustment
    pub const SEVERITY_ADJUSTMENT_SEVERE: f64 = 0.10;
    /// Moderate current injury adjustment
    pub const SEVERITY_ADJUSTMENT_MODERATE: f64 = 0.05;
    /// Minor current injury adjustment
    pub const SEVERITY_ADJUSTMENT_MINOR: f64 = 0.02;

    /// Fitness below which conditioning is poor
    pub const POOR_FITNESS_THRESHOLD: f64 = 60.0;
    /// Fitness below which conditioning needs work
    pub const FAIR_FITNESS_THRESHOLD: f64 = 70.0;
    /// Poor fitness adjustment
    pub const POOR_FITNESS_ADJUSTMENT: f64 = 0.08;
    /// Fair fitness adjustment
    pub const FAIR_FITNESS_ADJUSTMENT: f64 = 0.04;

    /// Contribution of each professional year
    pub const EXPERIENCE_ADJUSTMENT_PER_YEAR: f64 = 0.01;
    /// Cap on the experience contribution
    pub const EXPERIENCE_ADJUSTMENT_CAP: f64 = 0.05;

    /// BMI above which weight adds joint stress
    pub const HIGH_BMI_THRESHOLD: f64 = 28.0;
    /// BMI below which an athlete is underweight
    pub const LOW_BMI_THRESHOLD: f64 = 18.5;
    /// High BMI adjustment
    pub const HIGH_BMI_ADJUSTMENT: f64 = 0.06;
    /// Low BMI adjustment
    pub const LOW_BMI_ADJUSTMENT: f64 = 0.04;

    /// Lower clamp shared by every scoring path
    pub const MIN_RISK_SCORE: f64 = 0.05;
    /// Upper clamp on the prediction path
    pub const MAX_PREDICTED_RISK: f64 = 0.95;
    /// Upper clamp on the generation path
    pub const MAX_GENERATED_RISK: f64 = 1.0;
    /// Upper clamp on cohort re-assessment
    pub const MAX_REASSESSED_RISK: f64 = 0.99;

    /// Prediction-path noise range (low, high)
    pub const PREDICTION_NOISE: (f64, f64) = (-0.05, 0.05);
    /// Generation-path noise range (low, high)
    pub const GENERATION_NOISE: (f64, f64) = (-0.10, 0.20);

    /// Risk percentage at or above which an assessment is Critical
    pub const CRITICAL_PERCENT: f64 = 70.0;
    /// Risk percentage at or above which an assessment is High
    pub const HIGH_PERCENT: f64 = 50.0;
    /// Risk percentage at or above which an assessment is Moderate
    pub const MODERATE_PERCENT: f64 = 30.0;

    /// Score above which an athlete counts as high risk on dashboards
    pub const HIGH_RISK_SCORE: f64 = 0.7;
}

/// Bucket boundaries (right-closed upper bounds, lowest bucket first)
pub mod buckets {
    /// Risk bucket upper bounds: Low, Moderate, High; anything above is Critical
    pub const RISK_BUCKET_UPPER_BOUNDS: [f64; 3] = [0.3, 0.5, 0.7];
    /// Severity bucket upper bounds: Low, Medium, High; anything above is Critical
    pub const SEVERITY_BUCKET_UPPER_BOUNDS: [f64; 3] = [0.3, 0.6, 0.8];
    /// Youngest age that belongs to an age bucket
    pub const MIN_BUCKETED_AGE: u32 = 18;
    /// Age bucket inclusive upper bounds; anything above is the open top bucket
    pub const AGE_BUCKET_UPPER_BOUNDS: [u32; 4] = [22, 27, 32, 37];
}

/// Financial projection assumptions
pub mod costs {
    /// Annual prevention programme cost per athlete
    pub const PREVENTION_COST_PER_ATHLETE: f64 = 2500.0;
    /// Share of injury cost the programme is assumed to remove
    pub const INJURY_REDUCTION_RATE: f64 = 0.30;
    /// Share of cost covered by insurance
    pub const INSURANCE_COVERAGE_RATE: f64 = 0.75;
    /// Lost productivity per recovery day
    pub const PRODUCTIVITY_COST_PER_DAY: f64 = 5000.0;
    /// Industry average cost per injury
    pub const INDUSTRY_AVG_COST_PER_INJURY: f64 = 35_000.0;
    /// Industry average injury rate, percent
    pub const INDUSTRY_AVG_INJURY_RATE: f64 = 35.0;
    /// Medical cost synthesis: risk multiplier
    pub const SYNTHETIC_MEDICAL_RISK_MULTIPLIER: f64 = 15_000.0;
    /// Medical cost synthesis: uniform base range
    pub const SYNTHETIC_MEDICAL_BASE: (f64, f64) = (5000.0, 25_000.0);
    /// Recovery days reported when nobody is injured
    pub const DEFAULT_RECOVERY_DAYS: f64 = 30.0;
    /// Months in the synthetic cost trend
    pub const TREND_MONTHS: usize = 12;
    /// Days between consecutive trend months
    pub const TREND_MONTH_STEP_DAYS: i64 = 30;
    /// Monthly injury multiplier range
    pub const TREND_VOLUME_RANGE: (f64, f64) = (0.7, 1.3);
    /// Injury types listed in the cost ranking
    pub const TOP_INJURY_COSTS: usize = 10;
}

/// Population generation defaults
pub mod population {
    /// Default generation seed
    pub const DEFAULT_SEED: u64 = 42;
    /// Default population size
    pub const DEFAULT_POPULATION_SIZE: usize = 2000;
    /// Default probability that an athlete is currently injured
    pub const DEFAULT_INJURED_PROBABILITY: f64 = 0.35;
    /// Height clamp, centimetres
    pub const HEIGHT_BOUNDS_CM: (f64, f64) = (150.0, 230.0);
    /// Weight clamp, kilograms
    pub const WEIGHT_BOUNDS_KG: (f64, f64) = (45.0, 150.0);
    /// Career injury count clamp
    pub const CAREER_INJURY_BOUNDS: (u32, u32) = (1, 15);
    /// Maximum prior surgeries drawn
    pub const MAX_SURGERIES: u32 = 6;
    /// Athlete ID prefix
    pub const ATHLETE_ID_PREFIX: &str = "PLY";
}

/// Query layer defaults
pub mod query {
    /// Default page size
    pub const DEFAULT_PAGE_SIZE: usize = 25;
    /// Largest accepted page size
    pub const MAX_PAGE_SIZE: usize = 500;
}
