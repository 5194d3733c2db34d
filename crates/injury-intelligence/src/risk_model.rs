// ABOUTME: Closed-form injury risk model with generation and prediction scoring paths
// ABOUTME: Produces bounded scores, factor breakdowns, explanations, and recommendation sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Injury Insight Contributors

//! # Risk Model
//!
//! A weighted heuristic, not a trained model. Three base factors (age, prior
//! injuries, sport) are shared by both call sites:
//!
//! - **Generation path**: base factors plus uniform noise in `[-0.10, 0.20)`,
//!   rounded to two decimals and clamped to `[0.05, 1.0]`.
//! - **Prediction path**: base factors plus additive adjustments (surgery,
//!   training load, chronic condition, current injury, fitness, experience,
//!   BMI) plus uniform noise in `[-0.05, 0.05)`, clamped to `[0.05, 0.95]`.
//!
//! The two noise ranges and upper clamps differ on purpose and are kept apart.

use std::fmt;

use injury_core::constants::population::{HEIGHT_BOUNDS_CM, WEIGHT_BOUNDS_KG};
use injury_core::constants::risk::{
    AGE_FACTOR_SENIOR, AGE_FACTOR_UNDER_25, AGE_FACTOR_UNDER_30, AGE_FACTOR_UNDER_35,
    CHRONIC_CONDITION_ADJUSTMENT, CRITICAL_PERCENT, ELEVATED_TRAINING_ADJUSTMENT,
    ELEVATED_TRAINING_HOURS, EXPERIENCE_ADJUSTMENT_CAP, EXPERIENCE_ADJUSTMENT_PER_YEAR,
    FAIR_FITNESS_ADJUSTMENT, FAIR_FITNESS_THRESHOLD, GENERATION_NOISE, HEAVY_TRAINING_ADJUSTMENT,
    HEAVY_TRAINING_HOURS, HIGH_BMI_ADJUSTMENT, HIGH_BMI_THRESHOLD, HIGH_PERCENT,
    INJURY_FACTOR_CAP, INJURY_FACTOR_PER_INJURY, LOW_BMI_ADJUSTMENT, LOW_BMI_THRESHOLD,
    MAX_GENERATED_RISK, MAX_PREDICTED_RISK, MIN_RISK_SCORE, MODERATE_PERCENT,
    POOR_FITNESS_ADJUSTMENT, POOR_FITNESS_THRESHOLD, PREDICTION_NOISE,
    SURGERY_ADJUSTMENT_CAP, SURGERY_ADJUSTMENT_PER_SURGERY,
};
use injury_core::errors::ValidationError;
use injury_core::models::{body_mass_index, Athlete, InjurySeverity, Sport, SportKind};
use injury_core::rounding::round_to;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Youngest accepted age at the prediction boundary
const MIN_AGE: u32 = 10;
/// Oldest accepted age at the prediction boundary
const MAX_AGE: u32 = 80;
/// Largest accepted professional career
const MAX_YEARS_PROFESSIONAL: u32 = 60;
/// Hours in a week
const MAX_TRAINING_HOURS: u32 = 168;
/// Largest accepted prior injury count
const MAX_PRIOR_INJURIES: u32 = 200;
/// Largest accepted surgery count
const MAX_SURGERIES: u32 = 50;

/// Age above which age is reported as a risk factor
const AGE_FACTOR_REPORT_AGE: u32 = 32;
/// Age above which the age factor is reported as high impact
const AGE_FACTOR_HIGH_IMPACT_AGE: u32 = 35;
/// Prior injuries above which injury history is reported
const INJURY_HISTORY_REPORT_COUNT: u32 = 2;
/// Prior injuries above which injury history is reported as high impact
const INJURY_HISTORY_HIGH_IMPACT_COUNT: u32 = 4;
/// Surgeries above which surgical history is reported as high impact
const SURGERY_HIGH_IMPACT_COUNT: u32 = 1;

/// Age-band base factor
#[must_use]
pub const fn age_factor(age: u32) -> f64 {
    if age < 25 {
        AGE_FACTOR_UNDER_25
    } else if age < 30 {
        AGE_FACTOR_UNDER_30
    } else if age < 35 {
        AGE_FACTOR_UNDER_35
    } else {
        AGE_FACTOR_SENIOR
    }
}

/// Prior-injury base factor, capped
#[must_use]
pub fn injury_factor(prior_injuries: u32) -> f64 {
    (f64::from(prior_injuries) * INJURY_FACTOR_PER_INJURY).min(INJURY_FACTOR_CAP)
}

/// Which call site a score is produced for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringPath {
    /// Population generation
    Generation,
    /// Interactive prediction
    Prediction,
}

impl ScoringPath {
    /// Uniform noise range `[low, high)` for this path
    #[must_use]
    pub const fn noise_range(self) -> (f64, f64) {
        match self {
            Self::Generation => GENERATION_NOISE,
            Self::Prediction => PREDICTION_NOISE,
        }
    }

    /// Upper clamp for this path
    #[must_use]
    pub const fn upper_bound(self) -> f64 {
        match self {
            Self::Generation => MAX_GENERATED_RISK,
            Self::Prediction => MAX_PREDICTED_RISK,
        }
    }

    /// Draw one noise term from the path's range
    pub fn draw_noise<R: Rng + ?Sized>(self, rng: &mut R) -> f64 {
        let (low, high) = self.noise_range();
        rng.gen_range(low..high)
    }
}

/// Raw prediction form input, as decoded by a presentation layer.
///
/// Missing fields take the form defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskProfileInput {
    /// Sport name; unknown names score with the default weight
    pub sport: String,
    /// Age in years
    pub age: i64,
    /// Height in centimetres
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Years as a professional
    pub years_pro: i64,
    /// Weekly training hours
    pub training_hours: i64,
    /// Prior injury count
    pub prior_injuries: i64,
    /// Prior surgery count
    pub surgeries: i64,
    /// Chronic condition name or "None"
    pub chronic_condition: String,
    /// Fitness level, 0 to 100
    pub fitness: f64,
    /// Current injury severity: None, Minor, Moderate or Severe
    pub current_injury_severity: String,
}

impl Default for RiskProfileInput {
    fn default() -> Self {
        Self {
            sport: Sport::Football.as_str().to_owned(),
            age: 25,
            height_cm: 180.0,
            weight_kg: 75.0,
            years_pro: 3,
            training_hours: 20,
            prior_injuries: 0,
            surgeries: 0,
            chronic_condition: "None".to_owned(),
            fitness: 85.0,
            current_injury_severity: "None".to_owned(),
        }
    }
}

/// Height or weight: rejected when not positive, otherwise clamped into bounds
fn clamp_measurement(field: &str, value: f64, bounds: (f64, f64)) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::not_finite(field));
    }
    if value < 0.0 {
        return Err(ValidationError::negative(field, value));
    }
    if value == 0.0 {
        return Err(ValidationError::out_of_range(field, value, bounds.0, bounds.1));
    }
    Ok(value.clamp(bounds.0, bounds.1))
}

impl RiskProfileInput {
    /// Validate the raw input into a typed profile
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` for negative or out-of-range counts, ages
    /// and fitness, non-finite measurements, or an unknown severity label.
    /// Height and weight are clamped rather than rejected when positive.
    pub fn validate(&self) -> Result<RiskProfile, ValidationError> {
        let age = ValidationError::check_count("age", self.age, MAX_AGE)?;
        if age < MIN_AGE {
            return Err(ValidationError::out_of_range(
                "age",
                f64::from(age),
                f64::from(MIN_AGE),
                f64::from(MAX_AGE),
            ));
        }
        let height_cm = clamp_measurement("height_cm", self.height_cm, HEIGHT_BOUNDS_CM)?;
        let weight_kg = clamp_measurement("weight_kg", self.weight_kg, WEIGHT_BOUNDS_KG)?;
        let years_professional =
            ValidationError::check_count("years_pro", self.years_pro, MAX_YEARS_PROFESSIONAL)?;
        let training_hours_weekly =
            ValidationError::check_count("training_hours", self.training_hours, MAX_TRAINING_HOURS)?;
        let prior_injuries =
            ValidationError::check_count("prior_injuries", self.prior_injuries, MAX_PRIOR_INJURIES)?;
        let previous_surgeries =
            ValidationError::check_count("surgeries", self.surgeries, MAX_SURGERIES)?;
        let fitness_level = ValidationError::check_range("fitness", self.fitness, 0.0, 100.0)?;
        let current_severity = InjurySeverity::parse_optional(&self.current_injury_severity)?;

        let sport = SportKind::parse(&self.sport);
        if let SportKind::Unknown(name) = &sport {
            warn!(sport = %name, "unknown sport, using default risk weight");
        }

        let chronic = self.chronic_condition.trim();
        let chronic_condition = (!chronic.is_empty() && !chronic.eq_ignore_ascii_case("none"))
            .then(|| chronic.to_owned());

        Ok(RiskProfile {
            sport,
            age,
            height_cm,
            weight_kg,
            years_professional,
            training_hours_weekly,
            prior_injuries,
            previous_surgeries,
            chronic_condition,
            fitness_level,
            current_severity,
        })
    }
}

/// Validated risk model input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskProfile {
    /// Sport (known or free text)
    pub sport: SportKind,
    /// Age in years
    pub age: u32,
    /// Height in centimetres
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Years as a professional
    pub years_professional: u32,
    /// Weekly training hours
    pub training_hours_weekly: u32,
    /// Prior injury count
    pub prior_injuries: u32,
    /// Prior surgery count
    pub previous_surgeries: u32,
    /// Chronic condition, if any
    pub chronic_condition: Option<String>,
    /// Fitness level, 0 to 100
    pub fitness_level: f64,
    /// Severity of a current injury, if any
    pub current_severity: Option<InjurySeverity>,
}

impl RiskProfile {
    /// Profile of an existing athlete record
    #[must_use]
    pub fn from_athlete(athlete: &Athlete) -> Self {
        Self {
            sport: SportKind::Known(athlete.sport),
            age: athlete.age,
            height_cm: athlete.height_cm,
            weight_kg: athlete.weight_kg,
            years_professional: athlete.years_professional,
            training_hours_weekly: athlete.training_hours_weekly,
            prior_injuries: athlete.total_injuries_career,
            previous_surgeries: athlete.previous_surgeries,
            chronic_condition: athlete.chronic_condition.clone(),
            fitness_level: athlete.fitness_level,
            current_severity: athlete.injury_severity,
        }
    }

    /// BMI as reported on the form, one decimal
    #[must_use]
    pub fn bmi(&self) -> f64 {
        round_to(body_mass_index(self.height_cm, self.weight_kg), 1)
    }
}

/// Every term contributing to a prediction-path score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskBreakdown {
    /// Age band factor
    pub age_factor: f64,
    /// Prior injury factor
    pub injury_factor: f64,
    /// Sport weight
    pub sport_factor: f64,
    /// Surgical history term
    pub surgery_adjustment: f64,
    /// Training load term
    pub training_adjustment: f64,
    /// Chronic condition term
    pub chronic_adjustment: f64,
    /// Current injury severity term
    pub severity_adjustment: f64,
    /// Conditioning term
    pub fitness_adjustment: f64,
    /// Career length term
    pub experience_adjustment: f64,
    /// Body composition term
    pub bmi_adjustment: f64,
}

impl RiskBreakdown {
    /// Sum of the three base factors shared with generation
    #[must_use]
    pub fn base(&self) -> f64 {
        self.age_factor + self.injury_factor + self.sport_factor
    }

    /// Sum of the prediction-only adjustments
    #[must_use]
    pub fn adjustments(&self) -> f64 {
        self.surgery_adjustment
            + self.training_adjustment
            + self.chronic_adjustment
            + self.severity_adjustment
            + self.fitness_adjustment
            + self.experience_adjustment
            + self.bmi_adjustment
    }

    /// Deterministic total before noise and clamping
    #[must_use]
    pub fn total(&self) -> f64 {
        self.base() + self.adjustments()
    }
}

/// Assessment category on the risk percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskCategory {
    /// Below 30%
    Low,
    /// 30% up to 50%
    Moderate,
    /// 50% up to 70%
    High,
    /// 70% and above
    Critical,
}

impl RiskCategory {
    /// Category for a risk percentage (thresholds inclusive from below)
    #[must_use]
    pub fn from_percentage(percent: f64) -> Self {
        if percent >= CRITICAL_PERCENT {
            Self::Critical
        } else if percent >= HIGH_PERCENT {
            Self::High
        } else if percent >= MODERATE_PERCENT {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    /// Follow-up priority mirroring the category
    #[must_use]
    pub const fn priority(self) -> Priority {
        match self {
            Self::Critical => Priority::Critical,
            Self::High => Priority::High,
            Self::Moderate => Priority::Medium,
            Self::Low => Priority::Low,
        }
    }

    /// Headline recommendation
    #[must_use]
    pub const fn recommendation(self) -> &'static str {
        match self {
            Self::Critical => {
                "Immediate medical evaluation recommended. Reduce training intensity by 50%."
            }
            Self::High => {
                "Schedule sports medicine consultation. Implement targeted strengthening exercises."
            }
            Self::Moderate => {
                "Continue training with monitoring. Focus on proprioception and balance training."
            }
            Self::Low => "Continue current regimen. Maintain proper nutrition and hydration.",
        }
    }

    /// Detailed recommendation list
    #[must_use]
    pub const fn recommendations(self) -> [&'static str; 4] {
        match self {
            Self::Critical => [
                "Immediate medical evaluation recommended",
                "Reduce training intensity by 50%",
                "Consider rest period of 2-4 weeks",
                "Implement comprehensive injury prevention program",
            ],
            Self::High => [
                "Schedule sports medicine consultation",
                "Implement targeted strengthening exercises",
                "Monitor training load closely",
                "Consider biomechanical assessment",
            ],
            Self::Moderate => [
                "Continue training with monitoring",
                "Focus on proprioception and balance training",
                "Maintain proper warm-up and cool-down routines",
                "Regular flexibility and mobility work",
            ],
            Self::Low => [
                "Continue current training regimen",
                "Maintain proper nutrition and hydration",
                "Regular injury prevention screening",
                "Annual comprehensive medical checkup",
            ],
        }
    }

    /// Display label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Follow-up priority label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    /// Standard monitoring
    Low,
    /// Regular check-ups
    Medium,
    /// Close monitoring
    High,
    /// Immediate attention
    Critical,
}

/// Impact tier of a single risk factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ImpactTier {
    /// Minor contributor
    Low,
    /// Noticeable contributor
    Medium,
    /// Major contributor
    High,
    /// Dominant contributor
    Critical,
}

/// A named contributor to an athlete's risk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactor {
    /// Factor name
    pub factor: String,
    /// Impact tier
    pub impact: ImpactTier,
    /// Description embedding the actual value
    pub description: String,
}

impl RiskFactor {
    /// Create a factor
    #[must_use]
    pub fn new(factor: impl Into<String>, impact: ImpactTier, description: impl Into<String>) -> Self {
        Self {
            factor: factor.into(),
            impact,
            description: description.into(),
        }
    }
}

/// Base factors echoed back with an assessment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorAnalysis {
    /// Age band factor
    pub age_factor: f64,
    /// Sport weight
    pub sport_factor: f64,
    /// Prior injury factor
    pub injury_factor: f64,
}

/// Prediction-path result, rounded for presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Final score, three decimals
    pub risk_score: f64,
    /// Score as a percentage, one decimal
    pub risk_percentage: f64,
    /// Category on the unrounded percentage
    pub risk_category: RiskCategory,
    /// Priority mirroring the category
    pub priority: Priority,
    /// BMI, one decimal
    pub bmi: f64,
    /// Headline recommendation
    pub recommendation: String,
    /// Category recommendations followed by any sport-specific one
    pub recommendations: Vec<String>,
    /// Threshold-crossing factors in evaluation order
    pub risk_factors: Vec<RiskFactor>,
    /// Base factors
    pub analysis: FactorAnalysis,
}

/// Unrounded score plus explanation for an athlete record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRisk {
    /// Clamped prediction-path score
    pub risk: f64,
    /// Threshold-crossing factors
    pub factors: Vec<RiskFactor>,
}

/// Sport-specific recommendation appended after the category list
#[must_use]
pub const fn sport_recommendation(sport: Option<Sport>) -> Option<&'static str> {
    match sport {
        Some(Sport::Football | Sport::Rugby) => {
            Some("Focus on lower body strength and proprioception")
        }
        Some(Sport::Basketball) => Some("Implement landing mechanics training"),
        Some(Sport::Tennis | Sport::Baseball) => {
            Some("Implement throwing/shoulder maintenance program")
        }
        Some(Sport::Swimming) => Some("Focus on shoulder stability exercises"),
        _ => None,
    }
}

/// Injury risk model
pub struct RiskModel;

impl RiskModel {
    /// Generation-path score from the shared base factors.
    ///
    /// Rounded to two decimals, then clamped to `[0.05, 1.0]`.
    pub fn generation_score<R: Rng + ?Sized>(
        age: u32,
        career_injuries: u32,
        sport: Sport,
        rng: &mut R,
    ) -> f64 {
        let base = age_factor(age) + injury_factor(career_injuries) + sport.risk_weight();
        let path = ScoringPath::Generation;
        let noisy = (base + path.draw_noise(rng)).min(path.upper_bound());
        round_to(noisy, 2).max(MIN_RISK_SCORE)
    }

    /// Deterministic breakdown of a prediction-path score
    #[must_use]
    pub fn breakdown(profile: &RiskProfile) -> RiskBreakdown {
        let surgery_adjustment = if profile.previous_surgeries > 0 {
            (f64::from(profile.previous_surgeries) * SURGERY_ADJUSTMENT_PER_SURGERY)
                .min(SURGERY_ADJUSTMENT_CAP)
        } else {
            0.0
        };

        let training_adjustment = if profile.training_hours_weekly > HEAVY_TRAINING_HOURS {
            HEAVY_TRAINING_ADJUSTMENT
        } else if profile.training_hours_weekly > ELEVATED_TRAINING_HOURS {
            ELEVATED_TRAINING_ADJUSTMENT
        } else {
            0.0
        };

        let chronic_adjustment = if profile.chronic_condition.is_some() {
            CHRONIC_CONDITION_ADJUSTMENT
        } else {
            0.0
        };

        let fitness_adjustment = if profile.fitness_level < POOR_FITNESS_THRESHOLD {
            POOR_FITNESS_ADJUSTMENT
        } else if profile.fitness_level < FAIR_FITNESS_THRESHOLD {
            FAIR_FITNESS_ADJUSTMENT
        } else {
            0.0
        };

        let bmi = profile.bmi();
        let bmi_adjustment = if bmi > HIGH_BMI_THRESHOLD {
            HIGH_BMI_ADJUSTMENT
        } else if bmi < LOW_BMI_THRESHOLD {
            LOW_BMI_ADJUSTMENT
        } else {
            0.0
        };

        RiskBreakdown {
            age_factor: age_factor(profile.age),
            injury_factor: injury_factor(profile.prior_injuries),
            sport_factor: profile.sport.risk_weight(),
            surgery_adjustment,
            training_adjustment,
            chronic_adjustment,
            severity_adjustment: profile
                .current_severity
                .map_or(0.0, |severity| severity.risk_adjustment()),
            fitness_adjustment,
            experience_adjustment: (f64::from(profile.years_professional)
                * EXPERIENCE_ADJUSTMENT_PER_YEAR)
                .min(EXPERIENCE_ADJUSTMENT_CAP),
            bmi_adjustment,
        }
    }

    /// Clamped prediction-path score with one noise draw
    pub fn predicted_score<R: Rng + ?Sized>(breakdown: &RiskBreakdown, rng: &mut R) -> f64 {
        let path = ScoringPath::Prediction;
        (breakdown.total() + path.draw_noise(rng)).clamp(MIN_RISK_SCORE, path.upper_bound())
    }

    /// Explanation list, one entry per crossed threshold, in evaluation order
    #[must_use]
    pub fn risk_factors(profile: &RiskProfile) -> Vec<RiskFactor> {
        let mut factors = Vec::new();

        if profile.age > AGE_FACTOR_REPORT_AGE {
            let impact = if profile.age > AGE_FACTOR_HIGH_IMPACT_AGE {
                ImpactTier::High
            } else {
                ImpactTier::Medium
            };
            factors.push(RiskFactor::new(
                "Age Factor",
                impact,
                format!("Age {} increases injury susceptibility", profile.age),
            ));
        }

        if profile.prior_injuries > INJURY_HISTORY_REPORT_COUNT {
            let impact = if profile.prior_injuries > INJURY_HISTORY_HIGH_IMPACT_COUNT {
                ImpactTier::High
            } else {
                ImpactTier::Medium
            };
            factors.push(RiskFactor::new(
                "Injury History",
                impact,
                format!(
                    "{} previous injuries increase recurrence risk",
                    profile.prior_injuries
                ),
            ));
        }

        if profile.previous_surgeries > 0 {
            let impact = if profile.previous_surgeries > SURGERY_HIGH_IMPACT_COUNT {
                ImpactTier::High
            } else {
                ImpactTier::Medium
            };
            factors.push(RiskFactor::new(
                "Surgical History",
                impact,
                format!("{} previous surgeries", profile.previous_surgeries),
            ));
        }

        if let Some(condition) = &profile.chronic_condition {
            factors.push(RiskFactor::new(
                "Chronic Condition",
                ImpactTier::High,
                condition.clone(),
            ));
        }

        if profile.training_hours_weekly > HEAVY_TRAINING_HOURS {
            factors.push(RiskFactor::new(
                "Training Load",
                ImpactTier::Medium,
                format!(
                    "{} hours/week may lead to overtraining",
                    profile.training_hours_weekly
                ),
            ));
        }

        if profile.fitness_level < POOR_FITNESS_THRESHOLD {
            factors.push(RiskFactor::new(
                "Fitness Level",
                ImpactTier::Medium,
                format!("Fitness score {}% - Needs improvement", profile.fitness_level),
            ));
        }

        if let Some(severity) = profile.current_severity {
            let impact = if severity == InjurySeverity::Severe {
                ImpactTier::High
            } else {
                ImpactTier::Medium
            };
            factors.push(RiskFactor::new(
                "Current Injury",
                impact,
                format!("{severity} injury present"),
            ));
        }

        let bmi = profile.bmi();
        if bmi > HIGH_BMI_THRESHOLD || bmi < LOW_BMI_THRESHOLD {
            let status = if bmi > HIGH_BMI_THRESHOLD {
                "Overweight"
            } else {
                "Underweight"
            };
            factors.push(RiskFactor::new(
                "BMI Factor",
                ImpactTier::Medium,
                format!("BMI {bmi:.1} ({status})"),
            ));
        }

        factors
    }

    /// Score and explain an athlete record on the prediction path
    pub fn score<R: Rng + ?Sized>(athlete: &Athlete, rng: &mut R) -> ScoredRisk {
        let profile = RiskProfile::from_athlete(athlete);
        let breakdown = Self::breakdown(&profile);
        ScoredRisk {
            risk: Self::predicted_score(&breakdown, rng),
            factors: Self::risk_factors(&profile),
        }
    }

    /// Full prediction-path assessment of a validated profile
    pub fn assess<R: Rng + ?Sized>(profile: &RiskProfile, rng: &mut R) -> RiskAssessment {
        let breakdown = Self::breakdown(profile);
        let risk_score = Self::predicted_score(&breakdown, rng);
        let risk_percentage = risk_score * 100.0;
        let category = RiskCategory::from_percentage(risk_percentage);

        let mut recommendations: Vec<String> = category
            .recommendations()
            .iter()
            .map(|line| (*line).to_owned())
            .collect();
        if let Some(extra) = sport_recommendation(profile.sport.known()) {
            recommendations.push(extra.to_owned());
        }

        debug!(
            sport = %profile.sport,
            deterministic = breakdown.total(),
            risk_score,
            category = %category,
            "risk assessment computed"
        );

        RiskAssessment {
            risk_score: round_to(risk_score, 3),
            risk_percentage: round_to(risk_percentage, 1),
            risk_category: category,
            priority: category.priority(),
            bmi: profile.bmi(),
            recommendation: category.recommendation().to_owned(),
            recommendations,
            risk_factors: Self::risk_factors(profile),
            analysis: FactorAnalysis {
                age_factor: round_to(breakdown.age_factor, 3),
                sport_factor: round_to(breakdown.sport_factor, 3),
                injury_factor: round_to(breakdown.injury_factor, 3),
            },
        }
    }

    /// Validate raw form input and assess it
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` raised by [`RiskProfileInput::validate`].
    pub fn score_athlete<R: Rng + ?Sized>(
        input: &RiskProfileInput,
        rng: &mut R,
    ) -> Result<RiskAssessment, ValidationError> {
        let profile = input.validate()?;
        Ok(Self::assess(&profile, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn veteran_footballer() -> RiskProfileInput {
        // 185 cm / 99.3 kg gives BMI 29.0
        RiskProfileInput {
            sport: "Football".to_owned(),
            age: 36,
            height_cm: 185.0,
            weight_kg: 99.3,
            years_pro: 12,
            training_hours: 40,
            prior_injuries: 3,
            surgeries: 1,
            chronic_condition: "Arthritis".to_owned(),
            fitness: 55.0,
            current_injury_severity: "Severe".to_owned(),
        }
    }

    #[test]
    fn test_age_and_injury_factors() {
        assert!((age_factor(24) - 0.1).abs() < 1e-12);
        assert!((age_factor(25) - 0.2).abs() < 1e-12);
        assert!((age_factor(34) - 0.3).abs() < 1e-12);
        assert!((age_factor(35) - 0.4).abs() < 1e-12);
        assert!((injury_factor(3) - 0.15).abs() < 1e-12);
        assert!((injury_factor(15) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_veteran_footballer_is_critical() {
        let profile = veteran_footballer().validate().unwrap();
        let breakdown = RiskModel::breakdown(&profile);
        assert!((breakdown.age_factor - 0.4).abs() < 1e-12);
        assert!((breakdown.sport_factor - 0.15).abs() < 1e-12);
        assert!((breakdown.injury_factor - 0.15).abs() < 1e-12);
        assert!((breakdown.surgery_adjustment - 0.05).abs() < 1e-12);
        assert!((breakdown.training_adjustment - 0.08).abs() < 1e-12);
        assert!((breakdown.chronic_adjustment - 0.12).abs() < 1e-12);
        assert!((breakdown.severity_adjustment - 0.10).abs() < 1e-12);
        assert!((breakdown.fitness_adjustment - 0.08).abs() < 1e-12);
        assert!((breakdown.bmi_adjustment - 0.06).abs() < 1e-12);
        assert!(breakdown.total() >= 0.95);

        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let assessment = RiskModel::assess(&profile, &mut rng);
        assert!((assessment.risk_percentage - 95.0).abs() < 1e-9);
        assert_eq!(assessment.risk_category, RiskCategory::Critical);
        assert_eq!(assessment.priority, Priority::Critical);
        assert!((assessment.bmi - 29.0).abs() < 1e-9);
        assert_eq!(assessment.recommendations.len(), 5);
        assert_eq!(
            assessment.recommendations.last().map(String::as_str),
            Some("Focus on lower body strength and proprioception")
        );
    }

    #[test]
    fn test_risk_factor_order_and_tiers() {
        let profile = veteran_footballer().validate().unwrap();
        let factors = RiskModel::risk_factors(&profile);
        let names: Vec<&str> = factors.iter().map(|f| f.factor.as_str()).collect();
        assert_eq!(
            names,
            [
                "Age Factor",
                "Injury History",
                "Surgical History",
                "Chronic Condition",
                "Training Load",
                "Fitness Level",
                "Current Injury",
                "BMI Factor"
            ]
        );
        assert_eq!(factors[0].impact, ImpactTier::High);
        assert_eq!(factors[1].impact, ImpactTier::Medium);
        assert_eq!(factors[2].impact, ImpactTier::Medium);
        assert_eq!(factors[6].impact, ImpactTier::High);
        assert_eq!(factors[7].description, "BMI 29.0 (Overweight)");
        assert_eq!(factors[5].description, "Fitness score 55% - Needs improvement");
    }

    #[test]
    fn test_low_risk_profile() {
        let input = RiskProfileInput {
            sport: "Swimming".to_owned(),
            age: 21,
            years_pro: 0,
            ..RiskProfileInput::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let assessment = RiskModel::score_athlete(&input, &mut rng).unwrap();
        // 0.1 + 0.0 + 0.05 +/- 0.05 stays below 30%
        assert_eq!(assessment.risk_category, RiskCategory::Low);
        assert!(assessment.risk_factors.is_empty());
        assert_eq!(
            assessment.recommendations.last().map(String::as_str),
            Some("Focus on shoulder stability exercises")
        );
    }

    #[test]
    fn test_unknown_sport_falls_back() {
        let input = RiskProfileInput {
            sport: "Curling".to_owned(),
            ..RiskProfileInput::default()
        };
        let profile = input.validate().unwrap();
        let breakdown = RiskModel::breakdown(&profile);
        assert!((breakdown.sport_factor - 0.08).abs() < 1e-12);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let assessment = RiskModel::assess(&profile, &mut rng);
        assert_eq!(assessment.recommendations.len(), 4);
    }

    #[test]
    fn test_validation_rejects_bad_input() {
        let negative_age = RiskProfileInput {
            age: -4,
            ..RiskProfileInput::default()
        };
        assert!(matches!(
            negative_age.validate(),
            Err(ValidationError::Negative { .. })
        ));

        let bad_fitness = RiskProfileInput {
            fitness: 140.0,
            ..RiskProfileInput::default()
        };
        assert!(matches!(
            bad_fitness.validate(),
            Err(ValidationError::OutOfRange { .. })
        ));

        let bad_severity = RiskProfileInput {
            current_injury_severity: "Catastrophic".to_owned(),
            ..RiskProfileInput::default()
        };
        assert!(matches!(
            bad_severity.validate(),
            Err(ValidationError::UnknownCategory { .. })
        ));

        let negative_surgeries = RiskProfileInput {
            surgeries: -1,
            ..RiskProfileInput::default()
        };
        assert!(negative_surgeries.validate().is_err());

        let zero_height = RiskProfileInput {
            height_cm: 0.0,
            ..RiskProfileInput::default()
        };
        assert!(zero_height.validate().is_err());
    }

    #[test]
    fn test_measurements_clamp_silently() {
        let input = RiskProfileInput {
            height_cm: 260.0,
            weight_kg: 30.0,
            ..RiskProfileInput::default()
        };
        let profile = input.validate().unwrap();
        assert!((profile.height_cm - 230.0).abs() < f64::EPSILON);
        assert!((profile.weight_kg - 45.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_generation_score_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..500 {
            let young = RiskModel::generation_score(18, 1, Sport::Swimming, &mut rng);
            let old = RiskModel::generation_score(41, 15, Sport::Football, &mut rng);
            assert!((0.05..=1.0).contains(&young));
            assert!((0.05..=1.0).contains(&old));
        }
    }

    #[test]
    fn test_prediction_score_bounds() {
        let profile = veteran_footballer().validate().unwrap();
        let breakdown = RiskModel::breakdown(&profile);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..200 {
            let score = RiskModel::predicted_score(&breakdown, &mut rng);
            assert!((0.05..=0.95).contains(&score));
        }
    }

    #[test]
    fn test_category_thresholds_inclusive_from_below() {
        assert_eq!(RiskCategory::from_percentage(70.0), RiskCategory::Critical);
        assert_eq!(RiskCategory::from_percentage(69.99), RiskCategory::High);
        assert_eq!(RiskCategory::from_percentage(50.0), RiskCategory::High);
        assert_eq!(RiskCategory::from_percentage(30.0), RiskCategory::Moderate);
        assert_eq!(RiskCategory::from_percentage(29.9), RiskCategory::Low);
        assert_eq!(RiskCategory::Moderate.priority(), Priority::Medium);
    }
}
