// ABOUTME: Athlete record, the central entity every scoring, rollup, and query operates on
// ABOUTME: Carries demographic, career, current-injury, financial fields and the derived risk score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Injury Insight Contributors

use serde::{Deserialize, Serialize};

use super::buckets::{AgeBucket, RiskBucket, SeverityBucket};
use super::categories::{Gender, InjurySeverity, MedicalClearance, RecoveryStatus, TreatmentType};
use super::sport::Sport;
use crate::rounding::round_to;

/// Body mass index from height in centimetres and weight in kilograms, unrounded
#[must_use]
pub fn body_mass_index(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    if height_m <= 0.0 {
        return 0.0;
    }
    weight_kg / (height_m * height_m)
}

/// One athlete in the population.
///
/// A record without a current injury has no severity, no injury offset,
/// zero recovery days and zero cost fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Athlete {
    /// Unique identifier (`PLY00001` style)
    pub id: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Age in years
    pub age: u32,
    /// Gender
    pub gender: Gender,
    /// Height in centimetres
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Body mass index, rounded to one decimal
    pub bmi: f64,
    /// Sport
    pub sport: Sport,
    /// Playing position within the sport's position table
    pub position: String,
    /// Team or circuit
    pub team: String,
    /// Country of origin
    pub country: String,
    /// Years as a professional
    pub years_professional: u32,
    /// Weekly training hours
    pub training_hours_weekly: u32,
    /// Name of the current injury, `None` when healthy
    pub current_injury: Option<String>,
    /// Severity of the current injury
    pub injury_severity: Option<InjurySeverity>,
    /// Days since the current injury occurred
    pub injury_days_ago: Option<u32>,
    /// Recovery status
    pub recovery_status: RecoveryStatus,
    /// Treatment applied
    pub treatment_type: TreatmentType,
    /// Career injury count
    pub total_injuries_career: u32,
    /// Injury types in the career history
    pub injury_history: Vec<String>,
    /// Days missed this season
    pub days_missed_current_season: u32,
    /// Derived risk score in `[0.05, 1.0]`
    pub risk_score: f64,
    /// Fitness level, 0 to 100
    pub fitness_level: f64,
    /// Prior surgeries
    pub previous_surgeries: u32,
    /// Chronic condition name, `None` when absent
    pub chronic_condition: Option<String>,
    /// Days since the last medical checkup
    pub last_checkup_days_ago: u32,
    /// Rehabilitation progress percentage
    pub rehabilitation_progress: f64,
    /// Performance index, 0 to 100
    pub performance_index: f64,
    /// Annual salary in USD
    pub salary_usd: u64,
    /// Contract years remaining
    pub contract_years_remaining: u32,
    /// Medical clearance
    pub medical_clearance: MedicalClearance,
    /// Expected recovery days for the current injury
    pub recovery_days: u32,
    /// Medical cost of the current injury
    pub medical_cost: f64,
    /// Lost productivity cost of the current injury
    pub lost_productivity_cost: f64,
}

impl Athlete {
    /// Whether the athlete currently carries an injury
    #[must_use]
    pub const fn is_injured(&self) -> bool {
        self.current_injury.is_some()
    }

    /// "First Last"
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Risk bucket of the stored score
    #[must_use]
    pub fn risk_bucket(&self) -> RiskBucket {
        RiskBucket::from_score(self.risk_score)
    }

    /// Financial severity bucket of the stored score
    #[must_use]
    pub fn severity_bucket(&self) -> SeverityBucket {
        SeverityBucket::from_score(self.risk_score)
    }

    /// Age band, `None` under 18
    #[must_use]
    pub fn age_bucket(&self) -> Option<AgeBucket> {
        AgeBucket::from_age(self.age)
    }

    /// Career injuries per professional year
    #[must_use]
    pub fn injury_rate(&self) -> f64 {
        f64::from(self.total_injuries_career) / f64::from(self.years_professional.max(1))
    }

    /// BMI recomputed from height and weight, rounded to one decimal
    #[must_use]
    pub fn computed_bmi(&self) -> f64 {
        round_to(body_mass_index(self.height_cm, self.weight_kg), 1)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Healthy mid-career footballer used across core tests
    pub fn sample_athlete() -> Athlete {
        Athlete {
            id: "PLY00001".to_owned(),
            first_name: "James".to_owned(),
            last_name: "Smith".to_owned(),
            age: 27,
            gender: Gender::Male,
            height_cm: 185.0,
            weight_kg: 90.0,
            bmi: 26.3,
            sport: Sport::Football,
            position: "Quarterback".to_owned(),
            team: "Dallas Cowboys".to_owned(),
            country: "USA".to_owned(),
            years_professional: 6,
            training_hours_weekly: 30,
            current_injury: None,
            injury_severity: None,
            injury_days_ago: None,
            recovery_status: RecoveryStatus::FullyRecovered,
            treatment_type: TreatmentType::PhysicalTherapy,
            total_injuries_career: 4,
            injury_history: vec!["Ankle Sprain".to_owned()],
            days_missed_current_season: 3,
            risk_score: 0.42,
            fitness_level: 81.5,
            previous_surgeries: 0,
            chronic_condition: None,
            last_checkup_days_ago: 20,
            rehabilitation_progress: 100.0,
            performance_index: 77.0,
            salary_usd: 1_200_000,
            contract_years_remaining: 2,
            medical_clearance: MedicalClearance::Cleared,
            recovery_days: 0,
            medical_cost: 0.0,
            lost_productivity_cost: 0.0,
        }
    }
}
