// ABOUTME: Athlete builders shared by the intelligence unit tests
// ABOUTME: Produces healthy records with sport-consistent positions and an injure helper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Injury Insight Contributors

use injury_core::models::{
    Athlete, Gender, InjurySeverity, MedicalClearance, RecoveryStatus, Sport, TreatmentType,
};

/// Healthy athlete with the given identity, sport, age and stored risk score
pub fn athlete(id: &str, sport: Sport, age: u32, risk_score: f64) -> Athlete {
    Athlete {
        id: id.to_owned(),
        first_name: "Alex".to_owned(),
        last_name: format!("Tester{}", &id[id.len().saturating_sub(2)..]),
        age,
        gender: Gender::Male,
        height_cm: 180.0,
        weight_kg: 78.0,
        bmi: 24.1,
        sport,
        position: sport.positions()[0].to_owned(),
        team: sport.teams()[0].to_owned(),
        country: "USA".to_owned(),
        years_professional: age.saturating_sub(18).max(1),
        training_hours_weekly: 20,
        current_injury: None,
        injury_severity: None,
        injury_days_ago: None,
        recovery_status: RecoveryStatus::FullyRecovered,
        treatment_type: TreatmentType::PhysicalTherapy,
        total_injuries_career: 2,
        injury_history: vec!["Ankle Sprain".to_owned(), "Hamstring Strain".to_owned()],
        days_missed_current_season: 5,
        risk_score,
        fitness_level: 80.0,
        previous_surgeries: 0,
        chronic_condition: None,
        last_checkup_days_ago: 30,
        rehabilitation_progress: 100.0,
        performance_index: 75.0,
        salary_usd: 900_000,
        contract_years_remaining: 2,
        medical_clearance: MedicalClearance::Cleared,
        recovery_days: 0,
        medical_cost: 0.0,
        lost_productivity_cost: 0.0,
    }
}

/// Give `athlete` a current injury with fixed recovery days and costs
pub fn injured(mut athlete: Athlete, severity: InjurySeverity) -> Athlete {
    athlete.current_injury = Some("ACL Tear".to_owned());
    athlete.injury_severity = Some(severity);
    athlete.injury_days_ago = Some(10);
    athlete.recovery_status = RecoveryStatus::InRecovery;
    athlete.rehabilitation_progress = 40.0;
    athlete.recovery_days = 20;
    athlete.medical_cost = 10_000.0;
    athlete.lost_productivity_cost = 20_000.0;
    athlete
}
