// ABOUTME: Seeded synthetic population generator producing reproducible athlete records
// ABOUTME: Draws every attribute from one ChaCha8 stream in a fixed order so equal seeds give equal data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Injury Insight Contributors

//! # Population Generator
//!
//! Builds the in-memory athlete population. Every draw comes from a single
//! `ChaCha8Rng` seeded from [`PopulationConfig::seed`], always in the same
//! order, so two runs with the same seed and size yield identical records.
//!
//! Physique is drawn from sport and gender specific normal distributions,
//! rounded to one decimal and clamped to realistic bounds. Career injuries
//! scale with years as a professional and the sport's base injury rate.

use injury_core::constants::catalog::{
    CHRONIC_CONDITION_DRAWS, COUNTRIES, FEMALE_FIRST_NAMES, INJURY_TYPES, LAST_NAMES,
    MALE_FIRST_NAMES,
};
use injury_core::constants::population::{
    ATHLETE_ID_PREFIX, CAREER_INJURY_BOUNDS, HEIGHT_BOUNDS_CM, MAX_SURGERIES, WEIGHT_BOUNDS_KG,
};
use injury_core::errors::{AppError, AppResult, ValidationError};
use injury_core::models::{
    body_mass_index, Athlete, Gender, InjurySeverity, MedicalClearance, RecoveryStatus, Sport,
    TreatmentType,
};
use injury_core::rounding::round_to;
use injury_intelligence::risk_model::RiskModel;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use tracing::{debug, info};

use crate::config::PopulationConfig;

/// Mean and standard deviation of a normal draw
type Gaussian = (f64, f64);

/// Height and weight distributions for a sport and gender
const fn physique(sport: Sport, gender: Gender) -> (Gaussian, Gaussian) {
    match (gender, sport) {
        (Gender::Male, Sport::Basketball) => ((198.0, 8.0), (100.0, 12.0)),
        (Gender::Male, Sport::Football | Sport::Rugby) => ((188.0, 10.0), (105.0, 20.0)),
        (Gender::Male, Sport::Swimming) => ((188.0, 7.0), (82.0, 8.0)),
        (Gender::Male, _) => ((180.0, 10.0), (78.0, 12.0)),
        (Gender::Female, Sport::Basketball) => ((180.0, 7.0), (72.0, 8.0)),
        (Gender::Female, Sport::Swimming) => ((175.0, 6.0), (65.0, 7.0)),
        (Gender::Female, _) => ((168.0, 8.0), (62.0, 10.0)),
    }
}

/// Uniformly chosen element of a non-empty static table
fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// One normal draw, rounded to a tenth and clamped to `bounds`
fn gaussian_measure<R: Rng + ?Sized>(
    rng: &mut R,
    (mean, std_dev): Gaussian,
    bounds: (f64, f64),
) -> AppResult<f64> {
    let normal = Normal::new(mean, std_dev).map_err(|e| {
        AppError::internal(format!("invalid physique distribution N({mean}, {std_dev}): {e}"))
    })?;
    Ok(round_to(normal.sample(rng), 1).clamp(bounds.0, bounds.1))
}

/// Seeded population generator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopulationGenerator {
    config: PopulationConfig,
}

impl PopulationGenerator {
    /// Generator for the given settings
    #[must_use]
    pub const fn new(config: PopulationConfig) -> Self {
        Self { config }
    }

    /// Settings in use
    #[must_use]
    pub const fn config(&self) -> &PopulationConfig {
        &self.config
    }

    /// Generate the full population
    ///
    /// # Errors
    ///
    /// Returns a validation error when the injured probability is outside
    /// `[0, 1]`.
    pub fn generate(&self) -> AppResult<Vec<Athlete>> {
        let injured_probability = ValidationError::check_range(
            "injured_probability",
            self.config.injured_probability,
            0.0,
            1.0,
        )?;

        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        let athletes = (0..self.config.size)
            .map(|ordinal| Self::athlete(ordinal, injured_probability, &mut rng))
            .collect::<AppResult<Vec<_>>>()?;

        let injured = athletes.iter().filter(|a| a.is_injured()).count();
        info!(
            seed = self.config.seed,
            size = athletes.len(),
            injured,
            "Generated athlete population"
        );
        Ok(athletes)
    }

    /// Draw one athlete; `ordinal` is zero-based
    fn athlete<R: Rng + ?Sized>(
        ordinal: usize,
        injured_probability: f64,
        rng: &mut R,
    ) -> AppResult<Athlete> {
        let sport = *pick(rng, &Sport::ALL);
        let position = *pick(rng, sport.positions());
        let gender = *pick(rng, Gender::ALL);
        let age = rng.gen_range(sport.age_range());

        let (height_dist, weight_dist) = physique(sport, gender);
        let height_cm = gaussian_measure(rng, height_dist, HEIGHT_BOUNDS_CM)?;
        let weight_kg = gaussian_measure(rng, weight_dist, WEIGHT_BOUNDS_KG)?;
        let first_name = match gender {
            Gender::Male => *pick(rng, &MALE_FIRST_NAMES),
            Gender::Female => *pick(rng, &FEMALE_FIRST_NAMES),
        };

        let career_draw: i64 = rng.gen_range(1..22);
        let years_professional = (i64::from(age) - 18).min(career_draw).max(1) as u32;
        let expected_injuries = (f64::from(years_professional)
            * sport.base_injury_rate()
            * rng.gen_range(0.3..1.5)) as u32;
        let total_injuries_career =
            expected_injuries.clamp(CAREER_INJURY_BOUNDS.0, CAREER_INJURY_BOUNDS.1);
        let history_len = (total_injuries_career as usize).min(INJURY_TYPES.len());
        let injury_history = index::sample(rng, INJURY_TYPES.len(), history_len)
            .into_iter()
            .map(|i| INJURY_TYPES[i].to_owned())
            .collect();

        let injured = rng.gen_bool(injured_probability);
        let (current_injury, injury_severity) = if injured {
            let name = *pick(rng, &INJURY_TYPES);
            let severity = *pick(rng, InjurySeverity::ALL);
            (Some(name.to_owned()), Some(severity))
        } else {
            (None, None)
        };

        let risk_score =
            RiskModel::generation_score(age, total_injuries_career, sport, rng);

        let last_name = *pick(rng, &LAST_NAMES);
        let team = *pick(rng, sport.teams());
        let country = *pick(rng, &COUNTRIES);
        let training_hours_weekly = rng.gen_range(10..45);
        let injury_days_ago = injured.then(|| rng.gen_range(1..180));
        let recovery_status = *pick(rng, RecoveryStatus::ALL);
        let treatment_type = *pick(rng, TreatmentType::ALL);
        let days_missed_current_season = if injured {
            rng.gen_range(0..120)
        } else {
            rng.gen_range(0..30)
        };
        let fitness_level = round_to(rng.gen_range(55.0..100.0), 1);
        let surgery_limit = (total_injuries_career / 2 + 1).min(MAX_SURGERIES);
        let previous_surgeries = rng.gen_range(0..surgery_limit);
        let chronic_condition = (*pick(rng, &CHRONIC_CONDITION_DRAWS)).map(str::to_owned);
        let last_checkup_days_ago = rng.gen_range(1..120);
        let rehabilitation_progress = if injured {
            round_to(rng.gen_range(0.0..100.0), 1)
        } else {
            100.0
        };
        let performance_index = round_to(rng.gen_range(45.0..100.0), 1);
        let salary_usd = rng.gen_range(50_000..15_000_000);
        let contract_years_remaining = rng.gen_range(0..7);
        let medical_clearance = if injured {
            *pick(rng, MedicalClearance::ALL)
        } else {
            MedicalClearance::Cleared
        };
        let (recovery_days, medical_cost, lost_productivity_cost) = if injured {
            (
                rng.gen_range(7..90),
                rng.gen_range(500.0..20_000.0),
                rng.gen_range(1000.0..50_000.0),
            )
        } else {
            (0, 0.0, 0.0)
        };

        let athlete = Athlete {
            id: format!("{ATHLETE_ID_PREFIX}{:05}", ordinal + 1),
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            age,
            gender,
            height_cm,
            weight_kg,
            bmi: round_to(body_mass_index(height_cm, weight_kg), 1),
            sport,
            position: position.to_owned(),
            team: team.to_owned(),
            country: country.to_owned(),
            years_professional,
            training_hours_weekly,
            current_injury,
            injury_severity,
            injury_days_ago,
            recovery_status,
            treatment_type,
            total_injuries_career,
            injury_history,
            days_missed_current_season,
            risk_score,
            fitness_level,
            previous_surgeries,
            chronic_condition,
            last_checkup_days_ago,
            rehabilitation_progress,
            performance_index,
            salary_usd,
            contract_years_remaining,
            medical_clearance,
            recovery_days,
            medical_cost,
            lost_productivity_cost,
        };
        debug!(id = %athlete.id, sport = %sport, injured, "generated athlete");
        Ok(athlete)
    }
}

impl Default for PopulationGenerator {
    fn default() -> Self {
        Self::new(PopulationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator(seed: u64, size: usize) -> PopulationGenerator {
        PopulationGenerator::new(PopulationConfig {
            seed,
            size,
            injured_probability: 0.35,
        })
    }

    #[test]
    fn test_generates_requested_size_with_sequential_ids() {
        let athletes = generator(42, 120).generate().unwrap();
        assert_eq!(athletes.len(), 120);
        assert_eq!(athletes[0].id, "PLY00001");
        assert_eq!(athletes[119].id, "PLY00120");
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        let first = generator(9, 200).generate().unwrap();
        let second = generator(9, 200).generate().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_differ() {
        let first = generator(1, 50).generate().unwrap();
        let second = generator(2, 50).generate().unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_records_respect_bounds() {
        for athlete in generator(42, 500).generate().unwrap() {
            assert!((150.0..=230.0).contains(&athlete.height_cm));
            assert!((45.0..=150.0).contains(&athlete.weight_kg));
            assert!((0.05..=1.0).contains(&athlete.risk_score));
            assert!((1..=15).contains(&athlete.total_injuries_career));
            assert_eq!(
                athlete.injury_history.len(),
                athlete.total_injuries_career as usize
            );
            assert!(athlete.sport.age_range().contains(&athlete.age));
            assert!(athlete.sport.has_position(&athlete.position));
            assert!((athlete.bmi - athlete.computed_bmi()).abs() < 1e-9);
            assert!(athlete.previous_surgeries < MAX_SURGERIES);
        }
    }

    #[test]
    fn test_healthy_records_carry_no_injury_state() {
        for athlete in generator(5, 300).generate().unwrap() {
            if athlete.is_injured() {
                assert!(athlete.injury_severity.is_some());
                assert!(athlete.injury_days_ago.is_some());
                assert!(athlete.recovery_days >= 7);
                assert!(athlete.medical_cost >= 500.0);
            } else {
                assert!(athlete.injury_severity.is_none());
                assert_eq!(athlete.recovery_days, 0);
                assert!(athlete.medical_cost.abs() < f64::EPSILON);
                assert!(athlete.lost_productivity_cost.abs() < f64::EPSILON);
                assert_eq!(athlete.medical_clearance, MedicalClearance::Cleared);
                assert!((athlete.rehabilitation_progress - 100.0).abs() < f64::EPSILON);
            }
        }
    }

    #[test]
    fn test_injured_probability_extremes() {
        let mut config = *generator(3, 40).config();
        config.injured_probability = 0.0;
        let healthy = PopulationGenerator::new(config).generate().unwrap();
        assert!(healthy.iter().all(|a| !a.is_injured()));

        config.injured_probability = 1.0;
        let injured = PopulationGenerator::new(config).generate().unwrap();
        assert!(injured.iter().all(Athlete::is_injured));
    }

    #[test]
    fn test_invalid_probability_is_rejected() {
        let mut config = *generator(3, 10).config();
        config.injured_probability = 1.2;
        assert!(PopulationGenerator::new(config).generate().is_err());
    }

    #[test]
    fn test_empty_population() {
        assert!(generator(42, 0).generate().unwrap().is_empty());
    }
}
