// ABOUTME: Integration tests for the seeded population generator
// ABOUTME: Checks reproducibility, record invariants and distribution sanity over full-size populations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Injury Insight Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::collections::HashSet;

use injury_core::models::{Sport, RiskBucket};
use injury_core::rounding::round_to;
use injury_insight::generator::PopulationGenerator;
use proptest::prelude::*;

use common::{population, population_config, TEST_POPULATION};

#[test]
fn test_same_seed_produces_identical_serialized_collections() {
    common::init_test_logging();
    let first = serde_json::to_string(&population(42, TEST_POPULATION)).unwrap();
    let second = serde_json::to_string(&population(42, TEST_POPULATION)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_ids_are_unique_and_sequential() {
    let athletes = population(42, TEST_POPULATION);
    let ids: HashSet<&str> = athletes.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids.len(), TEST_POPULATION);
    assert_eq!(athletes.last().unwrap().id, "PLY02000");
}

#[test]
fn test_bmi_matches_height_and_weight() {
    for athlete in population(42, TEST_POPULATION) {
        let height_m = athlete.height_cm / 100.0;
        let expected = round_to(athlete.weight_kg / (height_m * height_m), 1);
        assert!(
            (athlete.bmi - expected).abs() < 1e-9,
            "{}: bmi {} expected {}",
            athlete.id,
            athlete.bmi,
            expected
        );
    }
}

#[test]
fn test_risk_scores_stay_in_generation_bounds() {
    for athlete in population(42, TEST_POPULATION) {
        assert!(athlete.risk_score >= 0.05);
        assert!(athlete.risk_score <= 1.0);
    }
}

#[test]
fn test_every_sport_and_risk_bucket_is_populated() {
    let athletes = population(42, TEST_POPULATION);
    let sports: HashSet<Sport> = athletes.iter().map(|a| a.sport).collect();
    assert_eq!(sports.len(), Sport::ALL.len());

    let buckets: HashSet<RiskBucket> = athletes.iter().map(|a| a.risk_bucket()).collect();
    assert!(buckets.contains(&RiskBucket::Moderate));
    assert!(buckets.contains(&RiskBucket::High));
}

#[test]
fn test_injured_share_tracks_probability() {
    let athletes = population(42, TEST_POPULATION);
    let injured = athletes.iter().filter(|a| a.is_injured()).count();
    let share = injured as f64 / TEST_POPULATION as f64;
    assert!((0.30..0.40).contains(&share), "injured share {share}");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_generated_records_hold_invariants(seed in any::<u64>(), size in 1_usize..60) {
        let athletes = PopulationGenerator::new(population_config(seed, size))
            .generate()
            .unwrap();
        prop_assert_eq!(athletes.len(), size);
        for athlete in &athletes {
            prop_assert!((0.05..=1.0).contains(&athlete.risk_score));
            prop_assert!((150.0..=230.0).contains(&athlete.height_cm));
            prop_assert!((45.0..=150.0).contains(&athlete.weight_kg));
            prop_assert!((athlete.bmi - athlete.computed_bmi()).abs() < 1e-9);
            prop_assert!(athlete.years_professional >= 1);
            prop_assert_eq!(athlete.is_injured(), athlete.injury_severity.is_some());
        }
    }

    #[test]
    fn prop_generation_is_deterministic(seed in any::<u64>()) {
        let config = population_config(seed, 25);
        let first = PopulationGenerator::new(config).generate().unwrap();
        let second = PopulationGenerator::new(config).generate().unwrap();
        prop_assert_eq!(first, second);
    }
}
