// ABOUTME: End-to-end tests for the analytics service over generated populations
// ABOUTME: Exercises prediction, rollups, projections, reports and regeneration through one facade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Injury Insight Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use injury_insight::config::{PopulationConfig, ServerConfig};
use injury_insight::generator::PopulationGenerator;
use injury_insight::query::{AthleteQuery, InjuryStatus};
use injury_insight::repository::AthleteRepository;
use injury_insight::service::AnalyticsService;
use injury_insight::ErrorCode;
use injury_intelligence::aggregation::{GroupField, MetricSpec};
use injury_intelligence::risk_model::{Priority, RiskCategory, RiskProfileInput};

use common::{population, service, test_config, TEST_POPULATION};

fn veteran_footballer() -> RiskProfileInput {
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
fn test_prediction_for_veteran_footballer_is_critical() {
    let service = service(42, 100);
    let assessment = service.predict(&veteran_footballer()).unwrap();

    assert_eq!(assessment.risk_category, RiskCategory::Critical);
    assert_eq!(assessment.priority, Priority::Critical);
    assert!((assessment.risk_percentage - 95.0).abs() < 1e-9);
    assert!((assessment.bmi - 29.0).abs() < 1e-9);
}

#[test]
fn test_prediction_rejects_negative_age() {
    let service = service(42, 100);
    let input = RiskProfileInput {
        age: -3,
        ..RiskProfileInput::default()
    };
    let err = service.predict(&input).unwrap_err();
    assert_ne!(err.code, ErrorCode::InternalError);
}

#[test]
fn test_unknown_athlete_profile_is_not_found() {
    let service = service(42, 100);
    let err = service.athlete_profile("PLY00101").unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);

    let profile = service.athlete_profile("PLY00100").unwrap();
    assert_eq!(profile.athlete.id, "PLY00100");
}

#[test]
fn test_insight_cards_follow_athlete_record() {
    let service = service(42, TEST_POPULATION);
    let athletes = population(42, TEST_POPULATION);

    for athlete in athletes.iter().take(200) {
        let insight = service.insight(&athlete.id).unwrap();
        let kinds: Vec<&str> = insight
            .recommendations
            .iter()
            .map(|card| card.kind.as_str())
            .collect();

        assert_eq!(kinds.contains(&"Critical"), athlete.risk_score > 0.7);
        assert_eq!(kinds.contains(&"Recovery"), athlete.is_injured());
        assert_eq!(kinds.contains(&"Prevention"), athlete.total_injuries_career > 3);
        assert_eq!(kinds.last(), Some(&"Wellness"));
    }

    let err = service.insight("PLY09999").unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_cohort_age_bands_cover_eligible_ages() {
    let service = service(42, TEST_POPULATION);
    let report = service.cohort().unwrap();
    let eligible = population(42, TEST_POPULATION)
        .iter()
        .filter(|a| a.age > 17 && a.age <= 45)
        .count();

    assert_eq!(report.age_risk.len(), 6);
    assert_eq!(report.age_risk.iter().map(|b| b.count).sum::<usize>(), eligible);
    assert!(report
        .age_risk
        .iter()
        .all(|b| b.count == 0 || (0.05..=1.0).contains(&b.avg_risk)));
}

#[test]
fn test_financial_projection_with_no_injuries_is_zero() {
    common::init_test_logging();
    let config = ServerConfig {
        population: PopulationConfig {
            injured_probability: 0.0,
            ..test_config(42, 300).population
        },
        ..test_config(42, 300)
    };
    let service = AnalyticsService::new(config);
    let projection = service.financial().unwrap();

    assert_eq!(projection.total_athletes, 300);
    assert_eq!(projection.total_injured, 0);
    assert!(projection.total_medical_costs.abs() < f64::EPSILON);
    assert!(projection.total_lost_productivity.abs() < f64::EPSILON);
    assert!(projection.roi_percentage.abs() < f64::EPSILON);
}

#[test]
fn test_financial_projection_counts_injured_population() {
    let service = service(42, TEST_POPULATION);
    let projection = service.financial().unwrap();
    let injured = population(42, TEST_POPULATION)
        .iter()
        .filter(|a| a.is_injured())
        .count();

    assert_eq!(projection.total_injured, injured);
    assert!(projection.total_medical_costs > 0.0);
    assert!(projection.synthetic_trend.synthetic);
    assert!((0.0..=100.0).contains(&projection.roi_percentage_display));
}

#[test]
fn test_aggregate_by_sport_and_gender_partitions_population() {
    let service = service(42, TEST_POPULATION);
    let metrics: Vec<MetricSpec> = ["risk_score:mean", "age:max"]
        .iter()
        .map(|raw| raw.parse().unwrap())
        .collect();
    let table = service
        .aggregate(&[GroupField::Sport, GroupField::Gender], &metrics)
        .unwrap();

    let counted: usize = table.rows.iter().map(|row| row.count).sum();
    assert_eq!(counted, TEST_POPULATION);
    assert!(table.rows.iter().all(|row| row.values.len() == 2));
}

#[test]
fn test_query_through_service_uses_snapshot() {
    let service = service(42, TEST_POPULATION);
    let query = AthleteQuery {
        status: Some(InjuryStatus::Healthy),
        page: service.page(2).unwrap(),
        ..AthleteQuery::default()
    };
    let page = service.query(&query).unwrap();

    assert_eq!(page.page, 2);
    assert_eq!(page.items.len(), 25);
    assert!(page.items.iter().all(|a| !a.is_injured()));
}

#[test]
fn test_reports_are_reproducible_for_same_configuration() {
    let first = service(42, 400);
    let second = service(42, 400);

    assert_eq!(first.cohort().unwrap(), second.cohort().unwrap());
    assert_eq!(first.financial().unwrap(), second.financial().unwrap());
    assert_eq!(first.monthly().unwrap().month, "June 2025");
}

#[test]
fn test_overview_and_statistics_cover_population() {
    let service = service(42, 500);
    let overview = service.overview().unwrap();
    assert_eq!(overview.total_athletes, 500);
    assert!(overview.injured_athletes < 500);

    let options = service.filter_options().unwrap();
    assert_eq!(options.sports.len(), overview.total_sports);
    assert_eq!(options.countries.len(), overview.total_countries);
}

#[test]
fn test_regenerate_swaps_collection() {
    common::init_test_logging();
    let config = test_config(42, 60);
    let generator = PopulationGenerator::new(config.population);
    let repository = Arc::new(AthleteRepository::new(generator));
    let service = AnalyticsService::with_repository(Arc::clone(&repository), config);

    let before = repository.snapshot().unwrap();
    assert_eq!(service.regenerate().unwrap(), 2);
    let after = repository.snapshot().unwrap();

    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(*before, *after);
}

#[test]
fn test_service_over_explicit_collection() {
    let athletes = population(3, 40);
    let service = common::service_with(athletes.clone());
    assert_eq!(service.overview().unwrap().total_athletes, 40);
    assert_eq!(
        service.athlete_profile(&athletes[5].id).unwrap().athlete,
        athletes[5]
    );
}
