// ABOUTME: Criterion benchmarks for the injury intelligence algorithms
// ABOUTME: Measures population generation, risk scoring, rollups, projection and list queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Injury Insight Contributors

//! Criterion benchmarks for population-scale analytics.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use injury_core::models::{InjurySeverity, Sport};
use injury_core::pagination::{PageRequest, SortOrder};
use injury_insight::config::PopulationConfig;
use injury_insight::generator::PopulationGenerator;
use injury_insight::query::{AthleteQuery, SortField};
use injury_insight::Athlete;
use injury_intelligence::aggregation::{
    AggregationEngine, GroupField, MetricSpec, NumericField, Reducer,
};
use injury_intelligence::financial::FinancialProjector;
use injury_intelligence::risk_model::{RiskModel, RiskProfileInput};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const POPULATION_SIZES: [usize; 3] = [500, 2000, 10_000];

fn population(size: usize) -> Vec<Athlete> {
    PopulationGenerator::new(PopulationConfig {
        size,
        ..PopulationConfig::default()
    })
    .generate()
    .unwrap()
}

fn bench_population_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");
    group.sample_size(20);

    for size in POPULATION_SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("generate", size), &size, |b, &size| {
            b.iter(|| black_box(population(size)));
        });
    }

    group.finish();
}

fn bench_risk_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("risk_model");
    let input = RiskProfileInput {
        sport: Sport::Rugby.as_str().to_owned(),
        age: 31,
        prior_injuries: 4,
        surgeries: 2,
        current_injury_severity: InjurySeverity::Moderate.as_str().to_owned(),
        ..RiskProfileInput::default()
    };

    group.bench_function("score_prediction_form", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        b.iter(|| black_box(RiskModel::score_athlete(black_box(&input), &mut rng).unwrap()));
    });

    let athletes = population(2000);
    group.throughput(Throughput::Elements(athletes.len() as u64));
    group.bench_function("rescore_population_2000", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        b.iter(|| {
            athletes
                .iter()
                .map(|athlete| RiskModel::score(athlete, &mut rng).risk)
                .sum::<f64>()
        });
    });

    group.finish();
}

fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");
    let metrics = [
        MetricSpec::new(NumericField::RiskScore, Reducer::Mean),
        MetricSpec::new(NumericField::DaysMissed, Reducer::Sum),
    ];

    for size in POPULATION_SIZES {
        let athletes = population(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::new("sport_by_risk_bucket", size),
            &athletes,
            |b, athletes| {
                b.iter(|| {
                    black_box(AggregationEngine::aggregate(
                        athletes,
                        &[GroupField::Sport, GroupField::RiskBucket],
                        &metrics,
                    ))
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("correlations", size),
            &athletes,
            |b, athletes| b.iter(|| black_box(AggregationEngine::correlations(athletes))),
        );
    }

    group.finish();
}

fn bench_financial_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("financial");
    let as_of = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    let projector = FinancialProjector::default();
    let athletes = population(2000);

    group.bench_function("project_population_2000", |b| {
        b.iter(|| {
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            black_box(projector.project_population(&athletes, as_of, &mut rng))
        });
    });

    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");
    let athletes = population(10_000);
    let query = AthleteQuery {
        search: Some("an".to_owned()),
        sort: SortField::RiskScore,
        order: SortOrder::Desc,
        page: PageRequest::new(3, 50).unwrap(),
        ..AthleteQuery::default()
    };

    group.throughput(Throughput::Elements(athletes.len() as u64));
    group.bench_function("search_sort_paginate_10000", |b| {
        b.iter(|| black_box(query.run(&athletes)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_population_generation,
    bench_risk_scoring,
    bench_aggregation,
    bench_financial_projection,
    bench_query,
);

criterion_main!(benches);
