// ABOUTME: Report commands for the injury-insight CLI
// ABOUTME: Overview, athlete profile and insight, rollups, projections and cohort reports printed as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Injury Insight Contributors

use injury_core::errors::AppResult;
use injury_insight::service::AnalyticsService;
use injury_intelligence::aggregation::{GroupField, MetricSpec, NumericField, Reducer};
use tracing::info;

use crate::helpers::display::print_json;

/// Population overview
pub fn summary(service: &AnalyticsService) -> AppResult<()> {
    print_json(&service.overview()?)
}

/// Profile of one athlete
pub fn athlete(service: &AnalyticsService, athlete_id: &str) -> AppResult<()> {
    print_json(&service.athlete_profile(athlete_id)?)
}

/// Recommendation cards for one athlete
pub fn insight(service: &AnalyticsService, athlete_id: &str) -> AppResult<()> {
    print_json(&service.insight(athlete_id)?)
}

/// Grouped rollup; mean risk when no metric is given
pub fn aggregate(
    service: &AnalyticsService,
    group_by: &[GroupField],
    mut metrics: Vec<MetricSpec>,
) -> AppResult<()> {
    if metrics.is_empty() {
        metrics.push(MetricSpec::new(NumericField::RiskScore, Reducer::Mean));
    }
    let table = service.aggregate(group_by, &metrics)?;
    info!(groups = table.len(), "Aggregation complete");
    print_json(&table)
}

/// Pearson correlations
pub fn correlations(service: &AnalyticsService) -> AppResult<()> {
    print_json(&service.correlations()?)
}

/// Analytics dashboard
pub fn analytics(service: &AnalyticsService) -> AppResult<()> {
    print_json(&service.analytics()?)
}

/// Statistics report
pub fn statistics(service: &AnalyticsService) -> AppResult<()> {
    print_json(&service.statistics()?)
}

/// Financial projection
pub fn financial(service: &AnalyticsService) -> AppResult<()> {
    let projection = service.financial()?;
    info!(
        injured = projection.total_injured,
        roi = projection.roi_percentage,
        "Financial projection complete"
    );
    print_json(&projection)
}

/// Risk cohort report
pub fn cohort(service: &AnalyticsService, sample: Option<usize>) -> AppResult<()> {
    let report = match sample {
        Some(size) => service.cohort_with_sample(size)?,
        None => service.cohort()?,
    };
    print_json(&report)
}

/// Monthly report
pub fn monthly(service: &AnalyticsService) -> AppResult<()> {
    print_json(&service.monthly()?)
}

/// Return-to-play summary
pub fn return_to_play(service: &AnalyticsService) -> AppResult<()> {
    print_json(&service.return_to_play()?)
}

/// Export summary
pub fn export(service: &AnalyticsService) -> AppResult<()> {
    print_json(&service.export_summary()?)
}
