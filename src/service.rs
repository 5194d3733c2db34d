// ABOUTME: Analytics service facade combining the repository with scoring, rollups and projections
// ABOUTME: Entry point consumed by presentation code and the command-line binary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Injury Insight Contributors

//! # Analytics Service
//!
//! Every operation takes a fresh snapshot of the athlete collection and
//! recomputes its result; nothing derived is cached between calls.
//!
//! Stochastic operations (prediction noise, cost synthesis, trend backfill,
//! cohort sampling) each draw from a new `ChaCha8Rng` seeded with the
//! configured projection seed, so the same request over the same collection
//! returns the same answer.

use std::sync::Arc;

use chrono::NaiveDate;
use injury_core::errors::AppResult;
use injury_core::models::Athlete;
use injury_core::pagination::{Page, PageRequest};
use injury_intelligence::aggregation::{
    AggregateTable, AggregationEngine, CorrelationReport, GroupField, MetricSpec,
};
use injury_intelligence::cohort::{CohortAnalyzer, RiskCohortReport, REASSESSMENT_SAMPLE};
use injury_intelligence::financial::{FinancialProjection, FinancialProjector};
use injury_intelligence::insight::AthleteInsight;
use injury_intelligence::reports::{
    AnalyticsDashboard, AthleteProfile, ExportSummary, MonthlyReport, Overview,
    PopulationReports, ReturnToPlaySummary, StatisticsReport,
};
use injury_intelligence::risk_model::{RiskAssessment, RiskModel, RiskProfileInput};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::config::ServerConfig;
use crate::generator::PopulationGenerator;
use crate::query::{AthleteQuery, FilterOptions};
use crate::repository::AthleteRepository;

/// Decimal places applied to aggregate tables and correlations on output
const PRESENTATION_DECIMALS: i32 = 3;

/// Facade over the athlete repository and the intelligence components
#[derive(Debug, Clone)]
pub struct AnalyticsService {
    repository: Arc<AthleteRepository>,
    projector: FinancialProjector,
    config: ServerConfig,
}

impl AnalyticsService {
    /// Service with a lazily generated population
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let generator = PopulationGenerator::new(config.population);
        Self::with_repository(Arc::new(AthleteRepository::new(generator)), config)
    }

    /// Service over an existing repository
    #[must_use]
    pub fn with_repository(repository: Arc<AthleteRepository>, config: ServerConfig) -> Self {
        info!(
            population = config.population.size,
            seed = config.population.seed,
            "Analytics service ready"
        );
        Self {
            repository,
            projector: FinancialProjector::default(),
            config,
        }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Underlying repository
    #[must_use]
    pub const fn repository(&self) -> &Arc<AthleteRepository> {
        &self.repository
    }

    /// Date month labels are anchored to
    #[must_use]
    pub const fn as_of(&self) -> NaiveDate {
        self.config.projection.as_of
    }

    fn rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.config.projection.seed)
    }

    fn records(&self) -> AppResult<Arc<Vec<Athlete>>> {
        self.repository.snapshot()
    }

    /// Dashboard overview
    ///
    /// # Errors
    ///
    /// Propagates repository errors.
    pub fn overview(&self) -> AppResult<Overview> {
        Ok(PopulationReports::overview(&self.records()?))
    }

    /// Score a prediction form
    ///
    /// # Errors
    ///
    /// Returns a validation error for malformed or out-of-range input.
    pub fn predict(&self, input: &RiskProfileInput) -> AppResult<RiskAssessment> {
        let assessment = RiskModel::score_athlete(input, &mut self.rng())?;
        debug!(
            sport = %input.sport,
            risk = assessment.risk_score,
            category = %assessment.risk_category,
            "prediction scored"
        );
        Ok(assessment)
    }

    /// Profile of one athlete
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown ID.
    pub fn athlete_profile(&self, athlete_id: &str) -> AppResult<AthleteProfile> {
        PopulationReports::athlete_profile(&self.records()?, athlete_id)
    }

    /// Recommendation cards for one athlete
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown ID.
    pub fn insight(&self, athlete_id: &str) -> AppResult<AthleteInsight> {
        PopulationReports::insight(&self.records()?, athlete_id)
    }

    /// Grouped rollup, rounded for presentation
    ///
    /// # Errors
    ///
    /// Propagates repository errors.
    pub fn aggregate(
        &self,
        group_by: &[GroupField],
        metrics: &[MetricSpec],
    ) -> AppResult<AggregateTable> {
        let records = self.records()?;
        Ok(AggregationEngine::aggregate(&records, group_by, metrics).rounded(PRESENTATION_DECIMALS))
    }

    /// Population-wide correlations, rounded for presentation
    ///
    /// # Errors
    ///
    /// Propagates repository errors.
    pub fn correlations(&self) -> AppResult<CorrelationReport> {
        Ok(AggregationEngine::correlations(&self.records()?).rounded(PRESENTATION_DECIMALS))
    }

    /// Analytics dashboard
    ///
    /// # Errors
    ///
    /// Propagates repository errors.
    pub fn analytics(&self) -> AppResult<AnalyticsDashboard> {
        Ok(PopulationReports::analytics(&self.records()?))
    }

    /// Statistics report
    ///
    /// # Errors
    ///
    /// Propagates repository errors.
    pub fn statistics(&self) -> AppResult<StatisticsReport> {
        Ok(PopulationReports::statistics(&self.records()?))
    }

    /// Financial projection over the athletes currently injured
    ///
    /// # Errors
    ///
    /// Propagates repository errors.
    pub fn financial(&self) -> AppResult<FinancialProjection> {
        let records = self.records()?;
        Ok(self
            .projector
            .project_population(&records, self.as_of(), &mut self.rng()))
    }

    /// Risk cohort report with the default re-assessment sample
    ///
    /// # Errors
    ///
    /// Propagates repository errors.
    pub fn cohort(&self) -> AppResult<RiskCohortReport> {
        self.cohort_with_sample(REASSESSMENT_SAMPLE)
    }

    /// Risk cohort report re-assessing up to `sample_size` athletes
    ///
    /// # Errors
    ///
    /// Propagates repository errors.
    pub fn cohort_with_sample(&self, sample_size: usize) -> AppResult<RiskCohortReport> {
        let records = self.records()?;
        Ok(CohortAnalyzer::report(&records, sample_size, &mut self.rng()))
    }

    /// Monthly report for the configured month
    ///
    /// # Errors
    ///
    /// Propagates repository errors.
    pub fn monthly(&self) -> AppResult<MonthlyReport> {
        Ok(PopulationReports::monthly(&self.records()?, self.as_of()))
    }

    /// Return-to-play summary
    ///
    /// # Errors
    ///
    /// Propagates repository errors.
    pub fn return_to_play(&self) -> AppResult<ReturnToPlaySummary> {
        Ok(PopulationReports::return_to_play(&self.records()?))
    }

    /// Export summary
    ///
    /// # Errors
    ///
    /// Propagates repository errors.
    pub fn export_summary(&self) -> AppResult<ExportSummary> {
        Ok(PopulationReports::export_summary(&self.records()?))
    }

    /// One page of athletes matching `query`
    ///
    /// # Errors
    ///
    /// Propagates repository errors.
    pub fn query(&self, query: &AthleteQuery) -> AppResult<Page<Athlete>> {
        Ok(query.run(&self.records()?))
    }

    /// Page request using the configured page size
    ///
    /// # Errors
    ///
    /// Returns a validation error when the configured page size is invalid.
    pub fn page(&self, page: usize) -> AppResult<PageRequest> {
        Ok(PageRequest::new(page, self.config.query.page_size)?)
    }

    /// Distinct sports and countries for list filters
    ///
    /// # Errors
    ///
    /// Propagates repository errors.
    pub fn filter_options(&self) -> AppResult<FilterOptions> {
        Ok(FilterOptions::from_records(&self.records()?))
    }

    /// Rebuild the population and swap it in, returning the new generation number
    ///
    /// # Errors
    ///
    /// Propagates generator and repository errors.
    pub fn regenerate(&self) -> AppResult<u64> {
        self.repository.regenerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PopulationConfig;
    use injury_intelligence::aggregation::{NumericField, Reducer};

    fn service() -> AnalyticsService {
        let config = ServerConfig {
            population: PopulationConfig {
                seed: 42,
                size: 150,
                injured_probability: 0.35,
            },
            ..ServerConfig::default()
        };
        AnalyticsService::new(config)
    }

    #[test]
    fn test_financial_projection_is_reproducible() {
        let service = service();
        let first = service.financial().unwrap();
        let second = service.financial().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.total_athletes, 150);
    }

    #[test]
    fn test_aggregate_by_sport_counts_population() {
        let service = service();
        let table = service
            .aggregate(
                &[GroupField::Sport],
                &[MetricSpec::new(NumericField::RiskScore, Reducer::Mean)],
            )
            .unwrap();
        let counted: usize = table.rows.iter().map(|row| row.count).sum();
        assert_eq!(counted, 150);
    }

    #[test]
    fn test_regenerate_bumps_generation() {
        let service = service();
        service.overview().unwrap();
        assert_eq!(service.regenerate().unwrap(), 2);
    }

    #[test]
    fn test_page_uses_configured_size() {
        let request = service().page(3).unwrap();
        assert_eq!(request.page, 3);
        assert_eq!(request.page_size, 25);
    }
}
