// ABOUTME: Financial impact projection of current injuries: totals, ROI, insurance split, cost rankings
// ABOUTME: Includes a clearly labelled synthetic monthly trend that is display filler, not history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Injury Insight Contributors
#![allow(clippy::cast_precision_loss)] // Safe: injury counts are far below 2^52
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Safe: values are rounded, non-negative and small

//! # Financial Impact Projector
//!
//! Projects the cost of the currently injured subset of a population and the
//! return on a flat per-athlete prevention programme.
//!
//! Monetary figures are computed unrounded and rounded to whole currency
//! units only when the [`FinancialProjection`] is assembled. A population
//! with no injured athletes yields [`FinancialProjection::empty`].
//!
//! The [`SyntheticTrend`] is a stochastic backfill produced by resampling the
//! current costs. It exists for illustrative charts and must never be read
//! as a real time series.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use injury_core::constants::costs::{
    DEFAULT_RECOVERY_DAYS, INDUSTRY_AVG_COST_PER_INJURY, INDUSTRY_AVG_INJURY_RATE,
    INJURY_REDUCTION_RATE, INSURANCE_COVERAGE_RATE, PREVENTION_COST_PER_ATHLETE,
    PRODUCTIVITY_COST_PER_DAY, SYNTHETIC_MEDICAL_BASE, SYNTHETIC_MEDICAL_RISK_MULTIPLIER,
    TOP_INJURY_COSTS, TREND_MONTHS, TREND_MONTH_STEP_DAYS, TREND_VOLUME_RANGE,
};
use injury_core::models::{Athlete, SeverityBucket};
use injury_core::rounding::round_to;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::statistics::StatisticalAnalyzer;

/// Assumptions behind a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostAssumptions {
    /// Annual prevention programme cost per athlete
    pub prevention_cost_per_athlete: f64,
    /// Share of injury cost the programme removes
    pub injury_reduction_rate: f64,
    /// Share of medical cost covered by insurance
    pub insurance_coverage_rate: f64,
    /// Lost productivity per recovery day, used when a record has no cost
    pub productivity_cost_per_day: f64,
    /// Industry average cost per injury
    pub industry_avg_cost_per_injury: f64,
    /// Industry average injury rate, percent
    pub industry_avg_injury_rate: f64,
}

impl Default for CostAssumptions {
    fn default() -> Self {
        Self {
            prevention_cost_per_athlete: PREVENTION_COST_PER_ATHLETE,
            injury_reduction_rate: INJURY_REDUCTION_RATE,
            insurance_coverage_rate: INSURANCE_COVERAGE_RATE,
            productivity_cost_per_day: PRODUCTIVITY_COST_PER_DAY,
            industry_avg_cost_per_injury: INDUSTRY_AVG_COST_PER_INJURY,
            industry_avg_injury_rate: INDUSTRY_AVG_INJURY_RATE,
        }
    }
}

/// Cost of the injured athletes in one severity bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeverityCost {
    /// Severity bucket of the athletes' risk scores
    pub bucket: SeverityBucket,
    /// Injured athletes in the bucket
    pub count: usize,
    /// Medical plus productivity cost
    pub total_cost: f64,
}

/// Cost of current injuries within one sport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportCost {
    /// Sport label
    pub sport: String,
    /// Injured athletes
    pub injuries: usize,
    /// Medical cost
    pub medical: f64,
    /// Lost productivity cost
    pub productivity: f64,
    /// Medical plus productivity cost
    pub total_cost: f64,
}

/// One synthetic month of cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyCost {
    /// Month label, e.g. `Mar 2025`
    pub month: String,
    /// Synthetic injury count
    pub injuries: usize,
    /// Resampled medical cost
    pub medical_cost: f64,
    /// Resampled lost productivity
    pub lost_productivity: f64,
    /// Medical plus productivity
    pub cost: f64,
}

/// Illustrative trailing cost series, oldest month first.
///
/// Built by resampling current costs; not ground truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticTrend {
    /// Always true; carried in the output so consumers cannot mistake it for history
    pub synthetic: bool,
    /// Months, oldest first
    pub months: Vec<MonthlyCost>,
}

impl SyntheticTrend {
    const fn empty() -> Self {
        Self {
            synthetic: true,
            months: Vec::new(),
        }
    }
}

/// Cost of one injury type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InjuryTypeCost {
    /// Injury name
    pub injury_type: String,
    /// Athletes currently carrying it
    pub count: usize,
    /// Medical plus productivity cost
    pub cost: f64,
}

/// Month-over-month direction of the synthetic trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Latest month cost more than the one before
    Increasing,
    /// Latest month cost the same or less
    Decreasing,
}

/// Summary of the last two synthetic months
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostTrend {
    /// Latest month cost
    pub current_month: f64,
    /// Previous month cost
    pub previous_month: f64,
    /// Mean monthly cost over the whole series
    pub avg_monthly: f64,
    /// Direction of the latest change
    pub direction: TrendDirection,
    /// Percentage change, 0 when the previous month cost nothing
    pub change_percent: f64,
    /// Absolute value of `change_percent`
    pub change_percent_abs: f64,
}

/// What the prevention programme would remove
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreventionImpact {
    /// Injured share of the population, percent
    pub current_injury_rate: f64,
    /// Injury rate after the reduction, percent
    pub target_injury_rate: f64,
    /// Injuries removed
    pub potential_reduction: usize,
    /// Average cost saved per avoided injury
    pub cost_savings_per_injury: f64,
    /// Cost of the avoidable injuries
    pub total_preventable_cost: f64,
}

/// Comparison against industry averages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryComparison {
    /// Cost per injury versus industry, percent difference
    pub vs_industry_cost: f64,
    /// Injury rate minus the industry rate, percentage points
    pub vs_industry_rate: f64,
    /// Whether cost per injury is below the industry average
    pub performing_better: bool,
    /// `100 - vs_industry_cost`, clamped to `[0, 100]`
    pub cost_efficiency_score: f64,
}

/// Complete projection, ready to serialize
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialProjection {
    /// Athletes in the population
    pub total_athletes: usize,
    /// Currently injured athletes
    pub total_injured: usize,
    /// Sum of medical costs
    pub total_medical_costs: f64,
    /// Sum of lost productivity
    pub total_lost_productivity: f64,
    /// Annual prevention programme cost
    pub prevention_investment: f64,
    /// Cost the programme would remove
    pub potential_savings: f64,
    /// Return on the programme, percent
    pub roi_percentage: f64,
    /// ROI capped to `[0, 100]` for gauges
    pub roi_percentage_display: f64,
    /// Mean recovery days of the injured, 30 when nobody is injured
    pub avg_recovery_days: u32,
    /// Medical cost covered by insurance
    pub insurance_covered: f64,
    /// Medical cost paid out of pocket
    pub out_of_pocket: f64,
    /// Medical cost per injured athlete
    pub avg_cost_per_injury: f64,
    /// Costs per severity bucket, non-empty buckets only
    pub cost_by_severity: Vec<SeverityCost>,
    /// Costs per sport, by sport name
    pub sport_costs: Vec<SportCost>,
    /// Illustrative monthly series
    pub synthetic_trend: SyntheticTrend,
    /// Most expensive injury types
    pub top_injury_costs: Vec<InjuryTypeCost>,
    /// Last-two-months summary of the synthetic series
    pub cost_trends: Option<CostTrend>,
    /// Prevention programme impact
    pub prevention_impact: Option<PreventionImpact>,
    /// Industry comparison
    pub industry_comparison: Option<IndustryComparison>,
}

impl FinancialProjection {
    /// All-zero projection for a population with no injured athletes
    #[must_use]
    pub fn empty(total_athletes: usize) -> Self {
        Self {
            total_athletes,
            total_injured: 0,
            total_medical_costs: 0.0,
            total_lost_productivity: 0.0,
            prevention_investment: 0.0,
            potential_savings: 0.0,
            roi_percentage: 0.0,
            roi_percentage_display: 0.0,
            avg_recovery_days: DEFAULT_RECOVERY_DAYS as u32,
            insurance_covered: 0.0,
            out_of_pocket: 0.0,
            avg_cost_per_injury: 0.0,
            cost_by_severity: Vec::new(),
            sport_costs: Vec::new(),
            synthetic_trend: SyntheticTrend::empty(),
            top_injury_costs: Vec::new(),
            cost_trends: None,
            prevention_impact: None,
            industry_comparison: None,
        }
    }
}

/// Effective costs of one injured athlete after synthesis
struct CostLine<'a> {
    athlete: &'a Athlete,
    medical: f64,
    productivity: f64,
}

impl CostLine<'_> {
    fn total(&self) -> f64 {
        self.medical + self.productivity
    }
}

/// Financial impact projector
#[derive(Debug, Clone, Default)]
pub struct FinancialProjector {
    assumptions: CostAssumptions,
}

impl FinancialProjector {
    /// Projector with custom assumptions
    #[must_use]
    pub const fn new(assumptions: CostAssumptions) -> Self {
        Self { assumptions }
    }

    /// Assumptions in use
    #[must_use]
    pub const fn assumptions(&self) -> &CostAssumptions {
        &self.assumptions
    }

    /// Project the whole population, treating athletes with a current injury as injured
    pub fn project_population<R: Rng + ?Sized>(
        &self,
        all: &[Athlete],
        as_of: NaiveDate,
        rng: &mut R,
    ) -> FinancialProjection {
        let injured: Vec<&Athlete> = all.iter().filter(|a| a.is_injured()).collect();
        self.project(&injured, all, as_of, rng)
    }

    /// Project the cost of `injured` within the population `all`.
    ///
    /// `rng` drives cost synthesis for records without costs and the
    /// synthetic trend. `as_of` labels the latest trend month.
    pub fn project<R: Rng + ?Sized>(
        &self,
        injured: &[&Athlete],
        all: &[Athlete],
        as_of: NaiveDate,
        rng: &mut R,
    ) -> FinancialProjection {
        let total_athletes = all.len();
        if injured.is_empty() {
            debug!(total_athletes, "no injured athletes, empty projection");
            return FinancialProjection::empty(total_athletes);
        }
        let a = &self.assumptions;
        let total_injured = injured.len();

        let lines = self.cost_lines(injured, rng);
        let total_medical: f64 = lines.iter().map(|line| line.medical).sum();
        let total_productivity: f64 = lines.iter().map(|line| line.productivity).sum();

        let prevention_investment = total_athletes as f64 * a.prevention_cost_per_athlete;
        let potential_savings = (total_medical + total_productivity) * a.injury_reduction_rate;
        let roi = StatisticalAnalyzer::ratio(
            (potential_savings - prevention_investment) * 100.0,
            prevention_investment,
        );
        let roi_display = if roi > 0.0 { roi.min(100.0) } else { 0.0 };
        let avg_cost_per_injury = StatisticalAnalyzer::ratio(total_medical, total_injured as f64);
        let avg_recovery_days = StatisticalAnalyzer::mean(
            injured.iter().map(|athlete| f64::from(athlete.recovery_days)),
        )
        .floor() as u32;

        let injury_rate = StatisticalAnalyzer::percentage(total_injured, total_athletes);
        let synthetic_trend = Self::synthetic_trend(&lines, as_of, rng);

        debug!(
            total_athletes,
            total_injured,
            total_medical,
            total_productivity,
            "financial projection computed"
        );

        FinancialProjection {
            total_athletes,
            total_injured,
            total_medical_costs: round_to(total_medical, 0),
            total_lost_productivity: round_to(total_productivity, 0),
            prevention_investment: round_to(prevention_investment, 0),
            potential_savings: round_to(potential_savings, 0),
            roi_percentage: round_to(roi, 1),
            roi_percentage_display: round_to(roi_display, 1),
            avg_recovery_days,
            insurance_covered: round_to(total_medical * a.insurance_coverage_rate, 0),
            out_of_pocket: round_to(total_medical * (1.0 - a.insurance_coverage_rate), 0),
            avg_cost_per_injury: round_to(avg_cost_per_injury, 0),
            cost_by_severity: Self::cost_by_severity(&lines),
            sport_costs: Self::sport_costs(&lines),
            cost_trends: Self::cost_trend(&synthetic_trend),
            synthetic_trend,
            top_injury_costs: Self::top_injury_costs(&lines),
            prevention_impact: Some(self.prevention_impact(
                total_injured,
                injury_rate,
                avg_cost_per_injury,
            )),
            industry_comparison: Some(self.industry_comparison(avg_cost_per_injury, injury_rate)),
        }
    }

    /// Effective costs, synthesizing any that are missing
    fn cost_lines<'a, R: Rng + ?Sized>(
        &self,
        injured: &[&'a Athlete],
        rng: &mut R,
    ) -> Vec<CostLine<'a>> {
        let (base_low, base_high) = SYNTHETIC_MEDICAL_BASE;
        injured
            .iter()
            .map(|athlete| {
                let medical = if athlete.medical_cost > 0.0 {
                    athlete.medical_cost
                } else {
                    athlete.risk_score * SYNTHETIC_MEDICAL_RISK_MULTIPLIER
                        + rng.gen_range(base_low..base_high)
                };
                let productivity = if athlete.lost_productivity_cost > 0.0 {
                    athlete.lost_productivity_cost
                } else {
                    f64::from(athlete.recovery_days) * self.assumptions.productivity_cost_per_day
                };
                CostLine {
                    athlete,
                    medical,
                    productivity,
                }
            })
            .collect()
    }

    fn cost_by_severity(lines: &[CostLine<'_>]) -> Vec<SeverityCost> {
        SeverityBucket::ALL
            .into_iter()
            .filter_map(|bucket| {
                let members: Vec<&CostLine<'_>> = lines
                    .iter()
                    .filter(|line| line.athlete.severity_bucket() == bucket)
                    .collect();
                if members.is_empty() {
                    return None;
                }
                Some(SeverityCost {
                    bucket,
                    count: members.len(),
                    total_cost: round_to(members.iter().map(|line| line.total()).sum(), 0),
                })
            })
            .collect()
    }

    fn sport_costs(lines: &[CostLine<'_>]) -> Vec<SportCost> {
        let mut by_sport: BTreeMap<&'static str, (usize, f64, f64)> = BTreeMap::new();
        for line in lines {
            let entry = by_sport
                .entry(line.athlete.sport.as_str())
                .or_insert((0, 0.0, 0.0));
            entry.0 += 1;
            entry.1 += line.medical;
            entry.2 += line.productivity;
        }
        by_sport
            .into_iter()
            .map(|(sport, (injuries, medical, productivity))| SportCost {
                sport: sport.to_owned(),
                injuries,
                medical: round_to(medical, 0),
                productivity: round_to(productivity, 0),
                total_cost: round_to(medical + productivity, 0),
            })
            .collect()
    }

    fn top_injury_costs(lines: &[CostLine<'_>]) -> Vec<InjuryTypeCost> {
        let mut by_type: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
        for line in lines {
            let Some(injury) = line.athlete.current_injury.as_deref() else {
                continue;
            };
            let entry = by_type.entry(injury).or_insert((0, 0.0));
            entry.0 += 1;
            entry.1 += line.total();
        }
        let mut ranked: Vec<InjuryTypeCost> = by_type
            .into_iter()
            .map(|(injury_type, (count, cost))| InjuryTypeCost {
                injury_type: injury_type.to_owned(),
                count,
                cost,
            })
            .collect();
        ranked.sort_by(|a, b| b.cost.total_cmp(&a.cost));
        ranked.truncate(TOP_INJURY_COSTS);
        for entry in &mut ranked {
            entry.cost = round_to(entry.cost, 0);
        }
        ranked
    }

    /// Resample current costs into a trailing monthly series.
    ///
    /// Each month draws a volume multiplier, then samples that many medical
    /// and productivity costs with replacement.
    fn synthetic_trend<R: Rng + ?Sized>(
        lines: &[CostLine<'_>],
        as_of: NaiveDate,
        rng: &mut R,
    ) -> SyntheticTrend {
        let (volume_low, volume_high) = TREND_VOLUME_RANGE;
        let injured = lines.len() as f64;
        let mut months = Vec::with_capacity(TREND_MONTHS);

        for offset in 0..TREND_MONTHS {
            let step = TREND_MONTH_STEP_DAYS.unsigned_abs() * offset as u64;
            let month_date = as_of.checked_sub_days(Days::new(step)).unwrap_or(as_of);
            let injuries = (injured * rng.gen_range(volume_low..volume_high))
                .round()
                .max(0.0) as usize;

            let mut medical = 0.0;
            let mut productivity = 0.0;
            if !lines.is_empty() {
                for _ in 0..injuries {
                    medical += lines[rng.gen_range(0..lines.len())].medical;
                }
                for _ in 0..injuries {
                    productivity += lines[rng.gen_range(0..lines.len())].productivity;
                }
            }

            months.push(MonthlyCost {
                month: month_date.format("%b %Y").to_string(),
                injuries,
                medical_cost: round_to(medical, 0),
                lost_productivity: round_to(productivity, 0),
                cost: round_to(medical + productivity, 0),
            });
        }
        months.reverse();

        SyntheticTrend {
            synthetic: true,
            months,
        }
    }

    fn cost_trend(trend: &SyntheticTrend) -> Option<CostTrend> {
        let (current, previous) = match trend.months.as_slice() {
            [.., previous, current] => (current.cost, previous.cost),
            [only] => (only.cost, 0.0),
            [] => return None,
        };
        let avg_monthly = StatisticalAnalyzer::mean(trend.months.iter().map(|month| month.cost));
        let change = StatisticalAnalyzer::ratio((current - previous) * 100.0, previous);
        let change_percent = round_to(change, 1);
        Some(CostTrend {
            current_month: current,
            previous_month: previous,
            avg_monthly: round_to(avg_monthly, 0),
            direction: if current > previous {
                TrendDirection::Increasing
            } else {
                TrendDirection::Decreasing
            },
            change_percent,
            change_percent_abs: change_percent.abs(),
        })
    }

    fn prevention_impact(
        &self,
        total_injured: usize,
        injury_rate: f64,
        avg_cost_per_injury: f64,
    ) -> PreventionImpact {
        let reduction = self.assumptions.injury_reduction_rate;
        let avoidable = total_injured as f64 * reduction;
        PreventionImpact {
            current_injury_rate: round_to(injury_rate, 1),
            target_injury_rate: round_to(injury_rate * (1.0 - reduction), 1),
            potential_reduction: avoidable.floor() as usize,
            cost_savings_per_injury: round_to(avg_cost_per_injury, 0),
            total_preventable_cost: round_to(avoidable * avg_cost_per_injury, 0),
        }
    }

    fn industry_comparison(&self, avg_cost_per_injury: f64, injury_rate: f64) -> IndustryComparison {
        let industry_cost = self.assumptions.industry_avg_cost_per_injury;
        let vs_cost = StatisticalAnalyzer::ratio(
            (avg_cost_per_injury - industry_cost) * 100.0,
            industry_cost,
        );
        IndustryComparison {
            vs_industry_cost: round_to(vs_cost, 1),
            vs_industry_rate: round_to(injury_rate - self.assumptions.industry_avg_injury_rate, 1),
            performing_better: avg_cost_per_injury < industry_cost,
            cost_efficiency_score: round_to((100.0 - vs_cost).clamp(0.0, 100.0), 1),
        }
    }
}
