// ABOUTME: Command handlers for the injury-insight CLI
// ABOUTME: Prediction and list query commands with their arguments, plus the report commands module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Injury Insight Contributors

pub mod reports;

use clap::Args;
use injury_core::errors::AppResult;
use injury_core::models::{Gender, RiskBucket, Sport};
use injury_core::pagination::{PageRequest, SortOrder};
use injury_insight::query::{AthleteListing, AthleteQuery, InjuryStatus, SortField};
use injury_insight::service::AnalyticsService;
use injury_intelligence::risk_model::RiskProfileInput;
use tracing::info;

use crate::helpers::display::print_json;

/// Prediction form fields
#[derive(Args)]
pub struct PredictArgs {
    /// Sport name; unknown sports use the default weight
    #[arg(long, default_value = "Football")]
    sport: String,

    /// Age in years
    #[arg(long, default_value_t = 25)]
    age: i64,

    /// Height in centimetres
    #[arg(long, default_value_t = 180.0)]
    height: f64,

    /// Weight in kilograms
    #[arg(long, default_value_t = 75.0)]
    weight: f64,

    /// Years as a professional
    #[arg(long, default_value_t = 3)]
    years_pro: i64,

    /// Weekly training hours
    #[arg(long, default_value_t = 20)]
    training_hours: i64,

    /// Prior injury count
    #[arg(long, default_value_t = 0)]
    prior_injuries: i64,

    /// Prior surgery count
    #[arg(long, default_value_t = 0)]
    surgeries: i64,

    /// Chronic condition, or None
    #[arg(long, default_value = "None")]
    chronic_condition: String,

    /// Fitness level, 0 to 100
    #[arg(long, default_value_t = 85.0)]
    fitness: f64,

    /// Current injury severity: None, Minor, Moderate or Severe
    #[arg(long, default_value = "None")]
    severity: String,
}

impl From<PredictArgs> for RiskProfileInput {
    fn from(args: PredictArgs) -> Self {
        Self {
            sport: args.sport,
            age: args.age,
            height_cm: args.height,
            weight_kg: args.weight,
            years_pro: args.years_pro,
            training_hours: args.training_hours,
            prior_injuries: args.prior_injuries,
            surgeries: args.surgeries,
            chronic_condition: args.chronic_condition,
            fitness: args.fitness,
            current_injury_severity: args.severity,
        }
    }
}

/// Athlete list filters, sort and page
#[derive(Args)]
pub struct QueryArgs {
    /// Case-insensitive text over names, ID and team
    #[arg(long)]
    search: Option<String>,

    /// Sport
    #[arg(long)]
    sport: Option<Sport>,

    /// Country
    #[arg(long)]
    country: Option<String>,

    /// Gender
    #[arg(long)]
    gender: Option<Gender>,

    /// injured or healthy
    #[arg(long)]
    status: Option<InjuryStatus>,

    /// Risk bucket: low, moderate, high or critical
    #[arg(long)]
    risk: Option<RiskBucket>,

    /// Sort field
    #[arg(long, default_value = "id")]
    sort: SortField,

    /// asc or desc
    #[arg(long, default_value = "asc")]
    order: SortOrder,

    /// 1-indexed page number
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Page size, defaults to INJURY_PAGE_SIZE
    #[arg(long)]
    page_size: Option<usize>,
}

/// Score a prediction form and print the assessment
pub fn predict(service: &AnalyticsService, args: PredictArgs) -> AppResult<()> {
    let input = RiskProfileInput::from(args);
    let assessment = service.predict(&input)?;
    info!(
        risk_percentage = assessment.risk_percentage,
        category = %assessment.risk_category,
        "Prediction complete"
    );
    print_json(&assessment)
}

/// Run a list query and print the page
pub fn query(service: &AnalyticsService, args: QueryArgs) -> AppResult<()> {
    let page = match args.page_size {
        Some(size) => PageRequest::new(args.page, size)?,
        None => service.page(args.page)?,
    };
    let query = AthleteQuery {
        search: args.search,
        sport: args.sport,
        country: args.country,
        gender: args.gender,
        status: args.status,
        risk: args.risk,
        sort: args.sort,
        order: args.order,
        page,
    };
    let result = service.query(&query)?;
    info!(
        total = result.total_count,
        pages = result.total_pages,
        "Query complete"
    );
    print_json(&AthleteListing::from(result))
}
