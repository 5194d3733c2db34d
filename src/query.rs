// ABOUTME: Athlete list query with conjunctive filters, whitelisted stable sorting and pagination
// ABOUTME: Filters by text, sport, country, gender, injury status and risk bucket before paging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Injury Insight Contributors

//! # Athlete Query Layer
//!
//! Narrows a collection by independent optional filters (all must hold),
//! sorts by a whitelisted field and returns one 1-indexed page. The page's
//! `total_count` is the filtered size before pagination.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use injury_core::errors::ValidationError;
use injury_core::models::{Athlete, Gender, RiskBucket, Sport};
use injury_core::pagination::{Page, PageRequest, SortOrder};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Injury status filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InjuryStatus {
    /// Athletes with a current injury
    Injured,
    /// Athletes without a current injury
    Healthy,
}

impl InjuryStatus {
    /// Whether `athlete` has this status
    #[must_use]
    pub const fn matches(self, athlete: &Athlete) -> bool {
        match self {
            Self::Injured => athlete.is_injured(),
            Self::Healthy => !athlete.is_injured(),
        }
    }
}

impl FromStr for InjuryStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "injured" => Ok(Self::Injured),
            "healthy" => Ok(Self::Healthy),
            other => Err(ValidationError::unknown_category("injury status", other)),
        }
    }
}

/// Fields an athlete list may be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Athlete ID
    #[default]
    Id,
    /// Given name
    FirstName,
    /// Family name
    LastName,
    /// Age
    Age,
    /// Sport
    Sport,
    /// Team
    Team,
    /// Country
    Country,
    /// Stored risk score
    RiskScore,
    /// Fitness level
    FitnessLevel,
    /// Performance index
    PerformanceIndex,
    /// Career injuries
    TotalInjuriesCareer,
    /// Days missed this season
    DaysMissed,
    /// Years as a professional
    YearsProfessional,
    /// Body mass index
    Bmi,
    /// Salary
    SalaryUsd,
}

impl SortField {
    /// Every sortable field
    pub const ALL: [Self; 15] = [
        Self::Id,
        Self::FirstName,
        Self::LastName,
        Self::Age,
        Self::Sport,
        Self::Team,
        Self::Country,
        Self::RiskScore,
        Self::FitnessLevel,
        Self::PerformanceIndex,
        Self::TotalInjuriesCareer,
        Self::DaysMissed,
        Self::YearsProfessional,
        Self::Bmi,
        Self::SalaryUsd,
    ];

    /// Column name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Age => "age",
            Self::Sport => "sport",
            Self::Team => "team",
            Self::Country => "country",
            Self::RiskScore => "risk_score",
            Self::FitnessLevel => "fitness_level",
            Self::PerformanceIndex => "performance_index",
            Self::TotalInjuriesCareer => "total_injuries_career",
            Self::DaysMissed => "days_missed",
            Self::YearsProfessional => "years_professional",
            Self::Bmi => "bmi",
            Self::SalaryUsd => "salary_usd",
        }
    }

    /// Ascending comparison of two athletes on this field
    #[must_use]
    pub fn compare(self, a: &Athlete, b: &Athlete) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::FirstName => a.first_name.cmp(&b.first_name),
            Self::LastName => a.last_name.cmp(&b.last_name),
            Self::Age => a.age.cmp(&b.age),
            Self::Sport => a.sport.as_str().cmp(b.sport.as_str()),
            Self::Team => a.team.cmp(&b.team),
            Self::Country => a.country.cmp(&b.country),
            Self::RiskScore => a.risk_score.total_cmp(&b.risk_score),
            Self::FitnessLevel => a.fitness_level.total_cmp(&b.fitness_level),
            Self::PerformanceIndex => a.performance_index.total_cmp(&b.performance_index),
            Self::TotalInjuriesCareer => a.total_injuries_career.cmp(&b.total_injuries_career),
            Self::DaysMissed => a
                .days_missed_current_season
                .cmp(&b.days_missed_current_season),
            Self::YearsProfessional => a.years_professional.cmp(&b.years_professional),
            Self::Bmi => a.bmi.total_cmp(&b.bmi),
            Self::SalaryUsd => a.salary_usd.cmp(&b.salary_usd),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "player_id" => return Ok(Self::Id),
            "days_missed_current_season" => return Ok(Self::DaysMissed),
            _ => {}
        }
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == normalized)
            .ok_or_else(|| ValidationError::unknown_category("sort field", normalized))
    }
}

/// Filter, sort and page parameters for an athlete list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AthleteQuery {
    /// Case-insensitive substring over names, ID and team
    pub search: Option<String>,
    /// Exact sport
    pub sport: Option<Sport>,
    /// Exact country
    pub country: Option<String>,
    /// Exact gender
    pub gender: Option<Gender>,
    /// Injured or healthy
    pub status: Option<InjuryStatus>,
    /// Risk bucket of the stored score
    pub risk: Option<RiskBucket>,
    /// Sort field
    pub sort: SortField,
    /// Sort direction
    pub order: SortOrder,
    /// Page to return
    pub page: PageRequest,
}

impl AthleteQuery {
    /// Whether `athlete` passes every set filter
    #[must_use]
    pub fn matches(&self, athlete: &Athlete) -> bool {
        let needle = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_lowercase);

        needle.is_none_or(|needle| text_matches(athlete, &needle))
            && self.sport.is_none_or(|sport| athlete.sport == sport)
            && self
                .country
                .as_deref()
                .is_none_or(|country| athlete.country == country)
            && self.gender.is_none_or(|gender| athlete.gender == gender)
            && self.status.is_none_or(|status| status.matches(athlete))
            && self
                .risk
                .is_none_or(|bucket| bucket.contains(athlete.risk_score))
    }

    /// Filter, stable-sort and paginate `records`
    #[must_use]
    pub fn run(&self, records: &[Athlete]) -> Page<Athlete> {
        let mut selected: Vec<&Athlete> = records
            .iter()
            .filter(|athlete| self.matches(athlete))
            .collect();

        let field = self.sort;
        match self.order {
            SortOrder::Asc => selected.sort_by(|a, b| field.compare(a, b)),
            SortOrder::Desc => selected.sort_by(|a, b| field.compare(b, a)),
        }

        debug!(
            total = records.len(),
            matched = selected.len(),
            sort = %field,
            order = %self.order,
            page = self.page.page,
            "athlete query"
        );
        Page::paginate(selected, self.page).map(Athlete::clone)
    }
}

fn text_matches(athlete: &Athlete, needle: &str) -> bool {
    [
        athlete.first_name.as_str(),
        athlete.last_name.as_str(),
        athlete.id.as_str(),
        athlete.team.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Athlete list page as presented to list views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteListing {
    /// Athletes on this page
    pub athletes: Vec<Athlete>,
    /// 1-indexed page number
    pub page: usize,
    /// Requested page size
    pub page_size: usize,
    /// Athletes matching the filters before pagination
    pub total_players: usize,
    /// Pages the filtered athletes span
    pub total_pages: usize,
}

impl From<Page<Athlete>> for AthleteListing {
    fn from(page: Page<Athlete>) -> Self {
        Self {
            athletes: page.items,
            page: page.page,
            page_size: page.page_size,
            total_players: page.total_count,
            total_pages: page.total_pages,
        }
    }
}

/// Distinct values for list filter controls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Sports present, sorted by name
    pub sports: Vec<String>,
    /// Countries present, sorted by name
    pub countries: Vec<String>,
}

impl FilterOptions {
    /// Collect the distinct sports and countries of `records`
    #[must_use]
    pub fn from_records(records: &[Athlete]) -> Self {
        let sports: BTreeSet<&str> = records.iter().map(|a| a.sport.as_str()).collect();
        let countries: BTreeSet<&str> = records.iter().map(|a| a.country.as_str()).collect();
        Self {
            sports: sports.into_iter().map(str::to_owned).collect(),
            countries: countries.into_iter().map(str::to_owned).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PopulationConfig;
    use crate::generator::PopulationGenerator;

    fn population() -> Vec<Athlete> {
        PopulationGenerator::new(PopulationConfig {
            seed: 42,
            size: 400,
            injured_probability: 0.35,
        })
        .generate()
        .unwrap()
    }

    #[test]
    fn test_default_query_returns_first_page_in_id_order() {
        let records = population();
        let page = AthleteQuery::default().run(&records);
        assert_eq!(page.total_count, 400);
        assert_eq!(page.items.len(), 25);
        assert_eq!(page.total_pages, 16);
        assert_eq!(page.items[0].id, "PLY00001");
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let records = population();
        let query = AthleteQuery {
            sport: Some(Sport::Swimming),
            status: Some(InjuryStatus::Injured),
            page: PageRequest::new(1, 500).unwrap(),
            ..AthleteQuery::default()
        };
        let page = query.run(&records);
        let expected = records
            .iter()
            .filter(|a| a.sport == Sport::Swimming && a.is_injured())
            .count();
        assert_eq!(page.total_count, expected);
        assert!(page
            .items
            .iter()
            .all(|a| a.sport == Sport::Swimming && a.is_injured()));
    }

    #[test]
    fn test_risk_bucket_filter_uses_bucket_boundaries() {
        let records = population();
        let query = AthleteQuery {
            risk: Some(RiskBucket::Critical),
            page: PageRequest::new(1, 500).unwrap(),
            ..AthleteQuery::default()
        };
        assert!(query.run(&records).items.iter().all(|a| a.risk_score > 0.7));
    }

    #[test]
    fn test_search_is_case_insensitive_over_id() {
        let records = population();
        let query = AthleteQuery {
            search: Some("ply00010".to_owned()),
            ..AthleteQuery::default()
        };
        let page = query.run(&records);
        assert_eq!(page.total_count, 1);
        assert_eq!(page.items[0].id, "PLY00010");
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let records = population();
        let query = AthleteQuery {
            search: Some("   ".to_owned()),
            ..AthleteQuery::default()
        };
        assert_eq!(query.run(&records).total_count, records.len());
    }

    #[test]
    fn test_descending_sort_is_stable() {
        let records = population();
        let query = AthleteQuery {
            sort: SortField::Age,
            order: SortOrder::Desc,
            page: PageRequest::new(1, 500).unwrap(),
            ..AthleteQuery::default()
        };
        let items = query.run(&records).items;
        for pair in items.windows(2) {
            assert!(pair[0].age >= pair[1].age);
            if pair[0].age == pair[1].age {
                assert!(pair[0].id < pair[1].id);
            }
        }
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let records = population();
        let query = AthleteQuery {
            page: PageRequest::new(99, 25).unwrap(),
            ..AthleteQuery::default()
        };
        let page = query.run(&records);
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 400);
    }

    #[test]
    fn test_listing_reports_total_players() {
        let records = population();
        let query = AthleteQuery {
            status: Some(InjuryStatus::Injured),
            ..AthleteQuery::default()
        };
        let injured = records.iter().filter(|a| a.is_injured()).count();
        let listing = AthleteListing::from(query.run(&records));

        assert_eq!(listing.total_players, injured);
        assert_eq!(listing.total_pages, injured.div_ceil(25));
        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["total_players"], injured);
        assert!(json.get("total_count").is_none());
    }

    #[test]
    fn test_sort_field_parsing() {
        assert_eq!("risk_score".parse::<SortField>(), Ok(SortField::RiskScore));
        assert_eq!("player_id".parse::<SortField>(), Ok(SortField::Id));
        assert!("password".parse::<SortField>().is_err());
        assert_eq!("Healthy".parse::<InjuryStatus>(), Ok(InjuryStatus::Healthy));
    }

    #[test]
    fn test_filter_options_are_sorted_and_distinct() {
        let options = FilterOptions::from_records(&population());
        assert_eq!(options.sports.len(), 10);
        assert!(options.countries.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
