// ABOUTME: Score and age bucketing used by rollups, filters, and financial severity analysis
// ABOUTME: Risk and severity buckets keep separate boundary sets on purpose
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Injury Insight Contributors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::buckets::{
    AGE_BUCKET_UPPER_BOUNDS, MIN_BUCKETED_AGE, RISK_BUCKET_UPPER_BOUNDS,
    SEVERITY_BUCKET_UPPER_BOUNDS,
};
use crate::errors::ValidationError;

/// Index of the first upper bound that `value` does not exceed, or the last slot
fn right_closed_slot(value: f64, upper_bounds: &[f64]) -> usize {
    upper_bounds
        .iter()
        .position(|bound| value <= *bound)
        .unwrap_or(upper_bounds.len())
}

/// Risk bucket used by list filters and dashboards.
///
/// Boundaries: `[0, 0.3]` Low, `(0.3, 0.5]` Moderate, `(0.5, 0.7]` High,
/// `(0.7, 1.0]` Critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskBucket {
    /// Score up to 0.3 inclusive
    Low,
    /// Score above 0.3 up to 0.5
    Moderate,
    /// Score above 0.5 up to 0.7
    High,
    /// Score above 0.7
    Critical,
}

impl RiskBucket {
    /// Every bucket, lowest first
    pub const ALL: [Self; 4] = [Self::Low, Self::Moderate, Self::High, Self::Critical];

    /// Bucket for a risk score
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        Self::ALL[right_closed_slot(score, &RISK_BUCKET_UPPER_BOUNDS)]
    }

    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    /// Whether `score` falls in this bucket
    #[must_use]
    pub fn contains(&self, score: f64) -> bool {
        Self::from_score(score) == *self
    }
}

impl fmt::Display for RiskBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskBucket {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "moderate" | "medium" => Ok(Self::Moderate),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            other => Err(ValidationError::unknown_category("risk level", other)),
        }
    }
}

/// Severity bucket for financial cost analysis.
///
/// Boundaries: `[0, 0.3]` Low, `(0.3, 0.6]` Medium, `(0.6, 0.8]` High,
/// `(0.8, 1.0]` Critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SeverityBucket {
    /// Score up to 0.3 inclusive
    Low,
    /// Score above 0.3 up to 0.6
    Medium,
    /// Score above 0.6 up to 0.8
    High,
    /// Score above 0.8
    Critical,
}

impl SeverityBucket {
    /// Every bucket, lowest first
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    /// Bucket for a risk score
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        Self::ALL[right_closed_slot(score, &SEVERITY_BUCKET_UPPER_BOUNDS)]
    }

    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for SeverityBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Age band used by age-grouped rollups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeBucket {
    /// 18 to 22
    #[serde(rename = "18-22")]
    From18To22,
    /// 23 to 27
    #[serde(rename = "23-27")]
    From23To27,
    /// 28 to 32
    #[serde(rename = "28-32")]
    From28To32,
    /// 33 to 37
    #[serde(rename = "33-37")]
    From33To37,
    /// 38 and older
    #[serde(rename = "38+")]
    From38,
}

impl AgeBucket {
    /// Every band, youngest first
    pub const ALL: [Self; 5] = [
        Self::From18To22,
        Self::From23To27,
        Self::From28To32,
        Self::From33To37,
        Self::From38,
    ];

    /// Band for an age; athletes under 18 fall outside every band
    #[must_use]
    pub fn from_age(age: u32) -> Option<Self> {
        if age < MIN_BUCKETED_AGE {
            return None;
        }
        let slot = AGE_BUCKET_UPPER_BOUNDS
            .iter()
            .position(|bound| age <= *bound)
            .unwrap_or(AGE_BUCKET_UPPER_BOUNDS.len());
        Some(Self::ALL[slot])
    }

    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::From18To22 => "18-22",
            Self::From23To27 => "23-27",
            Self::From28To32 => "28-32",
            Self::From33To37 => "33-37",
            Self::From38 => "38+",
        }
    }
}

impl fmt::Display for AgeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_bucket_boundaries_belong_below() {
        assert_eq!(RiskBucket::from_score(0.0), RiskBucket::Low);
        assert_eq!(RiskBucket::from_score(0.3), RiskBucket::Low);
        assert_eq!(RiskBucket::from_score(0.300_001), RiskBucket::Moderate);
        assert_eq!(RiskBucket::from_score(0.5), RiskBucket::Moderate);
        assert_eq!(RiskBucket::from_score(0.7), RiskBucket::High);
        assert_eq!(RiskBucket::from_score(0.71), RiskBucket::Critical);
        assert_eq!(RiskBucket::from_score(1.0), RiskBucket::Critical);
    }

    #[test]
    fn test_severity_bucket_uses_its_own_boundaries() {
        assert_eq!(SeverityBucket::from_score(0.3), SeverityBucket::Low);
        assert_eq!(SeverityBucket::from_score(0.55), SeverityBucket::Medium);
        assert_eq!(SeverityBucket::from_score(0.6), SeverityBucket::Medium);
        assert_eq!(SeverityBucket::from_score(0.7), SeverityBucket::High);
        assert_eq!(SeverityBucket::from_score(0.8), SeverityBucket::High);
        assert_eq!(SeverityBucket::from_score(0.81), SeverityBucket::Critical);
    }

    #[test]
    fn test_age_buckets() {
        assert_eq!(AgeBucket::from_age(17), None);
        assert_eq!(AgeBucket::from_age(18), Some(AgeBucket::From18To22));
        assert_eq!(AgeBucket::from_age(22), Some(AgeBucket::From18To22));
        assert_eq!(AgeBucket::from_age(23), Some(AgeBucket::From23To27));
        assert_eq!(AgeBucket::from_age(37), Some(AgeBucket::From33To37));
        assert_eq!(AgeBucket::from_age(38), Some(AgeBucket::From38));
        assert_eq!(AgeBucket::from_age(60), Some(AgeBucket::From38));
    }

    #[test]
    fn test_risk_level_parse_accepts_medium_alias() {
        assert_eq!("medium".parse::<RiskBucket>(), Ok(RiskBucket::Moderate));
        assert_eq!("CRITICAL".parse::<RiskBucket>(), Ok(RiskBucket::Critical));
        assert!("extreme".parse::<RiskBucket>().is_err());
    }
}
