// ABOUTME: Per-athlete recommendation cards derived from risk score, injury status, and history
// ABOUTME: Critical, recovery and prevention cards fire on strict thresholds; wellness is always added
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Injury Insight Contributors

use std::fmt;

use injury_core::constants::risk::HIGH_RISK_SCORE;
use injury_core::models::Athlete;
use injury_core::rounding::round_to;
use serde::{Deserialize, Serialize};

use crate::reports::AthleteSummary;

/// Career injuries above which a prevention card is added
pub const PREVENTION_INJURY_THRESHOLD: u32 = 3;

/// Card category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecommendationKind {
    /// Risk score above the high-risk threshold
    Critical,
    /// Athlete currently injured
    Recovery,
    /// Repeated career injuries
    Prevention,
    /// General advice, always present
    Wellness,
}

impl RecommendationKind {
    /// Display label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Recovery => "Recovery",
            Self::Prevention => "Prevention",
            Self::Wellness => "Wellness",
        }
    }
}

impl fmt::Display for RecommendationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recommendation card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Card category
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    /// Headline
    pub title: String,
    /// Athlete-specific detail
    pub description: String,
    /// Expected duration
    pub timeline: String,
    /// What following the card should achieve
    pub expected_outcome: String,
}

impl Recommendation {
    fn new(
        kind: RecommendationKind,
        title: &str,
        description: String,
        timeline: &str,
        expected_outcome: &str,
    ) -> Self {
        Self {
            kind,
            title: title.to_owned(),
            description,
            timeline: timeline.to_owned(),
            expected_outcome: expected_outcome.to_owned(),
        }
    }
}

/// Recommendation cards for one athlete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteInsight {
    /// The athlete, with the risk score rounded to two decimals
    pub athlete: AthleteSummary,
    /// Cards in evaluation order, wellness last
    pub recommendations: Vec<Recommendation>,
}

/// Builds recommendation cards
pub struct InsightGenerator;

impl InsightGenerator {
    /// Cards for `athlete`, in evaluation order
    #[must_use]
    pub fn recommendations(athlete: &Athlete) -> Vec<Recommendation> {
        let mut cards = Vec::with_capacity(4);

        if athlete.risk_score > HIGH_RISK_SCORE {
            cards.push(Recommendation::new(
                RecommendationKind::Critical,
                "Immediate Load Reduction Required",
                format!(
                    "Risk score of {} indicates high injury probability. Recommend 20-30% \
                     reduction in high-intensity workouts for 2 weeks.",
                    round_to(athlete.risk_score, 2)
                ),
                "1-2 weeks",
                "Risk reduction to below 0.5",
            ));
        }

        if let Some(injury) = &athlete.current_injury {
            cards.push(Recommendation::new(
                RecommendationKind::Recovery,
                "Structured Rehabilitation Protocol",
                format!(
                    "Current injury: {injury}. Follow sport-specific rehab program with \
                     progressive loading."
                ),
                "4-8 weeks",
                "Safe return to full activity",
            ));
        }

        if athlete.total_injuries_career > PREVENTION_INJURY_THRESHOLD {
            let area = athlete
                .current_injury
                .as_deref()
                .map_or_else(|| "previously injured areas".to_owned(), |i| format!("{i} area"));
            cards.push(Recommendation::new(
                RecommendationKind::Prevention,
                "Injury Pattern Analysis",
                format!(
                    "{} previous injuries detected. Implement targeted prevention exercises \
                     for {area}.",
                    athlete.total_injuries_career
                ),
                "Ongoing",
                "40-60% reduction in re-injury risk",
            ));
        }

        cards.push(Recommendation::new(
            RecommendationKind::Wellness,
            "Optimize Recovery Strategies",
            "Ensure 8+ hours sleep, proper hydration, and nutrition timing for optimal recovery."
                .to_owned(),
            "Daily",
            "Enhanced performance and recovery",
        ));

        cards
    }

    /// Insight for `athlete`
    #[must_use]
    pub fn insight(athlete: &Athlete) -> AthleteInsight {
        let mut summary = AthleteSummary::from(athlete);
        summary.risk_score = round_to(athlete.risk_score, 2);
        AthleteInsight {
            athlete: summary,
            recommendations: Self::recommendations(athlete),
        }
    }
}
