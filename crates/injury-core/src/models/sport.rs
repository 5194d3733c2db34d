// ABOUTME: Closed sport enumeration carrying risk weight, injury rate, positions, and teams
// ABOUTME: Parsing falls back to a documented default weight for unrecognised sport names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Injury Insight Contributors

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::risk::UNKNOWN_SPORT_RISK_WEIGHT;
use crate::errors::ValidationError;

/// Sports represented in the athlete population
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sport {
    /// American football
    Football,
    /// Basketball
    Basketball,
    /// Association football
    Soccer,
    /// Baseball
    Baseball,
    /// Tennis
    Tennis,
    /// Ice hockey
    Hockey,
    /// Rugby union
    Rugby,
    /// Cricket
    Cricket,
    /// Competitive swimming
    Swimming,
    /// Track and field
    Athletics,
}

impl Sport {
    /// Every sport, in table order (generation draws uniformly from this)
    pub const ALL: [Self; 10] = [
        Self::Football,
        Self::Basketball,
        Self::Soccer,
        Self::Baseball,
        Self::Tennis,
        Self::Hockey,
        Self::Rugby,
        Self::Cricket,
        Self::Swimming,
        Self::Athletics,
    ];

    /// Display name, also the serialized form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Football => "Football",
            Self::Basketball => "Basketball",
            Self::Soccer => "Soccer",
            Self::Baseball => "Baseball",
            Self::Tennis => "Tennis",
            Self::Hockey => "Hockey",
            Self::Rugby => "Rugby",
            Self::Cricket => "Cricket",
            Self::Swimming => "Swimming",
            Self::Athletics => "Athletics",
        }
    }

    /// Contact/impact risk weight added to every risk score for this sport
    #[must_use]
    pub const fn risk_weight(&self) -> f64 {
        match self {
            Self::Football | Self::Rugby => 0.15,
            Self::Hockey => 0.12,
            Self::Soccer | Self::Basketball => 0.10,
            Self::Baseball | Self::Tennis | Self::Athletics => 0.08,
            Self::Cricket => 0.06,
            Self::Swimming => 0.05,
        }
    }

    /// Expected career injuries per professional year
    #[must_use]
    pub const fn base_injury_rate(&self) -> f64 {
        match self {
            Self::Football => 3.5,
            Self::Rugby => 3.2,
            Self::Soccer => 2.8,
            Self::Hockey => 2.7,
            Self::Basketball => 2.5,
            Self::Athletics => 2.3,
            Self::Tennis => 2.2,
            Self::Baseball => 2.0,
            Self::Cricket => 1.8,
            Self::Swimming => 1.5,
        }
    }

    /// Half-open age range athletes of this sport are drawn from
    #[must_use]
    pub const fn age_range(&self) -> Range<u32> {
        match self {
            Self::Swimming | Self::Athletics | Self::Tennis => 16..38,
            Self::Football | Self::Rugby => 20..36,
            Self::Basketball | Self::Soccer | Self::Baseball | Self::Hockey | Self::Cricket => {
                18..42
            }
        }
    }

    /// Playing positions for this sport
    #[must_use]
    pub const fn positions(&self) -> &'static [&'static str] {
        match self {
            Self::Football => &[
                "Quarterback",
                "Wide Receiver",
                "Running Back",
                "Linebacker",
                "Defensive End",
                "Cornerback",
                "Safety",
                "Tight End",
                "Offensive Tackle",
                "Kicker",
            ],
            Self::Basketball => &[
                "Point Guard",
                "Shooting Guard",
                "Small Forward",
                "Power Forward",
                "Center",
            ],
            Self::Soccer => &[
                "Goalkeeper",
                "Center Back",
                "Full Back",
                "Defensive Midfielder",
                "Central Midfielder",
                "Attacking Midfielder",
                "Winger",
                "Striker",
            ],
            Self::Baseball => &[
                "Pitcher",
                "Catcher",
                "First Baseman",
                "Second Baseman",
                "Shortstop",
                "Third Baseman",
                "Left Fielder",
                "Center Fielder",
                "Right Fielder",
            ],
            Self::Tennis => &[
                "Singles Specialist",
                "Doubles Specialist",
                "All-Court Player",
                "Baseline Player",
                "Serve-and-Volley",
            ],
            Self::Hockey => &[
                "Goaltender",
                "Left Defenseman",
                "Right Defenseman",
                "Center",
                "Left Wing",
                "Right Wing",
            ],
            Self::Rugby => &[
                "Loosehead Prop",
                "Hooker",
                "Tighthead Prop",
                "Lock",
                "Blindside Flanker",
                "Openside Flanker",
                "Number Eight",
                "Scrum-half",
                "Fly-half",
                "Inside Centre",
                "Outside Centre",
                "Wing",
                "Fullback",
            ],
            Self::Cricket => &[
                "Opening Batsman",
                "Middle Order Batsman",
                "Wicketkeeper-Batsman",
                "All-rounder",
                "Fast Bowler",
                "Spin Bowler",
                "Medium Pace Bowler",
            ],
            Self::Swimming => &[
                "Freestyle Sprinter",
                "Freestyle Distance",
                "Backstroke",
                "Breaststroke",
                "Butterfly",
                "Individual Medley",
                "Relay Specialist",
            ],
            Self::Athletics => &[
                "100m Sprinter",
                "200m Sprinter",
                "400m Runner",
                "800m Runner",
                "1500m Runner",
                "5000m Runner",
                "Marathon Runner",
                "High Jumper",
                "Long Jumper",
                "Triple Jumper",
                "Shot Putter",
                "Discus Thrower",
                "Javelin Thrower",
                "Pole Vaulter",
                "Decathlete",
                "Heptathlete",
            ],
        }
    }

    /// Teams (or circuits) athletes of this sport belong to
    #[must_use]
    pub const fn teams(&self) -> &'static [&'static str] {
        match self {
            Self::Football => &[
                "New England Patriots",
                "Dallas Cowboys",
                "Green Bay Packers",
                "San Francisco 49ers",
                "Chicago Bears",
                "Miami Dolphins",
                "Denver Broncos",
                "Seattle Seahawks",
                "Pittsburgh Steelers",
                "Las Vegas Raiders",
            ],
            Self::Basketball => &[
                "Los Angeles Lakers",
                "Boston Celtics",
                "Chicago Bulls",
                "Golden State Warriors",
                "Miami Heat",
                "San Antonio Spurs",
                "New York Knicks",
                "Philadelphia 76ers",
                "Brooklyn Nets",
                "Phoenix Suns",
            ],
            Self::Soccer => &[
                "Manchester United",
                "Real Madrid",
                "Barcelona",
                "Bayern Munich",
                "Liverpool",
                "Paris Saint-Germain",
                "Juventus",
                "AC Milan",
                "Manchester City",
                "Inter Milan",
            ],
            Self::Baseball => &[
                "New York Yankees",
                "Boston Red Sox",
                "Los Angeles Dodgers",
                "Chicago Cubs",
                "San Francisco Giants",
                "St. Louis Cardinals",
                "Atlanta Braves",
                "Houston Astros",
                "Philadelphia Phillies",
                "Detroit Tigers",
            ],
            Self::Tennis => &[
                "ATP Tour",
                "WTA Tour",
                "ITF Circuit",
                "Grand Slam Events",
                "Masters 1000",
                "Premier Mandatory",
                "International Series",
                "Challenger Tour",
                "Futures Tour",
                "Davis Cup Team",
            ],
            Self::Hockey => &[
                "Toronto Maple Leafs",
                "Montreal Canadiens",
                "Boston Bruins",
                "Detroit Red Wings",
                "Chicago Blackhawks",
                "New York Rangers",
                "Pittsburgh Penguins",
                "Edmonton Oilers",
                "Colorado Avalanche",
                "Tampa Bay Lightning",
            ],
            Self::Rugby => &[
                "New Zealand All Blacks",
                "South Africa Springboks",
                "England Rugby",
                "Ireland Rugby",
                "Wales Rugby",
                "Australia Wallabies",
                "France Rugby",
                "Scotland Rugby",
                "Argentina Pumas",
                "Japan Brave Blossoms",
            ],
            Self::Cricket => &[
                "Mumbai Indians",
                "Chennai Super Kings",
                "Royal Challengers Bangalore",
                "Kolkata Knight Riders",
                "Delhi Capitals",
                "Rajasthan Royals",
                "Punjab Kings",
                "Sunrisers Hyderabad",
                "Gujarat Titans",
                "Lucknow Super Giants",
            ],
            Self::Swimming => &[
                "USA Swimming",
                "Australian Dolphins",
                "British Swimming",
                "Italian Swimming",
                "French Swimming",
                "Japanese Swimming",
                "Chinese Swimming",
                "German Swimming",
                "Dutch Swimming",
                "Swedish Swimming",
            ],
            Self::Athletics => &[
                "USA Track & Field",
                "Athletics Kenya",
                "British Athletics",
                "Athletics Australia",
                "German Athletics",
                "French Athletics",
                "Japanese Athletics",
                "Chinese Athletics",
                "Ethiopian Athletics",
                "Jamaican Athletics",
            ],
        }
    }

    /// Whether `position` belongs to this sport's position table
    #[must_use]
    pub fn has_position(&self, position: &str) -> bool {
        self.positions().contains(&position)
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sport {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|sport| sport.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ValidationError::unknown_category("sport", trimmed))
    }
}

/// Sport name as supplied at the prediction boundary.
///
/// Unknown names are kept rather than rejected and score with
/// [`UNKNOWN_SPORT_RISK_WEIGHT`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SportKind {
    /// One of the closed table sports
    Known(Sport),
    /// Free-text sport name outside the table
    Unknown(String),
}

impl SportKind {
    /// Classify a free-text sport name
    #[must_use]
    pub fn parse(name: &str) -> Self {
        name.parse::<Sport>()
            .map_or_else(|_| Self::Unknown(name.trim().to_owned()), Self::Known)
    }

    /// Risk weight, falling back to the documented default for unknown sports
    #[must_use]
    pub const fn risk_weight(&self) -> f64 {
        match self {
            Self::Known(sport) => sport.risk_weight(),
            Self::Unknown(_) => UNKNOWN_SPORT_RISK_WEIGHT,
        }
    }

    /// The table sport, if recognised
    #[must_use]
    pub const fn known(&self) -> Option<Sport> {
        match self {
            Self::Known(sport) => Some(*sport),
            Self::Unknown(_) => None,
        }
    }
}

impl fmt::Display for SportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(sport) => f.write_str(sport.as_str()),
            Self::Unknown(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("football".parse::<Sport>(), Ok(Sport::Football));
        assert_eq!(" Swimming ".parse::<Sport>(), Ok(Sport::Swimming));
        assert!("Curling".parse::<Sport>().is_err());
    }

    #[test]
    fn test_unknown_sport_uses_default_weight() {
        let kind = SportKind::parse("Curling");
        assert_eq!(kind, SportKind::Unknown("Curling".to_owned()));
        assert!((kind.risk_weight() - UNKNOWN_SPORT_RISK_WEIGHT).abs() < f64::EPSILON);
        assert_eq!(kind.known(), None);
    }

    #[test]
    fn test_weights_stay_in_documented_range() {
        for sport in Sport::ALL {
            let weight = sport.risk_weight();
            assert!((0.05..=0.15).contains(&weight), "{sport}: {weight}");
            assert!(!sport.positions().is_empty());
            assert_eq!(sport.teams().len(), 10);
        }
    }

    #[test]
    fn test_serializes_as_display_name() {
        assert_eq!(serde_json::to_string(&Sport::Rugby).unwrap(), "\"Rugby\"");
        assert_eq!(
            serde_json::to_string(&SportKind::parse("Hockey")).unwrap(),
            "\"Hockey\""
        );
    }
}
