// ABOUTME: Closed categorical enumerations for athlete records (gender, severity, recovery, treatment)
// ABOUTME: Each serializes as its display label and parses case-insensitively into a ValidationError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Injury Insight Contributors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::risk::{
    SEVERITY_ADJUSTMENT_MINOR, SEVERITY_ADJUSTMENT_MODERATE, SEVERITY_ADJUSTMENT_SEVERE,
};
use crate::errors::ValidationError;

/// Declares a label-backed enum with `ALL`, `as_str`, `Display` and `FromStr`
macro_rules! category_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $label)] $variant, )+
        }

        impl $name {
            /// Every variant, in table order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Display label, also the serialized form
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|value| value.as_str().eq_ignore_ascii_case(trimmed))
                    .ok_or_else(|| ValidationError::unknown_category($field, trimmed))
            }
        }
    };
}

category_enum! {
    /// Athlete gender as recorded in the population
    Gender, "gender" {
        /// Male athlete
        Male => "Male",
        /// Female athlete
        Female => "Female",
    }
}

category_enum! {
    /// Severity tier of a current injury
    InjurySeverity, "injury severity" {
        /// Minor injury
        Minor => "Minor",
        /// Moderate injury
        Moderate => "Moderate",
        /// Severe injury
        Severe => "Severe",
        /// Critical injury
        Critical => "Critical",
    }
}

impl InjurySeverity {
    /// Additive risk term for a current injury of this severity.
    ///
    /// `Critical` adds nothing: the prediction form never offers it.
    #[must_use]
    pub const fn risk_adjustment(&self) -> f64 {
        match self {
            Self::Severe => SEVERITY_ADJUSTMENT_SEVERE,
            Self::Moderate => SEVERITY_ADJUSTMENT_MODERATE,
            Self::Minor => SEVERITY_ADJUSTMENT_MINOR,
            Self::Critical => 0.0,
        }
    }

    /// Parse a severity where "None", "N/A" and blank mean no current injury
    ///
    /// # Errors
    ///
    /// Returns `UnknownCategory` for any other unrecognised label.
    pub fn parse_optional(s: &str) -> Result<Option<Self>, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("none")
            || trimmed.eq_ignore_ascii_case("n/a")
        {
            return Ok(None);
        }
        trimmed.parse().map(Some)
    }
}

category_enum! {
    /// Where an athlete stands in their recovery
    RecoveryStatus, "recovery status" {
        /// Returned to full activity
        FullyRecovered => "Fully Recovered",
        /// Still rehabilitating
        InRecovery => "In Recovery",
        /// Long-standing condition
        Chronic => "Chronic",
        /// Injured again after recovery
        Reinjured => "Re-injured",
        /// Being monitored by medical staff
        UnderObservation => "Under Observation",
    }
}

impl RecoveryStatus {
    /// Whether this status counts towards return-to-play cases
    #[must_use]
    pub const fn is_return_to_play(&self) -> bool {
        matches!(self, Self::FullyRecovered | Self::InRecovery)
    }
}

category_enum! {
    /// Treatment applied to the most recent injury
    TreatmentType, "treatment type" {
        /// Physiotherapy programme
        PhysicalTherapy => "Physical Therapy",
        /// Operative treatment
        Surgery => "Surgery",
        /// Rest, ice, compression, elevation
        RestAndIce => "Rest & Ice",
        /// Drug therapy
        Medication => "Medication",
        /// Several modalities together
        CombinedTreatment => "Combined Treatment",
        /// Platelet-rich plasma injections
        PrpTherapy => "PRP Therapy",
        /// Stem cell treatment
        StemCellTreatment => "Stem Cell Treatment",
        /// Cold therapy
        Cryotherapy => "Cryotherapy",
        /// Water-based therapy
        Hydrotherapy => "Hydrotherapy",
    }
}

category_enum! {
    /// Medical clearance to compete
    MedicalClearance, "medical clearance" {
        /// Cleared for full participation
        Cleared => "Cleared",
        /// Awaiting assessment
        Pending => "Pending",
        /// Limited participation
        Restricted => "Restricted",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip_through_parse() {
        for status in RecoveryStatus::ALL {
            assert_eq!(status.as_str().parse::<RecoveryStatus>(), Ok(*status));
        }
        assert_eq!("rest & ice".parse::<TreatmentType>(), Ok(TreatmentType::RestAndIce));
    }

    #[test]
    fn test_parse_optional_severity() {
        assert_eq!(InjurySeverity::parse_optional("None"), Ok(None));
        assert_eq!(InjurySeverity::parse_optional("N/A"), Ok(None));
        assert_eq!(
            InjurySeverity::parse_optional("severe"),
            Ok(Some(InjurySeverity::Severe))
        );
        assert!(InjurySeverity::parse_optional("Mild").is_err());
    }

    #[test]
    fn test_severity_adjustments() {
        assert!((InjurySeverity::Severe.risk_adjustment() - 0.10).abs() < 1e-12);
        assert!((InjurySeverity::Moderate.risk_adjustment() - 0.05).abs() < 1e-12);
        assert!((InjurySeverity::Minor.risk_adjustment() - 0.02).abs() < 1e-12);
        assert!(InjurySeverity::Critical.risk_adjustment().abs() < f64::EPSILON);
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&RecoveryStatus::Reinjured).unwrap();
        assert_eq!(json, "\"Re-injured\"");
        let parsed: TreatmentType = serde_json::from_str("\"PRP Therapy\"").unwrap();
        assert_eq!(parsed, TreatmentType::PrpTherapy);
    }
}
