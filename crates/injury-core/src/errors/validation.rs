// ABOUTME: Validation errors for numeric and categorical input at the model boundary
// ABOUTME: Structured variants with constructor helpers, converted into AppError upstream
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Injury Insight Contributors

use thiserror::Error;

/// Rejection of malformed input before it reaches scoring or querying.
///
/// Fields with a documented clamp (height, weight, final risk score) never
/// produce these; everything else is rejected rather than silently fixed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A count or measurement was below zero
    #[error("{field} must not be negative (got {value})")]
    Negative {
        /// Name of the offending field
        field: String,
        /// Value received
        value: f64,
    },
    /// A value fell outside its accepted inclusive range
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        /// Name of the offending field
        field: String,
        /// Value received
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },
    /// NaN or infinity
    #[error("{field} must be a finite number")]
    NotFinite {
        /// Name of the offending field
        field: String,
    },
    /// A categorical value that is not part of its closed table
    #[error("unknown {field} '{value}'")]
    UnknownCategory {
        /// Name of the categorical field
        field: String,
        /// Value received
        value: String,
    },
}

impl ValidationError {
    /// Create a "negative value" error
    #[must_use]
    pub fn negative(field: impl Into<String>, value: f64) -> Self {
        Self::Negative {
            field: field.into(),
            value,
        }
    }

    /// Create an "out of range" error
    #[must_use]
    pub fn out_of_range(field: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        Self::OutOfRange {
            field: field.into(),
            value,
            min,
            max,
        }
    }

    /// Create a "not finite" error
    #[must_use]
    pub fn not_finite(field: impl Into<String>) -> Self {
        Self::NotFinite {
            field: field.into(),
        }
    }

    /// Create an "unknown category" error
    #[must_use]
    pub fn unknown_category(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnknownCategory {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Name of the field that failed validation
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::Negative { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::NotFinite { field }
            | Self::UnknownCategory { field, .. } => field,
        }
    }

    /// Check that `value` is finite and within `[min, max]`
    ///
    /// # Errors
    ///
    /// Returns `NotFinite`, `Negative` (when `min` is zero and `value` is
    /// below it) or `OutOfRange`.
    pub fn check_range(field: &str, value: f64, min: f64, max: f64) -> Result<f64, Self> {
        if !value.is_finite() {
            return Err(Self::not_finite(field));
        }
        if value < 0.0 && min >= 0.0 {
            return Err(Self::negative(field, value));
        }
        if value < min || value > max {
            return Err(Self::out_of_range(field, value, min, max));
        }
        Ok(value)
    }

    /// Convert a signed count into `u32`, rejecting negatives and values above `max`
    ///
    /// # Errors
    ///
    /// Returns `Negative` or `OutOfRange`.
    pub fn check_count(field: &str, value: i64, max: u32) -> Result<u32, Self> {
        if value < 0 {
            return Err(Self::negative(field, value as f64));
        }
        u32::try_from(value)
            .ok()
            .filter(|count| *count <= max)
            .ok_or_else(|| Self::out_of_range(field, value as f64, 0.0, f64::from(max)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_range_accepts_bounds() {
        assert_eq!(ValidationError::check_range("fitness", 0.0, 0.0, 100.0), Ok(0.0));
        assert_eq!(ValidationError::check_range("fitness", 100.0, 0.0, 100.0), Ok(100.0));
    }

    #[test]
    fn test_check_range_rejects() {
        assert!(matches!(
            ValidationError::check_range("fitness", -1.0, 0.0, 100.0),
            Err(ValidationError::Negative { .. })
        ));
        assert!(matches!(
            ValidationError::check_range("fitness", 100.5, 0.0, 100.0),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            ValidationError::check_range("fitness", f64::NAN, 0.0, 100.0),
            Err(ValidationError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_check_count() {
        assert_eq!(ValidationError::check_count("surgeries", 3, 50), Ok(3));
        assert_eq!(
            ValidationError::check_count("surgeries", -1, 50),
            Err(ValidationError::negative("surgeries", -1.0))
        );
        assert!(ValidationError::check_count("surgeries", 51, 50).is_err());
    }

    #[test]
    fn test_display_names_field() {
        let error = ValidationError::unknown_category("severity", "Mild");
        assert_eq!(error.to_string(), "unknown severity 'Mild'");
        assert_eq!(error.field(), "severity");
    }
}
