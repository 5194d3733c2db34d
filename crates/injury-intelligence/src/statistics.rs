// ABOUTME: Descriptive statistics and Pearson correlation over athlete numeric fields
// ABOUTME: Every division is guarded so empty or degenerate inputs yield 0 instead of NaN
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Injury Insight Contributors
#![allow(clippy::cast_precision_loss)] // Safe: population sizes are far below 2^52

use serde::{Deserialize, Serialize};

/// Single-pass summary of a numeric series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of observations
    pub count: usize,
    /// Sum of observations
    pub sum: f64,
    /// Arithmetic mean, 0 when empty
    pub mean: f64,
    /// Sample standard deviation (n - 1), 0 when fewer than two observations
    pub std_dev: f64,
    /// Smallest observation, 0 when empty
    pub min: f64,
    /// Largest observation, 0 when empty
    pub max: f64,
}

impl Summary {
    /// Summary of an empty series
    pub const EMPTY: Self = Self {
        count: 0,
        sum: 0.0,
        mean: 0.0,
        std_dev: 0.0,
        min: 0.0,
        max: 0.0,
    };
}

/// Statistical analysis engine
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Summarize a series.
    ///
    /// Uses Welford's update so large populations do not lose precision.
    #[must_use]
    pub fn summarize<I>(values: I) -> Summary
    where
        I: IntoIterator<Item = f64>,
    {
        let mut count = 0_usize;
        let mut sum = 0.0;
        let mut mean = 0.0;
        let mut m2 = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for value in values {
            count += 1;
            sum += value;
            let delta = value - mean;
            mean += delta / count as f64;
            m2 += delta * (value - mean);
            min = min.min(value);
            max = max.max(value);
        }

        if count == 0 {
            return Summary::EMPTY;
        }

        let std_dev = if count < 2 {
            0.0
        } else {
            (m2 / (count - 1) as f64).sqrt()
        };

        Summary {
            count,
            sum,
            mean,
            std_dev,
            min,
            max,
        }
    }

    /// Arithmetic mean, 0 for an empty series
    #[must_use]
    pub fn mean<I>(values: I) -> f64
    where
        I: IntoIterator<Item = f64>,
    {
        Self::summarize(values).mean
    }

    /// `numerator / denominator`, 0 when the denominator is 0
    #[must_use]
    pub fn ratio(numerator: f64, denominator: f64) -> f64 {
        if denominator == 0.0 {
            0.0
        } else {
            numerator / denominator
        }
    }

    /// Percentage `part / whole * 100`, 0 for an empty whole
    #[must_use]
    pub fn percentage(part: usize, whole: usize) -> f64 {
        Self::ratio(part as f64 * 100.0, whole as f64)
    }

    /// Pearson correlation of paired observations.
    ///
    /// Returns 0 when fewer than two pairs exist or either series is constant.
    #[must_use]
    pub fn pearson(pairs: &[(f64, f64)]) -> f64 {
        if pairs.len() < 2 {
            return 0.0;
        }
        let n = pairs.len() as f64;
        let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
        let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

        let (mut covariance, mut variance_x, mut variance_y) = (0.0, 0.0, 0.0);
        for (x, y) in pairs {
            let dx = x - mean_x;
            let dy = y - mean_y;
            covariance += dx * dy;
            variance_x += dx * dx;
            variance_y += dy * dy;
        }

        let denominator = (variance_x * variance_y).sqrt();
        if denominator == 0.0 {
            0.0
        } else {
            (covariance / denominator).clamp(-1.0, 1.0)
        }
    }
}
