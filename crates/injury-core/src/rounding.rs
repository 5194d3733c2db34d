// ABOUTME: Presentation rounding helper
// ABOUTME: Applied only when building output values, never inside intermediate sums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Injury Insight Contributors

/// Round half away from zero to `decimals` places
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::round_to;

    #[test]
    fn test_round_to() {
        assert!((round_to(26.296, 1) - 26.3).abs() < 1e-12);
        assert!((round_to(0.4249, 2) - 0.42).abs() < 1e-12);
        assert!((round_to(1234.5, 0) - 1235.0).abs() < 1e-12);
    }
}
