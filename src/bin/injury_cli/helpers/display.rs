// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Injury Insight Contributors
// ABOUTME: Output formatting helpers for injury-insight
// ABOUTME: Prints command results as pretty JSON on stdout

use std::io::{self, Write};

use injury_core::errors::{AppError, AppResult};
use serde::Serialize;

/// Write `value` as pretty JSON followed by a newline
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}")
        .map_err(|e| AppError::internal(format!("Failed to write output: {e}")))
}
