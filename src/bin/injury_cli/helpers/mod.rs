// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Injury Insight Contributors
// ABOUTME: Re-exports helper modules for injury-insight
// ABOUTME: Provides output formatting utilities

pub mod display;
