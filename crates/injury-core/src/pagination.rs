// ABOUTME: Page-number pagination for list views over the athlete collection
// ABOUTME: Pages are 1-indexed; out-of-range pages are empty rather than errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Injury Insight Contributors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::query::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::errors::ValidationError;

/// Requested page of a filtered, sorted collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// 1-indexed page number
    pub page: usize,
    /// Items per page
    pub page_size: usize,
}

impl PageRequest {
    /// Create a page request, validating the page size
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `page_size` is zero or above the maximum.
    pub fn new(page: usize, page_size: usize) -> Result<Self, ValidationError> {
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(ValidationError::out_of_range(
                "page_size",
                page_size as f64,
                1.0,
                MAX_PAGE_SIZE as f64,
            ));
        }
        Ok(Self { page, page_size })
    }

    /// First page with the given size
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` for an invalid page size.
    pub fn first(page_size: usize) -> Result<Self, ValidationError> {
        Self::new(1, page_size)
    }

    /// Index of the first item on this page, `None` for page 0
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        self.page
            .checked_sub(1)
            .and_then(|index| index.checked_mul(self.page_size))
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results plus the metadata a list view needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items in this page
    pub items: Vec<T>,
    /// 1-indexed page number that was requested
    pub page: usize,
    /// Requested page size
    pub page_size: usize,
    /// Size of the filtered collection before pagination
    pub total_count: usize,
    /// Number of pages the filtered collection spans
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Slice `items` (already filtered and sorted) down to the requested page
    #[must_use]
    pub fn paginate(items: Vec<T>, request: PageRequest) -> Self {
        let total_count = items.len();
        let total_pages = total_count.div_ceil(request.page_size.max(1));
        let page_items: Vec<T> = match request.offset() {
            Some(offset) if offset < total_count => items
                .into_iter()
                .skip(offset)
                .take(request.page_size)
                .collect(),
            _ => Vec::new(),
        };
        Self {
            items: page_items,
            page: request.page,
            page_size: request.page_size,
            total_count,
            total_pages,
        }
    }

    /// Whether a later page exists
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Transform the items while keeping the metadata
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_count: self.total_count,
            total_pages: self.total_pages,
        }
    }
}

/// Sort direction for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Smallest first
    #[default]
    Asc,
    /// Largest first
    Desc,
}

impl SortOrder {
    /// String representation for responses
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            other => Err(ValidationError::unknown_category("sort order", other)),
        }
    }
}
