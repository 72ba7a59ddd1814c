//! Pagination parameters and page state.
//!
//! Plain data shared between the range generator, the controller and
//! whatever UI renders the control. Page numbers are 1-based throughout.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::config::{PagerConfig, DEFAULT_BOUNDARY_COUNT, DEFAULT_SIBLING_COUNT};
use crate::{PagerError, PagerResult};

/// Inputs to [`crate::range::generate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParameters {
    /// Page being viewed (1-based).
    pub current_page: usize,
    /// Total number of pages, usually taken from a server response.
    pub total_pages: usize,
    /// Pages shown on each side of the current page.
    pub sibling_count: usize,
    /// Pages always shown at the start and at the end.
    pub boundary_count: usize,
}

impl PaginationParameters {
    /// Create parameters with one sibling and one boundary page.
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            current_page,
            total_pages,
            sibling_count: DEFAULT_SIBLING_COUNT,
            boundary_count: DEFAULT_BOUNDARY_COUNT,
        }
    }

    /// Create parameters using the windowing configured in `config`.
    pub fn from_config(current_page: usize, total_pages: usize, config: &PagerConfig) -> Self {
        Self::new(current_page, total_pages)
            .with_sibling_count(config.sibling_count)
            .with_boundary_count(config.boundary_count)
    }

    pub fn with_sibling_count(mut self, sibling_count: usize) -> Self {
        self.sibling_count = sibling_count;
        self
    }

    pub fn with_boundary_count(mut self, boundary_count: usize) -> Self {
        self.boundary_count = boundary_count;
        self
    }

    /// Reject a current page outside `1..=total_pages`.
    ///
    /// The generator never calls this; it is for callers that take page
    /// numbers from untrusted input.
    pub fn validated(self) -> PagerResult<Self> {
        if self.total_pages == 0 {
            return Ok(self);
        }
        if self.current_page < 1 || self.current_page > self.total_pages {
            return Err(PagerError::Validation(format!(
                "current page {} is outside 1..={}",
                self.current_page, self.total_pages
            )));
        }
        Ok(self)
    }

    /// Whether a pagination control is worth showing at all.
    pub fn should_render(&self) -> bool {
        self.total_pages > 1
    }

    /// Page count up to which every page is listed without gaps.
    pub fn total_blocks(&self) -> usize {
        let total_numbers = self
            .sibling_count
            .saturating_mul(2)
            .saturating_add(3)
            .saturating_add(self.boundary_count.saturating_mul(2));
        total_numbers.saturating_add(2)
    }

    pub fn state(&self) -> PageState {
        PageState::new(self.current_page, self.total_pages)
    }
}

/// The caller-owned position a controller validates requests against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub current_page: usize,
    pub total_pages: usize,
}

impl PageState {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            current_page,
            total_pages,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Page before the current one. May be 0, which a controller ignores.
    pub fn previous(&self) -> i64 {
        to_request(self.current_page) - 1
    }

    /// Page after the current one. May exceed the total, which a controller ignores.
    pub fn next(&self) -> i64 {
        to_request(self.current_page).saturating_add(1)
    }

    pub fn first(&self) -> i64 {
        1
    }

    pub fn last(&self) -> i64 {
        to_request(self.total_pages)
    }
}

fn to_request(page: usize) -> i64 {
    i64::try_from(page).unwrap_or(i64::MAX)
}

/// Number of pages needed to show `total_items` at `page_size` per page.
pub fn total_pages_for(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Zero-based item indices shown on `page`.
///
/// Empty when `page` is 0 or past the last page.
pub fn page_bounds(page: usize, page_size: usize, total_items: usize) -> Range<usize> {
    if page == 0 || page > total_pages_for(total_items, page_size) {
        return 0..0;
    }
    let start = (page - 1) * page_size;
    let end = start.saturating_add(page_size).min(total_items);
    start..end
}
