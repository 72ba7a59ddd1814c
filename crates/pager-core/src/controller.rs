//! Page-change requests.
//!
//! The controller never owns the current page. It checks a requested page
//! against the caller's [`PageState`] and, when the request is a real move,
//! hands the new page to the caller's callback. Everything else is dropped
//! silently so disabled and current-page controls need no guards of their own.

use serde::{Deserialize, Serialize};

use crate::pagination::PageState;

/// Why a request did not reach the callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    BeforeFirst,
    AfterLast,
    AlreadyCurrent,
}

/// Outcome of a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageChange {
    /// The callback was invoked with this page.
    Requested(usize),
    /// Nothing happened.
    Ignored(IgnoreReason),
}

impl PageChange {
    pub fn is_requested(&self) -> bool {
        matches!(self, Self::Requested(_))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PaginationController;

impl PaginationController {
    pub fn new() -> Self {
        Self
    }

    /// Ask the caller to move to `requested`.
    ///
    /// `on_page_change` runs at most once, and only when `requested` lies in
    /// `1..=total_pages` and differs from the current page.
    pub fn request_page_change<F>(
        &self,
        requested: i64,
        state: PageState,
        on_page_change: F,
    ) -> PageChange
    where
        F: FnOnce(usize),
    {
        let change = Self::check(requested, state);
        match change {
            PageChange::Requested(page) => {
                tracing::debug!("Page change requested: {} -> {}", state.current_page, page);
                on_page_change(page);
            }
            PageChange::Ignored(reason) => {
                tracing::trace!(
                    "Ignoring page request {} at page {} of {}: {:?}",
                    requested,
                    state.current_page,
                    state.total_pages,
                    reason
                );
            }
        }
        change
    }

    pub fn request_previous<F: FnOnce(usize)>(
        &self,
        state: PageState,
        on_page_change: F,
    ) -> PageChange {
        self.request_page_change(state.previous(), state, on_page_change)
    }

    pub fn request_next<F: FnOnce(usize)>(
        &self,
        state: PageState,
        on_page_change: F,
    ) -> PageChange {
        self.request_page_change(state.next(), state, on_page_change)
    }

    pub fn request_first<F: FnOnce(usize)>(
        &self,
        state: PageState,
        on_page_change: F,
    ) -> PageChange {
        self.request_page_change(state.first(), state, on_page_change)
    }

    pub fn request_last<F: FnOnce(usize)>(
        &self,
        state: PageState,
        on_page_change: F,
    ) -> PageChange {
        self.request_page_change(state.last(), state, on_page_change)
    }

    fn check(requested: i64, state: PageState) -> PageChange {
        if requested < 1 {
            return PageChange::Ignored(IgnoreReason::BeforeFirst);
        }
        let page = match usize::try_from(requested) {
            Ok(page) if page <= state.total_pages => page,
            _ => return PageChange::Ignored(IgnoreReason::AfterLast),
        };
        if page == state.current_page {
            return PageChange::Ignored(IgnoreReason::AlreadyCurrent);
        }
        PageChange::Requested(page)
    }
}

/// Free-function form of [`PaginationController::request_page_change`].
pub fn request_page_change<F>(
    requested: i64,
    current_page: usize,
    total_pages: usize,
    on_page_change: F,
) -> PageChange
where
    F: FnOnce(usize),
{
    PaginationController::new().request_page_change(
        requested,
        PageState::new(current_page, total_pages),
        on_page_change,
    )
}
