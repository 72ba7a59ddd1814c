//! Page range generation.
//!
//! Decides which page numbers and gap markers a pagination control shows
//! for a given position in a page-numbered list. Pure computation: no state,
//! no I/O, safe to call from anywhere.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::pagination::PaginationParameters;

/// Which side of the sibling window a gap marker sits on.
///
/// Only used for stable rendering identity; both sides render the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapSide {
    Left,
    Right,
}

/// One entry of a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DisplayItem {
    /// A selectable page number (1-based).
    Page { page: usize },
    /// A non-selectable marker standing in for one or more hidden pages.
    Gap { side: GapSide },
}

impl DisplayItem {
    pub fn page(page: usize) -> Self {
        Self::Page { page }
    }

    pub fn gap(side: GapSide) -> Self {
        Self::Gap { side }
    }

    /// The page number carried by this item, if it is selectable.
    pub fn page_number(&self) -> Option<usize> {
        match self {
            Self::Page { page } => Some(*page),
            Self::Gap { .. } => None,
        }
    }

    pub fn is_gap(&self) -> bool {
        matches!(self, Self::Gap { .. })
    }

    /// Stable identity for list keys, e.g. `page-3` or `gap-left`.
    pub fn key(&self) -> String {
        match self {
            Self::Page { page } => format!("page-{}", page),
            Self::Gap { side: GapSide::Left } => "gap-left".to_string(),
            Self::Gap { side: GapSide::Right } => "gap-right".to_string(),
        }
    }
}

/// Compute the display items for the given parameters.
///
/// `current_page` is not clamped; callers keep it within `1..=total_pages`.
/// Out-of-range values still produce a deterministic result.
pub fn generate(params: &PaginationParameters) -> Vec<DisplayItem> {
    let current = params.current_page;
    let total = params.total_pages;
    let siblings = params.sibling_count;
    let boundary = params.boundary_count;

    if total <= params.total_blocks() {
        return (1..=total).map(DisplayItem::page).collect();
    }

    // Collapsing only happens when total > 2 * boundary + 5, so the
    // subtractions on `total` below cannot underflow.
    let left_boundary_edge = boundary.max(1);
    // One less than the right boundary edge, max(total - boundary + 1, total).
    // The edge itself is total + 1 when boundary is 0, which overflows at
    // usize::MAX, so comparisons go through this value instead.
    let right_edge_inner = (total - boundary).max(total - 1);

    let left_sibling = current.saturating_sub(siblings).max(left_boundary_edge);
    let right_sibling = match right_edge_inner.checked_add(1) {
        Some(right_boundary_edge) => current.saturating_add(siblings).min(right_boundary_edge),
        None => current.saturating_add(siblings),
    };

    let show_left_gap = left_sibling > left_boundary_edge.saturating_add(1);
    let show_right_gap = right_sibling < right_edge_inner;

    let mut items = Vec::new();
    let mut emitted = BTreeSet::new();

    for page in 1..=boundary.min(total) {
        emitted.insert(page);
        items.push(DisplayItem::page(page));
    }

    if show_left_gap {
        items.push(DisplayItem::gap(GapSide::Left));
    }

    for page in left_sibling..=right_sibling {
        if page > boundary && page <= total - boundary {
            emitted.insert(page);
            items.push(DisplayItem::page(page));
        }
    }

    if show_right_gap {
        items.push(DisplayItem::gap(GapSide::Right));
    }

    // Empty when boundary is 0 and total is usize::MAX.
    if let Some(right_start) = (total - boundary).checked_add(1) {
        for page in right_start.max(boundary + 1)..=total {
            if emitted.insert(page) {
                items.push(DisplayItem::page(page));
            }
        }
    }

    items
}

/// [`generate`] with one sibling and one boundary page on each side.
pub fn page_range(current_page: usize, total_pages: usize) -> Vec<DisplayItem> {
    generate(&PaginationParameters::new(current_page, total_pages))
}
