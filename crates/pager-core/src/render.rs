//! Plain-text rendering of display items.
//!
//! Used by terminal front ends; web and TUI consumers render the items
//! themselves.

use crate::pagination::PageState;
use crate::range::DisplayItem;

pub const GAP_MARKER: &str = "…";
pub const PREVIOUS_MARKER: &str = "‹";
pub const NEXT_MARKER: &str = "›";

/// Render items on one line, with the current page in brackets.
pub fn render_text(items: &[DisplayItem], current_page: usize) -> String {
    items
        .iter()
        .map(|item| match item {
            DisplayItem::Page { page } if *page == current_page => format!("[{}]", page),
            DisplayItem::Page { page } => page.to_string(),
            DisplayItem::Gap { .. } => GAP_MARKER.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Like [`render_text`], wrapped in previous/next markers.
///
/// A disabled marker is replaced by a blank so the line keeps its width.
pub fn render_controls(items: &[DisplayItem], state: PageState) -> String {
    let previous = if state.has_previous() {
        PREVIOUS_MARKER
    } else {
        " "
    };
    let next = if state.has_next() { NEXT_MARKER } else { " " };
    format!("{} {} {}", previous, render_text(items, state.current_page), next)
}
