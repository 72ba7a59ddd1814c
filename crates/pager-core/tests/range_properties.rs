//! Property-based tests for page range generation.
//!
//! Every generated sequence must be something a pagination control can
//! render without ambiguity: pages ascend and nothing repeats. Gaps hide at
//! least one page, except a right gap in front of a boundary block of two or
//! more pages, whose edge still sits on the last page.

use pager_core::{generate, DisplayItem, GapSide, PaginationParameters};
use proptest::prelude::*;

// ===== Arbitrary Strategies =====

/// Parameters with `current_page` inside `1..=total_pages`.
fn arb_valid_params() -> impl Strategy<Value = PaginationParameters> {
    (1usize..=300, 0usize..=4, 0usize..=4)
        .prop_flat_map(|(total, siblings, boundary)| {
            (1usize..=total, Just(total), Just(siblings), Just(boundary))
        })
        .prop_map(|(current, total, siblings, boundary)| {
            PaginationParameters::new(current, total)
                .with_sibling_count(siblings)
                .with_boundary_count(boundary)
        })
}

/// Parameters short enough that nothing collapses.
fn arb_short_params() -> impl Strategy<Value = PaginationParameters> {
    (0usize..=4, 0usize..=4)
        .prop_flat_map(|(siblings, boundary)| {
            let blocks = siblings * 2 + 3 + boundary * 2 + 2;
            (1usize..=blocks, Just(siblings), Just(boundary))
        })
        .prop_flat_map(|(total, siblings, boundary)| {
            (1usize..=total, Just(total), Just(siblings), Just(boundary))
        })
        .prop_map(|(current, total, siblings, boundary)| {
            PaginationParameters::new(current, total)
                .with_sibling_count(siblings)
                .with_boundary_count(boundary)
        })
}

/// Parameters long enough to always collapse.
fn arb_long_params() -> impl Strategy<Value = PaginationParameters> {
    (0usize..=4, 0usize..=4)
        .prop_flat_map(|(siblings, boundary)| {
            let blocks = siblings * 2 + 3 + boundary * 2 + 2;
            (blocks + 1..=300, Just(siblings), Just(boundary))
        })
        .prop_flat_map(|(total, siblings, boundary)| {
            (1usize..=total, Just(total), Just(siblings), Just(boundary))
        })
        .prop_map(|(current, total, siblings, boundary)| {
            PaginationParameters::new(current, total)
                .with_sibling_count(siblings)
                .with_boundary_count(boundary)
        })
}

fn page_numbers(items: &[DisplayItem]) -> Vec<usize> {
    items.iter().filter_map(DisplayItem::page_number).collect()
}

proptest! {
    #[test]
    fn pages_strictly_ascend(params in arb_valid_params()) {
        let pages = page_numbers(&generate(&params));
        for pair in pages.windows(2) {
            prop_assert!(pair[0] < pair[1], "pages out of order: {:?}", pages);
        }
    }

    #[test]
    fn pages_stay_in_range(params in arb_valid_params()) {
        for page in page_numbers(&generate(&params)) {
            prop_assert!(page >= 1 && page <= params.total_pages);
        }
    }

    #[test]
    fn short_lists_show_every_page(params in arb_short_params()) {
        let expected: Vec<DisplayItem> = (1..=params.total_pages).map(DisplayItem::page).collect();
        prop_assert_eq!(generate(&params), expected);
    }

    #[test]
    fn collapsed_lists_fit_in_total_blocks(params in arb_long_params()) {
        let items = generate(&params);
        prop_assert!(page_numbers(&items).len() <= params.total_blocks());
        prop_assert!(items.iter().any(DisplayItem::is_gap));
    }

    #[test]
    fn current_page_is_always_shown(params in arb_valid_params()) {
        let pages = page_numbers(&generate(&params));
        prop_assert!(pages.contains(&params.current_page));
    }

    #[test]
    fn boundary_pages_are_always_shown(params in arb_valid_params()) {
        prop_assume!(params.boundary_count >= 1);
        let pages = page_numbers(&generate(&params));
        prop_assert_eq!(pages.first().copied(), Some(1));
        prop_assert_eq!(pages.last().copied(), Some(params.total_pages));
    }

    #[test]
    fn gaps_hide_at_least_one_page(params in arb_valid_params()) {
        let items = generate(&params);
        prop_assert!(items.iter().filter(|item| item.is_gap()).count() <= 2);

        for (idx, item) in items.iter().enumerate() {
            if !item.is_gap() {
                continue;
            }
            let before = match idx.checked_sub(1).map(|i| items[i]) {
                Some(DisplayItem::Gap { .. }) => {
                    return Err(TestCaseError::fail(format!("adjacent gaps: {:?}", items)));
                }
                Some(DisplayItem::Page { page }) => page,
                None => 0,
            };
            if params.boundary_count >= 2
                && *item == DisplayItem::gap(GapSide::Right)
                && before == params.total_pages - params.boundary_count
            {
                continue;
            }
            let after = match items.get(idx + 1) {
                Some(DisplayItem::Page { page }) => *page,
                Some(DisplayItem::Gap { .. }) => {
                    return Err(TestCaseError::fail(format!("adjacent gaps: {:?}", items)));
                }
                None => params.total_pages + 1,
            };
            prop_assert!(after > before + 1, "vacuous gap in {:?}", items);
        }
    }

    #[test]
    fn left_gaps_always_hide_a_page(params in arb_valid_params()) {
        let items = generate(&params);
        if let Some(idx) = items.iter().position(|item| *item == DisplayItem::gap(GapSide::Left)) {
            let before = idx.checked_sub(1).and_then(|i| items[i].page_number()).unwrap_or(0);
            let after = items.get(idx + 1).and_then(DisplayItem::page_number);
            prop_assert!(after.is_some_and(|after| after > before + 1), "vacuous gap in {:?}", items);
        }
    }

    #[test]
    fn generation_is_idempotent(params in arb_valid_params()) {
        prop_assert_eq!(generate(&params), generate(&params));
    }
}

#[test]
fn scenario_single_page() {
    assert_eq!(generate(&PaginationParameters::new(1, 1)), vec![DisplayItem::page(1)]);
}

#[test]
fn scenario_zero_pages() {
    assert!(generate(&PaginationParameters::new(1, 0)).is_empty());
}
