use serde::Serialize;

use crate::cli::PagesArgs;
use crate::context::CliContext;
use crate::output;
use pager_core::{page_bounds, total_pages_for};

#[derive(Serialize)]
struct PagesView {
    total_items: usize,
    page_size: usize,
    total_pages: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<PageItems>,
}

/// Zero-based, end-exclusive item indices of one page.
#[derive(Serialize)]
struct PageItems {
    page: usize,
    start: usize,
    end: usize,
}

pub fn handle(ctx: &CliContext, args: PagesArgs) -> anyhow::Result<()> {
    let page_size = ctx.page_size(args.page_size);
    if page_size == 0 {
        return output::output_error("page size must be at least 1");
    }
    let total_pages = total_pages_for(args.items, page_size);

    let page = args.page.map(|page| {
        let bounds = page_bounds(page, page_size, args.items);
        PageItems {
            page,
            start: bounds.start,
            end: bounds.end,
        }
    });

    output::output_success(PagesView {
        total_items: args.items,
        page_size,
        total_pages,
        page,
    });
    Ok(())
}
