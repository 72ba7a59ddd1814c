use serde::Serialize;

use crate::cli::GotoArgs;
use crate::output;
use pager_core::{IgnoreReason, PageChange, PageState, PaginationController};

#[derive(Serialize)]
struct GotoView {
    changed: bool,
    page: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<IgnoreReason>,
}

pub fn handle(args: GotoArgs) -> anyhow::Result<()> {
    let state = PageState::new(args.current, args.total);
    let mut page = state.current_page;

    let change = PaginationController::new().request_page_change(args.page, state, |requested| {
        page = requested;
    });

    let reason = match change {
        PageChange::Requested(_) => None,
        PageChange::Ignored(reason) => Some(reason),
    };
    output::output_success(GotoView {
        changed: change.is_requested(),
        page,
        reason,
    });
    Ok(())
}
