use serde::Serialize;

use crate::cli::{OutputFormat, RangeArgs};
use crate::context::CliContext;
use crate::output;
use pager_core::{generate, render_controls, DisplayItem, PaginationParameters};

#[derive(Serialize)]
struct RangeView {
    #[serde(flatten)]
    params: PaginationParameters,
    should_render: bool,
    items: Vec<DisplayItem>,
    text: String,
}

pub fn handle(ctx: &CliContext, args: RangeArgs) -> anyhow::Result<()> {
    let params = match ctx
        .parameters(args.current, args.total, args.siblings, args.boundaries)
        .validated()
    {
        Ok(params) => params,
        Err(e) => return output::output_error(&e.to_string()),
    };

    let items = generate(&params);
    let text = render_controls(&items, params.state());
    tracing::debug!("Generated {} items for {:?}", items.len(), params);

    match args.format {
        OutputFormat::Text => println!("{}", text),
        OutputFormat::Json => output::output_success(RangeView {
            params,
            should_render: params.should_render(),
            items,
            text,
        }),
    }
    Ok(())
}
