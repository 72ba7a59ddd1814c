mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("PAGER_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::TRACE)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .init();
    }

    let cli = Cli::parse();
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Range(args) => handlers::range::handle(&load_context(config), args)?,
        Commands::Goto(args) => handlers::goto::handle(args)?,
        Commands::Pages(args) => handlers::pages::handle(&load_context(config), args)?,
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "pager", &mut std::io::stdout());
        }
    }

    Ok(())
}

fn load_context(config: Option<&str>) -> CliContext {
    match CliContext::load(config) {
        Ok(ctx) => ctx,
        Err(e) => output::output_error(&e.to_string()),
    }
}
