use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "pager")]
#[command(about = "Compute page ranges for paginated pickup, user and driver lists", long_about = None)]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_COMMIT_HASH"), ")")
)]
pub struct Cli {
    /// Path to a pager config file (or set PAGER_CONFIG env var)
    #[arg(long, global = true, value_name = "FILE", env = "PAGER_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the page indicators for a position in a list
    Range(RangeArgs),
    /// Request a move to another page
    Goto(GotoArgs),
    /// Derive the page count from an item count
    Pages(PagesArgs),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

#[derive(Args)]
pub struct RangeArgs {
    #[arg(long)]
    pub current: usize,
    #[arg(long)]
    pub total: usize,
    /// Pages shown on each side of the current page [default: from config]
    #[arg(long)]
    pub siblings: Option<usize>,
    /// Pages always shown at each end [default: from config]
    #[arg(long)]
    pub boundaries: Option<usize>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct GotoArgs {
    /// Requested page; out-of-range values are ignored, not rejected
    #[arg(long, allow_negative_numbers = true)]
    pub page: i64,
    #[arg(long)]
    pub current: usize,
    #[arg(long)]
    pub total: usize,
}

#[derive(Args)]
pub struct PagesArgs {
    #[arg(long)]
    pub items: usize,
    /// Items per page [default: from config]
    #[arg(long)]
    pub page_size: Option<usize>,
    /// Also report which items this page shows
    #[arg(long)]
    pub page: Option<usize>,
}
