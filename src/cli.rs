use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::render::RenderFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "page-window pagination control")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct PaginationArgs {
    /// Total number of records in the list
    #[arg(short = 'r', long, allow_hyphen_values = true)]
    pub total_records: i64,

    /// Records per page (defaults to 30)
    #[arg(short = 'l', long, allow_hyphen_values = true)]
    pub page_limit: Option<i64>,

    /// Pages shown on each side of the current page, clamped to 0..=2 (defaults to 0)
    #[arg(short = 'n', long, allow_hyphen_values = true)]
    pub page_neighbours: Option<i64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = RenderFormat::Text)]
    pub format: RenderFormat,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Print the page window around a single page
    Window {
        #[command(flatten)]
        pagination: PaginationArgs,

        /// Selected page (defaults to 1)
        #[arg(short, long, default_value_t = 1)]
        current_page: u64,
    },
    /// Replay navigation actions (left, right, first, last, goto:N) and print every step
    Navigate {
        #[command(flatten)]
        pagination: PaginationArgs,

        /// Actions to apply after the initial page
        actions: Vec<String>,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
