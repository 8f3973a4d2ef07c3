use std::path::PathBuf;

use clap::Parser;
use reddit_core::{ParseOptionError, SearchMode};

use super::logging::LogDestination;

/// Search Reddit posts from the terminal.
#[derive(Debug, Parser)]
#[command(name = "reddit_search", version, about)]
pub struct Args {
    /// RON config file; missing means defaults.
    #[arg(long, default_value = "reddit_search.ron")]
    pub config: PathBuf,

    /// `keyword` searches all of Reddit, `subreddit` browses one subreddit.
    #[arg(long, value_parser = parse_mode)]
    pub mode: Option<SearchMode>,

    /// Listing host, e.g. a local mock server.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Query submitted once at startup, e.g. `popular`.
    #[arg(long)]
    pub startup: Option<String>,

    #[arg(long, default_value = "info")]
    pub log_level: String,

    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log_to: LogDestination,
}

fn parse_mode(value: &str) -> Result<SearchMode, ParseOptionError> {
    value.parse()
}
