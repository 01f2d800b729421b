use std::path::PathBuf;

use clap::Parser;

use crate::api::client::DEFAULT_BASE_URL;

/// POV — Public Opinion Viewer, an interactive terminal client
#[derive(Parser, Debug)]
#[command(name = "pov")]
#[command(author, version, about = "POV — aggregated public opinion in your terminal")]
#[command(long_about = "POV is an interactive terminal client for the POV opinion \n\
    aggregation service. Search for a product, movie, or public figure, \n\
    pick a category, and read a positivity rating, representative \n\
    comments, and per-category statistics.\n\n\
    Run without flags for the interactive Home screen, or pass \n\
    --query and --category to jump straight to a result.")]
pub struct Cli {
    /// Search term to look up immediately, skipping the Home screen
    #[arg(long, requires = "category")]
    pub query: Option<String>,

    /// Category for --query (celebrity, game, movie, music, politics, product, sport, travel)
    #[arg(long, requires = "query")]
    pub category: Option<String>,

    /// Base URL of the POV results endpoint
    #[arg(long, env = "POV_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Timeout for result fetches, in seconds
    #[arg(long, env = "POV_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Append logs to this file (the TUI owns stdout, so there is no console logging)
    #[arg(long, env = "POV_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}
