use anyhow::Result;
use clap::Parser;
use git_history_search::config::Config;
use git_history_search::{report, runner};
use std::path::PathBuf;

/// Search every commit of a git repository's history for textual terms
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path to the git repository to search
    repo_loc: PathBuf,

    /// One or more search terms, OR-combined and matched case-insensitively
    #[arg(long = "search-terms", num_args = 1.., required = true)]
    search_terms: Vec<String>,

    /// Optional TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let summary = runner::run(&config, &cli.repo_loc, &cli.search_terms).await?;
    report::print_summary(&summary);

    Ok(())
}
