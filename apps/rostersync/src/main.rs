//! rostersync - one-shot reconciliation of directory membership into a
//! feedback board.
//!
//! Queries the directory service for people matching a criteria expression,
//! lists the board's current users, and creates a board account for every
//! directory member whose name is not on the board yet. Runs to completion
//! once per invocation; the first fatal error aborts with a non-zero exit
//! status.

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use rostersync_board::BoardClient;
use rostersync_directory::{CriteriaFilter, DirectoryClient};
use rostersync_engine::SyncEngine;

mod config;

use config::SyncConfig;

/// Create feedback-board accounts for directory members that do not have one.
#[derive(Parser)]
#[command(name = "rostersync")]
#[command(version)]
#[command(about = "Reconcile directory membership into a feedback board")]
struct Cli {
    /// Criteria expression: comma-separated key=value pairs; repeating a key
    /// matches any of its values. Empty means no filtering on this side;
    /// the directory decides what an empty filter selects.
    #[arg(default_value = "")]
    criteria: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("failed to set subscriber");
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = SyncConfig::from_env()?;
    let criteria = CriteriaFilter::parse(&cli.criteria);

    let directory = DirectoryClient::new(&config.directory_url, &config.directory_api_key)?;
    let board = BoardClient::new(&config.board_url, &config.board_api_key)?;

    let stats = SyncEngine::new(directory, board).run(&criteria).await?;

    info!(
        directory_entries = stats.directory_entries,
        existing_users = stats.existing_users,
        created = stats.created,
        "reconciliation complete"
    );

    Ok(())
}
