//! devboard - a terminal task board for developers.
//!
//! This is the main binary: it parses the command line, sets up logging,
//! loads the configuration and the persisted tasks, then launches the TUI.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use devboard_config::Config;
use devboard_store::{FileStore, LoadOutcome, TaskRepository, default_data_dir};
use devboard_tui::{App, BoardController, Timings, Toasts, terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "DEVBOARD_LOG";

/// Name of the log file inside the data directory.
const LOG_FILE: &str = "devboard.log";

/// A terminal Kanban board for developer tasks.
#[derive(Debug, Parser)]
#[command(name = "devboard", version, about)]
struct Cli {
    /// Read configuration from this file instead of the default locations.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Store tasks in this directory.
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Clear stored tasks before starting.
    #[arg(long)]
    reset: bool,

    /// Print the board as JSON and exit.
    #[arg(long)]
    list: bool,

    /// Write the effective configuration to this file and exit.
    #[arg(long, value_name = "PATH")]
    write_config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().await.context("failed to load config")?,
    };
    if let Some(dir) = cli.data_dir {
        config.storage.data_dir = Some(dir);
    }
    if let Some(path) = &cli.write_config {
        config
            .save_to(path)
            .with_context(|| format!("failed to write config to {}", path.display()))?;
        println!("wrote {}", path.display());
        return Ok(());
    }

    let data_dir = match config.storage.resolved_data_dir() {
        Some(dir) => dir,
        None => default_data_dir()?,
    };
    let store = FileStore::with_path(data_dir.clone())?;
    init_logging(&data_dir)?;

    let mut repo = TaskRepository::new(store, config.storage.key.clone());
    if cli.reset {
        repo.clear().context("failed to clear stored tasks")?;
        info!("stored tasks cleared");
    }
    match repo.load() {
        LoadOutcome::Seeded => info!("starting with the sample board"),
        LoadOutcome::Restored { count, .. } => info!(count, "restored tasks"),
    }

    if cli.list {
        println!("{}", serde_json::to_string_pretty(&repo.snapshot())?);
        return Ok(());
    }

    let toasts = Toasts::new(config.notifications.dismiss_after(), Instant::now());
    let board = BoardController::new(repo, toasts, Timings::from(&config.ui));

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();
    let mut terminal = terminal::setup_terminal(config.ui.mouse)?;

    let mut app = App::new(board, config);
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}

/// Sends logs to a file in the data directory, since the TUI owns stdout.
fn init_logging(data_dir: &Path) -> anyhow::Result<()> {
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join(LOG_FILE))
        .context("failed to open log file")?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(log_file)
        .with_ansi(false)
        .init();

    Ok(())
}
