//! tictactoe - terminal tic-tac-toe for two local players.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe::{Cli, Command, GameConfig, run_moves, tui};
use tictactoe_core::StoreHandle;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    if let Some(locale) = cli.locale {
        config = config.with_locale(locale);
    }

    match cli.command {
        Command::Tui => run_tui(&config),
        Command::Play { moves, json } => run_play(&config, &moves, json),
    }
}

/// Run the interactive terminal game
fn run_tui(config: &GameConfig) -> Result<()> {
    // Log to file so tracing output does not corrupt the screen
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create {}", config.log_file().display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config)?)
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    let store = StoreHandle::new();
    store.subscribe(|state| debug!(?state, "Snapshot published"))?;
    tui::run_tui(store, config)
}

/// Replay a move list and print the outcome
fn run_play(config: &GameConfig, moves: &[usize], json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config)?)
        .with_writer(std::io::stderr)
        .init();

    info!(count = moves.len(), "Replaying moves");
    let store = StoreHandle::new();
    let report = run_moves(&store, moves, *config.locale())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.render_text());
    }
    Ok(())
}

/// `RUST_LOG` wins; otherwise the config's `log_filter`, which must parse.
fn env_filter(config: &GameConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => config.env_filter().context("Invalid log_filter"),
    }
}
