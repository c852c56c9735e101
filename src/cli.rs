//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_core::Locale;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Status line language, overrides the config file
    #[arg(long, global = true)]
    pub locale: Option<Locale>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Tui,

    /// Replay cell indices (0-8) from an empty board and print the result
    Play {
        /// Comma-separated cell indices, e.g. 0,1,3,4,6
        #[arg(long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// Print a JSON report instead of the board
        #[arg(long)]
        json: bool,
    },
}
