//! Two-player terminal tic-tac-toe.
//!
//! Game rules and state live in [`tictactoe_core`]; this crate adds the
//! outer layers that drive it.
//!
//! # Architecture
//!
//! - **Config**: TOML settings ([`GameConfig`])
//! - **CLI**: clap commands ([`Cli`])
//! - **Script**: non-interactive replay of a move list ([`run_moves`])
//! - **TUI**: ratatui view over a shared [`StoreHandle`](tictactoe_core::StoreHandle)

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod script;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, GameConfig};
pub use script::{MoveReport, MoveResult, PlayReport, run_moves};
