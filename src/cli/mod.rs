//! Terminal front-end: the dashboard, the two ledger editors and the log
//! viewer, all driven through a [`LedgerStore`](salesbook_core::LedgerStore).

mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use salesbook_config::ConfigError;
use salesbook_core::{CoreError, StorageError};
use salesbook_domain::AmountError;

pub use commands::run;

#[derive(Parser, Debug)]
#[command(name = "salesbook", version, about, propagate_version = true)]
pub struct Cli {
    /// Directory holding the ledger data (overrides the config file)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Path to the configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show totals, balance and per-entry chart series
    Dashboard,
    /// List or edit recorded sales
    Sales(LedgerArgs),
    /// List or edit recorded expenses
    Expenses(LedgerArgs),
    /// Show the activity log, newest first
    Logs,
}

#[derive(Args, Debug)]
pub struct LedgerArgs {
    #[command(subcommand)]
    pub action: Option<LedgerAction>,
}

#[derive(Debug, Subcommand)]
pub enum LedgerAction {
    /// List entries with their positions
    List,
    /// Record a new entry
    Add {
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Replace the entry at a 1-based position
    Edit {
        position: usize,
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Remove the entry at a 1-based position
    Delete {
        position: usize,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Amount(#[from] AmountError),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("Positions start at 1")]
    InvalidPosition,
    #[error("Change applied for this session only, it was not saved: {0}")]
    Unsaved(CoreError),
    #[error("Refusing to modify the ledger until stored data can be read: {0}")]
    LedgerUnreadable(CoreError),
}
