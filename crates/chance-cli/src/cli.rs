//! CLI argument definitions for chance.

use std::path::PathBuf;

use chance_core::config::ledger::DEFAULT_FILE;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chance")]
#[command(about = "Game of Chance player ledger", version)]
pub struct Args {
    /// Path to the ledger file
    #[arg(long, env = "CHANCE_LEDGER", default_value = DEFAULT_FILE)]
    pub ledger: PathBuf,

    /// User id to act as (defaults to the uid of the running process)
    #[arg(long, env = "CHANCE_UID")]
    pub uid: Option<u32>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the current player's ledger record
    Whoami,
    /// Register the current user if they have no record yet
    Register {
        /// Player name (at most 7 bytes are kept)
        #[arg(long)]
        name: String,
    },
    /// Apply the credit outcome of one round and save it
    Credit {
        /// Credits won (positive) or lost (negative)
        #[arg(long, allow_negative_numbers = true)]
        amount: i32,
    },
    /// Change the current player's name
    Rename {
        /// New player name (at most 7 bytes are kept)
        #[arg(long)]
        name: String,
    },
    /// Reset the current player's account to 100 credits
    Reset,
    /// Show who holds the high score
    HighScore {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List every record in the ledger
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
