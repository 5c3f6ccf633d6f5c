mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use chance_core::Ledger;
use clap::Parser;
use cli::{Args, Command};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Exit code for ledger failures that leave the player state unpersistable.
const FATAL_EXIT_CODE: i32 = 2;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (warn unless RUST_LOG says otherwise)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("chance_cli=warn,chance_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match run(args) {
        Err(e) if is_fatal(&e) => {
            error!("Fatal ledger error: {:#}", e);
            eprintln!("Fatal: {:#}", e);
            std::process::exit(FATAL_EXIT_CODE);
        }
        other => other,
    }
}

fn run(args: Args) -> Result<()> {
    let ledger = Ledger::new(&args.ledger);
    let identity = || cli_utils::resolve_identity(args.uid);

    match args.command {
        Command::Whoami => commands::whoami::run(ledger, &identity()?),
        Command::Register { name } => commands::register::run(ledger, &identity()?, &name),
        Command::Credit { amount } => commands::credit::run(ledger, &identity()?, amount),
        Command::Rename { name } => commands::rename::run(ledger, &identity()?, &name),
        Command::Reset => commands::reset::run(ledger, &identity()?),
        Command::HighScore { json } => commands::high_score::run(ledger, &identity()?, json),
        Command::List { json } => commands::list::run(ledger, json),
    }
}

fn is_fatal(e: &anyhow::Error) -> bool {
    e.downcast_ref::<chance_core::Error>()
        .is_some_and(chance_core::Error::is_fatal)
}
