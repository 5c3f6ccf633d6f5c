//! Show the current player's record.

use anyhow::Result;
use chance_core::{FixedIdentity, Ledger};

use crate::cli_utils::format_player;

pub fn run(ledger: Ledger, identity: &FixedIdentity) -> Result<()> {
    match ledger.lookup(identity.0)? {
        Some(player) => println!("{}", format_player(&player)),
        None => println!("uid {} is not registered", identity.0),
    }
    Ok(())
}
