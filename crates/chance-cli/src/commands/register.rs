//! Register the current user with a fresh account.

use anyhow::Result;
use chance_core::{FixedIdentity, Ledger, Session, SessionStart};

use crate::cli_utils::{format_player, parse_name};

pub fn run(ledger: Ledger, identity: &FixedIdentity, name: &str) -> Result<()> {
    let name = parse_name(name)?;
    let (session, start) = Session::open(ledger, identity, || name)?;
    let player = session.player();

    match start {
        SessionStart::Registered => {
            println!("Welcome to the Game of Chance {}.", player.name);
            println!("You have been given {} credits.", player.credits);
        }
        SessionStart::Returning => {
            println!("Welcome back {}, you are already registered.", player.name);
            println!("{}", format_player(player));
        }
    }
    Ok(())
}
