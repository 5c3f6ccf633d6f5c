//! Change the current player's name.

use anyhow::Result;
use chance_core::{FixedIdentity, Ledger};

use crate::cli_utils::{parse_name, resume_session};

pub fn run(ledger: Ledger, identity: &FixedIdentity, name: &str) -> Result<()> {
    let name = parse_name(name)?;
    let mut session = resume_session(ledger, identity)?;
    session.rename(name)?;
    println!("Your name has been changed to {}", session.player().name);
    Ok(())
}
