//! Reset the current player's account balance.

use anyhow::Result;
use chance_core::{FixedIdentity, Ledger};

use crate::cli_utils::resume_session;

pub fn run(ledger: Ledger, identity: &FixedIdentity) -> Result<()> {
    let mut session = resume_session(ledger, identity)?;
    session.reset_credits()?;
    println!(
        "Your account has been reset with {} credits.",
        session.player().credits
    );
    Ok(())
}
