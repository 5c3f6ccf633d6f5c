//! Persist the outcome of one game round.

use anyhow::Result;
use chance_core::{FixedIdentity, Ledger};
use tracing::debug;

use crate::cli_utils::{format_credits, resume_session};

pub fn run(ledger: Ledger, identity: &FixedIdentity, amount: i32) -> Result<()> {
    let mut session = resume_session(ledger, identity)?;

    let new_best = session.play_round(|player| {
        debug!("Applying {} credits to {}", amount, player.credits);
        player.credits = player.credits.saturating_add(amount);
    })?;

    println!(
        "You now have {} credits",
        format_credits(session.player().credits)
    );
    if new_best {
        println!("That's a new personal high score!");
    }
    Ok(())
}
