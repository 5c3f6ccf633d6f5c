//! Show who holds the high score.

use anyhow::Result;
use chance_core::{FixedIdentity, Ledger};

use crate::cli_utils::{format_high_score, resume_session};

pub fn run(ledger: Ledger, identity: &FixedIdentity, json: bool) -> Result<()> {
    let session = resume_session(ledger, identity)?;
    let high_score = session.high_score()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&high_score)?);
    } else {
        println!("{}", format_high_score(&high_score));
    }
    Ok(())
}
