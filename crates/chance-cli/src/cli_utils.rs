//! Shared helpers for CLI commands.

use anyhow::{Result, bail};
use chance_core::{
    FixedIdentity, HighScore, IdentityProvider, Ledger, PlayerName, PlayerRecord, ProcessIdentity,
    Session,
};
use owo_colors::OwoColorize;

/// Resolve the session uid once: an explicit `--uid` wins over the process uid.
pub fn resolve_identity(uid: Option<u32>) -> Result<FixedIdentity> {
    let uid = match uid {
        Some(uid) => uid,
        None => ProcessIdentity.current_user_id()?,
    };
    Ok(FixedIdentity(uid))
}

/// Build a ledger name from user input, rejecting names with no content.
pub fn parse_name(input: &str) -> Result<PlayerName> {
    let name = PlayerName::new(input.trim());
    if name.is_empty() {
        bail!("player name must not be empty");
    }
    Ok(name)
}

/// Resume an existing player, failing with a hint when they never registered.
pub fn resume_session(ledger: Ledger, identity: &FixedIdentity) -> Result<Session> {
    match Session::resume(ledger, identity)? {
        Some(session) => Ok(session),
        None => bail!(
            "uid {} has no ledger record; run `chance register --name <NAME>` first",
            identity.0
        ),
    }
}

pub fn format_player(player: &PlayerRecord) -> String {
    format!(
        "[Name: {}]\n[You have {} credits]\n[High score: {}]",
        player.name.as_str().bold(),
        format_credits(player.credits),
        player.highscore
    )
}

pub fn format_credits(credits: i32) -> String {
    if credits > 0 {
        credits.green().to_string()
    } else {
        credits.red().to_string()
    }
}

pub fn format_high_score(high_score: &HighScore) -> String {
    let body = match high_score {
        HighScore::Ledger { name, score } => {
            format!("{} has the high score of {}", name.as_str().bold(), score)
        }
        HighScore::CurrentPlayer { score } => format!(
            "You currently have the high score of {} credits!",
            score.yellow()
        ),
    };
    format!(
        "{}\n{}\n{}",
        "===============| HIGH SCORE |===============".dimmed(),
        body,
        "============================================".dimmed()
    )
}
