use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::player::{PlayerName, PlayerRecord};

/// Who holds the best score, as seen by the current player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "holder", rename_all = "snake_case")]
pub enum HighScore {
    /// A ledger record beats the current player's own high score.
    Ledger { name: PlayerName, score: i32 },
    /// The current player holds (or ties) the best score.
    CurrentPlayer { score: i32 },
}

impl HighScore {
    pub fn score(&self) -> i32 {
        match self {
            HighScore::Ledger { score, .. } | HighScore::CurrentPlayer { score } => *score,
        }
    }
}

/// Finds the ledger's best high score and compares it against `current`.
///
/// Ties keep the first record in file order.
pub fn aggregate<I>(records: I, current: &PlayerRecord) -> Result<HighScore>
where
    I: IntoIterator<Item = Result<PlayerRecord>>,
{
    let mut top: Option<PlayerRecord> = None;
    for record in records {
        let record = record?;
        if top.as_ref().is_none_or(|t| record.highscore > t.highscore) {
            top = Some(record);
        }
    }

    Ok(match top {
        Some(top) if top.highscore > current.highscore => HighScore::Ledger {
            name: top.name,
            score: top.highscore,
        },
        _ => HighScore::CurrentPlayer {
            score: current.highscore,
        },
    })
}
