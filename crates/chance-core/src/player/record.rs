use serde::{Deserialize, Serialize};

use crate::config::account::{RESET_CREDITS, STARTING_CREDITS, STARTING_HIGHSCORE};
use crate::player::PlayerName;

/// One player's account, as held in memory and persisted in the ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub uid: u32,
    pub credits: i32,
    pub highscore: i32,
    pub name: PlayerName,
}

impl PlayerRecord {
    pub fn new(uid: u32, credits: i32, highscore: i32, name: impl Into<PlayerName>) -> Self {
        Self {
            uid,
            credits,
            highscore,
            name: name.into(),
        }
    }

    /// A freshly registered account with the starting balance.
    pub fn new_account(uid: u32, name: impl Into<PlayerName>) -> Self {
        Self::new(uid, STARTING_CREDITS, STARTING_HIGHSCORE, name)
    }

    /// Fold the current balance into the high score after a round.
    ///
    /// Returns true when a new personal best was set.
    pub fn record_round(&mut self) -> bool {
        if self.credits > self.highscore {
            self.highscore = self.credits;
            true
        } else {
            false
        }
    }

    pub fn reset_credits(&mut self) {
        self.credits = RESET_CREDITS;
    }

    pub fn rename(&mut self, name: impl Into<PlayerName>) {
        self.name = name.into();
    }
}
