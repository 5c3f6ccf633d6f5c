use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::identity::IdentityProvider;
use crate::ledger::{HighScore, Ledger, UpdateOutcome};
use crate::player::{PlayerName, PlayerRecord};

/// How the active player was obtained when the session opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStart {
    Returning,
    Registered,
}

/// A player session: the ledger plus the working copy of one player record.
///
/// Game logic mutates the working copy; every mutating method here persists
/// it before returning.
pub struct Session {
    ledger: Ledger,
    player: PlayerRecord,
}

impl Session {
    /// Resumes the caller's existing account, or `None` if they never registered.
    pub fn resume<P: IdentityProvider>(ledger: Ledger, identity: &P) -> Result<Option<Self>> {
        let uid = identity.current_user_id()?;
        Ok(ledger
            .lookup(uid)?
            .map(|player| Self { ledger, player }))
    }

    /// Resumes the caller's account, registering a new one on a lookup miss.
    ///
    /// `new_name` is only consulted when a registration happens.
    pub fn open<P, F>(ledger: Ledger, identity: &P, new_name: F) -> Result<(Self, SessionStart)>
    where
        P: IdentityProvider,
        F: FnOnce() -> PlayerName,
    {
        let uid = identity.current_user_id()?;
        if let Some(player) = ledger.lookup(uid)? {
            debug!("Resuming session for uid {}", uid);
            return Ok((Self { ledger, player }, SessionStart::Returning));
        }

        let player = PlayerRecord::new_account(uid, new_name());
        ledger.register(&player)?;
        info!("New player {} registered with {} credits", uid, player.credits);

        Ok((Self { ledger, player }, SessionStart::Registered))
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn player(&self) -> &PlayerRecord {
        &self.player
    }

    /// Runs one game round against the working copy and persists the result.
    ///
    /// A round that would leave the balance negative is rejected and the
    /// working copy is left untouched. Returns true when the round set a new
    /// personal best.
    pub fn play_round<F>(&mut self, round: F) -> Result<bool>
    where
        F: FnOnce(&mut PlayerRecord),
    {
        let mut next = self.player.clone();
        round(&mut next);
        if next.credits < 0 {
            return Err(Error::InsufficientCredits {
                uid: next.uid,
                balance: next.credits,
            });
        }

        let new_best = next.record_round();
        self.player = next;
        self.persist()?;
        Ok(new_best)
    }

    pub fn rename(&mut self, name: impl Into<PlayerName>) -> Result<()> {
        self.player.rename(name);
        self.persist()
    }

    pub fn reset_credits(&mut self) -> Result<()> {
        self.player.reset_credits();
        self.persist()
    }

    pub fn high_score(&self) -> Result<HighScore> {
        self.ledger.high_score(&self.player)
    }

    fn persist(&self) -> Result<()> {
        if self.ledger.update(&self.player)? == UpdateOutcome::Unregistered {
            warn!(
                "Ledger {:?} has no record for uid {}; changes not saved",
                self.ledger.path(),
                self.player.uid
            );
        }
        Ok(())
    }
}
