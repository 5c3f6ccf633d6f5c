use std::path::PathBuf;

use strum::Display;
use thiserror::Error;

/// What a ledger operation intended to do with the file when opening it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum OpenIntent {
    Read,
    Append,
    ReadWrite,
}

impl OpenIntent {
    pub fn writes(self) -> bool {
        matches!(self, OpenIntent::Append | OpenIntent::ReadWrite)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Short record: expected 20 bytes, got {len}")]
    ShortRecord { len: usize },

    #[error("Oversized record: expected 20 bytes, got {len}")]
    OversizedRecord { len: usize },

    #[error("Player name is not valid UTF-8")]
    InvalidName,

    #[error("Failed to open ledger {path:?} for {intent}: {source}")]
    LedgerOpen {
        path: PathBuf,
        intent: OpenIntent,
        #[source]
        source: std::io::Error,
    },

    #[error("Round would leave uid {uid} with {balance} credits")]
    InsufficientCredits { uid: u32, balance: i32 },

    #[error("User identity unavailable: {0}")]
    IdentityUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Write-intent open failures leave the active player unpersistable.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::LedgerOpen { intent, .. } if intent.writes())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
