//! # chance-core
//!
//! Persistent player ledger for the Game of Chance.
//!
//! This crate provides:
//! - A fixed-width binary record codec (20 bytes per player)
//! - A forward-only ledger scanner tolerant of a truncated trailing record
//! - Lookup, registration, in-place update and high-score aggregation
//! - A player session that threads the active record through those operations

pub mod config;
pub mod error;
pub mod identity;
pub mod ledger;
pub mod player;
pub mod session;

pub use error::{Error, OpenIntent, Result};
pub use identity::{FixedIdentity, IdentityProvider, ProcessIdentity};
pub use ledger::{HighScore, Ledger, LedgerScanner, UpdateOutcome};
pub use player::{PlayerName, PlayerRecord};
pub use session::{Session, SessionStart};
