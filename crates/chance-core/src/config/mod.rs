//! Constants for the ledger file layout and account defaults.
//!
//! - `ledger` - on-disk record geometry and the default file name
//! - `account` - starting and reset balances for player accounts

/// Ledger file layout.
///
/// Each record is `uid (4) | credits (4) | highscore (4) | name (8)`, little-endian.
pub mod ledger {
    /// Default ledger file, relative to the working directory.
    pub const DEFAULT_FILE: &str = "chance.data";

    /// Size of the `uid` field, which is never rewritten after registration.
    pub const UID_SIZE: usize = 4;

    /// Size of the zero-terminated name buffer.
    pub const NAME_SIZE: usize = 8;

    /// Maximum number of name content bytes (one byte is reserved for the terminator).
    pub const NAME_CAPACITY: usize = NAME_SIZE - 1;

    /// Size of one full record.
    pub const RECORD_SIZE: usize = UID_SIZE + 4 + 4 + NAME_SIZE;

    /// Size of the mutable tail (credits, highscore, name).
    pub const MUTABLE_SIZE: usize = RECORD_SIZE - UID_SIZE;
}

/// Account balance defaults.
pub mod account {
    /// Credits granted to a newly registered player.
    pub const STARTING_CREDITS: i32 = 100;

    /// High score recorded for a newly registered player.
    pub const STARTING_HIGHSCORE: i32 = 100;

    /// Balance restored by an account reset.
    pub const RESET_CREDITS: i32 = 100;
}
