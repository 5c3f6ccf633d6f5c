//! CLI command implementations.
//!
//! Each command opens the ledger for the duration of one operation and
//! renders the result for the terminal.

pub mod credit;
pub mod high_score;
pub mod list;
pub mod register;
pub mod rename;
pub mod reset;
pub mod whoami;
