mod manager;

pub use manager::{Session, SessionStart};
