//! Player account model.

mod name;
mod record;

pub use name::PlayerName;
pub use record::PlayerRecord;
