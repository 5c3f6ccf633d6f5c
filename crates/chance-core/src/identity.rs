//! Sources for the numeric user id that keys ledger records.

#[cfg(not(unix))]
use crate::error::Error;
use crate::error::Result;

/// Supplies the caller's numeric user identifier.
///
/// Called once per session to seed lookups and new registrations.
pub trait IdentityProvider {
    fn current_user_id(&self) -> Result<u32>;
}

/// A fixed uid, used for overrides and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedIdentity(pub u32);

impl IdentityProvider for FixedIdentity {
    fn current_user_id(&self) -> Result<u32> {
        Ok(self.0)
    }
}

/// The real uid of the user running this process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessIdentity;

impl IdentityProvider for ProcessIdentity {
    #[cfg(unix)]
    fn current_user_id(&self) -> Result<u32> {
        Ok(nix::unistd::getuid().as_raw())
    }

    #[cfg(not(unix))]
    fn current_user_id(&self) -> Result<u32> {
        Err(Error::IdentityUnavailable(
            "no process uid on this platform, pass --uid".to_string(),
        ))
    }
}
