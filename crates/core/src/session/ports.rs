//! Port interface for session storage
//!
//! The session store holds the authenticated identity across restarts. All
//! operations are short blocking local-storage calls, so unlike the other
//! ports this trait is synchronous.

use playerlog_domain::{Result, Session};

/// Durable storage for the current session
///
/// Implementations must make `save` and `clear` single commits: a reader
/// never observes a partially written or partially cleared session.
pub trait SessionStore: Send + Sync {
    /// Persist the full session, overwriting any prior values.
    fn save(&self, session: Session) -> Result<()>;

    /// Bearer token, if a login is on file.
    fn token(&self) -> Result<Option<String>>;

    /// Display name, falling back to the fixed default when unset.
    fn display_name(&self) -> Result<String>;

    /// Remote user id, if a login is on file.
    fn user_id(&self) -> Result<Option<String>>;

    /// Account email, falling back to the empty string when unset.
    fn email(&self) -> Result<String>;

    /// Remove every session field in one commit.
    fn clear(&self) -> Result<()>;

    /// Whether a token is currently on file.
    fn is_authenticated(&self) -> Result<bool> {
        Ok(self.token()?.is_some())
    }
}
