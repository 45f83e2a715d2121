//! Bearer-token sourcing for API requests
//!
//! The backend authenticates with the JWT handed out at login. The token
//! lives in the session store; requests made before any login simply go out
//! without an Authorization header (the auth endpoints themselves work that
//! way).

use std::sync::Arc;

use playerlog_core::session::ports::SessionStore;
use playerlog_domain::Result;

/// Trait for providing the current access token, if any
///
/// This trait allows dependency injection and testing with mock providers.
pub trait AccessTokenProvider: Send + Sync {
    /// Get the current access token, or `None` when logged out.
    fn access_token(&self) -> Result<Option<String>>;
}

/// Token provider backed by the session store
pub struct SessionTokenProvider {
    session: Arc<dyn SessionStore>,
}

impl SessionTokenProvider {
    /// Create a provider reading from the given store.
    pub fn new(session: Arc<dyn SessionStore>) -> Self {
        Self { session }
    }
}

impl AccessTokenProvider for SessionTokenProvider {
    fn access_token(&self) -> Result<Option<String>> {
        self.session.token()
    }
}
