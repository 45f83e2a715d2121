//! Authentication service - core business logic
//!
//! Owns the session lifecycle: a successful login writes the full session in
//! one commit, logout clears it in one commit.

use std::sync::Arc;

use playerlog_domain::{AuthResponse, Credentials, Error, Result, Session, User};
use tracing::info;

use crate::auth::ports::AuthApi;
use crate::session::ports::SessionStore;

/// Authentication service
pub struct AuthService {
    api: Arc<dyn AuthApi>,
    session: Arc<dyn SessionStore>,
}

impl AuthService {
    /// Create a new authentication service
    pub fn new(api: Arc<dyn AuthApi>, session: Arc<dyn SessionStore>) -> Self {
        Self { api, session }
    }

    /// Log in and persist the resulting session.
    ///
    /// The backend may omit the user id; the empty string is stored in that
    /// case and profile operations will refuse until a real id is present.
    ///
    /// # Errors
    ///
    /// Propagates API errors; the stored session is left untouched on
    /// failure.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse> {
        let response = self.api.login(credentials).await?;

        self.session.save(Session::new(
            response.token.clone(),
            response.user.name.clone(),
            response.user.id.clone().unwrap_or_default(),
            response.user.email.clone(),
        ))?;

        info!(user_id = ?response.user.id, "login succeeded, session saved");
        Ok(response)
    }

    /// Create a new account. Registration does not establish a session; the
    /// user logs in afterwards.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` when a required field is missing or the
    /// email is not plausibly shaped; propagates API errors otherwise.
    pub async fn register(&self, user: &User) -> Result<AuthResponse> {
        if user.name.trim().is_empty() {
            return Err(Error::InvalidInput("name must not be empty".into()));
        }
        if !is_plausible_email(&user.email) {
            return Err(Error::InvalidInput("email address is not valid".into()));
        }
        if user.password.as_deref().map_or(true, str::is_empty) {
            return Err(Error::InvalidInput("password must not be empty".into()));
        }

        self.api.register(user).await
    }

    /// Clear the persisted session.
    pub fn logout(&self) -> Result<()> {
        self.session.clear()?;
        info!("session cleared");
        Ok(())
    }

    /// Whether a token is currently on file.
    pub fn is_authenticated(&self) -> Result<bool> {
        self.session.is_authenticated()
    }
}

// Deliberately loose: the backend performs the real validation, this only
// catches obvious typos before a round trip.
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}
