//! Port interface for the remote authentication API

use async_trait::async_trait;
use playerlog_domain::{AuthResponse, Credentials, Result, User};

/// Trait for the backend's authentication endpoints
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Authenticate an existing account.
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse>;

    /// Create a new account.
    async fn register(&self, user: &User) -> Result<AuthResponse>;
}
