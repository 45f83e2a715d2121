//! Authentication commands
//!
//! Login establishes the session the rest of the app reads; logout tears it
//! down. The UI shell decides navigation from `is_authenticated`.

use std::time::Instant;

use playerlog_domain::{AuthResponse, Credentials, Result, User};
use tracing::info;

use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// Authenticate against the backend and persist the session.
///
/// # Errors
///
/// Propagates `Error::Auth` on rejected credentials and network errors
/// otherwise; the stored session is untouched on failure.
pub async fn login(ctx: &AppContext, credentials: Credentials) -> Result<AuthResponse> {
    let start = Instant::now();
    let result = ctx.auth_service.login(&credentials).await;
    log_command_execution("auth::login", start.elapsed(), result.is_ok());
    result
}

/// Create a new account. The user logs in afterwards.
///
/// # Errors
///
/// Returns `Error::InvalidInput` for malformed registration data before any
/// network round trip.
pub async fn register(ctx: &AppContext, user: User) -> Result<AuthResponse> {
    let start = Instant::now();
    let result = ctx.auth_service.register(&user).await;
    log_command_execution("auth::register", start.elapsed(), result.is_ok());
    result
}

/// Clear the persisted session.
///
/// # Errors
///
/// Returns `Error::Session` when the session document cannot be rewritten.
pub fn logout(ctx: &AppContext) -> Result<()> {
    let start = Instant::now();
    let result = ctx.auth_service.logout();
    log_command_execution("auth::logout", start.elapsed(), result.is_ok());
    if result.is_ok() {
        info!("user logged out");
    }
    result
}

/// Whether a login is currently on file.
///
/// # Errors
///
/// Propagates session storage failures.
pub fn is_authenticated(ctx: &AppContext) -> Result<bool> {
    ctx.auth_service.is_authenticated()
}
