//! Local profile commands
//!
//! Both commands go through `ProfileService`, which refuses to touch storage
//! without an authenticated user id; the UI shell surfaces that refusal by
//! closing the profile screen.

use std::time::Instant;

use playerlog_domain::{LocalProfile, ProfileDraft, Result};

use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// Save (insert or update) the current user's profile.
///
/// # Errors
///
/// Returns `Error::Auth` when no authenticated user id is available, and
/// `Error::Database` on storage failures.
pub async fn save_profile(ctx: &AppContext, draft: ProfileDraft) -> Result<()> {
    let start = Instant::now();
    let result = ctx.profile_service.save(draft).await;
    log_command_execution("profile::save_profile", start.elapsed(), result.is_ok());
    result
}

/// Load the current user's profile, or `None` when nothing was saved on this
/// device yet.
///
/// # Errors
///
/// Returns `Error::Auth` when no authenticated user id is available, and
/// `Error::Database` on storage failures.
pub async fn get_profile(ctx: &AppContext) -> Result<Option<LocalProfile>> {
    let start = Instant::now();
    let result = ctx.profile_service.load().await;
    log_command_execution("profile::get_profile", start.elapsed(), result.is_ok());
    result
}
