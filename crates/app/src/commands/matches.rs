//! Match diary commands

use std::time::Instant;

use playerlog_domain::{Match, Result};

use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// List the authenticated user's matches.
///
/// # Errors
///
/// Propagates API errors (`Error::Auth` on a rejected token).
pub async fn list_matches(ctx: &AppContext) -> Result<Vec<Match>> {
    let start = Instant::now();
    let result = ctx.matches.list().await;
    log_command_execution("matches::list_matches", start.elapsed(), result.is_ok());
    result
}

/// Save a new match and return it with its assigned id.
///
/// # Errors
///
/// Propagates API errors.
pub async fn create_match(ctx: &AppContext, game: Match) -> Result<Match> {
    let start = Instant::now();
    let result = ctx.matches.create(&game).await;
    log_command_execution("matches::create_match", start.elapsed(), result.is_ok());
    result
}

/// Update an existing match.
///
/// # Errors
///
/// Propagates API errors (`Error::NotFound` when the id is gone).
pub async fn update_match(ctx: &AppContext, id: &str, game: Match) -> Result<Match> {
    let start = Instant::now();
    let result = ctx.matches.update(id, &game).await;
    log_command_execution("matches::update_match", start.elapsed(), result.is_ok());
    result
}

/// Delete a match by id.
///
/// # Errors
///
/// Propagates API errors.
pub async fn delete_match(ctx: &AppContext, id: &str) -> Result<()> {
    let start = Instant::now();
    let result = ctx.matches.delete(id).await;
    log_command_execution("matches::delete_match", start.elapsed(), result.is_ok());
    result
}
