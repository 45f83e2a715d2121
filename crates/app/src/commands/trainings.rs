//! Training diary commands

use std::time::Instant;

use playerlog_domain::{Result, TrainingSession};

use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// List the authenticated user's training sessions.
///
/// # Errors
///
/// Propagates API errors (`Error::Auth` on a rejected token).
pub async fn list_trainings(ctx: &AppContext) -> Result<Vec<TrainingSession>> {
    let start = Instant::now();
    let result = ctx.trainings.list().await;
    log_command_execution("trainings::list_trainings", start.elapsed(), result.is_ok());
    result
}

/// Save a new training session and return it with its assigned id.
///
/// # Errors
///
/// Propagates API errors.
pub async fn create_training(ctx: &AppContext, session: TrainingSession) -> Result<TrainingSession> {
    let start = Instant::now();
    let result = ctx.trainings.create(&session).await;
    log_command_execution("trainings::create_training", start.elapsed(), result.is_ok());
    result
}

/// Update an existing training session.
///
/// # Errors
///
/// Propagates API errors (`Error::NotFound` when the id is gone).
pub async fn update_training(
    ctx: &AppContext,
    id: &str,
    session: TrainingSession,
) -> Result<TrainingSession> {
    let start = Instant::now();
    let result = ctx.trainings.update(id, &session).await;
    log_command_execution("trainings::update_training", start.elapsed(), result.is_ok());
    result
}

/// Delete a training session by id.
///
/// # Errors
///
/// Propagates API errors.
pub async fn delete_training(ctx: &AppContext, id: &str) -> Result<()> {
    let start = Instant::now();
    let result = ctx.trainings.delete(id).await;
    log_command_execution("trainings::delete_training", start.elapsed(), result.is_ok());
    result
}
