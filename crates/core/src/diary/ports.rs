//! Port interfaces for the remote diary API
//!
//! These traits define the boundaries between core business logic and the
//! HTTP implementation for match and training CRUD.

use async_trait::async_trait;
use playerlog_domain::{Match, Result, TrainingSession};

/// Trait for the backend's match endpoints
#[async_trait]
pub trait MatchesApi: Send + Sync {
    /// List the authenticated user's matches.
    async fn list(&self) -> Result<Vec<Match>>;

    /// Save a new match; the returned value carries the assigned id.
    async fn create(&self, game: &Match) -> Result<Match>;

    /// Update an existing match.
    async fn update(&self, id: &str, game: &Match) -> Result<Match>;

    /// Delete a match by id.
    async fn delete(&self, id: &str) -> Result<()>;
}

/// Trait for the backend's training-session endpoints
#[async_trait]
pub trait TrainingApi: Send + Sync {
    /// List the authenticated user's training sessions.
    async fn list(&self) -> Result<Vec<TrainingSession>>;

    /// Save a new training session; the returned value carries the assigned
    /// id.
    async fn create(&self, session: &TrainingSession) -> Result<TrainingSession>;

    /// Update an existing training session.
    async fn update(&self, id: &str, session: &TrainingSession) -> Result<TrainingSession>;

    /// Delete a training session by id.
    async fn delete(&self, id: &str) -> Result<()>;
}
