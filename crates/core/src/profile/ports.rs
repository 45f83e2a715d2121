//! Port interface for local profile persistence
//!
//! This trait defines the boundary between core business logic and the
//! on-device storage implementation for profile rows.

use async_trait::async_trait;
use playerlog_domain::{LocalProfile, Result};

/// Trait for local profile persistence and retrieval
///
/// At most one row exists per `user_id`; `upsert` must keep that invariant
/// even when invoked concurrently for the same key.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Insert the profile, or update the existing row with the same
    /// `user_id`. The second write's field values win.
    async fn upsert(&self, profile: LocalProfile) -> Result<()>;

    /// Get the profile for a remote user id, or `None` when no row exists.
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<LocalProfile>>;
}
