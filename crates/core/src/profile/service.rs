//! Profile service - core business logic
//!
//! Gates every profile operation on an authenticated user id so that one
//! account never reads or writes another account's rows on a shared device.

use std::sync::Arc;

use playerlog_domain::{Error, LocalProfile, ProfileDraft, Result};
use tracing::debug;

use crate::profile::ports::ProfileRepository;
use crate::session::ports::SessionStore;

/// Profile service
pub struct ProfileService {
    session: Arc<dyn SessionStore>,
    repository: Arc<dyn ProfileRepository>,
}

impl ProfileService {
    /// Create a new profile service
    pub fn new(session: Arc<dyn SessionStore>, repository: Arc<dyn ProfileRepository>) -> Self {
        Self { session, repository }
    }

    /// Persist the draft for the currently authenticated user.
    ///
    /// # Errors
    ///
    /// Returns `Error::Auth` when no usable user id is in the session; the
    /// operation is refused before touching storage.
    pub async fn save(&self, draft: ProfileDraft) -> Result<()> {
        let user_id = self.authenticated_user_id()?;
        debug!(user_id = %user_id, "saving local profile");
        self.repository.upsert(draft.into_profile(user_id)).await
    }

    /// Load the profile of the currently authenticated user, if one was ever
    /// saved on this device.
    ///
    /// # Errors
    ///
    /// Returns `Error::Auth` when no usable user id is in the session.
    pub async fn load(&self) -> Result<Option<LocalProfile>> {
        let user_id = self.authenticated_user_id()?;
        self.repository.find_by_user_id(&user_id).await
    }

    // An absent id and an empty id are treated identically: the backend omits
    // `_id` in some responses and the original client stored "" in that case.
    fn authenticated_user_id(&self) -> Result<String> {
        self.session
            .user_id()?
            .filter(|id| !id.is_empty())
            .ok_or_else(|| Error::Auth("no authenticated user id in session".into()))
    }
}
