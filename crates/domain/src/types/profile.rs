//! Local profile types
//!
//! Device-resident personal data keyed by the remote user id. Never synced to
//! the backend; rows outlive logins so a returning user finds their data.

use serde::{Deserialize, Serialize};

/// One stored profile row
///
/// `id` is the SQLite rowid and carries no business meaning; `user_id` is the
/// natural key and is unique across rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalProfile {
    pub id: i64,
    pub user_id: String,
    pub name: String,
    /// Free-text date; the UI owns the format
    pub birth_date: String,
    pub phone: String,
    pub address: String,
    /// Opaque locator for the profile photo (e.g. a content URI)
    pub photo: String,
}

/// Profile attributes as entered on the profile screen, before the
/// authenticated user id is attached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub name: String,
    pub birth_date: String,
    pub phone: String,
    pub address: String,
    pub photo: String,
}

impl ProfileDraft {
    /// Attach the owning user id, producing a row ready to persist.
    ///
    /// The local id is left at zero; storage assigns the real one.
    #[must_use]
    pub fn into_profile(self, user_id: impl Into<String>) -> LocalProfile {
        LocalProfile {
            id: 0,
            user_id: user_id.into(),
            name: self.name,
            birth_date: self.birth_date,
            phone: self.phone,
            address: self.address,
            photo: self.photo,
        }
    }
}
