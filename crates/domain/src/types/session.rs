//! Session types
//!
//! Durable record of the currently authenticated identity. All four fields
//! are written together on login and removed together on logout; there is no
//! partially-cleared state.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_DISPLAY_NAME;

/// Snapshot of the authenticated user's identity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token issued by the backend; present iff logged in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Display name from the auth response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Remote user id; links local profile rows to the backend account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Account email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Session {
    /// Build a fully-populated session, as saved after a successful login.
    #[must_use]
    pub fn new(
        token: impl Into<String>,
        display_name: impl Into<String>,
        user_id: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            token: Some(token.into()),
            display_name: Some(display_name.into()),
            user_id: Some(user_id.into()),
            email: Some(email.into()),
        }
    }

    /// A token on file is what makes the user authenticated.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Display name, falling back to the fixed default when unset.
    #[must_use]
    pub fn display_name_or_default(&self) -> String {
        self.display_name.clone().unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string())
    }

    /// Email, falling back to the empty string when unset.
    #[must_use]
    pub fn email_or_default(&self) -> String {
        self.email.clone().unwrap_or_default()
    }
}
