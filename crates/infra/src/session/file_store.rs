//! File-backed session store
//!
//! The session lives in a single JSON document on disk, surviving restarts
//! but not a reinstall. Both `save` and `clear` rewrite the whole document
//! through a temp-file rename, so each is one commit: a crash mid-write
//! leaves either the old session or the new one, never a mix.

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use playerlog_core::session::ports::SessionStore;
use playerlog_domain::{Error, Result, Session};
use tracing::{debug, info};

use crate::errors::InfraError;

/// Durable session store backed by a JSON document
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    state: RwLock<Session>,
}

impl FileSessionStore {
    /// Open the store, loading any previously persisted session.
    ///
    /// The parent directory is created if missing. A missing document is the
    /// unauthenticated state, not an error.
    ///
    /// # Errors
    ///
    /// Returns `Error::Session` when the document exists but cannot be read
    /// or parsed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(InfraError::from)?;
            }
        }

        let state = if path.exists() {
            let contents = fs::read_to_string(&path).map_err(InfraError::from)?;
            let session: Session = serde_json::from_str(&contents).map_err(InfraError::from)?;
            debug!(path = %path.display(), authenticated = session.is_authenticated(), "session loaded");
            session
        } else {
            Session::default()
        };

        Ok(Self { path, state: RwLock::new(state) })
    }

    // Whole-document commit: serialize, write a sibling temp file, rename
    // over the target. Rename within one directory is atomic on the
    // filesystems we care about.
    fn persist(&self, session: &Session) -> Result<()> {
        let contents = serde_json::to_vec_pretty(session).map_err(InfraError::from)?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, &contents).map_err(InfraError::from)?;
        fs::rename(&tmp_path, &self.path).map_err(|err| {
            Error::Session(format!(
                "failed to commit session document {}: {err}",
                self.path.display()
            ))
        })
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, session: Session) -> Result<()> {
        let mut state = self.state.write();
        self.persist(&session)?;
        *state = session;
        info!("session saved");
        Ok(())
    }

    fn token(&self) -> Result<Option<String>> {
        Ok(self.state.read().token.clone())
    }

    fn display_name(&self) -> Result<String> {
        Ok(self.state.read().display_name_or_default())
    }

    fn user_id(&self) -> Result<Option<String>> {
        Ok(self.state.read().user_id.clone())
    }

    fn email(&self) -> Result<String> {
        Ok(self.state.read().email_or_default())
    }

    fn clear(&self) -> Result<()> {
        let mut state = self.state.write();
        let cleared = Session::default();
        self.persist(&cleared)?;
        *state = cleared;
        info!("session cleared");
        Ok(())
    }
}
