//! Session persistence
//!
//! The active session is a small JSON file holding the signed-in user,
//! restored on startup and removed on logout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{FintrackError, FintrackResult};
use crate::models::User;

/// The active session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// The signed-in user
    pub user: User,

    /// When the session was issued
    pub issued_at: DateTime<Utc>,
}

impl Session {
    /// Create a session for a user
    pub fn new(user: User) -> Self {
        Self {
            user,
            issued_at: Utc::now(),
        }
    }
}

/// Reads and writes the session file
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a session store at `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the active session, if any
    pub fn load(&self) -> FintrackResult<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.path)
            .map_err(|e| FintrackError::Io(format!("Failed to read session file: {}", e)))?;

        let session: Session = serde_json::from_str(&contents)
            .map_err(|e| FintrackError::Auth(format!("Failed to parse session file: {}", e)))?;

        Ok(Some(session))
    }

    /// Persist a session
    pub fn save(&self, session: &Session) -> FintrackResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| FintrackError::Io(format!("Failed to create directory: {}", e)))?;
        }

        let contents = serde_json::to_string_pretty(session)
            .map_err(|e| FintrackError::Auth(format!("Failed to serialize session: {}", e)))?;

        std::fs::write(&self.path, contents)
            .map_err(|e| FintrackError::Io(format!("Failed to write session file: {}", e)))?;

        Ok(())
    }

    /// Remove the session file if present
    pub fn clear(&self) -> FintrackResult<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)
                .map_err(|e| FintrackError::Io(format!("Failed to remove session file: {}", e)))?;
        }
        Ok(())
    }
}
