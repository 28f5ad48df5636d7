//! Durable session storage.
//!
//! The authentication state is the only durable state in the application.
//! It is serialized as JSON under a single fixed key,
//! `~/.libris/session.json`, and rehydrated on startup so a session
//! survives process restarts until an explicit logout.

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use crate::models::SessionUser;

/// The storage directory name under the home directory.
const STORAGE_DIR: &str = ".libris";

/// The session file name.
const SESSION_FILE: &str = "session.json";

/// Serialized form of the authentication store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PersistedSession {
    pub user: Option<SessionUser>,
    pub token: Option<String>,
    pub is_authenticated: bool,
}

/// Manages loading and saving the persisted session.
#[derive(Debug)]
pub struct SessionStorage {
    /// Path to the session file.
    session_path: PathBuf,
}

impl SessionStorage {
    /// Create a storage handle under the home directory.
    ///
    /// Returns `None` if the home directory cannot be determined.
    pub fn new() -> Option<Self> {
        let home = dirs::home_dir()?;
        let session_path = home.join(STORAGE_DIR).join(SESSION_FILE);
        Some(Self { session_path })
    }

    /// Create a storage handle at an explicit path; used by tests.
    pub fn with_path(session_path: PathBuf) -> Self {
        Self { session_path }
    }

    /// Get the path to the session file.
    pub fn session_path(&self) -> &PathBuf {
        &self.session_path
    }

    /// Load the persisted session.
    ///
    /// Returns the signed-out default if the file doesn't exist or can't be
    /// read.
    pub fn load(&self) -> PersistedSession {
        if !self.session_path.exists() {
            return PersistedSession::default();
        }

        let file = match File::open(&self.session_path) {
            Ok(f) => f,
            Err(_) => return PersistedSession::default(),
        };

        let reader = BufReader::new(file);
        match serde_json::from_reader(reader) {
            Ok(session) => session,
            Err(_) => PersistedSession::default(),
        }
    }

    /// Save the session to the session file.
    ///
    /// Creates the parent directory if it doesn't exist.
    /// Returns `true` if successful, `false` otherwise.
    pub fn save(&self, session: &PersistedSession) -> bool {
        if let Some(parent) = self.session_path.parent() {
            if !parent.exists() && fs::create_dir_all(parent).is_err() {
                return false;
            }
        }

        let file = match File::create(&self.session_path) {
            Ok(f) => f,
            Err(_) => return false,
        };

        let mut writer = BufWriter::new(file);
        if serde_json::to_writer_pretty(&mut writer, session).is_err() {
            return false;
        }

        writer.flush().is_ok()
    }

    /// Remove the durable record.
    ///
    /// Returns `true` if successful or the file didn't exist.
    pub fn clear(&self) -> bool {
        if !self.session_path.exists() {
            return true;
        }

        fs::remove_file(&self.session_path).is_ok()
    }
}
