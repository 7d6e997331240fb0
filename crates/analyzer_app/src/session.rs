//! Local profile storage backing the login stub.
//!
//! The profile is a convenience record, not an authentication boundary:
//! nothing verifies the password and nothing should rely on it doing so.

use std::fs;
use std::io;
use std::path::PathBuf;

use analyzer_engine::{write_atomic, PersistError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const PROFILE_FILENAME: &str = "profile.ron";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("email and password are both required")]
    MissingField,
    #[error("could not encode profile: {0}")]
    Encode(String),
    #[error("stored profile is unreadable: {0}")]
    Decode(String),
    #[error(transparent)]
    Store(#[from] PersistError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    /// Store rooted in the per-user data directory, falling back to the
    /// working directory when the platform offers none.
    pub fn open_default() -> Self {
        let dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("accessibility-analyzer");
        Self::at(dir)
    }

    pub fn at(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Records a profile for the given credentials. The password is only
    /// checked for presence, never verified against anything.
    pub fn login(
        &self,
        name: Option<&str>,
        email: &str,
        password: &str,
    ) -> Result<UserProfile, SessionError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(SessionError::MissingField);
        }

        let name = match name.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            // Use the part of the email before the @ as the display name.
            _ => email.split('@').next().unwrap_or(email).to_string(),
        };

        let profile = UserProfile {
            name,
            email: email.to_string(),
        };
        self.save(&profile)?;
        Ok(profile)
    }

    pub fn save(&self, profile: &UserProfile) -> Result<(), SessionError> {
        let pretty = ron::ser::PrettyConfig::new();
        let content = ron::ser::to_string_pretty(profile, pretty)
            .map_err(|err| SessionError::Encode(err.to_string()))?;
        write_atomic(&self.dir, PROFILE_FILENAME, &content)?;
        Ok(())
    }

    pub fn load(&self) -> Result<Option<UserProfile>, SessionError> {
        let path = self.profile_path();
        let content = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let profile =
            ron::from_str(&content).map_err(|err| SessionError::Decode(err.to_string()))?;
        Ok(Some(profile))
    }

    /// Removes the stored profile. Returns whether one existed.
    pub fn clear(&self) -> Result<bool, SessionError> {
        match fs::remove_file(self.profile_path()) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    fn profile_path(&self) -> PathBuf {
        self.dir.join(PROFILE_FILENAME)
    }
}
