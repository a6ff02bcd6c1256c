//! Profile persistence: a single JSON record with overwrite semantics.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::StorageError;
use crate::profile::UserProfile;

/// Storage key: file name of the persisted profile record.
const PROFILE_FILE: &str = "profile.json";

/// Read/write contract the engine needs from durable storage.
///
/// One record, overwrite-only; there is no partial-update API.
pub trait ProfileStore {
    /// The stored profile, or `None` when nothing has been saved yet.
    fn load(&self) -> Result<Option<UserProfile>, StorageError>;

    /// Overwrite the stored profile.
    fn save(&self, profile: &UserProfile) -> Result<(), StorageError>;
}

/// JSON-file store under the application data directory.
#[derive(Debug, Clone)]
pub struct JsonProfileStore {
    path: PathBuf,
}

impl JsonProfileStore {
    /// Store under the default data directory.
    pub fn open() -> Result<Self, StorageError> {
        let dir = super::data_dir().map_err(|e| StorageError::ReadFailed {
            path: PathBuf::from(PROFILE_FILE),
            source: e,
        })?;
        Ok(Self::at(dir.join(PROFILE_FILE)))
    }

    /// Store at an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the stored record entirely.
    ///
    /// Deletion sits outside the engine's load/save contract; only the
    /// CLI's reset command uses it.
    pub fn clear(&self) -> Result<(), StorageError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::WriteFailed {
                path: self.path.clone(),
                source: e,
            }),
        }
    }
}

impl ProfileStore for JsonProfileStore {
    fn load(&self) -> Result<Option<UserProfile>, StorageError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StorageError::ReadFailed {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        let profile: UserProfile =
            serde_json::from_str(&content).map_err(|e| StorageError::Malformed {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        profile.validate().map_err(|message| StorageError::Malformed {
            path: self.path.clone(),
            message,
        })?;

        debug!(path = %self.path.display(), "loaded profile");
        Ok(Some(profile))
    }

    fn save(&self, profile: &UserProfile) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(profile)?;
        std::fs::write(&self.path, content).map_err(|e| StorageError::WriteFailed {
            path: self.path.clone(),
            source: e,
        })
    }
}
