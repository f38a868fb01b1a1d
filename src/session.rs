//! Session state shared between CLI invocations
//!
//! A dashboard keeps tag filters and variant selections in memory for as long
//! as it runs. The CLI emulates that session by persisting both to a JSON file
//! between commands. A missing file is a fresh session.

use crate::resource::ResourceType;
use crate::search::VariantSelectionStore;
use crate::tags::TagStore;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Session persistence errors
#[derive(Debug, Error)]
pub enum SessionError {
    /// State file could not be read or written
    #[error("Session I/O error: {0}")]
    Io(#[from] io::Error),

    /// State file is not valid session JSON
    #[error("Corrupt session state: {0}")]
    Json(#[from] serde_json::Error),
}

/// Tag filters and active variants for one user session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub tags: TagStore,
    #[serde(default)]
    pub variants: VariantSelectionStore,
}

impl Session {
    /// Fresh session tracking tags for the given resource types
    #[must_use]
    pub fn new<I>(resource_types: I) -> Self
    where
        I: IntoIterator<Item = ResourceType>,
    {
        Self {
            tags: TagStore::new(resource_types),
            variants: VariantSelectionStore::new(),
        }
    }

    /// Load the session stored at `path`, or start a new one if there is none
    ///
    /// A stored session is brought in line with `resource_types`, so types
    /// enabled or disabled since it was saved are tracked or dropped.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the file exists but cannot be read or parsed.
    pub fn load_or_new<I>(path: &Path, resource_types: I) -> Result<Self, SessionError>
    where
        I: IntoIterator<Item = ResourceType>,
    {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let mut session: Self = serde_json::from_str(&contents)?;
                session.tags.reconcile(resource_types);
                tracing::debug!(path = %path.display(), "loaded session state");
                Ok(session)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no session state, starting fresh");
                Ok(Self::new(resource_types))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Write the session to `path`, creating parent directories as needed
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the directory or file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), SessionError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::VariantSelection;

    #[test]
    fn test_missing_file_starts_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let session = Session::load_or_new(&path, ResourceType::ALL).unwrap();
        assert!(session.tags.state().is_clear());
        assert!(session.variants.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let mut session = Session::new(ResourceType::ALL);
        session.tags.toggle(ResourceType::Feature, "pii").unwrap();
        session.variants.set_variant(ResourceType::Feature, "age", "v2");
        session.save(&path).unwrap();

        let loaded = Session::load_or_new(&path, ResourceType::ALL).unwrap();
        assert_eq!(loaded, session);
        assert_eq!(loaded.tags.history().len(), 1);
    }

    #[test]
    fn test_load_tracks_current_types() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut session = Session::new([ResourceType::Feature, ResourceType::User]);
        session.tags.toggle(ResourceType::Feature, "pii").unwrap();
        session.save(&path).unwrap();

        let loaded = Session::load_or_new(&path, [ResourceType::Feature, ResourceType::Model]).unwrap();
        let state = loaded.tags.state();
        assert!(state.contains(ResourceType::Feature, "pii"));
        assert!(state.tracks(ResourceType::Model));
        assert!(!state.tracks(ResourceType::User));
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();

        let result = Session::load_or_new(&path, ResourceType::ALL);
        assert!(matches!(result, Err(SessionError::Json(_))));
    }
}
