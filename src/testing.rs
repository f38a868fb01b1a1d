//! Testing utilities for catalog-search
//!
//! Provides a [`TestWorkspace`] that owns a temporary directory for session
//! state and hits files, and builds command [`Context`]s pointing into it.
//!
//! Only available when compiled with `cfg(test)`.

use crate::commands::Context;
use crate::config::OutputFormat;
use crate::resource::Registry;
use crate::search::SearchHit;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary directory holding a session file and hit fixtures
///
/// Everything is removed when the workspace is dropped.
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    /// Create an empty workspace
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Directory backing this workspace
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Location of the session state file
    #[must_use]
    pub fn state_path(&self) -> PathBuf {
        self.dir.path().join("session.json")
    }

    /// Write `hits` as a JSON hits file and return its path
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    #[must_use]
    pub fn write_hits(&self, name: &str, hits: &[SearchHit]) -> PathBuf {
        let path = self.dir.path().join(name);
        let json = serde_json::to_string(hits).expect("Failed to serialize hits");
        fs::write(&path, json).expect("Failed to write hits file");
        path
    }

    /// Quiet text-mode context using `registry`
    #[must_use]
    pub fn context(&self, registry: Registry) -> Context {
        Context {
            registry,
            state_path: self.state_path(),
            format: OutputFormat::Text,
            quiet: true,
        }
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Hits with duplicates, a legacy-coded twin and one unresolvable code
#[must_use]
pub fn sample_hits() -> Vec<SearchHit> {
    vec![
        SearchHit::new("age", "v1", "FEATURE").with_tags(["pii"]),
        SearchHit::new("age", "v1", "Feature").with_tags(["pii"]),
        SearchHit::new("age", "v2", "FEATURE"),
        SearchHit::new("churn", "", "\u{0a}"),
        SearchHit::new("churn", "", "Model"),
        SearchHit::new("fraud", "2024-01", "\u{06}"),
        SearchHit::new("broken", "v1", "\u{0e}"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_paths() {
        let workspace = TestWorkspace::new();
        assert!(workspace.path().exists());
        assert!(workspace.state_path().starts_with(workspace.path()));
    }

    #[test]
    fn test_write_hits_round_trip() {
        let workspace = TestWorkspace::new();
        let path = workspace.write_hits("hits.json", &sample_hits());
        let loaded = crate::search::load_hits(&path, None).unwrap();
        assert_eq!(loaded, sample_hits());
    }
}
