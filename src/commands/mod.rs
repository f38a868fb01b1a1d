//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and a [`Context`] holding the resolved configuration.

pub mod search;
pub mod tags;
pub mod types;
pub mod variants;

pub use search::execute as search;
pub use tags::execute as tags;
pub use types::execute as types;
pub use variants::execute as variants;

use crate::config::OutputFormat;
use crate::resource::{Registry, TypeRegistry};
use crate::session::{Session, SessionError};
use std::path::PathBuf;

/// Settings shared by every command, after CLI flags override config
#[derive(Debug, Clone)]
pub struct Context {
    pub registry: Registry,
    pub state_path: PathBuf,
    pub format: OutputFormat,
    pub quiet: bool,
}

impl Context {
    /// Load the session with tag filters for exactly the registry's types
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if an existing state file cannot be read.
    pub fn load_session(&self) -> Result<Session, SessionError> {
        Session::load_or_new(&self.state_path, self.registry.resource_types())
    }

    /// Persist the session
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the state file cannot be written.
    pub fn save_session(&self, session: &Session) -> Result<(), SessionError> {
        session.save(&self.state_path)
    }

    #[must_use]
    pub const fn json(&self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }
}
