//! Per-resource-type tag filters
//!
//! Filter UI toggles tags on and off for each resource type. The selection is
//! an immutable [`TagState`]; [`TagStore`] owns the current state for a
//! session and keeps the action log used for undo and replay.

pub mod error;
pub mod state;
pub mod store;

pub use error::TagError;
pub use state::TagState;
pub use store::{HISTORY_LIMIT, TagAction, TagStore, replay};
