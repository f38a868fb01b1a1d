//! Tag-selection error types
//!
//! Toggling a tag for a resource type the state was not initialized with is a
//! caller bug. It is reported as [`TagError::InvalidResourceType`] and the
//! state is left as it was.

use crate::resource::ResourceType;
use thiserror::Error;

/// Tag-selection errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TagError {
    /// Resource type has no entry in the tag state
    #[error("Invalid resource type for tag selection: {0}")]
    InvalidResourceType(ResourceType),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
