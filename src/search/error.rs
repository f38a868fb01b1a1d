//! Search-result error types
//!
//! This module defines the errors raised while turning raw search hits into
//! presentable entries and while acting on a selected entry.
//!
//! # Error Types
//!
//! - **`UnresolvableTypeCode`**: A hit's type code is neither a canonical
//!   resource type nor a known legacy code. The hit is left out of the
//!   rendered list and reported next to it.
//! - **`UnknownResourceType`**: A selected entry's type has no registry
//!   descriptor. The selection is aborted before any side effect.
//!
//! Reading hits from disk has its own [`InputError`].

use crate::resource::codes::display_code;
use crate::resource::ResourceType;
use std::io;
use thiserror::Error;

/// Errors raised by the result presenter
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    /// Hit carries a type code with no mapping
    #[error("Unresolvable type code '{}' for hit {name} ({variant})", display_code(.code))]
    UnresolvableTypeCode {
        name: String,
        variant: String,
        code: String,
    },

    /// Resource type has no descriptor in the registry
    #[error("Unknown resource type: no registry entry for {0}")]
    UnknownResourceType(ResourceType),
}

/// Errors raised while loading raw hits
#[derive(Debug, Error)]
pub enum InputError {
    /// Hits file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON input is malformed
    #[error("Invalid JSON hits: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV input is malformed
    #[error("Invalid CSV hits: {0}")]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
