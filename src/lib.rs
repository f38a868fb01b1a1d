//! Catalog search - tag filters and deduplicated search results
//!
//! This library provides the client-side state and presentation logic behind
//! a resource catalog's search page: per-resource-type tag filters with toggle
//! semantics, deduplication of raw search hits, and selection handling that
//! records the active variant before requesting navigation.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
pub mod resource;
pub mod search;
pub mod session;
pub mod tags;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Resource-type name error
    #[error("Resource error: {0}")]
    ResourceError(#[from] resource::ResourceError),
    /// Tag selection error
    #[error("Tag error: {0}")]
    TagError(#[from] tags::TagError),
    /// Search presentation or selection error
    #[error("Search error: {0}")]
    SearchError(#[from] search::SearchError),
    /// Hits could not be loaded
    #[error("Input error: {0}")]
    InputError(#[from] search::InputError),
    /// Session state error
    #[error("Session error: {0}")]
    SessionError(#[from] session::SessionError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// JSON output error
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),
    /// Interactive prompt error
    #[error("Prompt error: {0}")]
    PromptError(#[from] dialoguer::Error),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
