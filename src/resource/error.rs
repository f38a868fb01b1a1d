//! Resource-type error types

use thiserror::Error;

/// Errors raised while interpreting resource-type names
#[derive(Debug, Error)]
pub enum ResourceError {
    /// Name does not match any known resource type
    #[error("Unknown resource type '{0}'")]
    UnknownTypeName(String),
}
