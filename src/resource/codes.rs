//! Type codes carried by raw search hits
//!
//! The search index stores the resource kind either as the canonical
//! identifier (`"Model"`) or as a legacy code from an older encoding, where
//! features were written as `"FEATURE"` and every other kind as a single
//! control character. Both spellings must resolve to the same
//! [`ResourceType`] before hits are compared.

use super::ResourceType;

/// Legacy code table
pub const LEGACY_TYPE_CODES: [(&str, ResourceType); 8] = [
    ("FEATURE", ResourceType::Feature),
    ("\u{05}", ResourceType::Label),
    ("\u{06}", ResourceType::TrainingSet),
    ("\u{07}", ResourceType::Source),
    ("\u{08}", ResourceType::Provider),
    ("\u{09}", ResourceType::Entity),
    ("\u{0a}", ResourceType::Model),
    ("\u{0b}", ResourceType::User),
];

/// Resolve a hit's type code to a resource type
///
/// Accepts canonical identifiers and entries of [`LEGACY_TYPE_CODES`].
/// Returns `None` for anything else; matching is exact.
#[must_use]
pub fn resolve_type_code(code: &str) -> Option<ResourceType> {
    ResourceType::from_canonical(code).or_else(|| {
        LEGACY_TYPE_CODES
            .iter()
            .find(|(legacy, _)| *legacy == code)
            .map(|(_, ty)| *ty)
    })
}

/// Printable form of a type code for logs and error messages
///
/// Control characters are shown as `\u{..}` escapes.
#[must_use]
pub fn display_code(code: &str) -> String {
    code.escape_default().to_string()
}
