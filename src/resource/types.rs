//! The closed set of catalog resource kinds
//!
//! Every tag filter, search entry and navigation target is keyed by a
//! [`ResourceType`]. The enumeration is fixed; anything that cannot be mapped
//! onto it is rejected at the edge (user input, search hits, config keys).

use super::error::ResourceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of catalog entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResourceType {
    Feature,
    Label,
    TrainingSet,
    Source,
    Provider,
    Entity,
    Model,
    User,
}

impl ResourceType {
    /// All resource types in registry order
    pub const ALL: [Self; 8] = [
        Self::Feature,
        Self::Label,
        Self::TrainingSet,
        Self::Source,
        Self::Provider,
        Self::Entity,
        Self::Model,
        Self::User,
    ];

    /// Canonical identifier, as sent by the search backend
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Feature => "Feature",
            Self::Label => "Label",
            Self::TrainingSet => "TrainingSet",
            Self::Source => "Source",
            Self::Provider => "Provider",
            Self::Entity => "Entity",
            Self::Model => "Model",
            Self::User => "User",
        }
    }

    /// Look up a type by its exact canonical identifier
    #[must_use]
    pub fn from_canonical(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.as_str() == id)
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = ResourceError;

    /// Lenient parse for user input: case, spaces, `-` and `_` are ignored,
    /// so `training-set`, `TRAINING SET` and `trainingset` all name
    /// [`ResourceType::TrainingSet`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squashed: String = s
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect();
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(&squashed))
            .ok_or_else(|| ResourceError::UnknownTypeName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_round_trip() {
        for ty in ResourceType::ALL {
            assert_eq!(ResourceType::from_canonical(ty.as_str()), Some(ty));
        }
    }

    #[test]
    fn test_from_canonical_is_exact() {
        assert_eq!(ResourceType::from_canonical("model"), None);
        assert_eq!(ResourceType::from_canonical("FEATURE"), None);
    }

    #[test]
    fn test_parse_user_spellings() {
        assert_eq!("training-set".parse::<ResourceType>().unwrap(), ResourceType::TrainingSet);
        assert_eq!("training_set".parse::<ResourceType>().unwrap(), ResourceType::TrainingSet);
        assert_eq!("TrainingSet".parse::<ResourceType>().unwrap(), ResourceType::TrainingSet);
        assert_eq!(" model ".parse::<ResourceType>().unwrap(), ResourceType::Model);
        assert_eq!("USER".parse::<ResourceType>().unwrap(), ResourceType::User);
        assert_eq!("trainingset".parse::<ResourceType>().unwrap(), ResourceType::TrainingSet);
    }

    #[test]
    fn test_parse_unknown_name() {
        assert!("".parse::<ResourceType>().is_err());
        let err = "dataset".parse::<ResourceType>().unwrap_err();
        assert!(err.to_string().contains("dataset"));
    }

    #[test]
    fn test_display_matches_canonical() {
        assert_eq!(ResourceType::TrainingSet.to_string(), "TrainingSet");
    }
}
