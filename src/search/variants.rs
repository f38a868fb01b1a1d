//! Active-variant bookkeeping
//!
//! Detail views read the active variant of a resource from here. The result
//! presenter writes to it through [`VariantSelection`] before navigating.

use super::traits::VariantSelection;
use crate::resource::ResourceType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Active variant per (resource type, resource name)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantSelectionStore {
    by_type: BTreeMap<ResourceType, BTreeMap<String, String>>,
}

impl VariantSelectionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Active variant of a resource, if one was recorded
    #[must_use]
    pub fn get(&self, resource_type: ResourceType, name: &str) -> Option<&str> {
        self.by_type
            .get(&resource_type)
            .and_then(|names| names.get(name))
            .map(String::as_str)
    }

    /// All recorded selections as `(type, name, variant)`
    pub fn iter(&self) -> impl Iterator<Item = (ResourceType, &str, &str)> {
        self.by_type.iter().flat_map(|(ty, names)| {
            names
                .iter()
                .map(move |(name, variant)| (*ty, name.as_str(), variant.as_str()))
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_type.values().map(BTreeMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl VariantSelection for VariantSelectionStore {
    fn set_variant(&mut self, resource_type: ResourceType, name: &str, variant: &str) {
        self.by_type
            .entry(resource_type)
            .or_default()
            .insert(name.to_string(), variant.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut store = VariantSelectionStore::new();
        assert!(store.is_empty());

        store.set_variant(ResourceType::Feature, "age", "v1");
        store.set_variant(ResourceType::Feature, "age", "v2");
        store.set_variant(ResourceType::Label, "age", "v1");

        assert_eq!(store.get(ResourceType::Feature, "age"), Some("v2"));
        assert_eq!(store.get(ResourceType::Label, "age"), Some("v1"));
        assert_eq!(store.get(ResourceType::Source, "age"), None);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_iter_order() {
        let mut store = VariantSelectionStore::new();
        store.set_variant(ResourceType::Source, "b", "x");
        store.set_variant(ResourceType::Feature, "z", "y");
        store.set_variant(ResourceType::Feature, "a", "w");

        let all: Vec<_> = store.iter().collect();
        assert_eq!(
            all,
            vec![
                (ResourceType::Feature, "a", "w"),
                (ResourceType::Feature, "z", "y"),
                (ResourceType::Source, "b", "x"),
            ]
        );
    }
}
