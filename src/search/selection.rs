//! Acting on a selected result
//!
//! Selecting an entry resolves its resource type to a registry descriptor,
//! records the entry's variant for variant-bearing types, then requests
//! navigation to the resource's detail view. The variant is recorded first
//! so the detail view finds it already active. A type with no descriptor
//! aborts the selection before either side effect.

use super::error::SearchError;
use super::presenter::{ResultEntry, ResultPresenter};
use super::traits::{Navigator, VariantSelection};
use crate::resource::TypeRegistry;
use serde::Serialize;

/// Outcome of a successful selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    /// Path passed to the navigator
    pub path: String,
    /// Whether the entry's variant was recorded as active
    pub variant_recorded: bool,
}

impl<R: TypeRegistry + ?Sized> ResultPresenter<'_, R> {
    /// Resolve `entry` and navigate to it
    ///
    /// Calls `variants.set_variant` at most once and always before
    /// `navigator.navigate`, which is called exactly once on success.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::UnknownResourceType` if the registry has no
    /// descriptor for the entry's type. Neither collaborator is called.
    pub fn select<V, N>(&self, entry: &ResultEntry, variants: &mut V, navigator: &mut N) -> Result<Selection, SearchError>
    where
        V: VariantSelection + ?Sized,
        N: Navigator + ?Sized,
    {
        let Some(descriptor) = self.registry.descriptor(entry.resource_type) else {
            tracing::error!(
                resource_type = %entry.resource_type,
                name = %entry.name,
                "selected result has no registry entry"
            );
            return Err(SearchError::UnknownResourceType(entry.resource_type));
        };

        let path = descriptor.url_path_resource(&entry.name);

        if descriptor.has_variants {
            variants.set_variant(entry.resource_type, &entry.name, &entry.variant);
        }

        tracing::info!(%path, variant = %entry.variant, "navigating to search result");
        navigator.navigate(&path);

        Ok(Selection {
            path,
            variant_recorded: descriptor.has_variants,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{Registry, ResourceType};
    use crate::search::mock::{Call, CallLog};
    use crate::search::variants::VariantSelectionStore;

    #[test]
    fn test_variant_recorded_before_navigation() {
        let registry = Registry::builtin();
        let presenter = ResultPresenter::new(&registry);
        let log = CallLog::new();
        let entry = ResultEntry::new("age", "v2", ResourceType::Feature);

        let selection = presenter
            .select(&entry, &mut log.variants(), &mut log.navigator())
            .unwrap();

        assert_eq!(selection.path, "/features/age");
        assert!(selection.variant_recorded);
        assert_eq!(
            log.calls(),
            vec![
                Call::SetVariant {
                    resource_type: ResourceType::Feature,
                    name: "age".to_string(),
                    variant: "v2".to_string(),
                },
                Call::Navigate("/features/age".to_string()),
            ]
        );
    }

    #[test]
    fn test_variantless_type_only_navigates() {
        let registry = Registry::builtin();
        let presenter = ResultPresenter::new(&registry);
        let log = CallLog::new();
        let entry = ResultEntry::new("churn", "", ResourceType::Model);

        let selection = presenter
            .select(&entry, &mut log.variants(), &mut log.navigator())
            .unwrap();

        assert!(!selection.variant_recorded);
        assert_eq!(log.calls(), vec![Call::Navigate("/models/churn".to_string())]);
    }

    #[test]
    fn test_missing_descriptor_has_no_side_effects() {
        let mut registry = Registry::builtin();
        registry.remove(ResourceType::Feature);
        let presenter = ResultPresenter::new(&registry);
        let log = CallLog::new();
        let entry = ResultEntry::new("age", "v1", ResourceType::Feature);

        let err = presenter
            .select(&entry, &mut log.variants(), &mut log.navigator())
            .unwrap_err();

        assert_eq!(err, SearchError::UnknownResourceType(ResourceType::Feature));
        assert!(log.calls().is_empty());
    }

    #[test]
    fn test_select_with_real_collaborators() {
        let registry = Registry::builtin();
        let presenter = ResultPresenter::new(&registry);
        let mut variants = VariantSelectionStore::new();
        let mut paths: Vec<String> = Vec::new();

        let entry = ResultEntry::new("fraud", "2024-01", ResourceType::TrainingSet);
        presenter.select(&entry, &mut variants, &mut paths).unwrap();

        assert_eq!(variants.get(ResourceType::TrainingSet, "fraud"), Some("2024-01"));
        assert_eq!(paths, vec!["/training-sets/fraud".to_string()]);
    }

    #[test]
    fn test_select_through_trait_objects() {
        let registry = Registry::builtin();
        let presenter = ResultPresenter::new(&registry);
        let mut store = VariantSelectionStore::new();
        let mut paths: Vec<String> = Vec::new();
        let variants: &mut dyn VariantSelection = &mut store;
        let navigator: &mut dyn Navigator = &mut paths;

        let entry = ResultEntry::new("orders", "v3", ResourceType::Source);
        presenter.select(&entry, variants, navigator).unwrap();

        assert_eq!(store.get(ResourceType::Source, "orders"), Some("v3"));
        assert_eq!(paths.len(), 1);
    }
}
