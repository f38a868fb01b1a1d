//! Resource-type registry
//!
//! Maps each [`ResourceType`] to the descriptor the dashboard needs for
//! navigation: whether the kind has variants, and where its detail view lives.
//!
//! The built-in table is an exhaustive `match` over the enumeration. A
//! [`Registry`] starts from that table and can be adjusted from configuration,
//! including removing a type entirely; lookups for a removed type return
//! `None`, which the presenter reports as an unknown resource type.

use super::error::ResourceError;
use super::ResourceType;
use heck::ToTitleCase;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Navigation-relevant metadata for one resource type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceDescriptor {
    pub resource_type: ResourceType,
    /// Human readable name ("Training Set")
    pub display_name: String,
    /// Path segment of the type's listing page ("training-sets")
    pub url_path: String,
    /// Whether resources of this type exist in several variants
    pub has_variants: bool,
    /// Material icon name shown next to results
    pub icon: String,
}

impl ResourceDescriptor {
    /// Built-in descriptor for a resource type
    #[must_use]
    pub fn builtin(resource_type: ResourceType) -> Self {
        let (url_path, has_variants, icon) = match resource_type {
            ResourceType::Feature => ("features", true, "description"),
            ResourceType::Label => ("labels", true, "label"),
            ResourceType::TrainingSet => ("training-sets", true, "storage"),
            ResourceType::Source => ("sources", true, "source"),
            ResourceType::Provider => ("providers", false, "device_hub"),
            ResourceType::Entity => ("entities", false, "fingerprint"),
            ResourceType::Model => ("models", false, "model_training"),
            ResourceType::User => ("users", false, "person"),
        };
        Self {
            resource_type,
            display_name: resource_type.as_str().to_title_case(),
            url_path: url_path.to_string(),
            has_variants,
            icon: icon.to_string(),
        }
    }

    /// Detail-view path for a named resource of this type
    #[must_use]
    pub fn url_path_resource(&self, name: &str) -> String {
        format!("/{}/{}", self.url_path, name)
    }
}

/// Per-type adjustments read from the configuration file
///
/// Unset fields keep the built-in value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorOverride {
    /// Set to `false` to drop the type from the registry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_variants: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Source of resource-type descriptors
pub trait TypeRegistry {
    /// Descriptor for `resource_type`, or `None` if the registry has none
    fn descriptor(&self, resource_type: ResourceType) -> Option<&ResourceDescriptor>;

    /// Types this registry describes, in registry order
    fn resource_types(&self) -> Vec<ResourceType>;
}

/// Descriptor table backed by the built-in defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    descriptors: BTreeMap<ResourceType, ResourceDescriptor>,
}

impl Registry {
    /// Registry with a built-in descriptor for every resource type
    #[must_use]
    pub fn builtin() -> Self {
        let descriptors = ResourceType::ALL
            .into_iter()
            .map(|ty| (ty, ResourceDescriptor::builtin(ty)))
            .collect();
        Self { descriptors }
    }

    /// Registry without any descriptors
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            descriptors: BTreeMap::new(),
        }
    }

    /// Built-in registry adjusted by configuration overrides
    ///
    /// Keys are resource-type names in any spelling accepted by
    /// [`ResourceType::from_str`](std::str::FromStr).
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::UnknownTypeName` if a key does not name a
    /// resource type.
    pub fn with_overrides(overrides: &HashMap<String, DescriptorOverride>) -> Result<Self, ResourceError> {
        let mut registry = Self::builtin();
        for (name, adjust) in overrides {
            let ty: ResourceType = name.parse()?;
            registry.apply(ty, adjust);
        }
        Ok(registry)
    }

    /// Remove a type's descriptor, returning it if present
    pub fn remove(&mut self, resource_type: ResourceType) -> Option<ResourceDescriptor> {
        self.descriptors.remove(&resource_type)
    }

    /// Iterate over descriptors in registry order
    pub fn iter(&self) -> impl Iterator<Item = &ResourceDescriptor> {
        self.descriptors.values()
    }

    fn apply(&mut self, resource_type: ResourceType, adjust: &DescriptorOverride) {
        if adjust.enabled == Some(false) {
            self.descriptors.remove(&resource_type);
            return;
        }
        let descriptor = self
            .descriptors
            .entry(resource_type)
            .or_insert_with(|| ResourceDescriptor::builtin(resource_type));
        if let Some(has_variants) = adjust.has_variants {
            descriptor.has_variants = has_variants;
        }
        if let Some(url_path) = &adjust.url_path {
            descriptor.url_path = url_path.trim_matches('/').to_string();
        }
        if let Some(display_name) = &adjust.display_name {
            descriptor.display_name.clone_from(display_name);
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TypeRegistry for Registry {
    fn descriptor(&self, resource_type: ResourceType) -> Option<&ResourceDescriptor> {
        self.descriptors.get(&resource_type)
    }

    fn resource_types(&self) -> Vec<ResourceType> {
        self.descriptors.keys().copied().collect()
    }
}
