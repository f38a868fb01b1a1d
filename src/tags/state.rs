//! Per-resource-type tag selection state
//!
//! [`TagState`] holds one set of active tags per resource type. It is an
//! immutable value: [`TagState::toggle`] returns a new state and leaves the
//! receiver untouched. Sets are shared between successive states through
//! `Arc`, so a toggle copies only the one set it changes.
//!
//! ```
//! use catalog_search::resource::ResourceType;
//! use catalog_search::tags::TagState;
//!
//! let empty = TagState::initialize(ResourceType::ALL);
//! let state = empty.toggle(ResourceType::Feature, "pii").unwrap();
//! assert!(state.contains(ResourceType::Feature, "pii"));
//! assert_eq!(state.toggle(ResourceType::Feature, "pii").unwrap(), empty);
//! ```

use super::error::TagError;
use crate::resource::ResourceType;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// Active tag filters, keyed by resource type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagState {
    by_type: BTreeMap<ResourceType, Arc<BTreeSet<String>>>,
}

impl TagState {
    /// Create a state with one empty tag set per given resource type
    ///
    /// Duplicate types collapse into a single entry.
    #[must_use]
    pub fn initialize<I>(resource_types: I) -> Self
    where
        I: IntoIterator<Item = ResourceType>,
    {
        let by_type = resource_types
            .into_iter()
            .map(|ty| (ty, Arc::new(BTreeSet::new())))
            .collect();
        Self { by_type }
    }

    /// Flip membership of `tag` in the set for `resource_type`
    ///
    /// # Errors
    ///
    /// Returns `TagError::InvalidResourceType` if this state was not
    /// initialized with `resource_type`.
    pub fn toggle(&self, resource_type: ResourceType, tag: &str) -> Result<Self, TagError> {
        let mut next = self.clone();
        let set = next
            .by_type
            .get_mut(&resource_type)
            .ok_or(TagError::InvalidResourceType(resource_type))?;

        let tags = Arc::make_mut(set);
        if !tags.remove(tag) {
            tags.insert(tag.to_string());
        }
        Ok(next)
    }

    /// Track exactly `resource_types`
    ///
    /// Sets of types that remain keep their tags, new types start empty and
    /// types missing from `resource_types` are dropped.
    #[must_use]
    pub fn reconciled<I>(&self, resource_types: I) -> Self
    where
        I: IntoIterator<Item = ResourceType>,
    {
        let by_type = resource_types
            .into_iter()
            .map(|ty| {
                let tags = self
                    .by_type
                    .get(&ty)
                    .map_or_else(|| Arc::new(BTreeSet::new()), Arc::clone);
                (ty, tags)
            })
            .collect();
        Self { by_type }
    }

    /// Whether `tag` is active for `resource_type`
    #[must_use]
    pub fn contains(&self, resource_type: ResourceType, tag: &str) -> bool {
        self.by_type
            .get(&resource_type)
            .is_some_and(|tags| tags.contains(tag))
    }

    /// Active tags for a resource type, `None` if the type is not tracked
    #[must_use]
    pub fn tags(&self, resource_type: ResourceType) -> Option<&BTreeSet<String>> {
        self.by_type.get(&resource_type).map(|tags| &**tags)
    }

    /// Tracked resource types
    pub fn resource_types(&self) -> impl Iterator<Item = ResourceType> + '_ {
        self.by_type.keys().copied()
    }

    /// Whether `resource_type` has an entry in this state
    #[must_use]
    pub fn tracks(&self, resource_type: ResourceType) -> bool {
        self.by_type.contains_key(&resource_type)
    }

    /// True when no type has any active tag
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.by_type.values().all(|tags| tags.is_empty())
    }

    /// Whether a resource carrying `tags` passes the filters for its type
    ///
    /// A resource passes when its type has no active tags or when it carries
    /// every active tag. Untracked types have no filters.
    #[must_use]
    pub fn admits(&self, resource_type: ResourceType, tags: &[String]) -> bool {
        self.by_type.get(&resource_type).is_none_or(|active| {
            active
                .iter()
                .all(|wanted| tags.iter().any(|tag| tag == wanted))
        })
    }
}
