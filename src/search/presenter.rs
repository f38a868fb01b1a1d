//! Turning raw hits into a deduplicated result list
//!
//! The search backend may return one logical resource several times, once per
//! matching field, and may spell its type either canonically or with a legacy
//! code. [`ResultPresenter::present`] resolves every hit's type first and then
//! keeps the first hit for each `(name, variant, type)` triple, preserving
//! input order. Hits whose type cannot be resolved are reported in
//! [`Presentation::rejected`] instead of being dropped.

use super::error::SearchError;
use super::hit::SearchHit;
use crate::resource::{ResourceType, TypeRegistry, resolve_type_code};
use crate::tags::TagState;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashSet;

/// Display-ready projection of one logical resource
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResultEntry {
    pub name: String,
    pub variant: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
}

impl ResultEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, variant: impl Into<String>, resource_type: ResourceType) -> Self {
        Self {
            name: name.into(),
            variant: variant.into(),
            resource_type,
        }
    }
}

impl TryFrom<&SearchHit> for ResultEntry {
    type Error = SearchError;

    fn try_from(hit: &SearchHit) -> Result<Self, Self::Error> {
        let resource_type =
            resolve_type_code(&hit.type_code).ok_or_else(|| SearchError::UnresolvableTypeCode {
                name: hit.name.clone(),
                variant: hit.variant.clone(),
                code: hit.type_code.clone(),
            })?;
        Ok(Self::new(hit.name.clone(), hit.variant.clone(), resource_type))
    }
}

/// Keep the first entry for each `(name, variant, type)`, in input order
#[must_use]
pub fn dedup_entries<I>(entries: I) -> Vec<ResultEntry>
where
    I: IntoIterator<Item = ResultEntry>,
{
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|entry| seen.insert(entry.clone()))
        .collect()
}

/// A hit left out of the result list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedHit {
    /// Position of the hit in the raw input
    pub index: usize,
    pub hit: SearchHit,
    #[serde(serialize_with = "serialize_display")]
    pub error: SearchError,
}

fn serialize_display<S: Serializer>(error: &SearchError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// What the rendering surface shows for one query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Presentation {
    pub query: String,
    pub entries: Vec<ResultEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rejected: Vec<RejectedHit>,
}

impl Presentation {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Heading label placed before the query
    #[must_use]
    pub fn heading(&self) -> &'static str {
        if self.is_empty() { "No results for:" } else { "Results for:" }
    }
}

/// Deduplicates hits for display and resolves selections
///
/// Reads resource-type descriptors from a [`TypeRegistry`]; selection handling
/// lives in [`select`](ResultPresenter::select).
pub struct ResultPresenter<'a, R: TypeRegistry + ?Sized> {
    pub(super) registry: &'a R,
}

impl<'a, R: TypeRegistry + ?Sized> ResultPresenter<'a, R> {
    #[must_use]
    pub const fn new(registry: &'a R) -> Self {
        Self { registry }
    }

    /// Build the result list for `query` from raw hits
    #[must_use]
    pub fn present(&self, query: &str, hits: &[SearchHit]) -> Presentation {
        self.build(query, hits, None)
    }

    /// Like [`present`](Self::present), but first drops hits that fail the
    /// active tag filters for their type
    #[must_use]
    pub fn present_filtered(&self, query: &str, hits: &[SearchHit], tags: &TagState) -> Presentation {
        self.build(query, hits, Some(tags))
    }

    fn build(&self, query: &str, hits: &[SearchHit], tags: Option<&TagState>) -> Presentation {
        let mut rejected = Vec::new();
        let mut filtered_out = 0usize;

        let resolved = hits.iter().enumerate().filter_map(|(index, hit)| {
            match ResultEntry::try_from(hit) {
                Ok(entry) => {
                    if tags.is_some_and(|tags| !tags.admits(entry.resource_type, &hit.tags)) {
                        filtered_out += 1;
                        None
                    } else {
                        Some(entry)
                    }
                }
                Err(error) => {
                    tracing::warn!(index, %error, "skipping search hit");
                    rejected.push(RejectedHit {
                        index,
                        hit: hit.clone(),
                        error,
                    });
                    None
                }
            }
        });
        let entries = dedup_entries(resolved);

        tracing::debug!(
            query,
            raw = hits.len(),
            shown = entries.len(),
            rejected = rejected.len(),
            filtered_out,
            "presented search results"
        );

        Presentation {
            query: query.to_string(),
            entries,
            rejected,
        }
    }
}
