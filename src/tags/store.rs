//! Tag store with an action log
//!
//! [`TagStore`] owns the current [`TagState`] and records applied
//! [`TagAction`]s, keeping at most [`HISTORY_LIMIT`] of them. Because a toggle
//! is its own inverse, undoing the last action re-applies it; [`replay`]
//! rebuilds any state from a starting point and a log.

use super::error::TagError;
use super::state::TagState;
use crate::resource::ResourceType;
use serde::{Deserialize, Serialize};

/// Number of actions kept for undo; older ones are forgotten
pub const HISTORY_LIMIT: usize = 50;

/// A change to the tag selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum TagAction {
    /// Add the tag if absent, remove it if present
    Toggle {
        resource_type: ResourceType,
        tag: String,
    },
}

impl TagAction {
    /// Build a toggle action
    #[must_use]
    pub fn toggle(resource_type: ResourceType, tag: impl Into<String>) -> Self {
        Self::Toggle {
            resource_type,
            tag: tag.into(),
        }
    }

    /// Compute the state that results from applying this action
    ///
    /// # Errors
    ///
    /// Returns `TagError::InvalidResourceType` if `state` does not track the
    /// action's resource type.
    pub fn apply(&self, state: &TagState) -> Result<TagState, TagError> {
        match self {
            Self::Toggle { resource_type, tag } => state.toggle(*resource_type, tag),
        }
    }
}

/// Apply a sequence of actions to `initial`
///
/// # Errors
///
/// Stops at the first action that fails and returns its error.
pub fn replay<'a, I>(initial: &TagState, actions: I) -> Result<TagState, TagError>
where
    I: IntoIterator<Item = &'a TagAction>,
{
    actions
        .into_iter()
        .try_fold(initial.clone(), |state, action| action.apply(&state))
}

/// Owner of the tag selection for one session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagStore {
    state: TagState,
    #[serde(default)]
    history: Vec<TagAction>,
}

impl TagStore {
    /// Create a store with an empty tag set for every given type
    #[must_use]
    pub fn new<I>(resource_types: I) -> Self
    where
        I: IntoIterator<Item = ResourceType>,
    {
        Self {
            state: TagState::initialize(resource_types),
            history: Vec::new(),
        }
    }

    /// Current selection
    #[must_use]
    pub const fn state(&self) -> &TagState {
        &self.state
    }

    /// Actions applied so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[TagAction] {
        &self.history
    }

    /// Apply an action and record it
    ///
    /// The action is only recorded if it succeeds.
    ///
    /// # Errors
    ///
    /// Returns `TagError::InvalidResourceType` if the action names a type this
    /// store does not track.
    pub fn dispatch(&mut self, action: TagAction) -> Result<&TagState, TagError> {
        let next = action.apply(&self.state)?;
        tracing::debug!(?action, "tag selection updated");
        self.state = next;
        self.history.push(action);
        if self.history.len() > HISTORY_LIMIT {
            let excess = self.history.len() - HISTORY_LIMIT;
            self.history.drain(..excess);
        }
        Ok(&self.state)
    }

    /// Shorthand for dispatching [`TagAction::Toggle`]
    ///
    /// # Errors
    ///
    /// See [`TagStore::dispatch`].
    pub fn toggle(&mut self, resource_type: ResourceType, tag: &str) -> Result<&TagState, TagError> {
        self.dispatch(TagAction::toggle(resource_type, tag))
    }

    /// Revert the most recent action
    ///
    /// Returns `Ok(false)` when there is nothing to undo.
    ///
    /// # Errors
    ///
    /// Only fails if the history holds an action the state cannot accept,
    /// which means the store was deserialized from inconsistent data.
    pub fn undo(&mut self) -> Result<bool, TagError> {
        let Some(last) = self.history.last() else {
            return Ok(false);
        };
        self.state = last.apply(&self.state)?;
        self.history.pop();
        Ok(true)
    }

    /// Track exactly `resource_types`
    ///
    /// Newly listed types start with no active tags. Dropped types lose their
    /// tags, and their actions leave the history; toggles on different types
    /// commute, so undo stays consistent for the rest.
    pub fn reconcile<I>(&mut self, resource_types: I)
    where
        I: IntoIterator<Item = ResourceType>,
    {
        let state = self.state.reconciled(resource_types);
        if state == self.state {
            return;
        }
        let before = self.history.len();
        self.history.retain(|action| match action {
            TagAction::Toggle { resource_type, .. } => state.tracks(*resource_type),
        });
        tracing::debug!(
            tracked = state.resource_types().count(),
            dropped_actions = before - self.history.len(),
            "tag selection reconciled with registry"
        );
        self.state = state;
    }

    /// Clear every active tag and the history, keeping the tracked types
    pub fn reset(&mut self) {
        self.state = TagState::initialize(self.state.resource_types().collect::<Vec<_>>());
        self.history.clear();
    }
}
