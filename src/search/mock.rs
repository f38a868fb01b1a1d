//! Recording collaborators for testing selection handling
//!
//! Both doubles write into one shared [`CallLog`], so tests can assert the
//! relative order of variant updates and navigation requests.

use super::traits::{Navigator, VariantSelection};
use crate::resource::ResourceType;
use std::cell::RefCell;
use std::rc::Rc;

/// A collaborator call observed during a test
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    SetVariant {
        resource_type: ResourceType,
        name: String,
        variant: String,
    },
    Navigate(String),
}

/// Shared, ordered log of collaborator calls
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Rc<RefCell<Vec<Call>>>,
}

impl CallLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the calls recorded so far
    #[must_use]
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Variant store that records into this log
    #[must_use]
    pub fn variants(&self) -> RecordingVariants {
        RecordingVariants { log: self.clone() }
    }

    /// Navigator that records into this log
    #[must_use]
    pub fn navigator(&self) -> RecordingNavigator {
        RecordingNavigator { log: self.clone() }
    }

    fn push(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

/// [`VariantSelection`] double
#[derive(Debug, Clone)]
pub struct RecordingVariants {
    log: CallLog,
}

impl VariantSelection for RecordingVariants {
    fn set_variant(&mut self, resource_type: ResourceType, name: &str, variant: &str) {
        self.log.push(Call::SetVariant {
            resource_type,
            name: name.to_string(),
            variant: variant.to_string(),
        });
    }
}

/// [`Navigator`] double
#[derive(Debug, Clone)]
pub struct RecordingNavigator {
    log: CallLog,
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, path: &str) {
        self.log.push(Call::Navigate(path.to_string()));
    }
}
