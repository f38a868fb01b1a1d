//! Collaborator interfaces used when a result is selected
//!
//! The presenter never owns the variant-selection storage or the router. It
//! talks to them through these traits, so the surrounding application passes
//! in whatever implements them: the session store and a path log in the CLI,
//! recording doubles in tests.
//!
//! ```text
//!   ResultPresenter::select
//!        │ 1. set_variant(type, name, variant)   (variant-bearing types only)
//!        ▼
//!   VariantSelection
//!        │ 2. navigate(path)
//!        ▼
//!   Navigator
//! ```

use crate::resource::ResourceType;

/// Store recording which variant of a resource is active
pub trait VariantSelection {
    /// Make `variant` the active variant of resource `name` of `resource_type`
    fn set_variant(&mut self, resource_type: ResourceType, name: &str, variant: &str);
}

/// Router that can be asked to show a path
pub trait Navigator {
    /// Request navigation to `path`; the outcome is not reported back
    fn navigate(&mut self, path: &str);
}

/// Collects requested paths in order
impl Navigator for Vec<String> {
    fn navigate(&mut self, path: &str) {
        self.push(path.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_navigator_keeps_order() {
        let mut paths = Vec::new();
        paths.navigate("/features/age");
        paths.navigate("/models/churn");
        assert_eq!(paths, vec!["/features/age".to_string(), "/models/churn".to_string()]);
    }
}
