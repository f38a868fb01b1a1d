//! Resource types, their legacy type codes and the descriptor registry

pub mod codes;
pub mod error;
pub mod registry;
pub mod types;

pub use codes::{LEGACY_TYPE_CODES, resolve_type_code};
pub use error::ResourceError;
pub use registry::{DescriptorOverride, Registry, ResourceDescriptor, TypeRegistry};
pub use types::ResourceType;
