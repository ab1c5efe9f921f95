//! Content metadata exposed as GraphQL fields.
//!
//! - [`MetaRegistry`]: the catalogue of registered keys per object type
//! - [`resolve_meta_type`]: the scalar-mapping rule
//! - [`add_meta_fields`]: injects exposed keys into a type's field map

mod inject;
mod registry;
mod scalar;

pub use inject::add_meta_fields;
pub use registry::{MetaRegistry, RegisteredMeta};
pub use scalar::{Cardinality, ScalarKind, coerce_meta_value, resolve_meta_type};
