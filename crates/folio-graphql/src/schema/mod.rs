//! GraphQL schema assembly.
//!
//! ## Components
//!
//! - [`FolioSchemaBuilder`] - Prepares field maps and assembles the schema
//! - [`ObjectTypeDefinition`] - Inputs of one content object type
//! - [`NodeDefinitionSource`] - Supplies the shared `Node` interface
//!
//! ## Assembly
//!
//! For each object type:
//! 1. Node types receive a global `id` field
//! 2. Exposed metadata keys are injected as fields
//! 3. Field filters run and the map is sorted by name
//! 4. The prepared map is frozen under the type name
//! 5. The map is materialized as an async-graphql `Object`

mod builder;
mod node;
mod object_type;

pub use builder::{FolioSchemaBuilder, SchemaBuilderConfig};
pub use node::{
    NODE_INTERFACE_NAME, NodeDefinition, NodeDefinitionSource, NodeInterface, RelayNodeSource,
};
pub use object_type::ObjectTypeDefinition;
