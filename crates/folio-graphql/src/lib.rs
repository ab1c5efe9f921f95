//! # folio-graphql
//!
//! GraphQL schema assembly for Folio content types.
//!
//! This crate registers content object types into a GraphQL schema built with
//! async-graphql's dynamic API. It supports:
//!
//! - Filterable field sets: every type's fields pass through the
//!   `graphql_<TypeName>_fields` extension point before being frozen
//! - Stable field ordering: prepared field maps are sorted by name and reused
//!   for the lifetime of the schema builder
//! - Metadata fields: keys registered in the meta catalogue are exposed as
//!   scalar or list fields, resolved lazily from the metadata store
//! - The Relay `Node` interface and global IDs
//!
//! ## Configuration
//!
//! ```toml
//! [graphql]
//! max_depth = 15
//! max_complexity = 500
//! introspection = true
//! query_type_name = "RootQuery"
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Configuration options
//! - [`fields`] - Field definitions and field maps
//! - [`hooks`] - Field filters
//! - [`meta`] - Meta catalogue, scalar mapping and meta-field injection
//! - [`schema`] - Schema building
//! - [`context`] - GraphQL execution context
//! - [`relay`] - Global IDs
//! - [`error`] - Error types

pub mod config;
pub mod context;
pub mod error;
pub mod fields;
pub mod hooks;
pub mod meta;
pub mod relay;
pub mod resolvers;
pub mod schema;
pub mod types;

// Re-export main types
pub use config::GraphQLConfig;
pub use context::{GraphQLContext, GraphQLContextBuilder};
pub use error::GraphQLError;
pub use fields::{FieldDefinition, FieldMap};
pub use hooks::{FieldFilters, fields_hook_name};
pub use meta::{
    Cardinality, MetaRegistry, RegisteredMeta, ScalarKind, add_meta_fields, resolve_meta_type,
};
pub use schema::{
    FolioSchemaBuilder, NodeDefinition, NodeDefinitionSource, NodeInterface,
    ObjectTypeDefinition, RelayNodeSource, SchemaBuilderConfig,
};
pub use types::ContentObject;

/// Result type for GraphQL operations.
pub type Result<T> = std::result::Result<T, GraphQLError>;
