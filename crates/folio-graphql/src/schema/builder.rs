//! Folio GraphQL schema builder.
//!
//! This module provides `FolioSchemaBuilder`, which assembles content object
//! types into a GraphQL schema using async-graphql's dynamic schema API.
//!
//! The builder owns two caches whose lifetime is the builder's own:
//!
//! - the node definition, requested from its source at most once;
//! - the prepared field map of every type name. The first field map prepared
//!   for a name is frozen and returned to every later caller, whatever
//!   candidate fields they pass.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use async_graphql::dynamic::{Object, Schema, TypeRef};
use parking_lot::Mutex;
use tracing::{debug, trace};

use super::node::{NodeDefinition, NodeDefinitionSource, NodeInterface};
use super::object_type::ObjectTypeDefinition;
use crate::error::GraphQLError;
use crate::fields::{FieldDefinition, FieldMap};
use crate::hooks::FieldFilters;
use crate::meta::{MetaRegistry, add_meta_fields};
use crate::resolvers::GlobalIdResolver;
use crate::types::is_valid_graphql_name;

/// Configuration for the schema builder.
#[derive(Debug, Clone)]
pub struct SchemaBuilderConfig {
    /// Maximum query depth allowed.
    pub max_depth: usize,

    /// Maximum query complexity allowed.
    pub max_complexity: usize,

    /// Whether to enable introspection queries.
    pub introspection_enabled: bool,

    /// Name of the query root type.
    pub query_type_name: String,
}

impl Default for SchemaBuilderConfig {
    fn default() -> Self {
        Self {
            max_depth: 15,
            max_complexity: 500,
            introspection_enabled: true,
            query_type_name: "RootQuery".to_string(),
        }
    }
}

/// Assembles content object types into a GraphQL schema.
///
/// # Example
///
/// ```ignore
/// let builder = FolioSchemaBuilder::new(
///     Arc::new(RelayNodeSource::new().with_type("Post", "post")),
///     Arc::new(MetaRegistry::from_toml_str(catalogue)?),
///     SchemaBuilderConfig::default(),
/// );
///
/// let post = ObjectTypeDefinition::new("Post")
///     .meta_object_type("post")
///     .implements_node()
///     .field("title", title_field);
///
/// let schema = builder.build([post], query_fields)?;
/// ```
pub struct FolioSchemaBuilder {
    config: SchemaBuilderConfig,
    node_source: Arc<dyn NodeDefinitionSource>,
    meta_registry: Arc<MetaRegistry>,
    filters: FieldFilters,
    node_definition: OnceLock<NodeDefinition>,
    prepared_fields: Mutex<HashMap<String, Arc<FieldMap>>>,
}

impl FolioSchemaBuilder {
    /// Creates a new schema builder with no field filters.
    #[must_use]
    pub fn new(
        node_source: Arc<dyn NodeDefinitionSource>,
        meta_registry: Arc<MetaRegistry>,
        config: SchemaBuilderConfig,
    ) -> Self {
        Self {
            config,
            node_source,
            meta_registry,
            filters: FieldFilters::new(),
            node_definition: OnceLock::new(),
            prepared_fields: Mutex::new(HashMap::new()),
        }
    }

    /// Replaces the field filter registry.
    #[must_use]
    pub fn with_field_filters(mut self, filters: FieldFilters) -> Self {
        self.filters = filters;
        self
    }

    /// Registers a field filter for `type_name`.
    pub fn add_field_filter<F>(&mut self, type_name: &str, filter: F)
    where
        F: Fn(FieldMap) -> FieldMap + Send + Sync + 'static,
    {
        self.filters.register(type_name, filter);
    }

    /// Returns the builder configuration.
    pub fn config(&self) -> &SchemaBuilderConfig {
        &self.config
    }

    /// Returns the metadata catalogue.
    pub fn meta_registry(&self) -> &MetaRegistry {
        &self.meta_registry
    }

    fn node_definition(&self) -> &NodeDefinition {
        self.node_definition.get_or_init(|| {
            debug!("Requesting node definition");
            self.node_source.node_definition()
        })
    }

    /// Returns the shared node interface, requesting it from the node
    /// definition source on first use.
    pub fn node_interface(&self) -> Arc<NodeInterface> {
        Arc::clone(&self.node_definition().node_interface)
    }

    /// Returns the frozen field map of `type_name`, preparing it from
    /// `fields` if this is the first request for that name.
    ///
    /// Preparation runs the type's field filters in registration order and
    /// sorts the result by field name. Returns `None` if the prepared map is
    /// empty; empty maps are not frozen.
    pub fn prepare_fields(&self, fields: FieldMap, type_name: &str) -> Option<Arc<FieldMap>> {
        if let Some(prepared) = self.prepared_fields.lock().get(type_name) {
            trace!(type_name, "Using prepared fields");
            return Some(Arc::clone(prepared));
        }

        // Filters run unlocked so they may prepare other types.
        let mut fields = self.filters.apply(type_name, fields);
        fields.sort_keys();

        if fields.is_empty() {
            debug!(type_name, "Prepared field map is empty");
            return None;
        }

        debug!(type_name, fields = fields.len(), "Prepared fields");
        let mut prepared = self.prepared_fields.lock();
        let entry = prepared
            .entry(type_name.to_string())
            .or_insert_with(|| Arc::new(fields));
        Some(Arc::clone(entry))
    }

    /// Adds the exposed metadata of `object_type` to `fields`.
    ///
    /// # Errors
    ///
    /// Returns `GraphQLError::ReservedMetaKey` if a registered key collides
    /// with an existing field.
    pub fn add_meta_fields(
        &self,
        fields: FieldMap,
        object_type: &str,
    ) -> Result<FieldMap, GraphQLError> {
        add_meta_fields(fields, object_type, &self.meta_registry)
    }

    /// Materializes an object type.
    ///
    /// Node types get a global `id` field unless they define one. Metadata
    /// fields are injected next, then the field map is prepared under the
    /// type's name.
    ///
    /// # Errors
    ///
    /// Returns an error if the type name is invalid, a meta key collides with
    /// a field, or the prepared field map is empty.
    pub fn define_object_type(&self, def: ObjectTypeDefinition) -> Result<Object, GraphQLError> {
        if !is_valid_graphql_name(&def.name) {
            return Err(GraphQLError::SchemaBuildFailed(format!(
                "\"{}\" is not a valid GraphQL type name",
                def.name
            )));
        }

        let mut fields = def.fields;

        if def.implements_node && !fields.contains_key("id") {
            fields.insert(
                "id".to_string(),
                FieldDefinition::new(TypeRef::named_nn(TypeRef::ID), GlobalIdResolver::resolve())
                    .description("The globally unique ID of the object"),
            );
        }

        if let Some(object_type) = &def.meta_object_type {
            fields = self.add_meta_fields(fields, object_type)?;
        }

        let prepared = self.prepare_fields(fields, &def.name).ok_or_else(|| {
            GraphQLError::SchemaBuildFailed(format!("type {} has no fields", def.name))
        })?;

        let mut object = Object::new(&def.name);
        if let Some(description) = def.description {
            object = object.description(description);
        }
        if def.implements_node {
            object = object.implement(self.node_interface().name());
        }
        for (name, field) in prepared.iter() {
            object = object.field(field.to_field(name));
        }

        trace!(type_name = %def.name, fields = prepared.len(), "Defined object type");
        Ok(object)
    }

    /// Builds the GraphQL schema.
    ///
    /// Registers the node interface, every type in `types`, and the query
    /// root. The root's fields are `query_fields` plus the node source's
    /// `node` field, prepared under the configured query type name.
    ///
    /// # Errors
    ///
    /// Returns the first type definition error, or
    /// `GraphQLError::SchemaBuildFailed` if async-graphql rejects the schema.
    pub fn build(
        &self,
        types: impl IntoIterator<Item = ObjectTypeDefinition>,
        query_fields: FieldMap,
    ) -> Result<Schema, GraphQLError> {
        debug!("Starting GraphQL schema build");

        let query_type_name = self.config.query_type_name.clone();
        let mut schema_builder = Schema::build(&query_type_name, None, None);

        schema_builder = schema_builder.register(self.node_interface().to_interface());

        let mut type_count = 0usize;
        for def in types {
            let object = self.define_object_type(def)?;
            schema_builder = schema_builder.register(object);
            type_count += 1;
        }

        let mut root_fields = query_fields;
        if let Some(node_field) = &self.node_definition().node_field {
            root_fields
                .entry("node".to_string())
                .or_insert_with(|| node_field.clone());
        }
        let root = ObjectTypeDefinition::new(&query_type_name)
            .description("The root entry point into the graph")
            .fields(root_fields);
        schema_builder = schema_builder.register(self.define_object_type(root)?);

        // Configure limits
        let mut schema_builder = schema_builder
            .limit_depth(self.config.max_depth)
            .limit_complexity(self.config.max_complexity);

        if !self.config.introspection_enabled {
            schema_builder = schema_builder.disable_introspection();
        }

        let schema = schema_builder
            .finish()
            .map_err(|e| GraphQLError::SchemaBuildFailed(e.to_string()))?;

        debug!(types = type_count, "GraphQL schema build complete");
        Ok(schema)
    }
}
