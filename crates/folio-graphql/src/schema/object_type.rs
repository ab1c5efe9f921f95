//! Object type definitions.

use crate::fields::{FieldDefinition, FieldMap};

/// An object type awaiting assembly into the schema.
///
/// The definition only collects inputs; meta injection, filtering and
/// ordering happen in
/// [`FolioSchemaBuilder::define_object_type`](super::FolioSchemaBuilder::define_object_type).
#[derive(Debug, Clone)]
pub struct ObjectTypeDefinition {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) fields: FieldMap,
    pub(crate) meta_object_type: Option<String>,
    pub(crate) implements_node: bool,
}

impl ObjectTypeDefinition {
    /// Creates an empty definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: FieldMap::new(),
            meta_object_type: None,
            implements_node: false,
        }
    }

    /// Sets the type description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a field, replacing any field with the same name.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, field: FieldDefinition) -> Self {
        self.fields.insert(name.into(), field);
        self
    }

    /// Adds every field of `fields`.
    #[must_use]
    pub fn fields(mut self, fields: FieldMap) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Exposes the metadata registered for `object_type` on this type.
    #[must_use]
    pub fn meta_object_type(mut self, object_type: impl Into<String>) -> Self {
        self.meta_object_type = Some(object_type.into());
        self
    }

    /// Makes the type implement the node interface.
    #[must_use]
    pub fn implements_node(mut self) -> Self {
        self.implements_node = true;
        self
    }

    /// Returns the type name.
    pub fn name(&self) -> &str {
        &self.name
    }
}
