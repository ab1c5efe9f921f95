//! Node interface definitions.
//!
//! The `Node` interface lets any object with a global ID be refetched
//! through the `node(id:)` root field. Its definition comes from a
//! [`NodeDefinitionSource`]; the schema builder asks the source once and
//! shares the resulting interface with every type that implements it.

use std::collections::HashMap;
use std::sync::Arc;

use async_graphql::dynamic::{Interface, InterfaceField, TypeRef};
use tracing::debug;

use crate::fields::FieldDefinition;
use crate::resolvers::NodeResolver;

/// Default name of the node interface.
pub const NODE_INTERFACE_NAME: &str = "Node";

/// Description of the node interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeInterface {
    name: String,
    description: String,
}

impl NodeInterface {
    /// Creates a node interface description.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Returns the interface name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Materializes the `async_graphql` interface.
    pub fn to_interface(&self) -> Interface {
        Interface::new(&self.name)
            .description(&self.description)
            .field(
                InterfaceField::new("id", TypeRef::named_nn(TypeRef::ID))
                    .description("The globally unique ID of the object"),
            )
    }
}

impl Default for NodeInterface {
    fn default() -> Self {
        Self::new(
            NODE_INTERFACE_NAME,
            "An object with a globally unique ID",
        )
    }
}

/// The bundle a node definition source produces.
#[derive(Debug, Clone)]
pub struct NodeDefinition {
    /// The shared interface.
    pub node_interface: Arc<NodeInterface>,
    /// Root field fetching any node by global ID, if the source offers one.
    pub node_field: Option<FieldDefinition>,
}

/// Produces the node interface bundle.
pub trait NodeDefinitionSource: Send + Sync {
    /// Builds the node definition. Called at most once per schema builder.
    fn node_definition(&self) -> NodeDefinition;
}

/// Relay-style node source: `Node { id: ID! }` plus `node(id: ID!): Node`.
///
/// The `node` field decodes global IDs of the registered type names into
/// content objects.
#[derive(Debug, Clone, Default)]
pub struct RelayNodeSource {
    object_types: HashMap<String, String>,
}

impl RelayNodeSource {
    /// Creates a source with no resolvable types.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes global IDs of `type_name` resolvable, addressing metadata of
    /// `object_type`.
    #[must_use]
    pub fn with_type(
        mut self,
        type_name: impl Into<String>,
        object_type: impl Into<String>,
    ) -> Self {
        self.object_types.insert(type_name.into(), object_type.into());
        self
    }
}

impl NodeDefinitionSource for RelayNodeSource {
    fn node_definition(&self) -> NodeDefinition {
        debug!(types = self.object_types.len(), "Creating Relay node definition");

        let node_interface = Arc::new(NodeInterface::default());
        let node_field = FieldDefinition::new(
            TypeRef::named(node_interface.name()),
            NodeResolver::resolve(Arc::new(self.object_types.clone())),
        )
        .argument(
            "id",
            TypeRef::named_nn(TypeRef::ID),
            Some("The global ID of the object"),
        )
        .description("Fetches an object given its global ID");

        NodeDefinition {
            node_interface,
            node_field: Some(node_field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_interface() {
        let interface = NodeInterface::default();
        assert_eq!(interface.name(), "Node");
    }

    #[test]
    fn test_relay_source_offers_node_field() {
        let definition = RelayNodeSource::new()
            .with_type("Post", "post")
            .node_definition();

        assert_eq!(definition.node_interface.name(), "Node");
        let field = definition.node_field.unwrap();
        assert_eq!(field.ty().to_string(), "Node");
    }
}
