//! Registered metadata catalogue.
//!
//! The catalogue describes, per host object type, which metadata keys exist,
//! what kind of value each holds, and whether it is exposed through GraphQL.
//! Entries are validated when they are registered or loaded, so the rest of
//! the crate can rely on every key being a legal GraphQL field name.
//!
//! # Catalogue format
//!
//! ```toml
//! [post.color]
//! type = "string"
//! single = true
//! description = "Accent color of the post"
//! show_in_graphql = true
//!
//! [post.view_count]
//! type = "integer"
//! show_in_graphql = true
//! ```

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::scalar::{Cardinality, ScalarKind};
use crate::error::GraphQLError;
use crate::types::is_valid_graphql_name;

/// A registered metadata key's descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredMeta {
    /// Kind of value stored under the key.
    pub kind: ScalarKind,
    /// Whether the key holds one value or many.
    pub cardinality: Cardinality,
    /// Field description.
    pub description: String,
    /// Whether the key is exposed as a GraphQL field.
    pub exposed: bool,
}

impl RegisteredMeta {
    /// Creates a hidden descriptor with an empty description.
    #[must_use]
    pub fn new(kind: ScalarKind, cardinality: Cardinality) -> Self {
        Self {
            kind,
            cardinality,
            description: String::new(),
            exposed: false,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets whether the key is exposed.
    #[must_use]
    pub fn exposed(mut self, exposed: bool) -> Self {
        self.exposed = exposed;
        self
    }
}

/// Catalogue entry as written in TOML.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMeta {
    #[serde(rename = "type", default = "default_kind")]
    kind: ScalarKind,
    #[serde(default = "default_single")]
    single: bool,
    #[serde(default)]
    description: String,
    #[serde(default)]
    show_in_graphql: bool,
}

fn default_kind() -> ScalarKind {
    ScalarKind::String
}

fn default_single() -> bool {
    true
}

impl From<RawMeta> for RegisteredMeta {
    fn from(raw: RawMeta) -> Self {
        Self {
            kind: raw.kind,
            cardinality: Cardinality::from_single(raw.single),
            description: raw.description,
            exposed: raw.show_in_graphql,
        }
    }
}

/// Catalogue of registered metadata keys, grouped by object type.
#[derive(Debug, Clone, Default)]
pub struct MetaRegistry {
    entries: HashMap<String, IndexMap<String, RegisteredMeta>>,
}

impl MetaRegistry {
    /// Creates an empty catalogue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a catalogue from TOML.
    ///
    /// # Errors
    ///
    /// Returns `GraphQLError::InvalidCatalogue` if the document does not parse,
    /// and the `register` errors for entries that fail validation.
    pub fn from_toml_str(source: &str) -> Result<Self, GraphQLError> {
        let raw: IndexMap<String, IndexMap<String, RawMeta>> =
            toml::from_str(source).map_err(|e| GraphQLError::InvalidCatalogue(e.to_string()))?;

        let mut registry = Self::new();
        for (object_type, keys) in raw {
            for (key, meta) in keys {
                registry.register(&object_type, &key, meta.into())?;
            }
        }

        debug!(
            object_types = registry.entries.len(),
            keys = registry.len(),
            "Loaded meta catalogue"
        );
        Ok(registry)
    }

    /// Registers a metadata key for an object type.
    ///
    /// # Errors
    ///
    /// Returns `GraphQLError::InvalidMetaKey` if the key is not a legal
    /// GraphQL name, and `GraphQLError::DuplicateMetaKey` if it is already
    /// registered for the object type.
    pub fn register(
        &mut self,
        object_type: &str,
        key: &str,
        meta: RegisteredMeta,
    ) -> Result<(), GraphQLError> {
        if object_type.is_empty() {
            return Err(GraphQLError::invalid_meta_key(
                object_type,
                key,
                "object type must not be empty",
            ));
        }
        if !is_valid_graphql_name(key) {
            return Err(GraphQLError::invalid_meta_key(
                object_type,
                key,
                "not a valid GraphQL field name",
            ));
        }

        let keys = self.entries.entry(object_type.to_string()).or_default();
        if keys.contains_key(key) {
            return Err(GraphQLError::DuplicateMetaKey {
                object_type: object_type.to_string(),
                key: key.to_string(),
            });
        }
        keys.insert(key.to_string(), meta);
        Ok(())
    }

    /// Returns the keys registered for an object type, in registration order.
    #[must_use]
    pub fn registered_keys(&self, object_type: &str) -> Option<&IndexMap<String, RegisteredMeta>> {
        self.entries.get(object_type)
    }

    /// Returns the descriptor of one key.
    #[must_use]
    pub fn get(&self, object_type: &str, key: &str) -> Option<&RegisteredMeta> {
        self.entries.get(object_type)?.get(key)
    }

    /// Returns the total number of registered keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.values().map(IndexMap::len).sum()
    }

    /// Returns `true` if no key is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = MetaRegistry::new();
        registry
            .register(
                "post",
                "color",
                RegisteredMeta::new(ScalarKind::String, Cardinality::One).exposed(true),
            )
            .unwrap();

        let meta = registry.get("post", "color").unwrap();
        assert!(meta.exposed);
        assert_eq!(meta.kind, ScalarKind::String);
        assert!(registry.get("user", "color").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_register_rejects_invalid_names() {
        let mut registry = MetaRegistry::new();
        let meta = RegisteredMeta::new(ScalarKind::String, Cardinality::One);

        let err = registry.register("post", "wp-color", meta.clone()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_META_KEY");
        assert!(registry.register("post", "__secret", meta.clone()).is_err());
        assert!(registry.register("", "color", meta).is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let mut registry = MetaRegistry::new();
        let meta = RegisteredMeta::new(ScalarKind::Integer, Cardinality::One);
        registry.register("post", "views", meta.clone()).unwrap();

        let err = registry.register("post", "views", meta.clone()).unwrap_err();
        assert!(matches!(err, GraphQLError::DuplicateMetaKey { .. }));

        // Same key on another object type is fine.
        registry.register("user", "views", meta).unwrap();
    }

    #[test]
    fn test_registration_order_is_kept() {
        let mut registry = MetaRegistry::new();
        for key in ["zeta", "alpha", "mid"] {
            registry
                .register("post", key, RegisteredMeta::new(ScalarKind::String, Cardinality::One))
                .unwrap();
        }
        let keys: Vec<_> = registry.registered_keys("post").unwrap().keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_from_toml() {
        let toml = r#"
            [post.color]
            type = "string"
            description = "Accent color"
            show_in_graphql = true

            [post.ratings]
            type = "integer"
            single = false
            show_in_graphql = true

            [post.internal_flag]
            type = "boolean"

            [user.nickname]
        "#;

        let registry = MetaRegistry::from_toml_str(toml).unwrap();
        assert_eq!(registry.len(), 4);

        let color = registry.get("post", "color").unwrap();
        assert_eq!(color.description, "Accent color");
        assert_eq!(color.cardinality, Cardinality::One);

        let ratings = registry.get("post", "ratings").unwrap();
        assert_eq!(ratings.kind, ScalarKind::Integer);
        assert_eq!(ratings.cardinality, Cardinality::Many);

        let flag = registry.get("post", "internal_flag").unwrap();
        assert!(!flag.exposed);

        let nickname = registry.get("user", "nickname").unwrap();
        assert_eq!(nickname.kind, ScalarKind::String);
        assert!(nickname.cardinality.is_single());
    }

    #[test]
    fn test_from_toml_unknown_kind_is_string() {
        let registry = MetaRegistry::from_toml_str("[post.published]\ntype = \"date\"").unwrap();
        assert_eq!(registry.get("post", "published").unwrap().kind, ScalarKind::String);
    }

    #[test]
    fn test_from_toml_rejects_unknown_fields() {
        let err = MetaRegistry::from_toml_str("[post.color]\nshow_in_rest = true").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CATALOGUE");
    }

    #[test]
    fn test_from_toml_rejects_invalid_keys() {
        let err =
            MetaRegistry::from_toml_str("[post.\"wp-color\"]\ntype = \"string\"").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_META_KEY");
    }
}
