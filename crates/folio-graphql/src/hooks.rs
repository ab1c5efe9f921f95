//! Field filters.
//!
//! Each object type exposes a named extension point,
//! `graphql_<TypeName>_fields`, through which external code can observe and
//! rewrite the type's field map before it is frozen.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::fields::FieldMap;

/// A transformation applied to a type's field map.
pub type FieldFilterFn = Arc<dyn Fn(FieldMap) -> FieldMap + Send + Sync>;

/// Returns the extension point name for a type's fields.
pub fn fields_hook_name(type_name: &str) -> String {
    format!("graphql_{type_name}_fields")
}

/// Registry of field filters keyed by extension point name.
#[derive(Clone, Default)]
pub struct FieldFilters {
    filters: HashMap<String, Vec<FieldFilterFn>>,
}

impl FieldFilters {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a filter for `type_name`. Filters run in registration order.
    pub fn register<F>(&mut self, type_name: &str, filter: F)
    where
        F: Fn(FieldMap) -> FieldMap + Send + Sync + 'static,
    {
        self.filters
            .entry(fields_hook_name(type_name))
            .or_default()
            .push(Arc::new(filter));
    }

    /// Returns the number of filters registered for `type_name`.
    #[must_use]
    pub fn count(&self, type_name: &str) -> usize {
        self.filters
            .get(&fields_hook_name(type_name))
            .map_or(0, Vec::len)
    }

    /// Runs every filter for `type_name`, each receiving the previous output.
    #[must_use]
    pub fn apply(&self, type_name: &str, fields: FieldMap) -> FieldMap {
        let hook = fields_hook_name(type_name);
        let Some(filters) = self.filters.get(&hook) else {
            return fields;
        };

        debug!(hook = %hook, filters = filters.len(), "Applying field filters");
        filters.iter().fold(fields, |acc, filter| filter(acc))
    }
}

impl fmt::Debug for FieldFilters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut hooks: Vec<(&String, usize)> =
            self.filters.iter().map(|(k, v)| (k, v.len())).collect();
        hooks.sort();
        f.debug_struct("FieldFilters").field("hooks", &hooks).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::FieldDefinition;
    use async_graphql::Value;
    use async_graphql::dynamic::{FieldFuture, TypeRef};

    fn field() -> FieldDefinition {
        FieldDefinition::new(TypeRef::named(TypeRef::STRING), |_| {
            FieldFuture::new(async { Ok(Some(Value::Null)) })
        })
    }

    #[test]
    fn test_hook_name() {
        assert_eq!(fields_hook_name("Post"), "graphql_Post_fields");
    }

    #[test]
    fn test_no_filters_is_identity() {
        let filters = FieldFilters::new();
        let mut fields = FieldMap::new();
        fields.insert("title".into(), field());

        let out = filters.apply("Post", fields);
        assert_eq!(out.keys().collect::<Vec<_>>(), vec!["title"]);
    }

    #[test]
    fn test_filters_run_in_registration_order() {
        let mut filters = FieldFilters::new();
        filters.register("Post", |mut fields| {
            fields.insert("first".into(), field());
            fields
        });
        filters.register("Post", |mut fields| {
            // Sees the field added by the previous filter.
            if fields.contains_key("first") {
                fields.insert("second".into(), field());
            }
            fields
        });

        let out = filters.apply("Post", FieldMap::new());
        assert_eq!(out.keys().collect::<Vec<_>>(), vec!["first", "second"]);
        assert_eq!(filters.count("Post"), 2);
    }

    #[test]
    fn test_filters_are_scoped_by_type() {
        let mut filters = FieldFilters::new();
        filters.register("Post", |_| FieldMap::new());

        let mut fields = FieldMap::new();
        fields.insert("name".into(), field());
        let out = filters.apply("User", fields);
        assert_eq!(out.len(), 1);
        assert_eq!(filters.count("User"), 0);
    }
}
