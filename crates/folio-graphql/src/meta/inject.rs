//! Meta-field injection.

use tracing::{debug, trace};

use super::registry::MetaRegistry;
use super::scalar::resolve_meta_type;
use crate::error::GraphQLError;
use crate::fields::{FieldDefinition, FieldMap};
use crate::resolvers::MetaResolver;

/// Adds a field for every exposed metadata key registered for `object_type`.
///
/// Keys are visited in registration order. A key that collides with a field
/// already in `fields` aborts the whole operation, whether or not the key is
/// exposed. Hidden keys are skipped without a trace in the output.
///
/// # Errors
///
/// Returns `GraphQLError::ReservedMetaKey` naming the first colliding key.
pub fn add_meta_fields(
    mut fields: FieldMap,
    object_type: &str,
    registry: &MetaRegistry,
) -> Result<FieldMap, GraphQLError> {
    let Some(keys) = registry.registered_keys(object_type) else {
        return Ok(fields);
    };

    let mut added = 0usize;
    for (key, meta) in keys {
        if fields.contains_key(key) {
            return Err(GraphQLError::reserved_meta_key(object_type, key));
        }
        if !meta.exposed {
            trace!(object_type, key = %key, "Skipping hidden meta key");
            continue;
        }

        let mut field = FieldDefinition::new(
            resolve_meta_type(meta.kind, meta.cardinality),
            MetaResolver::resolve(key.clone(), meta.kind, meta.cardinality),
        );
        if !meta.description.is_empty() {
            field = field.description(meta.description.clone());
        }

        fields.insert(key.clone(), field);
        added += 1;
    }

    debug!(object_type, added, "Added meta fields");
    Ok(fields)
}
