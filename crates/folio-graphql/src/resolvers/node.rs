//! Node resolvers.

use std::collections::HashMap;
use std::sync::Arc;

use async_graphql::dynamic::{FieldFuture, ResolverContext};
use async_graphql::{Error, ErrorExtensions, Value};
use tracing::debug;

use super::parent_object;
use crate::error::GraphQLError;
use crate::relay::from_global_id;
use crate::types::ContentObject;

/// Resolver for the `id` field of node types.
pub struct GlobalIdResolver;

impl GlobalIdResolver {
    /// Creates a resolver returning the parent object's global ID.
    pub fn resolve() -> impl Fn(ResolverContext<'_>) -> FieldFuture<'_> + Send + Sync + Clone {
        |ctx| {
            FieldFuture::new(async move {
                let object = parent_object(&ctx)?;
                Ok(Some(Value::String(object.global_id())))
            })
        }
    }
}

/// Resolver for the `node(id: ID!)` root field.
pub struct NodeResolver;

impl NodeResolver {
    /// Creates a resolver decoding a global ID into a content object.
    ///
    /// `object_types` maps GraphQL type names to host object types. IDs of
    /// unknown types resolve to `null`; malformed IDs are errors.
    pub fn resolve(
        object_types: Arc<HashMap<String, String>>,
    ) -> impl Fn(ResolverContext<'_>) -> FieldFuture<'_> + Send + Sync + Clone {
        move |ctx| {
            let object_types = Arc::clone(&object_types);
            FieldFuture::new(async move {
                let global_id = ctx
                    .args
                    .get("id")
                    .and_then(|v| v.string().ok())
                    .ok_or_else(|| Error::new("Missing required argument 'id'"))?;

                let (type_name, local_id) =
                    from_global_id(global_id).map_err(|e| e.extend())?;

                let Some(object_type) = object_types.get(&type_name) else {
                    debug!(type_name = %type_name, "Global ID names an unregistered type");
                    return Ok(None);
                };

                let id = local_id.parse::<u64>().map_err(|_| {
                    GraphQLError::InvalidGlobalId(global_id.to_string()).extend()
                })?;

                Ok(Some(
                    ContentObject::new(type_name, object_type.clone(), id).into_typed_field_value(),
                ))
            })
        }
    }
}
