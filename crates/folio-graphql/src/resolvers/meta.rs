//! Metadata field resolver.
//!
//! Meta fields are resolved lazily: every resolution reads the parent
//! object's values from the metadata store. Nothing is batched or cached.

use async_graphql::dynamic::{FieldFuture, ResolverContext};
use async_graphql::{ErrorExtensions, Value};
use tracing::{trace, warn};

use super::{get_graphql_context, parent_object};
use crate::error::GraphQLError;
use crate::meta::{Cardinality, ScalarKind, coerce_meta_value};

/// Resolver for registered metadata keys.
pub struct MetaResolver;

impl MetaResolver {
    /// Creates a resolver function reading `key` from the parent object's
    /// metadata.
    ///
    /// Single-valued keys resolve to the first stored value or `null`;
    /// multi-valued keys resolve to every stored value (possibly empty).
    pub fn resolve(
        key: String,
        kind: ScalarKind,
        cardinality: Cardinality,
    ) -> impl Fn(ResolverContext<'_>) -> FieldFuture<'_> + Send + Sync + Clone {
        move |ctx| {
            let key = key.clone();
            FieldFuture::new(async move {
                let object = parent_object(&ctx)?;
                let gql_ctx = get_graphql_context(&ctx)?;

                trace!(
                    request_id = %gql_ctx.request_id,
                    object_type = %object.object_type,
                    object_id = object.id,
                    key = %key,
                    "Resolving meta field"
                );

                let values = gql_ctx
                    .meta_store
                    .get_meta(&object.object_type, object.id, &key)
                    .await
                    .map_err(|e| {
                        warn!(
                            error = %e,
                            category = %e.category(),
                            key = %key,
                            "Storage error reading meta"
                        );
                        GraphQLError::from(e).extend()
                    })?;

                let value = match cardinality {
                    Cardinality::One => values
                        .into_iter()
                        .next()
                        .map(|v| coerce_meta_value(kind, v)),
                    Cardinality::Many => Some(Value::List(
                        values
                            .into_iter()
                            .map(|v| coerce_meta_value(kind, v))
                            .collect(),
                    )),
                };

                Ok(value)
            })
        }
    }
}
