//! Field resolvers for content objects.
//!
//! - `meta`: metadata fields read from the [`MetaStore`](folio_storage::MetaStore)
//! - `node`: the `id` global identifier field and the `node(id:)` root field

mod meta;
mod node;

pub use meta::MetaResolver;
pub use node::{GlobalIdResolver, NodeResolver};

use async_graphql::dynamic::ResolverContext;
use async_graphql::{Error, ErrorExtensions};

use crate::context::GraphQLContext;
use crate::error::GraphQLError;
use crate::types::ContentObject;

/// Helper to extract GraphQL context from resolver context.
pub(crate) fn get_graphql_context<'a>(
    ctx: &'a ResolverContext<'_>,
) -> Result<&'a GraphQLContext, Error> {
    ctx.data::<GraphQLContext>()
        .map_err(|_| Error::new("GraphQL context not available"))
}

/// Helper to extract the content object a field belongs to.
pub(crate) fn parent_object<'a>(ctx: &'a ResolverContext<'_>) -> Result<&'a ContentObject, Error> {
    ctx.parent_value
        .try_downcast_ref::<ContentObject>()
        .map_err(|_| Error::new("Parent value is not a content object"))
}

impl ErrorExtensions for GraphQLError {
    fn extend(&self) -> Error {
        let code = self.error_code();
        Error::new(self.to_string()).extend_with(|_, e| e.set("code", code.to_string()))
    }
}
