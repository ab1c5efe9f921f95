//! GraphQL execution context.
//!
//! The context carries the per-request dependencies that field resolvers
//! need. It is attached to each `async_graphql::Request` with `.data(...)`.
//!
//! # Example
//!
//! ```ignore
//! use folio_graphql::GraphQLContextBuilder;
//!
//! let context = GraphQLContextBuilder::new()
//!     .with_meta_store(store.clone())
//!     .with_request_id("req-123")
//!     .build()?;
//!
//! let response = schema.execute(Request::new(query).data(context)).await;
//! ```

use folio_storage::DynMetaStore;

/// GraphQL execution context.
///
/// Cheap to clone; shared state is held behind `Arc`.
#[derive(Clone)]
pub struct GraphQLContext {
    /// Per-object metadata store read by meta fields.
    pub meta_store: DynMetaStore,

    /// Request ID for tracing and correlation.
    pub request_id: String,
}

impl GraphQLContext {
    /// Creates a new builder for GraphQLContext.
    #[must_use]
    pub fn builder() -> GraphQLContextBuilder {
        GraphQLContextBuilder::default()
    }
}

/// Builder for constructing GraphQLContext.
#[derive(Default)]
pub struct GraphQLContextBuilder {
    meta_store: Option<DynMetaStore>,
    request_id: Option<String>,
}

impl GraphQLContextBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the metadata store.
    #[must_use]
    pub fn with_meta_store(mut self, store: DynMetaStore) -> Self {
        self.meta_store = Some(store);
        self
    }

    /// Sets the request ID.
    #[must_use]
    pub fn with_request_id(mut self, id: impl Into<String>) -> Self {
        self.request_id = Some(id.into());
        self
    }

    /// Builds the GraphQLContext.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<GraphQLContext, ContextBuilderError> {
        let meta_store = self
            .meta_store
            .ok_or(ContextBuilderError::MissingField("meta_store"))?;

        let request_id = self
            .request_id
            .ok_or(ContextBuilderError::MissingField("request_id"))?;

        Ok(GraphQLContext {
            meta_store,
            request_id,
        })
    }
}

/// Errors that can occur when building a GraphQLContext.
#[derive(Debug, thiserror::Error)]
pub enum ContextBuilderError {
    /// A required field was not provided.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use folio_storage::InMemoryMetaStore;

    #[test]
    fn test_builder_missing_meta_store() {
        let result = GraphQLContextBuilder::new()
            .with_request_id("req-123")
            .build();

        assert!(matches!(
            result,
            Err(ContextBuilderError::MissingField("meta_store"))
        ));
    }

    #[test]
    fn test_builder_missing_request_id() {
        let result = GraphQLContext::builder()
            .with_meta_store(Arc::new(InMemoryMetaStore::new()))
            .build();

        assert!(matches!(
            result,
            Err(ContextBuilderError::MissingField("request_id"))
        ));
    }

    #[test]
    fn test_builder_complete() {
        let context = GraphQLContext::builder()
            .with_meta_store(Arc::new(InMemoryMetaStore::new()))
            .with_request_id("req-1")
            .build()
            .unwrap();
        assert_eq!(context.request_id, "req-1");
    }
}
