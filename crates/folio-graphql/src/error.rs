//! Error types for GraphQL schema assembly.
//!
//! Schema assembly is fail-fast: any error raised while a type's field map is
//! being built aborts that build and propagates to the caller.

use folio_storage::StorageError;

/// Errors that can occur while assembling or serving the schema.
#[derive(Debug, thiserror::Error)]
pub enum GraphQLError {
    /// A registered meta key collides with a field the type already defines.
    #[error("Meta key \"{key}\" on {object_type} is a reserved word.")]
    ReservedMetaKey {
        /// Object type the key was registered for.
        object_type: String,
        /// The colliding key.
        key: String,
    },

    /// A meta key cannot be exposed as a GraphQL field name.
    #[error("Invalid meta key \"{key}\" for {object_type}: {reason}")]
    InvalidMetaKey {
        /// Object type the key was registered for.
        object_type: String,
        /// The rejected key.
        key: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A meta key was registered twice for the same object type.
    #[error("Meta key \"{key}\" is already registered for {object_type}")]
    DuplicateMetaKey {
        /// Object type the key was registered for.
        object_type: String,
        /// The duplicated key.
        key: String,
    },

    /// The meta catalogue document could not be parsed.
    #[error("Invalid meta catalogue: {0}")]
    InvalidCatalogue(String),

    /// Configuration failed validation.
    #[error("Invalid GraphQL configuration: {0}")]
    InvalidConfig(String),

    /// A global ID could not be decoded.
    #[error("Invalid global ID: {0}")]
    InvalidGlobalId(String),

    /// Schema build failed.
    #[error("Failed to build GraphQL schema: {0}")]
    SchemaBuildFailed(String),

    /// Metadata store error.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl GraphQLError {
    /// Creates a new `ReservedMetaKey` error.
    #[must_use]
    pub fn reserved_meta_key(object_type: impl Into<String>, key: impl Into<String>) -> Self {
        Self::ReservedMetaKey {
            object_type: object_type.into(),
            key: key.into(),
        }
    }

    /// Creates a new `InvalidMetaKey` error.
    #[must_use]
    pub fn invalid_meta_key(
        object_type: impl Into<String>,
        key: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidMetaKey {
            object_type: object_type.into(),
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Returns the error code for GraphQL error extensions.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ReservedMetaKey { .. } => "RESERVED_META_KEY",
            Self::InvalidMetaKey { .. } => "INVALID_META_KEY",
            Self::DuplicateMetaKey { .. } => "DUPLICATE_META_KEY",
            Self::InvalidCatalogue(_) => "INVALID_CATALOGUE",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::InvalidGlobalId(_) => "INVALID_GLOBAL_ID",
            Self::SchemaBuildFailed(_) => "SCHEMA_BUILD_FAILED",
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_key_message_names_key() {
        let err = GraphQLError::reserved_meta_key("post", "color");
        assert_eq!(
            err.to_string(),
            "Meta key \"color\" on post is a reserved word."
        );
        assert_eq!(err.error_code(), "RESERVED_META_KEY");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            GraphQLError::invalid_meta_key("post", "bad-key", "not a name").error_code(),
            "INVALID_META_KEY"
        );
        assert_eq!(
            GraphQLError::InvalidGlobalId("x".into()).error_code(),
            "INVALID_GLOBAL_ID"
        );
    }

    #[test]
    fn test_storage_conversion() {
        let err: GraphQLError = StorageError::internal("down").into();
        assert_eq!(err.error_code(), "STORAGE_ERROR");
    }
}
