//! Relay global object identifiers.
//!
//! A global ID is the base64 encoding of `"<TypeName>:<id>"`, which lets the
//! `node` root field recover both the concrete type and the host identifier.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::GraphQLError;

/// Encodes a type name and local identifier into a global ID.
pub fn to_global_id(type_name: &str, id: &str) -> String {
    STANDARD.encode(format!("{type_name}:{id}"))
}

/// Decodes a global ID into `(type_name, id)`.
///
/// # Errors
///
/// Returns `GraphQLError::InvalidGlobalId` if the input is not base64, not
/// UTF-8, or lacks a non-empty type name and identifier.
pub fn from_global_id(global_id: &str) -> Result<(String, String), GraphQLError> {
    let bytes = STANDARD
        .decode(global_id)
        .map_err(|_| GraphQLError::InvalidGlobalId(global_id.to_string()))?;
    let decoded =
        String::from_utf8(bytes).map_err(|_| GraphQLError::InvalidGlobalId(global_id.to_string()))?;

    match decoded.split_once(':') {
        Some((type_name, id)) if !type_name.is_empty() && !id.is_empty() => {
            Ok((type_name.to_string(), id.to_string()))
        }
        _ => Err(GraphQLError::InvalidGlobalId(global_id.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_encoding() {
        assert_eq!(to_global_id("Post", "1"), "UG9zdDox");
        assert_eq!(
            from_global_id("UG9zdDox").unwrap(),
            ("Post".to_string(), "1".to_string())
        );
    }

    #[test]
    fn test_id_may_contain_separator() {
        let id = to_global_id("Term", "category:7");
        let (type_name, local) = from_global_id(&id).unwrap();
        assert_eq!(type_name, "Term");
        assert_eq!(local, "category:7");
    }

    #[test]
    fn test_rejects_malformed_ids() {
        assert!(from_global_id("not base64!").is_err());
        // "Post" without a separator
        assert!(from_global_id("UG9zdA==").is_err());
        // ":1" has no type name
        assert!(from_global_id(&STANDARD.encode(":1")).is_err());
    }
}
