//! Value types shared by resolvers and schema assembly.
//!
//! - [`ContentObject`]: the parent value handed to content object resolvers
//! - [`is_valid_graphql_name`]: name validation for type and field names

mod object;

pub use object::ContentObject;

/// Checks that `name` is a legal GraphQL name (`[_A-Za-z][_0-9A-Za-z]*`)
/// and does not use the reserved `__` prefix.
pub fn is_valid_graphql_name(name: &str) -> bool {
    if name.starts_with("__") {
        return false;
    }

    let mut chars = name.chars();

    // First character must be underscore or letter
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }

    chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(is_valid_graphql_name("color"));
        assert!(is_valid_graphql_name("_thumbnail_id"));
        assert!(is_valid_graphql_name("Post2"));
    }

    #[test]
    fn test_invalid_names() {
        assert!(!is_valid_graphql_name(""));
        assert!(!is_valid_graphql_name("2fast"));
        assert!(!is_valid_graphql_name("wp-color"));
        assert!(!is_valid_graphql_name("__typename"));
        assert!(!is_valid_graphql_name("caf\u{e9}"));
    }
}
