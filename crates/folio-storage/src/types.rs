//! Storage types for the metadata store.

use std::fmt;

/// Address of a metadata entry: one key on one object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MetaKey {
    /// The host object type (e.g. "post", "user").
    pub object_type: String,
    /// The object identifier.
    pub object_id: u64,
    /// The metadata key.
    pub key: String,
}

impl MetaKey {
    /// Creates a new `MetaKey`.
    #[must_use]
    pub fn new(object_type: impl Into<String>, object_id: u64, key: impl Into<String>) -> Self {
        Self {
            object_type: object_type.into(),
            object_id,
            key: key.into(),
        }
    }
}

impl fmt::Display for MetaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}#{}", self.object_type, self.object_id, self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_key_display() {
        let key = MetaKey::new("post", 7, "color");
        assert_eq!(key.to_string(), "post/7#color");
    }
}
