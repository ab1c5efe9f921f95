//! Content object parent value.

use async_graphql::dynamic::FieldValue;

use crate::relay::to_global_id;

/// A content object as seen by field resolvers.
///
/// Resolvers returning a content object wrap it with [`ContentObject::into_field_value`];
/// the fields of the object's type then downcast their parent value back to
/// `ContentObject` to find the object's identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentObject {
    /// GraphQL type name (e.g. "Post").
    pub type_name: String,
    /// Host object type used to address metadata (e.g. "post").
    pub object_type: String,
    /// Host object identifier.
    pub id: u64,
}

impl ContentObject {
    /// Creates a new content object reference.
    #[must_use]
    pub fn new(type_name: impl Into<String>, object_type: impl Into<String>, id: u64) -> Self {
        Self {
            type_name: type_name.into(),
            object_type: object_type.into(),
            id,
        }
    }

    /// Returns the Relay global ID of this object.
    #[must_use]
    pub fn global_id(&self) -> String {
        to_global_id(&self.type_name, &self.id.to_string())
    }

    /// Wraps the object as the output of an object-typed field.
    #[must_use]
    pub fn into_field_value<'a>(self) -> FieldValue<'a> {
        FieldValue::owned_any(self)
    }

    /// Wraps the object tagged with its concrete type, for fields typed with
    /// an interface such as `Node`.
    #[must_use]
    pub fn into_typed_field_value<'a>(self) -> FieldValue<'a> {
        let type_name = self.type_name.clone();
        FieldValue::owned_any(self).with_type(type_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::from_global_id;

    #[test]
    fn test_global_id_round_trips_type_and_id() {
        let object = ContentObject::new("Post", "post", 42);
        let (type_name, id) = from_global_id(&object.global_id()).unwrap();
        assert_eq!(type_name, "Post");
        assert_eq!(id, "42");
    }
}
