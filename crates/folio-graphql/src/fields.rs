//! Field definitions and field maps.
//!
//! `async_graphql::dynamic::Field` is consumed when it is attached to an
//! object, so field maps that must be filtered, sorted and cached hold
//! [`FieldDefinition`]s instead and materialize real fields at the end.

use std::fmt;
use std::sync::Arc;

use async_graphql::dynamic::{Field, FieldFuture, InputValue, ResolverContext, TypeRef};
use indexmap::IndexMap;

/// Shared resolver function.
pub type BoxResolverFn =
    Arc<dyn for<'a> Fn(ResolverContext<'a>) -> FieldFuture<'a> + Send + Sync>;

/// Ordered mapping of field name to field definition.
pub type FieldMap = IndexMap<String, FieldDefinition>;

/// A field's type, description, arguments and resolver.
#[derive(Clone)]
pub struct FieldDefinition {
    ty: TypeRef,
    description: Option<String>,
    arguments: Vec<(String, TypeRef, Option<String>)>,
    resolver: BoxResolverFn,
}

impl FieldDefinition {
    /// Creates a field definition with the given type and resolver.
    pub fn new<F>(ty: impl Into<TypeRef>, resolver: F) -> Self
    where
        F: for<'a> Fn(ResolverContext<'a>) -> FieldFuture<'a> + Send + Sync + 'static,
    {
        Self {
            ty: ty.into(),
            description: None,
            arguments: Vec::new(),
            resolver: Arc::new(resolver),
        }
    }

    /// Sets the field description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds an argument.
    #[must_use]
    pub fn argument(
        mut self,
        name: impl Into<String>,
        ty: impl Into<TypeRef>,
        description: Option<&str>,
    ) -> Self {
        self.arguments
            .push((name.into(), ty.into(), description.map(str::to_string)));
        self
    }

    /// Returns the field type.
    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }

    /// Returns the field description, if any.
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Materializes an `async_graphql` field with the given name.
    pub fn to_field(&self, name: &str) -> Field {
        let resolver = Arc::clone(&self.resolver);
        let mut field = Field::new(name, self.ty.clone(), move |ctx| resolver(ctx));

        if let Some(description) = &self.description {
            field = field.description(description.clone());
        }

        for (arg_name, arg_ty, arg_description) in &self.arguments {
            let mut input = InputValue::new(arg_name.clone(), arg_ty.clone());
            if let Some(d) = arg_description {
                input = input.description(d.clone());
            }
            field = field.argument(input);
        }

        field
    }
}

impl fmt::Debug for FieldDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDefinition")
            .field("ty", &self.ty.to_string())
            .field("description", &self.description)
            .field("arguments", &self.arguments.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_graphql::Value;

    fn constant(value: &'static str) -> FieldDefinition {
        FieldDefinition::new(TypeRef::named_nn(TypeRef::STRING), move |_| {
            FieldFuture::new(async move { Ok(Some(Value::String(value.to_string()))) })
        })
    }

    #[test]
    fn test_builder_accessors() {
        let def = constant("x").description("A constant");
        assert_eq!(def.ty().to_string(), "String!");
        assert_eq!(def.description_text(), Some("A constant"));
    }

    #[test]
    fn test_clone_shares_resolver() {
        let def = constant("x");
        let copy = def.clone();
        assert!(Arc::ptr_eq(&def.resolver, &copy.resolver));
    }

    #[test]
    fn test_debug_omits_resolver() {
        let rendered = format!("{:?}", constant("x"));
        assert!(rendered.contains("String!"));
        assert!(rendered.starts_with("FieldDefinition"));
    }
}
