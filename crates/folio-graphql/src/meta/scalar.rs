//! Mapping of metadata kinds onto GraphQL scalar types.

use std::fmt;

use async_graphql::dynamic::TypeRef;
use async_graphql::{Number, Value};
use serde::{Deserialize, Serialize};

/// Coarse semantic kind of a metadata value.
///
/// Parsing from text is total: anything not recognized is a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ScalarKind {
    /// `integer`
    Integer,
    /// `float`
    Float,
    /// `boolean`
    Boolean,
    /// `string` and every unrecognized kind
    String,
}

impl ScalarKind {
    /// Parses a kind name.
    pub fn parse(kind: &str) -> Self {
        match kind {
            "integer" => Self::Integer,
            "float" => Self::Float,
            "boolean" => Self::Boolean,
            _ => Self::String,
        }
    }

    /// Returns the canonical kind name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::String => "string",
        }
    }

    /// Returns the built-in GraphQL scalar for this kind.
    pub fn graphql_scalar(&self) -> &'static str {
        match self {
            Self::Integer => TypeRef::INT,
            Self::Float => TypeRef::FLOAT,
            Self::Boolean => TypeRef::BOOLEAN,
            Self::String => TypeRef::STRING,
        }
    }
}

impl From<String> for ScalarKind {
    fn from(kind: String) -> Self {
        Self::parse(&kind)
    }
}

impl From<&str> for ScalarKind {
    fn from(kind: &str) -> Self {
        Self::parse(kind)
    }
}

impl From<ScalarKind> for String {
    fn from(kind: ScalarKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a metadata key holds one value or many.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cardinality {
    /// A single value.
    One,
    /// A list of values.
    Many,
}

impl Cardinality {
    /// Maps the host's `single` flag onto a cardinality.
    pub fn from_single(single: bool) -> Self {
        if single { Self::One } else { Self::Many }
    }

    /// Returns `true` for [`Cardinality::One`].
    pub fn is_single(&self) -> bool {
        matches!(self, Self::One)
    }
}

/// Resolves the GraphQL type of a metadata field.
pub fn resolve_meta_type(kind: ScalarKind, cardinality: Cardinality) -> TypeRef {
    match cardinality {
        Cardinality::One => TypeRef::named(kind.graphql_scalar()),
        Cardinality::Many => TypeRef::named_list(kind.graphql_scalar()),
    }
}

/// Converts a stored metadata value into the scalar kind's output value.
///
/// Hosts usually persist metadata as text, so numeric and boolean kinds
/// accept their textual forms. Values that cannot be converted become
/// `null`.
pub fn coerce_meta_value(kind: ScalarKind, value: serde_json::Value) -> Value {
    use serde_json::Value as Json;

    match (kind, value) {
        (_, Json::Null) => Value::Null,

        (ScalarKind::Integer, Json::Number(n)) => match n.as_i64() {
            Some(i) => Value::Number(i.into()),
            None => n
                .as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map_or(Value::Null, |f| Value::Number((f as i64).into())),
        },
        (ScalarKind::Integer, Json::String(s)) => s
            .trim()
            .parse::<i64>()
            .map_or(Value::Null, |i| Value::Number(i.into())),
        (ScalarKind::Integer, Json::Bool(b)) => Value::Number(i64::from(b).into()),

        (ScalarKind::Float, Json::Number(n)) => float_value(n.as_f64()),
        (ScalarKind::Float, Json::String(s)) => float_value(s.trim().parse::<f64>().ok()),

        (ScalarKind::Boolean, Json::Bool(b)) => Value::Boolean(b),
        (ScalarKind::Boolean, Json::Number(n)) => {
            Value::Boolean(n.as_f64().is_some_and(|f| f != 0.0))
        }
        (ScalarKind::Boolean, Json::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Value::Boolean(true),
            "" | "0" | "false" | "no" | "off" => Value::Boolean(false),
            _ => Value::Null,
        },

        (ScalarKind::String, Json::String(s)) => Value::String(s),
        (ScalarKind::String, Json::Number(n)) => Value::String(n.to_string()),
        (ScalarKind::String, Json::Bool(b)) => Value::String(b.to_string()),

        // Arrays and objects have no scalar form
        _ => Value::Null,
    }
}

fn float_value(f: Option<f64>) -> Value {
    f.and_then(Number::from_f64).map_or(Value::Null, Value::Number)
}
