//! GraphQL configuration.
//!
//! Configuration is read from the `[graphql]` section of the host's TOML
//! configuration.
//!
//! # Example Configuration
//!
//! ```toml
//! [graphql]
//! max_depth = 15
//! max_complexity = 500
//! introspection = true
//! query_type_name = "RootQuery"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::GraphQLError;
use crate::schema::SchemaBuilderConfig;
use crate::types::is_valid_graphql_name;

/// GraphQL schema configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQLConfig {
    /// Maximum query depth allowed.
    /// Default: 15
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Maximum query complexity allowed.
    /// Default: 500
    #[serde(default = "default_max_complexity")]
    pub max_complexity: usize,

    /// Enable GraphQL introspection queries.
    /// Default: true
    #[serde(default = "default_introspection")]
    pub introspection: bool,

    /// Name of the query root type.
    /// Default: "RootQuery"
    #[serde(default = "default_query_type_name")]
    pub query_type_name: String,
}

fn default_max_depth() -> usize {
    15
}

fn default_max_complexity() -> usize {
    500
}

fn default_introspection() -> bool {
    true
}

fn default_query_type_name() -> String {
    "RootQuery".to_string()
}

impl Default for GraphQLConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            max_complexity: default_max_complexity(),
            introspection: default_introspection(),
            query_type_name: default_query_type_name(),
        }
    }
}

impl GraphQLConfig {
    /// Parses and validates a configuration from TOML.
    ///
    /// # Errors
    ///
    /// Returns `GraphQLError::InvalidConfig` if the document does not parse
    /// or fails validation.
    pub fn from_toml_str(source: &str) -> Result<Self, GraphQLError> {
        let config: Self =
            toml::from_str(source).map_err(|e| GraphQLError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration values are invalid.
    pub fn validate(&self) -> Result<(), GraphQLError> {
        if self.max_depth == 0 {
            return Err(GraphQLError::InvalidConfig(
                "graphql.max_depth must be > 0".into(),
            ));
        }
        if self.max_complexity == 0 {
            return Err(GraphQLError::InvalidConfig(
                "graphql.max_complexity must be > 0".into(),
            ));
        }
        if !is_valid_graphql_name(&self.query_type_name) {
            return Err(GraphQLError::InvalidConfig(format!(
                "graphql.query_type_name \"{}\" is not a valid GraphQL name",
                self.query_type_name
            )));
        }
        Ok(())
    }

    /// Converts this config to a `SchemaBuilderConfig`.
    #[must_use]
    pub fn to_schema_builder_config(&self) -> SchemaBuilderConfig {
        SchemaBuilderConfig {
            max_depth: self.max_depth,
            max_complexity: self.max_complexity,
            introspection_enabled: self.introspection,
            query_type_name: self.query_type_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GraphQLConfig::default();
        assert_eq!(config.max_depth, 15);
        assert_eq!(config.max_complexity, 500);
        assert!(config.introspection);
        assert_eq!(config.query_type_name, "RootQuery");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_limits() {
        let mut config = GraphQLConfig::default();
        config.max_depth = 0;
        assert!(config.validate().is_err());

        let mut config = GraphQLConfig::default();
        config.max_complexity = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_query_type_name() {
        let mut config = GraphQLConfig::default();
        config.query_type_name = "Root-Query".into();
        let err = config.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIG");
    }

    #[test]
    fn test_from_toml() {
        let toml = r#"
            max_depth = 20
            introspection = false
            query_type_name = "Query"
        "#;

        let config = GraphQLConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.max_depth, 20);
        assert_eq!(config.max_complexity, 500);
        assert!(!config.introspection);

        let builder_config = config.to_schema_builder_config();
        assert_eq!(builder_config.query_type_name, "Query");
        assert!(!builder_config.introspection_enabled);
    }

    #[test]
    fn test_from_toml_rejects_zero_depth() {
        assert!(GraphQLConfig::from_toml_str("max_depth = 0").is_err());
    }
}
