// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod entity;
mod error;
mod validate;

use std::path::Path;

pub use config::{
    ApiConfig, ComponentsConfig, DefaultsConfig, FormLayoutConfig, PathsConfig, ProjectConfig,
    ResponseShape,
};
pub use entity::{
    DetailsSpec, EntitySchema, FieldSchema, FieldType, FormComponent, FormUi, ListSpec, ListType,
    ModalType, Pagination, RelationSpec, SelectOptionSpec, SurfaceSpec, SurfaceType, TableUi,
    UiSpec, ValidationSpec, ValidationType, Views,
};
pub use error::{Error, Result};

/// Name of the project configuration file, looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "crudo.config.json";

/// Parse and validate an entity schema from the given path
pub fn parse_entity_file(path: impl AsRef<Path>) -> Result<EntitySchema> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    let filename = path.display().to_string();
    parse_entity_str_with_filename(&content, &filename)
}

/// Parse and validate an entity schema from a string (uses "entity.json" as default filename)
pub fn parse_entity_str(content: &str) -> Result<EntitySchema> {
    parse_entity_str_with_filename(content, "entity.json")
}

/// Parse and validate an entity schema from a string with a custom filename for error reporting
pub fn parse_entity_str_with_filename(content: &str, filename: &str) -> Result<EntitySchema> {
    let schema: EntitySchema = serde_json::from_str(content)
        .map_err(|e| Error::parse(e, "entity schema", content, filename))?;

    schema.validate(content, filename)?;
    Ok(schema)
}

/// Parse a project config from the given path
pub fn parse_config_file(path: impl AsRef<Path>) -> Result<ProjectConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    let filename = path.display().to_string();
    parse_config_str_with_filename(&content, &filename)
}

/// Parse a project config from a string (uses the config file name for error reporting)
pub fn parse_config_str(content: &str) -> Result<ProjectConfig> {
    parse_config_str_with_filename(content, CONFIG_FILE_NAME)
}

/// Parse a project config from a string with a custom filename for error reporting
pub fn parse_config_str_with_filename(content: &str, filename: &str) -> Result<ProjectConfig> {
    serde_json::from_str(content).map_err(|e| Error::parse(e, "project config", content, filename))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entity_str_validates() {
        let src = r#"{
            "entity": "Product",
            "plural": "Products",
            "route": "products",
            "apiEndpoint": "/api/v1/products",
            "fields": [
                { "name": "categoryId", "type": "relation" }
            ]
        }"#;

        let err = parse_entity_str(src).unwrap_err();
        assert!(err.to_string().contains("no relation target"));
    }

    #[test]
    fn test_parse_entity_str_reports_parse_errors() {
        let err = parse_entity_str("{ not json").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
        assert!(err.to_string().contains("entity schema"));
    }

    #[test]
    fn test_parse_config_str_defaults_missing_sections() {
        let config = parse_config_str("{}").unwrap();
        assert_eq!(config.paths.hooks, "src/hooks");
        assert!(config.defaults.generate_tests);
    }

    #[test]
    fn test_parse_entity_file_missing_path() {
        let err = parse_entity_file("does/not/exist.json").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
