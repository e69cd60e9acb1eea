//! Project configuration document.
//!
//! `crudo.config.json` lives at the project root and describes where
//! generated code goes and which project-wide defaults apply. Every section
//! is optional in the file; missing sections and keys fall back to the
//! defaults below, so partial configs stay valid.

use serde::{Deserialize, Serialize};

use crate::entity::{ListType, SurfaceType};

/// Root of `crudo.config.json`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub components: ComponentsConfig,
}

/// Output directories, relative to the project root, '/'-separated.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathsConfig {
    #[serde(default = "default_pages")]
    pub pages: String,
    #[serde(default = "default_components")]
    pub components: String,
    #[serde(default = "default_store")]
    pub store: String,
    #[serde(default = "default_hooks")]
    pub hooks: String,
    #[serde(default = "default_types")]
    pub types: String,
    #[serde(default = "default_tests")]
    pub tests: String,
}

/// Project-wide defaults entities can override.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultsConfig {
    #[serde(default = "default_list_type")]
    pub list_type: ListType,
    #[serde(default = "default_details_view")]
    pub details_view: SurfaceType,
    #[serde(default = "default_true")]
    pub tenant_scoped: bool,
    #[serde(default = "default_true")]
    pub generate_tests: bool,
}

/// Backend API conventions.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    #[serde(default)]
    pub response_shape: ResponseShape,
}

/// Field names of the backend's response envelope.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseShape {
    #[serde(default = "default_data_field")]
    pub data_field: String,
    #[serde(default = "default_status_field")]
    pub status_field: String,
    #[serde(default = "default_message_field")]
    pub message_field: String,
    #[serde(default = "default_meta_field")]
    pub meta_field: String,
}

/// Names of the shared components generated code imports.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentsConfig {
    #[serde(default = "default_table_component")]
    pub table_component: String,
    #[serde(default = "default_grid_component")]
    pub grid_component: String,
    #[serde(default = "default_form_layout")]
    pub form_layout: FormLayoutConfig,
}

/// Form layout selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormLayoutConfig {
    Vertical,
    Horizontal,
    Grid,
}

fn default_pages() -> String {
    "src/pages".to_string()
}

fn default_components() -> String {
    "src/components".to_string()
}

fn default_store() -> String {
    "src/store".to_string()
}

fn default_hooks() -> String {
    "src/hooks".to_string()
}

fn default_types() -> String {
    "src/types".to_string()
}

fn default_tests() -> String {
    "src/__tests__".to_string()
}

fn default_list_type() -> ListType {
    ListType::Table
}

fn default_details_view() -> SurfaceType {
    SurfaceType::Page
}

fn default_true() -> bool {
    true
}

fn default_data_field() -> String {
    "data".to_string()
}

fn default_status_field() -> String {
    "status".to_string()
}

fn default_message_field() -> String {
    "message".to_string()
}

fn default_meta_field() -> String {
    "meta".to_string()
}

fn default_table_component() -> String {
    "DataTable".to_string()
}

fn default_grid_component() -> String {
    "CardGrid".to_string()
}

fn default_form_layout() -> FormLayoutConfig {
    FormLayoutConfig::Vertical
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            pages: default_pages(),
            components: default_components(),
            store: default_store(),
            hooks: default_hooks(),
            types: default_types(),
            tests: default_tests(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            list_type: default_list_type(),
            details_view: default_details_view(),
            tenant_scoped: default_true(),
            generate_tests: default_true(),
        }
    }
}

impl Default for ResponseShape {
    fn default() -> Self {
        Self {
            data_field: default_data_field(),
            status_field: default_status_field(),
            message_field: default_message_field(),
            meta_field: default_meta_field(),
        }
    }
}

impl Default for ComponentsConfig {
    fn default() -> Self {
        Self {
            table_component: default_table_component(),
            grid_component: default_grid_component(),
            form_layout: default_form_layout(),
        }
    }
}
