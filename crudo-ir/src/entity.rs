//! Canonical entity data.
//!
//! This is the root value handed to every template. It folds in the slices
//! of the project configuration that generated code depends on (API response
//! shape, shared component names) so templates take exactly one argument.

use serde::Serialize;

use crate::{CanonicalField, ViewPlan};

/// Resolved pagination settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationPlan {
    pub default_page_size: u32,
    pub page_size_options: Vec<u32>,
}

/// API envelope field names used by generated endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiShape {
    pub data_field: String,
    pub status_field: String,
    pub message_field: String,
    pub meta_field: String,
}

/// Form layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormLayout {
    Vertical,
    Horizontal,
    Grid,
}

impl FormLayout {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormLayout::Vertical => "vertical",
            FormLayout::Horizontal => "horizontal",
            FormLayout::Grid => "grid",
        }
    }
}

/// Shared component names generated code imports.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentNames {
    pub table_component: String,
    pub grid_component: String,
    pub form_layout: FormLayout,
}

/// An entity with every default applied and every derivation precomputed.
///
/// Produced by normalization, consumed by templates. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalEntity {
    /// Entity name as declared (PascalCase).
    pub name: String,
    /// Plural display name.
    pub plural: String,
    /// Route segment for pages.
    pub route: String,
    /// Backend endpoint for the API slice.
    pub api_endpoint: String,
    pub tenant_scoped: bool,
    pub pagination: PaginationPlan,
    pub views: ViewPlan,
    /// All fields in declaration order.
    pub fields: Vec<CanonicalField>,
    pub api: ApiShape,
    pub components: ComponentNames,
}

impl CanonicalEntity {
    /// Fields rendered in the form, in declaration order.
    pub fn form_fields(&self) -> Vec<&CanonicalField> {
        self.fields.iter().filter(|f| f.include_in_form).collect()
    }

    /// Fields rendered as table columns, in declaration order.
    pub fn table_fields(&self) -> Vec<&CanonicalField> {
        self.fields.iter().filter(|f| f.include_in_table).collect()
    }

    /// Computed fields, in declaration order.
    pub fn computed_fields(&self) -> Vec<&CanonicalField> {
        self.fields.iter().filter(|f| f.is_computed()).collect()
    }

    /// Returns true if any field references another entity.
    pub fn has_relations(&self) -> bool {
        self.fields.iter().any(|f| f.relation.is_some())
    }
}
