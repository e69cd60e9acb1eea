//! Entity schema document.
//!
//! One JSON file per entity describes the resource, its fields, and how its
//! CRUD surfaces should be presented. Parsing is intentionally permissive
//! about optional blocks; all defaulting happens later during normalization,
//! and cross-field rules live in [`crate::validate`].

use serde::{Deserialize, Serialize};

/// Root of an entity schema file.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySchema {
    /// Entity name in PascalCase, e.g. `Product`.
    pub entity: String,
    /// Plural display name, e.g. `Products`.
    pub plural: String,
    /// Route segment for generated pages, e.g. `products`.
    pub route: String,
    /// Backend endpoint the API slice targets.
    pub api_endpoint: String,
    /// Overrides the project-wide tenant scoping default when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_scoped: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    /// When absent, a fixed fallback (table list, dialog details, dialog
    /// create/edit) applies as a whole. A present block is taken as-is and
    /// never merged with the fallback key by key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<Views>,
    /// Fields in declaration order. Order is significant and preserved
    /// through every downstream stage.
    pub fields: Vec<FieldSchema>,
}

/// Pagination settings for the list view.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub default_page_size: u32,
    pub page_size_options: Vec<u32>,
}

/// The `views` block. All three surfaces must be declared when the block
/// is present.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Views {
    pub list: ListSpec,
    pub details: DetailsSpec,
    /// Same wire shape as `details` so a boolean here is rejected by
    /// validation with a proper message instead of a type error.
    #[serde(rename = "create/edit")]
    pub mutation: DetailsSpec,
}

/// List surface settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSpec {
    #[serde(rename = "type")]
    pub ty: ListType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_view: Option<ListType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_component: Option<String>,
}

/// List presentation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    Table,
    Grid,
    Both,
}

/// The details surface accepts either a boolean toggle or a full surface
/// object. `false` disables the surface; `true` asks for the documented
/// default (a dialog modal).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum DetailsSpec {
    Toggle(bool),
    View(SurfaceSpec),
}

/// Details or create/edit surface settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceSpec {
    #[serde(rename = "type")]
    pub ty: SurfaceType,
    /// Only meaningful for modal surfaces; defaults to a dialog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modal_type: Option<ModalType>,
}

/// Surface presentation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceType {
    Page,
    Modal,
}

/// Modal presentation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalType {
    Drawer,
    Dialog,
}

/// One field of the entity.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FieldSchema {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationSpec>,
    /// Required when `type` is `relation`, rejected otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<RelationSpec>,
    /// Free-form expression for computed fields; carried through to
    /// generated code as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui: Option<UiSpec>,
}

/// Declared field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
    Boolean,
    Date,
    Computed,
    Relation,
}

impl FieldType {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Date => "date",
            FieldType::Computed => "computed",
            FieldType::Relation => "relation",
        }
    }
}

/// Declarative validation rules. All knobs combine independently.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSpec {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    /// Semantic string validation. `uuid` is accepted for forward
    /// compatibility but emits no clause.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<ValidationType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// Semantic string validation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationType {
    Email,
    Url,
    Uuid,
}

/// Relation target for `relation` fields.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationSpec {
    /// Target entity name (PascalCase).
    pub entity: String,
    /// Field of the target shown to users.
    pub label_field: String,
    /// Field of the target stored as the value.
    pub value_field: String,
}

/// Presentation hints for a field.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UiSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form: Option<FormUi>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<TableUi>,
}

/// Form presentation hints.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormUi {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub exclude: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<FormComponent>,
    /// HTML input type override, e.g. `password`.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helper_text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOptionSpec>,
    /// Options endpoint for async selects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

/// Form widget selector. Variant names match the component names emitted
/// into generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum FormComponent {
    Input,
    Select,
    AsyncSelect,
    Checkbox,
    Textarea,
    DatePicker,
    Hidden,
}

/// One option of a static select.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SelectOptionSpec {
    pub label: String,
    pub value: String,
}

/// Table presentation hints.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TableUi {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub exclude: bool,
    /// Tri-state on purpose: only an explicit `false` hides the column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sortable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filterable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
}
