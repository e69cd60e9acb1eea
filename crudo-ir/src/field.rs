//! Canonical field data.
//!
//! Every field carries its fully resolved form control, table column, and
//! validation clause chain. Templates never look at raw `ui` blocks.

use serde::Serialize;

/// Semantic field type - what kind of value the field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticType {
    /// Free-form text (also covers computed expressions).
    Text,
    Number,
    Boolean,
    Datetime,
    /// Opaque key referencing another entity.
    Identifier,
}

impl SemanticType {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticType::Text => "text",
            SemanticType::Number => "number",
            SemanticType::Boolean => "boolean",
            SemanticType::Datetime => "datetime",
            SemanticType::Identifier => "identifier",
        }
    }

    /// TypeScript type emitted for this semantic type.
    pub fn ts_type(&self) -> &'static str {
        match self {
            SemanticType::Text => "string",
            SemanticType::Number => "number",
            SemanticType::Boolean => "boolean",
            SemanticType::Datetime => "Date",
            SemanticType::Identifier => "string",
        }
    }

    /// Initial-value literal emitted for form state.
    pub fn default_literal(&self) -> &'static str {
        match self {
            SemanticType::Text => "''",
            SemanticType::Number => "0",
            SemanticType::Boolean => "false",
            SemanticType::Datetime => "new Date()",
            SemanticType::Identifier => "''",
        }
    }

    /// Base Yup schema constructor for this semantic type.
    ///
    /// Only numbers get `yup.number()`; everything else validates as a
    /// string, including booleans and dates.
    pub fn yup_base(&self) -> &'static str {
        match self {
            SemanticType::Number => "number",
            _ => "string",
        }
    }
}

/// A single validation clause in a field's Yup chain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationClause {
    pub kind: ClauseKind,
    /// User-facing message, already interpolated.
    pub message: String,
    /// Threshold or pattern argument, when the clause takes one.
    pub param: Option<ClauseParam>,
}

impl ValidationClause {
    /// Render this clause as a Yup method call, e.g. `.min(3, 'Must be at least 3')`.
    pub fn as_yup_call(&self) -> String {
        match &self.param {
            Some(param) => format!(
                ".{}({}, '{}')",
                self.kind.yup_method(),
                param.to_code_string(),
                self.message
            ),
            None => format!(".{}('{}')", self.kind.yup_method(), self.message),
        }
    }
}

/// Kind of validation clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ClauseKind {
    Required,
    Email,
    Url,
    Min,
    Max,
    MinLength,
    MaxLength,
    Pattern,
}

impl ClauseKind {
    /// The Yup method implementing this clause.
    ///
    /// Length bounds reuse `.min()`/`.max()` on string schemas.
    pub fn yup_method(&self) -> &'static str {
        match self {
            ClauseKind::Required => "required",
            ClauseKind::Email => "email",
            ClauseKind::Url => "url",
            ClauseKind::Min | ClauseKind::MinLength => "min",
            ClauseKind::Max | ClauseKind::MaxLength => "max",
            ClauseKind::Pattern => "matches",
        }
    }
}

/// A clause argument.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ClauseParam {
    Number(f64),
    Integer(u64),
    Pattern(String),
}

impl ClauseParam {
    /// Convert to a code representation suitable for a Yup call.
    pub fn to_code_string(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Integer(n) => n.to_string(),
            Self::Pattern(p) => format!("/{p}/"),
        }
    }
}

/// Form widget rendered for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormWidget {
    Input,
    Select,
    AsyncSelect,
    Checkbox,
    Textarea,
    DatePicker,
    Hidden,
}

impl FormWidget {
    /// Component name as it appears in generated code.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormWidget::Input => "Input",
            FormWidget::Select => "Select",
            FormWidget::AsyncSelect => "AsyncSelect",
            FormWidget::Checkbox => "Checkbox",
            FormWidget::Textarea => "Textarea",
            FormWidget::DatePicker => "DatePicker",
            FormWidget::Hidden => "Hidden",
        }
    }
}

/// One option of a select widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

/// Fully resolved form control for a field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormControl {
    pub widget: FormWidget,
    /// HTML input type override, e.g. `password`.
    pub input_type: Option<String>,
    pub label: String,
    pub placeholder: Option<String>,
    pub helper_text: Option<String>,
    /// Static options for select widgets; empty otherwise.
    pub options: Vec<SelectOption>,
    /// Options endpoint for async selects.
    pub endpoint: Option<String>,
}

/// Fully resolved table column for a field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableColumn {
    pub header: String,
    pub sortable: bool,
    pub filterable: bool,
}

/// Relation metadata for identifier fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationTarget {
    /// Target entity name (PascalCase).
    pub entity: String,
    /// Field of the target shown to users.
    pub label_field: String,
    /// Field of the target stored as the value.
    pub value_field: String,
}

/// A field with all defaults applied and all derivations precomputed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalField {
    pub name: String,
    pub semantic_type: SemanticType,
    /// Initial-value literal for form state.
    pub default_literal: String,
    /// Whether the field carries a `required` clause.
    pub required: bool,
    /// Yup clauses in render order.
    pub clauses: Vec<ValidationClause>,
    pub include_in_form: bool,
    pub include_in_table: bool,
    pub form: FormControl,
    pub table: TableColumn,
    pub relation: Option<RelationTarget>,
    /// Declared as a computed field, with or without an expression.
    pub computed: bool,
    /// Free-form expression for computed fields.
    pub computation: Option<String>,
}

impl CanonicalField {
    /// Render the complete Yup schema expression for this field.
    pub fn yup_schema(&self) -> String {
        let mut schema = format!("yup.{}()", self.semantic_type.yup_base());
        for clause in &self.clauses {
            schema.push_str(&clause.as_yup_call());
        }
        schema
    }

    /// TypeScript type of this field.
    pub fn ts_type(&self) -> &'static str {
        self.semantic_type.ts_type()
    }

    /// Returns true if this field is a computed expression.
    pub fn is_computed(&self) -> bool {
        self.computed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_field(name: &str) -> CanonicalField {
        CanonicalField {
            name: name.to_string(),
            semantic_type: SemanticType::Text,
            default_literal: SemanticType::Text.default_literal().to_string(),
            required: false,
            clauses: vec![],
            include_in_form: true,
            include_in_table: true,
            form: FormControl {
                widget: FormWidget::Input,
                input_type: None,
                label: name.to_string(),
                placeholder: None,
                helper_text: None,
                options: vec![],
                endpoint: None,
            },
            table: TableColumn {
                header: name.to_string(),
                sortable: false,
                filterable: false,
            },
            relation: None,
            computed: false,
            computation: None,
        }
    }

    #[test]
    fn test_semantic_type_ts_type() {
        assert_eq!(SemanticType::Text.ts_type(), "string");
        assert_eq!(SemanticType::Number.ts_type(), "number");
        assert_eq!(SemanticType::Boolean.ts_type(), "boolean");
        assert_eq!(SemanticType::Datetime.ts_type(), "Date");
        assert_eq!(SemanticType::Identifier.ts_type(), "string");
    }

    #[test]
    fn test_semantic_type_default_literal() {
        assert_eq!(SemanticType::Text.default_literal(), "''");
        assert_eq!(SemanticType::Number.default_literal(), "0");
        assert_eq!(SemanticType::Boolean.default_literal(), "false");
        assert_eq!(SemanticType::Datetime.default_literal(), "new Date()");
        assert_eq!(SemanticType::Identifier.default_literal(), "''");
    }

    #[test]
    fn test_yup_base_only_numbers_are_numbers() {
        assert_eq!(SemanticType::Number.yup_base(), "number");
        assert_eq!(SemanticType::Boolean.yup_base(), "string");
        assert_eq!(SemanticType::Datetime.yup_base(), "string");
    }

    #[test]
    fn test_clause_as_yup_call() {
        let required = ValidationClause {
            kind: ClauseKind::Required,
            message: "Email is required".to_string(),
            param: None,
        };
        assert_eq!(required.as_yup_call(), ".required('Email is required')");

        let min = ValidationClause {
            kind: ClauseKind::Min,
            message: "Must be at least 3".to_string(),
            param: Some(ClauseParam::Number(3.0)),
        };
        assert_eq!(min.as_yup_call(), ".min(3, 'Must be at least 3')");

        let max_length = ValidationClause {
            kind: ClauseKind::MaxLength,
            message: "Must be at most 80 characters".to_string(),
            param: Some(ClauseParam::Integer(80)),
        };
        assert_eq!(
            max_length.as_yup_call(),
            ".max(80, 'Must be at most 80 characters')"
        );

        let pattern = ValidationClause {
            kind: ClauseKind::Pattern,
            message: "Invalid format".to_string(),
            param: Some(ClauseParam::Pattern("^[A-Z]+$".to_string())),
        };
        assert_eq!(
            pattern.as_yup_call(),
            ".matches(/^[A-Z]+$/, 'Invalid format')"
        );
    }

    #[test]
    fn test_field_yup_schema_chains_clauses() {
        let mut field = text_field("email");
        field.clauses = vec![
            ValidationClause {
                kind: ClauseKind::Required,
                message: "email is required".to_string(),
                param: None,
            },
            ValidationClause {
                kind: ClauseKind::Email,
                message: "Invalid email address".to_string(),
                param: None,
            },
        ];
        assert_eq!(
            field.yup_schema(),
            "yup.string().required('email is required').email('Invalid email address')"
        );
    }

    #[test]
    fn test_field_yup_schema_without_clauses() {
        let field = text_field("notes");
        assert_eq!(field.yup_schema(), "yup.string()");
    }
}
