//! Semantic validation of parsed entity schemas.
//!
//! Shape errors are caught by serde; everything here is a rule the document
//! shape cannot express. Validation runs before any normalization or file
//! write, so a rejected schema never leaves artifacts behind.

use std::collections::HashSet;

use miette::SourceSpan;

use crate::entity::{DetailsSpec, EntitySchema, FieldSchema, FieldType, Pagination};
use crate::error::{Error, Result};

impl EntitySchema {
    /// Validate cross-field rules after parsing.
    pub fn validate(&self, src: &str, filename: &str) -> Result<()> {
        validate_name(&self.entity, "entity", src, filename)?;

        if self.plural.trim().is_empty() {
            return Err(Error::validation("'plural' cannot be empty", src, filename));
        }
        if self.route.trim().is_empty() {
            return Err(Error::validation("'route' cannot be empty", src, filename));
        }
        if self.api_endpoint.trim().is_empty() {
            return Err(Error::validation(
                "'apiEndpoint' cannot be empty",
                src,
                filename,
            ));
        }

        if let Some(pagination) = &self.pagination {
            validate_pagination(pagination, src, filename)?;
        }

        if let Some(views) = &self.views {
            if let DetailsSpec::Toggle(_) = views.mutation {
                return Err(Error::validation(
                    "the create/edit view cannot be a boolean; declare a page or modal surface",
                    src,
                    filename,
                ));
            }
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            validate_name(&field.name, "field", src, filename)?;
            validate_field(field, src, filename)?;

            if !seen.insert(field.name.as_str()) {
                let span = find_name_span(src, &field.name);
                let message = format!("duplicate field name '{}'", field.name);
                return match span {
                    Some(span) => Err(Error::validation_at(message, src, filename, span)),
                    None => Err(Error::validation(message, src, filename)),
                };
            }
        }

        Ok(())
    }
}

fn validate_field(field: &FieldSchema, src: &str, filename: &str) -> Result<()> {
    let span = find_name_span(src, &field.name);

    match (field.ty, &field.relation) {
        (FieldType::Relation, None) => {
            let message = format!(
                "field '{}' has type 'relation' but no relation target",
                field.name
            );
            return Err(match span {
                Some(span) => Error::validation_at(message, src, filename, span),
                None => Error::validation(message, src, filename),
            });
        }
        (ty, Some(_)) if ty != FieldType::Relation => {
            let message = format!(
                "field '{}' declares a relation target but has type '{}'",
                field.name,
                ty.as_str()
            );
            return Err(match span {
                Some(span) => Error::validation_at(message, src, filename, span),
                None => Error::validation(message, src, filename),
            });
        }
        _ => {}
    }

    if let Some(validation) = &field.validation {
        if let (Some(min), Some(max)) = (validation.min, validation.max) {
            if min > max {
                return Err(Error::validation(
                    format!("field '{}': 'min' ({min}) exceeds 'max' ({max})", field.name),
                    src,
                    filename,
                ));
            }
        }
        if let (Some(min), Some(max)) = (validation.min_length, validation.max_length) {
            if min > max {
                return Err(Error::validation(
                    format!(
                        "field '{}': 'minLength' ({min}) exceeds 'maxLength' ({max})",
                        field.name
                    ),
                    src,
                    filename,
                ));
            }
        }
    }

    Ok(())
}

fn validate_pagination(pagination: &Pagination, src: &str, filename: &str) -> Result<()> {
    if pagination.default_page_size == 0 {
        return Err(Error::validation(
            "'defaultPageSize' must be greater than zero",
            src,
            filename,
        ));
    }
    if !pagination
        .page_size_options
        .contains(&pagination.default_page_size)
    {
        return Err(Error::validation(
            format!(
                "'pageSizeOptions' must include the default page size {}",
                pagination.default_page_size
            ),
            src,
            filename,
        ));
    }
    Ok(())
}

/// Validate that a name works as an identifier in generated code.
fn validate_name(name: &str, context: &str, src: &str, filename: &str) -> Result<()> {
    let span = find_name_span(src, name);

    if is_js_reserved(name) {
        return Err(Error::reserved_word(name, context, src, filename, span));
    }

    if let Some(reason) = validate_identifier(name) {
        return Err(Error::invalid_identifier(
            name, context, reason, src, filename, span,
        ));
    }

    Ok(())
}

/// JavaScript reserved words that cannot appear as bare identifiers in the
/// generated TypeScript.
/// Source: https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Lexical_grammar
const JS_RESERVED_WORDS: &[&str] = &[
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "import",
    "in",
    "instanceof",
    "let",
    "new",
    "null",
    "return",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

/// Check if a name is a JavaScript reserved word
pub(crate) fn is_js_reserved(name: &str) -> bool {
    JS_RESERVED_WORDS.contains(&name)
}

/// Find the span of a name in the JSON source
/// Searches for the quoted string value, e.g. `"email"`
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{name}\"");
    if let Some(pos) = src.find(&quoted) {
        // +1 to skip the opening quote
        return Some(SourceSpan::from((pos + 1, name.len())));
    }

    // Fallback: just find the name anywhere (less precise)
    if let Some(pos) = src.find(name) {
        return Some(SourceSpan::from((pos, name.len())));
    }

    None
}

/// Validate that a name is a plain alphanumeric identifier
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        Some(_) => return Some("name must start with a letter"),
        None => return Some("name cannot be empty"),
    }

    for c in chars {
        if !c.is_ascii_alphanumeric() {
            return Some("name must contain only letters and numbers");
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> EntitySchema {
        serde_json::from_str(src).unwrap()
    }

    fn entity_json(fields: &str) -> String {
        format!(
            r#"{{
                "entity": "Product",
                "plural": "Products",
                "route": "products",
                "apiEndpoint": "/api/v1/products",
                "fields": [{fields}]
            }}"#
        )
    }

    #[test]
    fn test_valid_schema_passes() {
        let src = entity_json(
            r#"{ "name": "id", "type": "string" },
               { "name": "name", "type": "string", "validation": { "required": true } }"#,
        );
        let schema = parse(&src);
        assert!(schema.validate(&src, "product.json").is_ok());
    }

    #[test]
    fn test_duplicate_field_name_rejected() {
        let src = entity_json(
            r#"{ "name": "name", "type": "string" },
               { "name": "name", "type": "number" }"#,
        );
        let schema = parse(&src);
        let err = schema.validate(&src, "product.json").unwrap_err();
        assert!(err.to_string().contains("duplicate field name 'name'"));
    }

    #[test]
    fn test_relation_field_requires_target() {
        let src = entity_json(r#"{ "name": "categoryId", "type": "relation" }"#);
        let schema = parse(&src);
        let err = schema.validate(&src, "product.json").unwrap_err();
        assert!(err.to_string().contains("no relation target"));
    }

    #[test]
    fn test_relation_target_on_plain_field_rejected() {
        let src = entity_json(
            r#"{
                "name": "label",
                "type": "string",
                "relation": { "entity": "Tag", "labelField": "name", "valueField": "id" }
            }"#,
        );
        let schema = parse(&src);
        let err = schema.validate(&src, "product.json").unwrap_err();
        assert!(err.to_string().contains("has type 'string'"));
    }

    #[test]
    fn test_mutation_view_cannot_be_boolean() {
        let src = r#"{
            "entity": "Product",
            "plural": "Products",
            "route": "products",
            "apiEndpoint": "/api/v1/products",
            "views": {
                "list": { "type": "table" },
                "details": false,
                "create/edit": false
            },
            "fields": [ { "name": "id", "type": "string" } ]
        }"#;
        let schema = parse(src);
        let err = schema.validate(src, "product.json").unwrap_err();
        assert!(err.to_string().contains("create/edit view cannot be a boolean"));
    }

    #[test]
    fn test_pagination_rules() {
        let src = r#"{
            "entity": "Product",
            "plural": "Products",
            "route": "products",
            "apiEndpoint": "/api/v1/products",
            "pagination": { "defaultPageSize": 25, "pageSizeOptions": [10, 20, 50] },
            "fields": [ { "name": "id", "type": "string" } ]
        }"#;
        let schema = parse(src);
        let err = schema.validate(src, "product.json").unwrap_err();
        assert!(err.to_string().contains("must include the default page size 25"));
    }

    #[test]
    fn test_min_greater_than_max_rejected() {
        let src = entity_json(
            r#"{ "name": "qty", "type": "number", "validation": { "min": 10, "max": 3 } }"#,
        );
        let schema = parse(&src);
        let err = schema.validate(&src, "product.json").unwrap_err();
        assert!(err.to_string().contains("'min' (10) exceeds 'max' (3)"));
    }

    #[test]
    fn test_min_length_greater_than_max_length_rejected() {
        let src = entity_json(
            r#"{ "name": "code", "type": "string", "validation": { "minLength": 9, "maxLength": 4 } }"#,
        );
        let schema = parse(&src);
        let err = schema.validate(&src, "product.json").unwrap_err();
        assert!(err.to_string().contains("'minLength' (9) exceeds 'maxLength' (4)"));
    }

    #[test]
    fn test_reserved_field_name_rejected() {
        let src = entity_json(r#"{ "name": "class", "type": "string" }"#);
        let schema = parse(&src);
        let err = schema.validate(&src, "product.json").unwrap_err();
        assert!(err.to_string().contains("reserved word"));
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(validate_identifier("name").is_none());
        assert!(validate_identifier("firstName").is_none());
        assert!(validate_identifier("line2").is_none());
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("2nd").is_some());
        assert!(validate_identifier("first_name").is_some());
        assert!(validate_identifier("first-name").is_some());
        assert!(validate_identifier("first name").is_some());
    }

    #[test]
    fn test_is_js_reserved() {
        assert!(is_js_reserved("class"));
        assert!(is_js_reserved("delete"));
        assert!(!is_js_reserved("name"));
        assert!(!is_js_reserved("className"));
    }

    #[test]
    fn test_find_name_span() {
        let src = r#"{ "fields": [ { "name": "email", "type": "string" } ] }"#;
        let span = find_name_span(src, "email").unwrap();
        assert_eq!(span.offset(), src.find("email").unwrap());
        assert_eq!(span.len(), 5);
    }
}
