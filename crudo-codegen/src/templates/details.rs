//! Details component renderer.

use crudo_ir::{CanonicalEntity, CanonicalField, SemanticType};

use super::Template;
use crate::builder::CodeBuilder;
use crate::naming::{to_camel_case, to_pascal_case};

/// `{components}/{camel}/{Entity}Details.tsx`: a read-only label/value row
/// per field, in declaration order. Used by the details page or embedded in
/// the list view's details modal.
pub struct DetailsTsx;

impl Template for DetailsTsx {
    fn id(&self) -> &'static str {
        "components/details"
    }

    fn render(&self, entity: &CanonicalEntity) -> String {
        let pascal = to_pascal_case(&entity.name);
        let camel = to_camel_case(&entity.name);

        let mut b = CodeBuilder::typescript();
        b.push_line("import { Stack, Text } from '@chakra-ui/react';")
            .push_line(&format!(
                "import type {{ {pascal} }} from '../../types/{camel}';"
            ))
            .push_blank();

        b.push_line(&format!("export interface {pascal}DetailsProps {{"))
            .push_indent()
            .push_line(&format!("{camel}: {pascal};"))
            .push_dedent()
            .push_line("}")
            .push_blank();

        b.push_line(&format!(
            "export function {pascal}Details({{ {camel} }}: {pascal}DetailsProps) {{"
        ))
        .push_indent()
        .push_line("return (")
        .push_indent()
        .push_line("<Stack gap={3}>")
        .push_indent();

        for field in &entity.fields {
            b.push_line("<Stack direction=\"row\" justify=\"space-between\">")
                .push_indent()
                .push_line(&format!(
                    "<Text fontWeight=\"medium\">{}</Text>",
                    field.form.label
                ))
                .push_line(&format!(
                    "<Text color=\"fg.muted\">{}</Text>",
                    value_expr(&camel, field)
                ))
                .push_dedent()
                .push_line("</Stack>");
        }

        b.push_dedent()
            .push_line("</Stack>")
            .push_dedent()
            .push_line(");")
            .push_dedent()
            .push_line("}");

        b.build()
    }
}

fn value_expr(camel: &str, field: &CanonicalField) -> String {
    let access = format!("{camel}.{}", field.name);
    match field.semantic_type {
        SemanticType::Datetime => format!("{{{access}.toLocaleDateString()}}"),
        SemanticType::Boolean => format!("{{{access} ? 'Yes' : 'No'}}"),
        _ => format!("{{{access}}}"),
    }
}
