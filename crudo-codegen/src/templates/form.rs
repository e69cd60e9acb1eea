//! Formik form component renderer.

use crudo_ir::{CanonicalEntity, CanonicalField, FormLayout, FormWidget};

use super::Template;
use crate::builder::CodeBuilder;
use crate::naming::to_pascal_case;

/// `{components}/{camel}/{Entity}Form.tsx`: a Formik form over the entity's
/// form fields with a Yup validation schema built from each field's clause
/// chain. The widget per field comes from normalization, so this renderer
/// only translates resolved controls into JSX.
pub struct FormTsx;

impl Template for FormTsx {
    fn id(&self) -> &'static str {
        "components/form"
    }

    fn render(&self, entity: &CanonicalEntity) -> String {
        let pascal = to_pascal_case(&entity.name);
        let fields = entity.form_fields();
        let layout = entity.components.form_layout;

        let mut b = CodeBuilder::typescript();
        b.push_line("import { Field, Form, Formik } from 'formik';")
            .push_line("import * as yup from 'yup';");
        if layout == FormLayout::Grid {
            b.push_line("import { Button, SimpleGrid, Stack } from '@chakra-ui/react';");
        } else {
            b.push_line("import { Button, Stack } from '@chakra-ui/react';");
        }
        if let Some(import) = widget_import(&fields) {
            b.push_line(&import);
        }
        b.push_line(&format!(
            "import type {{ Create{pascal}Input }} from '../../types/{}';",
            crate::naming::to_camel_case(&entity.name)
        ))
        .push_blank();

        b.push_line("const validationSchema = yup.object({").push_indent();
        for field in fields.iter().filter(|f| !f.clauses.is_empty()) {
            b.push_line(&format!("{}: {},", field.name, field.yup_schema()));
        }
        b.push_dedent().push_line("});").push_blank();

        b.push_line(&format!("const emptyValues: Create{pascal}Input = {{"))
            .push_indent();
        for field in &fields {
            b.push_line(&format!("{}: {},", field.name, field.default_literal));
        }
        b.push_dedent().push_line("};").push_blank();

        b.push_line(&format!("export interface {pascal}FormProps {{"))
            .push_indent()
            .push_line(&format!("initialValues?: Create{pascal}Input;"))
            .push_line(&format!(
                "onSubmit: (values: Create{pascal}Input) => void | Promise<void>;"
            ))
            .push_line("isSubmitting?: boolean;")
            .push_dedent()
            .push_line("}")
            .push_blank();

        b.push_line(&format!(
            "export function {pascal}Form({{ initialValues, onSubmit, isSubmitting }}: {pascal}FormProps) {{"
        ))
        .push_indent()
        .push_line("return (")
        .push_indent()
        .push_line("<Formik")
        .push_indent()
        .push_line("initialValues={initialValues ?? emptyValues}")
        .push_line("validationSchema={validationSchema}")
        .push_line("onSubmit={onSubmit}")
        .push_line("enableReinitialize")
        .push_dedent()
        .push_line(">")
        .push_indent()
        .push_line("<Form>")
        .push_indent()
        .push_line("<Stack gap={4}>")
        .push_indent();

        match layout {
            FormLayout::Vertical => {
                for field in &fields {
                    push_field_jsx(&mut b, field);
                }
            }
            FormLayout::Horizontal => {
                b.push_line("<Stack direction=\"row\" gap={4}>").push_indent();
                for field in &fields {
                    push_field_jsx(&mut b, field);
                }
                b.push_dedent().push_line("</Stack>");
            }
            FormLayout::Grid => {
                b.push_line("<SimpleGrid columns={2} gap={4}>").push_indent();
                for field in &fields {
                    push_field_jsx(&mut b, field);
                }
                b.push_dedent().push_line("</SimpleGrid>");
            }
        }

        b.push_line("<Button type=\"submit\" loading={isSubmitting}>")
            .push_indent()
            .push_line("Save")
            .push_dedent()
            .push_line("</Button>")
            .push_dedent()
            .push_line("</Stack>")
            .push_dedent()
            .push_line("</Form>")
            .push_dedent()
            .push_line("</Formik>")
            .push_dedent()
            .push_line(");")
            .push_dedent()
            .push_line("}");

        b.build()
    }
}

/// Import line for the widget components the form actually uses.
fn widget_import(fields: &[&CanonicalField]) -> Option<String> {
    let mut widgets: Vec<&'static str> = fields
        .iter()
        .map(|f| f.form.widget)
        .filter(|w| *w != FormWidget::Hidden)
        .map(|w| w.as_str())
        .collect();
    widgets.sort_unstable();
    widgets.dedup();
    if widgets.is_empty() {
        None
    } else {
        Some(format!(
            "import {{ {} }} from '../ui';",
            widgets.join(", ")
        ))
    }
}

fn push_field_jsx(b: &mut CodeBuilder, field: &CanonicalField) {
    if field.form.widget == FormWidget::Hidden {
        b.push_line(&format!("<Field type=\"hidden\" name=\"{}\" />", field.name));
        return;
    }

    let mut attrs: Vec<String> = vec![
        format!("as={{{}}}", field.form.widget.as_str()),
        format!("name=\"{}\"", field.name),
        format!("label=\"{}\"", field.form.label),
    ];
    if let Some(input_type) = &field.form.input_type {
        attrs.push(format!("type=\"{input_type}\""));
    }
    if let Some(placeholder) = &field.form.placeholder {
        attrs.push(format!("placeholder=\"{placeholder}\""));
    }
    if let Some(helper_text) = &field.form.helper_text {
        attrs.push(format!("helperText=\"{helper_text}\""));
    }
    if let Some(endpoint) = &field.form.endpoint {
        attrs.push(format!("endpoint=\"{endpoint}\""));
    }

    let has_options = !field.form.options.is_empty();
    if attrs.len() <= 3 && !has_options {
        b.push_line(&format!("<Field {} />", attrs.join(" ")));
        return;
    }

    b.push_line("<Field").push_indent();
    for attr in &attrs {
        b.push_line(attr);
    }
    if has_options {
        b.push_line("options={[").push_indent();
        for option in &field.form.options {
            b.push_line(&format!(
                "{{ label: '{}', value: '{}' }},",
                option.label, option.value
            ));
        }
        b.push_dedent().push_line("]}");
    }
    b.push_dedent().push_line("/>");
}
