//! Vitest smoke test renderers.
//!
//! Generated alongside the code when the project config enables tests. These
//! are deliberately shallow: they pin the generated surface (endpoints,
//! hooks, form fields, required validation) without mocking the backend.

use crudo_ir::{CanonicalEntity, ClauseKind, FormWidget};

use super::Template;
use crate::builder::CodeBuilder;
use crate::naming::{to_camel_case, to_pascal_case};

/// `{tests}/store/{camel}/{camel}Api.test.ts`.
pub struct ApiTestTs;

impl Template for ApiTestTs {
    fn id(&self) -> &'static str {
        "tests/api.test"
    }

    fn render(&self, entity: &CanonicalEntity) -> String {
        let pascal = to_pascal_case(&entity.name);
        let camel = to_camel_case(&entity.name);
        let plural = to_pascal_case(&entity.plural);

        let mut b = CodeBuilder::typescript();
        b.push_line("import { describe, expect, it } from 'vitest';")
            .push_line(&format!(
                "import * as {camel}Api from '../../../store/{camel}/{camel}Api';"
            ))
            .push_blank();

        b.push_line(&format!("describe('{camel}Api', () => {{"))
            .push_indent()
            .push_line("it('injects all CRUD endpoints', () => {")
            .push_indent()
            .push_line(&format!(
                "const {{ endpoints }} = {camel}Api.{camel}Api;"
            ));
        for endpoint in [
            format!("get{plural}"),
            format!("get{pascal}"),
            format!("create{pascal}"),
            format!("update{pascal}"),
            format!("delete{pascal}"),
        ] {
            b.push_line(&format!("expect(endpoints.{endpoint}).toBeDefined();"));
        }
        b.push_dedent().push_line("});").push_blank();

        b.push_line("it('exports a typed hook per endpoint', () => {")
            .push_indent();
        for hook in [
            format!("useGet{plural}Query"),
            format!("useGet{pascal}Query"),
            format!("useCreate{pascal}Mutation"),
            format!("useUpdate{pascal}Mutation"),
            format!("useDelete{pascal}Mutation"),
        ] {
            b.push_line(&format!(
                "expect({camel}Api.{hook}).toBeTypeOf('function');"
            ));
        }
        b.push_dedent()
            .push_line("});")
            .push_dedent()
            .push_line("});");

        b.build()
    }
}

/// `{tests}/components/{camel}/{Entity}Form.test.tsx`.
pub struct FormTestTsx;

impl Template for FormTestTsx {
    fn id(&self) -> &'static str {
        "tests/component.test"
    }

    fn render(&self, entity: &CanonicalEntity) -> String {
        let pascal = to_pascal_case(&entity.name);
        let camel = to_camel_case(&entity.name);

        let visible_labels: Vec<&str> = entity
            .form_fields()
            .into_iter()
            .filter(|f| f.form.widget != FormWidget::Hidden)
            .map(|f| f.form.label.as_str())
            .collect();

        // First required-clause message, if any field has one.
        let required_message = entity.form_fields().into_iter().find_map(|f| {
            f.clauses
                .iter()
                .find(|c| c.kind == ClauseKind::Required)
                .map(|c| c.message.clone())
        });

        let mut b = CodeBuilder::typescript();
        if required_message.is_some() {
            b.push_line("import { render, screen, waitFor } from '@testing-library/react';")
                .push_line("import userEvent from '@testing-library/user-event';");
        } else {
            b.push_line("import { render, screen } from '@testing-library/react';");
        }
        b.push_line("import { describe, expect, it, vi } from 'vitest';")
            .push_line(&format!(
                "import {{ {pascal}Form }} from '../../../components/{camel}/{pascal}Form';"
            ))
            .push_blank();

        b.push_line(&format!("describe('{pascal}Form', () => {{"))
            .push_indent()
            .push_line("it('renders a control for every form field', () => {")
            .push_indent()
            .push_line(&format!("render(<{pascal}Form onSubmit={{vi.fn()}} />);"))
            .push_blank();
        for label in &visible_labels {
            b.push_line(&format!(
                "expect(screen.getByLabelText('{label}')).toBeInTheDocument();"
            ));
        }
        b.push_dedent().push_line("});");

        if let Some(message) = required_message {
            b.push_blank()
                .push_line("it('blocks submission while required fields are empty', async () => {")
                .push_indent()
                .push_line("const onSubmit = vi.fn();")
                .push_line(&format!("render(<{pascal}Form onSubmit={{onSubmit}} />);"))
                .push_blank()
                .push_line("await userEvent.click(screen.getByRole('button', { name: 'Save' }));")
                .push_blank()
                .push_line("await waitFor(() => {")
                .push_indent()
                .push_line(&format!(
                    "expect(screen.getByText('{message}')).toBeInTheDocument();"
                ))
                .push_dedent()
                .push_line("});")
                .push_line("expect(onSubmit).not.toHaveBeenCalled();")
                .push_dedent()
                .push_line("});");
        }

        b.push_dedent().push_line("});");

        b.build()
    }
}
