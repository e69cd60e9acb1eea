//! TanStack table component renderer.

use crudo_ir::{CanonicalEntity, SemanticType};

use super::Template;
use crate::builder::CodeBuilder;
use crate::naming::{to_camel_case, to_pascal_case};

/// `{components}/{camel}/{Entity}Table.tsx`: a column definition per table
/// field plus a thin wrapper around the project's shared table component.
/// Date and boolean columns get a display formatter.
pub struct TableTsx;

impl Template for TableTsx {
    fn id(&self) -> &'static str {
        "components/table"
    }

    fn render(&self, entity: &CanonicalEntity) -> String {
        let pascal = to_pascal_case(&entity.name);
        let camel = to_camel_case(&entity.name);
        let shared = &entity.components.table_component;
        let pagination = &entity.pagination;

        let mut b = CodeBuilder::typescript();
        b.push_line("import { createColumnHelper } from '@tanstack/react-table';")
            .push_line(&format!("import {{ {shared} }} from '../shared/{shared}';"))
            .push_line(&format!(
                "import type {{ {pascal} }} from '../../types/{camel}';"
            ))
            .push_blank();

        b.push_line(&format!("const columnHelper = createColumnHelper<{pascal}>();"))
            .push_blank();

        b.push_line(&format!("export const {camel}Columns = ["))
            .push_indent();
        for field in entity.table_fields() {
            b.push_line(&format!("columnHelper.accessor('{}', {{", field.name))
                .push_indent()
                .push_line(&format!("header: '{}',", field.table.header));
            match field.semantic_type {
                SemanticType::Datetime => {
                    b.push_line("cell: (info) => info.getValue().toLocaleDateString(),");
                }
                SemanticType::Boolean => {
                    b.push_line("cell: (info) => (info.getValue() ? 'Yes' : 'No'),");
                }
                _ => {}
            }
            b.push_line(&format!("enableSorting: {},", field.table.sortable))
                .push_line(&format!("enableColumnFilter: {},", field.table.filterable))
                .push_dedent()
                .push_line("}),");
        }
        b.push_dedent().push_line("];").push_blank();

        b.push_line(&format!("export interface {pascal}TableProps {{"))
            .push_indent()
            .push_line(&format!("data: {pascal}[];"))
            .push_line("isLoading?: boolean;")
            .push_line(&format!("onRowClick?: (row: {pascal}) => void;"))
            .push_dedent()
            .push_line("}")
            .push_blank();

        let page_sizes = pagination
            .page_size_options
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        b.push_line(&format!(
            "export function {pascal}Table({{ data, isLoading, onRowClick }}: {pascal}TableProps) {{"
        ))
        .push_indent()
        .push_line("return (")
        .push_indent()
        .push_line(&format!("<{shared}"))
        .push_indent()
        .push_line(&format!("columns={{{camel}Columns}}"))
        .push_line("data={data}")
        .push_line("isLoading={isLoading}")
        .push_line("onRowClick={onRowClick}")
        .push_line(&format!(
            "initialPageSize={{{}}}",
            pagination.default_page_size
        ))
        .push_line(&format!("pageSizeOptions={{[{page_sizes}]}}"))
        .push_dedent()
        .push_line("/>")
        .push_dedent()
        .push_line(");")
        .push_dedent()
        .push_line("}");

        b.build()
    }
}
