//! RTK Query api slice renderer.

use crudo_ir::CanonicalEntity;

use super::Template;
use crate::builder::CodeBuilder;
use crate::naming::{to_camel_case, to_pascal_case};

/// `{store}/{camel}/{camel}Api.ts`: CRUD endpoints injected into the app's
/// base api slice, plus the generated hook exports.
pub struct ApiTs;

impl Template for ApiTs {
    fn id(&self) -> &'static str {
        "api/inject"
    }

    fn render(&self, entity: &CanonicalEntity) -> String {
        let pascal = to_pascal_case(&entity.name);
        let camel = to_camel_case(&entity.name);
        let plural = to_pascal_case(&entity.plural);
        let endpoint = &entity.api_endpoint;

        let mut b = CodeBuilder::typescript();
        b.push_line("import { api } from '../api';")
            .push_line("import type {")
            .push_indent()
            .push_line(&format!("Create{pascal}Input,"))
            .push_line(&format!("{pascal},"))
            .push_line(&format!("{pascal}ListParams,"))
            .push_line(&format!("{pascal}ListResponse,"))
            .push_line(&format!("{pascal}Response,"))
            .push_line(&format!("Update{pascal}Input,"))
            .push_dedent()
            .push_line(&format!("}} from '../../types/{camel}';"))
            .push_blank();

        b.push_line(&format!("export const {camel}Api = api"))
            .push_indent()
            .push_line(&format!(
                ".enhanceEndpoints({{ addTagTypes: ['{pascal}'] }})"
            ))
            .push_line(".injectEndpoints({")
            .push_indent()
            .push_line("endpoints: (builder) => ({")
            .push_indent();

        b.push_line(&format!(
            "get{plural}: builder.query<{pascal}ListResponse, {pascal}ListParams>({{"
        ))
        .push_indent()
        .push_line(&format!("query: (params) => ({{ url: '{endpoint}', params }}),"))
        .push_line(&format!("providesTags: ['{pascal}'],"))
        .push_dedent()
        .push_line("}),");

        b.push_line(&format!(
            "get{pascal}: builder.query<{pascal}Response, string>({{"
        ))
        .push_indent()
        .push_line(&format!("query: (id) => `{endpoint}/${{id}}`,"))
        .push_line(&format!(
            "providesTags: (result, error, id) => [{{ type: '{pascal}', id }}],"
        ))
        .push_dedent()
        .push_line("}),");

        b.push_line(&format!(
            "create{pascal}: builder.mutation<{pascal}Response, Create{pascal}Input>({{"
        ))
        .push_indent()
        .push_line(&format!(
            "query: (body) => ({{ url: '{endpoint}', method: 'POST', body }}),"
        ))
        .push_line(&format!("invalidatesTags: ['{pascal}'],"))
        .push_dedent()
        .push_line("}),");

        b.push_line(&format!(
            "update{pascal}: builder.mutation<{pascal}Response, Update{pascal}Input & {{ id: string }}>({{"
        ))
        .push_indent()
        .push_line(&format!(
            "query: ({{ id, ...body }}) => ({{ url: `{endpoint}/${{id}}`, method: 'PUT', body }}),"
        ))
        .push_line(&format!(
            "invalidatesTags: (result, error, {{ id }}) => [{{ type: '{pascal}', id }}],"
        ))
        .push_dedent()
        .push_line("}),");

        b.push_line(&format!("delete{pascal}: builder.mutation<void, string>({{"))
            .push_indent()
            .push_line(&format!(
                "query: (id) => ({{ url: `{endpoint}/${{id}}`, method: 'DELETE' }}),"
            ))
            .push_line(&format!("invalidatesTags: ['{pascal}'],"))
            .push_dedent()
            .push_line("}),");

        b.push_dedent()
            .push_line("}),")
            .push_dedent()
            .push_line("});")
            .push_dedent()
            .push_blank();

        b.push_line("export const {")
            .push_indent()
            .push_line(&format!("useGet{plural}Query,"))
            .push_line(&format!("useGet{pascal}Query,"))
            .push_line(&format!("useCreate{pascal}Mutation,"))
            .push_line(&format!("useUpdate{pascal}Mutation,"))
            .push_line(&format!("useDelete{pascal}Mutation,"))
            .push_dedent()
            .push_line(&format!("}} = {camel}Api;"));

        b.build()
    }
}
