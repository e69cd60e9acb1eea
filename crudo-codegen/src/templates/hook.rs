//! Entity data hook renderer.

use crudo_ir::CanonicalEntity;

use super::Template;
use crate::builder::CodeBuilder;
use crate::naming::{to_camel_case, to_pascal_case};

/// `{hooks}/use{Entity}.ts`: one hook bundling the entity's queries and
/// mutations with local list state (page, page size, search). Pages consume
/// this instead of the raw RTK Query hooks.
pub struct HookTs;

impl Template for HookTs {
    fn id(&self) -> &'static str {
        "hooks/hook"
    }

    fn render(&self, entity: &CanonicalEntity) -> String {
        let pascal = to_pascal_case(&entity.name);
        let camel = to_camel_case(&entity.name);
        let plural = to_pascal_case(&entity.plural);
        let plural_camel = to_camel_case(&entity.plural);
        let data_field = &entity.api.data_field;
        let meta_field = &entity.api.meta_field;

        let mut b = CodeBuilder::typescript();
        b.push_line("import { useCallback, useState } from 'react';")
            .push_line("import {")
            .push_indent()
            .push_line(&format!("useCreate{pascal}Mutation,"))
            .push_line(&format!("useDelete{pascal}Mutation,"))
            .push_line(&format!("useGet{plural}Query,"))
            .push_line(&format!("useUpdate{pascal}Mutation,"))
            .push_dedent()
            .push_line(&format!("}} from '../store/{camel}/{camel}Api';"))
            .push_line(&format!(
                "import type {{ Create{pascal}Input, Update{pascal}Input }} from '../types/{camel}';"
            ))
            .push_blank();

        b.push_line(&format!("export function use{pascal}() {{"))
            .push_indent()
            .push_line("const [page, setPage] = useState(1);")
            .push_line(&format!(
                "const [pageSize, setPageSize] = useState({});",
                entity.pagination.default_page_size
            ))
            .push_line("const [search, setSearch] = useState('');")
            .push_blank()
            .push_line(&format!(
                "const {{ data, isLoading, isFetching, refetch }} = useGet{plural}Query({{ page, pageSize, search }});"
            ))
            .push_line(&format!(
                "const [create{pascal}, {{ isLoading: isCreating }}] = useCreate{pascal}Mutation();"
            ))
            .push_line(&format!(
                "const [update{pascal}, {{ isLoading: isUpdating }}] = useUpdate{pascal}Mutation();"
            ))
            .push_line(&format!(
                "const [delete{pascal}, {{ isLoading: isDeleting }}] = useDelete{pascal}Mutation();"
            ))
            .push_blank();

        b.push_line("const create = useCallback(")
            .push_indent()
            .push_line(&format!(
                "(input: Create{pascal}Input) => create{pascal}(input).unwrap(),"
            ))
            .push_line(&format!("[create{pascal}]"))
            .push_dedent()
            .push_line(");")
            .push_blank();

        b.push_line("const update = useCallback(")
            .push_indent()
            .push_line(&format!(
                "(id: string, input: Update{pascal}Input) => update{pascal}({{ id, ...input }}).unwrap(),"
            ))
            .push_line(&format!("[update{pascal}]"))
            .push_dedent()
            .push_line(");")
            .push_blank();

        b.push_line(&format!(
            "const remove = useCallback((id: string) => delete{pascal}(id).unwrap(), [delete{pascal}]);"
        ))
        .push_blank();

        b.push_line("return {")
            .push_indent()
            .push_line(&format!("{plural_camel}: data?.{data_field} ?? [],"))
            .push_line(&format!("{meta_field}: data?.{meta_field},"))
            .push_line("isLoading,")
            .push_line("isFetching,")
            .push_line("refetch,")
            .push_line("page,")
            .push_line("setPage,")
            .push_line("pageSize,")
            .push_line("setPageSize,")
            .push_line("search,")
            .push_line("setSearch,")
            .push_line("create,")
            .push_line("update,")
            .push_line("remove,")
            .push_line("isCreating,")
            .push_line("isUpdating,")
            .push_line("isDeleting,")
            .push_dedent()
            .push_line("};")
            .push_dedent()
            .push_line("}");

        b.build()
    }
}
