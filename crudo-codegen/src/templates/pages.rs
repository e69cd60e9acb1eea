//! Routed page renderers.
//!
//! The list page is the anchor surface and adapts to the resolved view plan:
//! modal mutation and details views render as overlays on top of it, page
//! views render as navigation targets with their own files. Create, edit and
//! details pages are only planned when the corresponding view is `page`, but
//! each renderer here is total so previews can show any of them.

use crudo_ir::{CanonicalEntity, ViewKind};

use super::Template;
use crate::builder::CodeBuilder;
use crate::naming::{to_camel_case, to_pascal_case};

fn overlay_component(view: ViewKind) -> &'static str {
    if view.is_drawer() { "Drawer" } else { "Dialog" }
}

/// `{pages}/{route}/index.tsx`: the list page.
pub struct ListPageTsx;

impl Template for ListPageTsx {
    fn id(&self) -> &'static str {
        "pages/list"
    }

    fn render(&self, entity: &CanonicalEntity) -> String {
        let pascal = to_pascal_case(&entity.name);
        let camel = to_camel_case(&entity.name);
        let plural_pascal = to_pascal_case(&entity.plural);
        let plural_camel = to_camel_case(&entity.plural);
        let route = &entity.route;
        let views = &entity.views;

        let mutation_modal = views.mutation.is_modal();
        let details_modal = views.details.is_modal();
        let details_page = views.details.is_page();
        let needs_navigate = views.mutation.is_page() || details_page;
        let has_table = views.list.has_table();
        let has_grid = views.list.has_grid();
        let both_views = has_table && has_grid;
        let grid = views
            .list
            .grid_component
            .clone()
            .unwrap_or_else(|| entity.components.grid_component.clone());

        let mut b = CodeBuilder::typescript();
        if mutation_modal || details_modal || both_views {
            b.push_line("import { useState } from 'react';");
        }
        if needs_navigate {
            b.push_line("import { useNavigate } from 'react-router-dom';");
        }
        b.push_line("import { Button, Heading, Stack } from '@chakra-ui/react';");

        let mut overlays: Vec<&str> = Vec::new();
        if mutation_modal {
            overlays.push(overlay_component(views.mutation));
        }
        if details_modal && !overlays.contains(&overlay_component(views.details)) {
            overlays.push(overlay_component(views.details));
        }
        overlays.sort_unstable();
        if !overlays.is_empty() {
            b.push_line(&format!(
                "import {{ {} }} from '../../components/ui';",
                overlays.join(", ")
            ));
        }
        if has_grid {
            b.push_line(&format!(
                "import {{ {grid} }} from '../../components/shared/{grid}';"
            ));
        }

        let mut barrel_imports: Vec<String> = Vec::new();
        if details_modal {
            barrel_imports.push(format!("{pascal}Details"));
        }
        if mutation_modal {
            barrel_imports.push(format!("{pascal}Form"));
        }
        if has_table {
            barrel_imports.push(format!("{pascal}Table"));
        }
        if !barrel_imports.is_empty() {
            b.push_line(&format!(
                "import {{ {} }} from '../../components/{camel}';",
                barrel_imports.join(", ")
            ));
        }
        b.push_line(&format!(
            "import {{ use{pascal} }} from '../../hooks/use{pascal}';"
        ));
        if details_modal {
            b.push_line(&format!(
                "import type {{ {pascal} }} from '../../types/{camel}';"
            ));
        }
        b.push_blank();

        b.push_line(&format!("export default function {plural_pascal}Page() {{"))
            .push_indent();

        let mut hook_keys = vec![plural_camel.clone(), "isLoading".to_string()];
        if mutation_modal {
            hook_keys.push("create".to_string());
            hook_keys.push("isCreating".to_string());
        }
        b.push_line(&format!(
            "const {{ {} }} = use{pascal}();",
            hook_keys.join(", ")
        ));
        if needs_navigate {
            b.push_line("const navigate = useNavigate();");
        }
        if mutation_modal {
            b.push_line("const [isCreateOpen, setCreateOpen] = useState(false);");
        }
        if details_modal {
            b.push_line(&format!(
                "const [selected, setSelected] = useState<{pascal} | null>(null);"
            ));
        }
        if both_views {
            b.push_line(&format!(
                "const [view, setView] = useState<'table' | 'grid'>('{}');",
                views.list.default_view.as_str()
            ));
        }
        b.push_blank();

        b.push_line("return (")
            .push_indent()
            .push_line("<Stack gap={6}>")
            .push_indent()
            .push_line("<Stack direction=\"row\" justify=\"space-between\">")
            .push_indent()
            .push_line(&format!("<Heading size=\"lg\">{}</Heading>", entity.plural));

        let create_click = if mutation_modal {
            "() => setCreateOpen(true)".to_string()
        } else {
            format!("() => navigate('/{route}/create')")
        };
        if both_views {
            b.push_line("<Stack direction=\"row\" gap={2}>")
                .push_indent()
                .push_line(
                    "<Button variant={view === 'table' ? 'solid' : 'ghost'} onClick={() => setView('table')}>",
                )
                .push_indent()
                .push_line("Table")
                .push_dedent()
                .push_line("</Button>")
                .push_line(
                    "<Button variant={view === 'grid' ? 'solid' : 'ghost'} onClick={() => setView('grid')}>",
                )
                .push_indent()
                .push_line("Grid")
                .push_dedent()
                .push_line("</Button>")
                .push_line(&format!("<Button onClick={{{create_click}}}>New {pascal}</Button>"))
                .push_dedent()
                .push_line("</Stack>");
        } else {
            b.push_line(&format!(
                "<Button onClick={{{create_click}}}>New {pascal}</Button>"
            ));
        }
        b.push_dedent().push_line("</Stack>");

        let row_click = row_click_expr(views.details, route, "row");
        let item_click = row_click_expr(views.details, route, "item");
        if both_views {
            b.push_line("{view === 'table' ? (").push_indent();
            push_table_jsx(&mut b, &pascal, &plural_camel, row_click.as_deref());
            b.push_dedent().push_line(") : (").push_indent();
            push_grid_jsx(&mut b, &grid, &plural_camel, item_click.as_deref());
            b.push_dedent().push_line(")}");
        } else if has_table {
            push_table_jsx(&mut b, &pascal, &plural_camel, row_click.as_deref());
        } else {
            push_grid_jsx(&mut b, &grid, &plural_camel, item_click.as_deref());
        }

        if mutation_modal {
            let overlay = overlay_component(views.mutation);
            b.push_line(&format!(
                "<{overlay} open={{isCreateOpen}} onClose={{() => setCreateOpen(false)}} title=\"New {pascal}\">"
            ))
            .push_indent()
            .push_line(&format!("<{pascal}Form"))
            .push_indent()
            .push_line("onSubmit={async (values) => {")
            .push_indent()
            .push_line("await create(values);")
            .push_line("setCreateOpen(false);")
            .push_dedent()
            .push_line("}}")
            .push_line("isSubmitting={isCreating}")
            .push_dedent()
            .push_line("/>")
            .push_dedent()
            .push_line(&format!("</{overlay}>"));
        }

        if details_modal {
            let overlay = overlay_component(views.details);
            b.push_line("{selected && (")
                .push_indent()
                .push_line(&format!(
                    "<{overlay} open onClose={{() => setSelected(null)}} title=\"{pascal}\">"
                ))
                .push_indent()
                .push_line(&format!("<{pascal}Details {camel}={{selected}} />"))
                .push_dedent()
                .push_line(&format!("</{overlay}>"))
                .push_dedent()
                .push_line(")}");
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

fn row_click_expr(details: ViewKind, route: &str, param: &str) -> Option<String> {
    match details {
        ViewKind::Page => Some(format!(
            "({param}) => navigate(`/{route}/${{{param}.id}}`)"
        )),
        ViewKind::Modal { .. } => Some(format!("({param}) => setSelected({param})")),
        ViewKind::Disabled => None,
    }
}

fn push_table_jsx(
    b: &mut CodeBuilder,
    pascal: &str,
    plural_camel: &str,
    on_row_click: Option<&str>,
) {
    b.push_line(&format!("<{pascal}Table"))
        .push_indent()
        .push_line(&format!("data={{{plural_camel}}}"))
        .push_line("isLoading={isLoading}");
    if let Some(click) = on_row_click {
        b.push_line(&format!("onRowClick={{{click}}}"));
    }
    b.push_dedent().push_line("/>");
}

fn push_grid_jsx(b: &mut CodeBuilder, grid: &str, plural_camel: &str, on_item_click: Option<&str>) {
    b.push_line(&format!("<{grid}"))
        .push_indent()
        .push_line(&format!("data={{{plural_camel}}}"))
        .push_line("isLoading={isLoading}");
    if let Some(click) = on_item_click {
        b.push_line(&format!("onItemClick={{{click}}}"));
    }
    b.push_dedent().push_line("/>");
}

/// `{pages}/{route}/create.tsx`: only planned when the mutation view is a
/// routed page.
pub struct CreatePageTsx;

impl Template for CreatePageTsx {
    fn id(&self) -> &'static str {
        "pages/create"
    }

    fn render(&self, entity: &CanonicalEntity) -> String {
        let pascal = to_pascal_case(&entity.name);
        let camel = to_camel_case(&entity.name);
        let route = &entity.route;

        CodeBuilder::typescript()
            .line("import { useNavigate } from 'react-router-dom';")
            .line("import { Heading, Stack } from '@chakra-ui/react';")
            .line(&format!(
                "import {{ {pascal}Form }} from '../../components/{camel}';"
            ))
            .line(&format!(
                "import {{ use{pascal} }} from '../../hooks/use{pascal}';"
            ))
            .blank()
            .line(&format!("export default function Create{pascal}Page() {{"))
            .indent()
            .line("const navigate = useNavigate();")
            .line(&format!("const {{ create, isCreating }} = use{pascal}();"))
            .blank()
            .line("return (")
            .indent()
            .line("<Stack gap={6}>")
            .indent()
            .line(&format!("<Heading size=\"lg\">New {pascal}</Heading>"))
            .line(&format!("<{pascal}Form"))
            .indent()
            .line("onSubmit={async (values) => {")
            .indent()
            .line("await create(values);")
            .line(&format!("navigate('/{route}');"))
            .dedent()
            .line("}}")
            .line("isSubmitting={isCreating}")
            .dedent()
            .line("/>")
            .dedent()
            .line("</Stack>")
            .dedent()
            .line(");")
            .dedent()
            .line("}")
            .build()
    }
}

/// `{pages}/{route}/[id]/edit.tsx`: only planned when the mutation view is a
/// routed page.
pub struct EditPageTsx;

impl Template for EditPageTsx {
    fn id(&self) -> &'static str {
        "pages/edit"
    }

    fn render(&self, entity: &CanonicalEntity) -> String {
        let pascal = to_pascal_case(&entity.name);
        let camel = to_camel_case(&entity.name);
        let route = &entity.route;
        let data_field = &entity.api.data_field;

        CodeBuilder::typescript()
            .line("import { useNavigate, useParams } from 'react-router-dom';")
            .line("import { Heading, Spinner, Stack } from '@chakra-ui/react';")
            .line(&format!(
                "import {{ {pascal}Form }} from '../../../components/{camel}';"
            ))
            .line(&format!(
                "import {{ use{pascal} }} from '../../../hooks/use{pascal}';"
            ))
            .line(&format!(
                "import {{ useGet{pascal}Query }} from '../../../store/{camel}/{camel}Api';"
            ))
            .blank()
            .line(&format!("export default function Edit{pascal}Page() {{"))
            .indent()
            .line("const { id } = useParams<{ id: string }>();")
            .line("const navigate = useNavigate();")
            .line(&format!("const {{ update, isUpdating }} = use{pascal}();"))
            .line(&format!(
                "const {{ data, isLoading }} = useGet{pascal}Query(id ?? '');"
            ))
            .blank()
            .line("if (isLoading || !data) {")
            .indent()
            .line("return <Spinner />;")
            .dedent()
            .line("}")
            .blank()
            .line("return (")
            .indent()
            .line("<Stack gap={6}>")
            .indent()
            .line(&format!("<Heading size=\"lg\">Edit {pascal}</Heading>"))
            .line(&format!("<{pascal}Form"))
            .indent()
            .line(&format!("initialValues={{data.{data_field}}}"))
            .line("onSubmit={async (values) => {")
            .indent()
            .line("await update(id ?? '', values);")
            .line(&format!("navigate('/{route}');"))
            .dedent()
            .line("}}")
            .line("isSubmitting={isUpdating}")
            .dedent()
            .line("/>")
            .dedent()
            .line("</Stack>")
            .dedent()
            .line(");")
            .dedent()
            .line("}")
            .build()
    }
}

/// `{pages}/{route}/[id]/index.tsx`: only planned when the details view is a
/// routed page.
pub struct DetailsPageTsx;

impl Template for DetailsPageTsx {
    fn id(&self) -> &'static str {
        "pages/details"
    }

    fn render(&self, entity: &CanonicalEntity) -> String {
        let pascal = to_pascal_case(&entity.name);
        let camel = to_camel_case(&entity.name);
        let data_field = &entity.api.data_field;

        CodeBuilder::typescript()
            .line("import { useParams } from 'react-router-dom';")
            .line("import { Heading, Spinner, Stack } from '@chakra-ui/react';")
            .line(&format!(
                "import {{ {pascal}Details }} from '../../../components/{camel}';"
            ))
            .line(&format!(
                "import {{ useGet{pascal}Query }} from '../../../store/{camel}/{camel}Api';"
            ))
            .blank()
            .line(&format!("export default function {pascal}DetailsPage() {{"))
            .indent()
            .line("const { id } = useParams<{ id: string }>();")
            .line(&format!(
                "const {{ data, isLoading }} = useGet{pascal}Query(id ?? '');"
            ))
            .blank()
            .line("if (isLoading || !data) {")
            .indent()
            .line("return <Spinner />;")
            .dedent()
            .line("}")
            .blank()
            .line("return (")
            .indent()
            .line("<Stack gap={6}>")
            .indent()
            .line(&format!("<Heading size=\"lg\">{pascal}</Heading>"))
            .line(&format!("<{pascal}Details {camel}={{data.{data_field}}} />"))
            .dedent()
            .line("</Stack>")
            .dedent()
            .line(");")
            .dedent()
            .line("}")
            .build()
    }
}
