//! Artifact path derivation.
//!
//! Every generated file lands at a path that is a pure function of the
//! project configuration and the entity. Centralizing the derivation keeps
//! the generation steps, the manifest and the tests in exact agreement
//! about where things go. All paths are project-relative and '/'-joined.

use crudo_schema::ProjectConfig;

use crate::naming::{to_camel_case, to_pascal_case};

/// The full set of paths one entity's artifacts occupy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    /// RTK Query api slice, `{store}/{camel}/{camel}Api.ts`.
    pub api_file: String,
    /// Store barrel, `{store}/{camel}/index.ts`.
    pub api_barrel: String,
    /// Type declarations, `{types}/{camel}.ts`.
    pub types_file: String,
    /// Form component, `{components}/{camel}/{Entity}Form.tsx`.
    pub form_component: String,
    /// Table component, `{components}/{camel}/{Entity}Table.tsx`.
    pub table_component: String,
    /// Details component, `{components}/{camel}/{Entity}Details.tsx`.
    pub details_component: String,
    /// Component barrel, `{components}/{camel}/index.ts`.
    pub components_barrel: String,
    /// List page, `{pages}/{route}/index.tsx`.
    pub list_page: String,
    /// Create page, `{pages}/{route}/create.tsx`.
    pub create_page: String,
    /// Edit page, `{pages}/{route}/[id]/edit.tsx`.
    pub edit_page: String,
    /// Details page, `{pages}/{route}/[id]/index.tsx`.
    pub details_page: String,
    /// Data hook, `{hooks}/use{Entity}.ts`.
    pub hook_file: String,
    /// Api test, `{tests}/store/{camel}/{camel}Api.test.ts`.
    pub api_test: String,
    /// Form test, `{tests}/components/{camel}/{Entity}Form.test.tsx`.
    pub component_test: String,
}

impl ArtifactPaths {
    /// Derive all artifact paths for an entity.
    pub fn new(config: &ProjectConfig, entity: &str, route: &str) -> Self {
        let camel = to_camel_case(entity);
        let pascal = to_pascal_case(entity);
        let paths = &config.paths;

        Self {
            api_file: format!("{}/{camel}/{camel}Api.ts", paths.store),
            api_barrel: format!("{}/{camel}/index.ts", paths.store),
            types_file: format!("{}/{camel}.ts", paths.types),
            form_component: format!("{}/{camel}/{pascal}Form.tsx", paths.components),
            table_component: format!("{}/{camel}/{pascal}Table.tsx", paths.components),
            details_component: format!("{}/{camel}/{pascal}Details.tsx", paths.components),
            components_barrel: format!("{}/{camel}/index.ts", paths.components),
            list_page: format!("{}/{route}/index.tsx", paths.pages),
            create_page: format!("{}/{route}/create.tsx", paths.pages),
            edit_page: format!("{}/{route}/[id]/edit.tsx", paths.pages),
            details_page: format!("{}/{route}/[id]/index.tsx", paths.pages),
            hook_file: format!("{}/use{pascal}.ts", paths.hooks),
            api_test: format!("{}/store/{camel}/{camel}Api.test.ts", paths.tests),
            component_test: format!("{}/components/{camel}/{pascal}Form.test.tsx", paths.tests),
        }
    }

    /// Every derived path, in generation order.
    pub fn all(&self) -> Vec<&str> {
        vec![
            &self.api_file,
            &self.api_barrel,
            &self.types_file,
            &self.form_component,
            &self.table_component,
            &self.details_component,
            &self.components_barrel,
            &self.list_page,
            &self.create_page,
            &self.edit_page,
            &self.details_page,
            &self.hook_file,
            &self.api_test,
            &self.component_test,
        ]
    }
}
