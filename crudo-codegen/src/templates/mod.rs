//! Template registry and typed renderers.
//!
//! One renderer per generated file kind, registered under a stable id in a
//! [`TemplateSet`]. The set is built once at startup and never mutated, so
//! rendering is a pure function of (id, entity). Renderers produce real
//! React/RTK Query/Formik/TanStack code through [`crate::builder`].

mod api;
mod details;
mod form;
mod hook;
mod pages;
mod table;
mod test_files;
mod types;

use crudo_ir::CanonicalEntity;
use eyre::{Result, bail};
use indexmap::IndexMap;

pub use api::ApiTs;
pub use details::DetailsTsx;
pub use form::FormTsx;
pub use hook::HookTs;
pub use pages::{CreatePageTsx, DetailsPageTsx, EditPageTsx, ListPageTsx};
pub use table::TableTsx;
pub use test_files::{ApiTestTs, FormTestTsx};
pub use types::TypesTs;

/// A typed renderer for one generated file kind.
pub trait Template {
    /// Stable identifier, e.g. `components/form`.
    fn id(&self) -> &'static str;

    /// Render the file for a fully normalized entity.
    fn render(&self, entity: &CanonicalEntity) -> String;
}

/// The closed set of templates, keyed by id.
pub struct TemplateSet {
    templates: IndexMap<&'static str, Box<dyn Template>>,
}

impl TemplateSet {
    /// All built-in templates in their canonical order.
    pub fn builtin() -> Self {
        let templates: Vec<Box<dyn Template>> = vec![
            Box::new(ApiTs),
            Box::new(TypesTs),
            Box::new(FormTsx),
            Box::new(TableTsx),
            Box::new(DetailsTsx),
            Box::new(ListPageTsx),
            Box::new(CreatePageTsx),
            Box::new(EditPageTsx),
            Box::new(DetailsPageTsx),
            Box::new(HookTs),
            Box::new(ApiTestTs),
            Box::new(FormTestTsx),
        ];
        Self {
            templates: templates.into_iter().map(|t| (t.id(), t)).collect(),
        }
    }

    /// Render the template registered under `id`.
    pub fn render(&self, id: &str, entity: &CanonicalEntity) -> Result<String> {
        match self.templates.get(id) {
            Some(template) => Ok(template.render(entity)),
            None => bail!(
                "unknown template id '{}', known ids: {}",
                id,
                self.ids().join(", ")
            ),
        }
    }

    /// Registered ids, in registration order.
    pub fn ids(&self) -> Vec<&'static str> {
        self.templates.keys().copied().collect()
    }
}
