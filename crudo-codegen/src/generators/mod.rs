//! Per-part file planning.
//!
//! Each part module turns the canonical entity and its artifact paths into
//! the list of files that part produces. Planning is pure; the run loop in
//! [`crate::run`] renders and writes the plan, so a dry run and a real run
//! always agree on the file set.

mod api;
mod components;
mod hooks;
mod pages;
mod types;

use crudo_ir::CanonicalEntity;

use crate::naming::to_pascal_case;
use crate::parts::Part;
use crate::paths::ArtifactPaths;

/// Where a planned file's content comes from.
pub(crate) enum FileSource {
    /// Rendered by the registered template with this id.
    Template(&'static str),
    /// Literal content, used for barrel files.
    Inline(String),
}

/// One file a generation run will produce.
pub(crate) struct PlannedFile {
    pub source: FileSource,
    pub path: String,
}

impl PlannedFile {
    fn template(id: &'static str, path: &str) -> Self {
        Self {
            source: FileSource::Template(id),
            path: path.to_string(),
        }
    }

    fn inline(content: String, path: &str) -> Self {
        Self {
            source: FileSource::Inline(content),
            path: path.to_string(),
        }
    }
}

/// Plan the files for one part.
pub(crate) fn plan_part(
    part: Part,
    entity: &CanonicalEntity,
    paths: &ArtifactPaths,
    generate_tests: bool,
) -> Vec<PlannedFile> {
    match part {
        Part::Api => api::plan(entity, paths),
        Part::Types => types::plan(paths),
        Part::Components => components::plan(paths),
        Part::Pages => pages::plan(entity, paths),
        Part::Hooks => hooks::plan(paths),
        Part::Tests => tests::plan(paths, generate_tests),
    }
}

/// The entity component barrel, written after the parts loop whenever the
/// components part ran.
pub(crate) fn components_barrel(entity: &CanonicalEntity, paths: &ArtifactPaths) -> PlannedFile {
    let pascal = to_pascal_case(&entity.name);
    let content = format!(
        "export {{ {pascal}Form }} from './{pascal}Form';\n\
         export {{ {pascal}Table }} from './{pascal}Table';\n\
         export {{ {pascal}Details }} from './{pascal}Details';\n"
    );
    PlannedFile::inline(content, &paths.components_barrel)
}
