//! Pages part: routed pages derived from the view plan.
//!
//! The list page always exists. Create and edit pages exist only when the
//! mutation view is a routed page, the details page only when the details
//! view is. Modal views get no file of their own, which also means a view
//! flipped from page to modal leaves its old page files stale for commit to
//! prune.

use crudo_ir::CanonicalEntity;

use super::PlannedFile;
use crate::paths::ArtifactPaths;

pub(super) fn plan(entity: &CanonicalEntity, paths: &ArtifactPaths) -> Vec<PlannedFile> {
    let mut files = vec![PlannedFile::template("pages/list", &paths.list_page)];
    if entity.views.mutation.is_page() {
        files.push(PlannedFile::template("pages/create", &paths.create_page));
        files.push(PlannedFile::template("pages/edit", &paths.edit_page));
    }
    if entity.views.details.is_page() {
        files.push(PlannedFile::template("pages/details", &paths.details_page));
    }
    files
}
