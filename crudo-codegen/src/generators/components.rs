//! Components part: form, table and details components.
//!
//! All three are generated regardless of the view plan. A modal details view
//! embeds the details component in the list page; a disabled one simply
//! leaves it unreferenced. The barrel is planned separately by the run loop
//! so it lands after the components themselves.

use super::PlannedFile;
use crate::paths::ArtifactPaths;

pub(super) fn plan(paths: &ArtifactPaths) -> Vec<PlannedFile> {
    vec![
        PlannedFile::template("components/form", &paths.form_component),
        PlannedFile::template("components/table", &paths.table_component),
        PlannedFile::template("components/details", &paths.details_component),
    ]
}
