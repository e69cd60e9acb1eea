//! Api part: the RTK Query slice and the store barrel.

use crudo_ir::CanonicalEntity;

use super::PlannedFile;
use crate::naming::to_camel_case;
use crate::paths::ArtifactPaths;

pub(super) fn plan(entity: &CanonicalEntity, paths: &ArtifactPaths) -> Vec<PlannedFile> {
    let camel = to_camel_case(&entity.name);
    vec![
        PlannedFile::template("api/inject", &paths.api_file),
        PlannedFile::inline(
            format!("export * from './{camel}Api';\n"),
            &paths.api_barrel,
        ),
    ]
}
