//! Hooks part: the entity data hook.

use super::PlannedFile;
use crate::paths::ArtifactPaths;

pub(super) fn plan(paths: &ArtifactPaths) -> Vec<PlannedFile> {
    vec![PlannedFile::template("hooks/hook", &paths.hook_file)]
}
