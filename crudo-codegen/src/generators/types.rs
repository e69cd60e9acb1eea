//! Types part: the entity type declarations file.

use super::PlannedFile;
use crate::paths::ArtifactPaths;

pub(super) fn plan(paths: &ArtifactPaths) -> Vec<PlannedFile> {
    vec![PlannedFile::template("types/entity", &paths.types_file)]
}
