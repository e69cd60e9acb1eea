//! Clean operation - delete an entity's generated files and drop it from
//! the manifest.

use std::path::Path;

use crudo_manifest::Ledger;
use eyre::{Context, Result};

use crate::reports::CleanReport;

/// Options for the clean operation.
pub struct CleanOptions<'a> {
    /// Project root holding the manifest.
    pub root: &'a Path,
}

/// Execute the clean operation.
///
/// Deletes the files the manifest records for the entity and removes its
/// entry. Files already gone from disk are reported separately.
pub fn clean(entity: &str, expected: &[String], opts: CleanOptions) -> Result<CleanReport> {
    let removed = Ledger::new(opts.root)
        .remove_entity(entity)
        .wrap_err("failed to update the manifest")?;

    let missing = expected
        .iter()
        .filter(|file| !removed.contains(file))
        .cloned()
        .collect();

    Ok(CleanReport {
        entity: entity.to_string(),
        removed,
        missing,
    })
}
