//! Clean command report data structures.

use super::output::{Output, Report};

/// Report data from cleaning an entity.
#[derive(Debug)]
pub struct CleanReport {
    /// Entity that was cleaned.
    pub entity: String,
    /// Files deleted from disk.
    pub removed: Vec<String>,
    /// Recorded files that were already gone.
    pub missing: Vec<String>,
}

impl CleanReport {
    /// Whether any files were deleted.
    pub fn has_removals(&self) -> bool {
        !self.removed.is_empty()
    }
}

impl Report for CleanReport {
    fn render(&self, out: &mut dyn Output) {
        if !self.has_removals() && self.missing.is_empty() {
            out.preformatted(&format!("Nothing on disk for {}.", self.entity));
            return;
        }

        if self.has_removals() {
            out.section("Deleted");
            for path in &self.removed {
                out.removed_item(path);
            }
        }

        if !self.missing.is_empty() {
            if self.has_removals() {
                out.newline();
            }
            out.section("Already absent");
            for path in &self.missing {
                out.list_item(path);
            }
        }
    }
}
