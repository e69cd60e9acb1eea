//! Generate command report data structures.

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Entity the run was for.
    pub entity: String,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of a generation run.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Files this run wrote, in run order.
    pub written: Vec<String>,
    /// Files left untouched because they already exist.
    pub kept: Vec<String>,
    /// Stale files deleted at commit.
    pub pruned: Vec<String>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.preformatted(&self.entity);
        out.newline();

        if !written.written.is_empty() {
            out.section("Written");
            for path in &written.written {
                out.added_item(path);
            }
        }

        if !written.kept.is_empty() {
            if !written.written.is_empty() {
                out.newline();
            }
            out.section("Kept (pass --force to overwrite)");
            for path in &written.kept {
                out.list_item(path);
            }
        }

        if !written.pruned.is_empty() {
            if !written.written.is_empty() || !written.kept.is_empty() {
                out.newline();
            }
            out.section("Pruned");
            for path in &written.pruned {
                out.removed_item(path);
            }
        }

        out.newline();
        out.key_value(
            "Total",
            &format!(
                "{} written, {} kept, {} pruned",
                written.written.len(),
                written.kept.len(),
                written.pruned.len()
            ),
        );
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}
