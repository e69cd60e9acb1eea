//! Generate operation - render artifacts and record them in the manifest.

use std::path::Path;

use crudo_codegen::{Part, RunOptions};
use crudo_schema::{EntitySchema, ProjectConfig};
use eyre::Result;

use crate::reports::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Project root the artifacts are written under.
    pub root: &'a Path,
    /// Overwrite files that already exist on disk.
    pub force: bool,
    /// Restrict the run to these parts.
    pub only: Option<Vec<Part>>,
    /// Drop these parts from the run.
    pub skip: Vec<Part>,
    /// Tidy rendered output before writing.
    pub format: bool,
    /// Render without touching the filesystem or the manifest.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Renders every selected artifact for the entity and either writes them
/// under the project root or, for a dry run, carries the rendered content
/// back for display.
pub fn generate(
    schema: &EntitySchema,
    config: &ProjectConfig,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let run = RunOptions {
        force: opts.force,
        only: opts.only,
        skip: opts.skip,
        format: opts.format,
    };

    let result = if opts.dry_run {
        let files = crudo_codegen::preview(schema, config, &run)?
            .into_iter()
            .map(|file| PreviewFile {
                path: file.path,
                content: file.content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let outcome = crudo_codegen::generate(schema, config, opts.root, &run)?;
        GenerationResult::Written(WrittenResult {
            written: outcome.written,
            kept: outcome.kept,
            pruned: outcome.pruned,
        })
    };

    Ok(GenerateReport {
        entity: schema.entity.clone(),
        result,
    })
}
