//! The generation run loop.
//!
//! A run normalizes the entity, plans the files for the selected parts,
//! renders and writes them through the [`Ledger`], and commits the result
//! to the manifest. Any error mid-run rolls back every file the run wrote
//! before propagating, so a failed run leaves neither stray files nor a
//! half-updated manifest. Previews walk the same plan without a ledger.

use std::path::Path;

use crudo_ir::CanonicalEntity;
use crudo_manifest::Ledger;
use crudo_schema::{EntitySchema, ProjectConfig};
use eyre::{Result, WrapErr};

use crate::format::{Formatter, NoopFormatter, TidyFormatter};
use crate::generators::{self, FileSource, PlannedFile};
use crate::normalize::normalize;
use crate::parts::{Part, resolve_parts};
use crate::paths::ArtifactPaths;
use crate::templates::TemplateSet;

/// Knobs of a single generation run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Overwrite files that already exist.
    pub force: bool,
    /// Restrict the run to these parts; `None` runs everything.
    pub only: Option<Vec<Part>>,
    /// Parts removed from the selection.
    pub skip: Vec<Part>,
    /// Pass rendered output through the formatter.
    pub format: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            force: false,
            only: None,
            skip: Vec::new(),
            format: true,
        }
    }
}

/// What a committed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub entity: String,
    /// Files this run wrote, in run order.
    pub written: Vec<String>,
    /// Files left untouched because they already existed.
    pub kept: Vec<String>,
    /// Previously generated files the entity no longer produces, deleted
    /// at commit.
    pub pruned: Vec<String>,
}

/// One rendered file of a dry run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

/// Generate all selected parts for one entity under `root`.
pub fn generate(
    schema: &EntitySchema,
    config: &ProjectConfig,
    root: &Path,
    opts: &RunOptions,
) -> Result<RunOutcome> {
    let entity = normalize(schema, config);
    let paths = ArtifactPaths::new(config, &schema.entity, &schema.route);
    let templates = TemplateSet::builtin();
    let formatter = formatter_for(opts);
    let parts = resolve_parts(opts.only.as_deref(), &opts.skip);
    let planned = plan_run(&entity, &paths, &parts, config.defaults.generate_tests);

    let mut ledger = Ledger::new(root);

    // A partial run owns only its parts' files. Its commit list is merged
    // into the previous entry so the other parts' artifacts are neither
    // forgotten nor pruned.
    let partial = parts.len() != Part::ALL.len();
    let previous = if partial {
        ledger
            .entry(&entity.name)
            .wrap_err("failed to read the manifest")?
            .map(|entry| entry.files)
            .unwrap_or_default()
    } else {
        Vec::new()
    };

    for file in &planned {
        let content = match render_planned(file, &entity, &templates, formatter.as_ref()) {
            Ok(content) => content,
            Err(err) => {
                ledger.rollback();
                return Err(err.wrap_err(format!("failed to render {}", file.path)));
            }
        };
        if let Err(err) = ledger.write(&file.path, &content, opts.force) {
            ledger.rollback();
            return Err(err).wrap_err(format!("failed to write {}", file.path));
        }
    }

    let written = ledger.written();
    let kept = ledger.kept();
    let mut files = ledger.produced();
    if partial {
        let mut merged = previous;
        for path in files {
            if !merged.contains(&path) {
                merged.push(path);
            }
        }
        files = merged;
    }

    let pruned = match ledger.commit(&entity.name, &files) {
        Ok(pruned) => pruned,
        Err(err) => {
            ledger.rollback();
            return Err(err).wrap_err("failed to update the manifest");
        }
    };

    Ok(RunOutcome {
        entity: entity.name,
        written,
        kept,
        pruned,
    })
}

/// Render every file the equivalent [`generate`] call would produce,
/// without touching the filesystem.
pub fn preview(
    schema: &EntitySchema,
    config: &ProjectConfig,
    opts: &RunOptions,
) -> Result<Vec<PreviewFile>> {
    let entity = normalize(schema, config);
    let paths = ArtifactPaths::new(config, &schema.entity, &schema.route);
    let templates = TemplateSet::builtin();
    let formatter = formatter_for(opts);
    let parts = resolve_parts(opts.only.as_deref(), &opts.skip);
    let planned = plan_run(&entity, &paths, &parts, config.defaults.generate_tests);

    planned
        .iter()
        .map(|file| {
            let content = render_planned(file, &entity, &templates, formatter.as_ref())
                .wrap_err_with(|| format!("failed to render {}", file.path))?;
            Ok(PreviewFile {
                path: file.path.clone(),
                content,
            })
        })
        .collect()
}

fn formatter_for(opts: &RunOptions) -> Box<dyn Formatter> {
    if opts.format {
        Box::new(TidyFormatter)
    } else {
        Box::new(NoopFormatter)
    }
}

fn plan_run(
    entity: &CanonicalEntity,
    paths: &ArtifactPaths,
    parts: &[Part],
    generate_tests: bool,
) -> Vec<PlannedFile> {
    let mut planned = Vec::new();
    for part in parts {
        planned.extend(generators::plan_part(*part, entity, paths, generate_tests));
    }
    if parts.contains(&Part::Components) {
        planned.push(generators::components_barrel(entity, paths));
    }
    planned
}

fn render_planned(
    file: &PlannedFile,
    entity: &CanonicalEntity,
    templates: &TemplateSet,
    formatter: &dyn Formatter,
) -> Result<String> {
    let raw = match &file.source {
        FileSource::Template(id) => templates.render(id, entity)?,
        FileSource::Inline(content) => content.clone(),
    };
    // Formatter failure is non-fatal; the unformatted output still ships.
    Ok(match formatter.format(&raw) {
        Ok(formatted) => formatted,
        Err(err) => {
            eprintln!("warning: failed to format {}: {err}", file.path);
            raw
        }
    })
}
