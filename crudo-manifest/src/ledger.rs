//! The generation ledger.
//!
//! A [`Ledger`] tracks every file one generation run touches so that a
//! failed run can be undone completely and a successful run can be recorded
//! in the durable manifest. Paths are project-relative and '/'-joined; the
//! ledger owns the mapping to real filesystem paths.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::{Error, Result};
use crate::manifest::{self, Manifest, ManifestEntry, manifest_path};

/// Result of a single write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// File was written.
    Written,
    /// File already existed and was kept (pass `force` to overwrite).
    Skipped,
}

/// Per-run write bookkeeping plus access to the durable manifest.
pub struct Ledger {
    root: PathBuf,
    manifest_path: PathBuf,
    run_log: Vec<(String, WriteOutcome)>,
}

impl Ledger {
    /// Create a ledger rooted at the project directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let manifest_path = manifest_path(&root);
        Self {
            root,
            manifest_path,
            run_log: Vec::new(),
        }
    }

    /// The project root this ledger writes under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write `content` at the project-relative path `rel`.
    ///
    /// Existing files are kept unless `force` is set; parent directories are
    /// created as needed. Both written and kept paths are recorded in run
    /// order so the full artifact list survives into the manifest.
    pub fn write(&mut self, rel: &str, content: &str, force: bool) -> Result<WriteOutcome> {
        let full = self.root.join(rel);

        if full.exists() && !force {
            self.run_log.push((rel.to_string(), WriteOutcome::Skipped));
            return Ok(WriteOutcome::Skipped);
        }

        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io("create", parent, e))?;
        }
        fs::write(&full, content).map_err(|e| Error::io("write", &full, e))?;

        self.run_log.push((rel.to_string(), WriteOutcome::Written));
        Ok(WriteOutcome::Written)
    }

    /// Paths written by this run, in write order.
    pub fn written(&self) -> Vec<String> {
        self.run_log
            .iter()
            .filter(|(_, outcome)| *outcome == WriteOutcome::Written)
            .map(|(rel, _)| rel.clone())
            .collect()
    }

    /// Paths this run skipped because they already existed.
    pub fn kept(&self) -> Vec<String> {
        self.run_log
            .iter()
            .filter(|(_, outcome)| *outcome == WriteOutcome::Skipped)
            .map(|(rel, _)| rel.clone())
            .collect()
    }

    /// Every artifact this run produced or confirmed, in run order.
    ///
    /// This is the list a commit should record: skipped files are still
    /// part of the entity's footprint on disk.
    pub fn produced(&self) -> Vec<String> {
        self.run_log.iter().map(|(rel, _)| rel.clone()).collect()
    }

    /// Undo this run: remove written files, most recent first.
    ///
    /// Files that were kept are left alone since they predate the run.
    /// Individual removal failures are reported on stderr and do not stop
    /// the sweep. Clears the run log.
    pub fn rollback(&mut self) {
        for (rel, outcome) in self.run_log.iter().rev() {
            if *outcome != WriteOutcome::Written {
                continue;
            }
            let full = self.root.join(rel);
            if !full.exists() {
                continue;
            }
            if let Err(e) = fs::remove_file(&full) {
                eprintln!("warning: failed to remove {rel}: {e}");
            }
        }
        self.run_log.clear();
    }

    /// Record a successful run for `entity`.
    ///
    /// Replaces the entity's file list with `files` (deduplicated, order
    /// preserved), keeping the original `generatedAt` and stamping
    /// `lastModified`. Files recorded by a previous run that this run no
    /// longer produces are deleted from disk best-effort; the deleted paths
    /// are returned. Clears the run log, so callers wanting the produced
    /// list must snapshot it first.
    ///
    /// The manifest has no lock; concurrent runs race and the last commit
    /// wins.
    pub fn commit(&mut self, entity: &str, files: &[String]) -> Result<Vec<String>> {
        let mut manifest = self.load()?;
        let now = Utc::now();

        let (generated_at, previous) = match manifest.get(entity) {
            Some(entry) => (entry.generated_at, entry.files.clone()),
            None => (now, Vec::new()),
        };

        let mut seen = HashSet::new();
        let files: Vec<String> = files
            .iter()
            .filter(|rel| seen.insert(rel.as_str()))
            .cloned()
            .collect();

        let mut stale = Vec::new();
        for rel in &previous {
            if files.contains(rel) {
                continue;
            }
            let full = self.root.join(rel);
            if !full.exists() {
                continue;
            }
            match fs::remove_file(&full) {
                Ok(()) => stale.push(rel.clone()),
                Err(e) => eprintln!("warning: failed to remove stale file {rel}: {e}"),
            }
        }

        manifest.insert(
            entity.to_string(),
            ManifestEntry {
                entity: entity.to_string(),
                files,
                generated_at,
                last_modified: now,
            },
        );
        self.save(&manifest)?;
        self.run_log.clear();
        Ok(stale)
    }

    /// Load the manifest (empty when the file does not exist).
    pub fn load(&self) -> Result<Manifest> {
        manifest::load_from(&self.manifest_path)
    }

    /// Look up one entity's record.
    pub fn entry(&self, entity: &str) -> Result<Option<ManifestEntry>> {
        Ok(self.load()?.get(entity).cloned())
    }

    /// Delete an entity's files and drop it from the manifest.
    ///
    /// Missing files are skipped silently; removal failures are reported on
    /// stderr. Returns the paths actually deleted. Unknown entities return
    /// an empty list without touching the manifest.
    pub fn remove_entity(&self, entity: &str) -> Result<Vec<String>> {
        let mut manifest = self.load()?;
        let Some(entry) = manifest.get(entity) else {
            return Ok(Vec::new());
        };

        let mut removed = Vec::new();
        for rel in &entry.files {
            let full = self.root.join(rel);
            if !full.exists() {
                continue;
            }
            match fs::remove_file(&full) {
                Ok(()) => removed.push(rel.clone()),
                Err(e) => eprintln!("warning: failed to remove {rel}: {e}"),
            }
        }

        manifest.remove(entity);
        self.save(&manifest)?;
        Ok(removed)
    }

    /// Write an empty manifest if none exists yet.
    pub fn ensure_manifest(&self) -> Result<()> {
        if self.manifest_path.exists() {
            return Ok(());
        }
        self.save(&Manifest::new())
    }

    fn save(&self, manifest: &Manifest) -> Result<()> {
        manifest::save_to(&self.manifest_path, manifest)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let mut ledger = Ledger::new(temp.path());

        let outcome = ledger.write("src/store/product/productApi.ts", "api", false).unwrap();

        assert_eq!(outcome, WriteOutcome::Written);
        let full = temp.path().join("src/store/product/productApi.ts");
        assert_eq!(fs::read_to_string(full).unwrap(), "api");
        assert_eq!(ledger.written(), vec!["src/store/product/productApi.ts"]);
    }

    #[test]
    fn test_write_skips_existing_without_force() {
        let temp = TempDir::new().unwrap();
        let mut ledger = Ledger::new(temp.path());
        fs::write(temp.path().join("index.ts"), "original").unwrap();

        let outcome = ledger.write("index.ts", "replacement", false).unwrap();

        assert_eq!(outcome, WriteOutcome::Skipped);
        assert_eq!(
            fs::read_to_string(temp.path().join("index.ts")).unwrap(),
            "original"
        );
        assert!(ledger.written().is_empty());
        assert_eq!(ledger.kept(), vec!["index.ts"]);
    }

    #[test]
    fn test_write_force_overwrites() {
        let temp = TempDir::new().unwrap();
        let mut ledger = Ledger::new(temp.path());
        fs::write(temp.path().join("index.ts"), "original").unwrap();

        let outcome = ledger.write("index.ts", "replacement", true).unwrap();

        assert_eq!(outcome, WriteOutcome::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("index.ts")).unwrap(),
            "replacement"
        );
    }

    #[test]
    fn test_produced_preserves_run_order() {
        let temp = TempDir::new().unwrap();
        let mut ledger = Ledger::new(temp.path());
        fs::write(temp.path().join("b.ts"), "existing").unwrap();

        ledger.write("a.ts", "a", false).unwrap();
        ledger.write("b.ts", "b", false).unwrap();
        ledger.write("c.ts", "c", false).unwrap();

        assert_eq!(ledger.produced(), vec!["a.ts", "b.ts", "c.ts"]);
        assert_eq!(ledger.written(), vec!["a.ts", "c.ts"]);
        assert_eq!(ledger.kept(), vec!["b.ts"]);
    }

    #[test]
    fn test_rollback_removes_written_files_only() {
        let temp = TempDir::new().unwrap();
        let mut ledger = Ledger::new(temp.path());
        fs::write(temp.path().join("kept.ts"), "existing").unwrap();

        ledger.write("one.ts", "1", false).unwrap();
        ledger.write("kept.ts", "ignored", false).unwrap();
        ledger.write("two.ts", "2", false).unwrap();

        ledger.rollback();

        assert!(!temp.path().join("one.ts").exists());
        assert!(!temp.path().join("two.ts").exists());
        assert!(temp.path().join("kept.ts").exists());
        assert!(ledger.produced().is_empty());
    }

    #[test]
    fn test_rollback_tolerates_already_missing_files() {
        let temp = TempDir::new().unwrap();
        let mut ledger = Ledger::new(temp.path());

        ledger.write("gone.ts", "x", false).unwrap();
        fs::remove_file(temp.path().join("gone.ts")).unwrap();

        ledger.rollback();
        assert!(ledger.produced().is_empty());
    }

    #[test]
    fn test_commit_creates_and_updates_entry() {
        let temp = TempDir::new().unwrap();
        let mut ledger = Ledger::new(temp.path());

        ledger.write("a.ts", "a", false).unwrap();
        let files = ledger.produced();
        ledger.commit("Product", &files).unwrap();

        let first = ledger.entry("Product").unwrap().unwrap();
        assert_eq!(first.entity, "Product");
        assert_eq!(first.files, vec!["a.ts"]);

        ledger.write("a.ts", "a", true).unwrap();
        ledger.write("b.ts", "b", false).unwrap();
        let files = ledger.produced();
        ledger.commit("Product", &files).unwrap();

        let second = ledger.entry("Product").unwrap().unwrap();
        assert_eq!(second.files, vec!["a.ts", "b.ts"]);
        assert_eq!(second.generated_at, first.generated_at);
        assert!(second.last_modified >= first.last_modified);
    }

    #[test]
    fn test_commit_prunes_files_no_longer_produced() {
        let temp = TempDir::new().unwrap();
        let mut ledger = Ledger::new(temp.path());

        ledger.write("a.ts", "a", false).unwrap();
        ledger.write("b.ts", "b", false).unwrap();
        let files = ledger.produced();
        ledger.commit("Product", &files).unwrap();

        ledger.write("a.ts", "a", true).unwrap();
        let files = ledger.produced();
        let stale = ledger.commit("Product", &files).unwrap();

        assert_eq!(stale, vec!["b.ts"]);
        assert!(!temp.path().join("b.ts").exists());
        assert!(temp.path().join("a.ts").exists());
        assert_eq!(
            ledger.entry("Product").unwrap().unwrap().files,
            vec!["a.ts"]
        );
    }

    #[test]
    fn test_commit_never_prunes_kept_files() {
        let temp = TempDir::new().unwrap();
        let mut ledger = Ledger::new(temp.path());

        ledger.write("a.ts", "a", false).unwrap();
        let files = ledger.produced();
        ledger.commit("Product", &files).unwrap();

        // Second unforced run: the file exists, so it is kept, not written.
        ledger.write("a.ts", "a", false).unwrap();
        assert_eq!(ledger.kept(), vec!["a.ts"]);
        let files = ledger.produced();
        let stale = ledger.commit("Product", &files).unwrap();

        assert!(stale.is_empty());
        assert!(temp.path().join("a.ts").exists());
        assert_eq!(
            ledger.entry("Product").unwrap().unwrap().files,
            vec!["a.ts"]
        );
    }

    #[test]
    fn test_commit_deduplicates_files() {
        let temp = TempDir::new().unwrap();
        let mut ledger = Ledger::new(temp.path());

        ledger.write("a.ts", "a", false).unwrap();
        let files = vec!["a.ts".to_string(), "a.ts".to_string()];
        ledger.commit("Product", &files).unwrap();

        assert_eq!(ledger.entry("Product").unwrap().unwrap().files, vec!["a.ts"]);
    }

    #[test]
    fn test_entry_for_unknown_entity() {
        let temp = TempDir::new().unwrap();
        let ledger = Ledger::new(temp.path());
        assert!(ledger.entry("Order").unwrap().is_none());
    }

    #[test]
    fn test_remove_entity_deletes_files_and_record() {
        let temp = TempDir::new().unwrap();
        let mut ledger = Ledger::new(temp.path());

        ledger.write("a.ts", "a", false).unwrap();
        ledger.write("b.ts", "b", false).unwrap();
        let files = ledger.produced();
        ledger.commit("Product", &files).unwrap();

        // One tracked file disappears before cleaning; removal skips it.
        fs::remove_file(temp.path().join("b.ts")).unwrap();

        let removed = ledger.remove_entity("Product").unwrap();
        assert_eq!(removed, vec!["a.ts"]);
        assert!(!temp.path().join("a.ts").exists());
        assert!(ledger.entry("Product").unwrap().is_none());
    }

    #[test]
    fn test_remove_unknown_entity_is_a_no_op() {
        let temp = TempDir::new().unwrap();
        let ledger = Ledger::new(temp.path());
        assert!(ledger.remove_entity("Ghost").unwrap().is_empty());
        assert!(!manifest_path(temp.path()).exists());
    }

    #[test]
    fn test_ensure_manifest_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let mut ledger = Ledger::new(temp.path());

        ledger.ensure_manifest().unwrap();
        assert!(manifest_path(temp.path()).exists());

        ledger.write("a.ts", "a", false).unwrap();
        let files = ledger.produced();
        ledger.commit("Product", &files).unwrap();

        // A second ensure must not wipe existing entries.
        ledger.ensure_manifest().unwrap();
        assert!(ledger.entry("Product").unwrap().is_some());
    }
}
