//! Code generation engine for the crudo CLI generator.
//!
//! This crate turns a parsed entity schema plus project configuration into
//! React/TypeScript artifacts on disk, tracked by the generation ledger.
//!
//! # Module Organization
//!
//! - [`normalize`] - Schema normalization into canonical template data
//! - [`templates`] - Typed renderers, one per generated file kind
//! - [`builder`] - Indentation-aware code building blocks
//! - [`naming`] - Case conversions for identifiers and paths
//! - [`paths`] - Artifact path derivation
//! - [`parts`] - Part selection for `--only`/`--skip`
//! - [`format`] - Whitespace cleanup pass over rendered output
//! - [`run`] - The generate/preview run loop
//!
//! # Pipeline
//!
//! ```text
//! EntitySchema + ProjectConfig
//!     → normalize → CanonicalEntity
//!     → plan parts → render templates → format
//!     → ledger writes → manifest commit
//! ```

pub mod builder;
pub mod format;
mod generators;
pub mod naming;
pub mod normalize;
pub mod parts;
pub mod paths;
pub mod run;
pub mod templates;

pub use normalize::normalize;
pub use parts::{Part, resolve_parts};
pub use paths::ArtifactPaths;
pub use run::{PreviewFile, RunOptions, RunOutcome, generate, preview};
pub use templates::{Template, TemplateSet};
