//! Generation ledger and durable manifest for the crudo generator.
//!
//! Two cooperating pieces:
//!
//! - [`Ledger`] tracks the files of one generation run (write, skip,
//!   rollback) and turns a successful run into a manifest commit.
//! - The manifest at `.crudo/manifest.json` is the durable record of what
//!   was generated for which entity, consumed by `list` and `clean`.

mod error;
mod ledger;
mod manifest;

pub use error::{Error, Result};
pub use ledger::{Ledger, WriteOutcome};
pub use manifest::{MANIFEST_DIR, MANIFEST_FILE, Manifest, ManifestEntry, manifest_path};
