use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// Result type for crudo-manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to {action} '{path}'")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest at '{path}'")]
    #[diagnostic(help(
        "the manifest may be corrupt; deleting it resets tracking without touching generated files"
    ))]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an IO error for the given action and path
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            action,
            path: path.into(),
            source,
        })
    }

    /// Create a manifest JSON error
    pub fn json(path: &Path, source: serde_json::Error) -> Box<Self> {
        Box::new(Error::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}
