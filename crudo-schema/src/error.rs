use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for crudo-schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("check that the path exists, or run 'crudo init' first"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {what}")]
    #[diagnostic(code(crudo::parse_error))]
    Parse {
        what: &'static str,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(crudo::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("'{name}' is a reserved word in generated code")]
    #[diagnostic(help("rename '{name}'; it would collide with a JavaScript keyword in the output"))]
    ReservedWord {
        #[source_code]
        src: NamedSource<String>,
        #[label("reserved word used here")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(help("{reason}. Use only letters and numbers, starting with a letter."))]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },
}

impl Error {
    /// Create a parse error from a serde_json error with source context
    pub fn parse(
        source: serde_json::Error,
        what: &'static str,
        src: &str,
        filename: &str,
    ) -> Box<Self> {
        let span = json_error_span(src, &source);
        Box::new(Error::Parse {
            what,
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a validation error with source context
    pub fn validation(message: impl Into<String>, src: &str, filename: &str) -> Box<Self> {
        Box::new(Error::Validation {
            src: NamedSource::new(filename, src.to_string()),
            span: None,
            message: message.into(),
        })
    }

    /// Create a validation error with a span
    pub fn validation_at(
        message: impl Into<String>,
        src: &str,
        filename: &str,
        span: impl Into<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::Validation {
            src: NamedSource::new(filename, src.to_string()),
            span: Some(span.into()),
            message: message.into(),
        })
    }

    /// Create a reserved word error
    pub fn reserved_word(
        name: impl Into<String>,
        context: impl Into<String>,
        src: &str,
        filename: &str,
        span: Option<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::ReservedWord {
            src: NamedSource::new(filename, src.to_string()),
            span,
            name: name.into(),
            context: context.into(),
        })
    }

    /// Create an invalid identifier error
    pub fn invalid_identifier(
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        src: &str,
        filename: &str,
        span: Option<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::InvalidIdentifier {
            src: NamedSource::new(filename, src.to_string()),
            span,
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }
}

/// Locate a serde_json error in the source text.
///
/// serde_json reports 1-based line/column; miette wants a byte offset.
fn json_error_span(src: &str, source: &serde_json::Error) -> Option<SourceSpan> {
    let line = source.line();
    if line == 0 {
        return None;
    }

    let mut offset = 0usize;
    for (idx, text) in src.split_inclusive('\n').enumerate() {
        if idx + 1 == line {
            let column = source.column().saturating_sub(1).min(text.len());
            return Some(SourceSpan::from((offset + column, 1)));
        }
        offset += text.len();
    }
    None
}
