//! Formatting pass applied to rendered output before it is written.
//!
//! This is a seam, not a real code formatter: generated files get light
//! whitespace cleanup and nothing else. Formatter failure is non-fatal;
//! callers fall back to the unformatted string.

use eyre::Result;

/// A formatting pass over one rendered file.
pub trait Formatter {
    fn format(&self, source: &str) -> Result<String>;
}

/// Trims trailing whitespace, collapses runs of blank lines and guarantees
/// a final newline.
pub struct TidyFormatter;

impl Formatter for TidyFormatter {
    fn format(&self, source: &str) -> Result<String> {
        let mut out = String::with_capacity(source.len());
        let mut blank_run = 0;
        for line in source.lines() {
            let trimmed = line.trim_end();
            if trimmed.is_empty() {
                blank_run += 1;
                if blank_run > 1 {
                    continue;
                }
            } else {
                blank_run = 0;
                out.push_str(trimmed);
            }
            out.push('\n');
        }
        Ok(out)
    }
}

/// Passes rendered output through untouched.
pub struct NoopFormatter;

impl Formatter for NoopFormatter {
    fn format(&self, source: &str) -> Result<String> {
        Ok(source.to_string())
    }
}
