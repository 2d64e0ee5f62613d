//! Output formats for lint results.
//!
//! - Terminal: human-readable, optionally colored, with source snippets
//! - JSON: one array of per-file results for tooling
//!
//! Emitters receive one [`FileReport`] per linted file, then configuration
//! problems, then a summary.

mod json;
mod terminal;

pub use json::JsonEmitter;
pub use terminal::{ColorMode, TerminalEmitter};

use crate::{Notice, Warning};

/// Lint results for one source.
#[derive(Copy, Clone, Debug)]
pub struct FileReport<'a> {
    /// Path or other name of the source.
    pub source: &'a str,
    /// Source text, used for snippets when available.
    pub text: Option<&'a str>,
    /// Warnings in position order.
    pub warnings: &'a [Warning],
    pub parse_errors: &'a [Notice],
}

impl FileReport<'_> {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty() && self.parse_errors.is_empty()
    }

    /// True when any warning has error severity or parsing failed.
    pub fn errored(&self) -> bool {
        !self.parse_errors.is_empty() || self.warnings.iter().any(Warning::is_error)
    }
}

/// Trait for emitting lint results in various formats.
pub trait DiagnosticEmitter {
    /// Emit the results for one file.
    fn emit(&mut self, file: &FileReport<'_>);

    fn emit_all(&mut self, files: &[FileReport<'_>]) {
        for file in files {
            self.emit(file);
        }
    }

    /// Emit rule option problems found while configuring the linter.
    fn emit_invalid_options(&mut self, messages: &[String]);

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit a summary of errors/warnings.
    fn emit_summary(&mut self, error_count: usize, warning_count: usize);
}

/// Returns "s" for plural counts, "" for singular.
#[inline]
pub(crate) fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
