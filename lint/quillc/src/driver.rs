//! Per-file linting.
//!
//! Each file is read, parsed into its own tree and linted by a shared
//! [`Linter`]. Rules and tables are immutable, so files are independent and
//! run on a rayon pool; results come back in input order either way.

use std::fs;
use std::path::{Path, PathBuf};

use quill_diagnostic::{FileReport, Notice, Warning};
use quill_ir::LineOffsetTable;
use quill_lint::Linter;
use rayon::prelude::*;

/// Lint results for one file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileResult {
    pub path: PathBuf,
    /// Display name used in reports.
    pub name: String,
    /// Source text; `None` when the file could not be read.
    pub source: Option<String>,
    pub warnings: Vec<Warning>,
    pub parse_errors: Vec<Notice>,
    /// Why the file could not be read.
    pub read_error: Option<String>,
}

impl FileResult {
    /// Borrow as an emitter input.
    pub fn report(&self) -> FileReport<'_> {
        FileReport {
            source: &self.name,
            text: self.source.as_deref(),
            warnings: &self.warnings,
            parse_errors: &self.parse_errors,
        }
    }

    pub fn errored(&self) -> bool {
        self.read_error.is_some() || self.report().errored()
    }
}

/// Parse and lint one source, returning warnings and parse problems.
pub fn lint_source(linter: &Linter, source: &str) -> (Vec<Warning>, Vec<Notice>) {
    let output = quill_parse::parse(source);
    let parse_errors = if output.has_errors() {
        let lines = LineOffsetTable::build(source);
        output
            .errors
            .iter()
            .map(|error| {
                let pos = lines.position(source, error.span().start);
                Notice {
                    message: error.to_string(),
                    line: pos.line,
                    column: pos.column,
                }
            })
            .collect()
    } else {
        Vec::new()
    };
    let report = linter.lint(&output.stylesheet);
    (report.warnings, parse_errors)
}

/// Read and lint the file at `path`.
pub fn lint_file(linter: &Linter, path: &Path) -> FileResult {
    let name = path.display().to_string();
    match fs::read_to_string(path) {
        Ok(source) => {
            let (warnings, parse_errors) = lint_source(linter, &source);
            tracing::debug!(file = %name, warnings = warnings.len(), "linted");
            FileResult {
                path: path.to_path_buf(),
                name,
                source: Some(source),
                warnings,
                parse_errors,
                read_error: None,
            }
        }
        Err(error) => {
            tracing::warn!(file = %name, %error, "could not read file");
            FileResult {
                path: path.to_path_buf(),
                name,
                source: None,
                warnings: Vec::new(),
                parse_errors: Vec::new(),
                read_error: Some(error.to_string()),
            }
        }
    }
}

/// Lint every file, in parallel unless `parallel` is false.
pub fn lint_files(linter: &Linter, files: &[PathBuf], parallel: bool) -> Vec<FileResult> {
    let sequential = || -> Vec<FileResult> {
        files.iter().map(|path| lint_file(linter, path)).collect()
    };
    if !parallel || files.len() < 2 {
        return sequential();
    }

    rayon::ThreadPoolBuilder::new()
        .thread_name(|index| format!("quill-lint-{index}"))
        .build()
        .map(|pool| {
            pool.install(|| {
                files
                    .par_iter()
                    .map(|path| lint_file(linter, path))
                    .collect::<Vec<_>>()
            })
        })
        .unwrap_or_else(|e| {
            tracing::warn!("failed to create thread pool ({e}), linting sequentially");
            sequential()
        })
}
