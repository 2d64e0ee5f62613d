//! JSON Emitter
//!
//! Buffers per-file results and writes them as one JSON array on
//! [`flush`](DiagnosticEmitter::flush):
//!
//! ```text
//! [{ "source": "a.css", "errored": true, "warnings": [...],
//!    "invalidOptions": [...], "parseErrors": [...] }]
//! ```

use std::io::Write;

use serde::Serialize;

use super::{DiagnosticEmitter, FileReport};
use crate::{Notice, Warning};

struct BufferedFile {
    source: String,
    errored: bool,
    warnings: Vec<Warning>,
    parse_errors: Vec<Notice>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonResult<'a> {
    source: &'a str,
    errored: bool,
    warnings: &'a [Warning],
    invalid_options: &'a [String],
    parse_errors: &'a [Notice],
}

/// JSON emitter for machine-readable output.
pub struct JsonEmitter<W: Write> {
    writer: W,
    files: Vec<BufferedFile>,
    invalid_options: Vec<String>,
}

impl<W: Write> JsonEmitter<W> {
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            files: Vec::new(),
            invalid_options: Vec::new(),
        }
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn emit(&mut self, file: &FileReport<'_>) {
        self.files.push(BufferedFile {
            source: file.source.to_string(),
            errored: file.errored(),
            warnings: file.warnings.to_vec(),
            parse_errors: file.parse_errors.to_vec(),
        });
    }

    fn emit_invalid_options(&mut self, messages: &[String]) {
        self.invalid_options.extend_from_slice(messages);
    }

    fn flush(&mut self) {
        let errored_by_options = !self.invalid_options.is_empty();
        let results: Vec<JsonResult<'_>> = self
            .files
            .iter()
            .map(|file| JsonResult {
                source: &file.source,
                errored: file.errored || errored_by_options,
                warnings: &file.warnings,
                invalid_options: &self.invalid_options,
                parse_errors: &file.parse_errors,
            })
            .collect();
        let _ = serde_json::to_writer_pretty(&mut self.writer, &results);
        let _ = writeln!(self.writer);
        let _ = self.writer.flush();
        self.files.clear();
        self.invalid_options.clear();
    }

    /// The summary is derivable from the results; nothing is written.
    fn emit_summary(&mut self, _error_count: usize, _warning_count: usize) {}
}

#[cfg(test)]
mod tests;
