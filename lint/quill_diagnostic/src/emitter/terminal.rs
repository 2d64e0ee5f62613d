//! Terminal Emitter
//!
//! Human-readable output with optional ANSI color support:
//!
//! ```text
//! error: Unexpected unknown unit "pixels" (unit-no-unknown)
//!   --> styles/a.css:3:9
//!    |
//!  3 |   top: 10pixels;
//!    |        ^
//! ```

use std::io::{self, Write};

use quill_ir::LineOffsetTable;

use super::{plural_s, DiagnosticEmitter, FileReport};
use crate::Severity;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const BOLD: &str = "\x1b[1m";
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Parse a `--color` flag value.
    pub fn from_name(name: &str) -> Option<ColorMode> {
        match name {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }

    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// `is_tty` tells whether `writer` is a terminal (used for
    /// `ColorMode::Auto`).
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
        };
        self.write_colored(severity.as_str(), color);
    }

    /// One entry: header, location, and a snippet when the line is known.
    fn write_entry(
        &mut self,
        file: &FileReport<'_>,
        lines: Option<&LineOffsetTable>,
        severity: Severity,
        message: &str,
        line: u32,
        column: u32,
    ) {
        self.write_severity(severity);
        if self.colors {
            let _ = writeln!(self.writer, "{}: {message}{}", colors::BOLD, colors::RESET);
        } else {
            let _ = writeln!(self.writer, ": {message}");
        }

        let _ = write!(self.writer, "  ");
        self.write_colored("-->", colors::GUTTER);
        let _ = writeln!(self.writer, " {}:{line}:{column}", file.source);

        let source_line = file
            .text
            .zip(lines)
            .and_then(|(text, lines)| lines.line_text(text, line));
        if let Some(source_line) = source_line {
            self.write_snippet(source_line, line, column, severity);
        }
    }

    fn write_snippet(&mut self, source_line: &str, line: u32, column: u32, severity: Severity) {
        let number = line.to_string();
        let pad = " ".repeat(number.len());
        // Tabs stay tabs so the caret lines up with the source.
        let indent: String = source_line
            .chars()
            .take(column.saturating_sub(1) as usize)
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();

        self.write_colored(&format!(" {pad} |"), colors::GUTTER);
        let _ = writeln!(self.writer);
        self.write_colored(&format!(" {number} |"), colors::GUTTER);
        let _ = writeln!(self.writer, " {source_line}");
        self.write_colored(&format!(" {pad} |"), colors::GUTTER);
        let _ = write!(self.writer, " {indent}");
        let caret_color = match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
        };
        self.write_colored("^", caret_color);
        let _ = writeln!(self.writer);
    }
}

impl TerminalEmitter<io::Stdout> {
    /// Create a terminal emitter for stdout with explicit color mode.
    pub fn stdout(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stdout(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, file: &FileReport<'_>) {
        if file.is_clean() {
            return;
        }
        let lines = file.text.map(LineOffsetTable::build);

        for error in file.parse_errors {
            self.write_entry(
                file,
                lines.as_ref(),
                Severity::Error,
                &error.message,
                error.line,
                error.column,
            );
            let _ = writeln!(self.writer);
        }
        for warning in file.warnings {
            self.write_entry(
                file,
                lines.as_ref(),
                warning.severity,
                &warning.message,
                warning.line,
                warning.column,
            );
            let _ = writeln!(self.writer);
        }
    }

    fn emit_invalid_options(&mut self, messages: &[String]) {
        for message in messages {
            self.write_severity(Severity::Error);
            let _ = writeln!(self.writer, ": {message}");
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        let total = error_count + warning_count;
        if total == 0 {
            return;
        }
        let color = if error_count > 0 {
            colors::ERROR
        } else {
            colors::WARNING
        };
        self.write_colored(&format!("{total} problem{}", plural_s(total)), color);
        let _ = writeln!(
            self.writer,
            " ({error_count} error{}, {warning_count} warning{})",
            plural_s(error_count),
            plural_s(warning_count)
        );
    }
}
