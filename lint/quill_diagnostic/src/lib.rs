//! Lint warnings and their delivery.
//!
//! Rules produce [`Warning`]s through the [`Report`] sink. The
//! [`DiagnosticQueue`] orders them by position for stable output, and the
//! emitters in [`emitter`] render per-file results for a terminal or as
//! JSON.

pub mod emitter;
mod queue;
mod warning;

pub use emitter::{ColorMode, DiagnosticEmitter, FileReport, JsonEmitter, TerminalEmitter};
pub use queue::DiagnosticQueue;
pub use warning::{Notice, Report, Severity, Warning};
