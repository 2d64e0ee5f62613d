//! Ordered warning collection.

use crate::{Report, Severity, Warning};

/// Collects warnings and hands them out ordered by position.
///
/// Ordering is by `(line, column)` and stable, so warnings at the same
/// position keep the order they were reported in.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticQueue {
    warnings: Vec<Warning>,
    error_count: usize,
    warning_count: usize,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, warning: Warning) {
        match warning.severity {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
        }
        self.warnings.push(warning);
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Number of queued error-severity warnings.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Number of queued warning-severity warnings.
    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    /// Take all queued warnings in position order, leaving the queue empty.
    pub fn flush(&mut self) -> Vec<Warning> {
        let mut warnings = std::mem::take(&mut self.warnings);
        self.error_count = 0;
        self.warning_count = 0;
        warnings.sort_by_key(|w| (w.line, w.column));
        warnings
    }
}

impl Report for DiagnosticQueue {
    fn report(&mut self, warning: Warning) {
        self.push(warning);
    }
}
