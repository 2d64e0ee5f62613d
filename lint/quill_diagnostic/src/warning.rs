//! Warning records and the sink rules report into.

use std::fmt;

use quill_ir::Span;
use serde::{Serialize, Serializer};

/// How a warning affects the run's outcome.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl Severity {
    /// Parse a configured severity name.
    pub fn from_name(name: &str) -> Option<Severity> {
        match name {
            "error" => Some(Severity::Error),
            "warning" => Some(Severity::Warning),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rule violation at a source position.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize)]
pub struct Warning {
    /// Name of the rule that produced it.
    pub rule: &'static str,
    /// Full message, ending in ` (<rule>)`.
    pub message: String,
    pub severity: Severity,
    /// 1-based.
    pub line: u32,
    /// 1-based, in characters.
    pub column: u32,
    /// Absolute byte range of the offending text.
    #[serde(serialize_with = "serialize_span")]
    pub span: Span,
}

impl Warning {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {}: {}", self.line, self.column, self.severity, self.message)
    }
}

fn serialize_span<S: Serializer>(span: &Span, serializer: S) -> Result<S::Ok, S::Error> {
    [span.start, span.end].serialize(serializer)
}

/// A positioned message that is not a rule violation, e.g. a parse error.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize)]
pub struct Notice {
    pub message: String,
    pub line: u32,
    pub column: u32,
}

/// Sink for warnings produced while linting.
pub trait Report {
    fn report(&mut self, warning: Warning);
}

impl Report for Vec<Warning> {
    fn report(&mut self, warning: Warning) {
        self.push(warning);
    }
}

#[cfg(test)]
mod tests;
