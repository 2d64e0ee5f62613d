#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use super::*;
use crate::Severity;
use pretty_assertions::assert_eq;
use quill_ir::Span;
use serde_json::json;

fn warning(severity: Severity) -> Warning {
    Warning {
        rule: "value-list-comma-newline-before",
        message: "Expected newline before \",\" (value-list-comma-newline-before)".to_string(),
        severity,
        line: 1,
        column: 12,
        span: Span::new(11, 12),
    }
}

fn flush_to_json(f: impl FnOnce(&mut JsonEmitter<&mut Vec<u8>>)) -> serde_json::Value {
    let mut output = Vec::new();
    let mut emitter = JsonEmitter::new(&mut output);
    f(&mut emitter);
    emitter.flush();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn per_file_results() {
    let warnings = [warning(Severity::Warning)];
    let value = flush_to_json(|emitter| {
        emitter.emit(&FileReport {
            source: "a.css",
            text: None,
            warnings: &warnings,
            parse_errors: &[],
        });
        emitter.emit(&FileReport {
            source: "b.css",
            text: None,
            warnings: &[],
            parse_errors: &[],
        });
    });
    assert_eq!(
        value,
        json!([
            {
                "source": "a.css",
                "errored": false,
                "warnings": [{
                    "rule": "value-list-comma-newline-before",
                    "message": "Expected newline before \",\" (value-list-comma-newline-before)",
                    "severity": "warning",
                    "line": 1,
                    "column": 12,
                    "span": [11, 12],
                }],
                "invalidOptions": [],
                "parseErrors": [],
            },
            {
                "source": "b.css",
                "errored": false,
                "warnings": [],
                "invalidOptions": [],
                "parseErrors": [],
            },
        ])
    );
}

#[test]
fn error_severity_marks_file_errored() {
    let warnings = [warning(Severity::Error)];
    let value = flush_to_json(|emitter| {
        emitter.emit(&FileReport {
            source: "a.css",
            text: None,
            warnings: &warnings,
            parse_errors: &[],
        });
    });
    assert_eq!(value[0]["errored"], json!(true));
}

#[test]
fn invalid_options_attach_to_every_file() {
    let value = flush_to_json(|emitter| {
        emitter.emit_invalid_options(&["Unknown rule \"nope\"".to_string()]);
        for source in ["a.css", "b.css"] {
            emitter.emit(&FileReport {
                source,
                text: None,
                warnings: &[],
                parse_errors: &[],
            });
        }
    });
    for result in value.as_array().unwrap() {
        assert_eq!(result["invalidOptions"], json!(["Unknown rule \"nope\""]));
        assert_eq!(result["errored"], json!(true));
    }
}

#[test]
fn parse_errors_are_listed() {
    let parse_errors = [Notice {
        message: "Unclosed block".to_string(),
        line: 1,
        column: 3,
    }];
    let value = flush_to_json(|emitter| {
        emitter.emit(&FileReport {
            source: "a.css",
            text: None,
            warnings: &[],
            parse_errors: &parse_errors,
        });
    });
    assert_eq!(
        value[0]["parseErrors"],
        json!([{ "message": "Unclosed block", "line": 1, "column": 3 }])
    );
    assert_eq!(value[0]["errored"], json!(true));
}

#[test]
fn empty_run_is_an_empty_array() {
    assert_eq!(flush_to_json(|_| {}), json!([]));
}
