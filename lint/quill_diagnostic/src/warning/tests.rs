use super::*;
use pretty_assertions::assert_eq;

fn sample() -> Warning {
    Warning {
        rule: "unit-no-unknown",
        message: "Unexpected unknown unit \"pixels\" (unit-no-unknown)".to_string(),
        severity: Severity::Error,
        line: 3,
        column: 7,
        span: Span::new(20, 28),
    }
}

#[test]
fn severity_names() {
    assert_eq!(Severity::from_name("error"), Some(Severity::Error));
    assert_eq!(Severity::from_name("warning"), Some(Severity::Warning));
    assert_eq!(Severity::from_name("Error"), None);
    assert_eq!(Severity::Warning.to_string(), "warning");
    assert_eq!(Severity::default(), Severity::Error);
}

#[test]
fn display() {
    assert_eq!(
        sample().to_string(),
        "3:7 error: Unexpected unknown unit \"pixels\" (unit-no-unknown)"
    );
}

#[test]
fn serializes_span_as_pair() {
    let json = serde_json::to_value(sample()).unwrap_or_default();
    assert_eq!(
        json,
        serde_json::json!({
            "rule": "unit-no-unknown",
            "message": "Unexpected unknown unit \"pixels\" (unit-no-unknown)",
            "severity": "error",
            "line": 3,
            "column": 7,
            "span": [20, 28],
        })
    );
}

#[test]
fn vec_is_a_report_sink() {
    let mut sink: Vec<Warning> = Vec::new();
    sink.report(sample());
    assert_eq!(sink.len(), 1);
    assert!(sink[0].is_error());
}
