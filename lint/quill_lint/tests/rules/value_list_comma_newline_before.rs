use quill_lint::RuleSetting;

use crate::common::RuleTester;

const RULE: &str = "value-list-comma-newline-before";

const EXPECTED_BEFORE: &str = "Expected newline before \",\"";
const EXPECTED_BEFORE_MULTI_LINE: &str = "Expected newline before \",\" in a multi-line list";
const REJECTED_BEFORE_MULTI_LINE: &str = "Unexpected whitespace before \",\" in a multi-line list";

#[test]
fn always() {
    let tr = RuleTester::new(RULE, RuleSetting::new("always"));
    tr.warning_free_basics();

    tr.ok("a { background-size: 0\n,0\n,0; }");
    tr.ok("a { background-size: 0\n,  0\n,\t0; }");
    tr.ok("a { background-size: 0\r\n,0; }");
    tr.not_ok_at("a { background-size: 0, 0; }", EXPECTED_BEFORE, 1, 23);
    tr.not_ok_at("a { background-size: 0 , 0; }", EXPECTED_BEFORE, 1, 24);
    tr.not_ok("a { background-size: 0  , 0; }", EXPECTED_BEFORE);
    tr.not_ok("a { background-size: 0\t, 0; }", EXPECTED_BEFORE);

    tr.ok("a::before { content: \"foo,bar,baz\"; }");
    tr.ok("a { transform: translate(1,1); }");
    tr.ok("a { background: url(a,b.png); }");
    tr.ok("a { font-family: a /* x, y */\n, b; }");
}

#[test]
fn always_multi_line() {
    let tr = RuleTester::new(RULE, RuleSetting::new("always-multi-line"));
    tr.warning_free_basics();

    tr.ok("a { background-size: 0\n,0\n,0; }");
    tr.ok("a { background-size: 0\n,  0\n,\t0; }");
    tr.not_ok_at(
        "a { background-size: 0\n, 0, 0; }",
        EXPECTED_BEFORE_MULTI_LINE,
        2,
        4,
    );
    tr.not_ok("a { background-size: 0\n, 0 , 0; }", EXPECTED_BEFORE_MULTI_LINE);
    tr.not_ok("a { background-size: 0\n, 0\t, 0; }", EXPECTED_BEFORE_MULTI_LINE);

    // Single-line values are exempt.
    tr.ok("a { background-size: 0, 0; }");
}

#[test]
fn never_multi_line() {
    let tr = RuleTester::new(RULE, RuleSetting::new("never-multi-line"));
    tr.warning_free_basics();

    tr.ok("a { background-size: 0,\n0,\n0; }");
    tr.not_ok_at(
        "a { background-size: 0,\n0\n, 0; }",
        REJECTED_BEFORE_MULTI_LINE,
        3,
        1,
    );
    tr.not_ok("a { background-size: 0\n,\t0,\n0; }", REJECTED_BEFORE_MULTI_LINE);

    tr.ok("a { background-size: 0, 0; }");
    tr.ok("a { background-size: 0 , 0; }");
}

#[test]
fn custom_severity_and_message() {
    let tr = RuleTester::new(
        RULE,
        RuleSetting::new("always")
            .with_secondary(serde_json::json!({ "severity": "warning", "message": "Break the list" })),
    );
    let warnings = tr.lint("a { background-size: 0, 0; }");
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].message, "Break the list");
    assert!(!warnings[0].is_error());
}
