use quill_lint::RuleSetting;
use serde_json::json;

use crate::common::RuleTester;

const RULE: &str = "unit-no-unknown";

fn rejected(unit: &str) -> String {
    format!("Unexpected unknown unit \"{unit}\"")
}

#[test]
fn default_options() {
    let tr = RuleTester::new(RULE, RuleSetting::new(true));
    tr.warning_free_basics();

    tr.ok("a { margin: 10px; }");
    tr.ok("a { margin: 10Px; }");
    tr.ok("a { margin: 10PX; }");
    tr.ok("a { margin: 10px 10px 10px 10px; }");
    tr.ok("a { margin: -10px; }");
    tr.ok("a { margin: -10.5px; }");
    tr.ok("a { margin: 10.5px; }");
    tr.ok("a { margin: .5px; }");
    tr.ok("a { margin: calc(10px + 10px); }");
    tr.ok("a { margin: calc(10px + $margin); }");
    tr.ok("a { width: 1e3px; }");
    tr.ok("a { transform: rotate(90deg) rotate(1turn); }");
    tr.ok("a { font-size: 1.2rem; line-height: 1.5; }");
    tr.ok("a { width: 50vmin; height: 10dvh; }");
    tr.ok("a { transition-duration: 300ms; animation-delay: 1s; }");
    tr.ok("a { grid-template-columns: 1fr 2fr; }");
    tr.ok("a { width: 100%; }");
    tr.ok("a { color: #1e3; }");
    tr.ok("a { background: url(10pixels.jpg); }");
    tr.ok("a { background-image: url(\"10pixels.jpg\"); }");
    tr.ok("a { content: \"10pixels\"; }");
    tr.ok("a { width: $var; height: @var; }");
    tr.ok("a { width: var(--10pixels); }");
    tr.ok(":root { --gap: 10px; }");

    tr.not_ok_at("a { margin: 10pixels; }", &rejected("pixels"), 1, 13);
    tr.not_ok_at("a { margin: 10px 10px 10px 10pixels; }", &rejected("pixels"), 1, 28);
    tr.not_ok_at("a { margin: calc(10pixels + 10px); }", &rejected("pixels"), 1, 18);
    tr.not_ok_at("a { margin: -10pixels; }", &rejected("pixels"), 1, 13);
    tr.not_ok_at("a { margin: .5pixels; }", &rejected("pixels"), 1, 13);
    tr.not_ok("a { transform: rotate(90degs); }", &rejected("degs"));
    tr.not_ok("a { animation-delay: 3sec; }", &rejected("sec"));
    tr.not_ok("a { width: 10pxl !important; }", &rejected("pxl"));
    tr.not_ok_at("a {\n  margin:\n    10pixels;\n}", &rejected("pixels"), 3, 5);
}

#[test]
fn ignore_list() {
    let tr = RuleTester::new(
        RULE,
        RuleSetting::new(true).with_secondary(json!({ "ignore": ["pixels", "/^my-/i"] })),
    );
    tr.warning_free_basics();

    tr.ok("a { margin: 10pixels; }");
    tr.ok("a { margin: 10My-Unit; }");
    tr.ok("a { margin: 10px 10pixels; }");

    tr.not_ok("a { margin: 10pix; }", &rejected("pix"));
    tr.not_ok("a { margin: 10Pixels; }", &rejected("Pixels"));
}

#[test]
fn ignore_as_single_string() {
    let tr = RuleTester::new(
        RULE,
        RuleSetting::new(true).with_secondary(json!({ "ignore": "pixels" })),
    );
    tr.ok("a { margin: 10pixels; }");
    tr.not_ok("a { margin: 10pix; }", &rejected("pix"));
}
