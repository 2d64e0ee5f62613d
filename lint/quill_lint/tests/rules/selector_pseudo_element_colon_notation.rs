use quill_lint::RuleSetting;

use crate::common::RuleTester;

const RULE: &str = "selector-pseudo-element-colon-notation";

fn expected(notation: &str) -> String {
    format!("Expected {notation} colon pseudo-element notation")
}

#[test]
fn single() {
    let tr = RuleTester::new(RULE, RuleSetting::new("single"));
    tr.warning_free_basics();
    tr.ok("a { color: pink; }");

    tr.ok("a:before { color: pink; }");
    tr.ok("a:after { color: pink; }");
    tr.ok("a:first-letter { color: pink; }");
    tr.ok("a:first-line { color: pink; }");
    tr.ok("a:before, a[data-before='before'] { color: pink; }");

    tr.not_ok_at("a::before { color: pink; }", &expected("single"), 1, 3);
    tr.not_ok("a::after { color: pink; }", &expected("single"));
    tr.not_ok("a::first-line { color: pink; }", &expected("single"));
    tr.not_ok("a::first-letter { color: pink; }", &expected("single"));
    tr.not_ok("a::BEFORE { color: pink; }", &expected("single"));
    tr.not_ok_at("a,\n  b::after { color: pink; }", &expected("single"), 2, 5);

    // Pseudo-elements without a single-colon form.
    tr.ok("::selection { color: pink; }");
    tr.ok("a::spelling-error { color: pink; }");
    tr.ok("a::grammar-error { color: pink; }");
    tr.ok("li::marker { font-variant-numeric: tabular-nums; }");
    tr.ok("input::placeholder { color: pink; }");
}

#[test]
fn double() {
    let tr = RuleTester::new(RULE, RuleSetting::new("double"));
    tr.warning_free_basics();
    tr.ok("a { color: pink; }");

    tr.ok("a::before { color: pink; }");
    tr.ok("a::after { color: pink; }");
    tr.ok("a::first-letter { color: pink; }");
    tr.ok("a::first-line { color: pink; }");
    tr.ok("a::before, a[data-before='before'] { color: pink; }");

    tr.not_ok_at("a:before { color: pink; }", &expected("double"), 1, 2);
    tr.not_ok("a:after { color: pink; }", &expected("double"));
    tr.not_ok("a:first-line { color: pink; }", &expected("double"));
    tr.not_ok("a:first-letter { color: pink; }", &expected("double"));

    tr.ok("::selection { color: pink; }");
    tr.ok("a::spelling-error { color: pink; }");
    tr.ok("a::grammar-error { color: pink; }");
    tr.ok("li::marker { font-variant-numeric: tabular-nums; }");
    tr.ok("input::placeholder { color: pink; }");
}

#[test]
fn nested_rules_are_checked() {
    let tr = RuleTester::new(RULE, RuleSetting::new("double"));
    tr.not_ok_at(
        "@media print {\n  a:before { color: pink; }\n}",
        &expected("double"),
        2,
        4,
    );
}
