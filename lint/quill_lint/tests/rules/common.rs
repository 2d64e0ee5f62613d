//! Shared rule-tester helpers.

use pretty_assertions::assert_eq;
use quill_diagnostic::Warning;
use quill_lint::{Linter, RuleSetting};

/// Sources every rule must accept whatever its options.
const WARNING_FREE_BASICS: &[&str] = &[
    "",
    "a {}",
    "@import \"foo.css\";",
    "a { color: pink; }",
    "@media print { a { color: pink; } }",
    "a { }\nb { }",
    "/* comment */",
];

/// Lints sources with one configured rule.
pub struct RuleTester {
    rule: &'static str,
    linter: Linter,
}

impl RuleTester {
    pub fn new(rule: &'static str, setting: RuleSetting) -> Self {
        let linter = Linter::from_settings([(rule, setting)]);
        assert_eq!(
            linter.invalid_option_messages(),
            Vec::<String>::new(),
            "options for {rule} should be valid"
        );
        RuleTester { rule, linter }
    }

    pub fn lint(&self, source: &str) -> Vec<Warning> {
        let output = quill_parse::parse(source);
        assert!(
            output.errors.is_empty(),
            "fixture should parse cleanly: {source:?}: {:?}",
            output.errors
        );
        self.linter.lint(&output.stylesheet).warnings
    }

    /// The source produces no warnings.
    pub fn ok(&self, source: &str) {
        let warnings = self.lint(source);
        assert!(
            warnings.is_empty(),
            "expected no warnings for {source:?}, got {warnings:#?}"
        );
    }

    /// The source produces exactly one warning with `message`.
    pub fn not_ok(&self, source: &str, message: &str) -> Warning {
        let mut warnings = self.lint(source);
        assert_eq!(warnings.len(), 1, "expected one warning for {source:?}: {warnings:#?}");
        let warning = warnings.remove(0);
        assert_eq!(warning.message, format!("{message} ({})", self.rule));
        assert_eq!(warning.rule, self.rule);
        warning
    }

    /// Like [`RuleTester::not_ok`], also checking the reported position.
    pub fn not_ok_at(&self, source: &str, message: &str, line: u32, column: u32) {
        let warning = self.not_ok(source, message);
        assert_eq!(
            (warning.line, warning.column),
            (line, column),
            "position for {source:?}"
        );
    }

    pub fn warning_free_basics(&self) {
        for source in WARNING_FREE_BASICS {
            self.ok(source);
        }
    }
}
