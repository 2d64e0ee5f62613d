//! Property tests over the unit rule and the pseudo-element rule.

use proptest::prelude::*;
use quill_lint::{is_known_unit, Linter, RuleSetting};
use serde_json::json;

fn unit_warnings(unit: &str, ignore: &[&str]) -> usize {
    let linter = Linter::from_settings([(
        "unit-no-unknown",
        RuleSetting::new(true).with_secondary(json!({ "ignore": ignore })),
    )]);
    let output = quill_parse::parse(&format!("a {{ width: 10{unit}; }}"));
    linter.lint(&output.stylesheet).warnings.len()
}

proptest! {
    /// A unit is known, ignored or reported; ignoring always wins.
    #[test]
    fn unit_is_known_ignored_or_reported(unit in "[a-zA-Z%]{1,6}") {
        let reported = unit_warnings(&unit, &[]);
        if is_known_unit(&unit) {
            prop_assert_eq!(reported, 0);
        } else {
            prop_assert_eq!(reported, 1);
        }
        prop_assert_eq!(unit_warnings(&unit, &[unit.as_str()]), 0);
    }

    /// Every lint run on arbitrary input terminates without panicking and
    /// is deterministic.
    #[test]
    fn lint_is_total_and_deterministic(source in "[a-z0-9:;{}(),\"' \\n/*%-]{0,64}") {
        let linter = Linter::from_settings([
            ("unit-no-unknown", RuleSetting::new(true)),
            ("selector-pseudo-element-colon-notation", RuleSetting::new("double")),
            ("value-list-comma-newline-before", RuleSetting::new("always")),
        ]);
        let output = quill_parse::parse(&source);
        let first = linter.lint(&output.stylesheet);
        let second = linter.lint(&output.stylesheet);
        prop_assert_eq!(first, second);
    }
}
