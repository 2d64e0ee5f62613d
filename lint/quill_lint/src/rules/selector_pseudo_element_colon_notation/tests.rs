use super::*;
use crate::engine::run;
use pretty_assertions::assert_eq;
use quill_diagnostic::Warning;

fn lint(source: &str, notation: &str) -> Vec<Warning> {
    let output = quill_parse::parse(source);
    run(&output.stylesheet, &RuleSetting::new(notation), &RULE).unwrap_or_default()
}

// === Scanning ===

#[test]
fn finds_single_and_double() {
    assert_eq!(
        legacy_pseudo_elements("a:before, b::after"),
        vec![
            LegacyPseudo {
                colon: 1,
                name_end: 8,
                double: false,
            },
            LegacyPseudo {
                colon: 12,
                name_end: 18,
                double: true,
            },
        ]
    );
}

#[test]
fn name_must_match_whole_identifier() {
    assert!(legacy_pseudo_elements("a:before-x, a::afterwards").is_empty());
}

#[test]
fn name_ignores_case() {
    assert_eq!(legacy_pseudo_elements("a::BEFORE").len(), 1);
}

#[test]
fn skips_attribute_values_strings_and_comments() {
    assert!(legacy_pseudo_elements("a[data-before=':before']").is_empty());
    assert!(legacy_pseudo_elements("a[data-x=:before]").is_empty());
    assert!(legacy_pseudo_elements("a /* :before */").is_empty());
}

#[test]
fn pseudo_classes_are_not_pseudo_elements() {
    assert!(legacy_pseudo_elements("a:hover, a:first-child, a:not(.b)").is_empty());
}

// === Rule ===

#[test]
fn single_reports_double() {
    let warnings = lint("a::before { color: pink; }", "single");
    assert_eq!(warnings.len(), 1);
    assert_eq!(
        warnings[0].message,
        "Expected single colon pseudo-element notation (selector-pseudo-element-colon-notation)"
    );
    assert_eq!((warnings[0].line, warnings[0].column), (1, 3));
}

#[test]
fn double_reports_single() {
    let warnings = lint("a:before { color: pink; }", "double");
    assert_eq!(warnings.len(), 1);
    assert_eq!(
        warnings[0].message,
        "Expected double colon pseudo-element notation (selector-pseudo-element-colon-notation)"
    );
    assert_eq!((warnings[0].line, warnings[0].column), (1, 2));
}

#[test]
fn each_occurrence_is_reported() {
    let warnings = lint("a:before,\nb:after { color: pink; }", "double");
    let positions: Vec<_> = warnings.iter().map(|w| (w.line, w.column)).collect();
    assert_eq!(positions, vec![(1, 2), (2, 2)]);
}

#[test]
fn modern_pseudo_elements_pass_in_both_modes() {
    for notation in ["single", "double"] {
        assert!(lint("::selection { color: pink; }", notation).is_empty());
        assert!(lint("a::marker, a::placeholder { color: pink; }", notation).is_empty());
    }
}
