use super::*;
use pretty_assertions::assert_eq;

#[test]
fn unclosed_block_closes_at_eof() {
    let output = parse("a { color: red");
    assert_eq!(
        output.errors,
        vec![ParseError::UnclosedBlock {
            span: Span::new(2, 3)
        }]
    );
    let rule = rule(&output.stylesheet.nodes[0]);
    assert_eq!(decl(&rule.children[0]).value, "red");
}

#[test]
fn stray_close_brace_is_skipped() {
    let output = parse("} a { top: 0 }");
    assert_eq!(
        output.errors,
        vec![ParseError::UnexpectedCloseBrace {
            span: Span::new(0, 1)
        }]
    );
    assert_eq!(output.stylesheet.nodes.len(), 1);
    assert_eq!(rule(&output.stylesheet.nodes[0]).selector, "a");
}

#[test]
fn statement_without_colon_is_skipped() {
    let output = parse("a { foo; top: 0 }");
    assert_eq!(
        output.errors,
        vec![ParseError::MissingColon {
            span: Span::new(4, 7)
        }]
    );
    let rule = rule(&output.stylesheet.nodes[0]);
    assert_eq!(rule.children.len(), 1);
    assert_eq!(decl(&rule.children[0]).prop, "top");
}

#[test]
fn unclosed_comment_runs_to_eof() {
    let output = parse("a { top: 0 } /* tail");
    assert!(output.errors.is_empty());
    assert_eq!(comment(&output.stylesheet.nodes[1]).text, " tail");
}

#[test]
fn deep_nesting_does_not_overflow() {
    let source = "a{".repeat(10_000);
    let output = parse(&source);
    assert_eq!(output.errors.len(), 10_000);
    quill_stack::ensure_sufficient_stack(move || drop(output));
}
