use super::*;

mod recovery;

fn rule(node: &Node) -> &Rule {
    match node {
        Node::Rule(rule) => rule,
        other => panic!("expected rule, got {other:?}"),
    }
}

fn at_rule(node: &Node) -> &AtRule {
    match node {
        Node::AtRule(at_rule) => at_rule,
        other => panic!("expected at-rule, got {other:?}"),
    }
}

fn decl(node: &Node) -> &Declaration {
    match node {
        Node::Declaration(decl) => decl,
        other => panic!("expected declaration, got {other:?}"),
    }
}

fn comment(node: &Node) -> &Comment {
    match node {
        Node::Comment(comment) => comment,
        other => panic!("expected comment, got {other:?}"),
    }
}

/// Parse and require a clean result.
fn parse_ok(source: &str) -> Stylesheet {
    let output = parse(source);
    assert!(
        output.errors.is_empty(),
        "unexpected parse errors for {source:?}: {:?}",
        output.errors
    );
    output.stylesheet
}

#[test]
fn empty_source() {
    let output = parse("");
    assert!(output.stylesheet.is_empty());
    assert!(!output.has_errors());
}

#[test]
fn whitespace_only() {
    assert!(parse_ok(" \n\t ").is_empty());
}
