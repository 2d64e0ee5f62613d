//! Depth-first traversal of the stylesheet tree.
//!
//! Nodes are visited in document order: a rule or at-rule is visited before
//! its children, and children before the next sibling. Nesting depth in
//! source is unbounded, so each level goes through
//! [`ensure_sufficient_stack`].

use quill_stack::ensure_sufficient_stack;

use crate::{AtRule, Comment, Declaration, Node, Rule, Stylesheet};

/// Callbacks for [`walk`]. All hooks default to doing nothing.
pub trait Visitor {
    fn visit_rule(&mut self, _rule: &Rule) {}

    fn visit_at_rule(&mut self, _at_rule: &AtRule) {}

    fn visit_declaration(&mut self, _decl: &Declaration) {}

    fn visit_comment(&mut self, _comment: &Comment) {}
}

/// Visit every node of `stylesheet` depth-first in document order.
pub fn walk<V: Visitor + ?Sized>(stylesheet: &Stylesheet, visitor: &mut V) {
    walk_nodes(&stylesheet.nodes, visitor);
}

fn walk_nodes<V: Visitor + ?Sized>(nodes: &[Node], visitor: &mut V) {
    for node in nodes {
        match node {
            Node::Rule(rule) => visitor.visit_rule(rule),
            Node::AtRule(at_rule) => visitor.visit_at_rule(at_rule),
            Node::Declaration(decl) => visitor.visit_declaration(decl),
            Node::Comment(comment) => visitor.visit_comment(comment),
        }
        let children = node.children();
        if !children.is_empty() {
            ensure_sufficient_stack(|| walk_nodes(children, visitor));
        }
    }
}
