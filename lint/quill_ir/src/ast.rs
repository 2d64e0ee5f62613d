//! Stylesheet tree.
//!
//! The shape mirrors what a lint rule needs rather than full CSS grammar:
//! selectors and values are kept as raw source text, each anchored by the
//! position of its first byte so that offsets into the text can be turned
//! back into source positions.

use crate::{SourcePos, Span};

/// A parsed stylesheet: top-level nodes in document order.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Stylesheet {
    pub nodes: Vec<Node>,
}

impl Stylesheet {
    pub fn new(nodes: Vec<Node>) -> Self {
        Stylesheet { nodes }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// A node of the stylesheet tree.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Node {
    Rule(Rule),
    AtRule(AtRule),
    Declaration(Declaration),
    Comment(Comment),
}

impl Node {
    pub fn span(&self) -> Span {
        match self {
            Node::Rule(rule) => rule.span,
            Node::AtRule(at_rule) => at_rule.span,
            Node::Declaration(decl) => decl.span,
            Node::Comment(comment) => comment.span,
        }
    }

    /// Child nodes of a block; empty for declarations, comments and
    /// block-less at-rules.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Rule(rule) => &rule.children,
            Node::AtRule(at_rule) => at_rule.children.as_deref().unwrap_or(&[]),
            Node::Declaration(_) | Node::Comment(_) => &[],
        }
    }
}

/// A qualified rule: `selector { children }`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Rule {
    /// Selector source text, trimmed.
    pub selector: String,
    /// Position of the selector's first byte.
    pub selector_pos: SourcePos,
    pub children: Vec<Node>,
    pub span: Span,
}

/// An at-rule: `@name params;` or `@name params { children }`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AtRule {
    /// Name without the `@`.
    pub name: String,
    /// Prelude source text, trimmed.
    pub params: String,
    pub params_pos: SourcePos,
    /// `None` for statement at-rules such as `@import`.
    pub children: Option<Vec<Node>>,
    pub span: Span,
}

/// A declaration: `prop: value [!important]`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Declaration {
    pub prop: String,
    /// Value source text exactly as written, without surrounding whitespace
    /// and without a trailing `!important`.
    pub value: String,
    pub important: bool,
    /// Position of the property's first byte.
    pub pos: SourcePos,
    /// Position of the value's first byte; offset 0 of `value`.
    pub value_pos: SourcePos,
    pub span: Span,
}

impl Declaration {
    /// Absolute position of a byte offset into `value`.
    ///
    /// Offsets past the end of the value clamp to its end; offsets inside a
    /// multi-byte character round down to the character start.
    pub fn value_position(&self, offset: u32) -> SourcePos {
        self.value_pos.advance(prefix(&self.value, offset))
    }
}

impl Rule {
    /// Absolute position of a byte offset into `selector`.
    pub fn selector_position(&self, offset: u32) -> SourcePos {
        self.selector_pos.advance(prefix(&self.selector, offset))
    }
}

/// A `/* ... */` comment between statements.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Comment {
    /// Text between the delimiters.
    pub text: String,
    pub span: Span,
}

fn prefix(text: &str, offset: u32) -> &str {
    let mut end = (offset as usize).min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
