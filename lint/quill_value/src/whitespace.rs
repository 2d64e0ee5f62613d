//! Whitespace context around divider tokens.
//!
//! Answers the questions a separator-placement rule asks about one divider:
//! is the whole value spread over several lines, and what (if anything)
//! sits directly before and after the divider. Only dividers produced by
//! the tokenizer are considered, so a comma inside a string, a comment or
//! `url(...)` is never analyzed.

use crate::scanner::tokenize;
use crate::token::{Token, TokenKind};

/// What directly precedes or follows a divider.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Gap {
    /// No whitespace: another token, or the edge of the sequence.
    None,
    /// Spaces and/or tabs only.
    Inline,
    /// Whitespace containing a line break.
    Newline,
}

impl Gap {
    fn of(neighbor: Option<&Token<'_>>) -> Gap {
        match neighbor {
            Some(token) if token.contains_newline() => Gap::Newline,
            Some(token) if token.is_space() => Gap::Inline,
            _ => Gap::None,
        }
    }

    pub fn is_whitespace(self) -> bool {
        self != Gap::None
    }
}

/// Which dividers are analyzed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum DividerScope {
    /// Direct children of the value only; function arguments are skipped.
    #[default]
    TopLevel,
    /// Also dividers inside (non-opaque) function arguments.
    Nested,
}

/// Whitespace facts about one divider.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct WhitespaceContext {
    /// The value contains a line break anywhere, not only near the divider.
    pub is_multi_line: bool,
    pub before: Gap,
    pub after: Gap,
    /// `false` when the divider is the first token of its sequence.
    pub has_predecessor: bool,
}

impl WhitespaceContext {
    pub fn has_newline_before(&self) -> bool {
        self.before == Gap::Newline
    }

    /// Any whitespace, newline included, directly before the divider.
    pub fn has_space_before(&self) -> bool {
        self.before.is_whitespace()
    }

    pub fn has_newline_after(&self) -> bool {
        self.after == Gap::Newline
    }

    /// Any whitespace, newline included, directly after the divider.
    pub fn has_space_after(&self) -> bool {
        self.after.is_whitespace()
    }
}

/// Check if a value spans more than one line.
pub fn is_multi_line(value: &str) -> bool {
    value.bytes().any(|b| b == b'\n' || b == b'\r')
}

/// Analyze the divider starting at `divider_offset`.
///
/// Returns `None` when no divider in `scope` starts there, e.g. when the
/// offset points into a string or a `url(...)`.
pub fn analyze_whitespace(
    value: &str,
    divider_offset: u32,
    scope: DividerScope,
) -> Option<WhitespaceContext> {
    let contexts = DividerContexts::new(value, scope);
    let found = contexts
        .dividers()
        .into_iter()
        .find(|(divider, _)| divider.start == divider_offset)
        .map(|(_, context)| context);
    found
}

/// A value tokenized once, with contexts for each in-scope divider.
pub struct DividerContexts<'a> {
    tokens: Vec<Token<'a>>,
    scope: DividerScope,
    multi_line: bool,
}

impl<'a> DividerContexts<'a> {
    pub fn new(value: &'a str, scope: DividerScope) -> Self {
        DividerContexts {
            tokens: tokenize(value),
            scope,
            multi_line: is_multi_line(value),
        }
    }

    /// The value's tokens.
    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    pub fn is_multi_line(&self) -> bool {
        self.multi_line
    }

    /// Every in-scope divider with its context, in source order.
    pub fn dividers(&self) -> Vec<(&Token<'a>, WhitespaceContext)> {
        let mut out = Vec::new();
        self.collect(&self.tokens, &mut out);
        out
    }

    fn collect<'t>(
        &self,
        sequence: &'t [Token<'a>],
        out: &mut Vec<(&'t Token<'a>, WhitespaceContext)>,
    ) {
        for (i, token) in sequence.iter().enumerate() {
            match token.kind {
                TokenKind::Divider => {
                    let previous = i.checked_sub(1).map(|p| &sequence[p]);
                    let context = WhitespaceContext {
                        is_multi_line: self.multi_line,
                        before: Gap::of(previous),
                        after: Gap::of(sequence.get(i + 1)),
                        has_predecessor: previous.is_some(),
                    };
                    out.push((token, context));
                }
                // Nesting is bounded by the tokenizer's depth limit.
                TokenKind::Function if self.scope == DividerScope::Nested && !token.opaque => {
                    self.collect(&token.children, out);
                }
                _ => {}
            }
        }
    }
}
