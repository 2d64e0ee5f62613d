//! Structural stylesheet parser.
//!
//! Splits a stylesheet into rules, at-rules, declarations and comments
//! without interpreting selectors or values. Selector, prelude and value
//! text is kept exactly as written and anchored by the position of its
//! first byte, so lint findings inside that text map back to the file.
//!
//! Parsing never fails. Structural problems are recorded as
//! [`ParseError`]s and the parser recovers:
//!
//! - a block that runs to end of input is closed there,
//! - a `}` with no open block is skipped,
//! - a statement with no `:` that does not open a block is skipped.

mod error;
mod scan;

pub use error::ParseError;

use quill_ir::{
    AtRule, Comment, Declaration, LineOffsetTable, Node, Rule, SourcePos, Span, Stylesheet,
};
use quill_stack::ensure_sufficient_stack;
use scan::{Stop, comment_end, find_colon, is_space, statement_end, strip_important, trim};

/// Parse result: the tree plus recovered errors.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseOutput {
    pub stylesheet: Stylesheet,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parse a stylesheet.
pub fn parse(source: &str) -> ParseOutput {
    let mut parser = Parser {
        source,
        bytes: source.as_bytes(),
        pos: 0,
        lines: LineOffsetTable::build(source),
        errors: Vec::new(),
    };
    let (nodes, _) = parser.block(false);
    tracing::debug!(
        nodes = nodes.len(),
        errors = parser.errors.len(),
        "parsed stylesheet"
    );
    ParseOutput {
        stylesheet: Stylesheet::new(nodes),
        errors: parser.errors,
    }
}

struct Parser<'a> {
    source: &'a str,
    bytes: &'a [u8],
    pos: usize,
    lines: LineOffsetTable,
    errors: Vec<ParseError>,
}

fn span(start: usize, end: usize) -> Span {
    Span::from_range_saturating(start..end)
}

impl Parser<'_> {
    fn position(&self, offset: usize) -> SourcePos {
        self.lines
            .position(self.source, u32::try_from(offset).unwrap_or(u32::MAX))
    }

    fn text(&self, start: usize, end: usize) -> String {
        self.source[start..end].to_string()
    }

    fn skip_whitespace(&mut self) {
        while self.pos < self.bytes.len() && is_space(self.bytes[self.pos]) {
            self.pos += 1;
        }
    }

    /// Parse statements until end of input or, when `nested`, the `}` that
    /// closes the current block. Returns the nodes and whether that `}` was
    /// found.
    fn block(&mut self, nested: bool) -> (Vec<Node>, bool) {
        let mut nodes = Vec::new();
        loop {
            self.skip_whitespace();
            let Some(&b) = self.bytes.get(self.pos) else {
                return (nodes, false);
            };
            match b {
                b'}' if nested => {
                    self.pos += 1;
                    return (nodes, true);
                }
                b'}' => {
                    self.errors.push(ParseError::UnexpectedCloseBrace {
                        span: span(self.pos, self.pos + 1),
                    });
                    self.pos += 1;
                }
                b';' => self.pos += 1,
                b'/' if self.bytes.get(self.pos + 1) == Some(&b'*') => {
                    nodes.push(self.comment());
                }
                b'@' => nodes.push(self.at_rule()),
                _ => {
                    if let Some(node) = self.statement() {
                        nodes.push(node);
                    }
                }
            }
        }
    }

    fn comment(&mut self) -> Node {
        let start = self.pos;
        let end = comment_end(self.bytes, start);
        self.pos = end;
        let body_end = if end >= start + 4 && self.source[..end].ends_with("*/") {
            end - 2
        } else {
            end
        };
        Node::Comment(Comment {
            text: self.text(start + 2, body_end),
            span: span(start, end),
        })
    }

    /// Parse a `{ ... }` body whose `{` is at `self.pos`.
    ///
    /// Returns the children and the end of the block (past the `}`).
    fn nested_block(&mut self) -> (Vec<Node>, usize) {
        let open = self.pos;
        self.pos += 1;
        let (children, closed) = ensure_sufficient_stack(|| self.block(true));
        if !closed {
            self.errors.push(ParseError::UnclosedBlock {
                span: span(open, open + 1),
            });
        }
        (children, self.pos)
    }

    fn at_rule(&mut self) -> Node {
        let start = self.pos;
        let name_start = start + 1;
        let name_end = self.bytes[name_start..]
            .iter()
            .position(|&b| !(b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b >= 0x80))
            .map_or(self.bytes.len(), |len| name_start + len);
        let (stop_at, stop) = statement_end(self.bytes, name_end);
        let (params_start, params_end) = trim(self.bytes, name_end, stop_at);

        let name = self.text(name_start, name_end);
        let params = self.text(params_start, params_end);
        let params_pos = self.position(params_start);

        self.pos = stop_at;
        let (children, end) = match stop {
            Stop::OpenBrace => {
                let (children, end) = self.nested_block();
                (Some(children), end)
            }
            Stop::Semicolon => {
                self.pos += 1;
                (None, stop_at)
            }
            Stop::CloseBrace | Stop::Eof => (None, params_end.max(name_end)),
        };

        Node::AtRule(AtRule {
            name,
            params,
            params_pos,
            children,
            span: span(start, end),
        })
    }

    /// Parse a rule or a declaration starting at `self.pos`.
    fn statement(&mut self) -> Option<Node> {
        let start = self.pos;
        let (stop_at, stop) = statement_end(self.bytes, start);
        self.pos = stop_at;

        if stop == Stop::OpenBrace {
            let (_, selector_end) = trim(self.bytes, start, stop_at);
            let selector = self.text(start, selector_end);
            let selector_pos = self.position(start);
            let (children, end) = self.nested_block();
            return Some(Node::Rule(Rule {
                selector,
                selector_pos,
                children,
                span: span(start, end),
            }));
        }

        if stop == Stop::Semicolon {
            self.pos += 1;
        }
        let (_, end) = trim(self.bytes, start, stop_at);
        let Some(colon) = find_colon(self.bytes, start, end) else {
            self.errors.push(ParseError::MissingColon {
                span: span(start, end),
            });
            return None;
        };
        Some(self.declaration(start, colon, end))
    }

    fn declaration(&self, start: usize, colon: usize, end: usize) -> Node {
        let (_, prop_end) = trim(self.bytes, start, colon);
        let (value_start, value_end) = trim(self.bytes, colon + 1, end);
        let (value_end, important) = match strip_important(self.bytes, value_start, value_end) {
            Some(stripped) => (stripped, true),
            None => (value_end, false),
        };

        Node::Declaration(Declaration {
            prop: self.text(start, prop_end),
            value: self.text(value_start, value_end),
            important,
            pos: self.position(start),
            value_pos: self.position(value_start),
            span: span(start, end),
        })
    }
}

#[cfg(test)]
mod tests;
