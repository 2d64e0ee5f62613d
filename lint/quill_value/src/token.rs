//! Value token types.

use std::fmt;

/// The kind of a value token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// Any run of characters up to a boundary: `10px`, `solid`, `#fff`, `$var`.
    Word,
    /// A quoted string, quotes included in the token text.
    String,
    /// A function call. The token text is the name; arguments are children.
    Function,
    /// A list separator such as `,` or `/`.
    Divider,
    /// A run of whitespace, newlines included.
    Space,
    /// A `/* ... */` comment.
    Comment,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Word => "word",
            TokenKind::String => "string",
            TokenKind::Function => "function",
            TokenKind::Divider => "div",
            TokenKind::Space => "space",
            TokenKind::Comment => "comment",
        };
        f.write_str(name)
    }
}

/// Traversal control returned by the [`Token::walk`] callback.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Walk {
    /// Visit this token's children (if any), then continue.
    Continue,
    /// Do not descend into this token's children.
    SkipChildren,
}

/// A token borrowed from the value string it was produced from.
///
/// # Invariant
///
/// `text == &value[start..end]` for every kind. For a [`TokenKind::Function`]
/// the range covers only the function name; [`Token::extent`] covers the
/// name, parentheses and arguments. Children of a function use offsets into
/// the same value string as their parent.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub start: u32,
    pub end: u32,
    /// Arguments of a function; always empty for other kinds.
    pub children: Vec<Token<'a>>,
    /// Offset one past the closing `)` of a function (or end of input when
    /// unclosed). Equal to `end` for every other kind.
    pub close: u32,
    /// Set when a string, comment or function ran into end of input.
    pub unclosed: bool,
    /// Set when a function's arguments were kept as a single raw word
    /// (`url(...)` or nesting deeper than the configured limit).
    pub opaque: bool,
}

impl<'a> Token<'a> {
    pub(crate) fn leaf(kind: TokenKind, value: &'a str, start: usize, end: usize) -> Self {
        Token {
            kind,
            text: &value[start..end],
            start: to_offset(start),
            end: to_offset(end),
            children: Vec::new(),
            close: to_offset(end),
            unclosed: false,
            opaque: false,
        }
    }

    /// The full source range of the token as `(start, end)`.
    ///
    /// For functions this runs from the first byte of the name to one past
    /// the closing parenthesis.
    pub fn extent(&self) -> (u32, u32) {
        (self.start, self.close)
    }

    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    pub fn is_space(&self) -> bool {
        self.kind == TokenKind::Space
    }

    /// Check if this is a divider token with the given text (`","`).
    pub fn is_divider(&self, text: &str) -> bool {
        self.kind == TokenKind::Divider && self.text == text
    }

    /// Functions whose arguments are not meaningful value tokens.
    pub fn is_opaque(&self) -> bool {
        self.opaque
    }

    /// Check if a whitespace token spans a line break.
    pub fn contains_newline(&self) -> bool {
        self.kind == TokenKind::Space && self.text.bytes().any(|b| b == b'\n' || b == b'\r')
    }

    /// The quote character of a string token.
    pub fn quote(&self) -> Option<char> {
        if self.kind == TokenKind::String {
            self.text.chars().next()
        } else {
            None
        }
    }

    /// The contents of a string token without its quotes.
    ///
    /// Returns the raw text for every other kind.
    pub fn unquoted(&self) -> &'a str {
        if self.kind != TokenKind::String || self.text.is_empty() {
            return self.text;
        }
        let inner = &self.text[1..];
        if self.unclosed {
            inner
        } else {
            &inner[..inner.len().saturating_sub(1)]
        }
    }

    /// Visit this token and its descendants depth-first in source order.
    pub fn walk(&self, f: &mut impl FnMut(&Token<'a>) -> Walk) {
        if f(self) == Walk::Continue {
            walk_tokens(&self.children, f);
        }
    }
}

/// Visit a token sequence depth-first in source order.
///
/// Iterative so that deeply nested values never grow the call stack.
pub fn walk_tokens<'a>(tokens: &[Token<'a>], f: &mut impl FnMut(&Token<'a>) -> Walk) {
    let mut stack: Vec<std::slice::Iter<'_, Token<'a>>> = vec![tokens.iter()];
    while let Some(iter) = stack.last_mut() {
        match iter.next() {
            Some(token) => {
                if f(token) == Walk::Continue && !token.children.is_empty() {
                    stack.push(token.children.iter());
                }
            }
            None => {
                stack.pop();
            }
        }
    }
}

/// Convert a byte index into a token offset.
///
/// Values longer than `u32::MAX` bytes saturate; offsets past that point are
/// not representable in a diagnostic position anyway.
#[inline]
pub(crate) fn to_offset(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX)
}
