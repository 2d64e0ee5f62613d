//! Hand-written scanner producing a [`Token`] tree from a value string.
//!
//! The scanner walks the value's bytes once, left to right. All token
//! boundaries fall on ASCII bytes (whitespace, quotes, parentheses,
//! dividers, comment markers), so every slice it takes is on a UTF-8
//! character boundary. Escapes (`\,`, `\"`) consume the whole escaped
//! character, multi-byte ones included.
//!
//! # Nesting
//!
//! Function arguments are scanned recursively, one frame per nesting level.
//! Recursion stops at [`TokenizerConfig::max_depth`]: a function nested
//! deeper than that keeps its arguments as one raw word, the same treatment
//! `url(...)` always gets. The closing parenthesis is still located with a
//! plain counter, so offsets after the opaque function stay exact.

use memchr::{memchr2, memmem};

use crate::token::{to_offset, Token, TokenKind};

/// Dividers recognized by [`tokenize`].
pub const DEFAULT_DIVIDERS: &[u8] = b",/:";

/// Default limit on function nesting before arguments become opaque.
pub const DEFAULT_MAX_DEPTH: u32 = 64;

/// Tokenizer settings.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenizerConfig {
    /// ASCII bytes that produce [`TokenKind::Divider`] tokens.
    pub dividers: &'static [u8],
    /// Function nesting depth past which arguments are not tokenized.
    pub max_depth: u32,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig {
            dividers: DEFAULT_DIVIDERS,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Tokenize a value with the default configuration.
pub fn tokenize(value: &str) -> Vec<Token<'_>> {
    tokenize_with(value, &TokenizerConfig::default())
}

/// Tokenize a value with an explicit configuration.
pub fn tokenize_with<'a>(value: &'a str, config: &TokenizerConfig) -> Vec<Token<'a>> {
    let mut scanner = Scanner {
        value,
        bytes: value.as_bytes(),
        pos: 0,
        config,
    };
    scanner.sequence(0).tokens
}

/// Tokens of one nesting level and whether its closing `)` was found.
struct Sequence<'a> {
    tokens: Vec<Token<'a>>,
    closed: bool,
}

struct Scanner<'a, 'c> {
    value: &'a str,
    bytes: &'a [u8],
    pos: usize,
    config: &'c TokenizerConfig,
}

#[inline]
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0c')
}

/// Byte length of the UTF-8 character starting with `lead`.
#[inline]
fn char_len(lead: u8) -> usize {
    match lead {
        0xF0..=0xFF => 4,
        0xE0..=0xEF => 3,
        0xC0..=0xDF => 2,
        _ => 1,
    }
}

impl<'a> Scanner<'a, '_> {
    /// Scan tokens until end of input or, inside a function, its `)`.
    fn sequence(&mut self, depth: u32) -> Sequence<'a> {
        let mut tokens = Vec::new();
        while self.pos < self.bytes.len() {
            let start = self.pos;
            let b = self.bytes[start];
            let token = match b {
                b if is_space(b) => self.space(start),
                b'"' | b'\'' => self.string(start, b),
                b'/' if self.peek(start + 1) == Some(b'*') => self.comment(start),
                b'(' => self.function(start, start, depth),
                b')' => {
                    self.pos = start + 1;
                    if depth > 0 {
                        return Sequence {
                            tokens,
                            closed: true,
                        };
                    }
                    // Unmatched at top level: keep it as literal text.
                    Token::leaf(TokenKind::Word, self.value, start, start + 1)
                }
                b if self.is_divider(b) => {
                    self.pos = start + 1;
                    Token::leaf(TokenKind::Divider, self.value, start, start + 1)
                }
                _ => {
                    let end = self.word_end(start);
                    if self.peek(end) == Some(b'(') {
                        self.function(start, end, depth)
                    } else {
                        self.pos = end;
                        Token::leaf(TokenKind::Word, self.value, start, end)
                    }
                }
            };
            tokens.push(token);
        }
        Sequence {
            tokens,
            closed: false,
        }
    }

    #[inline]
    fn peek(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    #[inline]
    fn is_divider(&self, b: u8) -> bool {
        self.config.dividers.contains(&b)
    }

    /// Index just past a backslash escape starting at `backslash`.
    #[inline]
    fn skip_escape(&self, backslash: usize) -> usize {
        let next = backslash + 1;
        match self.peek(next) {
            Some(lead) => (next + char_len(lead)).min(self.bytes.len()),
            None => next,
        }
    }

    fn is_word_boundary(&self, index: usize) -> bool {
        let b = self.bytes[index];
        is_space(b)
            || matches!(b, b'"' | b'\'' | b'(' | b')')
            || self.is_divider(b)
            || (b == b'/' && self.peek(index + 1) == Some(b'*'))
    }

    fn word_end(&self, start: usize) -> usize {
        let mut i = start;
        while i < self.bytes.len() {
            if self.bytes[i] == b'\\' {
                i = self.skip_escape(i);
                continue;
            }
            // The caller dispatched on the first byte; it is never a boundary.
            if i > start && self.is_word_boundary(i) {
                break;
            }
            i += 1;
        }
        i
    }

    fn space(&mut self, start: usize) -> Token<'a> {
        let len = self.bytes[start..].iter().take_while(|&&b| is_space(b)).count();
        self.pos = start + len;
        Token::leaf(TokenKind::Space, self.value, start, self.pos)
    }

    /// Find the end of a string whose opening quote is at `start`.
    ///
    /// Returns the index one past the closing quote (or end of input) and
    /// whether the closing quote was found.
    fn string_end(&self, start: usize, quote: u8) -> (usize, bool) {
        let mut i = start + 1;
        while let Some(rel) = memchr2(quote, b'\\', &self.bytes[i..]) {
            let at = i + rel;
            if self.bytes[at] == b'\\' {
                i = self.skip_escape(at);
            } else {
                return (at + 1, true);
            }
        }
        (self.bytes.len(), false)
    }

    fn string(&mut self, start: usize, quote: u8) -> Token<'a> {
        let (end, closed) = self.string_end(start, quote);
        self.pos = end;
        let mut token = Token::leaf(TokenKind::String, self.value, start, end);
        token.unclosed = !closed;
        token
    }

    fn comment(&mut self, start: usize) -> Token<'a> {
        let body = start + 2;
        let (end, closed) = match memmem::find(&self.bytes[body..], b"*/") {
            Some(rel) => (body + rel + 2, true),
            None => (self.bytes.len(), false),
        };
        self.pos = end;
        let mut token = Token::leaf(TokenKind::Comment, self.value, start, end);
        token.unclosed = !closed;
        token
    }

    /// Scan a function whose name spans `start..name_end`; `name_end` is the
    /// index of its `(`.
    fn function(&mut self, start: usize, name_end: usize, depth: u32) -> Token<'a> {
        let name = &self.value[start..name_end];
        let body = name_end + 1;
        self.pos = body;

        let is_url = name.eq_ignore_ascii_case("url");
        let opaque = is_url || depth >= self.config.max_depth;
        let (children, closed) = if opaque {
            let (inner_end, closed) = self.raw_body(body, !is_url);
            let children = if inner_end > body {
                vec![Token::leaf(TokenKind::Word, self.value, body, inner_end)]
            } else {
                Vec::new()
            };
            (children, closed)
        } else {
            let sequence = self.sequence(depth + 1);
            (sequence.tokens, sequence.closed)
        };

        Token {
            kind: TokenKind::Function,
            text: name,
            start: to_offset(start),
            end: to_offset(name_end),
            children,
            close: to_offset(self.pos),
            unclosed: !closed,
            opaque,
        }
    }

    /// Skip a function body without tokenizing it.
    ///
    /// Balances nested parentheses with a counter. Quotes are honored when
    /// `always_quotes` is set, or when the body's first non-space byte is a
    /// quote (`url("a).png")` versus `url(it's.png)`). Leaves the cursor
    /// after the closing `)` and returns the end of the body (exclusive).
    fn raw_body(&mut self, body: usize, always_quotes: bool) -> (usize, bool) {
        let honor_quotes = always_quotes
            || self.bytes[body..]
                .iter()
                .find(|&&b| !is_space(b))
                .is_some_and(|&b| b == b'"' || b == b'\'');

        let mut depth = 0u32;
        let mut i = body;
        while i < self.bytes.len() {
            match self.bytes[i] {
                b'\\' => {
                    i = self.skip_escape(i);
                    continue;
                }
                quote @ (b'"' | b'\'') if honor_quotes => {
                    i = self.string_end(i, quote).0;
                    continue;
                }
                b'(' => depth += 1,
                b')' if depth == 0 => {
                    self.pos = i + 1;
                    return (i, true);
                }
                b')' => depth -= 1,
                _ => {}
            }
            i += 1;
        }
        self.pos = self.bytes.len();
        (self.bytes.len(), false)
    }
}
