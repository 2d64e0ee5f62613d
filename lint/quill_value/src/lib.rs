//! Tokenizer for stylesheet declaration values.
//!
//! Splits a single property value (`1px solid rgb(0, 0, 0)`) into a tree of
//! [`Token`]s: words, quoted strings, function calls with nested arguments,
//! dividers, whitespace runs and comments. Every token carries exact byte
//! offsets into the value it came from, so a rule can compute an absolute
//! source position as `value base position + token.start`.
//!
//! Tokenization is total: unbalanced quotes, parentheses and comments close
//! at end of input and are flagged with [`Token::unclosed`] instead of
//! producing an error.
//!
//! # Modules
//!
//! - [`token`]: token kinds and the [`Token`] tree node
//! - [`scanner`]: the tokenizer itself
//! - [`dimension`]: number/unit splitting for numeric words
//! - [`whitespace`]: whitespace context around divider tokens

pub mod dimension;
pub mod scanner;
pub mod token;
pub mod whitespace;

pub use dimension::{parse_dimension, Dimension};
pub use scanner::{tokenize, tokenize_with, TokenizerConfig};
pub use token::{walk_tokens, Token, TokenKind, Walk};
pub use whitespace::{
    analyze_whitespace, is_multi_line, DividerContexts, DividerScope, Gap, WhitespaceContext,
};
