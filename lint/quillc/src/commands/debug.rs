//! Debug command: `tokens` for inspecting the value tokenizer.

use std::fmt::Write;

use quill_value::{tokenize, Token};

/// Render the token tree of `value`, one token per line.
///
/// ```text
/// string "'a'" 0..3 quote ' contents "a"
/// function "rgb" 0..3 close 12
///   word "0" 4..5
///   div "," 5..6
/// ```
pub fn format_tokens(value: &str) -> String {
    let mut out = String::new();
    write_tokens(&mut out, &tokenize(value), 0);
    out
}

fn write_tokens(out: &mut String, tokens: &[Token<'_>], depth: usize) {
    for token in tokens {
        let indent = "  ".repeat(depth);
        let _ = write!(
            out,
            "{indent}{} {:?} {}..{}",
            token.kind, token.text, token.start, token.end
        );
        let (_, close) = token.extent();
        if !token.children.is_empty() || close != token.end {
            let _ = write!(out, " close {close}");
        }
        if let Some(quote) = token.quote() {
            let _ = write!(out, " quote {quote} contents {:?}", token.unquoted());
        }
        if token.opaque {
            out.push_str(" opaque");
        }
        if token.unclosed {
            out.push_str(" unclosed");
        }
        out.push('\n');
        write_tokens(out, &token.children, depth + 1);
    }
}

/// Print the token tree of `value` to stdout.
pub fn print_tokens(value: &str) {
    print!("{}", format_tokens(value));
}
