//! Byte-level scanning helpers.
//!
//! Statements end at `;`, `{` or `}`. Those bytes do not count inside
//! strings or comments, and `;` does not count inside parentheses or
//! brackets (`url(data:image/png;base64,...)`). Braces always end a
//! statement, so an unbalanced `(` cannot swallow the rest of a block.

/// Byte that ended a statement scan.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum Stop {
    Semicolon,
    OpenBrace,
    CloseBrace,
    Eof,
}

#[inline]
pub(crate) fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0c')
}

/// Index one past a comment starting at `start` (`/*`), or end of input.
pub(crate) fn comment_end(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 2;
    while i + 1 < bytes.len() {
        if bytes[i] == b'*' && bytes[i + 1] == b'/' {
            return i + 2;
        }
        i += 1;
    }
    bytes.len()
}

/// Index one past a string starting at `start`, or end of input.
pub(crate) fn string_end(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

#[inline]
fn is_comment_start(bytes: &[u8], i: usize) -> bool {
    bytes[i] == b'/' && bytes.get(i + 1) == Some(&b'*')
}

/// Find where the statement starting at `from` ends.
pub(crate) fn statement_end(bytes: &[u8], from: usize) -> (usize, Stop) {
    let mut depth = 0u32;
    let mut i = from;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                i += 2;
                continue;
            }
            b'"' | b'\'' => {
                i = string_end(bytes, i);
                continue;
            }
            _ if is_comment_start(bytes, i) => {
                i = comment_end(bytes, i);
                continue;
            }
            b'(' | b'[' => depth += 1,
            b')' | b']' => depth = depth.saturating_sub(1),
            b';' if depth == 0 => return (i, Stop::Semicolon),
            b'{' => return (i, Stop::OpenBrace),
            b'}' => return (i, Stop::CloseBrace),
            _ => {}
        }
        i += 1;
    }
    (bytes.len(), Stop::Eof)
}

/// First `:` in `bytes[from..to]` outside strings, comments and brackets.
pub(crate) fn find_colon(bytes: &[u8], from: usize, to: usize) -> Option<usize> {
    let mut depth = 0u32;
    let mut i = from;
    while i < to {
        match bytes[i] {
            b'\\' => {
                i += 2;
                continue;
            }
            b'"' | b'\'' => {
                i = string_end(bytes, i);
                continue;
            }
            _ if is_comment_start(bytes, i) => {
                i = comment_end(bytes, i);
                continue;
            }
            b'(' | b'[' => depth += 1,
            b')' | b']' => depth = depth.saturating_sub(1),
            b':' if depth == 0 => return Some(i),
            _ => {}
        }
        i += 1;
    }
    None
}

/// `start..end` narrowed to exclude leading and trailing whitespace.
pub(crate) fn trim(bytes: &[u8], mut start: usize, mut end: usize) -> (usize, usize) {
    while start < end && is_space(bytes[start]) {
        start += 1;
    }
    while end > start && is_space(bytes[end - 1]) {
        end -= 1;
    }
    (start, end)
}

/// Split a trailing `!important` (any case, optional space after `!`) off
/// `bytes[start..end]`. Returns the end of the remaining value.
pub(crate) fn strip_important(bytes: &[u8], start: usize, end: usize) -> Option<usize> {
    const KEYWORD: &[u8] = b"important";
    if end < start + KEYWORD.len() + 1 {
        return None;
    }
    let keyword_start = end - KEYWORD.len();
    if !bytes[keyword_start..end].eq_ignore_ascii_case(KEYWORD) {
        return None;
    }
    let (_, before_keyword) = trim(bytes, start, keyword_start);
    if before_keyword == start || bytes[before_keyword - 1] != b'!' {
        return None;
    }
    Some(trim(bytes, start, before_keyword - 1).1)
}
