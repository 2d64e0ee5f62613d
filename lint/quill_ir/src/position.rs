//! Source positions and offset-to-position lookup.
//!
//! Lines and columns are 1-based. Columns count characters, not bytes, so
//! a warning after `é` points at the same column an editor shows.

use std::fmt;

/// A point in a stylesheet source.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct SourcePos {
    /// Absolute byte offset.
    pub offset: u32,
    pub line: u32,
    pub column: u32,
}

impl SourcePos {
    /// Position of the first byte of a source.
    pub const START: SourcePos = SourcePos {
        offset: 0,
        line: 1,
        column: 1,
    };

    pub const fn new(offset: u32, line: u32, column: u32) -> Self {
        SourcePos {
            offset,
            line,
            column,
        }
    }

    /// The position just past `text`, assuming `text` starts at `self`.
    ///
    /// This is how a value-relative offset becomes an absolute position:
    /// `value_pos.advance(&value[..offset])`.
    #[must_use]
    pub fn advance(self, text: &str) -> SourcePos {
        let mut pos = self;
        pos.offset = pos
            .offset
            .saturating_add(u32::try_from(text.len()).unwrap_or(u32::MAX));
        for c in text.chars() {
            if c == '\n' {
                pos.line += 1;
                pos.column = 1;
            } else {
                pos.column += 1;
            }
        }
        pos
    }
}

impl fmt::Display for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Pre-computed line start table for O(log L) offset lookups.
///
/// ```
/// use quill_ir::{LineOffsetTable, SourcePos};
///
/// let source = "a {\n  color: red;\n}";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.position(source, 6), SourcePos::new(6, 2, 3));
/// assert_eq!(table.line_text(source, 2), Some("  color: red;"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start; `offsets[0] == 0`.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                offsets.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        LineOffsetTable { offsets }
    }

    /// 1-based line containing `offset`.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// Full position of a byte offset in `source`.
    ///
    /// Offsets past the end clamp to the end of the source.
    pub fn position(&self, source: &str, offset: u32) -> SourcePos {
        let line = self.line_from_offset(offset);
        let line_start = self.line_start_offset(line).unwrap_or(0) as usize;
        let end = (offset as usize).min(source.len());
        let chars = source
            .get(line_start..end)
            .map_or(0, |prefix| prefix.chars().count());
        SourcePos {
            offset,
            line,
            column: u32::try_from(chars).unwrap_or(u32::MAX - 1) + 1,
        }
    }

    /// Byte offset of the start of a 1-based line.
    pub fn line_start_offset(&self, line: u32) -> Option<u32> {
        if line == 0 {
            return None;
        }
        self.offsets.get((line - 1) as usize).copied()
    }

    /// Text of a 1-based line without its line terminator.
    pub fn line_text<'s>(&self, source: &'s str, line: u32) -> Option<&'s str> {
        let start = self.line_start_offset(line)? as usize;
        let end = self
            .line_start_offset(line + 1)
            .map_or(source.len(), |next| next as usize);
        source
            .get(start..end)
            .map(|text| text.trim_end_matches(['\n', '\r']))
    }
}

#[cfg(test)]
mod tests;
