use super::*;

#[test]
fn advance_within_a_line() {
    let base = SourcePos::new(10, 3, 14);
    assert_eq!(base.advance("0, "), SourcePos::new(13, 3, 17));
}

#[test]
fn advance_across_newlines() {
    let base = SourcePos::new(4, 1, 5);
    // "0\n  ," - the comma lands on line 2, column 3.
    assert_eq!(base.advance("0\n  "), SourcePos::new(8, 2, 3));
}

#[test]
fn advance_counts_chars_not_bytes() {
    let pos = SourcePos::START.advance("é,");
    assert_eq!(pos.offset, 3);
    assert_eq!(pos.column, 3);
}

#[test]
fn display_is_line_colon_column() {
    assert_eq!(SourcePos::new(0, 7, 2).to_string(), "7:2");
}

#[test]
fn table_line_lookup() {
    let source = "line1\nline2\nline3";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_text(source, 3), Some("line3"));
    assert_eq!(table.line_from_offset(0), 1);
    assert_eq!(table.line_from_offset(5), 1);
    assert_eq!(table.line_from_offset(6), 2);
    assert_eq!(table.line_from_offset(12), 3);
}

#[test]
fn table_position_matches_advance() {
    let source = "a {\n  b: c;\n\té: 1xx;\n}";
    let table = LineOffsetTable::build(source);
    for offset in 0..=u32::try_from(source.len()).unwrap_or(0) {
        if !source.is_char_boundary(offset as usize) {
            continue;
        }
        let expected = SourcePos::START.advance(&source[..offset as usize]);
        assert_eq!(table.position(source, offset), expected, "offset {offset}");
    }
}

#[test]
fn line_text_strips_terminators() {
    let source = "one\r\ntwo\nthree";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_text(source, 1), Some("one"));
    assert_eq!(table.line_text(source, 2), Some("two"));
    assert_eq!(table.line_text(source, 3), Some("three"));
    assert_eq!(table.line_text(source, 4), None);
    assert_eq!(table.line_text(source, 0), None);
}

#[test]
fn empty_source() {
    let table = LineOffsetTable::build("");
    assert_eq!(table.position("", 0), SourcePos::START);
}
