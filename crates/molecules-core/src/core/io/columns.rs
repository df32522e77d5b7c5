use std::str::FromStr;

/// Byte offset of character column `column`, or `None` past the end of the line.
fn byte_offset(line: &str, column: usize) -> Option<usize> {
    if line.is_ascii() {
        return (column <= line.len()).then_some(column);
    }
    line.char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(line.len()))
        .nth(column)
}

/// Line width in characters.
pub(crate) fn width(line: &str) -> usize {
    if line.is_ascii() {
        line.len()
    } else {
        line.chars().count()
    }
}

/// The first `count` characters, or the whole line when it is shorter.
pub(crate) fn prefix(line: &str, count: usize) -> &str {
    let end = byte_offset(line, count).unwrap_or(line.len());
    line.get(..end).unwrap_or(line)
}

/// Returns the trimmed text in character columns `start..end`, or `""` when the line is too short.
pub(crate) fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    match (byte_offset(line, start), byte_offset(line, end)) {
        (Some(start), Some(end)) => line.get(start..end).unwrap_or("").trim(),
        _ => "",
    }
}

/// Returns the trimmed text from character column `start` to the end of the line.
pub(crate) fn rest_from(line: &str, start: usize) -> &str {
    byte_offset(line, start)
        .and_then(|start| line.get(start..))
        .unwrap_or("")
        .trim()
}

/// Parses the trimmed field at `start..end`; blank, missing and malformed fields are `None`.
pub(crate) fn parse_field<T: FromStr>(line: &str, start: usize, end: usize) -> Option<T> {
    let field = slice_and_trim(line, start, end);
    if field.is_empty() {
        return None;
    }
    field.parse().ok()
}
