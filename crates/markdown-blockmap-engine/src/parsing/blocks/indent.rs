//! Column arithmetic over line bodies.
//!
//! Indentation is measured in columns: a space advances one column, a tab
//! advances to the next multiple of [`TAB_STOP`].

/// Tab stop width in columns.
pub const TAB_STOP: usize = 4;

/// Maximum indentation (in columns) a block opener may carry.
pub const MAX_OPENER_INDENT: usize = 3;

/// Returns true if the line contains only spaces, tabs and line terminators.
#[must_use]
pub fn is_blank(line: &[u8]) -> bool {
    line.iter().all(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'))
}

/// Counts leading indentation, returning `(columns, bytes)`.
#[must_use]
pub fn leading_indent(line: &[u8]) -> (usize, usize) {
    let mut col = 0;
    let mut bytes = 0;
    for &b in line {
        match b {
            b' ' => col += 1,
            b'\t' => col = next_tab_stop(col),
            _ => break,
        }
        bytes += 1;
    }
    (col, bytes)
}

/// Byte count of up to `columns` of leading indentation.
///
/// A tab straddling the limit is consumed whole.
#[must_use]
pub fn strip_columns(line: &[u8], columns: usize) -> usize {
    let mut col = 0;
    let mut bytes = 0;
    while col < columns {
        match line.get(bytes) {
            Some(b' ') => col += 1,
            Some(b'\t') => col = next_tab_stop(col),
            _ => break,
        }
        bytes += 1;
    }
    bytes
}

/// Returns the remainder of `line` after at most [`MAX_OPENER_INDENT`]
/// columns of indentation, or `None` when the line is indented further.
#[must_use]
pub fn opener_rest(line: &[u8]) -> Option<&[u8]> {
    let (cols, bytes) = leading_indent(line);
    (cols <= MAX_OPENER_INDENT).then(|| &line[bytes..])
}

/// Trims leading and trailing spaces and tabs.
#[must_use]
pub fn trim_whitespace(mut s: &[u8]) -> &[u8] {
    while let [b' ' | b'\t', rest @ ..] = s {
        s = rest;
    }
    while let [rest @ .., b' ' | b'\t'] = s {
        s = rest;
    }
    s
}

/// Column `col` advanced by `bytes`, honouring tab stops.
#[must_use]
pub fn advance_columns(mut col: usize, bytes: &[u8]) -> usize {
    for &b in bytes {
        col = if b == b'\t' { next_tab_stop(col) } else { col + 1 };
    }
    col
}

fn next_tab_stop(col: usize) -> usize {
    (col / TAB_STOP + 1) * TAB_STOP
}
