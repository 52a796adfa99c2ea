use crate::parsing::blocks::indent::{is_blank, leading_indent};

/// Indented code block: lines carrying four or more columns of indentation.
///
/// Only recognised at the top level of a document; inside list items and
/// quotes the same lines are ordinary (lazily continued) content.
pub struct IndentedCode;

impl IndentedCode {
    /// Columns of indentation that mark, and are stripped from, a code line.
    pub const WIDTH: usize = 4;

    pub fn is_code_line(line: &[u8]) -> bool {
        !is_blank(line) && leading_indent(line).0 >= Self::WIDTH
    }
}
