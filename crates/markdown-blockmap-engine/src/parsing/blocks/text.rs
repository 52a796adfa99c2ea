//! Text normalization for leaf blocks.
//!
//! Each function turns the content lines a leaf claimed into the node's
//! text by stripping the construct's own markers and indentation.

use crate::parsing::source::slice;

use super::content::ContentLine;
use super::indent::{is_blank, strip_columns};
use super::kinds::{Header, IndentedCode};

fn body<'s>(source: &'s [u8], line: &ContentLine) -> &'s [u8] {
    slice(source, line.body())
}

/// Paragraph text: lines with leading whitespace removed, joined by `\n`.
///
/// Leading and trailing blank lines are dropped; interior blank lines
/// survive as empty lines.
pub fn paragraph(source: &[u8], lines: &[ContentLine]) -> Vec<u8> {
    let bodies: Vec<&[u8]> = lines.iter().map(|l| body(source, l)).collect();
    let Some(first) = bodies.iter().position(|b| !is_blank(b)) else {
        return Vec::new();
    };
    let last = bodies.iter().rposition(|b| !is_blank(b)).unwrap_or(first);

    let mut out = Vec::new();
    for (i, b) in bodies[first..=last].iter().enumerate() {
        if i > 0 {
            out.push(b'\n');
        }
        let skip = b.iter().take_while(|&&c| c == b' ' || c == b'\t').count();
        out.extend_from_slice(&b[skip..]);
    }
    out
}

pub fn header(source: &[u8], line: &ContentLine) -> Vec<u8> {
    Header::text(body(source, line)).to_vec()
}

/// Indented code text: each line minus the code indentation, keeping the
/// line terminator as `\n` where the source had one.
pub fn indented_code(source: &[u8], lines: &[ContentLine]) -> Vec<u8> {
    let mut out = Vec::new();
    for line in lines {
        let b = body(source, line);
        out.extend_from_slice(&b[strip_columns(b, IndentedCode::WIDTH)..]);
        if line.is_terminated() {
            out.push(b'\n');
        }
    }
    out
}

/// Raw HTML text: the lines verbatim, each terminated line ending in `\n`.
pub fn html(source: &[u8], lines: &[ContentLine]) -> Vec<u8> {
    let mut out = Vec::new();
    for line in lines {
        out.extend_from_slice(body(source, line));
        if line.is_terminated() {
            out.push(b'\n');
        }
    }
    out
}

/// Fenced code text: the lines between the fences, each stripped of up to
/// `indent` columns and terminated by `\n`.
pub fn fenced_code(source: &[u8], inner: &[ContentLine], indent: usize) -> Vec<u8> {
    let mut out = Vec::new();
    for line in inner {
        let b = body(source, line);
        out.extend_from_slice(&b[strip_columns(b, indent)..]);
        out.push(b'\n');
    }
    out
}
