//! Content regions: the line windows that block parsing runs over.
//!
//! The document itself is the outermost region. Every list item and quote
//! carves a child region out of its parent's lines, with its own markers
//! and indentation moved into each line's prefix.

use crate::parsing::source::{LineRef, Span};

/// A single line's projection within a content region.
///
/// Separates the prefix stripped by enclosing containers (e.g. `> ` or a
/// list item's indentation) from the content the region parses.
///
/// # Invariants
///
/// - `raw_line.start <= prefix.start`
/// - `prefix.end == content.start`
/// - `content.start <= body_end <= content.end == raw_line.end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentLine {
    /// Full physical line span in the source.
    pub raw_line: Span,
    /// Container prefix region on this line.
    pub prefix: Span,
    /// Remainder after stripping container prefixes, terminator included.
    pub content: Span,
    /// Offset where the line terminator starts.
    pub body_end: usize,
}

impl ContentLine {
    /// Projects a physical line with nothing stripped.
    pub fn from_line(line: LineRef) -> Self {
        Self {
            raw_line: line.span,
            prefix: Span::new(line.span.start, line.span.start),
            content: line.span,
            body_end: line.body_end,
        }
    }

    /// The content without its line terminator.
    #[must_use]
    pub fn body(&self) -> Span {
        Span::new(self.content.start, self.body_end)
    }

    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.body_end < self.content.end
    }

    /// Moves `bytes` of content into the prefix.
    ///
    /// Never strips into the line terminator.
    #[must_use]
    pub fn strip(&self, bytes: usize) -> Self {
        let start = (self.content.start + bytes).min(self.body_end);
        Self {
            raw_line: self.raw_line,
            prefix: Span::new(self.prefix.start, start),
            content: Span::new(start, self.content.end),
            body_end: self.body_end,
        }
    }
}

/// A window of lines parsed as one sequence of sibling blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRegion {
    pub lines: Vec<ContentLine>,
    /// True inside list item and quote content.
    pub nested: bool,
}

impl ContentRegion {
    /// The outermost region: every physical line, nothing stripped.
    pub fn document(lines: impl IntoIterator<Item = LineRef>) -> Self {
        Self {
            lines: lines.into_iter().map(ContentLine::from_line).collect(),
            nested: false,
        }
    }

    /// A region carved out of a container.
    pub fn nested(lines: Vec<ContentLine>) -> Self {
        Self {
            lines,
            nested: true,
        }
    }
}
