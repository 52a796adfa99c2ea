use crate::parsing::source::slice;

use super::content::{ContentLine, ContentRegion};
use super::indent::{is_blank, leading_indent};
use super::kinds::{ListItem, ListItemOpen};
use super::open::{BlockOpen, try_open};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line of a region is classified
/// independently, without reference to surrounding lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClass {
    /// The line as projected into its content region.
    pub line: ContentLine,
    /// Whether the content is whitespace only.
    pub is_blank: bool,
    /// Leading indentation of the content, in columns.
    pub indent: usize,
    /// The block construct this line would open in its region.
    pub open: Option<BlockOpen>,
    /// A list marker at any indentation, used by the list item claim rules.
    pub list_marker: Option<ListItemOpen>,
}

impl LineClass {
    /// Byte length of the quote marker, if the line opens a quote.
    pub fn quote_marker(&self) -> Option<usize> {
        match self.open {
            Some(BlockOpen::Quote { marker_len }) => Some(marker_len),
            _ => None,
        }
    }

    /// Returns true if this line opens a construct that cannot lazily
    /// continue an enclosing list item or quote.
    pub fn ends_lazy_continuation(&self) -> bool {
        self.open.is_some_and(|o| o.ends_lazy_continuation())
    }

    pub fn opens_list_item(&self) -> bool {
        matches!(self.open, Some(BlockOpen::ListItem(_)))
    }
}

/// Classifies individual lines for the block parsing phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownLineClassifier {
    nested: bool,
}

impl MarkdownLineClassifier {
    pub fn new(nested: bool) -> Self {
        Self { nested }
    }

    /// The classifier matching a region's nesting context.
    pub fn for_region(region: &ContentRegion) -> Self {
        Self::new(region.nested)
    }

    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify(&self, source: &[u8], line: &ContentLine) -> LineClass {
        let body = slice(source, line.body());
        if is_blank(body) {
            return LineClass {
                line: *line,
                is_blank: true,
                indent: leading_indent(body).0,
                open: None,
                list_marker: None,
            };
        }

        LineClass {
            line: *line,
            is_blank: false,
            indent: leading_indent(body).0,
            open: try_open(body, self.nested),
            list_marker: ListItem::open(body),
        }
    }
}
