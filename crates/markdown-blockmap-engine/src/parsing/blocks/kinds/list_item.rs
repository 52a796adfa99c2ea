use crate::parsing::blocks::indent::{TAB_STOP, advance_columns, is_blank, leading_indent};

use super::ThematicBreak;

/// Marker class of a list item, carried in the node's `tag`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListMarker {
    /// `-`, `+` or `*`.
    Bullet,
    /// `N.`
    Ordered,
}

impl ListMarker {
    const ORDERED_FLAG: u32 = 1;
    const BLOCK_FLAG: u32 = 2;

    /// Tag value stored on `ListItem` nodes.
    ///
    /// Items always hold block content, so the block flag is always set;
    /// ordered markers add the ordered flag.
    #[must_use]
    pub fn tag(self) -> u32 {
        match self {
            ListMarker::Bullet => Self::BLOCK_FLAG,
            ListMarker::Ordered => Self::BLOCK_FLAG | Self::ORDERED_FLAG,
        }
    }

    #[must_use]
    pub fn from_tag(tag: u32) -> Option<Self> {
        match tag {
            t if t == Self::BLOCK_FLAG => Some(ListMarker::Bullet),
            t if t == Self::BLOCK_FLAG | Self::ORDERED_FLAG => Some(ListMarker::Ordered),
            _ => None,
        }
    }
}

/// A list marker found at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItemOpen {
    pub marker: ListMarker,
    /// Column of the marker character itself.
    pub marker_col: usize,
    /// Column at which the item's content starts.
    pub content_col: usize,
    /// Byte offset in the line where the item's content starts.
    pub content_offset: usize,
}

pub struct ListItem;

impl ListItem {
    pub const BULLETS: [u8; 3] = [b'-', b'+', b'*'];
    pub const ORDINAL_DELIMITER: u8 = b'.';
    /// Longest ordinal accepted (`123456789.`).
    pub const MAX_ORDINAL_DIGITS: usize = 9;
    /// Continuation lines are stripped of at least this many columns.
    pub const CONTINUATION_WIDTH: usize = 4;

    /// Detects a list marker at any indentation.
    ///
    /// Callers decide whether the indentation is acceptable in their
    /// context. Lines that form a horizontal rule (`* * *`) are not items.
    pub fn open(line: &[u8]) -> Option<ListItemOpen> {
        if ThematicBreak::matches(line) {
            return None;
        }

        let (marker_col, indent) = leading_indent(line);
        let rest = &line[indent..];

        let (marker, marker_len) = match rest.first() {
            Some(b) if Self::BULLETS.contains(b) => (ListMarker::Bullet, 1),
            Some(b) if b.is_ascii_digit() => {
                let digits = rest.iter().take_while(|b| b.is_ascii_digit()).count();
                if digits > Self::MAX_ORDINAL_DIGITS
                    || rest.get(digits) != Some(&Self::ORDINAL_DELIMITER)
                {
                    return None;
                }
                (ListMarker::Ordered, digits + 1)
            }
            _ => return None,
        };

        let after_marker = indent + marker_len;
        if !matches!(line.get(after_marker), Some(b' ' | b'\t')) {
            return None;
        }

        let marker_end_col = marker_col + marker_len;
        let (_, ws_bytes) = leading_indent(&line[after_marker..]);
        let ws_cols = advance_columns(marker_end_col, &line[after_marker..after_marker + ws_bytes])
            - marker_end_col;

        // An empty first line, or content pushed out into code territory,
        // puts the content column one past the marker.
        let (content_col, content_offset) =
            if is_blank(&line[after_marker..]) || ws_cols > TAB_STOP {
                (
                    advance_columns(marker_end_col, &line[after_marker..after_marker + 1]),
                    after_marker + 1,
                )
            } else {
                (marker_end_col + ws_cols, after_marker + ws_bytes)
            };

        Some(ListItemOpen {
            marker,
            marker_col,
            content_col,
            content_offset,
        })
    }

    /// Columns stripped from every continuation line of an item.
    pub fn continuation_width(open: &ListItemOpen) -> usize {
        open.content_col.max(Self::CONTINUATION_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(line: &str) -> Option<(ListMarker, usize, usize, usize)> {
        ListItem::open(line.as_bytes())
            .map(|o| (o.marker, o.marker_col, o.content_col, o.content_offset))
    }

    #[test]
    fn bullet_markers() {
        assert_eq!(open("- list item"), Some((ListMarker::Bullet, 0, 2, 2)));
        assert_eq!(open("+ 1"), Some((ListMarker::Bullet, 0, 2, 2)));
        assert_eq!(open("* B"), Some((ListMarker::Bullet, 0, 2, 2)));
    }

    #[test]
    fn content_column_follows_whitespace() {
        assert_eq!(open("+   Lorem ipsum"), Some((ListMarker::Bullet, 0, 4, 4)));
        assert_eq!(open(" + 1"), Some((ListMarker::Bullet, 1, 3, 3)));
    }

    #[test]
    fn ordered_markers() {
        assert_eq!(open("1. one"), Some((ListMarker::Ordered, 0, 3, 3)));
        assert_eq!(open("42.  x"), Some((ListMarker::Ordered, 0, 5, 5)));
        assert_eq!(open("1234567890. x"), None);
        assert_eq!(open("1) x"), None);
    }

    #[test]
    fn marker_needs_whitespace() {
        assert_eq!(open("-item"), None);
        assert_eq!(open("-"), None);
        assert_eq!(open("2024.was"), None);
    }

    #[test]
    fn empty_item_content_column() {
        assert_eq!(open("- "), Some((ListMarker::Bullet, 0, 2, 2)));
    }

    #[test]
    fn wide_gap_falls_back_to_one_column() {
        assert_eq!(open("-      code"), Some((ListMarker::Bullet, 0, 2, 2)));
    }

    #[test]
    fn horizontal_rule_is_not_item() {
        assert_eq!(open("* * *"), None);
        assert_eq!(open("- - -"), None);
    }

    #[test]
    fn any_indentation_is_reported() {
        assert_eq!(open("        - C"), Some((ListMarker::Bullet, 8, 10, 10)));
    }

    #[test]
    fn continuation_width_is_at_least_four() {
        let o = ListItem::open(b"- a").unwrap();
        assert_eq!(ListItem::continuation_width(&o), 4);
        let o = ListItem::open(b"100.  a").unwrap();
        assert_eq!(ListItem::continuation_width(&o), 6);
    }

    #[test]
    fn tags_round_trip() {
        assert_eq!(ListMarker::Bullet.tag(), 2);
        assert_eq!(ListMarker::Ordered.tag(), 3);
        assert_eq!(ListMarker::from_tag(2), Some(ListMarker::Bullet));
        assert_eq!(ListMarker::from_tag(3), Some(ListMarker::Ordered));
        assert_eq!(ListMarker::from_tag(0), None);
    }
}
