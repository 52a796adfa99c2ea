//! Line claiming for container blocks.
//!
//! A container claims a window of its parent's lines and carves them into
//! a child region by moving its own markers and indentation into each
//! line's prefix. The child region is parsed later by the builder.

use crate::parsing::source::slice;

use super::classify::LineClass;
use super::content::{ContentLine, ContentRegion};
use super::indent::strip_columns;
use super::kinds::{ListItem, ListItemOpen};

/// Lines claimed by a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerClaim {
    /// Exclusive index of the last claimed line in the parent region.
    pub end: usize,
    /// The container's content, one line per claimed parent line.
    pub region: ContentRegion,
}

/// Claims the lines of the list item opened at `lines[start]`.
///
/// A following line belongs to the item when it is indented to the
/// content column, opens a list more indented than this item's marker, or
/// lazily continues the item (no blank line before it and no construct
/// that breaks lazy continuation). Blank lines are claimed only when more
/// item content follows them.
pub fn claim_list_item(
    source: &[u8],
    lines: &[LineClass],
    start: usize,
    open: ListItemOpen,
) -> ContainerClaim {
    let width = ListItem::continuation_width(&open);
    let strip = |line: &ContentLine| line.strip(strip_columns(slice(source, line.body()), width));

    let mut content = vec![lines[start].line.strip(open.content_offset)];
    let mut end = start + 1;
    let mut saw_blank = false;

    for (i, lc) in lines.iter().enumerate().skip(start + 1) {
        if lc.is_blank {
            saw_blank = true;
            continue;
        }

        let belongs = if lc.indent >= open.content_col {
            true
        } else if let Some(marker) = lc.list_marker {
            // Sibling items end this one; deeper markers start a sublist.
            marker.marker_col > open.marker_col
        } else {
            !saw_blank && !lc.ends_lazy_continuation()
        };
        if !belongs {
            break;
        }

        content.extend(lines[end..i].iter().map(|b| strip(&b.line)));
        content.push(strip(&lc.line));
        end = i + 1;
        saw_blank = false;
    }

    ContainerClaim {
        end,
        region: ContentRegion::nested(content),
    }
}

/// Claims the lines of the quote opened at `lines[start]`.
///
/// Quote-marked lines lose one marker level. Lazy continuation lines and
/// interior blank lines are carried over unstripped; blank lines are
/// claimed only when the next non-blank line is quote-marked again.
pub fn claim_quote(lines: &[LineClass], start: usize, marker_len: usize) -> ContainerClaim {
    let mut content = vec![lines[start].line.strip(marker_len)];
    let mut i = start + 1;

    while i < lines.len() {
        let lc = &lines[i];

        if lc.is_blank {
            let next = lines[i..].iter().position(|l| !l.is_blank).map(|k| i + k);
            match next {
                Some(k) if lines[k].quote_marker().is_some() => {
                    content.extend(lines[i..k].iter().map(|b| b.line));
                    i = k;
                    continue;
                }
                _ => break,
            }
        }

        if let Some(len) = lc.quote_marker() {
            content.push(lc.line.strip(len));
        } else if !lc.ends_lazy_continuation() && !lc.opens_list_item() {
            content.push(lc.line);
        } else {
            break;
        }
        i += 1;
    }

    ContainerClaim {
        end: i,
        region: ContentRegion::nested(content),
    }
}
