use std::borrow::Cow;
use std::fmt;

use crate::parsing::source::SourceMap;

use super::kinds::ListMarker;

/// The kind of a block node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// The document itself; always the tree's root.
    Root,
    /// Contiguous text lines (default when no other block opener matches).
    Paragraph,
    /// ATX heading; `tag` holds the level.
    Header,
    /// Horizontal rule.
    HRule,
    /// Indented or fenced code.
    Code,
    /// Raw HTML block.
    Html,
    /// List item; `tag` holds the marker class.
    ListItem,
    /// Block quote.
    Quote,
}

impl BlockKind {
    pub fn name(self) -> &'static str {
        match self {
            BlockKind::Root => "Root",
            BlockKind::Paragraph => "Paragraph",
            BlockKind::Header => "Header",
            BlockKind::HRule => "HRule",
            BlockKind::Code => "Code",
            BlockKind::Html => "HTML",
            BlockKind::ListItem => "ListItem",
            BlockKind::Quote => "Quote",
        }
    }

    /// Returns true for kinds that hold child blocks.
    pub fn is_container(self) -> bool {
        matches!(self, BlockKind::Root | BlockKind::ListItem | BlockKind::Quote)
    }

    /// Returns true for kinds whose node carries text.
    pub fn has_text(self) -> bool {
        matches!(
            self,
            BlockKind::Paragraph | BlockKind::Header | BlockKind::Code | BlockKind::Html
        )
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed block with its text, children and source ranges.
///
/// Children are owned exclusively; dropping the root releases the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNode {
    pub kind: BlockKind,
    /// Normalized text for text-bearing kinds; empty otherwise.
    pub text: Vec<u8>,
    /// Heading level for `Header`, marker class for `ListItem`, else 0.
    pub tag: u32,
    /// Child blocks in document order.
    pub children: Vec<BlockNode>,
    /// Byte ranges of the source this node was derived from.
    pub source_map: SourceMap,
}

impl BlockNode {
    pub fn new(kind: BlockKind, source_map: SourceMap) -> Self {
        Self {
            kind,
            text: Vec::new(),
            tag: 0,
            children: Vec::new(),
            source_map,
        }
    }

    #[must_use]
    pub fn with_text(mut self, text: Vec<u8>) -> Self {
        self.text = text;
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: u32) -> Self {
        self.tag = tag;
        self
    }

    /// Text as UTF-8, replacing invalid sequences.
    pub fn text_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.text)
    }

    pub fn heading_level(&self) -> Option<u8> {
        match self.kind {
            BlockKind::Header => u8::try_from(self.tag).ok(),
            _ => None,
        }
    }

    pub fn list_marker(&self) -> Option<ListMarker> {
        match self.kind {
            BlockKind::ListItem => ListMarker::from_tag(self.tag),
            _ => None,
        }
    }

    /// Pre-order traversal of this node and all its descendants.
    pub fn descendants(&self) -> impl Iterator<Item = &BlockNode> {
        self.walk().map(|(_, node)| node)
    }

    /// Pre-order traversal yielding each node with its depth below `self`.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(0, self)],
        }
    }
}

impl Drop for BlockNode {
    // Unlinks the subtree level by level so deep trees never recurse.
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

/// Iterator returned by [`BlockNode::walk`].
pub struct Walk<'a> {
    stack: Vec<(usize, &'a BlockNode)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a BlockNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().map(|c| (depth + 1, c)));
        Some((depth, node))
    }
}
