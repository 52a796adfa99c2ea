use crate::parsing::source::{SourceMap, SourceRange, Span, lines_with_spans, preview, slice};

use super::{
    classify::{LineClass, MarkdownLineClassifier},
    containers::{ContainerClaim, claim_list_item, claim_quote},
    content::{ContentLine, ContentRegion},
    kinds::{CodeFence, FenceKind, IndentedCode, Paragraph},
    open::BlockOpen,
    text,
    types::{BlockKind, BlockNode},
};

/// A node under construction together with the arena slot of its parent.
#[derive(Debug)]
struct Slot {
    parent: usize,
    node: BlockNode,
}

/// A container's content region waiting to be parsed.
#[derive(Debug)]
struct PendingRegion {
    region: ContentRegion,
    parent: usize,
}

/// Builds the block tree for one source buffer.
///
/// Nested content is driven by an explicit work stack instead of
/// recursion: every container pushes its carved-out region, and nodes are
/// collected in an arena keyed by their parent slot. Parents are always
/// allocated before their children, which lets [`BlockBuilder::build`]
/// assemble the tree by draining the arena from the back.
pub struct BlockBuilder<'s> {
    source: &'s [u8],
    arena: Vec<Slot>,
    pending: Vec<PendingRegion>,
}

impl<'s> BlockBuilder<'s> {
    const PREVIEW_LEN: usize = 24;

    pub fn new(source: &'s [u8]) -> Self {
        let root = BlockNode::new(
            BlockKind::Root,
            SourceMap::single(SourceRange::new(0, source.len())),
        );
        Self {
            source,
            arena: vec![Slot {
                parent: 0,
                node: root,
            }],
            pending: vec![PendingRegion {
                region: ContentRegion::document(lines_with_spans(source)),
                parent: 0,
            }],
        }
    }

    pub fn build(mut self) -> BlockNode {
        while let Some(PendingRegion { region, parent }) = self.pending.pop() {
            self.parse_region(&region, parent);
        }
        self.assemble()
    }

    fn parse_region(&mut self, region: &ContentRegion, parent: usize) {
        let classifier = MarkdownLineClassifier::for_region(region);
        let classes: Vec<LineClass> = region
            .lines
            .iter()
            .map(|l| classifier.classify(self.source, l))
            .collect();

        let mut i = 0;
        while i < classes.len() {
            if classes[i].is_blank {
                i += 1;
                continue;
            }
            i = self.claim(&region.lines, &classes, i, parent);
        }
    }

    /// Claims the block starting at `lines[start]`, returning the index of
    /// the first unclaimed line.
    fn claim(
        &mut self,
        lines: &[ContentLine],
        classes: &[LineClass],
        start: usize,
        parent: usize,
    ) -> usize {
        let src = self.source;
        match classes[start].open {
            Some(BlockOpen::Header { level }) => {
                let end = start + 1;
                let node = BlockNode::new(BlockKind::Header, Self::map(&lines[start..end]))
                    .with_text(text::header(src, &lines[start]))
                    .with_tag(u32::from(level));
                self.push_leaf(node, parent, start, end)
            }
            Some(BlockOpen::ThematicBreak) => {
                let end = start + 1;
                let node = BlockNode::new(BlockKind::HRule, Self::map(&lines[start..end]));
                self.push_leaf(node, parent, start, end)
            }
            Some(BlockOpen::IndentedCode) => {
                let end = Self::scan(classes, start, |lc| {
                    IndentedCode::is_code_line(slice(src, lc.line.body()))
                });
                let node = BlockNode::new(BlockKind::Code, Self::map(&lines[start..end]))
                    .with_text(text::indented_code(src, &lines[start..end]));
                self.push_leaf(node, parent, start, end)
            }
            Some(BlockOpen::FencedCode { kind, indent }) => {
                let (end, inner_end) = Self::scan_fence(src, lines, start, kind);
                let node = BlockNode::new(BlockKind::Code, Self::map(&lines[start..end]))
                    .with_text(text::fenced_code(src, &lines[start + 1..inner_end], indent));
                self.push_leaf(node, parent, start, end)
            }
            Some(BlockOpen::Html) => {
                let end = Self::scan(classes, start, |lc| !lc.is_blank);
                let node = BlockNode::new(BlockKind::Html, Self::map(&lines[start..end]))
                    .with_text(text::html(src, &lines[start..end]));
                self.push_leaf(node, parent, start, end)
            }
            Some(BlockOpen::ListItem(open)) => {
                let claim = claim_list_item(src, classes, start, open);
                self.push_container(BlockKind::ListItem, open.marker.tag(), lines, start, claim, parent)
            }
            Some(BlockOpen::Quote { marker_len }) => {
                let claim = claim_quote(classes, start, marker_len);
                self.push_container(BlockKind::Quote, 0, lines, start, claim, parent)
            }
            None => {
                let end = Self::scan_paragraph(classes, start);
                let node = BlockNode::new(BlockKind::Paragraph, Self::map(&lines[start..end]))
                    .with_text(text::paragraph(src, &lines[start..end]));
                self.push_leaf(node, parent, start, end)
            }
        }
    }

    /// Extends a block over following lines while `keep` holds.
    fn scan(classes: &[LineClass], start: usize, keep: impl Fn(&LineClass) -> bool) -> usize {
        classes[start + 1..]
            .iter()
            .position(|lc| !keep(lc))
            .map_or(classes.len(), |k| start + 1 + k)
    }

    /// A paragraph runs until an interrupting opener, and claims the blank
    /// line that terminates it.
    fn scan_paragraph(classes: &[LineClass], start: usize) -> usize {
        let mut i = start + 1;
        while let Some(lc) = classes.get(i) {
            if lc.is_blank {
                return i + 1;
            }
            if lc.open.is_some_and(|o| Paragraph::interrupted_by(&o)) {
                break;
            }
            i += 1;
        }
        i
    }

    /// Returns `(end, inner_end)`: the first unclaimed line and the end of
    /// the fence's inner lines. An unclosed fence runs to the region's end.
    fn scan_fence(
        source: &[u8],
        lines: &[ContentLine],
        start: usize,
        kind: FenceKind,
    ) -> (usize, usize) {
        for (i, line) in lines.iter().enumerate().skip(start + 1) {
            let body = slice(source, line.body());
            if CodeFence::closes(kind, CodeFence::sig(body)) {
                return (i + 1, i);
            }
        }
        (lines.len(), lines.len())
    }

    fn map(lines: &[ContentLine]) -> SourceMap {
        SourceMap::from_spans(lines.iter().map(|l| l.content))
    }

    fn push_leaf(&mut self, node: BlockNode, parent: usize, start: usize, end: usize) -> usize {
        log::trace!(
            "claimed {} lines {}..{} {:?}",
            node.kind,
            start,
            end,
            node.source_map
                .start()
                .zip(node.source_map.end())
                .map(|(s, e)| preview(self.source, Span::new(s, e), Self::PREVIEW_LEN))
        );
        self.arena.push(Slot { parent, node });
        end
    }

    fn push_container(
        &mut self,
        kind: BlockKind,
        tag: u32,
        lines: &[ContentLine],
        start: usize,
        claim: ContainerClaim,
        parent: usize,
    ) -> usize {
        let ContainerClaim { end, region } = claim;
        log::trace!(
            "claimed {} lines {}..{} ({} content lines)",
            kind,
            start,
            end,
            region.lines.len()
        );
        let slot = self.arena.len();
        self.arena.push(Slot {
            parent,
            node: BlockNode::new(kind, Self::map(&lines[start..end])).with_tag(tag),
        });
        self.pending.push(PendingRegion {
            region,
            parent: slot,
        });
        end
    }

    /// Moves every node into its parent, children before parents.
    ///
    /// Draining from the back pushes siblings in reverse, so each node's
    /// children are reversed once all of them have arrived.
    fn assemble(mut self) -> BlockNode {
        while self.arena.len() > 1 {
            let Some(Slot { parent, mut node }) = self.arena.pop() else {
                break;
            };
            node.children.reverse();
            self.arena[parent].node.children.push(node);
        }
        let len = self.source.len();
        let mut root = self
            .arena
            .pop()
            .map(|slot| slot.node)
            .unwrap_or_else(|| {
                BlockNode::new(BlockKind::Root, SourceMap::single(SourceRange::new(0, len)))
            });
        root.children.reverse();
        root
    }
}
