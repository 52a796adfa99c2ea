use super::indent::MAX_OPENER_INDENT;
use super::kinds::{
    BlockQuote, CodeFence, FenceKind, Header, HtmlBlock, IndentedCode, ListItem, ListItemOpen,
    ThematicBreak,
};

/// The block construct a line opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOpen {
    Header { level: u8 },
    ThematicBreak,
    IndentedCode,
    FencedCode { kind: FenceKind, indent: usize },
    Html,
    ListItem(ListItemOpen),
    Quote { marker_len: usize },
}

impl BlockOpen {
    /// Returns true if a line opening this construct cannot be a lazy
    /// continuation line of a list item or quote.
    ///
    /// List markers are judged separately by the container rules; quote
    /// markers continue a list item lazily.
    pub fn ends_lazy_continuation(&self) -> bool {
        matches!(
            self,
            BlockOpen::Header { .. }
                | BlockOpen::ThematicBreak
                | BlockOpen::FencedCode { .. }
                | BlockOpen::Html
        )
    }
}

/// Detects the block opened by `line`, in priority order.
///
/// `nested` is true inside list item and quote content, where indented
/// code does not exist and list markers may sit at any indentation.
pub fn try_open(line: &[u8], nested: bool) -> Option<BlockOpen> {
    if let Some(level) = Header::level(line) {
        return Some(BlockOpen::Header { level });
    }
    if ThematicBreak::matches(line) {
        return Some(BlockOpen::ThematicBreak);
    }
    if !nested && IndentedCode::is_code_line(line) {
        return Some(BlockOpen::IndentedCode);
    }
    if let Some(sig) = CodeFence::sig(line) {
        return Some(BlockOpen::FencedCode {
            kind: sig.kind,
            indent: sig.indent,
        });
    }
    if HtmlBlock::opens(line) {
        return Some(BlockOpen::Html);
    }
    if let Some(open) = ListItem::open(line)
        && (nested || open.marker_col <= MAX_OPENER_INDENT)
    {
        return Some(BlockOpen::ListItem(open));
    }
    if let Some(marker_len) = BlockQuote::marker_len(line) {
        return Some(BlockOpen::Quote { marker_len });
    }
    None
}
