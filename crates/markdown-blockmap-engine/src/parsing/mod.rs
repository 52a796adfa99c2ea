pub mod blocks;
pub mod snapshot;
pub mod source;

#[cfg(test)]
mod tests;

use blocks::{BlockBuilder, BlockNode};

/// Parses `source` into a block tree rooted at a `Root` node.
///
/// Parsing is total: every byte buffer yields a tree, and every node carries
/// the byte ranges of `source` it was derived from.
pub fn parse_document(source: impl AsRef<[u8]>) -> BlockNode {
    let source = source.as_ref();
    let builder = BlockBuilder::new(source);
    let root = builder.build();
    log::debug!(
        "parsed {} bytes into {} nodes",
        source.len(),
        root.descendants().count()
    );
    root
}
