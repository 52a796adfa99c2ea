//! Parser behaviour tests.
//!
//! Every tree parsed here also goes through the snapshot invariant checks.

mod nesting;

use crate::parsing::{blocks::BlockNode, parse_document, snapshot};

fn parse(src: &str) -> BlockNode {
    let root = parse_document(src);
    snapshot::invariants(src.as_bytes(), &root);
    root
}

/// Follows child indexes down from `root`.
fn at<'a>(root: &'a BlockNode, path: &[usize]) -> &'a BlockNode {
    path.iter().fold(root, |node, &i| &node.children[i])
}

fn ranges(node: &BlockNode) -> Vec<(usize, usize)> {
    node.source_map
        .iter()
        .map(|r| (r.offset, r.length))
        .collect()
}

fn outline(src: &str) -> String {
    snapshot::outline(src.as_bytes(), &parse(src), Default::default())
}
