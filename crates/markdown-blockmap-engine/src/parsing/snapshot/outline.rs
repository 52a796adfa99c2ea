use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::parsing::blocks::BlockNode;
use crate::parsing::source::{CharacterIndex, SourceMap};

/// Unit in which outline ranges are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeUnit {
    /// Byte offsets into the source buffer.
    #[default]
    Bytes,
    /// UTF-8 character offsets.
    Characters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineOptions {
    /// Append each node's source ranges.
    pub source_maps: bool,
    pub range_unit: RangeUnit,
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            source_maps: true,
            range_unit: RangeUnit::Bytes,
        }
    }
}

/// Renders `root` one node per line, indented two spaces per level.
///
/// Each line reads `Kind (tag N)`, then the escaped text for text-bearing
/// kinds, then ` :offset:length;...` when source maps are enabled.
pub fn outline(source: &[u8], root: &BlockNode, options: OutlineOptions) -> String {
    let index = match options.range_unit {
        RangeUnit::Characters if options.source_maps => Some(CharacterIndex::new(source)),
        _ => None,
    };

    let mut out = String::new();
    for (depth, node) in root.walk() {
        let _ = write!(
            out,
            "{:indent$}{} (tag {})",
            "",
            node.kind,
            node.tag,
            indent = depth * 2
        );
        if node.kind.has_text() {
            let _ = write!(out, " {:?}", node.text_str());
        }
        if options.source_maps && !node.source_map.is_empty() {
            let map: SourceMap = match &index {
                Some(index) => index.to_characters(&node.source_map),
                None => node.source_map.clone(),
            };
            let _ = write!(out, " :{map}");
        }
        out.push('\n');
    }
    out
}
