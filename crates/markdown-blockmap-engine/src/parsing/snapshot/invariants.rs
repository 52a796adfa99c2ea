use crate::parsing::blocks::indent::{is_blank, strip_columns};
use crate::parsing::blocks::kinds::{CodeFence, FenceSig, Header, IndentedCode};
use crate::parsing::blocks::{BlockKind, BlockNode};
use crate::parsing::source::SourceRange;

/// Validates parser output invariants.
///
/// Asserts that:
/// - The root covers exactly `[0, len)` of the source
/// - Every node's ranges are in bounds, sorted and non-overlapping
/// - Children lie within their parent and siblings do not overlap
/// - Node starts never decrease in document order
/// - Text, tag and children match what each kind may carry
/// - A node's text is exactly what its mapped bytes give once the node's
///   own markers and indentation are stripped
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(source: &[u8], root: &BlockNode) {
    let n = source.len();

    assert_eq!(root.kind, BlockKind::Root, "tree is not rooted at Root");
    assert_eq!(
        root.source_map.ranges(),
        &[SourceRange::new(0, n)],
        "root map must cover the whole buffer"
    );

    let mut last_start = 0;
    for node in root.descendants() {
        assert!(
            node.source_map.is_well_formed(n),
            "malformed source map {} on {} (len {})",
            node.source_map,
            node.kind,
            n
        );

        if let Some(start) = node.source_map.start() {
            assert!(
                start >= last_start,
                "{} starts at {} before preceding node at {}",
                node.kind,
                start,
                last_start
            );
            last_start = start;
        }

        check_children(node);
        check_payload(source, node);
    }
}

fn check_children(node: &BlockNode) {
    if !node.kind.is_container() {
        assert!(
            node.children.is_empty(),
            "leaf {} has {} children",
            node.kind,
            node.children.len()
        );
        return;
    }

    let (Some(start), Some(end)) = (node.source_map.start(), node.source_map.end()) else {
        assert!(node.children.is_empty(), "{} without source has children", node.kind);
        return;
    };

    let mut prev_end = start;
    for child in &node.children {
        let (Some(c_start), Some(c_end)) = (child.source_map.start(), child.source_map.end())
        else {
            continue;
        };
        assert!(
            c_start >= prev_end && c_end <= end,
            "{} child {} at {} escapes parent {} or overlaps a sibling",
            node.kind,
            child.kind,
            child.source_map,
            node.source_map
        );
        prev_end = c_end;
    }
}

fn check_payload(source: &[u8], node: &BlockNode) {
    if !node.kind.has_text() {
        assert!(node.text.is_empty(), "{} carries text", node.kind);
    } else {
        let mapped = node.source_map.map_bytes(source);
        let expected = text_from_mapped(node.kind, &mapped);
        assert!(
            node.text == expected,
            "{} text {:?} does not match {:?} rebuilt from its mapped bytes {:?}",
            node.kind,
            String::from_utf8_lossy(&node.text),
            String::from_utf8_lossy(&expected),
            String::from_utf8_lossy(&mapped)
        );
    }

    match node.kind {
        BlockKind::Header => assert!(
            (1..=6).contains(&node.tag),
            "header level {} out of range",
            node.tag
        ),
        BlockKind::ListItem => assert!(
            node.list_marker().is_some(),
            "unknown list marker tag {}",
            node.tag
        ),
        _ => assert_eq!(node.tag, 0, "{} carries tag {}", node.kind, node.tag),
    }
}

/// Splits mapped bytes into line bodies, flagging the lines that were
/// terminated. `\r\n` counts as one terminator.
fn mapped_lines(mapped: &[u8]) -> Vec<(&[u8], bool)> {
    mapped
        .split_inclusive(|&b| b == b'\n')
        .map(|line| match line.strip_suffix(b"\n") {
            Some(body) => (body.strip_suffix(b"\r").unwrap_or(body), true),
            None => (line, false),
        })
        .collect()
}

/// Rebuilds a leaf's text from the bytes its map addresses.
fn text_from_mapped(kind: BlockKind, mapped: &[u8]) -> Vec<u8> {
    let lines = mapped_lines(mapped);
    match kind {
        BlockKind::Paragraph => {
            let bodies: Vec<&[u8]> = lines.iter().map(|&(b, _)| b).collect();
            let Some(first) = bodies.iter().position(|b| !is_blank(b)) else {
                return Vec::new();
            };
            let last = bodies.iter().rposition(|b| !is_blank(b)).unwrap_or(first);
            let trimmed: Vec<&[u8]> = bodies[first..=last]
                .iter()
                .map(|b| {
                    let skip = b.iter().take_while(|&&c| c == b' ' || c == b'\t').count();
                    &b[skip..]
                })
                .collect();
            trimmed.join(&b'\n')
        }
        BlockKind::Header => lines
            .first()
            .map(|&(b, _)| Header::text(b).to_vec())
            .unwrap_or_default(),
        BlockKind::Code => match lines.first().and_then(|&(b, _)| CodeFence::sig(b)) {
            Some(sig) => fenced_text(&lines, sig),
            None => terminated(
                lines
                    .iter()
                    .map(|&(b, t)| (&b[strip_columns(b, IndentedCode::WIDTH)..], t)),
            ),
        },
        BlockKind::Html => terminated(lines.iter().copied()),
        _ => Vec::new(),
    }
}

/// Lines between the opening fence and the closing one, when present.
fn fenced_text(lines: &[(&[u8], bool)], open: FenceSig) -> Vec<u8> {
    let mut inner = lines.get(1..).unwrap_or_default();
    if let Some((&(last, _), rest)) = inner.split_last()
        && CodeFence::closes(open.kind, CodeFence::sig(last))
    {
        inner = rest;
    }
    terminated(
        inner
            .iter()
            .map(|&(b, _)| (&b[strip_columns(b, open.indent)..], true)),
    )
}

fn terminated<'a>(lines: impl Iterator<Item = (&'a [u8], bool)>) -> Vec<u8> {
    let mut out = Vec::new();
    for (body, has_terminator) in lines {
        out.extend_from_slice(body);
        if has_terminator {
            out.push(b'\n');
        }
    }
    out
}
