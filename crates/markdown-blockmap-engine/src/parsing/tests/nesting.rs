use pretty_assertions::assert_eq;

use super::{at, outline, parse, ranges};
use crate::parsing::blocks::BlockKind;
use crate::parsing::parse_document;

#[test]
fn nested_list_items() {
    let src = "- A\n    - B\n        - C\n    - D\n- E\n";
    let root = parse(src);
    assert_eq!(ranges(&root), vec![(0, 36)]);
    assert_eq!(root.children.len(), 2);

    let a = at(&root, &[0]);
    assert_eq!(a.tag, 2);
    assert_eq!(ranges(a), vec![(0, 32)]);
    assert_eq!(a.children.len(), 3);
    assert_eq!(a.children[0].text_str(), "A");
    assert_eq!(ranges(&a.children[0]), vec![(2, 2)]);

    let b = at(&root, &[0, 1]);
    assert_eq!(b.kind, BlockKind::ListItem);
    assert_eq!(ranges(b), vec![(8, 4), (16, 8)]);
    assert_eq!(at(&root, &[0, 1, 0]).text_str(), "B");

    let c = at(&root, &[0, 1, 1]);
    assert_eq!(ranges(c), vec![(20, 4)]);
    assert_eq!(at(&root, &[0, 1, 1, 0]).text_str(), "C");
    assert_eq!(ranges(at(&root, &[0, 1, 1, 0])), vec![(22, 2)]);

    assert_eq!(ranges(at(&root, &[0, 2])), vec![(28, 4)]);
    assert_eq!(at(&root, &[0, 2, 0]).text_str(), "D");

    assert_eq!(ranges(at(&root, &[1])), vec![(32, 4)]);
    assert_eq!(at(&root, &[1, 0]).text_str(), "E");
}

#[test]
fn six_nested_levels() {
    let src = "+ 1\n    + 2\n        + 3\n            + 4\n                + 5\n                    + 6\n";
    let root = parse(src);
    assert_eq!(root.children.len(), 1);

    let mut item = &root.children[0];
    for level in 1..=6 {
        assert_eq!(item.kind, BlockKind::ListItem);
        let expected_children = if level < 6 { 2 } else { 1 };
        assert_eq!(item.children.len(), expected_children, "level {level}");
        assert_eq!(item.children[0].kind, BlockKind::Paragraph);
        assert_eq!(item.children[0].text_str(), level.to_string());
        if level < 6 {
            item = &item.children[1];
        }
    }
}

#[test]
fn sublist_needs_more_indentation_than_its_item() {
    let root = parse(" + 1\n+ 2\n");
    assert_eq!(root.children.len(), 2);
    assert_eq!(at(&root, &[0, 0]).text_str(), "1");
    assert_eq!(at(&root, &[1, 0]).text_str(), "2");
    assert_eq!(ranges(at(&root, &[0])), vec![(0, 5)]);
    assert_eq!(ranges(at(&root, &[1])), vec![(5, 4)]);
}

#[test]
fn quote_markers_inside_list_item() {
    let root = parse("* B\n>* CCC CC\n>* D\n\n* E\n");
    assert_eq!(root.children.len(), 2);

    let b = at(&root, &[0]);
    assert_eq!(ranges(b), vec![(0, 19)]);
    assert_eq!(b.children[0].text_str(), "B");
    assert_eq!(ranges(&b.children[0]), vec![(2, 2)]);

    let quote = at(&root, &[0, 1]);
    assert_eq!(quote.kind, BlockKind::Quote);
    assert_eq!(ranges(quote), vec![(4, 15)]);
    assert_eq!(quote.children.len(), 2);
    assert_eq!(ranges(at(&root, &[0, 1, 0])), vec![(5, 9)]);
    assert_eq!(at(&root, &[0, 1, 0, 0]).text_str(), "CCC CC");
    assert_eq!(ranges(at(&root, &[0, 1, 1])), vec![(15, 4)]);
    assert_eq!(at(&root, &[0, 1, 1, 0]).text_str(), "D");

    assert_eq!(ranges(at(&root, &[1])), vec![(20, 4)]);
}

// The quote skips the `    ` continuation indent owned by the list item,
// so its two lines map to two ranges.
#[test]
fn quote_in_list_item_has_two_ranges() {
    let root = parse("+ a\n>> 0\n    \"t\"\n");
    let item = at(&root, &[0]);
    assert_eq!(ranges(item), vec![(0, 17)]);
    assert_eq!(item.children[0].text_str(), "a");

    let quote = at(&root, &[0, 1]);
    assert_eq!(quote.kind, BlockKind::Quote);
    assert_eq!(ranges(quote), vec![(4, 5), (13, 4)]);

    let inner = at(&root, &[0, 1, 0]);
    assert_eq!(inner.kind, BlockKind::Quote);
    assert_eq!(ranges(inner), vec![(5, 4), (13, 4)]);

    let p = at(&root, &[0, 1, 0, 0]);
    assert_eq!(p.text_str(), "0\n\"t\"");
    assert_eq!(ranges(p), vec![(7, 2), (13, 4)]);
}

// Historical crash input. The lazily continued `}` line gives the quote a
// third range. Each range is a line the quote claimed minus the list item's
// indent, so the quote never shares bytes with the item's first paragraph.
#[test]
fn empty_quote_in_list_item() {
    let src = "+ a\n              \"a\"\n>> 0\n              \"t\"\n            }";
    let root = parse(src);
    assert_eq!(root.children.len(), 1);

    let item = at(&root, &[0]);
    assert_eq!(ranges(item), vec![(0, 58)]);
    assert_eq!(item.children.len(), 2);
    assert_eq!(item.children[0].kind, BlockKind::Paragraph);
    assert_eq!(item.children[0].text_str(), "a\n\"a\"");

    let quote = at(&root, &[0, 1]);
    assert_eq!(quote.kind, BlockKind::Quote);
    assert_eq!(ranges(quote), vec![(22, 5), (31, 14), (49, 9)]);
    assert_eq!(quote.children.len(), 1);

    let inner = at(&root, &[0, 1, 0]);
    assert_eq!(inner.kind, BlockKind::Quote);
    assert_eq!(inner.children.len(), 1);
    let p = at(&root, &[0, 1, 0, 0]);
    assert_eq!(p.kind, BlockKind::Paragraph);
    assert_eq!(ranges(p), vec![(25, 2), (31, 14), (49, 9)]);
    assert_eq!(p.text_str(), "0\n\"t\"\n}");
}

#[test]
fn leading_blank_line_is_skipped() {
    let root = parse("\nLorem\n\nIpsum\n");
    assert_eq!(ranges(&root), vec![(0, 14)]);
    assert_eq!(ranges(&root.children[0]), vec![(1, 7)]);
    assert_eq!(ranges(&root.children[1]), vec![(8, 6)]);
}

#[test]
fn header_without_trailing_newline() {
    let root = parse("# Hello World");
    assert_eq!(ranges(&root), vec![(0, 13)]);
    assert_eq!(root.children[0].text_str(), "Hello World");
    assert_eq!(ranges(&root.children[0]), vec![(0, 13)]);
}

#[test]
fn list_inside_quote_inside_list() {
    insta::assert_snapshot!(outline("- a\n\n  > - b\n  >   c\n"), @r#"
    Root (tag 0) :0:21
      ListItem (tag 2) :0:21
        Paragraph (tag 0) "a" :2:3
        Quote (tag 0) :7:6;15:6
          ListItem (tag 2) :9:4;17:4
            Paragraph (tag 0) "b\nc" :11:2;19:2
    "#);
}

#[test]
fn deep_quote_nesting_does_not_overflow() {
    let depth = 20_000;
    let src = format!("{}x\n", ">".repeat(depth));
    let root = parse_document(&src);

    let mut node = &root;
    let mut levels = 0;
    while let Some(child) = node.children.first() {
        if child.kind == BlockKind::Quote {
            levels += 1;
        }
        node = child;
    }
    assert_eq!(levels, depth);
    assert_eq!(node.text_str(), "x");
    assert_eq!(root.descendants().count(), depth + 2);
}

#[test]
fn deep_list_nesting_does_not_overflow() {
    let depth = 200;
    let src: String = (0..depth)
        .map(|i| format!("{}- {i}\n", " ".repeat(i * 4)))
        .collect();
    let root = parse(&src);
    let items = root
        .descendants()
        .filter(|n| n.kind == BlockKind::ListItem)
        .count();
    assert_eq!(items, depth);
}
