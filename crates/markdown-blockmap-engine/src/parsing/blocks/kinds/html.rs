use std::sync::OnceLock;

use regex::bytes::Regex;

/// Raw HTML block, opened by a recognised block-level tag.
pub struct HtmlBlock;

impl HtmlBlock {
    /// Block-level tag names that open an HTML block (case-insensitive).
    pub const BLOCK_TAGS: &'static [&'static str] = &[
        "blockquote",
        "del",
        "div",
        "dl",
        "fieldset",
        "figure",
        "form",
        "h1",
        "h2",
        "h3",
        "h4",
        "h5",
        "h6",
        "hr",
        "iframe",
        "ins",
        "math",
        "noscript",
        "ol",
        "p",
        "pre",
        "script",
        "style",
        "table",
        "ul",
    ];

    /// Returns true if `line` starts with a block tag opener or closer, or
    /// an HTML comment.
    pub fn opens(line: &[u8]) -> bool {
        static OPENER: OnceLock<Regex> = OnceLock::new();
        let opener = OPENER.get_or_init(|| {
            let tags = Self::BLOCK_TAGS.join("|");
            Regex::new(&format!(r"(?i)^ {{0,3}}<(?:!--|/?(?:{tags})(?:[\s/>]|$))"))
                .expect("Invalid HTML block regex")
        });
        opener.is_match(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_tags_open() {
        assert!(HtmlBlock::opens(b"<div>some</div>"));
        assert!(HtmlBlock::opens(b"<TABLE class=\"x\">"));
        assert!(HtmlBlock::opens(b"</div>"));
        assert!(HtmlBlock::opens(b"<hr/>"));
        assert!(HtmlBlock::opens(b"<p"));
        assert!(HtmlBlock::opens(b"<!-- note -->"));
    }

    #[test]
    fn inline_tags_do_not_open() {
        assert!(!HtmlBlock::opens(b"<code>42</code>"));
        assert!(!HtmlBlock::opens(b"<span>x</span>"));
        assert!(!HtmlBlock::opens(b"<pre2>"));
        assert!(!HtmlBlock::opens(b"text <div>"));
    }

    #[test]
    fn indentation_limit() {
        assert!(HtmlBlock::opens(b"   <div>"));
        assert!(!HtmlBlock::opens(b"    <div>"));
    }
}
