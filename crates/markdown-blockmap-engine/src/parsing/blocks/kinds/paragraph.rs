use crate::parsing::blocks::open::BlockOpen;

/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default leaf block
/// when no other block opener matches.
pub struct Paragraph;

impl Paragraph {
    /// Returns true if a line opening `open` ends a running paragraph.
    ///
    /// Indented code never interrupts a paragraph; the line is a
    /// continuation instead.
    pub fn interrupted_by(open: &BlockOpen) -> bool {
        !matches!(open, BlockOpen::IndentedCode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::open::try_open;

    fn interrupts(line: &str, nested: bool) -> bool {
        try_open(line.as_bytes(), nested).is_some_and(|o| Paragraph::interrupted_by(&o))
    }

    #[test]
    fn openers_interrupt() {
        assert!(interrupts("# H", false));
        assert!(interrupts("---", false));
        assert!(interrupts("> q", false));
        assert!(interrupts("- item", false));
        assert!(interrupts("<div>", false));
        assert!(interrupts("```", false));
    }

    #[test]
    fn indented_code_does_not_interrupt() {
        assert!(!interrupts("    code", false));
    }

    #[test]
    fn plain_text_does_not_interrupt() {
        assert!(!interrupts("dolor sit amet", false));
    }
}
