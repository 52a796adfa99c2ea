use crate::parsing::blocks::indent::{opener_rest, trim_whitespace};

/// ATX heading (`# Title`).
pub struct Header;

impl Header {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Heading level (1-6) if `line` opens an ATX heading.
    ///
    /// The `#` run must be followed by a space or tab; `#hashtag` is text.
    pub fn level(line: &[u8]) -> Option<u8> {
        let rest = opener_rest(line)?;
        let hashes = rest.iter().take_while(|&&b| b == Self::MARKER).count();
        if hashes == 0 || hashes > Self::MAX_LEVEL {
            return None;
        }
        match rest.get(hashes) {
            Some(b' ' | b'\t') => u8::try_from(hashes).ok(),
            _ => None,
        }
    }

    /// Heading text: the line without the `#` run, surrounding whitespace
    /// and an optional closing `#` sequence.
    pub fn text(line: &[u8]) -> &[u8] {
        let Some(rest) = opener_rest(line) else {
            return trim_whitespace(line);
        };
        let hashes = rest.iter().take_while(|&&b| b == Self::MARKER).count();
        let body = trim_whitespace(&rest[hashes..]);

        let closing = body.iter().rev().take_while(|&&b| b == Self::MARKER).count();
        if closing == body.len() {
            return &body[..0];
        }
        let before = &body[..body.len() - closing];
        if closing > 0 && matches!(before.last(), Some(b' ' | b'\t')) {
            trim_whitespace(before)
        } else {
            body
        }
    }
}
