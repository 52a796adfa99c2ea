use crate::parsing::blocks::indent::opener_rest;

/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// classifier code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: u8 = b'>';

    /// Returns the byte length of the quote marker on `line`, if any.
    ///
    /// The marker is up to three columns of indentation, `>`, and one
    /// optional following space. Only one level is stripped; `>> a`
    /// yields `> a` as the content of the outer quote.
    pub fn marker_len(line: &[u8]) -> Option<usize> {
        let rest = opener_rest(line)?;
        if rest.first() != Some(&Self::PREFIX) {
            return None;
        }
        let indent = line.len() - rest.len();
        let space = usize::from(rest.get(1) == Some(&b' '));
        Some(indent + 1 + space)
    }
}
