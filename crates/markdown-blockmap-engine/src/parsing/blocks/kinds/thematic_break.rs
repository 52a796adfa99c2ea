use crate::parsing::blocks::indent::opener_rest;

/// Horizontal rule (`---`, `* * *`, `___`).
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKERS: [u8; 3] = [b'-', b'*', b'_'];
    pub const MIN_MARKERS: usize = 3;

    /// Returns true if `line` consists solely of three or more of the same
    /// marker character, optionally separated by spaces or tabs.
    pub fn matches(line: &[u8]) -> bool {
        let Some(rest) = opener_rest(line) else {
            return false;
        };
        let Some(&marker) = rest.first() else {
            return false;
        };
        if !Self::MARKERS.contains(&marker) {
            return false;
        }

        let mut count = 0;
        for &b in rest {
            match b {
                b' ' | b'\t' => {}
                b if b == marker => count += 1,
                _ => return false,
            }
        }
        count >= Self::MIN_MARKERS
    }
}
