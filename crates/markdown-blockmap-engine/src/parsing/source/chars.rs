use super::map::{SourceMap, SourceRange};

/// Byte-to-character position cache for a UTF-8 buffer.
///
/// `starts[i]` is the number of characters that begin before byte `i`, so
/// any byte range converts to a character range in O(1). Continuation bytes
/// (`0b10xx_xxxx`) never start a character; invalid sequences therefore
/// count each stray lead byte as one character.
#[derive(Debug, Clone)]
pub struct CharacterIndex {
    starts: Vec<usize>,
}

impl CharacterIndex {
    pub fn new(source: &[u8]) -> Self {
        let mut starts = Vec::with_capacity(source.len() + 1);
        let mut count = 0usize;
        starts.push(0);
        for &b in source {
            if b & 0xC0 != 0x80 {
                count += 1;
            }
            starts.push(count);
        }
        Self { starts }
    }

    /// Number of characters in the indexed buffer.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.starts.last().copied().unwrap_or(0)
    }

    /// Character offset of a byte offset (clamped to the buffer end).
    #[must_use]
    pub fn char_offset(&self, byte: usize) -> usize {
        let last = self.starts.len() - 1;
        self.starts[byte.min(last)]
    }

    /// Converts one byte range into a character range.
    #[must_use]
    pub fn to_character_range(&self, range: SourceRange) -> SourceRange {
        let start = self.char_offset(range.offset);
        let end = self.char_offset(range.end());
        SourceRange::new(start, end - start)
    }

    /// Converts a byte-range map into a character-range map.
    #[must_use]
    pub fn to_characters(&self, map: &SourceMap) -> SourceMap {
        match map.ranges() {
            [only] => SourceMap::single(self.to_character_range(*only)),
            ranges => ranges.iter().map(|r| self.to_character_range(*r)).collect(),
        }
    }
}
