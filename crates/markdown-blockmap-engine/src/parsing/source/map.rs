use std::fmt;

use super::span::Span;

/// A contiguous run of the source buffer, as `offset` + `length`.
///
/// # Invariants
///
/// - `offset + length <= buffer length` for the buffer the range was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SourceRange {
    pub offset: usize,
    pub length: usize,
}

impl SourceRange {
    pub fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    /// Exclusive end offset.
    #[must_use]
    pub fn end(self) -> usize {
        self.offset + self.length
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.length == 0
    }
}

impl From<Span> for SourceRange {
    fn from(sp: Span) -> Self {
        Self {
            offset: sp.start,
            length: sp.len(),
        }
    }
}

impl From<SourceRange> for Span {
    fn from(r: SourceRange) -> Self {
        Span {
            start: r.offset,
            end: r.end(),
        }
    }
}

impl fmt::Display for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.offset, self.length)
    }
}

/// The ordered set of disjoint byte ranges a node was derived from.
///
/// A map is a plain list from the start: blank-line gaps and container
/// markers owned by an enclosing node split a node into several ranges.
///
/// # Invariants
///
/// - ranges are sorted ascending by offset and pairwise non-overlapping
/// - no range is empty, except the lone `0:0` range of an empty buffer's root
/// - adjacent ranges are never contiguous (they would have been merged)
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct SourceMap(Vec<SourceRange>);

impl SourceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// A map of exactly one range, kept even when the range is empty.
    pub fn single(range: SourceRange) -> Self {
        Self(vec![range])
    }

    /// Builds a map from spans in document order, merging contiguous ones.
    pub fn from_spans<I>(spans: I) -> Self
    where
        I: IntoIterator<Item = Span>,
    {
        let mut map = Self::new();
        for sp in spans {
            map.push(sp.into());
        }
        map
    }

    /// Appends a range, extending the last range when the two are contiguous.
    ///
    /// Empty ranges are dropped.
    pub fn push(&mut self, range: SourceRange) {
        if range.is_empty() {
            return;
        }
        match self.0.last_mut() {
            Some(last) if last.end() == range.offset => last.length += range.length,
            _ => self.0.push(range),
        }
    }

    /// Appends every range of `other`, merging at the seam when contiguous.
    pub fn merge_continuous(&mut self, other: &SourceMap) {
        for r in &other.0 {
            self.push(*r);
        }
    }

    #[must_use]
    pub fn ranges(&self) -> &[SourceRange] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SourceRange> {
        self.0.iter()
    }

    /// First byte addressed by the map.
    #[must_use]
    pub fn start(&self) -> Option<usize> {
        self.0.first().map(|r| r.offset)
    }

    /// One past the last byte addressed by the map.
    #[must_use]
    pub fn end(&self) -> Option<usize> {
        self.0.last().map(|r| r.end())
    }

    /// Total number of bytes addressed.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.0.iter().map(|r| r.length).sum()
    }

    /// Concatenates the bytes of `source` addressed by this map.
    ///
    /// Ranges reaching past the end of `source` are clipped.
    #[must_use]
    pub fn map_bytes(&self, source: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.byte_len());
        for r in &self.0 {
            let start = r.offset.min(source.len());
            let end = r.end().min(source.len());
            out.extend_from_slice(&source[start..end]);
        }
        out
    }

    /// Checks bounds, ordering and non-overlap against a buffer of `len` bytes.
    #[must_use]
    pub fn is_well_formed(&self, len: usize) -> bool {
        let in_bounds = self.0.iter().all(|r| r.end() <= len);
        let ordered = self.0.windows(2).all(|w| w[0].end() <= w[1].offset);
        in_bounds && ordered
    }
}

impl From<SourceRange> for SourceMap {
    fn from(range: SourceRange) -> Self {
        let mut map = Self::new();
        map.push(range);
        map
    }
}

impl FromIterator<SourceRange> for SourceMap {
    fn from_iter<I: IntoIterator<Item = SourceRange>>(iter: I) -> Self {
        let mut map = Self::new();
        for r in iter {
            map.push(r);
        }
        map
    }
}

impl<'a> IntoIterator for &'a SourceMap {
    type Item = &'a SourceRange;
    type IntoIter = std::slice::Iter<'a, SourceRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for SourceMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, r) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{r}")?;
        }
        Ok(())
    }
}
