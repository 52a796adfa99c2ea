use super::span::Span;

/// A reference to a single physical line of the source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef {
    /// Byte span of this line (includes the `\n` / `\r\n` terminator if present).
    pub span: Span,
    /// Byte offset where the line terminator starts (`span.end` when the
    /// line has none, i.e. the unterminated last line).
    pub body_end: usize,
}

impl LineRef {
    /// The line without its terminator.
    #[must_use]
    pub fn body(self) -> Span {
        Span::new(self.span.start, self.body_end)
    }

    /// Returns true if the line carries a terminator in the source.
    #[must_use]
    pub fn is_terminated(self) -> bool {
        self.body_end < self.span.end
    }
}

/// Returns an iterator over the physical lines of `source` with their spans.
///
/// A buffer that does not end in a newline is treated as if one were
/// appended: its last line is yielded normally, but its span stops at
/// `source.len()` so no synthetic byte is ever addressed.
pub fn lines_with_spans(source: &[u8]) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    std::iter::from_fn(move || {
        if offset >= source.len() {
            return None;
        }
        let start = offset;
        let end = match source[start..].iter().position(|&b| b == b'\n') {
            Some(i) => start + i + 1,
            None => source.len(),
        };
        offset = end;

        let mut body_end = end;
        if body_end > start && source[body_end - 1] == b'\n' {
            body_end -= 1;
            if body_end > start && source[body_end - 1] == b'\r' {
                body_end -= 1;
            }
        }

        Some(LineRef {
            span: Span { start, end },
            body_end,
        })
    })
}
