use super::span::Span;

/// Returns the bytes of `source` covered by `sp`, clipped to the buffer.
#[must_use]
pub fn slice(source: &[u8], sp: Span) -> &[u8] {
    let end = sp.end.min(source.len());
    let start = sp.start.min(end);
    &source[start..end]
}

/// Lossy UTF-8 text for a span, truncated to `max` bytes with "..." suffix if needed.
///
/// Used for human-readable outline output.
pub fn preview(source: &[u8], sp: Span, max: usize) -> String {
    let bytes = slice(source, sp);
    let mut s = String::from_utf8_lossy(&bytes[..bytes.len().min(max)]).into_owned();
    if bytes.len() > max {
        s.push_str("...");
    }
    s
}
