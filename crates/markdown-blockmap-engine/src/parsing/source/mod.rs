//! Byte-level source primitives: spans, physical lines, source maps and the
//! byte-to-character index.

pub mod chars;
pub mod lines;
pub mod map;
pub mod slice;
pub mod span;

pub use chars::CharacterIndex;
pub use lines::{LineRef, lines_with_spans};
pub use map::{SourceMap, SourceRange};
pub use slice::{preview, slice};
pub use span::Span;
