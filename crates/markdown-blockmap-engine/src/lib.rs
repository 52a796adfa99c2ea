pub mod io;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use parsing::blocks::{BlockKind, BlockNode, ListMarker};
pub use parsing::parse_document;
pub use parsing::snapshot::{OutlineOptions, RangeUnit, outline};
pub use parsing::source::{CharacterIndex, SourceMap, SourceRange};
