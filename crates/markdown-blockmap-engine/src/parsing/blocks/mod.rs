//! # Block Parsing
//!
//! Region-based block parsing with source maps.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line of a content region is
//!    classified into a `LineClass` holding local facts (blank status,
//!    indentation, the construct it opens, any list marker)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` claims runs of
//!    classified lines as blocks. Containers carve a child region out of
//!    their lines (`containers`) which is pushed onto a work stack and parsed
//!    the same way
//!
//! ## Modules
//!
//! - **`types`**: Core types (`BlockNode`, `BlockKind`)
//! - **`kinds`**: Block-specific types with owned delimiters (Header, ListItem, BlockQuote, ...)
//! - **`content`**: `ContentLine` / `ContentRegion`, the prefix-stripped line windows
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`open`**: `try_open` dispatch for detecting block openers
//! - **`containers`**: line claiming for list items and quotes
//! - **`text`**: text normalization for leaf blocks
//! - **`builder`**: `BlockBuilder` work-stack tree construction
//!
//! ## Key Invariants
//!
//! - Nesting depth is unbounded and never consumes call stack
//! - A node's source map is the union of the content spans of the lines it
//!   claimed, so container markers owned by an ancestor are never included
//! - Fenced code blocks are raw zones: no block parsing inside

pub mod builder;
pub mod classify;
pub mod containers;
pub mod content;
pub mod indent;
pub mod kinds;
pub mod open;
pub mod text;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use content::{ContentLine, ContentRegion};
pub use kinds::ListMarker;
pub use types::{BlockKind, BlockNode, Walk};
