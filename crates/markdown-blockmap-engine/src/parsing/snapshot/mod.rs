//! # Snapshot Testing Support
//!
//! Utilities for inspecting parsed trees in tests and on the command line.
//!
//! ## Modules
//!
//! - **`outline`**: Renders a tree as a stable, indented text outline, one
//!   node per line with its tag, text and source ranges
//! - **`invariants`**: Runtime checks for parser correctness (root covers
//!   the buffer, ranges in bounds and ordered, children inside parents)
//!
//! ## Testing Strategy
//!
//! Parsing behavior is pinned by outline snapshots of small documents, and
//! every parsed tree in the test suite is run through the invariant checks.

pub mod invariants;
pub mod outline;

pub use invariants::check as invariants;
pub use outline::{OutlineOptions, RangeUnit, outline};
