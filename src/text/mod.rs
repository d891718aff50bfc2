//! Text-building infrastructure for source emission.
//!
//! Two composable layers: [`TextBuffer`], a minimal growable character
//! sink, and [`CodeBuilder`], the indentation- and line-aware layer on top
//! of it. Indentation policy and raw growth strategy are independently
//! testable concerns, so they stay separate. [`split_lines`] is the shared
//! line splitter both layers and the tests rely on.

mod buffer;
mod builder;
mod lines;

pub use buffer::{DEFAULT_CAPACITY, DEFAULT_GROW_FACTOR, DEFAULT_NEWLINE, TextBuffer};
pub use builder::{BracketBlock, CodeBuilder, Indentation, NestingGuard};
pub use lines::{SplitLines, split_lines};
