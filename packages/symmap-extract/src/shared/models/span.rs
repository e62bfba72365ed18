//! Source location types
//!
//! A `Span` is a byte range into the exact text that was scanned; a
//! `Location` is the human-readable line/column used by diagnostics.

use serde::{Deserialize, Serialize};

/// Single location in source code (1-based line, 0-based column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Location of the first byte of a buffer
    pub fn start() -> Self {
        Self::new(1, 0)
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::start()
    }
}

/// Byte span into the scanned source text
///
/// Invariant: `start <= end` and both are valid offsets into the source the
/// span was produced from, so consumers can re-slice the literal declaration
/// text on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Empty span at offset zero
    pub fn zero() -> Self {
        Self::new(0, 0)
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Re-extract the literal text this span covers
    ///
    /// Returns `None` if the span does not fall on valid offsets of `source`,
    /// which only happens when the span is applied to a different buffer than
    /// the one it was extracted from.
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start..self.end)
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::zero()
    }
}
