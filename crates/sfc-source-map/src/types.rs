//! Core types for position mapping

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique identifier for a source document feeding generated text
///
/// A single generated document is usually produced from one source document,
/// but cross-file constructs (e.g. re-exported types) can make several
/// source files contribute to the same generated text. Segments from
/// different files are never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileId(pub usize);

impl FileId {
    /// The source document that triggered the generation pass
    pub const ROOT: FileId = FileId(0);
}

/// A half-open byte range `[start, end)` in one coordinate space
///
/// Ranges are always expressed in byte offsets. Whether the coordinate
/// space is the original document or generated text depends on where the
/// range is used; a [`crate::Segment`] carries one of each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeRange {
    /// Start offset (inclusive)
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
}

impl CodeRange {
    /// Create a range from start and end offsets
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "range start must not exceed end");
        CodeRange { start, end }
    }

    /// Length of the range in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the range covers zero bytes
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether the range contains the given offset
    ///
    /// Half-open semantics: the end offset is not contained.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Whether two ranges share at least one offset
    pub fn intersects(&self, other: &CodeRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for CodeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
