//! Error types for mapping tables

use crate::types::CodeRange;
use thiserror::Error;

/// Invariant violations in a produced mapping table
///
/// These indicate a generator bug, never bad user input: translation
/// queries tolerate unmapped and out-of-range offsets by returning empty
/// results instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// Segments are not sorted by generated start offset
    #[error("segments out of order in generated coordinates: {prev} then {next}")]
    OutOfOrder { prev: CodeRange, next: CodeRange },

    /// Two segments share generated offsets
    #[error("overlapping generated ranges: {first} and {second}")]
    Overlap { first: CodeRange, second: CodeRange },
}
