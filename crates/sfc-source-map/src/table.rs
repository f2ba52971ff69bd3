//! Ordered segment list with bidirectional lookup

use crate::code_info::Capability;
use crate::error::MappingError;
use crate::segment::Segment;
use crate::types::FileId;
use serde::{Deserialize, Serialize};

/// The mapping table for one generated document
///
/// Segments are stored in increasing generated-range order and are pairwise
/// non-overlapping in generated coordinates, so a generated offset belongs
/// to at most one segment. Source ranges may overlap freely across
/// segments: the same source token can legitimately appear in several
/// generated positions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingTable {
    segments: Vec<Segment>,
}

impl MappingTable {
    /// Build a table from segments already in generated order
    ///
    /// [`crate::CodeWriter`] is the usual producer; it emits segments in
    /// generated order by construction.
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        MappingTable { segments }
    }

    /// The segments in generated order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the table has no segments
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Check the table invariant: sorted, non-overlapping generated ranges
    ///
    /// A violation indicates a generator bug. Queries still work against an
    /// invalid table by taking the first match in table order.
    pub fn validate(&self) -> Result<(), MappingError> {
        for pair in self.segments.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.generated.start < prev.generated.start {
                return Err(MappingError::OutOfOrder {
                    prev: prev.generated,
                    next: next.generated,
                });
            }
            if next.generated.start < prev.generated.end {
                return Err(MappingError::Overlap {
                    first: prev.generated,
                    second: next.generated,
                });
            }
        }
        Ok(())
    }

    /// Map a generated offset back to its source offset
    ///
    /// Because generated ranges are non-overlapping, at most one segment
    /// can contain the offset. Returns `None` for unmapped or out-of-range
    /// offsets. Should the invariant be violated, the earliest containing
    /// segment in table order wins.
    pub fn to_source_offset(&self, generated: usize) -> Option<(FileId, usize)> {
        let mut idx = self
            .segments
            .partition_point(|s| s.generated.start <= generated);
        let mut result = None;
        while idx > 0 {
            idx -= 1;
            let segment = &self.segments[idx];
            if segment.generated.contains(generated) {
                result = Some(segment);
            } else {
                // Sorted table: no earlier segment can reach this offset
                break;
            }
        }
        result.and_then(|s| s.generated_to_source(generated))
    }

    /// All generated offsets a source offset maps to, in table order
    ///
    /// Yields zero, one, or many results: zero when the source position has
    /// no live mapping, many when the source text was duplicated into
    /// multiple generated positions. Callers needing exhaustive results
    /// (rename) must consume the whole iterator; best-effort callers take
    /// the first.
    ///
    /// With `required` set, segments lacking that capability are skipped.
    pub fn to_generated_offsets(
        &self,
        file_id: FileId,
        source: usize,
        required: Option<Capability>,
    ) -> impl Iterator<Item = usize> + '_ {
        self.segments.iter().filter_map(move |segment| {
            if let Some(capability) = required {
                if !segment.info.enables(capability) {
                    return None;
                }
            }
            segment.source_to_generated(file_id, source)
        })
    }
}
