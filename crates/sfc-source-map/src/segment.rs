//! The atomic mapping unit

use crate::code_info::CodeInformation;
use crate::types::{CodeRange, FileId};
use serde::{Deserialize, Serialize};

/// The source side of a mapped segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpan {
    /// Which source document the range belongs to
    pub file_id: FileId,
    /// Range in absolute original-document byte offsets
    pub range: CodeRange,
}

/// One mapped or unmapped range of generated text
///
/// A mapped segment records that generated text was copied verbatim from
/// `source`, so the two ranges always have equal length and offsets within
/// them correspond one-to-one. `source: None` marks generated-only text
/// (punctuation, imports, synthesized identifiers) that has no origin and
/// cannot round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Range in the generated text
    pub generated: CodeRange,
    /// Origin in source text, if any
    pub source: Option<SourceSpan>,
    /// Capabilities valid for this range
    pub info: CodeInformation,
}

impl Segment {
    /// Create a segment copying source text verbatim
    pub fn mapped(generated: CodeRange, source: SourceSpan, info: CodeInformation) -> Self {
        debug_assert_eq!(
            generated.len(),
            source.range.len(),
            "mapped segments copy source verbatim"
        );
        Segment {
            generated,
            source: Some(source),
            info,
        }
    }

    /// Create a segment for generated-only text
    ///
    /// Unmapped stretches normally carry no segment at all; this is for
    /// regions that must still be accounted for explicitly, such as
    /// placeholder text standing in for a malformed construct.
    pub fn unmapped(generated: CodeRange) -> Self {
        Segment {
            generated,
            source: None,
            info: CodeInformation::none(),
        }
    }

    /// Whether this segment has a source origin
    pub fn is_mapped(&self) -> bool {
        self.source.is_some()
    }

    /// Map a generated offset inside this segment to its source offset
    ///
    /// Returns `None` when the offset is outside the generated range or the
    /// segment is unmapped.
    pub fn generated_to_source(&self, generated: usize) -> Option<(FileId, usize)> {
        let span = self.source.as_ref()?;
        if !self.generated.contains(generated) {
            return None;
        }
        Some((span.file_id, span.range.start + (generated - self.generated.start)))
    }

    /// Map a source offset inside this segment to its generated offset
    ///
    /// Returns `None` when the offset is outside the source range, belongs
    /// to a different file, or the segment is unmapped.
    pub fn source_to_generated(&self, file_id: FileId, source: usize) -> Option<usize> {
        let span = self.source.as_ref()?;
        if span.file_id != file_id || !span.range.contains(source) {
            return None;
        }
        Some(self.generated.start + (source - span.range.start))
    }
}
