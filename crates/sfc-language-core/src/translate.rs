//! Position translation over one virtual-code tree.
//!
//! A stateless query layer: source→generated fans out across every
//! document in the tree (the same source token may appear in several
//! generated positions), generated→source resolves within one document
//! (generated ranges are non-overlapping, so at most one segment matches).
//! All queries are side-effect-free reads of an immutable tree and can run
//! concurrently with each other, including against superseded snapshots.

use crate::virtual_code::{CodeId, VirtualCodeTree};
use serde::{Deserialize, Serialize};
use sfc_source_map::{Capability, FileId};

/// A position in one generated document of the tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedLocation {
    /// Which virtual code the offset belongs to
    pub code: CodeId,
    /// Byte offset in that code's generated text
    pub offset: usize,
}

/// A position in a source document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Which source document
    pub file_id: FileId,
    /// Absolute byte offset in the original text
    pub offset: usize,
}

/// Query layer over one immutable [`VirtualCodeTree`]
#[derive(Debug, Clone, Copy)]
pub struct PositionTranslator<'a> {
    tree: &'a VirtualCodeTree,
}

impl<'a> PositionTranslator<'a> {
    /// Create a translator for one tree
    pub fn new(tree: &'a VirtualCodeTree) -> Self {
        PositionTranslator { tree }
    }

    /// All generated positions for a root-document source offset
    ///
    /// Shorthand for [`Self::to_generated_locations_in`] with
    /// [`FileId::ROOT`].
    pub fn to_generated_locations(
        self,
        source_offset: usize,
        required: Option<Capability>,
    ) -> impl Iterator<Item = GeneratedLocation> + 'a {
        self.to_generated_locations_in(FileId::ROOT, source_offset, required)
    }

    /// All generated positions for a source offset, in generation order
    ///
    /// Walks the whole tree depth-first and each mapping table in order,
    /// so results come back in generation order. Zero results mean the
    /// source position has no live mapping; several mean the source text
    /// was duplicated, and exhaustive callers (rename) must drain the
    /// iterator while best-effort callers take the first. With `required`
    /// set, occurrences lacking that capability are skipped.
    pub fn to_generated_locations_in(
        self,
        file_id: FileId,
        source_offset: usize,
        required: Option<Capability>,
    ) -> impl Iterator<Item = GeneratedLocation> + 'a {
        self.tree.walk().flat_map(move |(id, code)| {
            code.mappings
                .to_generated_offsets(file_id, source_offset, required)
                .map(move |offset| GeneratedLocation {
                    code: id.clone(),
                    offset,
                })
        })
    }

    /// Map a generated offset in one virtual code back to source
    ///
    /// Returns `None` for an unknown code id, an unmapped region, or an
    /// out-of-range offset; callers treat that as "no actionable mapping".
    pub fn to_source_location(
        &self,
        code_id: &str,
        generated_offset: usize,
    ) -> Option<SourceLocation> {
        let code = self.tree.get(code_id)?;
        let (file_id, offset) = code.mappings.to_source_offset(generated_offset)?;
        Some(SourceLocation { file_id, offset })
    }
}
