//! Builder for generated text and its mapping table
//!
//! The writer owns the growing generated text and segment list for one
//! generated document. Verbatim copies from source are recorded as mapped
//! segments; literal text is recorded as nothing at all (an unmapped gap).
//! Consecutive copies that are adjacent in generated coordinates, contiguous
//! in source, and descriptor-equal collapse into one segment, keeping
//! segment count proportional to distinct capability regions rather than to
//! every token copied.

use crate::code_info::CodeInformation;
use crate::segment::{Segment, SourceSpan};
use crate::table::MappingTable;
use crate::types::{CodeRange, FileId};

/// Source origin for a quoted-key emission
#[derive(Debug, Clone, Copy)]
pub struct KeyOrigin {
    /// Source document the key text comes from
    pub file_id: FileId,
    /// Absolute source offset of the key's first character
    pub offset: usize,
    /// Capabilities for the inner (unquoted) characters
    pub info: CodeInformation,
}

impl KeyOrigin {
    /// Origin in the root source document
    pub fn root(offset: usize, info: CodeInformation) -> Self {
        KeyOrigin {
            file_id: FileId::ROOT,
            offset,
            info,
        }
    }
}

/// Accumulates generated text and mapping segments
#[derive(Debug, Default)]
pub struct CodeWriter {
    text: String,
    segments: Vec<Segment>,
}

impl CodeWriter {
    /// Create an empty writer
    pub fn new() -> Self {
        CodeWriter::default()
    }

    /// Current length of the generated text
    pub fn offset(&self) -> usize {
        self.text.len()
    }

    /// Append literal text with no source origin
    ///
    /// No segment is recorded; the stretch is an unmapped gap.
    pub fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Append text copied verbatim from source
    ///
    /// The copy is merged into the previous segment when it continues it
    /// exactly: adjacent in generated coordinates, source-contiguous in the
    /// same file, and with an identical capability descriptor. Mapped and
    /// unmapped stretches never merge.
    pub fn push_source(
        &mut self,
        text: &str,
        file_id: FileId,
        source_start: usize,
        info: CodeInformation,
    ) {
        if text.is_empty() {
            return;
        }
        let generated_start = self.text.len();
        self.text.push_str(text);
        let generated_end = self.text.len();
        let source_end = source_start + text.len();

        if let Some(Segment {
            generated: last_generated,
            source: Some(last_span),
            info: last_info,
        }) = self.segments.last_mut()
        {
            if last_generated.end == generated_start
                && last_span.file_id == file_id
                && last_span.range.end == source_start
                && *last_info == info
            {
                last_generated.end = generated_end;
                last_span.range.end = source_end;
                return;
            }
        }

        self.segments.push(Segment::mapped(
            CodeRange::new(generated_start, generated_end),
            SourceSpan {
                file_id,
                range: CodeRange::new(source_start, source_end),
            },
            info,
        ));
    }

    /// Copy source text wrapped in literal prefix/suffix text
    ///
    /// Emits, in order: the unmapped prefix (if non-empty), the mapped copy,
    /// the unmapped suffix (if non-empty).
    pub fn wrap(
        &mut self,
        prefix: &str,
        text: &str,
        file_id: FileId,
        source_start: usize,
        info: CodeInformation,
        suffix: &str,
    ) {
        if !prefix.is_empty() {
            self.push_text(prefix);
        }
        self.push_source(text, file_id, source_start, info);
        if !suffix.is_empty() {
            self.push_text(suffix);
        }
    }

    /// Emit an identifier as a single-quoted string-literal key
    ///
    /// With an origin, the quotes are unmapped and only the inner
    /// characters map back, so hover and rename resolve to the original
    /// unquoted identifier. Without one, the whole literal is synthetic and
    /// untraceable (used when no real source key exists).
    pub fn push_string_literal_key(&mut self, key: &str, origin: Option<KeyOrigin>) {
        match origin {
            Some(origin) => {
                self.wrap("'", key, origin.file_id, origin.offset, origin.info, "'");
            }
            None => {
                self.push_text("'");
                self.push_text(key);
                self.push_text("'");
            }
        }
    }

    /// Finish writing and produce the text and table
    ///
    /// The table invariant is checked here: a violation is a generator bug,
    /// reported loudly in debug builds and logged in release builds (where
    /// queries degrade to first-match-wins).
    pub fn finish(self) -> (String, MappingTable) {
        let table = MappingTable::from_segments(self.segments);
        if let Err(err) = table.validate() {
            tracing::error!(%err, "generated mapping table violates its invariant");
            debug_assert!(false, "mapping table invariant violated: {err}");
        }
        (self.text, table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code_info::Capability;

    #[test]
    fn test_literal_text_records_no_segment() {
        let mut writer = CodeWriter::new();
        writer.push_text("import {};\n");
        let (text, table) = writer.finish();
        assert_eq!(text, "import {};\n");
        assert!(table.is_empty());
    }

    #[test]
    fn test_contiguous_copies_merge_into_one_segment() {
        let mut writer = CodeWriter::new();
        let info = CodeInformation::all();
        writer.push_source("const x", FileId::ROOT, 10, info);
        writer.push_source(" = 1;", FileId::ROOT, 17, info);
        let (text, table) = writer.finish();

        assert_eq!(text, "const x = 1;");
        assert_eq!(table.len(), 1);
        let segment = &table.segments()[0];
        assert_eq!(segment.generated, CodeRange::new(0, 12));
        assert_eq!(segment.source.unwrap().range, CodeRange::new(10, 22));
    }

    #[test]
    fn test_no_merge_across_descriptor_change() {
        let mut writer = CodeWriter::new();
        writer.push_source("abc", FileId::ROOT, 0, CodeInformation::all());
        writer.push_source("def", FileId::ROOT, 3, CodeInformation::navigation());
        let (_, table) = writer.finish();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_no_merge_across_source_gap() {
        let mut writer = CodeWriter::new();
        let info = CodeInformation::all();
        writer.push_source("abc", FileId::ROOT, 0, info);
        // Source jumps from 3 to 10: not a contiguous copy
        writer.push_source("def", FileId::ROOT, 10, info);
        let (_, table) = writer.finish();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_no_merge_across_intervening_literal() {
        let mut writer = CodeWriter::new();
        let info = CodeInformation::all();
        writer.push_source("abc", FileId::ROOT, 0, info);
        writer.push_text(" ");
        writer.push_source("def", FileId::ROOT, 3, info);
        let (_, table) = writer.finish();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_no_merge_across_files() {
        let mut writer = CodeWriter::new();
        let info = CodeInformation::all();
        writer.push_source("abc", FileId::ROOT, 0, info);
        writer.push_source("def", FileId(1), 3, info);
        let (_, table) = writer.finish();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_wrap() {
        let mut writer = CodeWriter::new();
        writer.wrap("(", "count", FileId::ROOT, 20, CodeInformation::all(), ");");
        let (text, table) = writer.finish();

        assert_eq!(text, "(count);");
        assert_eq!(table.len(), 1);
        let segment = &table.segments()[0];
        assert_eq!(segment.generated, CodeRange::new(1, 6));
        assert_eq!(segment.source.unwrap().range, CodeRange::new(20, 25));
    }

    #[test]
    fn test_string_literal_key_with_origin() {
        // `foo` at source [10, 13) quoted as a key.
        let mut writer = CodeWriter::new();
        let info = CodeInformation::all();
        writer.push_string_literal_key("foo", Some(KeyOrigin::root(10, info)));
        let (text, table) = writer.finish();

        assert_eq!(text, "'foo'");
        assert_eq!(table.len(), 1);
        let segment = &table.segments()[0];
        assert_eq!(segment.generated, CodeRange::new(1, 4));
        assert_eq!(segment.source.unwrap().range, CodeRange::new(10, 13));

        // Quotes do not round-trip; inner characters do.
        assert_eq!(table.to_source_offset(0), None);
        assert_eq!(table.to_source_offset(2), Some((FileId::ROOT, 11)));
        assert_eq!(table.to_source_offset(4), None);
        let generated: Vec<usize> = table.to_generated_offsets(FileId::ROOT, 11, None).collect();
        assert_eq!(generated, vec![2]);
    }

    #[test]
    fn test_string_literal_key_without_origin_is_synthetic() {
        let mut writer = CodeWriter::new();
        writer.push_string_literal_key("default", None);
        let (text, table) = writer.finish();
        assert_eq!(text, "'default'");
        assert!(table.is_empty());
    }

    #[test]
    fn test_empty_copy_is_a_no_op() {
        let mut writer = CodeWriter::new();
        writer.push_source("", FileId::ROOT, 5, CodeInformation::all());
        let (text, table) = writer.finish();
        assert!(text.is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn test_duplicated_source_with_distinct_capabilities() {
        // One source token copied twice with different descriptors: both
        // copies are preserved and the capability filter selects between
        // them.
        let mut writer = CodeWriter::new();
        writer.push_source("count", FileId::ROOT, 20, CodeInformation::verification());
        writer.push_text(": unknown; ");
        writer.push_source("count", FileId::ROOT, 20, CodeInformation::navigation());
        let (_, table) = writer.finish();

        assert_eq!(table.len(), 2);
        assert_eq!(table.to_generated_offsets(FileId::ROOT, 22, None).count(), 2);
        let rename: Vec<usize> = table
            .to_generated_offsets(FileId::ROOT, 22, Some(Capability::Rename))
            .collect();
        assert_eq!(rename, vec![18]);
    }
}
