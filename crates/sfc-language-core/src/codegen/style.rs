//! Style-section generation.
//!
//! Each style section becomes its own embedded stylesheet document with a
//! single verbatim copy of the section text. Scoping transformations are
//! someone else's job; the mapping just has to make diagnostics, hover,
//! and formatting land on the right original characters.

use crate::document::Section;
use crate::virtual_code::{Language, VirtualCode};
use sfc_source_map::{CodeInformation, CodeWriter, DiagnosticsInfo, FileId};

/// Build the embedded code for one style section
///
/// `index` is the section's ordinal among style sections, which keeps its
/// id stable when other section kinds change.
pub(super) fn generate(index: usize, section: &Section) -> VirtualCode {
    let info = CodeInformation {
        completion: true,
        hover: true,
        semantic_tokens: true,
        format: true,
        rename: None,
        diagnostics: Some(DiagnosticsInfo::reported()),
    };

    let mut writer = CodeWriter::new();
    writer.push_source(&section.text, FileId::ROOT, section.start_offset, info);
    let (text, mappings) = writer.finish();

    VirtualCode::new(format!("style_{index}"), Language::Css, text, mappings)
}
