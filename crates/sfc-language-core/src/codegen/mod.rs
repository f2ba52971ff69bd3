//! Virtual-code generation.
//!
//! [`generate`] walks one [`SourceDocument`] snapshot and emits the full
//! tree of generated documents: the root script, an embedded code for the
//! template's expressions (with event handlers nested one level deeper),
//! and one embedded code per style section.
//!
//! Generation is a pure function of the snapshot and the options: no I/O,
//! no shared state, and it never fails. Structurally broken sections
//! degrade to partial output (verbatim copies or unmapped placeholder
//! text) so the rest of the document stays fully serviceable.

mod script;
mod style;
mod template;

use crate::document::SourceDocument;
use crate::options::GenerateOptions;
use crate::virtual_code::VirtualCodeTree;

/// Generate the virtual-code tree for one document snapshot
pub fn generate(document: &SourceDocument, options: &GenerateOptions) -> VirtualCodeTree {
    tracing::debug!(uri = document.uri(), "generating virtual code tree");

    let mut root = script::generate(document, options);

    if let Some(section) = document.template() {
        root.insert_embedded(template::generate(section, options));
    }
    for (index, section) in document.styles().iter().enumerate() {
        root.insert_embedded(style::generate(index, section));
    }

    VirtualCodeTree::new(root)
}
